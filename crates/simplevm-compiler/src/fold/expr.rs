//! A minimal expression tree implementing [`Evaluate`].
//!
//! The parser owns the real AST; this one exists so the folding core can be
//! driven on its own (tests, tools). Function bodies are opaque [`Expr::Lambda`]
//! units and calls are [`Expr::Call`] nodes, neither of which folds.

use std::fmt;

use crate::LookupError;
use crate::operators::OperatorKind;
use crate::type_system::{TypeCategory, TypeName};

use super::error::FoldError;
use super::evaluator::{Evaluate, Evaluator};
use super::trace::Tracer;
use super::value::{Constant, TypedValue};

/// Variable reference, optionally with a declared type.
#[derive(Clone, PartialEq, Eq, Debug, serde::Serialize, serde::Deserialize)]
pub struct Variable {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ty: Option<TypeName>,
}

impl Variable {
    pub fn category(&self) -> TypeCategory {
        self.ty.map_or(TypeCategory::Unknown, TypeName::category)
    }
}

/// Serialized externally tagged, e.g.
/// `{"apply": {"op": "PLUS", "operands": [{"literal": 1}, {"variable": {"name": "x"}}]}}`.
#[derive(Clone, PartialEq, Eq, Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expr {
    Literal(Constant),
    Variable(Variable),
    /// Infix operator application. For ASSIGNMENT, operand 0 is the value and
    /// operand 1 the target.
    Apply {
        op: OperatorKind,
        operands: Vec<Expr>,
    },
    /// `callee(args)`, synthesized as FUNCTION_CALL.
    Call { callee: Box<Expr>, args: Vec<Expr> },
    /// `(params) => body`, the ARROW form.
    Lambda { params: Vec<String>, body: Box<Expr> },
}

impl Expr {
    pub fn int(v: i64) -> Self {
        Self::Literal(Constant::Int(v))
    }

    pub fn str(s: &str) -> Self {
        Self::Literal(Constant::Str(s.to_string()))
    }

    /// Untyped variable reference.
    pub fn var(name: &str) -> Self {
        Self::Variable(Variable {
            name: name.to_string(),
            ty: None,
        })
    }

    /// Variable reference with a declared type symbol.
    pub fn typed_var(name: &str, ty: &str) -> Result<Self, LookupError> {
        Ok(Self::Variable(Variable {
            name: name.to_string(),
            ty: Some(TypeName::resolve(ty)?),
        }))
    }

    pub fn binary(op: OperatorKind, lhs: Expr, rhs: Expr) -> Self {
        Self::Apply {
            op,
            operands: vec![lhs, rhs],
        }
    }

    pub fn add(lhs: Expr, rhs: Expr) -> Self {
        Self::binary(OperatorKind::Plus, lhs, rhs)
    }

    pub fn sub(lhs: Expr, rhs: Expr) -> Self {
        Self::binary(OperatorKind::Minus, lhs, rhs)
    }

    /// `target = value`.
    pub fn assign(target: Expr, value: Expr) -> Self {
        Self::binary(OperatorKind::Assignment, value, target)
    }

    pub fn call(callee: Expr, args: Vec<Expr>) -> Self {
        Self::Call {
            callee: Box::new(callee),
            args,
        }
    }

    pub fn lambda(params: &[&str], body: Expr) -> Self {
        Self::Lambda {
            params: params.iter().map(|p| p.to_string()).collect(),
            body: Box::new(body),
        }
    }

    /// Operator kind of an interior node.
    pub fn operator(&self) -> Option<OperatorKind> {
        match self {
            Self::Literal(_) | Self::Variable(_) => None,
            Self::Apply { op, .. } => Some(*op),
            Self::Call { .. } => Some(OperatorKind::FunctionCall),
            Self::Lambda { .. } => Some(OperatorKind::Arrow),
        }
    }

    /// Static category from the operator's type rule (or the leaf itself).
    pub(crate) fn infer<T: Tracer>(
        &self,
        evaluator: &mut Evaluator<T>,
    ) -> Result<TypeCategory, FoldError> {
        match self {
            Self::Apply { op, operands } => evaluator.infer_apply(*op, operands),
            Self::Call { args, .. } => evaluator.infer_apply(OperatorKind::FunctionCall, args),
            Self::Lambda { .. } => evaluator.infer_apply::<Expr>(OperatorKind::Arrow, &[]),
            Self::Literal(_) | Self::Variable(_) => Ok(self.evaluate(evaluator)?.category()),
        }
    }
}

impl Evaluate for Expr {
    fn evaluate<T: Tracer>(
        &self,
        evaluator: &mut Evaluator<T>,
    ) -> Result<TypedValue, FoldError> {
        match self {
            Self::Literal(c) => Ok(evaluator.leaf(TypedValue::known(c.clone()))),
            Self::Variable(v) => Ok(evaluator.leaf(TypedValue::unknown(v.category()))),
            Self::Apply { op, operands } => evaluator.apply(*op, operands),
            Self::Call { args, .. } => evaluator.apply(OperatorKind::FunctionCall, args),
            Self::Lambda { .. } => evaluator.apply::<Expr>(OperatorKind::Arrow, &[]),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(c) => write!(f, "{c}"),
            Self::Variable(v) => match v.ty {
                Some(ty) => write!(f, "{}:{ty}", v.name),
                None => f.write_str(&v.name),
            },
            Self::Apply { op, operands } => {
                write!(f, "({}", op.symbol())?;
                for operand in operands {
                    write!(f, " {operand}")?;
                }
                f.write_str(")")
            }
            Self::Call { callee, args } => {
                write!(f, "(call {callee}")?;
                for arg in args {
                    write!(f, " {arg}")?;
                }
                f.write_str(")")
            }
            Self::Lambda { params, body } => {
                write!(f, "(=> ({}) {body})", params.join(" "))
            }
        }
    }
}
