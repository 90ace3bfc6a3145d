//! The constant-folding evaluator.

use crate::operators::{OperatorKind, RuleKind};
use crate::type_system::TypeCategory;

use super::config::{FoldConfig, FoldPolicy};
use super::error::FoldError;
use super::expr::Expr;
use super::trace::{NoopTracer, Tracer};
use super::value::TypedValue;

/// An AST node that can be evaluated to a typed value.
///
/// Leaves return their own value through [`Evaluator::leaf`]; operator
/// applications hand their kind and operands to [`Evaluator::apply`].
pub trait Evaluate {
    fn evaluate<T: Tracer>(&self, evaluator: &mut Evaluator<T>) -> Result<TypedValue, FoldError>;
}

/// Drives operator rules over a tree.
///
/// The evaluator holds no per-tree state, so evaluating the same node twice
/// gives the same result.
pub struct Evaluator<T: Tracer = NoopTracer> {
    config: FoldConfig,
    tracer: T,
}

impl Default for Evaluator<NoopTracer> {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator<NoopTracer> {
    pub fn new() -> Self {
        Self::with_config(FoldConfig::default())
    }

    pub fn with_config(config: FoldConfig) -> Self {
        Self::with_tracer(config, NoopTracer)
    }
}

impl<T: Tracer> Evaluator<T> {
    pub fn with_tracer(config: FoldConfig, tracer: T) -> Self {
        Self { config, tracer }
    }

    pub fn config(&self) -> &FoldConfig {
        &self.config
    }

    pub fn tracer(&self) -> &T {
        &self.tracer
    }

    pub fn into_tracer(self) -> T {
        self.tracer
    }

    /// Evaluate a node.
    pub fn evaluate<N: Evaluate>(&mut self, node: &N) -> Result<TypedValue, FoldError> {
        node.evaluate(self)
    }

    /// Report a leaf value and hand it back.
    pub fn leaf(&mut self, value: TypedValue) -> TypedValue {
        self.tracer.trace_leaf(&value);
        value
    }

    /// Evaluate an operator application.
    ///
    /// Operands are evaluated left to right before either rule runs. Kinds
    /// without rules fail before any operand is touched, so ARROW bodies and
    /// call arguments are never evaluated.
    pub fn apply<N: Evaluate>(
        &mut self,
        kind: OperatorKind,
        operands: &[N],
    ) -> Result<TypedValue, FoldError> {
        if !kind.has_rules() {
            return Err(kind.not_implemented(RuleKind::Type));
        }

        self.tracer.trace_enter(kind);
        let result = self.apply_inner(kind, operands);
        if let Err(err) = &result {
            self.tracer.trace_failure(kind, err);
        }
        result
    }

    fn apply_inner<N: Evaluate>(
        &mut self,
        kind: OperatorKind,
        operands: &[N],
    ) -> Result<TypedValue, FoldError> {
        let values = operands
            .iter()
            .map(|operand| operand.evaluate(self))
            .collect::<Result<Vec<_>, _>>()?;

        let verdict = kind.infer_type(&values)?;
        self.check_policy(kind, verdict, &values)?;
        let result = kind.fold(&values)?;

        self.tracer.trace_apply(kind, &values, verdict, &result);
        Ok(result)
    }

    /// Static category of an expression's root.
    pub fn infer(&mut self, expr: &Expr) -> Result<TypeCategory, FoldError> {
        expr.infer(self)
    }

    /// Run only the type rule of an application (operands still evaluate
    /// fully).
    pub fn infer_apply<N: Evaluate>(
        &mut self,
        kind: OperatorKind,
        operands: &[N],
    ) -> Result<TypeCategory, FoldError> {
        if !kind.has_rules() {
            return Err(kind.not_implemented(RuleKind::Type));
        }
        let values = operands
            .iter()
            .map(|operand| operand.evaluate(self))
            .collect::<Result<Vec<_>, _>>()?;
        kind.infer_type(&values)
    }

    fn check_policy(
        &self,
        kind: OperatorKind,
        verdict: TypeCategory,
        values: &[TypedValue],
    ) -> Result<(), FoldError> {
        if self.config.policy != FoldPolicy::Strict || verdict.is_known() {
            return Ok(());
        }
        if values.iter().all(TypedValue::is_known) {
            return Err(FoldError::TypeMismatch {
                kind,
                operands: values.iter().map(TypedValue::category).collect(),
            });
        }
        Ok(())
    }
}
