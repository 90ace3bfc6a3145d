//! Per-kind type rules and fold rules.
//!
//! Both rules take operands that are already evaluated. They are computed
//! independently: for PLUS/MINUS the type rule may say UNKNOWN while the fold
//! rule still produces a value tagged INTEGRAL.

use std::fmt;

use crate::fold::{Constant, FoldError, TypedValue};
use crate::type_system::TypeCategory;

use super::OperatorKind;

/// Which rule was queried.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RuleKind {
    Type,
    Fold,
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Type => f.write_str("type rule"),
            Self::Fold => f.write_str("fold rule"),
        }
    }
}

impl OperatorKind {
    /// Result category of applying this operator.
    pub fn infer_type(self, operands: &[TypedValue]) -> Result<TypeCategory, FoldError> {
        match self {
            Self::Plus | Self::Minus => {
                let [lhs, rhs] = self.binary(operands)?;
                if lhs.category().is_integral() && rhs.category().is_integral() {
                    Ok(TypeCategory::Integral)
                } else {
                    Ok(TypeCategory::Unknown)
                }
            }
            // The target operand is not inspected.
            Self::Assignment => {
                let [value, _target] = self.binary(operands)?;
                Ok(value.category())
            }
            Self::Arrow | Self::FunctionCall => Err(self.not_implemented(RuleKind::Type)),
        }
    }

    /// Compile-time value of applying this operator.
    ///
    /// Known only if every consulted operand is known.
    pub fn fold(self, operands: &[TypedValue]) -> Result<TypedValue, FoldError> {
        match self {
            Self::Plus => self.fold_integral(operands, i64::wrapping_add),
            Self::Minus => self.fold_integral(operands, i64::wrapping_sub),
            Self::Assignment => {
                let [value, _target] = self.binary(operands)?;
                Ok(value.clone())
            }
            Self::Arrow | Self::FunctionCall => Err(self.not_implemented(RuleKind::Fold)),
        }
    }

    pub(crate) fn not_implemented(self, rule: RuleKind) -> FoldError {
        FoldError::NotImplemented { kind: self, rule }
    }

    fn binary(self, operands: &[TypedValue]) -> Result<[&TypedValue; 2], FoldError> {
        match operands {
            [lhs, rhs] => Ok([lhs, rhs]),
            _ => Err(FoldError::Arity {
                kind: self,
                expected: 2,
                actual: operands.len(),
            }),
        }
    }

    fn fold_integral(
        self,
        operands: &[TypedValue],
        op: fn(i64, i64) -> i64,
    ) -> Result<TypedValue, FoldError> {
        let [lhs, rhs] = self.binary(operands)?;
        let (Some(a), Some(b)) = (lhs.constant(), rhs.constant()) else {
            return Ok(TypedValue::unknown(TypeCategory::Integral));
        };
        let result = op(self.as_i64(a)?, self.as_i64(b)?);
        Ok(TypedValue::new_known(Constant::Int(result), TypeCategory::Integral))
    }

    fn as_i64(self, constant: &Constant) -> Result<i64, FoldError> {
        constant.as_int().ok_or_else(|| FoldError::NotNumeric {
            kind: self,
            value: constant.clone(),
        })
    }
}
