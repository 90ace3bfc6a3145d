//! Errors raised while folding.
//!
//! None of these are user-input errors: each one means the caller asked to
//! fold something that cannot be folded.

use crate::operators::{OperatorKind, RuleKind};
use crate::type_system::TypeCategory;

use super::Constant;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FoldError {
    #[error("{rule} not implemented for {kind}")]
    NotImplemented { kind: OperatorKind, rule: RuleKind },

    #[error("{kind} expects {expected} operands, got {actual}")]
    Arity {
        kind: OperatorKind,
        expected: usize,
        actual: usize,
    },

    #[error("{kind} cannot fold non-numeric operand {value}")]
    NotNumeric { kind: OperatorKind, value: Constant },

    #[error("type mismatch: {kind} is not defined over ({})", join(.operands))]
    TypeMismatch {
        kind: OperatorKind,
        operands: Vec<TypeCategory>,
    },
}

fn join(categories: &[TypeCategory]) -> String {
    categories
        .iter()
        .map(|c| c.name())
        .collect::<Vec<_>>()
        .join(", ")
}
