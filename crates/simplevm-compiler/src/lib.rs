//! SimpleVM compiler core.
//!
//! This crate provides the semantic half of the compiler:
//! - `type_system` - primitive type registry and inference categories
//! - `operators` - operator catalog (lexical queries, type and fold rules)
//! - `fold` - constant-folding evaluator and fold pass
//! - `emit` - constant pool payload for the module container
//!
//! Tokenizing and parsing live outside this crate; anything implementing
//! [`fold::Evaluate`] can be folded.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod emit;
pub mod fold;
pub mod operators;
pub mod type_system;

pub use emit::{ConstId, ConstantPool, ConstantPoolBuilder, EmitError, TAG_INT, TAG_STR};
pub use fold::{
    Constant, Evaluate, Evaluator, Expr, FoldConfig, FoldError, FoldPolicy, Folded, NoopTracer,
    PrintTracer, Tracer, TypedValue, Variable, Verbosity, fold_constants,
};
pub use operators::{OperatorKind, RuleKind};
pub use type_system::{TypeCategory, TypeName};

/// Registry lookup failure: a symbol that names nothing.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("unknown type '{0}'")]
    UnknownType(String),
    #[error("unknown operator symbol '{0}'")]
    UnknownOperator(String),
}
