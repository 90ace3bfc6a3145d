//! Operator catalog.
//!
//! Each [`OperatorKind`] carries its lexical symbol and lexer flags
//! (`kind.rs`) plus an arity-checked type rule and fold rule (`rules.rs`).
//! Rules are dispatched by exhaustive `match`, so a new kind does not compile
//! until its rules are written.

mod kind;
mod rules;

#[cfg(test)]
mod rules_tests;

pub use kind::OperatorKind;
pub use rules::RuleKind;
