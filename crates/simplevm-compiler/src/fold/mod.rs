//! Constant folding.
//!
//! The [`Evaluator`] assigns every node a [`TypedValue`]: a category plus a
//! compile-time constant when one can be computed. Operator nodes evaluate
//! their operands depth-first, then run the operator's type rule and fold
//! rule. Evaluation is a pure query over the tree; nothing is mutated.
//!
//! [`fold_constants`] builds on it to rewrite a tree, replacing arithmetic
//! subtrees with known values by literals.

mod config;
mod error;
mod evaluator;
mod expr;
mod pass;
mod trace;
mod value;

#[cfg(test)]
mod value_tests;

pub use config::{FoldConfig, FoldPolicy};
pub use error::FoldError;
pub use evaluator::{Evaluate, Evaluator};
pub use expr::{Expr, Variable};
pub use pass::fold_constants;
pub use trace::{NoopTracer, PrintTracer, Tracer, Verbosity};
pub use value::{Constant, Folded, TypedValue};
