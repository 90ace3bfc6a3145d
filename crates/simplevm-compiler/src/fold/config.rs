//! Evaluator configuration.

/// What to do when an arithmetic fold sees known operands the type rule
/// rejects (e.g. `1 + "a"`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FoldPolicy {
    /// Attempt the integer cast anyway; fail only if a value is not numeric.
    #[default]
    Lenient,
    /// Fail with a type mismatch as soon as the type rule says UNKNOWN.
    Strict,
}

/// Configuration for the [`Evaluator`](super::Evaluator).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FoldConfig {
    pub(crate) policy: FoldPolicy,
}

impl FoldConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fold policy.
    pub fn policy(mut self, value: FoldPolicy) -> Self {
        self.policy = value;
        self
    }

    pub fn fold_policy(&self) -> FoldPolicy {
        self.policy
    }
}
