//! Inference-level type categories.
//!
//! Coarser than [`TypeName`](super::TypeName): operator rules decide
//! applicability by category without committing to an exact primitive.

use std::fmt;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeCategory {
    /// Whole numbers of any width.
    Integral,
    /// Text.
    StringLike,
    /// Nothing is known statically.
    Unknown,
}

impl TypeCategory {
    pub fn is_integral(self) -> bool {
        self == Self::Integral
    }

    pub fn is_known(self) -> bool {
        self != Self::Unknown
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Integral => "integral",
            Self::StringLike => "string-like",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for TypeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
