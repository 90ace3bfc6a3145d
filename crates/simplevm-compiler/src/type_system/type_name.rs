//! The type registry: closed set of primitive surface types.

use std::fmt;
use std::str::FromStr;

use crate::LookupError;

use super::TypeCategory;

/// Primitive surface type, as written in source.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeName {
    Int8,
    String,
}

impl TypeName {
    pub const ALL: [TypeName; 2] = [Self::Int8, Self::String];

    /// Textual form used for parsing and diagnostics.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Int8 => "int8",
            Self::String => "string",
        }
    }

    pub fn category(self) -> TypeCategory {
        match self {
            Self::Int8 => TypeCategory::Integral,
            Self::String => TypeCategory::StringLike,
        }
    }

    /// Whether `symbol` names a type. Exact, case-sensitive match.
    pub fn is_valid_type(symbol: &str) -> bool {
        Self::ALL.iter().any(|t| t.symbol() == symbol)
    }

    /// Resolve a type symbol.
    pub fn resolve(symbol: &str) -> Result<Self, LookupError> {
        Self::ALL
            .into_iter()
            .find(|t| t.symbol() == symbol)
            .ok_or_else(|| LookupError::UnknownType(symbol.to_string()))
    }
}

impl FromStr for TypeName {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::resolve(s)
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
