//! Compile-time values.

use std::fmt;

use crate::type_system::TypeCategory;

/// A value known at compile time.
#[derive(Clone, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum Constant {
    Int(i64),
    Str(String),
}

impl Constant {
    pub fn category(&self) -> TypeCategory {
        match self {
            Self::Int(_) => TypeCategory::Integral,
            Self::Str(_) => TypeCategory::StringLike,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            Self::Str(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Int(_) => None,
            Self::Str(s) => Some(s),
        }
    }
}

impl From<i64> for Constant {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<&str> for Constant {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for Constant {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Str(s) => write!(f, "{s:?}"),
        }
    }
}

/// Whether a compile-time value exists.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Folded {
    Known(Constant),
    Unknown,
}

impl Folded {
    pub fn is_known(&self) -> bool {
        matches!(self, Self::Known(_))
    }

    pub fn constant(&self) -> Option<&Constant> {
        match self {
            Self::Known(c) => Some(c),
            Self::Unknown => None,
        }
    }
}

/// Result of evaluating a node: always a category, and a constant only when
/// the whole value is known.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct TypedValue {
    value: Folded,
    category: TypeCategory,
}

impl TypedValue {
    pub fn new(value: Folded, category: TypeCategory) -> Self {
        Self { value, category }
    }

    /// Known constant, tagged with the constant's own category.
    pub fn known(constant: Constant) -> Self {
        let category = constant.category();
        Self::new_known(constant, category)
    }

    /// Known constant with an explicit category.
    pub fn new_known(constant: Constant, category: TypeCategory) -> Self {
        Self::new(Folded::Known(constant), category)
    }

    pub fn unknown(category: TypeCategory) -> Self {
        Self::new(Folded::Unknown, category)
    }

    pub fn value(&self) -> &Folded {
        &self.value
    }

    pub fn category(&self) -> TypeCategory {
        self.category
    }

    pub fn constant(&self) -> Option<&Constant> {
        self.value.constant()
    }

    pub fn is_known(&self) -> bool {
        self.value.is_known()
    }

    pub fn into_constant(self) -> Option<Constant> {
        match self.value {
            Folded::Known(c) => Some(c),
            Folded::Unknown => None,
        }
    }
}

impl fmt::Display for TypedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Folded::Known(c) => write!(f, "{c}: {}", self.category),
            Folded::Unknown => write!(f, "?: {}", self.category),
        }
    }
}
