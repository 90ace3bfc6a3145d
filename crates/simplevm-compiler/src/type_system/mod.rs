//! Primitive surface types and inference categories.

mod category;
mod type_name;


pub use category::TypeCategory;
pub use type_name::TypeName;
