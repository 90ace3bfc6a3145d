//! Payload emission for the module container.
//!
//! The constant pool is the literal sink for folded values: code generation
//! interns every known value and loads it by [`ConstId`].

mod constant_pool;
mod error;


pub use constant_pool::{ConstId, ConstantPool, ConstantPoolBuilder, TAG_INT, TAG_STR};
pub use error::EmitError;
