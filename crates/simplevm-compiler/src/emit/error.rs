//! Constant pool emission and read-back errors.

use simplevm_bytecode::ModuleError;

#[derive(Debug, thiserror::Error)]
pub enum EmitError {
    #[error("too many constants: {0} (max 4294967295)")]
    TooManyConstants(usize),
    #[error(
        "truncated constant pool at offset {offset}: need {needed} bytes, {available} available"
    )]
    Truncated {
        offset: usize,
        needed: usize,
        available: usize,
    },
    #[error("unknown constant tag {tag} at offset {offset}")]
    UnknownTag { offset: usize, tag: u8 },
    #[error("invalid UTF-8 in string constant at offset {offset}")]
    InvalidUtf8 { offset: usize },
    #[error("{0} trailing bytes after constant pool")]
    TrailingBytes(usize),
    #[error(transparent)]
    Module(#[from] ModuleError),
}
