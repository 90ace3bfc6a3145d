//! Chunked module container.
//!
//! A module is a sequence of self-describing chunks, each written as
//! `type_id: i32, length: i32, payload: [u8; length]` with big-endian
//! integers. FILE_HEADER, when present, is always the first chunk.

mod chunk;
mod config;
mod constants;
mod dump;
mod header;
mod module;

#[cfg(test)]
mod header_tests;

pub use chunk::{Chunk, ChunkKind};
pub use config::DecodeConfig;
pub use constants::{CHUNK_PREFIX_SIZE, HEADER_SIZE, MAGIC, MAX_PAYLOAD_LEN, VERSION};
pub use dump::dump;
pub use header::FileHeader;
pub use module::{Module, ModuleBuilder, ModuleError};
