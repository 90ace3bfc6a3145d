//! Chunked binary module format for SimpleVM.
//!
//! This crate contains:
//! - Chunk kinds and their stable wire discriminators
//! - Module assembly, encoding and decoding
//! - The FILE_HEADER payload layout
//! - A human-readable dump for debugging

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod bytecode;
pub mod colors;

pub use bytecode::{
    CHUNK_PREFIX_SIZE, Chunk, ChunkKind, DecodeConfig, FileHeader, HEADER_SIZE, MAGIC,
    MAX_PAYLOAD_LEN, Module, ModuleBuilder, ModuleError, VERSION, dump,
};
pub use colors::Colors;
