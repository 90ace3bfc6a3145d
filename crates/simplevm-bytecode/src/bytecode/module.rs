//! Module assembly, encoding and decoding.
//!
//! A [`Module`] is built once through [`ModuleBuilder`] during code
//! generation, then serialized with [`Module::to_bytes`]. Loading goes through
//! [`Module::from_bytes`], which reads every chunk back in order. Payloads,
//! the FILE_HEADER one included, are opaque here; [`Module::file_header`]
//! decodes the header on demand.

use std::io;
use std::path::Path;

use super::chunk::{Chunk, ChunkKind};
use super::config::DecodeConfig;
use super::header::FileHeader;
use super::{CHUNK_PREFIX_SIZE, HEADER_SIZE, MAX_PAYLOAD_LEN, VERSION};

/// Read a big-endian i32 from bytes at the given offset.
#[inline]
fn read_i32_be(bytes: &[u8], offset: usize) -> i32 {
    i32::from_be_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}

/// Borrow `len` bytes starting at `offset`, or report how short the input is.
fn take(bytes: &[u8], offset: usize, len: usize) -> Result<&[u8], ModuleError> {
    let available = bytes.len().saturating_sub(offset);
    if available < len {
        return Err(ModuleError::Truncated {
            offset,
            needed: len,
            available,
        });
    }
    Ok(&bytes[offset..offset + len])
}

/// Module encode/decode error.
#[derive(Debug, thiserror::Error)]
pub enum ModuleError {
    #[error("unknown chunk type id {0}")]
    UnknownChunkType(i32),
    #[error("truncated chunk at offset {offset}: need {needed} bytes, {available} available")]
    Truncated {
        offset: usize,
        needed: usize,
        available: usize,
    },
    #[error("negative chunk length {length} at offset {offset}")]
    NegativeLength { offset: usize, length: i32 },
    #[error("duplicate {0} chunk")]
    DuplicateChunk(ChunkKind),
    #[error("FILE_HEADER must be the first chunk")]
    HeaderNotFirst,
    #[error("file header is {0} bytes (expected {HEADER_SIZE})")]
    HeaderSize(usize),
    #[error("invalid magic: expected SVMB")]
    InvalidMagic,
    #[error("unsupported version: {0} (expected {VERSION})")]
    UnsupportedVersion(u32),
    #[error("chunk payload too large: {0} bytes (max {MAX_PAYLOAD_LEN})")]
    PayloadTooLarge(usize),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// A compiled module: an ordered list of chunks.
///
/// Immutable once built or loaded. When a FILE_HEADER chunk is present it is
/// the first chunk.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Module {
    chunks: Vec<Chunk>,
}

impl Module {
    /// Decode a module with the default (closed) reader.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ModuleError> {
        Self::from_bytes_with(bytes, &DecodeConfig::default())
    }

    /// Decode a module.
    pub fn from_bytes_with(bytes: &[u8], config: &DecodeConfig) -> Result<Self, ModuleError> {
        let mut chunks: Vec<Chunk> = Vec::new();
        let mut offset = 0;

        while offset < bytes.len() {
            let prefix = take(bytes, offset, CHUNK_PREFIX_SIZE)?;
            let type_id = read_i32_be(prefix, 0);
            let length = read_i32_be(prefix, 4);

            let kind = ChunkKind::from_type_id(type_id);
            if kind.is_none() && !config.skip_unknown {
                return Err(ModuleError::UnknownChunkType(type_id));
            }
            if length < 0 {
                return Err(ModuleError::NegativeLength { offset, length });
            }

            let payload_start = offset + CHUNK_PREFIX_SIZE;
            let payload = take(bytes, payload_start, length as usize)?;
            offset = payload_start + payload.len();

            let Some(kind) = kind else {
                continue;
            };

            if chunks.iter().any(|c| c.kind() == kind) {
                return Err(ModuleError::DuplicateChunk(kind));
            }
            if kind.is_header() && !chunks.is_empty() {
                return Err(ModuleError::HeaderNotFirst);
            }
            chunks.push(Chunk::new(kind, payload));
        }

        Ok(Self { chunks })
    }

    /// Read and decode a module file with the default reader.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ModuleError> {
        Self::from_path_with(path, &DecodeConfig::default())
    }

    /// Read and decode a module file.
    pub fn from_path_with(
        path: impl AsRef<Path>,
        config: &DecodeConfig,
    ) -> Result<Self, ModuleError> {
        let bytes = std::fs::read(path)?;
        Self::from_bytes_with(&bytes, config)
    }

    /// Encode every chunk in order.
    pub fn to_bytes(&self) -> Vec<u8> {
        let size = self
            .chunks
            .iter()
            .map(|c| CHUNK_PREFIX_SIZE + c.len())
            .sum();
        let mut out = Vec::with_capacity(size);
        for chunk in &self.chunks {
            // Builder and decoder both cap payloads at MAX_PAYLOAD_LEN.
            out.extend_from_slice(&chunk.kind().type_id().to_be_bytes());
            out.extend_from_slice(&(chunk.len() as i32).to_be_bytes());
            out.extend_from_slice(chunk.payload());
        }
        out
    }

    /// Encode and write to a file.
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<(), ModuleError> {
        std::fs::write(path, self.to_bytes())?;
        Ok(())
    }

    /// Decode and validate the FILE_HEADER payload, if the module has one.
    pub fn file_header(&self) -> Result<Option<FileHeader>, ModuleError> {
        self.chunk(ChunkKind::FileHeader)
            .map(|chunk| FileHeader::from_bytes(chunk.payload()))
            .transpose()
    }

    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    /// Find the chunk of the given kind.
    pub fn chunk(&self, kind: ChunkKind) -> Option<&Chunk> {
        self.chunks.iter().find(|c| c.kind() == kind)
    }

    /// Number of chunks.
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }
}

/// Incremental module assembly, one chunk per concern.
///
/// The FILE_HEADER chunk is emitted first by [`finish`](Self::finish)
/// regardless of when it was supplied; every other chunk keeps push order.
#[derive(Debug)]
pub struct ModuleBuilder {
    header: Option<Vec<u8>>,
    chunks: Vec<Chunk>,
}

impl Default for ModuleBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ModuleBuilder {
    /// Builder with a current-version FILE_HEADER.
    pub fn new() -> Self {
        Self {
            header: Some(FileHeader::default().to_bytes().to_vec()),
            chunks: Vec::new(),
        }
    }

    /// Builder without a FILE_HEADER.
    pub fn headerless() -> Self {
        Self {
            header: None,
            chunks: Vec::new(),
        }
    }

    /// Replace the FILE_HEADER.
    pub fn set_header(&mut self, header: FileHeader) -> &mut Self {
        self.header = Some(header.to_bytes().to_vec());
        self
    }

    /// Append a chunk.
    ///
    /// Each kind may be pushed once. A FILE_HEADER payload is kept as given.
    pub fn push(
        &mut self,
        kind: ChunkKind,
        payload: impl Into<Vec<u8>>,
    ) -> Result<&mut Self, ModuleError> {
        let payload = payload.into();
        if payload.len() > MAX_PAYLOAD_LEN {
            return Err(ModuleError::PayloadTooLarge(payload.len()));
        }
        if self.contains(kind) {
            return Err(ModuleError::DuplicateChunk(kind));
        }

        if kind.is_header() {
            self.header = Some(payload);
        } else {
            self.chunks.push(Chunk::new(kind, payload));
        }
        Ok(self)
    }

    pub fn contains(&self, kind: ChunkKind) -> bool {
        if kind.is_header() {
            return self.header.is_some();
        }
        self.chunks.iter().any(|c| c.kind() == kind)
    }

    /// Finalize the module.
    pub fn finish(self) -> Module {
        let mut chunks = Vec::with_capacity(self.chunks.len() + 1);
        if let Some(header) = self.header {
            chunks.push(Chunk::new(ChunkKind::FileHeader, header));
        }
        chunks.extend(self.chunks);

        Module { chunks }
    }
}
