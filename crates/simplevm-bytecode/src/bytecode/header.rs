//! FILE_HEADER payload (8 bytes).
//!
//! Layout:
//! - 0-3: magic `b"SVMB"`
//! - 4-7: format version (u32, big-endian)

use super::module::ModuleError;
use super::{HEADER_SIZE, MAGIC, VERSION};

/// Decoded FILE_HEADER payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FileHeader {
    pub magic: [u8; 4],
    pub version: u32,
}

impl Default for FileHeader {
    fn default() -> Self {
        Self {
            magic: MAGIC,
            version: VERSION,
        }
    }
}

impl FileHeader {
    /// Decode and validate a FILE_HEADER payload.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ModuleError> {
        if bytes.len() != HEADER_SIZE {
            return Err(ModuleError::HeaderSize(bytes.len()));
        }

        let header = Self {
            magic: [bytes[0], bytes[1], bytes[2], bytes[3]],
            version: u32::from_be_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]),
        };

        if !header.validate_magic() {
            return Err(ModuleError::InvalidMagic);
        }
        if !header.validate_version() {
            return Err(ModuleError::UnsupportedVersion(header.version));
        }
        Ok(header)
    }

    /// Encode to the 8-byte payload.
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut bytes = [0u8; HEADER_SIZE];
        bytes[0..4].copy_from_slice(&self.magic);
        bytes[4..8].copy_from_slice(&self.version.to_be_bytes());
        bytes
    }

    pub fn validate_magic(&self) -> bool {
        self.magic == MAGIC
    }

    pub fn validate_version(&self) -> bool {
        self.version == VERSION
    }
}
