/// Magic bytes at the start of the FILE_HEADER payload.
pub const MAGIC: [u8; 4] = *b"SVMB";

/// Current container format version.
pub const VERSION: u32 = 1;

/// Size of the FILE_HEADER payload: magic (4) + version (4).
pub const HEADER_SIZE: usize = 8;

/// Size of the per-chunk prefix: type id (4) + length (4).
pub const CHUNK_PREFIX_SIZE: usize = 8;

/// Largest payload a chunk can declare (length is a signed 32-bit field).
pub const MAX_PAYLOAD_LEN: usize = i32::MAX as usize;
