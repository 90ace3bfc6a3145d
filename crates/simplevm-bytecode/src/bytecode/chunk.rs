//! Chunk kinds and the chunk record.

use std::fmt;

/// Kind tag of a module chunk.
///
/// The discriminator is written to disk. Values are never reused or
/// reassigned; a new kind takes the next free integer.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[repr(i32)]
pub enum ChunkKind {
    /// Container identification (magic, version). Must be first.
    FileHeader = 0,
    /// Literal constants referenced elsewhere by index.
    ConstantPool = 1,
    /// Label to offset mapping for control transfer.
    JumpTable = 2,
    /// The opcode stream.
    Instructions = 3,
    /// Call-frame layout metadata.
    StackFrames = 4,
    /// Global slot to name mapping.
    GlobalVariablesMap = 5,
    /// Position and resumption pointers (debugging, relocation).
    InstructionPointers = 6,
}

impl ChunkKind {
    /// All kinds in discriminator order.
    pub const ALL: [ChunkKind; 7] = [
        Self::FileHeader,
        Self::ConstantPool,
        Self::JumpTable,
        Self::Instructions,
        Self::StackFrames,
        Self::GlobalVariablesMap,
        Self::InstructionPointers,
    ];

    /// Resolve a wire discriminator.
    pub fn from_type_id(id: i32) -> Option<Self> {
        match id {
            0 => Some(Self::FileHeader),
            1 => Some(Self::ConstantPool),
            2 => Some(Self::JumpTable),
            3 => Some(Self::Instructions),
            4 => Some(Self::StackFrames),
            5 => Some(Self::GlobalVariablesMap),
            6 => Some(Self::InstructionPointers),
            _ => None,
        }
    }

    /// Wire discriminator.
    pub fn type_id(self) -> i32 {
        self as i32
    }

    /// Canonical upper-snake name, as used in dumps and on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Self::FileHeader => "FILE_HEADER",
            Self::ConstantPool => "CONSTANT_POOL",
            Self::JumpTable => "JUMP_TABLE",
            Self::Instructions => "INSTRUCTIONS",
            Self::StackFrames => "STACK_FRAMES",
            Self::GlobalVariablesMap => "GLOBAL_VARIABLES_MAP",
            Self::InstructionPointers => "INSTRUCTION_POINTERS",
        }
    }

    /// Parse a kind name, case-insensitive, accepting `-` for `_`.
    pub fn from_name(name: &str) -> Option<Self> {
        let normalized = name.to_ascii_uppercase().replace('-', "_");
        Self::ALL.into_iter().find(|k| k.name() == normalized)
    }

    pub fn is_header(self) -> bool {
        matches!(self, Self::FileHeader)
    }
}

impl fmt::Display for ChunkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One kind-tagged section of a module.
///
/// The declared length is always the payload length; it is not stored
/// separately.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Chunk {
    kind: ChunkKind,
    payload: Vec<u8>,
}

impl Chunk {
    pub fn new(kind: ChunkKind, payload: impl Into<Vec<u8>>) -> Self {
        Self {
            kind,
            payload: payload.into(),
        }
    }

    pub fn kind(&self) -> ChunkKind {
        self.kind
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Payload length in bytes.
    pub fn len(&self) -> usize {
        self.payload.len()
    }

    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }

    pub fn into_payload(self) -> Vec<u8> {
        self.payload
    }
}
