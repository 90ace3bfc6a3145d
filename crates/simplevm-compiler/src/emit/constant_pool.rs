//! CONSTANT_POOL chunk payload.
//!
//! Layout (all integers big-endian):
//!
//! ```text
//! count: u32
//! entry*: tag: u8, then
//!   TAG_INT: value: i64
//!   TAG_STR: len: u32, bytes: [u8; len] (UTF-8)
//! ```

use indexmap::IndexSet;

use simplevm_bytecode::{ChunkKind, MAX_PAYLOAD_LEN, Module, ModuleBuilder, ModuleError};

use crate::fold::{Constant, TypedValue};

use super::EmitError;

pub const TAG_INT: u8 = 0;
pub const TAG_STR: u8 = 1;

/// Index of a constant in the pool.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct ConstId(u32);

impl ConstId {
    pub fn new(index: u32) -> Self {
        Self(index)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ConstId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

fn encoded_len(constant: &Constant) -> usize {
    match constant {
        Constant::Int(_) => 1 + 8,
        Constant::Str(s) => 1 + 4 + s.len(),
    }
}

/// Builds the constant pool, deduplicating in insertion order.
#[derive(Debug, Default)]
pub struct ConstantPoolBuilder {
    constants: IndexSet<Constant>,
}

impl ConstantPoolBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get or create the id for a constant.
    pub fn intern(&mut self, constant: &Constant) -> ConstId {
        if let Some(index) = self.constants.get_index_of(constant) {
            return ConstId(index as u32);
        }
        let (index, _) = self.constants.insert_full(constant.clone());
        ConstId(index as u32)
    }

    /// Intern a known value; `None` means the value must be computed at
    /// runtime.
    pub fn intern_folded(&mut self, value: &TypedValue) -> Option<ConstId> {
        value.constant().map(|c| self.intern(c))
    }

    /// Id of an already interned constant.
    pub fn get(&self, constant: &Constant) -> Option<ConstId> {
        self.constants
            .get_index_of(constant)
            .map(|index| ConstId(index as u32))
    }

    pub fn len(&self) -> usize {
        self.constants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constants.is_empty()
    }

    /// Check that the pool fits the chunk format.
    pub fn validate(&self) -> Result<(), EmitError> {
        if self.constants.len() > u32::MAX as usize {
            return Err(EmitError::TooManyConstants(self.constants.len()));
        }
        let size = 4 + self.constants.iter().map(encoded_len).sum::<usize>();
        if size > MAX_PAYLOAD_LEN {
            return Err(ModuleError::PayloadTooLarge(size).into());
        }
        Ok(())
    }

    /// Encode the payload. Call [`validate`](Self::validate) first.
    pub fn emit(&self) -> Vec<u8> {
        let size = 4 + self.constants.iter().map(encoded_len).sum::<usize>();
        let mut out = Vec::with_capacity(size);
        out.extend_from_slice(&(self.constants.len() as u32).to_be_bytes());
        for constant in &self.constants {
            match constant {
                Constant::Int(v) => {
                    out.push(TAG_INT);
                    out.extend_from_slice(&v.to_be_bytes());
                }
                Constant::Str(s) => {
                    out.push(TAG_STR);
                    out.extend_from_slice(&(s.len() as u32).to_be_bytes());
                    out.extend_from_slice(s.as_bytes());
                }
            }
        }
        out
    }

    /// Validate, encode and push the payload as the CONSTANT_POOL chunk.
    pub fn write_into(&self, builder: &mut ModuleBuilder) -> Result<(), EmitError> {
        self.validate()?;
        builder.push(ChunkKind::ConstantPool, self.emit())?;
        Ok(())
    }
}

/// A decoded constant pool.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConstantPool {
    constants: Vec<Constant>,
}

impl ConstantPool {
    /// Decode a CONSTANT_POOL payload.
    pub fn from_payload(bytes: &[u8]) -> Result<Self, EmitError> {
        let mut reader = Reader { bytes, offset: 0 };
        let count = reader.u32()? as usize;

        // Every entry takes at least 5 bytes; don't trust `count` for capacity.
        let mut constants = Vec::with_capacity(count.min(bytes.len() / 5));
        for _ in 0..count {
            let offset = reader.offset;
            let constant = match reader.u8()? {
                TAG_INT => Constant::Int(reader.i64()?),
                TAG_STR => {
                    let len = reader.u32()? as usize;
                    let start = reader.offset;
                    let raw = reader.take(len)?;
                    let text = std::str::from_utf8(raw)
                        .map_err(|_| EmitError::InvalidUtf8 { offset: start })?;
                    Constant::Str(text.to_string())
                }
                tag => return Err(EmitError::UnknownTag { offset, tag }),
            };
            constants.push(constant);
        }

        let rest = bytes.len() - reader.offset;
        if rest != 0 {
            return Err(EmitError::TrailingBytes(rest));
        }
        Ok(Self { constants })
    }

    /// Decode the module's CONSTANT_POOL chunk, or an empty pool if it has
    /// none.
    pub fn from_module(module: &Module) -> Result<Self, EmitError> {
        match module.chunk(ChunkKind::ConstantPool) {
            Some(chunk) => Self::from_payload(chunk.payload()),
            None => Ok(Self::default()),
        }
    }

    pub fn get(&self, id: ConstId) -> Option<&Constant> {
        self.constants.get(id.get() as usize)
    }

    pub fn len(&self) -> usize {
        self.constants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constants.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ConstId, &Constant)> {
        self.constants
            .iter()
            .enumerate()
            .map(|(i, c)| (ConstId(i as u32), c))
    }
}

struct Reader<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl<'a> Reader<'a> {
    fn take(&mut self, len: usize) -> Result<&'a [u8], EmitError> {
        let available = self.bytes.len() - self.offset;
        if available < len {
            return Err(EmitError::Truncated {
                offset: self.offset,
                needed: len,
                available,
            });
        }
        let slice = &self.bytes[self.offset..self.offset + len];
        self.offset += len;
        Ok(slice)
    }

    fn array<const N: usize>(&mut self) -> Result<[u8; N], EmitError> {
        let mut out = [0; N];
        out.copy_from_slice(self.take(N)?);
        Ok(out)
    }

    fn u8(&mut self) -> Result<u8, EmitError> {
        Ok(self.array::<1>()?[0])
    }

    fn u32(&mut self) -> Result<u32, EmitError> {
        Ok(u32::from_be_bytes(self.array()?))
    }

    fn i64(&mut self) -> Result<i64, EmitError> {
        Ok(i64::from_be_bytes(self.array()?))
    }
}
