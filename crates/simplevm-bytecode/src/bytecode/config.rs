//! Reader configuration.

/// Configuration for [`Module`](super::Module) decoding.
///
/// The default reader is closed: an unrecognized chunk type id fails the
/// whole decode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DecodeConfig {
    pub(crate) skip_unknown: bool,
}

impl DecodeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Skip chunks with unrecognized type ids using their declared length.
    ///
    /// This is a format revision on top of the closed reader: modules
    /// written by a newer writer load, minus the chunks this reader does
    /// not know about.
    pub fn skip_unknown(mut self, value: bool) -> Self {
        self.skip_unknown = value;
        self
    }

    pub fn skips_unknown(&self) -> bool {
        self.skip_unknown
    }
}
