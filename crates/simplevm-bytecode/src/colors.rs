//! ANSI styling for dumps and fold traces.

/// Output styling, either plain or 16-color ANSI.
///
/// Each accessor names a role rather than a color: `kind` for chunk and
/// operator names, `value` for decoded values, `muted` for byte previews and
/// type-rule notes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Colors {
    enabled: bool,
}

impl Colors {
    pub const ON: Self = Self { enabled: true };
    pub const OFF: Self = Self { enabled: false };

    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn kind(self) -> &'static str {
        self.pick("\x1b[34m")
    }

    pub fn value(self) -> &'static str {
        self.pick("\x1b[32m")
    }

    pub fn muted(self) -> &'static str {
        self.pick("\x1b[2m")
    }

    pub fn reset(self) -> &'static str {
        self.pick("\x1b[0m")
    }

    fn pick(self, code: &'static str) -> &'static str {
        if self.enabled { code } else { "" }
    }
}
