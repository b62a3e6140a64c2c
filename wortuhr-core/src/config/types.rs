//! Configuration type definitions

/// Text alignment hint for the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TextAlignment {
    Left,
    #[default]
    Right,
}

/// Formatter configuration
///
/// Each flag is independent. `dialect_nrw` only affects minute 45 and
/// `dialect_wien` only affects minute 15, so both may be set together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Configuration {
    /// Snap the minute to a nearby multiple of five
    pub fuzzy: bool,
    /// Say "viertel vor" at minute 45
    pub dialect_nrw: bool,
    /// Say "viertel" with the next hour at minute 15
    pub dialect_wien: bool,
    /// Right-align text (renderer hint only)
    pub right_align: bool,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            fuzzy: true,
            dialect_nrw: false,
            dialect_wien: false,
            right_align: true,
        }
    }
}

impl Configuration {
    /// Exact minutes, standard German, right aligned
    pub const fn exact() -> Self {
        Self {
            fuzzy: false,
            dialect_nrw: false,
            dialect_wien: false,
            right_align: true,
        }
    }

    /// Alignment hint derived from `right_align`
    pub const fn alignment(&self) -> TextAlignment {
        if self.right_align {
            TextAlignment::Right
        } else {
            TextAlignment::Left
        }
    }
}
