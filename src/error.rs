//! Unified error type for the controller.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` (behind the `defmt` feature) for on-target
//! logging.

use crate::ui::ButtonSet;

/// Top-level error type used across the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    // Catalog
    /// A catalog was built from zero entries.
    EmptyCatalog,

    // Input
    /// The release-wait guard ran out while these buttons were still held.
    ReleaseTimeout(ButtonSet),

    // Status channel
    /// A status line did not match `P:<n> S:<n> R:<n>`.
    MalformedStatus,

    // Generic
    /// Buffer too small for the requested operation.
    BufferOverflow,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::EmptyCatalog => f.write_str("song catalog is empty"),
            Error::ReleaseTimeout(held) => {
                write!(f, "buttons still held after release wait: {:#06b}", held.bits())
            }
            Error::MalformedStatus => f.write_str("malformed status line"),
            Error::BufferOverflow => f.write_str("buffer overflow"),
        }
    }
}

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, Error>;
