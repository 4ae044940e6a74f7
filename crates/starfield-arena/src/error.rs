//! Arena-specific error types.
//!
//! Only configuration is fallible. Running out of memory while the arena
//! grows is fatal and goes through [`std::alloc::handle_alloc_error`].

use std::error::Error;
use std::fmt;

/// Errors that can occur when configuring an arena.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// The alignment is not one of 1, 4 or 8 bytes.
    UnsupportedAlignment {
        /// The alignment that was requested, in bytes.
        requested: usize,
    },
    /// The default block size is below the supported minimum.
    InvalidBlockSize {
        /// The block size that was requested, in bytes.
        requested: usize,
        /// The smallest accepted block size, in bytes.
        minimum: usize,
    },
    /// The block size cannot be described as a memory layout.
    LayoutOverflow {
        /// The offending size in bytes.
        size: usize,
    },
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedAlignment { requested } => {
                write!(f, "unsupported alignment: {requested} bytes (expected 1, 4 or 8)")
            }
            Self::InvalidBlockSize { requested, minimum } => {
                write!(
                    f,
                    "invalid block size: requested {requested} bytes, minimum {minimum} bytes"
                )
            }
            Self::LayoutOverflow { size } => {
                write!(f, "block size {size} bytes exceeds the addressable range")
            }
        }
    }
}

impl Error for ArenaError {}
