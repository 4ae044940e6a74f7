//! Arena configuration parameters.

use std::alloc::Layout;

use crate::error::ArenaError;

/// Alignment applied to every arena allocation.
///
/// Request sizes are rounded up to a multiple of this value and every
/// returned address is a multiple of it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(usize)]
pub enum Alignment {
    /// Byte alignment (no padding).
    One = 1,
    /// 4-byte alignment.
    Four = 4,
    /// 8-byte alignment.
    #[default]
    Eight = 8,
}

impl Alignment {
    /// The alignment in bytes.
    pub const fn bytes(self) -> usize {
        self as usize
    }
}

impl TryFrom<usize> for Alignment {
    type Error = ArenaError;

    fn try_from(bytes: usize) -> Result<Self, ArenaError> {
        match bytes {
            1 => Ok(Self::One),
            4 => Ok(Self::Four),
            8 => Ok(Self::Eight),
            requested => Err(ArenaError::UnsupportedAlignment { requested }),
        }
    }
}

/// Configuration for an [`Arena`](crate::Arena).
///
/// Validated at construction; all values are immutable afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArenaConfig {
    /// Alignment for every allocation.
    ///
    /// Default: [`Alignment::Eight`].
    pub alignment: Alignment,

    /// Capacity of a regular block in bytes.
    ///
    /// Requests larger than this get a block sized to fit them exactly.
    /// Default: 4096. Must be at least [`ArenaConfig::MIN_BLOCK_SIZE`].
    pub block_size: usize,

    /// Keep an under-filled block current when an oversized request
    /// forces a new block.
    ///
    /// When set and the current block is less than half used, the new
    /// block is linked behind the current one instead of replacing it, so
    /// the remaining space keeps serving small requests. Default: `false`.
    pub retain_underfilled: bool,
}

impl ArenaConfig {
    /// Default block capacity: 4 KiB.
    pub const DEFAULT_BLOCK_SIZE: usize = 4 * 1024;

    /// Smallest accepted block capacity.
    pub const MIN_BLOCK_SIZE: usize = 64;

    /// Alignment of every block's base address.
    ///
    /// Offsets inside a block are aligned relative to the base, so any
    /// alignment up to this value costs no extra padding at block start.
    pub const BLOCK_ALIGN: usize = 16;

    /// Create a config with the given alignment and default sizing.
    pub fn new(alignment: Alignment) -> Self {
        Self {
            alignment,
            block_size: Self::DEFAULT_BLOCK_SIZE,
            retain_underfilled: false,
        }
    }

    /// Check that the block size is usable.
    pub fn validate(&self) -> Result<(), ArenaError> {
        if self.block_size < Self::MIN_BLOCK_SIZE {
            return Err(ArenaError::InvalidBlockSize {
                requested: self.block_size,
                minimum: Self::MIN_BLOCK_SIZE,
            });
        }
        if Layout::from_size_align(self.block_size, Self::BLOCK_ALIGN).is_err() {
            return Err(ArenaError::LayoutOverflow {
                size: self.block_size,
            });
        }
        Ok(())
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self::new(Alignment::default())
    }
}
