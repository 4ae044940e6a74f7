//! Contiguous memory blocks with bump allocation.
//!
//! A [`Block`] is one reservation from a [`RawAllocator`]. It hands out
//! consecutive aligned regions until it is full and is never freed on its
//! own: the owning arena releases all of its blocks together.

use std::alloc::{handle_alloc_error, Layout};
use std::ptr::NonNull;

use crate::config::ArenaConfig;
use crate::raw::{self, RawAllocator};

/// A single contiguous block with a bump cursor.
pub(crate) struct Block {
    id: usize,
    base: NonNull<u8>,
    layout: Layout,
    /// Bump pointer: bytes consumed from the start of the block.
    used: usize,
}

impl Block {
    /// Reserve a block of `capacity` bytes whose base is aligned to at
    /// least `align`.
    ///
    /// # Panics
    ///
    /// Panics if the capacity cannot be described as a layout. Aborts
    /// through [`handle_alloc_error`] if the allocator has no memory.
    pub(crate) fn reserve(
        allocator: &dyn RawAllocator,
        id: usize,
        capacity: usize,
        align: usize,
    ) -> Self {
        let layout = Layout::from_size_align(capacity, align.max(ArenaConfig::BLOCK_ALIGN))
            .unwrap_or_else(|_| panic!("arena block of {capacity} bytes exceeds the address space"));
        let base = allocator
            .reserve(layout)
            .unwrap_or_else(|| handle_alloc_error(layout));
        Self {
            id,
            base,
            layout,
            used: 0,
        }
    }

    /// Carve `size` zeroed bytes aligned to `align` from this block.
    ///
    /// Returns `None` if the remaining capacity is insufficient. The block
    /// is left untouched in that case.
    pub(crate) fn bump(&mut self, size: usize, align: usize) -> Option<NonNull<u8>> {
        let base = self.base.as_ptr() as usize;
        let start = base.checked_add(self.used)?.checked_next_multiple_of(align)? - base;
        let end = start.checked_add(size)?;
        if end > self.capacity() {
            return None;
        }
        self.used = end;
        Some(raw::zeroed_region(self.base, start, size))
    }

    /// Give the memory back to `allocator`.
    ///
    /// `allocator` must be the one that reserved this block.
    pub(crate) fn release(self, allocator: &dyn RawAllocator) {
        raw::release_block(allocator, self.base, self.layout);
    }

    pub(crate) fn used(&self) -> usize {
        self.used
    }

    pub(crate) fn capacity(&self) -> usize {
        self.layout.size()
    }

    /// True while less than half of the block has been consumed.
    pub(crate) fn is_underfilled(&self) -> bool {
        self.used < self.capacity() / 2
    }

    pub(crate) fn info(&self) -> BlockInfo {
        BlockInfo {
            id: self.id,
            capacity: self.capacity(),
            used: self.used,
        }
    }
}

/// Snapshot of one block's occupancy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockInfo {
    /// Sequence number assigned when the block was reserved, starting at 0
    /// after every clear.
    pub id: usize,
    /// Capacity in bytes.
    pub capacity: usize,
    /// Bytes consumed, including alignment padding.
    pub used: usize,
}

impl BlockInfo {
    /// Bytes still available at the end of the block.
    pub fn remaining(&self) -> usize {
        self.capacity - self.used
    }
}
