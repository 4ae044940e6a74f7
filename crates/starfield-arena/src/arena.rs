//! The block arena.
//!
//! [`Arena`] hands out zero-filled, aligned regions from a chain of blocks
//! and frees them all at once. Allocation takes `&self` so that values
//! carved from the arena can reference one another; [`Arena::clear`] and
//! [`Arena::destroy`] take `&mut self`, so the borrow checker guarantees
//! that no allocation outlives the memory behind it.

use std::alloc::Layout;
use std::cell::RefCell;
use std::fmt;
use std::mem;
use std::ptr::NonNull;

use crate::block::{Block, BlockInfo};
use crate::config::{Alignment, ArenaConfig};
use crate::error::ArenaError;
use crate::raw::{self, RawAllocator, SystemAllocator};

/// Region-based bump allocator.
///
/// # Lifecycle
///
/// A new arena owns one empty block. Allocations are served from the
/// current block; when it cannot fit a request a new block is reserved,
/// sized to the larger of the request and the configured block size.
/// [`clear`](Self::clear) releases everything and starts over with a fresh
/// block. [`destroy`](Self::destroy) releases everything and leaves the
/// arena inert; any allocation after that panics.
///
/// # Example
///
/// ```
/// use starfield_arena::{Alignment, Arena};
///
/// let arena = Arena::identity(Alignment::Eight);
/// let bytes = arena.alloc_bytes(13);
/// assert_eq!(bytes.len(), 16);
/// assert!(bytes.iter().all(|&b| b == 0));
/// assert_eq!(arena.block_count(), 1);
/// ```
pub struct Arena {
    config: ArenaConfig,
    allocator: Option<Box<dyn RawAllocator>>,
    state: RefCell<ArenaState>,
}

struct ArenaState {
    /// Blocks in chain order. Retained blocks sit after the blocks that
    /// were linked behind them.
    blocks: Vec<Block>,
    /// Index of the block serving allocations.
    current: usize,
    /// Sum of block capacities.
    total_reserved: usize,
}

impl ArenaState {
    const fn empty() -> Self {
        Self {
            blocks: Vec::new(),
            current: 0,
            total_reserved: 0,
        }
    }
}

/// Aggregate occupancy of an arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArenaStats {
    /// Number of live blocks.
    pub blocks: usize,
    /// Sum of block capacities in bytes.
    pub total_reserved: usize,
    /// Bytes consumed across all blocks, including padding.
    pub used: usize,
    /// The arena's allocation alignment.
    pub alignment: Alignment,
}

impl Arena {
    /// Create an arena backed by `allocator`.
    ///
    /// Reserves the first block immediately.
    pub fn make<A: RawAllocator + 'static>(alignment: Alignment, allocator: A) -> Self {
        Self::from_parts(ArenaConfig::new(alignment), Box::new(allocator))
    }

    /// Create an arena backed by the global allocator.
    pub fn identity(alignment: Alignment) -> Self {
        Self::make(alignment, SystemAllocator)
    }

    /// Create an arena from a full configuration.
    ///
    /// # Errors
    ///
    /// Returns an [`ArenaError`] if the configuration is invalid.
    pub fn with_config<A: RawAllocator + 'static>(
        config: ArenaConfig,
        allocator: A,
    ) -> Result<Self, ArenaError> {
        config.validate()?;
        Ok(Self::from_parts(config, Box::new(allocator)))
    }

    fn from_parts(config: ArenaConfig, allocator: Box<dyn RawAllocator>) -> Self {
        let arena = Self {
            config,
            allocator: Some(allocator),
            state: RefCell::new(ArenaState::empty()),
        };
        arena.open_first_block();
        arena
    }

    fn open_first_block(&self) {
        let Some(allocator) = self.allocator.as_deref() else {
            return;
        };
        let mut state = self.state.borrow_mut();
        debug_assert!(state.blocks.is_empty());
        let block = Block::reserve(
            allocator,
            0,
            self.config.block_size,
            self.config.alignment.bytes(),
        );
        state.total_reserved = block.capacity();
        state.blocks.push(block);
        state.current = 0;
    }

    /// Allocate `size` zero-filled bytes.
    ///
    /// `size` is rounded up to a multiple of the arena's alignment and the
    /// returned address is aligned to it. The memory stays valid until the
    /// arena is cleared, destroyed or dropped.
    ///
    /// # Panics
    ///
    /// Panics if the arena has been destroyed or the rounded size
    /// overflows. Aborts if the allocator cannot provide a new block.
    pub fn alloc(&self, size: usize) -> NonNull<u8> {
        self.alloc_aligned(self.rounded(size), self.config.alignment.bytes())
    }

    /// Allocate `size` zero-filled bytes as a slice.
    ///
    /// The slice covers the rounded size, so it may be longer than `size`.
    ///
    /// # Panics
    ///
    /// Same conditions as [`alloc`](Self::alloc).
    #[allow(clippy::mut_from_ref)]
    pub fn alloc_bytes(&self, size: usize) -> &mut [u8] {
        let size = self.rounded(size);
        let start = self.alloc_aligned(size, self.config.alignment.bytes());
        raw::region_as_slice(start, size)
    }

    /// Move `value` into the arena and return a reference to it.
    ///
    /// The slot is aligned to the larger of the arena alignment and
    /// `T`'s own alignment. The arena never runs destructors, so `T`
    /// should not own resources.
    ///
    /// # Panics
    ///
    /// Same conditions as [`alloc`](Self::alloc).
    #[allow(clippy::mut_from_ref)]
    pub fn alloc_value<T>(&self, value: T) -> &mut T {
        debug_assert!(
            !mem::needs_drop::<T>(),
            "arena values are never dropped"
        );
        let layout = Layout::new::<T>();
        let align = layout.align().max(self.config.alignment.bytes());
        let start = self.alloc_aligned(self.rounded(layout.size()), align);
        raw::write_value(start, value)
    }

    fn rounded(&self, size: usize) -> usize {
        size.checked_next_multiple_of(self.config.alignment.bytes())
            .unwrap_or_else(|| panic!("arena allocation of {size} bytes overflows"))
    }

    fn alloc_aligned(&self, size: usize, align: usize) -> NonNull<u8> {
        let Some(allocator) = self.allocator.as_deref() else {
            panic!("allocation from a destroyed arena");
        };
        let mut state = self.state.borrow_mut();
        let current = state.current;
        if let Some(ptr) = state.blocks.get_mut(current).and_then(|b| b.bump(size, align)) {
            return ptr;
        }

        let id = state.blocks.len();
        let capacity = size.max(self.config.block_size);
        let mut block = Block::reserve(allocator, id, capacity, align);
        let ptr = block
            .bump(size, align)
            .expect("fresh block is sized and aligned for the request");
        state.total_reserved += block.capacity();

        let retain = self.config.retain_underfilled
            && state.blocks.get(current).is_some_and(Block::is_underfilled);
        if retain {
            state.blocks.insert(current, block);
            state.current = current + 1;
        } else {
            state.blocks.push(block);
            state.current = state.blocks.len() - 1;
        }
        tracing::debug!(
            block_id = id,
            capacity,
            requested = size,
            retained_current = retain,
            total_reserved = state.total_reserved,
            "arena reserved block"
        );
        ptr
    }

    /// Release every block and start over with one fresh block.
    ///
    /// Counters reset as if the arena were new.
    ///
    /// # Panics
    ///
    /// Panics if the arena has been destroyed.
    pub fn clear(&mut self) {
        assert!(self.allocator.is_some(), "clear on a destroyed arena");
        self.release_blocks();
        self.open_first_block();
    }

    /// Release every block and detach the allocator.
    ///
    /// The arena keeps its alignment but cannot allocate again. Calling
    /// `destroy` twice is harmless.
    pub fn destroy(&mut self) {
        self.release_blocks();
        self.allocator = None;
    }

    fn release_blocks(&mut self) {
        let state = mem::replace(self.state.get_mut(), ArenaState::empty());
        let Some(allocator) = self.allocator.as_deref() else {
            return;
        };
        tracing::trace!(
            blocks = state.blocks.len(),
            total_reserved = state.total_reserved,
            "releasing arena blocks"
        );
        for block in state.blocks {
            block.release(allocator);
        }
    }

    /// The allocation alignment.
    pub fn alignment(&self) -> Alignment {
        self.config.alignment
    }

    /// The configuration this arena was built with.
    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    /// Number of live blocks.
    pub fn block_count(&self) -> usize {
        self.state.borrow().blocks.len()
    }

    /// Sum of the capacities of all live blocks, in bytes.
    pub fn total_reserved(&self) -> usize {
        self.state.borrow().total_reserved
    }

    /// Bytes consumed across all blocks, including padding.
    pub fn used_bytes(&self) -> usize {
        self.state.borrow().blocks.iter().map(Block::used).sum()
    }

    /// True after [`destroy`](Self::destroy).
    pub fn is_destroyed(&self) -> bool {
        self.allocator.is_none()
    }

    /// True while an allocator is attached.
    pub fn has_allocator(&self) -> bool {
        self.allocator.is_some()
    }

    /// Occupancy of every block, in chain order.
    pub fn blocks(&self) -> Vec<BlockInfo> {
        self.state.borrow().blocks.iter().map(Block::info).collect()
    }

    /// Occupancy of the block serving allocations, if any.
    pub fn current_block(&self) -> Option<BlockInfo> {
        let state = self.state.borrow();
        state.blocks.get(state.current).map(Block::info)
    }

    /// Aggregate occupancy.
    pub fn stats(&self) -> ArenaStats {
        let state = self.state.borrow();
        ArenaStats {
            blocks: state.blocks.len(),
            total_reserved: state.total_reserved,
            used: state.blocks.iter().map(Block::used).sum(),
            alignment: self.config.alignment,
        }
    }
}

impl Drop for Arena {
    fn drop(&mut self) {
        self.release_blocks();
    }
}

impl fmt::Debug for Arena {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("Arena")
            .field("alignment", &self.config.alignment)
            .field("blocks", &state.blocks.len())
            .field("current", &state.current)
            .field("total_reserved", &state.total_reserved)
            .field("destroyed", &self.allocator.is_none())
            .finish()
    }
}
