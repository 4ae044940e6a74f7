//! Low-level primitives for arena memory operations.
//!
//! This is the only module in the crate that contains `unsafe` code. Every
//! `unsafe` block carries a `// SAFETY:` comment naming the invariant it
//! relies on. The rest of the crate works with offsets and the safe helpers
//! exported here.

#![allow(unsafe_code)]

use std::alloc::{self, Layout};
use std::cell::Cell;
use std::ptr::{self, NonNull};
use std::rc::Rc;

/// Source of the raw memory blocks an arena carves allocations from.
///
/// # Safety
///
/// A successful [`reserve`](RawAllocator::reserve) must return a pointer to
/// at least `layout.size()` writable bytes aligned to `layout.align()`, not
/// aliased by anything else, and valid until passed to
/// [`release`](RawAllocator::release) with the same layout.
pub unsafe trait RawAllocator {
    /// Reserve a block of memory described by `layout`.
    ///
    /// Returns `None` when the memory cannot be provided. The arena treats
    /// that as fatal. `layout.size()` is never zero.
    fn reserve(&self, layout: Layout) -> Option<NonNull<u8>>;

    /// Return a block previously obtained from [`reserve`](Self::reserve).
    ///
    /// # Safety
    ///
    /// `ptr` must come from `self.reserve(layout)` with the same `layout`
    /// and must not have been released already.
    unsafe fn release(&self, ptr: NonNull<u8>, layout: Layout);
}

/// The process-wide global allocator.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemAllocator;

// SAFETY: `std::alloc::alloc` upholds the `RawAllocator` contract for
// non-zero-sized layouts; zero-sized requests are refused.
unsafe impl RawAllocator for SystemAllocator {
    fn reserve(&self, layout: Layout) -> Option<NonNull<u8>> {
        if layout.size() == 0 {
            return None;
        }
        // SAFETY: the layout is non-zero-sized.
        NonNull::new(unsafe { alloc::alloc(layout) })
    }

    unsafe fn release(&self, ptr: NonNull<u8>, layout: Layout) {
        // SAFETY: forwarded from the caller's contract; `ptr` was returned
        // by `alloc::alloc(layout)` in `reserve`.
        unsafe { alloc::dealloc(ptr.as_ptr(), layout) }
    }
}

/// Shared reservation counters observed through a [`CountingAllocator`].
///
/// Cloning yields another handle onto the same counters, so the counts
/// stay readable after the allocator itself has been moved into an arena.
#[derive(Clone, Debug, Default)]
pub struct AllocationCounter {
    state: Rc<CounterState>,
}

#[derive(Debug, Default)]
struct CounterState {
    reserves: Cell<usize>,
    releases: Cell<usize>,
    live_bytes: Cell<usize>,
}

impl AllocationCounter {
    /// Number of blocks reserved so far.
    pub fn reserves(&self) -> usize {
        self.state.reserves.get()
    }

    /// Number of blocks released so far.
    pub fn releases(&self) -> usize {
        self.state.releases.get()
    }

    /// Blocks reserved and not yet released.
    pub fn live_blocks(&self) -> usize {
        self.reserves() - self.releases()
    }

    /// Bytes currently held by live blocks.
    pub fn live_bytes(&self) -> usize {
        self.state.live_bytes.get()
    }
}

/// A [`RawAllocator`] wrapper that counts reservations and releases.
///
/// Useful for checking that an arena hands every block back.
#[derive(Debug, Default)]
pub struct CountingAllocator<A = SystemAllocator> {
    inner: A,
    counter: AllocationCounter,
}

impl<A: RawAllocator> CountingAllocator<A> {
    /// Wrap `inner`.
    pub fn new(inner: A) -> Self {
        Self {
            inner,
            counter: AllocationCounter::default(),
        }
    }

    /// A handle onto this allocator's counters.
    pub fn counter(&self) -> AllocationCounter {
        self.counter.clone()
    }
}

// SAFETY: every reservation and release is forwarded unchanged to `inner`,
// which upholds the contract itself.
unsafe impl<A: RawAllocator> RawAllocator for CountingAllocator<A> {
    fn reserve(&self, layout: Layout) -> Option<NonNull<u8>> {
        let ptr = self.inner.reserve(layout)?;
        let state = &self.counter.state;
        state.reserves.set(state.reserves.get() + 1);
        state.live_bytes.set(state.live_bytes.get() + layout.size());
        Some(ptr)
    }

    unsafe fn release(&self, ptr: NonNull<u8>, layout: Layout) {
        let state = &self.counter.state;
        state.releases.set(state.releases.get() + 1);
        state.live_bytes.set(state.live_bytes.get() - layout.size());
        // SAFETY: forwarded from the caller's contract.
        unsafe { self.inner.release(ptr, layout) }
    }
}

/// Hand `base` back to the allocator it came from.
///
/// Only called by a block when it is torn down, exactly once per block.
pub(crate) fn release_block(allocator: &dyn RawAllocator, base: NonNull<u8>, layout: Layout) {
    // SAFETY: blocks store the pointer and layout returned by
    // `allocator.reserve` and are released once, when the arena drops them.
    unsafe { allocator.release(base, layout) }
}

/// Pointer to `offset` bytes past `base`, with the region zero-filled.
///
/// `offset + len` must not exceed the capacity of the block at `base`;
/// callers check this before calling.
pub(crate) fn zeroed_region(base: NonNull<u8>, offset: usize, len: usize) -> NonNull<u8> {
    // SAFETY: the block at `base` spans at least `offset + len` bytes, so
    // the offset pointer stays in bounds and is non-null.
    unsafe {
        let start = base.add(offset);
        ptr::write_bytes(start.as_ptr(), 0, len);
        start
    }
}

/// Reborrow a zero-filled region as a byte slice for lifetime `'a`.
///
/// The region must be freshly carved from a block that outlives `'a` and
/// must not be handed out again while the block lives.
pub(crate) fn region_as_slice<'a>(start: NonNull<u8>, len: usize) -> &'a mut [u8] {
    // SAFETY: the region is `len` initialised (zeroed) bytes, owned
    // exclusively by the caller until the owning block is released, and the
    // arena only releases blocks through `&mut self`.
    unsafe { std::slice::from_raw_parts_mut(start.as_ptr(), len) }
}

/// Move `value` into a region suitably sized and aligned for `T`.
///
/// Same ownership rules as [`region_as_slice`].
pub(crate) fn write_value<'a, T>(start: NonNull<u8>, value: T) -> &'a mut T {
    let slot = start.cast::<T>();
    debug_assert!(slot.as_ptr().is_aligned());
    // SAFETY: the caller carved `size_of::<T>()` bytes at an address aligned
    // for `T`, and nothing else references the region.
    unsafe {
        slot.as_ptr().write(value);
        &mut *slot.as_ptr()
    }
}
