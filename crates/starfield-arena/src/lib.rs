//! Block-based region allocator for the starfield sky index.
//!
//! An [`Arena`] serves many small, short-lived allocations from large
//! blocks and frees them together. Allocations borrow the arena, so the
//! compiler rejects any use after [`Arena::clear`] or [`Arena::destroy`].
//!
//! # Architecture
//!
//! ```text
//! Arena
//! ├── ArenaConfig (alignment, block size, retention policy)
//! ├── Box<dyn RawAllocator> (SystemAllocator by default)
//! └── Block[] (bump cursor over one reservation each)
//! ```
//!
//! # Safety
//!
//! All `unsafe` code lives in the private `raw` module. The public
//! [`RawAllocator`] trait is `unsafe` to implement because the arena
//! trusts the memory it returns.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod arena;
mod block;
pub mod config;
pub mod error;
mod raw;

pub use arena::{Arena, ArenaStats};
pub use block::BlockInfo;
pub use config::{Alignment, ArenaConfig};
pub use error::ArenaError;
pub use raw::{AllocationCounter, CountingAllocator, RawAllocator, SystemAllocator};
