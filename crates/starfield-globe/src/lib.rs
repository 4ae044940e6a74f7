//! Arena-backed quad-tree index of celestial objects.
//!
//! A [`GlobeTree`] recursively splits the (right-ascension, declination)
//! plane into quadrants and files each catalog object under the smallest
//! quadrant that holds it. Tree nodes and their entries live in an
//! [`Arena`](starfield_arena::Arena); search results go to a second,
//! caller-chosen arena.
//!
//! # Queries
//!
//! - [`GlobeTree::search`]: objects overlapping a [`Section`](starfield_core::Section)
//! - [`GlobeTree::search_point`]: objects covering a position
//! - [`GlobeTree::locate`]: the entry holding one specific object

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod node;
pub mod stats;
pub mod tree;

#[cfg(test)]
pub(crate) mod compliance;

pub use config::{GlobeConfig, OverlapMode, MAX_DEPTH};
pub use error::GlobeError;
pub use node::{Iter, Node, NodeList};
pub use stats::TreeStats;
pub use tree::GlobeTree;
