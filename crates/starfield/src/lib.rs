//! Starfield: an arena-backed quad-tree index for celestial object catalogs.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Starfield sub-crates. For most users, adding `starfield` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use starfield::prelude::*;
//!
//! struct Star {
//!     ra: f64,
//!     decl: f64,
//!     arcsec: f64,
//! }
//!
//! impl CelestialObject for Star {
//!     fn position(&self) -> Position { Position::new(self.ra, self.decl) }
//!     fn dimension(&self) -> f64 { self.arcsec }
//! }
//!
//! let catalog = vec![
//!     Star { ra: 0.5, decl: 0.5, arcsec: 0.0 },
//!     Star { ra: 1.5, decl: 1.0, arcsec: 120.0 },
//!     Star { ra: 250.0, decl: -60.0, arcsec: 0.0 },
//! ];
//!
//! // The tree and its entries live in one arena...
//! let arena = Arena::identity(Alignment::Eight);
//! let tree = GlobeTree::new_root(&arena, &catalog);
//! assert_eq!(tree.size(), 3);
//!
//! // ...while each query writes its results into another.
//! let mut scratch = Arena::identity(Alignment::Eight);
//! let query = Section::new(Position::new(0.0, 0.0), Area::new(2.0, 2.0));
//! assert_eq!(tree.search(&scratch, &query).len(), 2);
//! scratch.clear();
//! assert_eq!(tree.search(&scratch, &Section::FULL_SKY).len(), tree.size());
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `starfield-core` | Positions, areas, sections, catalog traits |
//! | [`arena`] | `starfield-arena` | Block arena, configuration, raw allocators |
//! | [`globe`] | `starfield-globe` | Globe tree, node lists, tree statistics |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Block arena and allocator plumbing (`starfield-arena`).
///
/// Most users only need [`arena::Arena`] and [`arena::Alignment`], which
/// are also available in the [`prelude`].
pub use starfield_arena as arena;

/// Sky geometry and catalog traits (`starfield-core`).
///
/// Contains [`types::Position`], [`types::Area`], [`types::Section`] and the
/// collaborator traits [`types::Catalog`] and [`types::CelestialObject`].
pub use starfield_core as types;

/// The quad-tree index (`starfield-globe`).
///
/// Provides [`globe::GlobeTree`], the [`globe::NodeList`] results it
/// produces and [`globe::TreeStats`].
pub use starfield_globe as globe;

/// Common imports for typical Starfield usage.
///
/// ```rust
/// use starfield::prelude::*;
/// ```
pub mod prelude {
    // Arena
    pub use starfield_arena::{Alignment, Arena, ArenaConfig, ArenaError};

    // Geometry and catalog traits
    pub use starfield_core::{Area, Catalog, CelestialObject, Position, Section};

    // Index
    pub use starfield_globe::{GlobeConfig, GlobeTree, NodeList, OverlapMode};
}
