//! Benchmark profiles for the Starfield sky index.
//!
//! Provides seeded catalogs of fixed size so benchmark runs are comparable:
//!
//! - [`reference_catalog`]: 10K objects, the size of a typical bright-star list
//! - [`stress_catalog`]: 100K objects
//! - [`reference_queries`]: a fixed mix of small, medium and wide query sections

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use starfield_core::{Area, Position, Section};
use starfield_test_utils::fixtures::synthetic_catalog;
use starfield_test_utils::VecCatalog;

/// Objects in [`reference_catalog`].
pub const REFERENCE_OBJECTS: usize = 10_000;

/// Objects in [`stress_catalog`].
pub const STRESS_OBJECTS: usize = 100_000;

/// Build the reference benchmark catalog: 10K objects scattered over the sky.
pub fn reference_catalog(seed: u64) -> VecCatalog {
    synthetic_catalog(REFERENCE_OBJECTS, seed)
}

/// Build the stress benchmark catalog: 100K objects.
///
/// Same distribution as [`reference_catalog`] at 10x the object count.
pub fn stress_catalog(seed: u64) -> VecCatalog {
    synthetic_catalog(STRESS_OBJECTS, seed)
}

/// Query sections from a 2x2 degree field up to a quarter of the sky.
pub fn reference_queries() -> [(&'static str, Section); 3] {
    [
        (
            "small_2deg",
            Section::new(Position::raw(0.0, 0.0), Area::new(2.0, 2.0)),
        ),
        (
            "medium_30deg",
            Section::new(Position::raw(100.0, -20.0), Area::new(30.0, 30.0)),
        ),
        (
            "wide_quarter",
            Section::new(Position::raw(0.0, 0.0), Area::new(180.0, 90.0)),
        ),
    ]
}
