//! Core sky geometry and catalog traits for Starfield.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! value types every other Starfield crate speaks in: angular positions,
//! areas and rectangular sections of the (right-ascension, declination)
//! plane, plus the traits through which an external catalog hands its
//! objects to the index.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod angle;
pub mod error;
pub mod geometry;
pub mod traits;

pub use angle::{arcseconds_to_degrees, ARCSECONDS_PER_DEGREE};
pub use error::GeometryError;
pub use geometry::{Area, Position, Section};
pub use traits::{Catalog, CelestialObject};
