//! Error types for geometry construction.
//!
//! The unchecked constructors ([`Position::new`](crate::Position::new),
//! [`Area::new`](crate::Area::new)) accept any input. The checked variants
//! report the inputs they cannot represent meaningfully.

use std::error::Error;
use std::fmt;

/// Errors from the checked geometry constructors.
#[derive(Clone, Debug, PartialEq)]
pub enum GeometryError {
    /// A coordinate was NaN or infinite.
    NonFinite {
        /// The right-ascension that was supplied, in degrees.
        ra: f64,
        /// The declination that was supplied, in degrees.
        decl: f64,
    },
    /// An area had a negative (or non-finite) extent.
    NegativeArea {
        /// The requested width in degrees.
        width: f64,
        /// The requested height in degrees.
        height: f64,
    },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite { ra, decl } => {
                write!(f, "non-finite position: ra {ra}, decl {decl}")
            }
            Self::NegativeArea { width, height } => {
                write!(f, "invalid area: width {width}, height {height}")
            }
        }
    }
}

impl Error for GeometryError {}
