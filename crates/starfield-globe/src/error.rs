//! Error types for globe tree construction.

use std::fmt;

/// Errors arising from globe tree configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GlobeError {
    /// The depth limit is above what the tree supports.
    DepthOutOfRange {
        /// The depth limit that was requested.
        requested: usize,
        /// The largest accepted depth limit.
        maximum: usize,
    },
}

impl fmt::Display for GlobeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DepthOutOfRange { requested, maximum } => {
                write!(f, "depth limit {requested} out of range (maximum {maximum})")
            }
        }
    }
}

impl std::error::Error for GlobeError {}
