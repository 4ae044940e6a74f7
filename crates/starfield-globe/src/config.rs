//! Globe tree configuration.

use starfield_core::Section;

use crate::error::GlobeError;

/// Default subdivision depth limit.
///
/// Objects that still fit a quadrant at this depth are stored at the
/// current node instead of descending further.
pub const MAX_DEPTH: usize = 8;

/// Overlap predicate used when filtering stored objects against a query.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum OverlapMode {
    /// Closed-interval intersection on both axes.
    #[default]
    Exact,
    /// Whether any corner of the query lies inside the candidate, or the
    /// query contains the candidate outright.
    ///
    /// Misses candidates that cross the query edge to edge without holding
    /// one of its corners.
    Corners,
}

impl OverlapMode {
    /// Apply the predicate to a query and a candidate section.
    pub fn test(self, query: &Section, candidate: &Section) -> bool {
        match self {
            Self::Exact => query.overlaps(candidate),
            Self::Corners => query.overlaps_corners(candidate) || query.contains(candidate),
        }
    }
}

/// Configuration for a [`GlobeTree`](crate::GlobeTree).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GlobeConfig {
    /// Deepest level at which child trees may be created.
    ///
    /// Default: [`MAX_DEPTH`].
    pub max_depth: usize,

    /// Predicate for matching stored objects during a search.
    ///
    /// Default: [`OverlapMode::Exact`].
    pub overlap: OverlapMode,
}

impl GlobeConfig {
    /// Default depth limit.
    pub const DEFAULT_MAX_DEPTH: usize = MAX_DEPTH;

    /// Largest accepted depth limit.
    ///
    /// Past this depth quadrant widths approach the precision of `f64`
    /// right-ascension values.
    pub const DEPTH_LIMIT: usize = 40;

    /// Check that the depth limit is usable.
    pub fn validate(&self) -> Result<(), GlobeError> {
        if self.max_depth > Self::DEPTH_LIMIT {
            return Err(GlobeError::DepthOutOfRange {
                requested: self.max_depth,
                maximum: Self::DEPTH_LIMIT,
            });
        }
        Ok(())
    }
}

impl Default for GlobeConfig {
    fn default() -> Self {
        Self {
            max_depth: Self::DEFAULT_MAX_DEPTH,
            overlap: OverlapMode::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use starfield_core::{Area, Position};

    #[test]
    fn defaults() {
        let config = GlobeConfig::default();
        assert_eq!(config.max_depth, 8);
        assert_eq!(config.overlap, OverlapMode::Exact);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn excessive_depth_rejected() {
        let config = GlobeConfig {
            max_depth: 1000,
            ..GlobeConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(GlobeError::DepthOutOfRange {
                requested: 1000,
                maximum: GlobeConfig::DEPTH_LIMIT,
            })
        );
    }

    #[test]
    fn corner_mode_accepts_contained_candidates() {
        let query = Section::new(Position::raw(0.0, 0.0), Area::new(10.0, 10.0));
        let star = Section::new(Position::raw(4.0, 4.0), Area::square(1.0));
        assert!(OverlapMode::Exact.test(&query, &star));
        assert!(OverlapMode::Corners.test(&query, &star));
    }

    #[test]
    fn corner_mode_misses_crossing_candidates() {
        let query = Section::new(Position::raw(0.0, 0.0), Area::new(10.0, 10.0));
        let strip = Section::new(Position::raw(4.0, -2.0), Area::new(1.0, 4.0));
        assert!(OverlapMode::Exact.test(&query, &strip));
        assert!(!OverlapMode::Corners.test(&query, &strip));
    }
}
