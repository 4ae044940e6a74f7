//! Shape summary of a built tree.

use smallvec::SmallVec;

use crate::config::MAX_DEPTH;

/// Counts gathered by [`GlobeTree::stats`](crate::GlobeTree::stats).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TreeStats {
    /// Number of tree nodes, the root included.
    pub trees: usize,
    /// Number of stored objects.
    pub objects: usize,
    /// Depth of the deepest tree node.
    pub deepest: usize,
    /// Objects stored at each depth, indexed by depth relative to the
    /// tree the stats were taken from.
    pub objects_per_depth: SmallVec<[usize; MAX_DEPTH + 1]>,
}

impl TreeStats {
    pub(crate) fn record(&mut self, depth: usize, objects: usize) {
        self.trees += 1;
        self.objects += objects;
        self.deepest = self.deepest.max(depth);
        if self.objects_per_depth.len() <= depth {
            self.objects_per_depth.resize(depth + 1, 0);
        }
        self.objects_per_depth[depth] += objects;
    }

    /// Fraction of objects stored at the top level, in `[0, 1]`.
    ///
    /// Objects that straddle a quadrant boundary cannot descend, so a high
    /// value means many large or boundary-crossing objects.
    pub fn top_level_share(&self) -> f64 {
        match (self.objects, self.objects_per_depth.first()) {
            (0, _) | (_, None) => 0.0,
            (total, Some(&top)) => top as f64 / total as f64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_builds_histogram() {
        let mut stats = TreeStats::default();
        stats.record(0, 2);
        stats.record(1, 0);
        stats.record(3, 5);
        assert_eq!(stats.trees, 3);
        assert_eq!(stats.objects, 7);
        assert_eq!(stats.deepest, 3);
        assert_eq!(stats.objects_per_depth.as_slice(), &[2, 0, 0, 5]);
        assert!(!stats.objects_per_depth.spilled());
    }

    #[test]
    fn top_level_share_of_empty_tree_is_zero() {
        assert_eq!(TreeStats::default().top_level_share(), 0.0);
    }
}
