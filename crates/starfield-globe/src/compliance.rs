//! Structural invariant checks shared by the unit tests.
//!
//! Each helper walks a list or tree and panics with a descriptive message
//! on the first violated invariant.

use starfield_core::CelestialObject;

use crate::node::NodeList;
use crate::tree::GlobeTree;

/// Assert that forward and backward links agree and match `len()`.
pub fn assert_links_consistent<O>(list: &NodeList<'_, O>) {
    let mut count = 0;
    let mut previous = None;
    let mut cursor = list.head();
    while let Some(node) = cursor {
        let back = node.previous().map(|n| n as *const _);
        assert_eq!(
            back, previous,
            "node {count} has a backward link that skips its predecessor"
        );
        previous = Some(node as *const _);
        cursor = node.next();
        count += 1;
    }
    assert_eq!(count, list.len(), "forward walk disagrees with len()");
    assert_eq!(
        previous,
        list.tail().map(|n| n as *const _),
        "forward walk does not end at the tail"
    );
    assert_eq!(list.iter().rev().count(), list.len());
}

/// Assert the structural invariants of `tree` and every descendant.
///
/// Checks that each stored section fits its tree node, that children cover
/// their parent's quadrants one level deeper, that no child exists past the
/// depth limit and that every node list is consistently linked.
pub fn assert_tree_well_formed<O: CelestialObject>(tree: &GlobeTree<'_, O>) {
    assert_links_consistent(tree.nodes());
    for node in tree.nodes() {
        assert!(
            tree.section().contains(node.section()),
            "stored section {} escapes tree section {}",
            node.section(),
            tree.section()
        );
    }
    for index in 0..4 {
        let Some(child) = tree.child(index) else {
            continue;
        };
        assert!(
            tree.depth() < tree.config().max_depth,
            "child created at the depth limit"
        );
        assert_eq!(child.depth(), tree.depth() + 1);
        assert_eq!(child.section(), tree.quadrant(index));
        assert_tree_well_formed(child);
    }
}
