//! Arena-allocated, append-only linked lists of indexed objects.
//!
//! A [`NodeList`] stores each entry as a [`Node`] carved from the arena it
//! is bound to. Nodes are linked in both directions and never move or get
//! removed, so references to them stay valid for the arena's lifetime.

use std::cell::Cell;
use std::fmt;
use std::iter::FusedIterator;

use starfield_arena::Arena;
use starfield_core::Section;

/// One entry of a [`NodeList`]: an object and the section it occupies.
pub struct Node<'a, O> {
    section: Section,
    object: &'a O,
    previous: Cell<Option<&'a Node<'a, O>>>,
    next: Cell<Option<&'a Node<'a, O>>>,
}

impl<'a, O> Node<'a, O> {
    /// The section the object occupies.
    pub fn section(&self) -> &Section {
        &self.section
    }

    /// The indexed object.
    pub fn object(&self) -> &'a O {
        self.object
    }

    /// The entry appended before this one.
    pub fn previous(&self) -> Option<&'a Node<'a, O>> {
        self.previous.get()
    }

    /// The entry appended after this one.
    pub fn next(&self) -> Option<&'a Node<'a, O>> {
        self.next.get()
    }
}

impl<O: fmt::Debug> fmt::Debug for Node<'_, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("section", &self.section)
            .field("object", self.object)
            .finish()
    }
}

/// Insertion-ordered list of objects, allocated from an [`Arena`].
///
/// Appending is O(1). Entries are never removed; the memory is reclaimed
/// when the arena is cleared or destroyed, which the borrow on the arena
/// prevents while the list is alive.
pub struct NodeList<'a, O> {
    head: Option<&'a Node<'a, O>>,
    tail: Option<&'a Node<'a, O>>,
    len: usize,
    arena: &'a Arena,
}

impl<'a, O> NodeList<'a, O> {
    /// Create an empty list that allocates from `arena`.
    pub fn new(arena: &'a Arena) -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
            arena,
        }
    }

    /// Append `object` occupying `section` and return the new entry.
    pub fn emplace(&mut self, section: Section, object: &'a O) -> &'a Node<'a, O> {
        let node: &'a Node<'a, O> = self.arena.alloc_value(Node {
            section,
            object,
            previous: Cell::new(self.tail),
            next: Cell::new(None),
        });
        match self.tail {
            Some(tail) => tail.next.set(Some(node)),
            None => self.head = Some(node),
        }
        self.tail = Some(node);
        self.len += 1;
        node
    }

    /// Append a copy of every entry of `other`, in order.
    pub fn extend_from<'b>(&mut self, other: &NodeList<'b, O>)
    where
        'b: 'a,
    {
        for node in other {
            self.emplace(node.section, node.object);
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if nothing has been appended.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The first entry.
    pub fn head(&self) -> Option<&'a Node<'a, O>> {
        self.head
    }

    /// The most recently appended entry.
    pub fn tail(&self) -> Option<&'a Node<'a, O>> {
        self.tail
    }

    /// The arena new entries are allocated from.
    pub fn arena(&self) -> &'a Arena {
        self.arena
    }

    /// Iterate over the entries in insertion order.
    pub fn iter(&self) -> Iter<'a, O> {
        Iter {
            front: self.head,
            back: self.tail,
            remaining: self.len,
        }
    }

    /// Iterate over the stored objects in insertion order.
    pub fn objects(&self) -> impl DoubleEndedIterator<Item = &'a O> + ExactSizeIterator {
        self.iter().map(Node::object)
    }
}

impl<'a, O> IntoIterator for &NodeList<'a, O> {
    type Item = &'a Node<'a, O>;
    type IntoIter = Iter<'a, O>;

    fn into_iter(self) -> Iter<'a, O> {
        self.iter()
    }
}

impl<O: fmt::Debug> fmt::Debug for NodeList<'_, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Double-ended iterator over the entries of a [`NodeList`].
pub struct Iter<'a, O> {
    front: Option<&'a Node<'a, O>>,
    back: Option<&'a Node<'a, O>>,
    remaining: usize,
}

impl<'a, O> Clone for Iter<'a, O> {
    fn clone(&self) -> Self {
        Self {
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<'a, O> Iterator for Iter<'a, O> {
    type Item = &'a Node<'a, O>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.front?;
        self.remaining -= 1;
        self.front = node.next();
        Some(node)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<O> DoubleEndedIterator for Iter<'_, O> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.back?;
        self.remaining -= 1;
        self.back = node.previous();
        Some(node)
    }
}

impl<O> ExactSizeIterator for Iter<'_, O> {}

impl<O> FusedIterator for Iter<'_, O> {}
