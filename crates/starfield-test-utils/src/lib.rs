//! Test utilities and mock catalogs for Starfield development.
//!
//! Provides a plain [`MockObject`], two catalog fixtures ([`VecCatalog`]
//! and the name-keyed [`NamedCatalog`]) and helpers for arenas whose block
//! traffic can be observed.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use indexmap::IndexMap;
use starfield_arena::{Alignment, Arena};
use starfield_core::{Catalog, CelestialObject, Position};

pub use starfield_arena::{AllocationCounter, CountingAllocator, SystemAllocator};

/// A celestial object with a fixed position and size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MockObject {
    pub position: Position,
    /// Angular size in arcseconds.
    pub dimension: f64,
}

impl MockObject {
    /// A point-like object at the given coordinates, normalized.
    pub fn star(right_ascension: f64, declination: f64) -> Self {
        Self {
            position: Position::new(right_ascension, declination),
            dimension: 0.0,
        }
    }

    /// An extended object of `dimension` arcseconds at the given coordinates.
    pub fn extended(right_ascension: f64, declination: f64, dimension: f64) -> Self {
        Self {
            position: Position::new(right_ascension, declination),
            dimension,
        }
    }
}

impl CelestialObject for MockObject {
    fn position(&self) -> Position {
        self.position
    }

    fn dimension(&self) -> f64 {
        self.dimension
    }
}

/// Catalog backed by a `Vec<MockObject>`, built incrementally.
#[derive(Clone, Debug, Default)]
pub struct VecCatalog {
    objects: Vec<MockObject>,
}

impl VecCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an object, builder style.
    pub fn with(mut self, object: MockObject) -> Self {
        self.objects.push(object);
        self
    }

    pub fn push(&mut self, object: MockObject) {
        self.objects.push(object);
    }

    pub fn objects(&self) -> &[MockObject] {
        &self.objects
    }
}

impl FromIterator<MockObject> for VecCatalog {
    fn from_iter<I: IntoIterator<Item = MockObject>>(iter: I) -> Self {
        Self {
            objects: iter.into_iter().collect(),
        }
    }
}

impl Catalog for VecCatalog {
    type Object = MockObject;

    fn object_count(&self) -> usize {
        self.objects.len()
    }

    fn object(&self, index: usize) -> &MockObject {
        &self.objects[index]
    }
}

/// Catalog keyed by designation, indexed in insertion order.
///
/// Re-inserting a designation replaces the object in place, keeping its
/// index.
#[derive(Clone, Debug, Default)]
pub struct NamedCatalog {
    objects: IndexMap<String, MockObject>,
}

impl NamedCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the object called `name`. Returns its index.
    pub fn insert(&mut self, name: impl Into<String>, object: MockObject) -> usize {
        self.objects.insert_full(name.into(), object).0
    }

    pub fn get(&self, name: &str) -> Option<&MockObject> {
        self.objects.get(name)
    }

    /// The designation of the object at `index`.
    pub fn name(&self, index: usize) -> Option<&str> {
        self.objects.get_index(index).map(|(name, _)| name.as_str())
    }
}

impl Catalog for NamedCatalog {
    type Object = MockObject;

    fn object_count(&self) -> usize {
        self.objects.len()
    }

    fn object(&self, index: usize) -> &MockObject {
        match self.objects.get_index(index) {
            Some((_, object)) => object,
            None => panic!(
                "object index {index} out of range for catalog of {}",
                self.objects.len()
            ),
        }
    }
}

/// An arena over the system allocator whose block traffic is counted.
pub fn counting_arena(alignment: Alignment) -> (Arena, AllocationCounter) {
    let allocator = CountingAllocator::new(SystemAllocator);
    let counter = allocator.counter();
    (Arena::make(alignment, allocator), counter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_catalog_keeps_insertion_order() {
        let mut catalog = NamedCatalog::new();
        assert_eq!(catalog.insert("Vega", MockObject::star(279.2, 38.8)), 0);
        assert_eq!(catalog.insert("Deneb", MockObject::star(310.4, 45.3)), 1);
        assert_eq!(catalog.insert("Vega", MockObject::star(279.3, 38.8)), 0);
        assert_eq!(catalog.object_count(), 2);
        assert_eq!(catalog.name(1), Some("Deneb"));
        assert_eq!(catalog.object(0).position.right_ascension, 279.3);
    }

    #[test]
    fn vec_catalog_builder() {
        let catalog = VecCatalog::new()
            .with(MockObject::star(1.0, 1.0))
            .with(MockObject::extended(2.0, 2.0, 60.0));
        assert_eq!(catalog.object_count(), 2);
        assert_eq!(catalog.object(1).dimension(), 60.0);
    }

    #[test]
    fn counting_arena_reports_first_block() {
        let (arena, counter) = counting_arena(Alignment::Eight);
        assert_eq!(counter.live_blocks(), 1);
        drop(arena);
        assert_eq!(counter.live_blocks(), 0);
    }
}
