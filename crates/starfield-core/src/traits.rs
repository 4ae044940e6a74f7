//! Collaborator traits through which a catalog feeds the sky index.
//!
//! The index never computes or reinterprets astronomical positions. It
//! only asks each object where it is and how large it appears, and asks
//! the catalog how many objects it holds.

use crate::geometry::Position;

/// An object with a fixed position and angular size on the sky.
pub trait CelestialObject {
    /// The object's position.
    fn position(&self) -> Position;

    /// Apparent angular size in arcseconds.
    ///
    /// A dimension of zero denotes an object too small to have a catalogued
    /// size; the index treats it as one arcsecond across.
    fn dimension(&self) -> f64;
}

/// A read-only, indexable collection of [`CelestialObject`]s.
///
/// The catalog owns its objects. Any index built over it borrows them and
/// therefore cannot outlive it.
pub trait Catalog {
    /// The object type stored in this catalog.
    type Object: CelestialObject;

    /// Number of objects in the catalog.
    fn object_count(&self) -> usize;

    /// The object at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.object_count()`.
    fn object(&self, index: usize) -> &Self::Object;
}

impl<O: CelestialObject> Catalog for [O] {
    type Object = O;

    fn object_count(&self) -> usize {
        self.len()
    }

    fn object(&self, index: usize) -> &O {
        &self[index]
    }
}

impl<O: CelestialObject> Catalog for Vec<O> {
    type Object = O;

    fn object_count(&self) -> usize {
        self.len()
    }

    fn object(&self, index: usize) -> &O {
        &self[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Star(f64, f64);

    impl CelestialObject for Star {
        fn position(&self) -> Position {
            Position::new(self.0, self.1)
        }

        fn dimension(&self) -> f64 {
            0.0
        }
    }

    #[test]
    fn slice_catalog_indexes_in_order() {
        let stars = [Star(1.0, 2.0), Star(3.0, 4.0)];
        let catalog: &[Star] = &stars;
        assert_eq!(catalog.object_count(), 2);
        assert_eq!(catalog.object(1).position(), Position::raw(3.0, 4.0));
    }

    #[test]
    fn vec_catalog_indexes_in_order() {
        let stars = vec![Star(10.0, -5.0)];
        assert_eq!(stars.object_count(), 1);
        assert_eq!(stars.object(0).position().declination, -5.0);
    }

    #[test]
    #[should_panic]
    fn out_of_range_index_panics() {
        let stars: Vec<Star> = Vec::new();
        let _ = stars.object(0);
    }
}
