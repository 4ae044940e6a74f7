//! Deterministic synthetic catalogs.
//!
//! All generators are seeded, so a failing test can be replayed exactly.

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use crate::{MockObject, VecCatalog};

/// Largest dimension produced by [`synthetic_catalog`], in arcseconds
/// (half a degree).
pub const MAX_SYNTHETIC_DIMENSION: f64 = 1800.0;

/// `count` objects scattered uniformly over the sky.
///
/// Roughly one object in four is point-like (dimension 0); the rest have
/// dimensions up to [`MAX_SYNTHETIC_DIMENSION`].
pub fn synthetic_catalog(count: usize, seed: u64) -> VecCatalog {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let right_ascension = rng.random_range(0.0..360.0);
            let declination = rng.random_range(-90.0..=90.0);
            let dimension = if rng.random_bool(0.25) {
                0.0
            } else {
                rng.random_range(0.0..MAX_SYNTHETIC_DIMENSION)
            };
            MockObject::extended(right_ascension, declination, dimension)
        })
        .collect()
}

/// Point-like objects on a regular grid, `step` degrees apart.
///
/// Right-ascension runs over `[0, 360)` and declination over
/// `[-90 + step, 90 - step]`, avoiding the poles.
pub fn grid_catalog(step: f64) -> VecCatalog {
    let mut catalog = VecCatalog::new();
    let mut declination = -90.0 + step;
    while declination <= 90.0 - step {
        let mut right_ascension = 0.0;
        while right_ascension < 360.0 {
            catalog.push(MockObject::star(right_ascension, declination));
            right_ascension += step;
        }
        declination += step;
    }
    catalog
}
