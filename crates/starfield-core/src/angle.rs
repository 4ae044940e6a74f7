//! Angle unit helpers.

/// Arcseconds in one degree.
pub const ARCSECONDS_PER_DEGREE: f64 = 3600.0;

/// Convert an angle in arcseconds to fractional degrees.
///
/// The sign of the input is preserved.
pub fn arcseconds_to_degrees(arcseconds: f64) -> f64 {
    arcseconds / ARCSECONDS_PER_DEGREE
}
