//! Face mesh landmarks and the named anchor indices used for shape measurement.
//!
//! Indices follow the 468-point face mesh numbering. The ear anchors reuse the
//! outer cheek contour points, which sit on the face silhouette next to the ears.

pub const HEAD_TOP: usize = 10;
pub const NOSE_TIP: usize = 4;
pub const FOREHEAD_LEFT: usize = 103;
pub const FOREHEAD_RIGHT: usize = 332;
pub const JAW_LEFT: usize = 132;
pub const JAW_RIGHT: usize = 361;
pub const CHIN_BOTTOM: usize = 152;
pub const CHEEK_LEFT: usize = 234;
pub const CHEEK_RIGHT: usize = 454;
pub const EAR_LEFT: usize = CHEEK_LEFT;
pub const EAR_RIGHT: usize = CHEEK_RIGHT;

/// Smallest point count that covers every named anchor.
pub const REQUIRED_POINTS: usize = CHEEK_RIGHT + 1;

/// A 2-D point in image coordinates.
pub type Point = (f64, f64);

/// One frame's landmark points, indexed by mesh number.
#[derive(Clone, Debug, PartialEq)]
pub struct LandmarkSet {
    points: Vec<Point>,
}

impl LandmarkSet {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Builds a set of [`REQUIRED_POINTS`] points at the origin with the
    /// given anchors placed. Useful when only the named anchors are known.
    pub fn from_anchors(anchors: &[(usize, Point)]) -> Self {
        let len = anchors
            .iter()
            .map(|(i, _)| i + 1)
            .max()
            .unwrap_or(0)
            .max(REQUIRED_POINTS);
        let mut points = vec![(0.0, 0.0); len];
        for &(i, p) in anchors {
            points[i] = p;
        }
        Self { points }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The point at `index`, or `None` when absent or not finite.
    pub fn get(&self, index: usize) -> Option<Point> {
        self.points
            .get(index)
            .copied()
            .filter(|(x, y)| x.is_finite() && y.is_finite())
    }
}
