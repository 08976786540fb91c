//! Immutable ordered sequence of globe-space points.

use glam::DVec3;

use crate::TrajectoryError;

/// An ordered polyline of at least two points that the projectile follows.
///
/// Segment `i` runs from `points[i]` to `points[i + 1]`. The point slice is
/// also what a renderer draws as the route line.
#[derive(Clone, Debug, PartialEq)]
pub struct FlightPath {
    points: Vec<DVec3>,
}

impl FlightPath {
    /// Wrap an existing point list. Fails if it has fewer than two points.
    pub fn from_points(points: Vec<DVec3>) -> Result<Self, TrajectoryError> {
        if points.len() < 2 {
            return Err(TrajectoryError::InsufficientWaypoints {
                count: points.len(),
            });
        }
        Ok(Self { points })
    }

    /// All points in flight order.
    pub fn points(&self) -> &[DVec3] {
        &self.points
    }

    /// Number of points (always ≥ 2).
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Number of straight segments, `len() - 1`.
    pub fn segment_count(&self) -> usize {
        self.points.len() - 1
    }

    /// Endpoints of segment `index`, or `None` past the last segment.
    pub fn segment(&self, index: usize) -> Option<(DVec3, DVec3)> {
        let start = *self.points.get(index)?;
        let end = *self.points.get(index + 1)?;
        Some((start, end))
    }

    /// Launch point.
    pub fn start(&self) -> DVec3 {
        self.points[0]
    }

    /// Impact point.
    pub fn end(&self) -> DVec3 {
        self.points[self.points.len() - 1]
    }

    /// Distance from the globe centre of point `index`.
    pub fn radius_at(&self, index: usize) -> Option<f64> {
        self.points.get(index).map(|p| p.length())
    }

    /// Index of the point farthest from the globe centre (first one on ties).
    pub fn peak_index(&self) -> usize {
        let mut best = 0;
        let mut best_radius = f64::MIN;
        for (i, p) in self.points.iter().enumerate() {
            let r = p.length();
            if r > best_radius + 1e-12 {
                best = i;
                best_radius = r;
            }
        }
        best
    }

    /// Sum of segment chord lengths.
    pub fn total_length(&self) -> f64 {
        self.points.windows(2).map(|w| w[0].distance(w[1])).sum()
    }
}
