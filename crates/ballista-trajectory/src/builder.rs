//! Sine-profiled arc construction over projected waypoints.

use std::f64::consts::PI;

use ballista_geo::{GeoPoint, project};
use tracing::debug;

use crate::{FlightPath, TrajectoryError};

/// Radial shape of the flight arc.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcProfile {
    /// Radius of the rendered globe.
    pub surface_radius: f64,
    /// Clearance above the surface at launch and impact.
    pub surface_offset: f64,
    /// Extra height added at the apex of the arc.
    pub max_arc_height: f64,
}

impl Default for ArcProfile {
    fn default() -> Self {
        Self {
            surface_radius: 1.0,
            surface_offset: 0.01,
            max_arc_height: 0.35,
        }
    }
}

impl ArcProfile {
    /// Radius at both ends of the arc.
    pub fn base_radius(&self) -> f64 {
        self.surface_radius + self.surface_offset
    }

    /// Radius for normalised progress `t` in `[0, 1]`: `base + sin(πt) * max`.
    pub fn radius_at(&self, t: f64) -> f64 {
        self.base_radius() + (PI * t).sin() * self.max_arc_height
    }
}

/// Builds a [`FlightPath`] from an ordered list of waypoints.
#[derive(Clone, Copy, Debug, Default)]
pub struct TrajectoryBuilder {
    profile: ArcProfile,
}

impl TrajectoryBuilder {
    /// Create a builder with the given arc profile.
    pub fn new(profile: ArcProfile) -> Self {
        Self { profile }
    }

    /// The arc profile used for every build.
    pub fn profile(&self) -> &ArcProfile {
        &self.profile
    }

    /// Project every waypoint at its arc radius, one point per waypoint.
    ///
    /// # Errors
    ///
    /// [`TrajectoryError::InsufficientWaypoints`] for fewer than two waypoints,
    /// [`TrajectoryError::MalformedWaypoint`] for the first waypoint that is
    /// non-finite or outside the lat/lon range.
    pub fn build(&self, waypoints: &[GeoPoint]) -> Result<FlightPath, TrajectoryError> {
        let n = waypoints.len();
        if n < 2 {
            return Err(TrajectoryError::InsufficientWaypoints { count: n });
        }

        if let Some((index, wp)) = waypoints.iter().enumerate().find(|(_, wp)| !wp.is_valid()) {
            return Err(TrajectoryError::MalformedWaypoint {
                index,
                reason: format!("lat={} lon={} is out of range", wp.lat, wp.lon),
            });
        }

        let last = (n - 1) as f64;
        let points = waypoints
            .iter()
            .enumerate()
            .map(|(i, wp)| {
                let radius = self.profile.radius_at(i as f64 / last);
                project(wp.lat, wp.lon, radius)
            })
            .collect();

        let path = FlightPath::from_points(points)?;
        debug!(
            points = path.len(),
            length = path.total_length(),
            "built trajectory"
        );
        Ok(path)
    }
}
