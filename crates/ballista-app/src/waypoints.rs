//! Waypoint source: reads the route file, or falls back to a built-in route.

use std::path::Path;

use ballista_config::TrajectoryConfig;
use ballista_geo::{GeoPoint, great_circle};
use ballista_trajectory::parse_waypoints;
use tracing::{info, warn};

use crate::AppError;

/// Launch site of the built-in route (Cape Canaveral).
pub const DEMO_FROM: GeoPoint = GeoPoint {
    lat: 28.39,
    lon: -80.6,
};
/// Impact site of the built-in route (Ascension Island).
pub const DEMO_TO: GeoPoint = GeoPoint {
    lat: -7.95,
    lon: -14.36,
};
/// Number of waypoints on the built-in route.
pub const DEMO_SAMPLES: usize = 48;

/// Read and validate a waypoint JSON file.
///
/// # Errors
///
/// [`AppError::WaypointFile`] if the file cannot be read and
/// [`AppError::Trajectory`] if its contents are malformed.
pub fn load_waypoints(path: &Path) -> Result<Vec<GeoPoint>, AppError> {
    let json = std::fs::read_to_string(path).map_err(|source| AppError::WaypointFile {
        path: path.to_path_buf(),
        source,
    })?;
    let waypoints = parse_waypoints(&json)?;
    info!(
        count = waypoints.len(),
        path = %path.display(),
        "loaded waypoints"
    );
    Ok(waypoints)
}

/// The built-in great-circle route.
pub fn demo_waypoints() -> Vec<GeoPoint> {
    great_circle(DEMO_FROM, DEMO_TO, DEMO_SAMPLES)
}

/// Load the configured waypoint file, or fall back to [`demo_waypoints`]
/// unless `strict` is set.
pub fn load_or_demo(config: &TrajectoryConfig) -> Result<Vec<GeoPoint>, AppError> {
    match load_waypoints(&config.waypoints_file) {
        Ok(waypoints) => Ok(waypoints),
        Err(err) if !config.strict => {
            warn!(error = %err, "using built-in demo route");
            Ok(demo_waypoints())
        }
        Err(err) => Err(err),
    }
}
