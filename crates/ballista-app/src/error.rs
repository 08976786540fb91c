//! Host-level error type.

use std::path::PathBuf;

use ballista_config::ConfigError;
use ballista_trajectory::TrajectoryError;

use crate::platform::PlatformError;

/// Anything that stops the host from starting a flight.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Config could not be loaded, saved, or validated.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// OS directories could not be resolved or created.
    #[error(transparent)]
    Platform(#[from] PlatformError),

    /// The waypoint file could not be read.
    #[error("failed to read waypoints from {}", path.display())]
    WaypointFile {
        /// File that was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// Waypoints were read but do not form a valid trajectory.
    #[error(transparent)]
    Trajectory(#[from] TrajectoryError),

    /// `camera.initial_mode` is not a known mode.
    #[error("invalid camera mode: {0}")]
    CameraMode(String),
}
