//! Mapping from config sections to engine parameters.

use ballista_camera::{CameraMode, ChaseCamera, ChaseParams, OverviewParams};
use ballista_config::{CameraConfig, ImpactConfig, TrajectoryConfig};
use ballista_flight::FlashParams;
use ballista_trajectory::ArcProfile;
use glam::DVec3;

use crate::AppError;

/// Arc shape from `trajectory`.
pub fn arc_profile(config: &TrajectoryConfig) -> ArcProfile {
    ArcProfile {
        surface_radius: config.surface_radius,
        surface_offset: config.surface_offset,
        max_arc_height: config.max_arc_height,
    }
}

/// Flash ramp from `impact`.
pub fn flash_params(config: &ImpactConfig) -> FlashParams {
    FlashParams {
        start_scale: config.start_scale,
        scale_step: config.scale_step,
        end_scale: config.end_scale,
    }
}

/// Camera parked at the overview, in the configured initial mode.
///
/// # Errors
///
/// [`AppError::CameraMode`] if `initial_mode` is neither chase nor static.
pub fn chase_camera(config: &CameraConfig) -> Result<ChaseCamera, AppError> {
    let mode: CameraMode = config.initial_mode.parse().map_err(AppError::CameraMode)?;
    let chase = ChaseParams {
        distance: config.chase_distance,
        height: config.chase_height,
        look_ahead: config.look_ahead,
        smoothing: config.chase_smoothing,
    };
    let overview = OverviewParams {
        position: DVec3::from_array(config.overview_position),
        look_at: DVec3::ZERO,
        smoothing: config.overview_smoothing,
    };
    Ok(ChaseCamera::new(mode, chase, overview))
}
