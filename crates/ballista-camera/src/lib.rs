//! Camera control for the flight view: a smoothed chase camera and a static overview.

mod chase_camera;
mod smoothing;

pub use chase_camera::{CameraMode, CameraTarget, ChaseCamera, ChaseParams, OverviewParams};
pub use smoothing::{frames_to_converge, look_rotation, step};
