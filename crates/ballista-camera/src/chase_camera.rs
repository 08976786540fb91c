//! Chase and overview camera targets with per-frame exponential smoothing.

use std::fmt;
use std::str::FromStr;

use ballista_scene::CameraRig;
use glam::DVec3;
use tracing::debug;

use crate::smoothing::step;

/// Which framing the camera is heading toward.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CameraMode {
    /// Fixed overview of the whole globe.
    Static,
    /// Behind and above the projectile, looking ahead of it.
    #[default]
    Chase,
}

impl CameraMode {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            CameraMode::Static => CameraMode::Chase,
            CameraMode::Chase => CameraMode::Static,
        }
    }
}

impl fmt::Display for CameraMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CameraMode::Static => f.write_str("static"),
            CameraMode::Chase => f.write_str("chase"),
        }
    }
}

impl FromStr for CameraMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "static" | "overview" => Ok(CameraMode::Static),
            "chase" | "follow" => Ok(CameraMode::Chase),
            other => Err(format!("unknown camera mode `{other}` (expected chase or static)")),
        }
    }
}

/// Tuning for chase framing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChaseParams {
    /// Distance behind the projectile along its direction of travel.
    pub distance: f64,
    /// Lift along the local radial "up" through the projectile.
    pub height: f64,
    /// How far ahead of the projectile the camera aims.
    pub look_ahead: f64,
    /// Fraction of the remaining distance covered per frame.
    pub smoothing: f64,
}

impl Default for ChaseParams {
    fn default() -> Self {
        Self {
            distance: 0.6,
            height: 0.25,
            look_ahead: 0.5,
            smoothing: 0.08,
        }
    }
}

/// Tuning for the static overview.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverviewParams {
    /// Fixed eye position.
    pub position: DVec3,
    /// Fixed aim point.
    pub look_at: DVec3,
    /// Fraction of the remaining distance covered per frame.
    pub smoothing: f64,
}

impl Default for OverviewParams {
    fn default() -> Self {
        Self {
            position: DVec3::new(3.0, 2.0, 3.0),
            look_at: DVec3::ZERO,
            smoothing: 0.02,
        }
    }
}

/// Where the camera wants to be this frame and how fast to get there.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraTarget {
    /// Eye position to approach.
    pub desired_position: DVec3,
    /// Point to aim at.
    pub look_at: DVec3,
    /// Smoothing factor for [`step`].
    pub smoothing: f64,
}

/// Live camera state plus the parameters for both modes.
#[derive(Clone, Debug)]
pub struct ChaseCamera {
    /// Active mode. Read by [`update`](Self::update); changed only through the setters.
    mode: CameraMode,
    /// Chase tuning.
    pub chase: ChaseParams,
    /// Overview tuning.
    pub overview: OverviewParams,
    position: DVec3,
    look_at: DVec3,
}

impl Default for ChaseCamera {
    fn default() -> Self {
        Self::new(CameraMode::default(), ChaseParams::default(), OverviewParams::default())
    }
}

impl ChaseCamera {
    /// Create a camera parked at the overview position.
    pub fn new(mode: CameraMode, chase: ChaseParams, overview: OverviewParams) -> Self {
        Self {
            mode,
            chase,
            overview,
            position: overview.position,
            look_at: overview.look_at,
        }
    }

    /// Active mode.
    pub fn mode(&self) -> CameraMode {
        self.mode
    }

    /// Switch mode. Takes effect on the next [`update`](Self::update); the
    /// regular smoothing handles the transition.
    pub fn set_mode(&mut self, mode: CameraMode) {
        if mode != self.mode {
            debug!(from = %self.mode, to = %mode, "camera mode changed");
            self.mode = mode;
        }
    }

    /// Flip between chase and static, returning the new mode.
    pub fn toggle_mode(&mut self) -> CameraMode {
        self.set_mode(self.mode.toggled());
        self.mode
    }

    /// Current eye position.
    pub fn position(&self) -> DVec3 {
        self.position
    }

    /// Current aim point.
    pub fn look_at(&self) -> DVec3 {
        self.look_at
    }

    /// Move the live camera without smoothing.
    pub fn snap_to(&mut self, position: DVec3, look_at: DVec3) {
        self.position = position;
        self.look_at = look_at;
    }

    /// Desired framing for `mode` given the projectile's position and unit
    /// direction of travel.
    ///
    /// Chase: `pos - dir * distance + normalize(pos) * height`, aiming at
    /// `pos + dir * look_ahead`. Static: the overview pose.
    pub fn compute_target(
        &self,
        mode: CameraMode,
        projectile_pos: DVec3,
        projectile_dir: DVec3,
    ) -> CameraTarget {
        match mode {
            CameraMode::Chase => {
                let up = projectile_pos.normalize_or_zero();
                CameraTarget {
                    desired_position: projectile_pos - projectile_dir * self.chase.distance
                        + up * self.chase.height,
                    look_at: projectile_pos + projectile_dir * self.chase.look_ahead,
                    smoothing: self.chase.smoothing,
                }
            }
            CameraMode::Static => CameraTarget {
                desired_position: self.overview.position,
                look_at: self.overview.look_at,
                smoothing: self.overview.smoothing,
            },
        }
    }

    /// Recompute the target for the active mode and step the live camera toward it.
    ///
    /// The eye is smoothed; the aim point is taken directly from the target.
    pub fn update(&mut self, projectile_pos: DVec3, projectile_dir: DVec3) -> CameraTarget {
        let target = self.compute_target(self.mode, projectile_pos, projectile_dir);
        self.position = step(self.position, target.desired_position, target.smoothing);
        self.look_at = target.look_at;
        target
    }

    /// Write the live pose onto a render camera.
    pub fn apply(&self, rig: &mut impl CameraRig) {
        rig.set_position(self.position);
        rig.look_at(self.look_at);
    }
}
