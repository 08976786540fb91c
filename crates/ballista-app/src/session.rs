//! One flight from launch to the end of the impact flash.

use ballista_camera::{CameraMode, ChaseCamera};
use ballista_config::Config;
use ballista_flight::{
    FlashFrame, FlashParams, FlightAnimator, FlightPhase, ImpactEvent, ImpactFlash,
};
use ballista_scene::{EffectId, FlightScene};
use ballista_trajectory::FlightPath;
use glam::DVec3;
use tracing::debug;

use crate::{AppError, settings};

/// What happened during one [`FlightSession::frame`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameReport {
    /// 1-based index of the frame just run.
    pub frame: u64,
    /// Flight phase after the frame.
    pub phase: FlightPhase,
    /// Projectile position written to the scene.
    pub position: DVec3,
    /// Camera eye position written to the scene.
    pub camera_position: DVec3,
    /// Set on the single frame where impact occurred.
    pub impact: Option<ImpactEvent>,
    /// Whether an impact flash is still in the scene.
    pub flash_active: bool,
}

/// Ties the animator, the camera, and the impact flash to a scene.
#[derive(Debug)]
pub struct FlightSession {
    animator: FlightAnimator,
    camera: ChaseCamera,
    flash_params: FlashParams,
    flash: Option<(ImpactFlash, EffectId)>,
    impact: Option<ImpactEvent>,
    frame: u64,
}

impl FlightSession {
    /// Start a session over `path`.
    pub fn new(path: FlightPath, step: f64, camera: ChaseCamera, flash_params: FlashParams) -> Self {
        Self {
            animator: FlightAnimator::new(path, step),
            camera,
            flash_params,
            flash: None,
            impact: None,
            frame: 0,
        }
    }

    /// Start a session with the engine parameters from `config`.
    ///
    /// # Errors
    ///
    /// [`AppError::CameraMode`] if the configured initial camera mode is unknown.
    pub fn from_config(config: &Config, path: FlightPath) -> Result<Self, AppError> {
        Ok(Self::new(
            path,
            config.flight.step,
            settings::chase_camera(&config.camera)?,
            settings::flash_params(&config.impact),
        ))
    }

    /// Draw the route and place the projectile on the launch point.
    pub fn attach<S: FlightScene>(&self, scene: &mut S) {
        scene.set_route(self.animator.path().points());
        let (projectile, exhaust, camera) = scene.rig();
        self.animator.apply(projectile, exhaust);
        self.camera.apply(camera);
    }

    /// The flight animator.
    pub fn animator(&self) -> &FlightAnimator {
        &self.animator
    }

    /// The camera controller.
    pub fn camera(&self) -> &ChaseCamera {
        &self.camera
    }

    /// Active camera mode.
    pub fn camera_mode(&self) -> CameraMode {
        self.camera.mode()
    }

    /// Switch camera mode from the next frame on.
    pub fn set_camera_mode(&mut self, mode: CameraMode) {
        self.camera.set_mode(mode);
    }

    /// Flip camera mode, returning the new one.
    pub fn toggle_camera_mode(&mut self) -> CameraMode {
        self.camera.toggle_mode()
    }

    /// Impact recorded by this session, if it has happened.
    pub fn impact(&self) -> Option<ImpactEvent> {
        self.impact
    }

    /// Frames run so far.
    pub fn frames(&self) -> u64 {
        self.frame
    }

    /// Impacted and the flash has been removed.
    pub fn is_finished(&self) -> bool {
        self.impact.is_some() && self.flash.is_none()
    }

    /// Run one frame: advance the flight, drive the flash, then write the
    /// projectile, exhaust, and camera transforms.
    pub fn frame<S: FlightScene>(&mut self, scene: &mut S) -> FrameReport {
        self.frame += 1;

        let impact = self.animator.advance();
        if let Some(event) = impact {
            let id = scene.spawn_flash(event.position);
            self.flash = Some((ImpactFlash::start(event.position, self.flash_params), id));
            self.impact = Some(event);
        }

        let finished = match self.flash.as_mut() {
            Some((flash, id)) => match flash.tick() {
                FlashFrame::Active { scale, opacity } => {
                    scene.update_flash(*id, scale, opacity);
                    None
                }
                FlashFrame::Finished => Some(*id),
            },
            None => None,
        };
        if let Some(id) = finished {
            scene.remove_flash(id);
            self.flash = None;
            debug!(frame = self.frame, "impact flash finished");
        }

        let position = self.animator.current_position();
        let direction = self.animator.current_orientation();
        self.camera.update(position, direction);

        let (projectile, exhaust, camera) = scene.rig();
        self.animator.apply(projectile, exhaust);
        self.camera.apply(camera);

        FrameReport {
            frame: self.frame,
            phase: self.animator.phase(),
            position,
            camera_position: self.camera.position(),
            impact,
            flash_active: self.flash.is_some(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ballista_geo::GeoPoint;
    use ballista_scene::HeadlessScene;
    use ballista_trajectory::TrajectoryBuilder;

    fn session(step: f64) -> FlightSession {
        let path = TrajectoryBuilder::default()
            .build(&[
                GeoPoint::new(0.0, 0.0),
                GeoPoint::new(0.0, 90.0),
                GeoPoint::new(0.0, 180.0),
            ])
            .unwrap();
        let mut config = Config::default();
        config.flight.step = step;
        FlightSession::from_config(&config, path).unwrap()
    }

    #[test]
    fn test_attach_places_projectile_at_launch() {
        let s = session(0.5);
        let mut scene = HeadlessScene::new(DVec3::new(3.0, 2.0, 3.0));
        s.attach(&mut scene);
        assert_eq!(scene.route.len(), 3);
        assert_eq!(scene.projectile.position, s.animator().path().start());
        assert_eq!(scene.exhaust.position, scene.projectile.position);
    }

    #[test]
    fn test_single_flash_spawned_and_removed() {
        let mut s = session(0.5);
        let mut scene = HeadlessScene::new(DVec3::new(3.0, 2.0, 3.0));
        s.attach(&mut scene);

        let mut impacts = 0;
        for _ in 0..100 {
            let report = s.frame(&mut scene);
            if report.impact.is_some() {
                impacts += 1;
                assert_eq!(report.frame, 4);
                assert!(report.flash_active);
                assert_eq!(scene.live_flashes(), 1);
            }
        }

        assert_eq!(impacts, 1);
        assert_eq!(scene.flashes_spawned(), 1);
        assert_eq!(scene.live_flashes(), 0);
        assert!(s.is_finished());
    }

    #[test]
    fn test_flash_runs_its_lifetime() {
        let mut s = session(0.5);
        let mut scene = HeadlessScene::new(DVec3::ZERO);
        let mut flash_frames = 0;
        while !s.is_finished() {
            let report = s.frame(&mut scene);
            if report.flash_active {
                flash_frames += 1;
            }
        }
        // Spawned and ticked on the impact frame, removed on the lifetime-th tick.
        assert_eq!(flash_frames, FlashParams::default().lifetime_ticks() - 1);
        assert_eq!(s.frames(), 4 + u64::from(FlashParams::default().lifetime_ticks()) - 1);
    }

    #[test]
    fn test_scene_tracks_projectile() {
        let mut s = session(0.25);
        let mut scene = HeadlessScene::new(DVec3::ZERO);
        let report = s.frame(&mut scene);
        assert_eq!(scene.projectile.position, report.position);
        assert_eq!(scene.projectile.forward, s.animator().current_orientation());
        assert_eq!(scene.exhaust.forward, -scene.projectile.forward);
        assert_eq!(scene.camera.position, report.camera_position);
        assert_eq!(scene.camera.target, s.camera().look_at());
    }

    #[test]
    fn test_toggle_takes_effect_next_frame() {
        let mut s = session(0.01);
        let mut scene = HeadlessScene::new(DVec3::ZERO);
        s.frame(&mut scene);
        assert_eq!(s.toggle_camera_mode(), CameraMode::Static);
        s.frame(&mut scene);
        assert_eq!(scene.camera.target, DVec3::ZERO);
        s.set_camera_mode(CameraMode::Chase);
        s.frame(&mut scene);
        assert_ne!(scene.camera.target, DVec3::ZERO);
    }
}
