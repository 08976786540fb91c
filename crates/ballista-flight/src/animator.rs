//! Segment-by-segment flight state machine.

use ballista_scene::Placeable;
use ballista_trajectory::FlightPath;
use glam::DVec3;
use tracing::{debug, info};

/// Fractional segment advance per frame used by the reference viewer.
///
/// The step is frame-coupled: flight duration scales with the host's refresh
/// rate unless the host pins its frame rate.
pub const DEFAULT_STEP: f64 = 0.003;

/// Segment progress this close to `1.0` counts as complete, so rounding in the
/// accumulated steps never costs an extra tick.
const ROLLOVER_EPSILON: f64 = 1e-9;

/// Progress of the projectile along its path.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FlightState {
    /// Segment currently being flown. `0..=len-2` while flying.
    pub segment_index: usize,
    /// Fraction of the current segment covered, in `[0, 1)`.
    pub segment_progress: f64,
    /// Set once the last segment completes. Terminal.
    pub impacted: bool,
}

impl FlightState {
    /// `segment_index + segment_progress`; never decreases while flying.
    pub fn distance_key(&self) -> f64 {
        self.segment_index as f64 + self.segment_progress
    }
}

/// Coarse phase of the flight.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlightPhase {
    /// Still travelling along the path.
    Flying,
    /// Reached the end of the path.
    Impacted,
}

/// Emitted exactly once, on the tick that completes the final segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImpactEvent {
    /// The final path point.
    pub position: DVec3,
    /// Number of ticks flown, including the impact tick.
    pub tick: u64,
}

/// Advances a projectile along a [`FlightPath`] one frame at a time.
#[derive(Clone, Debug)]
pub struct FlightAnimator {
    path: FlightPath,
    state: FlightState,
    step: f64,
    ticks: u64,
}

impl FlightAnimator {
    /// Start a flight at the beginning of `path`, advancing `step` per [`advance`](Self::advance).
    pub fn new(path: FlightPath, step: f64) -> Self {
        Self {
            path,
            state: FlightState::default(),
            step,
            ticks: 0,
        }
    }

    /// Replace the path and restart from its first point.
    pub fn load(&mut self, path: FlightPath) {
        self.path = path;
        self.state = FlightState::default();
        self.ticks = 0;
    }

    /// The path being flown.
    pub fn path(&self) -> &FlightPath {
        &self.path
    }

    /// Snapshot of the flight state.
    pub fn state(&self) -> FlightState {
        self.state
    }

    /// The configured per-frame step.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Ticks that advanced the flight (ticks after impact are not counted).
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Current phase.
    pub fn phase(&self) -> FlightPhase {
        if self.state.impacted {
            FlightPhase::Impacted
        } else {
            FlightPhase::Flying
        }
    }

    /// Overall completion in `[0, 1]`, measured in segments.
    pub fn progress_fraction(&self) -> f64 {
        if self.state.impacted {
            return 1.0;
        }
        self.state.distance_key() / self.path.segment_count() as f64
    }

    /// Advance by the configured step.
    pub fn advance(&mut self) -> Option<ImpactEvent> {
        self.tick(self.step)
    }

    /// Advance the current segment by `delta` and roll over to the next one
    /// when it completes.
    ///
    /// Leftover progress past `1.0` is dropped at a rollover, and a negative
    /// or non-finite `delta` counts as zero. Returns the impact event on the
    /// tick that finishes the last segment; every later call is a no-op.
    pub fn tick(&mut self, delta: f64) -> Option<ImpactEvent> {
        if self.state.impacted {
            return None;
        }

        let delta = if delta.is_finite() { delta.max(0.0) } else { 0.0 };
        self.ticks += 1;
        self.state.segment_progress += delta;

        if self.state.segment_progress < 1.0 - ROLLOVER_EPSILON {
            return None;
        }

        self.state.segment_progress = 0.0;
        self.state.segment_index += 1;

        if self.state.segment_index >= self.path.len() - 1 {
            self.state.impacted = true;
            let event = ImpactEvent {
                position: self.path.end(),
                tick: self.ticks,
            };
            info!(tick = event.tick, position = ?event.position, "projectile impacted");
            return Some(event);
        }

        debug!(
            segment = self.state.segment_index,
            of = self.path.segment_count(),
            "entered next segment"
        );
        None
    }

    /// Interpolated position on the current segment; the final point once impacted.
    pub fn current_position(&self) -> DVec3 {
        if self.state.impacted {
            return self.path.end();
        }
        let (start, end) = self.current_segment();
        start.lerp(end, self.state.segment_progress)
    }

    /// Unit direction from the current position toward the next path point.
    ///
    /// Once impacted, or if that vector vanishes, the direction of the nearest
    /// non-degenerate segment is used. Zero only when every point coincides.
    pub fn current_orientation(&self) -> DVec3 {
        if !self.state.impacted {
            let (_, end) = self.current_segment();
            let forward = (end - self.current_position()).normalize_or_zero();
            if forward != DVec3::ZERO {
                return forward;
            }
        }
        self.fallback_direction()
    }

    /// Facing of the exhaust plume: back toward where the projectile came from.
    pub fn exhaust_orientation(&self) -> DVec3 {
        -self.current_orientation()
    }

    /// Write the projectile and exhaust transforms onto scene handles.
    pub fn apply(&self, projectile: &mut impl Placeable, exhaust: &mut impl Placeable) {
        let position = self.current_position();
        let forward = self.current_orientation();
        projectile.set_position(position);
        projectile.set_forward(forward);
        exhaust.set_position(position);
        exhaust.set_forward(-forward);
    }

    fn current_segment(&self) -> (DVec3, DVec3) {
        let index = self.state.segment_index.min(self.path.segment_count() - 1);
        let points = self.path.points();
        (points[index], points[index + 1])
    }

    fn fallback_direction(&self) -> DVec3 {
        let points = self.path.points();
        let last = self.path.segment_count() - 1;
        let current = self.state.segment_index.min(last);

        (0..=current)
            .rev()
            .chain(current + 1..=last)
            .map(|i| (points[i + 1] - points[i]).normalize_or_zero())
            .find(|d| *d != DVec3::ZERO)
            .unwrap_or(DVec3::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ballista_geo::{GeoPoint, project};
    use ballista_scene::SceneNode;
    use ballista_trajectory::TrajectoryBuilder;

    const EPS: f64 = 1e-9;

    fn straight_path(n: usize) -> FlightPath {
        FlightPath::from_points((0..n).map(|i| DVec3::new(i as f64, 0.0, 0.0)).collect()).unwrap()
    }

    fn equator_path() -> FlightPath {
        TrajectoryBuilder::default()
            .build(&[
                GeoPoint::new(0.0, 0.0),
                GeoPoint::new(0.0, 90.0),
                GeoPoint::new(0.0, 180.0),
            ])
            .unwrap()
    }

    #[test]
    fn test_starts_at_first_point() {
        let anim = FlightAnimator::new(straight_path(3), DEFAULT_STEP);
        assert_eq!(anim.state(), FlightState::default());
        assert_eq!(anim.phase(), FlightPhase::Flying);
        assert_eq!(anim.current_position(), DVec3::ZERO);
        assert_eq!(anim.current_orientation(), DVec3::X);
    }

    #[test]
    fn test_position_interpolates_within_segment() {
        let mut anim = FlightAnimator::new(straight_path(3), 0.25);
        anim.advance();
        assert!((anim.current_position() - DVec3::new(0.25, 0.0, 0.0)).length() < EPS);
        anim.advance();
        assert!((anim.current_position() - DVec3::new(0.5, 0.0, 0.0)).length() < EPS);
    }

    #[test]
    fn test_reads_are_pure() {
        let mut anim = FlightAnimator::new(equator_path(), 0.1);
        anim.advance();
        anim.advance();
        let p = anim.current_position();
        let d = anim.current_orientation();
        for _ in 0..5 {
            assert_eq!(anim.current_position(), p);
            assert_eq!(anim.current_orientation(), d);
        }
    }

    #[test]
    fn test_orientation_points_at_next_point() {
        let path = equator_path();
        let next = path.points()[1];
        let mut anim = FlightAnimator::new(path, 0.3);
        anim.advance();
        let expected = (next - anim.current_position()).normalize();
        assert!((anim.current_orientation() - expected).length() < EPS);
        assert!((anim.current_orientation().length() - 1.0).abs() < EPS);
        assert!((anim.exhaust_orientation() + expected).length() < EPS);
    }

    #[test]
    fn test_monotonic_until_impact_then_frozen() {
        let mut anim = FlightAnimator::new(straight_path(5), 0.07);
        let mut last = anim.state().distance_key();
        while anim.phase() == FlightPhase::Flying {
            anim.advance();
            if anim.phase() == FlightPhase::Flying {
                let key = anim.state().distance_key();
                assert!(key >= last, "progress went backwards: {last} -> {key}");
                last = key;
            }
        }

        let frozen = anim.state();
        let frozen_ticks = anim.ticks();
        for _ in 0..10 {
            assert_eq!(anim.advance(), None);
        }
        assert_eq!(anim.state(), frozen);
        assert_eq!(anim.ticks(), frozen_ticks);
    }

    #[test]
    fn test_impact_tick_count_and_single_event() {
        for &(n, step) in &[
            (2usize, 0.003),
            (5, 0.003),
            (10, 0.05),
            (4, 0.1),
            (10, 0.1),
            (3, 0.2),
            (7, 0.01),
        ] {
            let mut anim = FlightAnimator::new(straight_path(n), step);
            let mut events = Vec::new();
            for _ in 0..1_000_000 {
                if let Some(e) = anim.advance() {
                    events.push(e);
                }
                if anim.phase() == FlightPhase::Impacted && anim.ticks() > 0 {
                    // Keep ticking a little to prove the event does not repeat.
                    for _ in 0..20 {
                        assert!(anim.advance().is_none());
                    }
                    break;
                }
            }
            assert_eq!(events.len(), 1, "n={n} step={step}");

            let per_segment = (1.0 / step).ceil() as i64;
            let expected = per_segment * (n as i64 - 1);
            let actual = events[0].tick as i64;
            assert!(
                (actual - expected).abs() <= 1,
                "n={n} step={step}: expected ~{expected} ticks, got {actual}"
            );
        }
    }

    #[test]
    fn test_tenth_steps_roll_over_on_tenth_tick() {
        // 0.1 summed ten times is 0.9999999999999999.
        let mut anim = FlightAnimator::new(straight_path(4), 0.1);
        for _ in 0..10 {
            assert!(anim.advance().is_none());
        }
        assert_eq!(anim.state().segment_index, 1);
        assert_eq!(anim.state().segment_progress, 0.0);

        let mut impact = None;
        while impact.is_none() {
            impact = anim.advance();
        }
        assert_eq!(impact.map(|e| e.tick), Some(30));
    }

    #[test]
    fn test_equator_scenario() {
        let path = equator_path();
        let mut anim = FlightAnimator::new(path, 0.5);

        assert_eq!(anim.advance(), None);
        assert_eq!(anim.advance(), None);
        assert_eq!(anim.state().segment_index, 1);
        assert_eq!(anim.state().segment_progress, 0.0);

        assert_eq!(anim.advance(), None);
        let event = anim.advance().expect("impact on the fourth tick");
        assert_eq!(event.tick, 4);
        assert!(anim.state().impacted);

        let expected = project(0.0, 180.0, 1.01);
        assert!((event.position - expected).length() < 1e-6);
        assert!((anim.current_position() - expected).length() < 1e-6);
        assert_eq!(anim.progress_fraction(), 1.0);
    }

    #[test]
    fn test_orientation_after_impact_uses_last_segment() {
        let mut anim = FlightAnimator::new(straight_path(3), 1.0);
        anim.advance();
        anim.advance();
        assert_eq!(anim.phase(), FlightPhase::Impacted);
        assert_eq!(anim.current_position(), DVec3::new(2.0, 0.0, 0.0));
        assert_eq!(anim.current_orientation(), DVec3::X);
    }

    #[test]
    fn test_degenerate_segment_falls_back() {
        let path = FlightPath::from_points(vec![DVec3::ZERO, DVec3::X, DVec3::X]).unwrap();
        let mut anim = FlightAnimator::new(path, 1.0);
        anim.advance();
        assert_eq!(anim.state().segment_index, 1);
        assert_eq!(anim.current_orientation(), DVec3::X);
    }

    #[test]
    fn test_negative_and_nan_steps_do_not_move() {
        let mut anim = FlightAnimator::new(straight_path(3), 0.1);
        anim.advance();
        let before = anim.state();
        anim.tick(-0.5);
        anim.tick(f64::NAN);
        assert_eq!(anim.state(), before);
    }

    #[test]
    fn test_load_resets_flight() {
        let mut anim = FlightAnimator::new(straight_path(2), 1.0);
        assert!(anim.advance().is_some());
        anim.load(straight_path(4));
        assert_eq!(anim.state(), FlightState::default());
        assert_eq!(anim.ticks(), 0);
        assert_eq!(anim.path().len(), 4);
        assert_eq!(anim.phase(), FlightPhase::Flying);
    }

    #[test]
    fn test_progress_fraction() {
        let mut anim = FlightAnimator::new(straight_path(3), 0.5);
        assert_eq!(anim.progress_fraction(), 0.0);
        anim.advance();
        assert!((anim.progress_fraction() - 0.25).abs() < EPS);
        anim.advance();
        assert!((anim.progress_fraction() - 0.5).abs() < EPS);
    }

    #[test]
    fn test_apply_writes_both_handles() {
        let mut anim = FlightAnimator::new(straight_path(3), 0.5);
        anim.advance();
        let mut projectile = SceneNode::default();
        let mut exhaust = SceneNode::default();
        anim.apply(&mut projectile, &mut exhaust);
        assert_eq!(projectile.position, DVec3::new(0.5, 0.0, 0.0));
        assert_eq!(exhaust.position, projectile.position);
        assert_eq!(projectile.forward, DVec3::X);
        assert_eq!(exhaust.forward, DVec3::NEG_X);
    }
}
