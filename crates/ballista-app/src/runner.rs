//! Host frame loop.

use ballista_config::Config;
use ballista_flight::ImpactEvent;
use ballista_geo::unproject;
use ballista_scene::FlightScene;
use tracing::info;

use crate::frame_clock::FrameClock;
use crate::session::{FlightSession, FrameReport};

/// How the host drives frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunOptions {
    /// Simulated display refresh in Hz.
    pub frame_rate: u32,
    /// Frame cap; 0 runs until the session finishes.
    pub max_frames: u64,
    /// Sleep between frames to match `frame_rate` in wall-clock time.
    pub realtime: bool,
    /// Log a telemetry line every N frames; 0 disables.
    pub telemetry_interval: u64,
}

impl RunOptions {
    /// Options from the `host` and `debug` sections.
    pub fn from_config(config: &Config) -> Self {
        Self {
            frame_rate: config.host.frame_rate,
            max_frames: config.host.max_frames,
            realtime: config.host.realtime,
            telemetry_interval: config.debug.telemetry_interval,
        }
    }
}

/// Outcome of [`run`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RunSummary {
    /// Frames run.
    pub frames: u64,
    /// The impact, if the flight got that far.
    pub impact: Option<ImpactEvent>,
    /// Whether the flight and its flash both completed.
    pub finished: bool,
}

/// Drive `session` against `scene` until it finishes or hits the frame cap.
pub fn run<S: FlightScene>(
    session: &mut FlightSession,
    scene: &mut S,
    options: &RunOptions,
) -> RunSummary {
    let mut clock = FrameClock::new(options.frame_rate);

    while !should_stop(session, options) {
        let due = if options.realtime {
            let due = clock.poll();
            if due == 0 {
                std::thread::sleep(clock.until_next_frame());
                continue;
            }
            due
        } else {
            1
        };

        for _ in 0..due {
            let report = session.frame(scene);
            log_frame(&report, options.telemetry_interval);
            if should_stop(session, options) {
                break;
            }
        }
    }

    let summary = RunSummary {
        frames: session.frames(),
        impact: session.impact(),
        finished: session.is_finished(),
    };
    info!(
        frames = summary.frames,
        finished = summary.finished,
        "run complete"
    );
    summary
}

fn should_stop(session: &FlightSession, options: &RunOptions) -> bool {
    session.is_finished() || (options.max_frames > 0 && session.frames() >= options.max_frames)
}

fn log_frame(report: &FrameReport, interval: u64) {
    if let Some(event) = report.impact {
        let (site, _) = unproject(event.position);
        info!(frame = report.frame, site = %site, "impact");
    }
    if interval > 0 && report.frame % interval == 0 {
        info!(
            frame = report.frame,
            phase = ?report.phase,
            position = ?report.position,
            camera = ?report.camera_position,
            "telemetry"
        );
    }
}
