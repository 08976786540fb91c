//! Command-line argument parsing for the `ballista` binary.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Ballista command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "ballista", about = "Animate a projectile arc over a globe")]
pub struct CliArgs {
    /// Waypoint JSON file (`[{"lat": .., "lon": ..}, ...]`).
    #[arg(long)]
    pub waypoints: Option<PathBuf>,

    /// Fraction of a segment covered per frame.
    #[arg(long)]
    pub speed: Option<f64>,

    /// Initial camera mode (chase or static).
    #[arg(long)]
    pub camera: Option<String>,

    /// Stop after this many frames.
    #[arg(long)]
    pub max_frames: Option<u64>,

    /// Pace frames against the wall clock.
    #[arg(long)]
    pub realtime: bool,

    /// Fail instead of flying the demo route when the waypoint file is unusable.
    #[arg(long)]
    pub strict: bool,

    /// Log level (error, warn, info, debug, trace) or a full filter string.
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(ref path) = args.waypoints {
            self.trajectory.waypoints_file = path.clone();
        }
        if let Some(step) = args.speed {
            self.flight.step = step;
        }
        if let Some(ref mode) = args.camera {
            self.camera.initial_mode = mode.clone();
        }
        if let Some(frames) = args.max_frames {
            self.host.max_frames = frames;
        }
        if args.realtime {
            self.host.realtime = true;
        }
        if args.strict {
            self.trajectory.strict = true;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
