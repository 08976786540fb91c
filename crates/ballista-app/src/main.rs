//! The `ballista` binary: fly a route headlessly and log what the renderer would see.

use std::error::Error;
use std::process::ExitCode;

use ballista_app::platform::PlatformDirs;
use ballista_app::runner::{self, RunOptions};
use ballista_app::{AppError, FlightSession, settings, waypoints};
use ballista_config::{CliArgs, Config};
use ballista_scene::HeadlessScene;
use ballista_trajectory::TrajectoryBuilder;
use clap::Parser;
use glam::DVec3;
use tracing::info;

fn main() -> ExitCode {
    let args = CliArgs::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("ballista: {err}");
            let mut source = err.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}

fn run(args: &CliArgs) -> Result<(), AppError> {
    let dirs = match &args.config {
        Some(dir) => PlatformDirs::with_config_dir(dir),
        None => PlatformDirs::resolve()?,
    };
    dirs.create_dirs()?;

    let mut config = Config::load_or_create(&dirs.config_dir)?;
    config.apply_cli_overrides(args);
    config.validate()?;

    let log_file = ballista_log::init_logging(
        Some(dirs.log_dir.as_path()),
        cfg!(debug_assertions),
        Some(&config),
    );
    if let Some(log_file) = log_file {
        info!("JSON log at {}", log_file.display());
    }
    info!("Ballista {}", env!("CARGO_PKG_VERSION"));
    info!("Config dir: {}", dirs.config_dir.display());

    let route = waypoints::load_or_demo(&config.trajectory)?;
    if let (Some(first), Some(last)) = (route.first(), route.last()) {
        info!(
            "Route: {} -> {} ({} waypoints, {:.3} globe radii along the surface)",
            first,
            last,
            route.len(),
            first.surface_distance_to(last, 1.0)
        );
    }

    let path = TrajectoryBuilder::new(settings::arc_profile(&config.trajectory)).build(&route)?;
    info!(
        "Path: {} points, apex at index {}, {:.3} units long",
        path.len(),
        path.peak_index(),
        path.total_length()
    );

    let mut session = FlightSession::from_config(&config, path)?;
    let mut scene = HeadlessScene::new(DVec3::from_array(config.camera.overview_position));
    session.attach(&mut scene);
    info!(
        "Camera: {} | step {} per frame at {} Hz",
        session.camera_mode(),
        config.flight.step,
        config.host.frame_rate
    );

    let summary = runner::run(&mut session, &mut scene, &RunOptions::from_config(&config));
    match summary.impact {
        Some(impact) => info!(
            "Impact after {} flight frames; {} frames total",
            impact.tick, summary.frames
        ),
        None => info!("Stopped after {} frames before impact", summary.frames),
    }
    Ok(())
}
