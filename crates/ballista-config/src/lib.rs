//! Configuration system for Ballista.
//!
//! Provides runtime-configurable settings that persist to disk as RON files.
//! Supports CLI overrides via clap, hot-reload detection, and forward/backward
//! compatible serialization.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    CameraConfig, Config, DebugConfig, FlightConfig, HostConfig, ImpactConfig, TrajectoryConfig,
};
pub use error::ConfigError;
