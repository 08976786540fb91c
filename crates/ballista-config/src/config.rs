//! Configuration structs with reference defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const CONFIG_FILE: &str = "config.ron";

/// Top-level Ballista configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Arc shape and waypoint source.
    pub trajectory: TrajectoryConfig,
    /// Flight pacing.
    pub flight: FlightConfig,
    /// Chase and overview camera tuning.
    pub camera: CameraConfig,
    /// Impact flash ramp.
    pub impact: ImpactConfig,
    /// Host frame loop.
    pub host: HostConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Arc shape and waypoint source.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TrajectoryConfig {
    /// Radius of the rendered globe.
    pub surface_radius: f64,
    /// Clearance above the surface at launch and impact.
    pub surface_offset: f64,
    /// Extra height at the apex of the arc.
    pub max_arc_height: f64,
    /// JSON file holding the `[{lat, lon}, ...]` waypoint list.
    pub waypoints_file: PathBuf,
    /// Exit instead of flying the built-in demo route when the file cannot be used.
    pub strict: bool,
}

/// Flight pacing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FlightConfig {
    /// Fraction of a segment covered per frame.
    pub step: f64,
}

/// Camera tuning.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraConfig {
    /// Mode at startup: `"chase"` or `"static"`.
    pub initial_mode: String,
    /// Distance behind the projectile in chase mode.
    pub chase_distance: f64,
    /// Lift along the local up in chase mode.
    pub chase_height: f64,
    /// Aim distance ahead of the projectile in chase mode.
    pub look_ahead: f64,
    /// Per-frame smoothing factor in chase mode.
    pub chase_smoothing: f64,
    /// Eye position of the static overview.
    pub overview_position: [f64; 3],
    /// Per-frame smoothing factor in static mode.
    pub overview_smoothing: f64,
}

/// Impact flash ramp.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ImpactConfig {
    /// Scale when the flash appears.
    pub start_scale: f64,
    /// Scale added per frame.
    pub scale_step: f64,
    /// Scale at which the flash is removed.
    pub end_scale: f64,
}

/// Host frame loop.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct HostConfig {
    /// Simulated display refresh rate in Hz.
    pub frame_rate: u32,
    /// Stop after this many frames (0 = run until the flight and flash finish).
    pub max_frames: u64,
    /// Pace frames against the wall clock instead of running as fast as possible.
    pub realtime: bool,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log filter override (e.g., "debug", "info,ballista_flight=trace").
    pub log_level: String,
    /// Emit a telemetry line every N frames (0 disables).
    pub telemetry_interval: u64,
}

// --- Default implementations ---

impl Default for TrajectoryConfig {
    fn default() -> Self {
        Self {
            surface_radius: 1.0,
            surface_offset: 0.01,
            max_arc_height: 0.35,
            waypoints_file: PathBuf::from("assets/path/trajectory.json"),
            strict: false,
        }
    }
}

impl Default for FlightConfig {
    fn default() -> Self {
        Self { step: 0.003 }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            initial_mode: "chase".to_string(),
            chase_distance: 0.6,
            chase_height: 0.25,
            look_ahead: 0.5,
            chase_smoothing: 0.08,
            overview_position: [3.0, 2.0, 3.0],
            overview_smoothing: 0.02,
        }
    }
}

impl Default for ImpactConfig {
    fn default() -> Self {
        Self {
            start_scale: 1.0,
            scale_step: 0.15,
            end_scale: 3.0,
        }
    }
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            frame_rate: 60,
            max_frames: 0,
            realtime: false,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            telemetry_interval: 60,
        }
    }
}

// --- Validation ---

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            field,
            reason: format!("must be a positive number, got {value}"),
        })
    }
}

fn finite(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            field,
            reason: format!("must be a finite number, got {value}"),
        })
    }
}

fn unit_factor(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            field,
            reason: format!("must be in (0, 1], got {value}"),
        })
    }
}

impl Config {
    /// Check that every numeric setting is usable by the engine.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("trajectory.surface_radius", self.trajectory.surface_radius)?;
        if !(self.trajectory.surface_offset.is_finite() && self.trajectory.surface_offset >= 0.0) {
            return Err(ConfigError::InvalidValue {
                field: "trajectory.surface_offset",
                reason: format!("must be >= 0, got {}", self.trajectory.surface_offset),
            });
        }
        if !(self.trajectory.max_arc_height.is_finite() && self.trajectory.max_arc_height >= 0.0) {
            return Err(ConfigError::InvalidValue {
                field: "trajectory.max_arc_height",
                reason: format!("must be >= 0, got {}", self.trajectory.max_arc_height),
            });
        }
        positive("flight.step", self.flight.step)?;
        finite("camera.chase_distance", self.camera.chase_distance)?;
        finite("camera.chase_height", self.camera.chase_height)?;
        finite("camera.look_ahead", self.camera.look_ahead)?;
        for value in self.camera.overview_position {
            finite("camera.overview_position", value)?;
        }
        unit_factor("camera.chase_smoothing", self.camera.chase_smoothing)?;
        unit_factor("camera.overview_smoothing", self.camera.overview_smoothing)?;
        finite("impact.start_scale", self.impact.start_scale)?;
        finite("impact.end_scale", self.impact.end_scale)?;
        positive("impact.scale_step", self.impact.scale_step)?;
        if !(self.impact.end_scale > self.impact.start_scale) {
            return Err(ConfigError::InvalidValue {
                field: "impact.end_scale",
                reason: format!(
                    "must exceed start_scale ({}), got {}",
                    self.impact.start_scale, self.impact.end_scale
                ),
            });
        }
        if self.host.frame_rate == 0 {
            return Err(ConfigError::InvalidValue {
                field: "host.frame_rate",
                reason: "must be at least 1 Hz".to_string(),
            });
        }
        Ok(())
    }
}

// --- Load / Save / Reload ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
            let config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);
        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(config_dir.join(CONFIG_FILE), serialized).map_err(ConfigError::WriteError)
    }

    /// Hot-reload: returns `Some(new_config)` if the file changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let contents = std::fs::read_to_string(config_dir.join(CONFIG_FILE))
            .map_err(ConfigError::ReadError)?;
        let new_config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }
}
