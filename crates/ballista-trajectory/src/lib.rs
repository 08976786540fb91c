//! Flight path construction: geographic waypoints to a rise-and-fall arc.
//!
//! [`TrajectoryBuilder`] projects each waypoint onto the globe at a radius
//! shaped by a sine profile, producing a [`FlightPath`] with exactly one point
//! per waypoint. The [`waypoints`] module validates raw JSON from the waypoint
//! source before it reaches the builder.

mod builder;
mod error;
mod path;
pub mod waypoints;

pub use builder::{ArcProfile, TrajectoryBuilder};
pub use error::TrajectoryError;
pub use path::FlightPath;
pub use waypoints::parse_waypoints;
