//! Ballista host: loads a route, owns the frame loop, and drives a [`FlightSession`].
//!
//! Everything with I/O lives here. The engine crates stay pure and are fed a
//! fully materialised waypoint list.

pub mod error;
pub mod frame_clock;
pub mod platform;
pub mod runner;
pub mod session;
pub mod settings;
pub mod waypoints;

pub use error::AppError;
pub use session::{FlightSession, FrameReport};
