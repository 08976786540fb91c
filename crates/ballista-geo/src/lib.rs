//! Geographic coordinates and their projection onto the globe's Cartesian frame.
//!
//! The globe is a unit sphere centred on the origin with +Y through the north
//! pole. Latitude and longitude are expressed in degrees; a radius above `1.0`
//! places a point above the surface.

mod geo_point;
mod great_circle;
mod projection;

pub use geo_point::GeoPoint;
pub use great_circle::great_circle;
pub use projection::{project, unproject};
