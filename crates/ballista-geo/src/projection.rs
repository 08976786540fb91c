//! Spherical projection between lat/lon/radius and globe-space positions.

use glam::DVec3;

use crate::GeoPoint;

/// Project a latitude/longitude (degrees) at `radius` onto the globe frame.
///
/// `phi` is the polar angle measured from +Y and `theta` the azimuth shifted by
/// 180 degrees, so that the texture seam of an equirectangular globe lines up
/// with longitude ±180. Out-of-range inputs are not rejected; they produce a
/// valid point that simply has no geographic meaning.
pub fn project(lat: f64, lon: f64, radius: f64) -> DVec3 {
    let phi = (90.0 - lat).to_radians();
    let theta = (lon + 180.0).to_radians();
    DVec3::new(
        -radius * phi.sin() * theta.cos(),
        radius * phi.cos(),
        radius * phi.sin() * theta.sin(),
    )
}

/// Inverse of [`project`]: recover the geographic point and radius of `point`.
///
/// Longitude is normalised to `(-180, 180]`. At the poles longitude is
/// undefined and comes back as whatever `atan2` yields for a zero horizontal
/// component. The origin maps to `(0, 0)` at radius `0`.
pub fn unproject(point: DVec3) -> (GeoPoint, f64) {
    let radius = point.length();
    if radius < 1e-12 {
        return (GeoPoint::new(0.0, 0.0), 0.0);
    }

    let phi = (point.y / radius).clamp(-1.0, 1.0).acos();
    let theta = point.z.atan2(-point.x);

    let lat = 90.0 - phi.to_degrees();
    let mut lon = theta.to_degrees() - 180.0;
    if lon <= -180.0 {
        lon += 360.0;
    }

    (GeoPoint::new(lat, lon), radius)
}
