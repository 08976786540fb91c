//! Sampling waypoints along the shortest route between two points.

use crate::{GeoPoint, unproject};

/// `samples` waypoints evenly spaced along the great circle from `from` to `to`,
/// both endpoints included.
///
/// Antipodal endpoints have no unique great circle; the route then bends
/// through whichever plane the midpoint fallback picks. Fewer than two
/// samples yield just the endpoints that fit.
pub fn great_circle(from: GeoPoint, to: GeoPoint, samples: usize) -> Vec<GeoPoint> {
    match samples {
        0 => return Vec::new(),
        1 => return vec![from],
        _ => {}
    }

    let a = from.to_cartesian(1.0);
    let b = to.to_cartesian(1.0);
    let omega = a.dot(b).clamp(-1.0, 1.0).acos();
    let sin_omega = omega.sin();

    (0..samples)
        .map(|i| {
            if i == 0 {
                return from;
            }
            if i == samples - 1 {
                return to;
            }
            let t = i as f64 / (samples - 1) as f64;
            let dir = if sin_omega.abs() < 1e-9 {
                a.lerp(b, t).normalize_or_zero()
            } else {
                a * (((1.0 - t) * omega).sin() / sin_omega) + b * ((t * omega).sin() / sin_omega)
            };
            unproject(dir).0
        })
        .collect()
}
