//! Exponential approach and look-at helpers.

use glam::{DMat3, DQuat, DVec3};

/// Move `current` a fraction `factor` of the way toward `desired`.
///
/// Applied once per frame this is an exponential decay of the remaining
/// distance by `1 - factor`. `factor` is clamped to `[0, 1]`; `1` snaps.
pub fn step(current: DVec3, desired: DVec3, factor: f64) -> DVec3 {
    let factor = factor.clamp(0.0, 1.0);
    current + (desired - current) * factor
}

/// Frames of [`step`] needed to shrink the initial distance by `ratio`
/// (e.g. `1e-3`): `ceil(ln(ratio) / ln(1 - factor))`.
///
/// Returns `0` for `factor >= 1` (one snap already lands on target) and
/// `None` for a non-positive or NaN `factor`, a ratio outside `(0, 1)`, or a
/// factor so small that the count does not fit in a `u32`.
pub fn frames_to_converge(factor: f64, ratio: f64) -> Option<u32> {
    if !(factor > 0.0) || !(ratio > 0.0 && ratio < 1.0) {
        return None;
    }
    if factor >= 1.0 {
        return Some(0);
    }
    let decay = (1.0 - factor).ln();
    if decay == 0.0 {
        return None;
    }
    let frames = (ratio.ln() / decay).ceil();
    (frames.is_finite() && frames <= f64::from(u32::MAX)).then_some(frames as u32)
}

/// Rotation whose +Z axis points from `eye` to `target`, keeping `up` as
/// close to +Y as possible. Identity when `eye == target`.
pub fn look_rotation(eye: DVec3, target: DVec3, up: DVec3) -> DQuat {
    let to_target = target - eye;
    if to_target.length_squared() < 1e-18 {
        return DQuat::IDENTITY;
    }
    let forward = to_target.normalize();

    let mut right = up.cross(forward).normalize_or_zero();
    if right == DVec3::ZERO {
        // Looking straight along `up`; any perpendicular reference works.
        right = DVec3::Z.cross(forward).normalize_or_zero();
        if right == DVec3::ZERO {
            right = DVec3::X;
        }
    }
    let up = forward.cross(right);
    DQuat::from_mat3(&DMat3::from_cols(right, up, forward))
}
