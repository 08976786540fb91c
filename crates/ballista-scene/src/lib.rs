//! Render-collaborator capabilities consumed by the flight engine.
//!
//! The engine never reads renderer internals. It only writes transforms onto
//! opaque handles that implement the traits below. Which mesh backs a handle
//! (a loaded model or a fallback cone) is the renderer's business.
//! [`HeadlessScene`] is an in-memory implementation used by the `ballista`
//! binary and by tests.

mod headless;

use glam::DVec3;

pub use headless::{CameraNode, HeadlessScene, SceneNode};

/// A scene object whose position and facing the engine drives.
pub trait Placeable {
    /// Move the object to `position` in globe space.
    fn set_position(&mut self, position: DVec3);
    /// Point the object's forward axis along `direction` (unit length or zero).
    fn set_forward(&mut self, direction: DVec3);
}

/// The live render camera.
pub trait CameraRig {
    /// Current camera position.
    fn position(&self) -> DVec3;
    /// Move the camera.
    fn set_position(&mut self, position: DVec3);
    /// Aim the camera at `target`.
    fn look_at(&mut self, target: DVec3);
}

/// Opaque identifier for a transient effect spawned in the scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EffectId(pub u64);

/// Scene layer that hosts short-lived visual effects.
pub trait EffectLayer {
    /// Add a flash mesh centred on `position` and return its handle.
    fn spawn_flash(&mut self, position: DVec3) -> EffectId;
    /// Update the uniform scale and opacity of a live flash.
    fn update_flash(&mut self, id: EffectId, scale: f64, opacity: f64);
    /// Remove a flash from the scene. Unknown ids are ignored.
    fn remove_flash(&mut self, id: EffectId);
}

/// Everything a flight session writes to in one frame.
pub trait FlightScene: EffectLayer {
    /// Handle type for the projectile and exhaust meshes.
    type Node: Placeable;
    /// Handle type for the render camera.
    type Camera: CameraRig;

    /// Draw the route polyline.
    fn set_route(&mut self, points: &[DVec3]);

    /// Projectile, exhaust, and camera, borrowed together.
    fn rig(&mut self) -> (&mut Self::Node, &mut Self::Node, &mut Self::Camera);
}
