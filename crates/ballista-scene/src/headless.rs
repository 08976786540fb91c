//! In-memory scene that records the transforms written by the engine.

use glam::DVec3;
use rustc_hash::FxHashMap;
use tracing::trace;

use crate::{CameraRig, EffectId, EffectLayer, FlightScene, Placeable};

/// Transform and material state of one scene object.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneNode {
    /// Position in globe space.
    pub position: DVec3,
    /// Forward axis (unit length, or zero before the first write).
    pub forward: DVec3,
    /// Uniform scale.
    pub scale: f64,
    /// Material opacity in `[0, 1]`.
    pub opacity: f64,
}

impl Default for SceneNode {
    fn default() -> Self {
        Self {
            position: DVec3::ZERO,
            forward: DVec3::ZERO,
            scale: 1.0,
            opacity: 1.0,
        }
    }
}

impl SceneNode {
    /// A node placed at `position` with default scale and opacity.
    pub fn at(position: DVec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }
}

impl Placeable for SceneNode {
    fn set_position(&mut self, position: DVec3) {
        self.position = position;
    }

    fn set_forward(&mut self, direction: DVec3) {
        self.forward = direction;
    }
}

/// Camera state held by the headless scene.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraNode {
    /// Eye position.
    pub position: DVec3,
    /// Point the camera looks at.
    pub target: DVec3,
}

impl CameraRig for CameraNode {
    fn position(&self) -> DVec3 {
        self.position
    }

    fn set_position(&mut self, position: DVec3) {
        self.position = position;
    }

    fn look_at(&mut self, target: DVec3) {
        self.target = target;
    }
}

/// A scene with a projectile, its exhaust plume, a camera, and any live flashes.
#[derive(Debug)]
pub struct HeadlessScene {
    /// The projectile body.
    pub projectile: SceneNode,
    /// The exhaust plume trailing the projectile.
    pub exhaust: SceneNode,
    /// The render camera.
    pub camera: CameraNode,
    /// Route line drawn through the path points.
    pub route: Vec<DVec3>,
    flashes: FxHashMap<EffectId, SceneNode>,
    next_effect: u64,
    flashes_spawned: u64,
}

impl HeadlessScene {
    /// Create a scene with the camera at `camera_position` looking at the origin.
    pub fn new(camera_position: DVec3) -> Self {
        Self {
            projectile: SceneNode::default(),
            exhaust: SceneNode::default(),
            camera: CameraNode {
                position: camera_position,
                target: DVec3::ZERO,
            },
            route: Vec::new(),
            flashes: FxHashMap::default(),
            next_effect: 0,
            flashes_spawned: 0,
        }
    }

    /// Number of flashes currently in the scene.
    pub fn live_flashes(&self) -> usize {
        self.flashes.len()
    }

    /// Total flashes ever spawned.
    pub fn flashes_spawned(&self) -> u64 {
        self.flashes_spawned
    }

    /// Look up a live flash.
    pub fn flash(&self, id: EffectId) -> Option<&SceneNode> {
        self.flashes.get(&id)
    }
}

impl EffectLayer for HeadlessScene {
    fn spawn_flash(&mut self, position: DVec3) -> EffectId {
        let id = EffectId(self.next_effect);
        self.next_effect += 1;
        self.flashes_spawned += 1;
        self.flashes.insert(id, SceneNode::at(position));
        trace!(?id, ?position, "spawned flash");
        id
    }

    fn update_flash(&mut self, id: EffectId, scale: f64, opacity: f64) {
        if let Some(node) = self.flashes.get_mut(&id) {
            node.scale = scale;
            node.opacity = opacity;
        }
    }

    fn remove_flash(&mut self, id: EffectId) {
        if self.flashes.remove(&id).is_some() {
            trace!(?id, "removed flash");
        }
    }
}

impl FlightScene for HeadlessScene {
    type Node = SceneNode;
    type Camera = CameraNode;

    fn set_route(&mut self, points: &[DVec3]) {
        self.route = points.to_vec();
    }

    fn rig(&mut self) -> (&mut SceneNode, &mut SceneNode, &mut CameraNode) {
        (&mut self.projectile, &mut self.exhaust, &mut self.camera)
    }
}
