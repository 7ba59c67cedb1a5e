//! Retained scene: mesh nodes, lights, background, and the camera.
//!
//! Nodes are owned by id; the synchronizer replaces the teapot wholesale
//! (detach old, attach new) whenever a topology-affecting parameter
//! changes, rather than patching geometry in place.

use std::collections::HashMap;

use glam::Vec3;

use crate::assets::CubeMapHandle;
use crate::color::Color;
use crate::lighting::{AmbientLight, DirectionalLight};
use crate::material::ShadingMode;
use crate::mesh::MeshData;

/// Unique identifier for scene nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u64);

/// A renderable node: mesh geometry plus the shading mode whose material
/// variant draws it.
#[derive(Debug, Clone)]
pub struct SceneNode {
    pub mesh: MeshData,
    pub shading: ShadingMode,
    pub visible: bool,
}

impl SceneNode {
    pub fn new(mesh: MeshData, shading: ShadingMode) -> Self {
        Self {
            mesh,
            shading,
            visible: true,
        }
    }
}

/// What fills the frame behind the scene. The cube map may still be
/// loading; renderers treat an unresolved handle as no background.
#[derive(Debug, Clone)]
pub enum Background {
    Flat(Color),
    CubeMap(CubeMapHandle),
}

impl Background {
    /// The demo's resting background, a flat light gray (0xaaaaaa).
    pub fn default_flat() -> Self {
        Background::Flat(Color::new(0.667, 0.667, 0.667))
    }

    pub fn is_cube_map(&self) -> bool {
        matches!(self, Background::CubeMap(_))
    }
}

/// Perspective camera parameters. Defaults match the demo's framing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    /// Vertical field of view in degrees.
    pub fov_y: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::new(35.0, 0.0, 360.0),
            target: Vec3::ZERO,
            fov_y: 45.0,
            aspect: 16.0 / 9.0,
            near: 1.0,
            far: 20_000.0,
        }
    }
}

/// The scene: all attached nodes, both lights, and the background.
#[derive(Debug)]
pub struct Scene {
    nodes: HashMap<NodeId, SceneNode>,
    next_id: u64,
    pub ambient: AmbientLight,
    pub light: DirectionalLight,
    pub background: Background,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
            next_id: 1,
            ambient: AmbientLight::default(),
            light: DirectionalLight::default(),
            background: Background::default_flat(),
        }
    }

    /// Attach a node and return its id.
    pub fn attach(&mut self, node: SceneNode) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        self.nodes.insert(id, node);
        id
    }

    /// Detach a node. Detaching an already-removed id is a no-op.
    pub fn detach(&mut self, id: NodeId) -> Option<SceneNode> {
        self.nodes.remove(&id)
    }

    pub fn node(&self, id: NodeId) -> Option<&SceneNode> {
        self.nodes.get(&id)
    }

    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut SceneNode> {
        self.nodes.get_mut(&id)
    }

    pub fn nodes(&self) -> impl Iterator<Item = (&NodeId, &SceneNode)> {
        self.nodes.iter()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}
