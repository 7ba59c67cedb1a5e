//! Renderer seam.
//!
//! The synchronizer hands the finished scene to whatever implements
//! [`Renderer`] once per tick. A lost rendering context or any other
//! backend failure is the implementation's problem; the core never
//! recovers from it.

use log::debug;

use crate::scene::{Camera, Scene};

/// Draws a scene from a camera, once per tick.
pub trait Renderer {
    fn render(&mut self, scene: &Scene, camera: &Camera);
}

/// Headless renderer: counts frames and logs what it would have drawn.
#[derive(Debug, Default)]
pub struct TraceRenderer {
    frames: u64,
    triangles_last_frame: usize,
}

impl TraceRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// Triangles submitted in the most recent frame.
    pub fn last_triangle_count(&self) -> usize {
        self.triangles_last_frame
    }
}

impl Renderer for TraceRenderer {
    fn render(&mut self, scene: &Scene, camera: &Camera) {
        self.frames += 1;
        self.triangles_last_frame = scene
            .nodes()
            .filter(|(_, n)| n.visible)
            .map(|(_, n)| n.mesh.triangle_count())
            .sum();

        debug!(
            "frame {}: {} nodes, {} triangles, cube-map background: {}, camera at {:?}",
            self.frames,
            scene.node_count(),
            self.triangles_last_frame,
            scene.background.is_cube_map(),
            camera.position,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::ShadingMode;
    use crate::mesh::{MeshData, Vertex};
    use crate::scene::SceneNode;

    #[test]
    fn test_trace_renderer_counts_triangles() {
        let mut scene = Scene::new();
        let mesh = MeshData::new(
            vec![Vertex::default(), Vertex::default(), Vertex::default()],
            vec![0, 1, 2],
        );
        scene.attach(SceneNode::new(mesh, ShadingMode::Glossy));

        let mut renderer = TraceRenderer::new();
        renderer.render(&scene, &Camera::default());
        renderer.render(&scene, &Camera::default());

        assert_eq!(renderer.frame_count(), 2);
        assert_eq!(renderer.last_triangle_count(), 1);
    }

    #[test]
    fn test_invisible_nodes_are_skipped() {
        let mut scene = Scene::new();
        let mesh = MeshData::new(
            vec![Vertex::default(), Vertex::default(), Vertex::default()],
            vec![0, 1, 2],
        );
        let id = scene.attach(SceneNode::new(mesh, ShadingMode::Glossy));
        scene.node_mut(id).unwrap().visible = false;

        let mut renderer = TraceRenderer::new();
        renderer.render(&scene, &Camera::default());
        assert_eq!(renderer.last_triangle_count(), 0);
    }
}
