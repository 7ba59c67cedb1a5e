//! Mesh data shared between the geometry generator and the scene.
//!
//! Geometry is generated on the CPU as indexed triangles; vertex colors are
//! an optional per-vertex attribute attached and removed by the synchronizer
//! depending on the vertex-color toggle.

use bytemuck::{Pod, Zeroable};
use log::warn;

/// A mesh vertex, laid out for direct upload to a vertex buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl Vertex {
    pub const fn new(position: [f32; 3], normal: [f32; 3]) -> Self {
        Self { position, normal }
    }
}

/// Axis-aligned bounding box for a mesh.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BoundingBox {
    pub min: [f32; 3],
    pub max: [f32; 3],
}

impl BoundingBox {
    /// Compute bounding box from a set of vertices.
    pub fn from_vertices(vertices: &[Vertex]) -> Self {
        if vertices.is_empty() {
            return Self::default();
        }

        let mut min = [f32::MAX; 3];
        let mut max = [f32::MIN; 3];

        for v in vertices {
            for i in 0..3 {
                min[i] = min[i].min(v.position[i]);
                max[i] = max[i].max(v.position[i]);
            }
        }

        Self { min, max }
    }

    /// Get the center of the bounding box.
    pub fn center(&self) -> [f32; 3] {
        [
            (self.min[0] + self.max[0]) / 2.0,
            (self.min[1] + self.max[1]) / 2.0,
            (self.min[2] + self.max[2]) / 2.0,
        ]
    }

    /// Get the dimensions of the bounding box.
    pub fn size(&self) -> [f32; 3] {
        [
            self.max[0] - self.min[0],
            self.max[1] - self.min[1],
            self.max[2] - self.min[2],
        ]
    }
}

/// Generated mesh geometry: indexed triangles plus an optional per-vertex
/// color attribute (8 bits per channel, normalized on upload).
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
    pub colors: Option<Vec<[u8; 3]>>,
    pub bounds: BoundingBox,
}

impl MeshData {
    /// Create mesh data from raw geometry, computing the bounding box.
    pub fn new(vertices: Vec<Vertex>, indices: Vec<u32>) -> Self {
        let bounds = BoundingBox::from_vertices(&vertices);
        Self {
            vertices,
            indices,
            colors: None,
            bounds,
        }
    }

    /// Whether the mesh has no triangles (e.g. every structural part was
    /// toggled off). A degenerate mesh is valid; it just draws nothing.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Map each vertex's Y position to a red-to-blue gradient across the mesh's
/// vertical extent: pure blue at the minimum, pure red at the maximum,
/// linear in between, encoded as 8-bit channels with 128 as full strength.
///
/// A zero-extent Y axis maps every vertex to the midpoint fraction 0.5
/// instead of dividing by zero.
pub fn height_gradient(mesh: &MeshData) -> Vec<[u8; 3]> {
    let min_y = mesh.bounds.min[1];
    let size_y = mesh.bounds.size()[1];
    let flat = size_y <= f32::EPSILON;
    if flat && !mesh.vertices.is_empty() {
        warn!("zero-extent Y bounding box; vertex gradient collapses to midpoint");
    }

    mesh.vertices
        .iter()
        .map(|v| {
            let r = if flat {
                0.5
            } else {
                (v.position[1] - min_y) / size_y
            };
            let b = 1.0 - r;
            [(r * 128.0) as u8, 0, (b * 128.0) as u8]
        })
        .collect()
}
