//! Circle geometry for specimen sprites.

use bytemuck::{Pod, Zeroable};

/// Triangles per circle (one per degree).
pub const CIRCLE_SEGMENTS: u32 = 360;

/// Vertices per circle mesh.
pub const CIRCLE_VERTEX_COUNT: u32 = CIRCLE_SEGMENTS * 3;

/// Vertex layout (24 bytes):
///
///  offset  0  position   [f32; 4]   loc 0  (x, y, z, 1)
///  offset 16  tex_coord  [f32; 2]   loc 1
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct CircleVertex {
    pub position: [f32; 4],
    pub tex_coord: [f32; 2],
}

impl CircleVertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x4, // position
        1 => Float32x2  // tex_coord
    ];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<CircleVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }

    /// Vertex on the unit circle `(ux, uy)` scaled by `radius` around `center`.
    ///
    /// Texture coordinates map the unit disc onto `[0, 1]²`.
    fn on_circle(center: [f32; 3], radius: f32, ux: f32, uy: f32) -> Self {
        Self {
            position: [center[0] + radius * ux, center[1] + radius * uy, center[2], 1.0],
            tex_coord: [0.5 + 0.5 * ux, 0.5 + 0.5 * uy],
        }
    }
}

/// Builds a closed fan of [`CIRCLE_SEGMENTS`] triangles as a triangle list.
///
/// Triangle `k` (for θ = k° with k in 1..=360) is
/// `(center, point at θ, point at θ - 1°)`.
pub fn circle_vertices(center: [f32; 2], z: f32, radius: f32) -> Vec<CircleVertex> {
    let c = [center[0], center[1], z];
    let hub = CircleVertex::on_circle(c, radius, 0.0, 0.0);

    let unit = |deg: u32| {
        let rad = (deg as f32).to_radians();
        (rad.cos(), rad.sin())
    };

    let mut verts = Vec::with_capacity(CIRCLE_VERTEX_COUNT as usize);
    let mut prev = unit(0);
    for deg in 1..=CIRCLE_SEGMENTS {
        let cur = unit(deg);
        verts.push(hub);
        verts.push(CircleVertex::on_circle(c, radius, cur.0, cur.1));
        verts.push(CircleVertex::on_circle(c, radius, prev.0, prev.1));
        prev = cur;
    }
    verts
}
