/// Vertex of the full-screen quad the shockwave program is drawn with.
///
/// `uv` has a bottom-left origin, the convention the compositor works in.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct QuadVertex {
    pub pos: [f32; 2],
    pub uv: [f32; 2],
}

const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x2];

impl QuadVertex {
    /// Vertex layout matching `vs_quad` in shockwave.wgsl.
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<QuadVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &ATTRIBUTES,
        }
    }
}

/// Two triangles covering clip space.
pub const FULLSCREEN_QUAD: [QuadVertex; 6] = [
    QuadVertex {
        pos: [-1.0, -1.0],
        uv: [0.0, 0.0],
    },
    QuadVertex {
        pos: [1.0, -1.0],
        uv: [1.0, 0.0],
    },
    QuadVertex {
        pos: [1.0, 1.0],
        uv: [1.0, 1.0],
    },
    QuadVertex {
        pos: [-1.0, -1.0],
        uv: [0.0, 0.0],
    },
    QuadVertex {
        pos: [1.0, 1.0],
        uv: [1.0, 1.0],
    },
    QuadVertex {
        pos: [-1.0, 1.0],
        uv: [0.0, 1.0],
    },
];
