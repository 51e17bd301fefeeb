//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Neon palette for game elements
pub mod colors {
    pub const NEON_CYAN: [f32; 4] = [0.0, 1.0, 0.86, 1.0];
    pub const NEON_MAGENTA: [f32; 4] = [1.0, 0.24, 0.78, 1.0];
    pub const NEON_YELLOW: [f32; 4] = [1.0, 0.94, 0.0, 1.0];
    pub const NEON_LIME: [f32; 4] = [0.47, 1.0, 0.24, 1.0];
    pub const NEON_ORANGE: [f32; 4] = [1.0, 0.53, 0.2, 1.0];
    pub const NEON_BLUE: [f32; 4] = [0.27, 0.63, 1.0, 1.0];
    pub const UI_WHITE: [f32; 4] = [0.9, 0.92, 0.96, 1.0];
    pub const BACKGROUND: [f32; 4] = [0.024, 0.039, 0.07, 1.0];

    /// Enemy kind palette, indexed by `Enemy::kind`
    pub const ENEMY_KIND: [[f32; 4]; 4] = [NEON_MAGENTA, NEON_CYAN, NEON_LIME, NEON_ORANGE];
}
