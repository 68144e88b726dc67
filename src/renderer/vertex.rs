//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
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

/// Colors for scene elements
pub mod colors {
    pub const SKY: [f32; 4] = [0.46, 0.92, 0.96, 1.0];
    pub const SKY_AUTUMN: [f32; 4] = [0.45, 0.65, 1.0, 1.0];
    pub const SKY_WINTER: [f32; 4] = [0.8, 0.9, 1.0, 1.0];
    pub const GRASS: [f32; 4] = [0.0, 0.75, 0.29, 1.0];
    pub const GROUND_AUTUMN: [f32; 4] = [0.8588, 0.5882, 0.1843, 1.0];
    pub const GROUND_WINTER: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

    pub const SUN: [f32; 4] = [1.0, 0.9, 0.0, 1.0];
    pub const SUN_RAY: [f32; 4] = [1.0, 0.8, 0.0, 1.0];
    pub const CLOUD: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const SNOW: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

    pub const HOUSE_WALL: [f32; 4] = [0.98, 0.76, 0.29, 1.0];
    pub const HOUSE_ROOF: [f32; 4] = [0.45, 0.17, 0.02, 1.0];
    pub const HOUSE_DOOR: [f32; 4] = [0.05, 0.05, 0.05, 1.0];

    pub const TRUNK: [f32; 4] = [0.55, 0.27, 0.07, 1.0];
    pub const LEAVES: [f32; 4] = [0.0, 0.7, 0.1, 1.0];
    pub const LEAVES_SIDE: [f32; 4] = [0.0, 0.75, 0.05, 1.0];
    pub const LEAVES_TOP: [f32; 4] = [0.0, 0.8, 0.1, 1.0];
    pub const LEAVES_AUTUMN: [f32; 4] = [0.929, 0.608, 0.125, 1.0];
    pub const LEAVES_AUTUMN_TOP: [f32; 4] = [0.95, 0.65, 0.2, 1.0];
    pub const PETAL: [f32; 4] = [1.0, 0.6, 0.8, 1.0];
    pub const FLOWER_HEART: [f32; 4] = [1.0, 1.0, 0.2, 1.0];

    pub const FIRE_OUTER: [f32; 4] = [1.0, 0.3, 0.0, 1.0];
    pub const FIRE_MID: [f32; 4] = [1.0, 0.6, 0.0, 1.0];
    pub const FIRE_INNER: [f32; 4] = [1.0, 0.9, 0.0, 1.0];

    pub const BASKET: [f32; 4] = [0.6, 0.4, 0.2, 1.0];
    pub const HUD_PANEL: [f32; 4] = [0.0, 0.0, 0.0, 0.5];
    pub const HEART_FULL: [f32; 4] = [1.0, 0.3, 0.3, 1.0];
    pub const HEART_EMPTY: [f32; 4] = [0.5, 0.5, 0.5, 1.0];

    pub const BANNER_BORDER: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
    pub const BANNER_PANEL: [f32; 4] = [0.0, 0.0, 0.0, 0.85];
    pub const PAUSE_PANEL: [f32; 4] = [0.0, 0.0, 0.0, 0.8];
    pub const GAME_OVER_PANEL: [f32; 4] = [0.0, 0.0, 0.0, 0.9];
}
