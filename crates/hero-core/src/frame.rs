//! What one evaluated frame hands to the render surface.

use crate::clock::FrameTime;
use glam::{Mat4, Vec3};

/// Geometry the renderer keeps one shared GPU buffer for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MeshKind {
    Sphere,
    Torus,
    Cube,
    RoundedBox,
    Quad,
}

/// Identifies a texture the surface loads or rasterises on demand.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TextureKey {
    Icon(String),
    Glyph(String),
}

/// Noise displacement evaluated by the vertex shader.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Distortion {
    pub amount: f32,
    pub speed: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    /// Linear RGB.
    pub color: Vec3,
    pub emissive_intensity: f32,
    pub roughness: f32,
    pub metalness: f32,
    pub opacity: f32,
    pub distortion: Option<Distortion>,
}

impl Material {
    pub fn standard(color: Vec3, roughness: f32, metalness: f32) -> Self {
        Self {
            color,
            emissive_intensity: 0.0,
            roughness,
            metalness,
            opacity: 1.0,
            distortion: None,
        }
    }

    pub fn with_emissive(mut self, intensity: f32) -> Self {
        self.emissive_intensity = intensity;
        self
    }

    pub fn with_distortion(mut self, amount: f32, speed: f32) -> Self {
        self.distortion = Some(Distortion { amount, speed });
        self
    }

    /// Unlit white quad used to display a texture as-is.
    pub fn decal() -> Self {
        Self::standard(Vec3::ONE, 1.0, 0.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DrawItem {
    pub mesh: MeshKind,
    pub model: Mat4,
    pub material: Material,
    pub texture: Option<TextureKey>,
}

/// Per-badge tooltip placement; the tooltip node always exists, only its
/// opacity follows hover.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TooltipFrame {
    pub badge: usize,
    pub anchor: Vec3,
    pub opacity: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AmbientLight {
    pub color: Vec3,
    pub intensity: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PositionedLight {
    pub position: Vec3,
    pub color: Vec3,
    pub intensity: f32,
}

/// Fixed rig: ambient, one directional and two point lights.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LightRig {
    pub ambient: AmbientLight,
    pub directional: PositionedLight,
    pub points: [PositionedLight; 2],
}

#[derive(Clone, Debug, PartialEq)]
pub struct SceneFrame {
    pub time: FrameTime,
    pub lights: LightRig,
    pub items: Vec<DrawItem>,
    pub tooltips: Vec<TooltipFrame>,
}
