//! Animatable scene primitives.
//!
//! A [`SceneObjectSpec`] never changes after composition; each frame derives
//! a fresh [`Pose`] from elapsed time. Rotations are absolute
//! (`rate * t`), never accumulated, so they do not drift with frame rate.

use crate::constants::BRACKET_BAR_THICKNESS;
use crate::float::{FloatOffset, FloatParams};
use crate::frame::{DrawItem, Material, MeshKind, TextureKey};
use crate::transform::Transform;
use glam::{Mat4, Vec2, Vec3};
use smallvec::SmallVec;

#[derive(Clone, Debug, PartialEq)]
pub enum ObjectKind {
    /// Noise-distorted sphere; the displacement runs on the GPU.
    Sphere { distort: f32, distort_speed: f32 },
    Torus,
    Box,
    RoundedBadge,
    TextGlyph { text: String },
    /// `</>` drawn with five bars.
    BracketGroup,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub fn unit(self) -> Vec3 {
        match self {
            Axis::X => Vec3::X,
            Axis::Y => Vec3::Y,
            Axis::Z => Vec3::Z,
        }
    }
}

/// Single-axis oscillation added on top of the spin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Wobble {
    pub axis: Axis,
    pub frequency: f32,
    pub amplitude: f32,
}

impl Wobble {
    pub fn angle(&self, t: f32) -> f32 {
        (t * self.frequency).sin() * self.amplitude
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceParams {
    pub roughness: f32,
    pub metalness: f32,
    pub emissive: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SceneObjectSpec {
    pub kind: ObjectKind,
    pub position: Vec3,
    pub scale: f32,
    /// Linear RGB.
    pub color: Vec3,
    /// Angular rate per axis, rad/s.
    pub spin: Vec3,
    pub wobble: Option<Wobble>,
    pub float: Option<FloatParams>,
    pub surface: SurfaceParams,
}

impl SceneObjectSpec {
    pub fn new(kind: ObjectKind, position: Vec3, scale: f32, color: Vec3) -> Self {
        Self {
            kind,
            position,
            scale,
            color,
            spin: Vec3::ZERO,
            wobble: None,
            float: None,
            surface: SurfaceParams {
                roughness: 0.3,
                metalness: 0.9,
                emissive: 0.0,
            },
        }
    }

    pub fn spinning(mut self, spin: Vec3) -> Self {
        self.spin = spin;
        self
    }

    pub fn wobbling(mut self, wobble: Wobble) -> Self {
        self.wobble = Some(wobble);
        self
    }

    pub fn floating(mut self, params: FloatParams) -> Self {
        self.float = Some(params);
        self
    }

    pub fn with_surface(mut self, roughness: f32, metalness: f32, emissive: f32) -> Self {
        self.surface = SurfaceParams {
            roughness,
            metalness,
            emissive,
        };
        self
    }

    /// Absolute rotation at `t`.
    pub fn rotation_at(&self, t: f32) -> Vec3 {
        let mut rotation = self.spin * t;
        if let Some(w) = &self.wobble {
            rotation += w.axis.unit() * w.angle(t);
        }
        rotation
    }

    pub fn material(&self, emissive: f32) -> Material {
        let base = Material::standard(self.color, self.surface.roughness, self.surface.metalness)
            .with_emissive(emissive);
        match &self.kind {
            ObjectKind::Sphere {
                distort,
                distort_speed,
            } => base.with_distortion(*distort, *distort_speed),
            _ => base,
        }
    }

    /// Append this object's draw items given its world matrix.
    pub fn emit_parts(&self, world: Mat4, material: Material, out: &mut Vec<DrawItem>) {
        let mut push = |mesh: MeshKind,
                        local: Mat4,
                        material: Material,
                        texture: Option<TextureKey>| {
            out.push(DrawItem {
                mesh,
                model: world * local,
                material,
                texture,
            })
        };
        match &self.kind {
            ObjectKind::Sphere { .. } => push(MeshKind::Sphere, Mat4::IDENTITY, material, None),
            ObjectKind::Torus => push(MeshKind::Torus, Mat4::IDENTITY, material, None),
            ObjectKind::Box => push(MeshKind::Cube, Mat4::IDENTITY, material, None),
            ObjectKind::RoundedBadge => push(MeshKind::RoundedBox, Mat4::IDENTITY, material, None),
            ObjectKind::TextGlyph { text } => push(
                MeshKind::Quad,
                Mat4::IDENTITY,
                Material::decal(),
                Some(TextureKey::Glyph(text.clone())),
            ),
            ObjectKind::BracketGroup => {
                for bar in bracket_bars() {
                    push(MeshKind::Cube, bar.matrix(), material, None);
                }
            }
        }
    }
}

/// Float offset and own transform for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub float: FloatOffset,
    pub local: Transform,
}

impl Pose {
    /// Float wrapper is the parent of the object's own transform.
    pub fn world(&self) -> Mat4 {
        self.float.matrix() * self.local.matrix()
    }

    pub fn world_position(&self) -> Vec3 {
        self.world().transform_point3(Vec3::ZERO)
    }
}

/// Shared per-frame capability of everything the composer places.
pub trait Animated {
    fn pose(&self, t: f32) -> Pose;
    fn emit(&self, t: f32, out: &mut Vec<DrawItem>);
}

impl Animated for SceneObjectSpec {
    fn pose(&self, t: f32) -> Pose {
        Pose {
            float: self
                .float
                .map(|f| f.offset(t))
                .unwrap_or(FloatOffset::ZERO),
            local: Transform::from_translation(self.position)
                .with_rotation(self.rotation_at(t))
                .with_uniform_scale(self.scale),
        }
    }

    fn emit(&self, t: f32, out: &mut Vec<DrawItem>) {
        let world = self.pose(t).world();
        self.emit_parts(world, self.material(self.surface.emissive), out);
    }
}

// Bars of the `</>` glyph in a unit box centred on the origin.
fn bracket_bars() -> SmallVec<[Transform; 5]> {
    let segments = [
        (Vec2::new(-0.9, 0.0), Vec2::new(-0.4, 0.4)),
        (Vec2::new(-0.9, 0.0), Vec2::new(-0.4, -0.4)),
        (Vec2::new(-0.15, -0.5), Vec2::new(0.15, 0.5)),
        (Vec2::new(0.9, 0.0), Vec2::new(0.4, 0.4)),
        (Vec2::new(0.9, 0.0), Vec2::new(0.4, -0.4)),
    ];
    segments.iter().map(|(a, b)| bar(*a, *b)).collect()
}

fn bar(a: Vec2, b: Vec2) -> Transform {
    let d = b - a;
    let mid = (a + b) * 0.5;
    Transform::from_translation(mid.extend(0.0))
        .with_rotation(Vec3::new(0.0, 0.0, d.y.atan2(d.x)))
        .with_scale(Vec3::new(
            d.length() + BRACKET_BAR_THICKNESS,
            BRACKET_BAR_THICKNESS,
            BRACKET_BAR_THICKNESS,
        ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bracket_group_emits_five_bars() {
        let spec = SceneObjectSpec::new(ObjectKind::BracketGroup, Vec3::ZERO, 1.0, Vec3::ONE);
        let mut out = Vec::new();
        spec.emit(0.0, &mut out);
        assert_eq!(out.len(), 5);
        assert!(out.iter().all(|d| d.mesh == MeshKind::Cube));
    }

    #[test]
    fn text_glyph_is_a_textured_quad() {
        let spec = SceneObjectSpec::new(
            ObjectKind::TextGlyph { text: "TS".into() },
            Vec3::ZERO,
            1.0,
            Vec3::ONE,
        );
        let mut out = Vec::new();
        spec.emit(1.0, &mut out);
        assert_eq!(out[0].texture, Some(TextureKey::Glyph("TS".into())));
    }
}
