//! Tech-stack badges: a rounded body with icon faces and a hover tooltip.
//!
//! Hover state is private to each badge and only changes through
//! [`Badge::on_hover_enter`] / [`Badge::on_hover_leave`]. Everything the
//! renderer sees (emissive level, tooltip opacity) is derived from that
//! boolean on demand; no easing state is stored.

use crate::constants::{
    BADGE_DEPTH, BADGE_EMISSIVE_HOVER, BADGE_EMISSIVE_REST, BADGE_FACE_GAP, BADGE_FACE_SIZE,
    BADGE_PICK_RADIUS, TOOLTIP_LIFT,
};
use crate::error::HeroError;
use crate::float::{FloatOffset, FloatParams};
use crate::frame::{DrawItem, Material, MeshKind, TextureKey, TooltipFrame};
use crate::object::{Animated, ObjectKind, Pose, SceneObjectSpec};
use crate::transform::Transform;
use glam::{Mat4, Vec3};
use std::str::FromStr;

/// How badge faces are decorated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BadgeStyle {
    /// Body only.
    Plain,
    /// Icon image on front and back, once it has loaded.
    #[default]
    Textured,
    /// Rasterised label text on front and back.
    Glyph,
}

impl FromStr for BadgeStyle {
    type Err = HeroError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plain" => Ok(BadgeStyle::Plain),
            "textured" | "icon" => Ok(BadgeStyle::Textured),
            "glyph" | "text" => Ok(BadgeStyle::Glyph),
            other => Err(HeroError::UnknownBadgeStyle(other.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IconState {
    #[default]
    Pending,
    Ready,
    /// Missing icons degrade to shape-only display.
    Failed,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BadgeSpec {
    pub label: String,
    pub icon_url: String,
    pub position: Vec3,
    /// Linear RGB.
    pub color: Vec3,
    pub scale: f32,
    /// rad/s around the badge's own Y axis.
    pub rotation_speed: f32,
    pub float: Option<FloatParams>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tooltip<'a> {
    pub text: &'a str,
    pub opacity: f32,
}

#[derive(Clone, Debug)]
pub struct Badge {
    spec: BadgeSpec,
    style: BadgeStyle,
    body: SceneObjectSpec,
    hovered: bool,
    icon: IconState,
}

impl Badge {
    pub fn new(spec: BadgeSpec, style: BadgeStyle) -> Self {
        let body = SceneObjectSpec::new(ObjectKind::RoundedBadge, Vec3::ZERO, 1.0, spec.color)
            .with_surface(0.3, 0.6, BADGE_EMISSIVE_REST);
        Self {
            spec,
            style,
            body,
            hovered: false,
            icon: IconState::Pending,
        }
    }

    pub fn spec(&self) -> &BadgeSpec {
        &self.spec
    }

    pub fn label(&self) -> &str {
        &self.spec.label
    }

    pub fn style(&self) -> BadgeStyle {
        self.style
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Returns true when the state changed and a redraw is due.
    pub fn on_hover_enter(&mut self) -> bool {
        let changed = !self.hovered;
        self.hovered = true;
        if changed {
            log::debug!("[hero] hover enter {}", self.spec.label);
        }
        changed
    }

    pub fn on_hover_leave(&mut self) -> bool {
        let changed = self.hovered;
        self.hovered = false;
        if changed {
            log::debug!("[hero] hover leave {}", self.spec.label);
        }
        changed
    }

    pub fn emissive_intensity(&self) -> f32 {
        if self.hovered {
            BADGE_EMISSIVE_HOVER
        } else {
            BADGE_EMISSIVE_REST
        }
    }

    pub fn tooltip(&self) -> Tooltip<'_> {
        Tooltip {
            text: &self.spec.label,
            opacity: if self.hovered { 1.0 } else { 0.0 },
        }
    }

    pub fn icon_state(&self) -> IconState {
        self.icon
    }

    pub fn set_icon_state(&mut self, state: IconState) {
        if state == IconState::Failed && self.icon != IconState::Failed {
            log::warn!(
                "[assets] icon for {} unavailable, showing shape only",
                self.spec.label
            );
        }
        self.icon = state;
    }

    fn float_offset(&self, t: f32) -> FloatOffset {
        self.spec
            .float
            .map(|f| f.offset(t))
            .unwrap_or(FloatOffset::ZERO)
    }

    /// World-space point the tooltip hangs from; not rotated with the body
    /// so the label stays upright.
    pub fn tooltip_anchor(&self, t: f32) -> Vec3 {
        let lift = Vec3::new(0.0, TOOLTIP_LIFT * self.spec.scale, 0.0);
        self.float_offset(t)
            .matrix()
            .transform_point3(self.spec.position + lift)
    }

    pub fn tooltip_frame(&self, index: usize, t: f32) -> TooltipFrame {
        TooltipFrame {
            badge: index,
            anchor: self.tooltip_anchor(t),
            opacity: self.tooltip().opacity,
        }
    }

    /// Centre and radius of the hit region at `t`.
    pub fn pick_sphere(&self, t: f32) -> (Vec3, f32) {
        (
            self.pose(t).world_position(),
            BADGE_PICK_RADIUS * self.spec.scale,
        )
    }

    fn face_texture(&self) -> Option<TextureKey> {
        match self.style {
            BadgeStyle::Plain => None,
            BadgeStyle::Textured => (self.icon == IconState::Ready)
                .then(|| TextureKey::Icon(self.spec.icon_url.clone())),
            BadgeStyle::Glyph => Some(TextureKey::Glyph(self.spec.label.clone())),
        }
    }
}

// Front face sits on local +Z; the back face mirrors it on -Z, turned 180°.
fn face_transforms() -> [Mat4; 2] {
    let z = BADGE_DEPTH * 0.5 + BADGE_FACE_GAP;
    [
        Transform::from_translation(Vec3::new(0.0, 0.0, z))
            .with_uniform_scale(BADGE_FACE_SIZE)
            .matrix(),
        Transform::from_translation(Vec3::new(0.0, 0.0, -z))
            .with_rotation(Vec3::new(0.0, std::f32::consts::PI, 0.0))
            .with_uniform_scale(BADGE_FACE_SIZE)
            .matrix(),
    ]
}

impl Animated for Badge {
    fn pose(&self, t: f32) -> Pose {
        Pose {
            float: self.float_offset(t),
            local: Transform::from_translation(self.spec.position)
                .with_rotation(Vec3::new(0.0, t * self.spec.rotation_speed, 0.0))
                .with_uniform_scale(self.spec.scale),
        }
    }

    fn emit(&self, t: f32, out: &mut Vec<DrawItem>) {
        let world = self.pose(t).world();
        self.body
            .emit_parts(world, self.body.material(self.emissive_intensity()), out);
        if let Some(texture) = self.face_texture() {
            for face in face_transforms() {
                out.push(DrawItem {
                    mesh: MeshKind::Quad,
                    model: world * face,
                    material: Material::decal(),
                    texture: Some(texture.clone()),
                });
            }
        }
    }
}
