//! Deterministic assembly of the hero scene.
//!
//! The composer holds no state of its own; it turns a [`HeroConfig`] into a
//! [`SceneGraph`] once per mount. Node order only matters for transparency
//! sorting, which the render surface owns.

use crate::badge::{Badge, BadgeSpec, BadgeStyle};
use crate::camera::CameraState;
use crate::color::parse_hex;
use crate::constants::{
    BRACKET_WOBBLE_AMPLITUDE, BRACKET_WOBBLE_FREQUENCY, SPHERE_COLOR, SPHERE_DISTORT,
    SPHERE_DISTORT_SPEED, SPHERE_SCALE, SPHERE_SPIN,
};
use crate::content::{validate_entries, TechStackEntry, TECH_STACK};
use crate::error::HeroError;
use crate::float::FloatParams;
use crate::frame::{AmbientLight, LightRig, PositionedLight};
use crate::object::{Axis, ObjectKind, SceneObjectSpec, Wobble};
use crate::scene::SceneGraph;
use glam::Vec3;

const SPHERE_FLOAT: FloatParams = FloatParams::new(0.5, 1.0, 0.2);
const TORUS_FLOAT: FloatParams = FloatParams::new(0.375, 0.5, 0.1);
const CUBE_FLOAT: FloatParams = FloatParams::new(0.5, 1.0, 0.15);
const BRACKET_FLOAT: FloatParams = FloatParams::new(0.4, 0.4, 0.12);
const BADGE_FLOAT: FloatParams = FloatParams::new(0.6, 0.3, 0.1);
const BADGE_SCALE: f32 = 0.55;

#[derive(Clone, Debug, PartialEq)]
pub struct HeroConfig {
    pub badge_style: BadgeStyle,
    /// Clear to a transparent background so the page shows through.
    pub transparent: bool,
    pub camera: CameraState,
    pub tech_stack: Vec<TechStackEntry>,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            badge_style: BadgeStyle::default(),
            transparent: true,
            camera: CameraState::default(),
            tech_stack: TECH_STACK.to_vec(),
        }
    }
}

pub fn light_rig() -> Result<LightRig, HeroError> {
    Ok(LightRig {
        ambient: AmbientLight {
            color: Vec3::ONE,
            intensity: 0.3,
        },
        directional: PositionedLight {
            position: Vec3::new(10.0, 10.0, 5.0),
            color: parse_hex("#ffffff")?,
            intensity: 1.0,
        },
        points: [
            PositionedLight {
                position: Vec3::new(-10.0, -10.0, -5.0),
                color: parse_hex("#a855f7")?,
                intensity: 0.5,
            },
            PositionedLight {
                position: Vec3::new(5.0, 5.0, 5.0),
                color: parse_hex("#00d4ff")?,
                intensity: 0.5,
            },
        ],
    })
}

fn decorations() -> Result<Vec<SceneObjectSpec>, HeroError> {
    let sphere = SceneObjectSpec::new(
        ObjectKind::Sphere {
            distort: SPHERE_DISTORT,
            distort_speed: SPHERE_DISTORT_SPEED,
        },
        Vec3::ZERO,
        SPHERE_SCALE,
        parse_hex(SPHERE_COLOR)?,
    )
    .spinning(SPHERE_SPIN)
    .floating(SPHERE_FLOAT)
    .with_surface(0.2, 0.8, 0.0);

    let torus = |pos: [f32; 3], color: &str, scale: f32| -> Result<SceneObjectSpec, HeroError> {
        Ok(
            SceneObjectSpec::new(ObjectKind::Torus, Vec3::from(pos), scale, parse_hex(color)?)
                .spinning(Vec3::new(0.5, 0.3, 0.0))
                .floating(TORUS_FLOAT)
                .with_surface(0.3, 0.9, 0.2),
        )
    };
    let cube = |pos: [f32; 3], color: &str, scale: f32| -> Result<SceneObjectSpec, HeroError> {
        Ok(
            SceneObjectSpec::new(ObjectKind::Box, Vec3::from(pos), scale, parse_hex(color)?)
                .spinning(Vec3::new(0.4, 0.0, 0.2))
                .floating(CUBE_FLOAT)
                .with_surface(0.2, 0.9, 0.3),
        )
    };
    let bracket = |pos: [f32; 3], color: &str| -> Result<SceneObjectSpec, HeroError> {
        Ok(
            SceneObjectSpec::new(ObjectKind::BracketGroup, Vec3::from(pos), 0.45, parse_hex(color)?)
                .spinning(Vec3::new(0.0, 0.3, 0.0))
                .wobbling(Wobble {
                    axis: Axis::Z,
                    frequency: BRACKET_WOBBLE_FREQUENCY,
                    amplitude: BRACKET_WOBBLE_AMPLITUDE,
                })
                .floating(BRACKET_FLOAT)
                .with_surface(0.3, 0.7, 0.4),
        )
    };

    Ok(vec![
        sphere,
        torus([2.5, 1.0, -1.0], "#a855f7", 0.5)?,
        torus([-2.5, -1.0, -1.0], "#ec4899", 0.4)?,
        cube([1.8, -1.5, 0.5], "#00d4ff", 0.4)?,
        cube([-2.0, 1.5, 0.5], "#a855f7", 0.3)?,
        bracket([0.0, 2.6, -1.8], "#a855f7")?,
        bracket([0.0, -2.6, -1.8], "#ec4899")?,
    ])
}

fn badge_spec(entry: &TechStackEntry) -> Result<BadgeSpec, HeroError> {
    Ok(BadgeSpec {
        label: entry.name.to_string(),
        icon_url: entry.icon_url.to_string(),
        position: Vec3::from(entry.position),
        color: parse_hex(entry.color)?,
        scale: BADGE_SCALE,
        rotation_speed: entry.rotation_speed,
        float: Some(BADGE_FLOAT),
    })
}

/// Build the scene for `config`. Fails only on malformed static data.
pub fn compose(config: &HeroConfig) -> Result<SceneGraph, HeroError> {
    validate_entries(&config.tech_stack)?;
    let badges = config
        .tech_stack
        .iter()
        .map(|e| badge_spec(e).map(|spec| Badge::new(spec, config.badge_style)))
        .collect::<Result<Vec<_>, _>>()?;
    let scene = SceneGraph::new(light_rig()?, decorations()?, badges);
    log::info!(
        "[hero] composed {} objects, {} badges ({:?})",
        scene.objects().count(),
        scene.badge_count(),
        config.badge_style
    );
    Ok(scene)
}
