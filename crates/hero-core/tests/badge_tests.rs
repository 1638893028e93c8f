// Badge hover state, tooltip visibility and face decoration.

use hero_core::badge::{Badge, BadgeSpec, BadgeStyle, IconState};
use hero_core::constants::{BADGE_EMISSIVE_HOVER, BADGE_EMISSIVE_REST};
use hero_core::frame::{MeshKind, TextureKey};
use hero_core::object::Animated;
use hero_core::HeroError;
use glam::Vec3;

fn react(style: BadgeStyle) -> Badge {
    Badge::new(
        BadgeSpec {
            label: "React".into(),
            icon_url: "https://example.test/react.svg".into(),
            position: Vec3::new(3.0, 1.3, 0.4),
            color: Vec3::new(0.1, 0.7, 0.9),
            scale: 0.55,
            rotation_speed: 0.6,
            float: None,
        },
        style,
    )
}

#[test]
fn hover_raises_emissive_and_shows_tooltip() {
    let mut b = react(BadgeStyle::Textured);
    assert_eq!(b.emissive_intensity(), BADGE_EMISSIVE_REST);
    assert_eq!(b.tooltip().opacity, 0.0);

    assert!(b.on_hover_enter());
    assert_eq!(b.emissive_intensity(), BADGE_EMISSIVE_HOVER);
    let tip = b.tooltip();
    assert_eq!(tip.text, "React");
    assert_eq!(tip.opacity, 1.0);

    assert!(b.on_hover_leave());
    assert_eq!(b.emissive_intensity(), BADGE_EMISSIVE_REST);
    assert_eq!(b.tooltip().opacity, 0.0);
}

#[test]
fn repeated_enter_then_single_leave_hides() {
    let mut b = react(BadgeStyle::Plain);
    assert!(b.on_hover_enter());
    assert!(!b.on_hover_enter());
    assert!(b.on_hover_leave());
    assert!(!b.is_hovered());
    assert_eq!(b.tooltip().opacity, 0.0);
}

#[test]
fn leave_without_enter_is_a_no_op() {
    let mut b = react(BadgeStyle::Plain);
    assert!(!b.on_hover_leave());
    assert!(!b.is_hovered());
}

#[test]
fn emitted_body_tracks_hover_emissive() {
    let mut b = react(BadgeStyle::Plain);
    let mut out = Vec::new();
    b.emit(0.0, &mut out);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].mesh, MeshKind::RoundedBox);
    assert_eq!(out[0].material.emissive_intensity, BADGE_EMISSIVE_REST);

    b.on_hover_enter();
    out.clear();
    b.emit(0.0, &mut out);
    assert_eq!(out[0].material.emissive_intensity, BADGE_EMISSIVE_HOVER);
}

#[test]
fn icon_faces_appear_once_loaded() {
    let mut b = react(BadgeStyle::Textured);
    let mut out = Vec::new();
    b.emit(0.0, &mut out);
    assert_eq!(out.len(), 1, "pending icon draws the body only");

    b.set_icon_state(IconState::Ready);
    out.clear();
    b.emit(0.0, &mut out);
    let faces: Vec<_> = out.iter().filter(|d| d.mesh == MeshKind::Quad).collect();
    assert_eq!(faces.len(), 2);
    for f in faces {
        assert_eq!(
            f.texture,
            Some(TextureKey::Icon("https://example.test/react.svg".into()))
        );
    }
}

#[test]
fn failed_icon_degrades_to_shape() {
    let mut b = react(BadgeStyle::Textured);
    b.set_icon_state(IconState::Failed);
    let mut out = Vec::new();
    b.emit(1.0, &mut out);
    assert_eq!(out.len(), 1);
    assert!(out[0].texture.is_none());
}

#[test]
fn glyph_style_uses_label_text() {
    let b = react(BadgeStyle::Glyph);
    let mut out = Vec::new();
    b.emit(0.0, &mut out);
    assert_eq!(out.len(), 3);
    assert!(out
        .iter()
        .filter(|d| d.mesh == MeshKind::Quad)
        .all(|d| d.texture == Some(TextureKey::Glyph("React".into()))));
}

#[test]
fn badge_spins_about_its_own_y_axis() {
    let b = react(BadgeStyle::Plain);
    let pose = b.pose(2.0);
    assert!((pose.local.rotation.y - 1.2).abs() < 1e-6);
    assert_eq!(pose.world_position(), Vec3::new(3.0, 1.3, 0.4));
}

#[test]
fn tooltip_anchor_sits_above_the_badge() {
    let b = react(BadgeStyle::Plain);
    let anchor = b.tooltip_anchor(0.0);
    assert!(anchor.y > b.spec().position.y);
    assert_eq!(anchor.x, b.spec().position.x);
}

#[test]
fn badge_style_parses_known_names() {
    assert_eq!("plain".parse::<BadgeStyle>(), Ok(BadgeStyle::Plain));
    assert_eq!(" Textured ".parse::<BadgeStyle>(), Ok(BadgeStyle::Textured));
    assert_eq!("glyph".parse::<BadgeStyle>(), Ok(BadgeStyle::Glyph));
    assert_eq!(
        "neon".parse::<BadgeStyle>(),
        Err(HeroError::UnknownBadgeStyle("neon".into()))
    );
    assert_eq!(BadgeStyle::default(), BadgeStyle::Textured);
}
