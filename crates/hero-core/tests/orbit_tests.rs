// Orbit controller: auto-rotation, drag, coast and the locked polar band.

use glam::{Vec2, Vec3};
use hero_core::camera::CameraState;
use hero_core::constants::POLAR_LOCK;
use hero_core::orbit::{OrbitController, OrbitMode, PointerButton};
use std::f32::consts::TAU;

fn controller() -> OrbitController {
    OrbitController::new(CameraState::default())
}

#[test]
fn starts_idle_looking_down_negative_z() {
    let o = controller();
    assert_eq!(o.mode(), OrbitMode::IdleAutoRotate);
    assert!((o.eye() - Vec3::new(0.0, 0.0, 6.0)).length() < 1e-4);
    assert!((o.polar() - POLAR_LOCK).abs() < 1e-6);
}

#[test]
fn idle_auto_rotation_advances_azimuth() {
    let mut o = controller();
    let rate = TAU / 60.0 * 0.5;
    assert!((o.auto_rotate_rate() - rate).abs() < 1e-6);
    let before = o.azimuth();
    for _ in 0..10 {
        o.update(0.1);
    }
    assert!((before - o.azimuth() - rate).abs() < 1e-4);
    // radius is preserved while orbiting
    assert!((o.eye().length() - 6.0).abs() < 1e-4);
}

#[test]
fn disabled_auto_rotate_holds_still() {
    let mut o = OrbitController::new(CameraState {
        auto_rotate: false,
        ..CameraState::default()
    });
    let before = o.azimuth();
    o.update(0.1);
    assert_eq!(o.azimuth(), before);
}

#[test]
fn drag_suspends_auto_rotation() {
    let mut o = controller();
    assert!(o.pointer_down(Vec2::new(100.0, 100.0), PointerButton::Primary));
    assert!(o.is_dragging());
    let before = o.azimuth();
    o.update(0.1);
    assert_eq!(o.azimuth(), before);
}

#[test]
fn horizontal_drag_turns_the_camera() {
    let mut o = controller();
    o.pointer_down(Vec2::new(100.0, 100.0), PointerButton::Primary);
    let before = o.azimuth();
    assert!(o.pointer_move(Vec2::new(160.0, 100.0), 600.0));
    let expected = -TAU * 60.0 / 600.0;
    assert!((o.azimuth() - before - expected).abs() < 1e-5);
}

#[test]
fn vertical_drag_cannot_leave_the_polar_lock() {
    let mut o = controller();
    o.pointer_down(Vec2::new(100.0, 100.0), PointerButton::Primary);
    o.pointer_move(Vec2::new(100.0, 400.0), 600.0);
    o.pointer_move(Vec2::new(100.0, -300.0), 600.0);
    assert!((o.polar() - POLAR_LOCK).abs() < 1e-6);
    assert!(o.eye().y.abs() < 1e-4);
}

#[test]
fn inverted_polar_band_is_normalised() {
    let mut o = OrbitController::new(CameraState {
        polar_clamp: (2.0, 1.0),
        ..CameraState::default()
    });
    assert_eq!(o.config().polar_clamp, (1.0, 2.0));
    assert!((1.0..=2.0).contains(&o.polar()));
    o.pointer_down(Vec2::new(100.0, 100.0), PointerButton::Primary);
    o.pointer_move(Vec2::new(100.0, 900.0), 600.0);
    assert!((1.0..=2.0).contains(&o.polar()));
    o.pointer_move(Vec2::new(100.0, -900.0), 600.0);
    assert!((1.0..=2.0).contains(&o.polar()));
}

#[test]
fn secondary_button_does_not_start_a_drag() {
    let mut o = controller();
    assert!(!o.pointer_down(Vec2::ZERO, PointerButton::Secondary));
    assert!(!o.pointer_down(Vec2::ZERO, PointerButton::Middle));
    assert!(!o.is_dragging());
    assert_eq!(PointerButton::from_dom(2), PointerButton::Secondary);
    assert_eq!(PointerButton::from_dom(0), PointerButton::Primary);
}

#[test]
fn move_without_drag_is_ignored() {
    let mut o = controller();
    let before = o.azimuth();
    assert!(!o.pointer_move(Vec2::new(300.0, 0.0), 600.0));
    assert_eq!(o.azimuth(), before);
}

#[test]
fn release_coasts_then_settles_into_auto_rotation() {
    let mut o = controller();
    o.pointer_down(Vec2::new(0.0, 0.0), PointerButton::Primary);
    o.pointer_move(Vec2::new(30.0, 0.0), 600.0);
    o.update(0.016);
    o.pointer_up();
    assert_eq!(o.mode(), OrbitMode::IdleAutoRotate);

    // coasting continues in the drag direction (negative azimuth)
    let a0 = o.azimuth();
    o.update(0.016);
    let coast_step = o.azimuth() - a0;
    let auto_step = -o.auto_rotate_rate() * 0.016;
    assert!(coast_step < auto_step);

    // after a few seconds only auto-rotation remains
    for _ in 0..300 {
        o.update(0.016);
    }
    let a1 = o.azimuth();
    o.update(0.016);
    assert!((o.azimuth() - a1 - auto_step).abs() < 1e-5);
}

#[test]
fn zoom_and_pan_never_move_the_camera() {
    let mut o = controller();
    let eye = o.eye();
    assert!(!o.zoom(-120.0));
    assert!(!o.pan(Vec2::new(10.0, 10.0)));
    assert_eq!(o.eye(), eye);
}
