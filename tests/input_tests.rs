// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;

#[test]
fn css_offset_scales_to_backing_pixels() {
    // 400x300 CSS box backed by an 800x600 canvas (dpr 2)
    let px = css_to_backing(Vec2::new(100.0, 150.0), Vec2::new(400.0, 300.0), Vec2::new(800.0, 600.0));
    assert_eq!(px, Vec2::new(200.0, 300.0));
}

#[test]
fn css_corners_map_to_backing_corners() {
    let rect = Vec2::new(320.0, 240.0);
    let backing = Vec2::new(640.0, 480.0);
    assert_eq!(css_to_backing(Vec2::ZERO, rect, backing), Vec2::ZERO);
    assert_eq!(css_to_backing(rect, rect, backing), backing);
}

#[test]
fn zero_sized_rect_maps_to_origin() {
    let px = css_to_backing(Vec2::new(10.0, 10.0), Vec2::ZERO, Vec2::new(800.0, 600.0));
    assert_eq!(px, Vec2::ZERO);
}

#[test]
fn backing_to_css_inverts_css_to_backing() {
    let rect = Vec2::new(512.0, 384.0);
    let backing = Vec2::new(1024.0, 768.0);
    let offset = Vec2::new(37.5, 201.25);
    let back = backing_to_css(css_to_backing(offset, rect, backing), rect, backing);
    assert!((back - offset).length() < 1e-3);
}

#[test]
fn backing_to_css_with_empty_backing() {
    assert_eq!(
        backing_to_css(Vec2::new(5.0, 5.0), Vec2::new(100.0, 100.0), Vec2::ZERO),
        Vec2::ZERO
    );
}

#[test]
fn wheel_delta_normalises_modes() {
    assert_eq!(wheel_delta_px(53.0, 0), 53.0);
    assert_eq!(wheel_delta_px(3.0, 1), 48.0);
    assert_eq!(wheel_delta_px(-1.0, 2), -800.0);
}

#[test]
fn unknown_wheel_mode_is_treated_as_pixels() {
    assert_eq!(wheel_delta_px(12.0, 7), 12.0);
}
