// Ray/sphere hits and nearest-badge selection.

use glam::Vec3;
use hero_core::picking::{nearest_hit, ray_sphere};

#[test]
fn ray_sphere_intersection_basic() {
    let result = ray_sphere(Vec3::ZERO, Vec3::Z, Vec3::new(0.0, 0.0, 5.0), 2.0);
    let t = result.expect("ray along +Z should hit");
    assert!((t - 3.0).abs() < 1e-5);
}

#[test]
fn ray_sphere_intersection_miss() {
    assert!(ray_sphere(Vec3::ZERO, Vec3::X, Vec3::new(0.0, 0.0, 5.0), 2.0).is_none());
}

#[test]
fn ray_sphere_intersection_tangent() {
    let t = ray_sphere(Vec3::ZERO, Vec3::Z, Vec3::new(2.0, 0.0, 5.0), 2.0);
    assert!(matches!(t, Some(t) if (t - 5.0).abs() < 1e-3));
}

#[test]
fn sphere_behind_the_origin_is_not_hit() {
    assert!(ray_sphere(Vec3::ZERO, Vec3::Z, Vec3::new(0.0, 0.0, -5.0), 2.0).is_none());
}

#[test]
fn origin_inside_sphere_is_not_a_hit() {
    let center = Vec3::new(0.0, 0.0, 5.0);
    assert!(ray_sphere(center, Vec3::X, center, 3.0).is_none());
}

#[test]
fn nearest_hit_prefers_the_closest_sphere() {
    let spheres = [
        (Vec3::new(0.0, 0.0, 10.0), 1.0),
        (Vec3::new(0.0, 0.0, 4.0), 1.0),
        (Vec3::new(5.0, 0.0, 2.0), 1.0),
    ];
    assert_eq!(nearest_hit(Vec3::ZERO, Vec3::Z, spheres), Some(1));
}

#[test]
fn nearest_hit_on_empty_or_missed_set() {
    assert_eq!(nearest_hit(Vec3::ZERO, Vec3::Z, std::iter::empty()), None);
    assert_eq!(
        nearest_hit(Vec3::ZERO, Vec3::Y, [(Vec3::new(0.0, 0.0, 4.0), 1.0)]),
        None
    );
}

#[test]
fn equal_distance_keeps_the_first_sphere() {
    let spheres = [(Vec3::new(0.0, 0.0, 4.0), 1.0), (Vec3::new(0.0, 0.0, 4.0), 1.0)];
    assert_eq!(nearest_hit(Vec3::ZERO, Vec3::Z, spheres), Some(0));
}
