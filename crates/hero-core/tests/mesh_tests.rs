// Procedural meshes: sizes, index validity and rounded badge bounds.

use glam::Vec3;
use hero_core::constants::BADGE_DEPTH;
use hero_core::frame::MeshKind;
use hero_core::mesh::{self, MeshData};

fn assert_well_formed(m: &MeshData) {
    assert!(!m.vertices.is_empty());
    assert_eq!(m.indices.len() % 3, 0);
    let n = m.vertices.len() as u32;
    assert!(m.indices.iter().all(|&i| i < n));
    for v in &m.vertices {
        let len = Vec3::from(v.normal).length();
        assert!((len - 1.0).abs() < 1e-4, "normal not unit: {len}");
    }
}

#[test]
fn every_kind_builds_a_valid_mesh() {
    for kind in [
        MeshKind::Sphere,
        MeshKind::Torus,
        MeshKind::Cube,
        MeshKind::RoundedBox,
        MeshKind::Quad,
    ] {
        assert_well_formed(&mesh::build(kind));
    }
}

#[test]
fn sphere_vertices_lie_on_the_unit_sphere() {
    let m = mesh::sphere(16, 8);
    assert!(m
        .vertices
        .iter()
        .all(|v| (Vec3::from(v.position).length() - 1.0).abs() < 1e-5));
    assert_eq!(m.triangle_count(), 16 * 8 * 2);
}

#[test]
fn cube_faces_point_outward() {
    let m = mesh::cube();
    assert_eq!(m.triangle_count(), 12);
    for tri in m.indices.chunks(3) {
        let [a, b, c] = [tri[0], tri[1], tri[2]].map(|i| Vec3::from(m.vertices[i as usize].position));
        let n = (b - a).cross(c - a);
        let centre = (a + b + c) / 3.0;
        assert!(n.dot(centre) > 0.0, "inward-facing triangle");
    }
}

#[test]
fn rounded_box_stays_inside_its_bounds() {
    let size = Vec3::new(1.0, 1.0, BADGE_DEPTH);
    let m = mesh::rounded_box(size, 0.1, 4);
    let half = size * 0.5 + Vec3::splat(1e-5);
    assert!(m
        .vertices
        .iter()
        .all(|v| Vec3::from(v.position).abs().cmple(half).all()));
    // corners are pulled in
    let corner = Vec3::new(0.5, 0.5, BADGE_DEPTH * 0.5);
    assert!(m
        .vertices
        .iter()
        .all(|v| (Vec3::from(v.position) - corner).length() > 1e-3));
}
