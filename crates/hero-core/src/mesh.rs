//! Procedural geometry for every [`MeshKind`], built once per surface.
//!
//! All meshes are unit-sized and centred on the origin; draw items scale them
//! through their model matrix.

use crate::constants::{
    BADGE_CORNER_RADIUS, BADGE_DEPTH, ROUNDED_BOX_SUBDIVISIONS, SPHERE_RINGS, SPHERE_SEGMENTS,
    TORUS_RADIAL_SEGMENTS, TORUS_TUBULAR_SEGMENTS,
};
use crate::frame::MeshKind;
use glam::{Vec2, Vec3};
use std::f32::consts::{PI, TAU};

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

impl Vertex {
    fn new(position: Vec3, normal: Vec3, uv: Vec2) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.to_array(),
            uv: uv.to_array(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Append a (cols+1) x (rows+1) vertex grid as two triangles per cell,
    /// wound counter-clockwise when `vertex(u, v)` walks u to the right and v
    /// upward as seen from outside.
    fn push_grid(&mut self, cols: u32, rows: u32, mut vertex: impl FnMut(f32, f32) -> Vertex) {
        let base = self.vertices.len() as u32;
        for j in 0..=rows {
            for i in 0..=cols {
                self.vertices
                    .push(vertex(i as f32 / cols as f32, j as f32 / rows as f32));
            }
        }
        let stride = cols + 1;
        for j in 0..rows {
            for i in 0..cols {
                let a = base + j * stride + i;
                let b = a + 1;
                let c = a + stride;
                let d = c + 1;
                self.indices.extend_from_slice(&[a, b, d, a, d, c]);
            }
        }
    }
}

pub fn build(kind: MeshKind) -> MeshData {
    match kind {
        MeshKind::Sphere => sphere(SPHERE_SEGMENTS, SPHERE_RINGS),
        MeshKind::Torus => torus(1.0, 0.3, TORUS_RADIAL_SEGMENTS, TORUS_TUBULAR_SEGMENTS),
        MeshKind::Cube => cube(),
        MeshKind::RoundedBox => rounded_box(
            Vec3::new(1.0, 1.0, BADGE_DEPTH),
            BADGE_CORNER_RADIUS,
            ROUNDED_BOX_SUBDIVISIONS,
        ),
        MeshKind::Quad => quad(),
    }
}

/// UV sphere of radius 1.
pub fn sphere(segments: u32, rings: u32) -> MeshData {
    let mut mesh = MeshData::default();
    mesh.push_grid(segments.max(3), rings.max(2), |u, v| {
        let theta = u * TAU;
        let phi = (1.0 - v) * PI;
        let n = Vec3::new(-theta.cos() * phi.sin(), phi.cos(), theta.sin() * phi.sin());
        Vertex::new(n, n, Vec2::new(u, 1.0 - v))
    });
    mesh
}

/// Torus in the XY plane around the Z axis.
pub fn torus(radius: f32, tube: f32, radial: u32, tubular: u32) -> MeshData {
    let mut mesh = MeshData::default();
    mesh.push_grid(tubular.max(3), radial.max(3), |u, v| {
        let a = u * TAU;
        let b = v * TAU;
        let ring = Vec3::new(a.cos(), a.sin(), 0.0);
        let n = ring * b.cos() + Vec3::Z * b.sin();
        Vertex::new(ring * radius + n * tube, n, Vec2::new(u, v))
    });
    mesh
}

pub fn cube() -> MeshData {
    let mut mesh = MeshData::default();
    for (normal, right, up) in cube_faces() {
        mesh.push_grid(1, 1, |u, v| {
            let p = (normal + right * (2.0 * u - 1.0) + up * (2.0 * v - 1.0)) * 0.5;
            Vertex::new(p, normal, Vec2::new(u, 1.0 - v))
        });
    }
    mesh
}

/// Box of the given size whose edges are rounded with `radius`.
///
/// Each face is subdivided, then every vertex is pulled back onto the
/// rounded hull: clamp to the inner box shrunk by `radius`, and push out
/// along the clamped offset.
pub fn rounded_box(size: Vec3, radius: f32, subdivisions: u32) -> MeshData {
    let half = size * 0.5;
    let radius = radius.clamp(0.0, half.min_element());
    let inner = half - Vec3::splat(radius);
    let mut mesh = MeshData::default();
    for (normal, right, up) in cube_faces() {
        mesh.push_grid(subdivisions.max(1), subdivisions.max(1), |u, v| {
            let p = (normal + right * (2.0 * u - 1.0) + up * (2.0 * v - 1.0)) * half;
            let core = p.clamp(-inner, inner);
            let n = (p - core).try_normalize().unwrap_or(normal);
            Vertex::new(core + n * radius, n, Vec2::new(u, 1.0 - v))
        });
    }
    mesh
}

/// Unit quad in the XY plane facing +Z.
pub fn quad() -> MeshData {
    let mut mesh = MeshData::default();
    mesh.push_grid(1, 1, |u, v| {
        Vertex::new(Vec3::new(u - 0.5, v - 0.5, 0.0), Vec3::Z, Vec2::new(u, 1.0 - v))
    });
    mesh
}

/// (outward normal, right, up) with right x up == normal.
fn cube_faces() -> [(Vec3, Vec3, Vec3); 6] {
    [
        (Vec3::X, Vec3::NEG_Z, Vec3::Y),
        (Vec3::NEG_X, Vec3::Z, Vec3::Y),
        (Vec3::Y, Vec3::X, Vec3::NEG_Z),
        (Vec3::NEG_Y, Vec3::X, Vec3::Z),
        (Vec3::Z, Vec3::X, Vec3::Y),
        (Vec3::NEG_Z, Vec3::NEG_X, Vec3::Y),
    ]
}
