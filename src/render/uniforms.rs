use glam::{Mat4, Vec3};
use hero_core::{Camera, DrawItem, LightRig};

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct LightPacked {
    pub(crate) position: [f32; 4],
    pub(crate) color: [f32; 4],
}

impl LightPacked {
    fn new(position: Vec3, color: Vec3, intensity: f32) -> Self {
        Self {
            position: position.extend(1.0).to_array(),
            color: (color * intensity).extend(1.0).to_array(),
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct Globals {
    pub(crate) view_proj: [[f32; 4]; 4],
    pub(crate) eye_time: [f32; 4],
    pub(crate) ambient: [f32; 4],
    pub(crate) directional: LightPacked,
    pub(crate) points: [LightPacked; 2],
}

impl Globals {
    pub(crate) fn new(camera: &Camera, lights: &LightRig, elapsed: f32) -> Self {
        let ambient = lights.ambient.color * lights.ambient.intensity;
        let d = &lights.directional;
        let [p0, p1] = &lights.points;
        Self {
            view_proj: camera.view_projection().to_cols_array_2d(),
            eye_time: camera.eye.extend(elapsed).to_array(),
            ambient: ambient.extend(1.0).to_array(),
            directional: LightPacked::new(d.position, d.color, d.intensity),
            points: [
                LightPacked::new(p0.position, p0.color, p0.intensity),
                LightPacked::new(p1.position, p1.color, p1.intensity),
            ],
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct ObjectUniform {
    pub(crate) model: [[f32; 4]; 4],
    pub(crate) normal_matrix: [[f32; 4]; 4],
    pub(crate) color: [f32; 4],
    pub(crate) surface: [f32; 4],
    pub(crate) distort: [f32; 4],
}

impl ObjectUniform {
    pub(crate) fn new(item: &DrawItem) -> Self {
        let m = &item.material;
        let distort = m
            .distortion
            .map(|d| [d.amount, d.speed, 0.0, 0.0])
            .unwrap_or([0.0; 4]);
        Self {
            model: item.model.to_cols_array_2d(),
            normal_matrix: normal_matrix(item.model).to_cols_array_2d(),
            color: m.color.extend(m.opacity).to_array(),
            surface: [m.emissive_intensity, m.roughness, m.metalness, 0.0],
            distort,
        }
    }
}

fn normal_matrix(model: Mat4) -> Mat4 {
    if model.determinant().abs() < f32::EPSILON {
        return Mat4::IDENTITY;
    }
    model.inverse().transpose()
}

/// Round `size` up to the device's dynamic offset alignment.
pub(crate) fn aligned_stride(size: u64, alignment: u64) -> u64 {
    let a = alignment.max(1);
    size.div_ceil(a) * a
}
