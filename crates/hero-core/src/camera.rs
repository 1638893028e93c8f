//! Camera description and screen-to-world rays.

use crate::constants::{
    AUTO_ROTATE_SPEED, CAMERA_DISTANCE, CAMERA_FOV_DEGREES, CAMERA_ZFAR, CAMERA_ZNEAR, POLAR_LOCK,
};
use glam::{Mat4, Vec2, Vec3, Vec4};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// World-space ray through a pixel of a `viewport`-sized surface.
    ///
    /// Returns `(ray_origin, ray_direction)`.
    pub fn screen_ray(&self, px: Vec2, viewport: Vec2) -> (Vec3, Vec3) {
        let ndc_x = (2.0 * px.x / viewport.x.max(1.0)) - 1.0;
        let ndc_y = 1.0 - (2.0 * px.y / viewport.y.max(1.0));
        let inv = self.view_projection().inverse();
        let p_far = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
        let p1: Vec3 = p_far.truncate() / p_far.w;
        (self.eye, (p1 - self.eye).normalize())
    }

    /// Pixel position of a world point, or `None` behind the camera.
    pub fn project(&self, world: Vec3, viewport: Vec2) -> Option<Vec2> {
        let clip = self.view_projection() * world.extend(1.0);
        if clip.w <= 0.0 {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        Some(Vec2::new(
            (ndc.x + 1.0) * 0.5 * viewport.x,
            (1.0 - ndc.y) * 0.5 * viewport.y,
        ))
    }
}

/// Orbit camera configuration. Zoom and pan are always disabled.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraState {
    pub position: Vec3,
    pub target: Vec3,
    pub field_of_view_degrees: f32,
    pub auto_rotate: bool,
    pub auto_rotate_speed: f32,
    /// `(min, max)` polar angle in radians, measured from +Y.
    pub polar_clamp: (f32, f32),
}

impl Default for CameraState {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, CAMERA_DISTANCE),
            target: Vec3::ZERO,
            field_of_view_degrees: CAMERA_FOV_DEGREES,
            auto_rotate: true,
            auto_rotate_speed: AUTO_ROTATE_SPEED,
            polar_clamp: (POLAR_LOCK, POLAR_LOCK),
        }
    }
}

impl CameraState {
    pub fn camera(&self, eye: Vec3, aspect: f32) -> Camera {
        Camera {
            eye,
            target: self.target,
            up: Vec3::Y,
            aspect,
            fovy_radians: self.field_of_view_degrees.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centre_pixel_ray_points_at_target() {
        let cam = CameraState::default().camera(Vec3::new(0.0, 0.0, 6.0), 1.0);
        let (o, d) = cam.screen_ray(Vec2::new(50.0, 50.0), Vec2::new(100.0, 100.0));
        assert_eq!(o, Vec3::new(0.0, 0.0, 6.0));
        assert!((d - Vec3::NEG_Z).length() < 1e-4);
    }

    #[test]
    fn project_then_ray_hits_the_point() {
        let cam = CameraState::default().camera(Vec3::new(0.0, 0.0, 6.0), 1.5);
        let viewport = Vec2::new(300.0, 200.0);
        let p = Vec3::new(1.0, 0.5, 0.0);
        let px = cam.project(p, viewport).unwrap();
        let (o, d) = cam.screen_ray(px, viewport);
        let along = (p - o).dot(d);
        assert!((o + d * along - p).length() < 1e-3);
    }
}
