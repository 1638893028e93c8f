//! Orbit camera controller.
//!
//! Two states: `IdleAutoRotate`, where the azimuth advances on its own, and
//! `UserDrag`, entered on primary pointer-down, where horizontal drag turns
//! the camera and auto-rotation is suspended. Vertical tilt is limited to the
//! configured polar band (a single angle by default). Zoom and pan are
//! accepted and ignored.

use crate::camera::{Camera, CameraState};
use crate::constants::{ORBIT_COAST_EPSILON, ORBIT_COAST_TAU_SEC, ORBIT_ROTATE_SPEED};
use glam::{Vec2, Vec3};
use std::f32::consts::TAU;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OrbitMode {
    IdleAutoRotate,
    UserDrag { last: Vec2 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Middle,
    Secondary,
}

impl PointerButton {
    /// Map a DOM `MouseEvent.button` code.
    pub fn from_dom(code: i16) -> Self {
        match code {
            1 => PointerButton::Middle,
            2 => PointerButton::Secondary,
            _ => PointerButton::Primary,
        }
    }
}

#[derive(Clone, Debug)]
pub struct OrbitController {
    config: CameraState,
    mode: OrbitMode,
    azimuth: f32,
    polar: f32,
    radius: f32,
    // azimuth moved by drag since the last update, and the rate it implies
    drag_accum: f32,
    drag_velocity: f32,
    coast: f32,
}

impl OrbitController {
    pub fn new(mut config: CameraState) -> Self {
        let (lo, hi) = config.polar_clamp;
        config.polar_clamp = (lo.min(hi), lo.max(hi));
        let offset = config.position - config.target;
        let radius = offset.length().max(f32::EPSILON);
        let polar = (offset.y / radius).clamp(-1.0, 1.0).acos();
        let azimuth = offset.x.atan2(offset.z);
        let (min, max) = config.polar_clamp;
        Self {
            config,
            mode: OrbitMode::IdleAutoRotate,
            azimuth,
            polar: polar.clamp(min, max),
            radius,
            drag_accum: 0.0,
            drag_velocity: 0.0,
            coast: 0.0,
        }
    }

    pub fn mode(&self) -> OrbitMode {
        self.mode
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.mode, OrbitMode::UserDrag { .. })
    }

    pub fn azimuth(&self) -> f32 {
        self.azimuth
    }

    pub fn polar(&self) -> f32 {
        self.polar
    }

    pub fn config(&self) -> &CameraState {
        &self.config
    }

    /// Angular rate of auto-rotation in rad/s.
    pub fn auto_rotate_rate(&self) -> f32 {
        if self.config.auto_rotate {
            TAU / 60.0 * self.config.auto_rotate_speed
        } else {
            0.0
        }
    }

    /// Returns true when the press started a drag.
    pub fn pointer_down(&mut self, pos: Vec2, button: PointerButton) -> bool {
        match button {
            PointerButton::Primary => {
                self.mode = OrbitMode::UserDrag { last: pos };
                self.drag_accum = 0.0;
                self.drag_velocity = 0.0;
                self.coast = 0.0;
                log::debug!("[orbit] drag start");
                true
            }
            // pan is disabled
            PointerButton::Middle | PointerButton::Secondary => false,
        }
    }

    /// Apply a drag move. `viewport_height` in the same units as `pos`.
    pub fn pointer_move(&mut self, pos: Vec2, viewport_height: f32) -> bool {
        let OrbitMode::UserDrag { last } = self.mode else {
            return false;
        };
        let delta = pos - last;
        let h = viewport_height.max(1.0);
        let d_azimuth = -TAU * delta.x / h * ORBIT_ROTATE_SPEED;
        let d_polar = -TAU * delta.y / h * ORBIT_ROTATE_SPEED;
        self.azimuth += d_azimuth;
        self.drag_accum += d_azimuth;
        let (min, max) = self.config.polar_clamp;
        self.polar = (self.polar + d_polar).clamp(min, max);
        self.mode = OrbitMode::UserDrag { last: pos };
        true
    }

    pub fn pointer_up(&mut self) {
        if self.is_dragging() {
            self.coast = self.drag_velocity;
            self.mode = OrbitMode::IdleAutoRotate;
            log::debug!("[orbit] drag end, coasting at {:.3} rad/s", self.coast);
        }
    }

    /// Wheel input. Zoom is disabled so this never changes the camera.
    pub fn zoom(&mut self, delta: f32) -> bool {
        log::trace!("[orbit] zoom {delta} ignored");
        false
    }

    /// Pan input. Disabled; always a no-op.
    pub fn pan(&mut self, delta: Vec2) -> bool {
        log::trace!("[orbit] pan {delta} ignored");
        false
    }

    /// Advance by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        let dt = dt.max(0.0);
        match self.mode {
            OrbitMode::UserDrag { .. } => {
                if dt > 0.0 {
                    self.drag_velocity = self.drag_accum / dt;
                    self.drag_accum = 0.0;
                }
            }
            OrbitMode::IdleAutoRotate => {
                self.azimuth -= self.auto_rotate_rate() * dt;
                if self.coast != 0.0 {
                    self.azimuth += self.coast * dt;
                    self.coast *= (-dt / ORBIT_COAST_TAU_SEC).exp();
                    if self.coast.abs() < ORBIT_COAST_EPSILON {
                        self.coast = 0.0;
                    }
                }
            }
        }
    }

    pub fn eye(&self) -> Vec3 {
        let (sp, cp) = self.polar.sin_cos();
        let (sa, ca) = self.azimuth.sin_cos();
        self.config.target + self.radius * Vec3::new(sp * sa, cp, sp * ca)
    }

    pub fn camera(&self, aspect: f32) -> Camera {
        self.config.camera(self.eye(), aspect)
    }
}
