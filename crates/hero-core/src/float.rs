//! Idle bobbing for wrapped scene objects.
//!
//! The offset is a pure function of elapsed time: there is no state between
//! frames, so restarting the clock replays the exact same motion.

use crate::constants::{FLOAT_TILT_AMPLITUDE, FLOAT_TILT_PHASE};
use crate::transform::Transform;
use glam::{Mat4, Vec3};

/// Amplitude and frequency of the idle bob.
///
/// `speed` is the angular frequency in rad/s and should be positive; the
/// intensities may be negative, which simply inverts the phase.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloatParams {
    pub speed: f32,
    pub rotation_intensity: f32,
    pub float_intensity: f32,
}

impl FloatParams {
    pub const fn new(speed: f32, rotation_intensity: f32, float_intensity: f32) -> Self {
        Self {
            speed,
            rotation_intensity,
            float_intensity,
        }
    }

    /// Offset applied on top of the wrapped object's own transform at `t`.
    pub fn offset(&self, t: f32) -> FloatOffset {
        let phase = t * self.speed;
        let jitter = |amp: f32, shift: f32| amp * ((phase + shift).sin() - shift.sin());
        FloatOffset {
            lift: self.float_intensity * phase.sin(),
            tilt: Vec3::new(
                jitter(FLOAT_TILT_AMPLITUDE.x, FLOAT_TILT_PHASE.x),
                jitter(FLOAT_TILT_AMPLITUDE.y, FLOAT_TILT_PHASE.y),
                jitter(FLOAT_TILT_AMPLITUDE.z, FLOAT_TILT_PHASE.z),
            ) * self.rotation_intensity,
        }
    }

    /// Seconds for one full bob.
    pub fn period(&self) -> f32 {
        std::f32::consts::TAU / self.speed
    }
}

/// Vertical displacement plus a small rotational tilt.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FloatOffset {
    pub lift: f32,
    pub tilt: Vec3,
}

impl FloatOffset {
    pub const ZERO: Self = Self {
        lift: 0.0,
        tilt: Vec3::ZERO,
    };

    pub fn transform(&self) -> Transform {
        Transform::from_translation(Vec3::new(0.0, self.lift, 0.0)).with_rotation(self.tilt)
    }

    pub fn matrix(&self) -> Mat4 {
        self.transform().matrix()
    }

    pub fn is_zero(&self) -> bool {
        self.lift == 0.0 && self.tilt == Vec3::ZERO
    }
}
