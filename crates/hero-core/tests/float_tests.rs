// Idle float offsets: pure functions of elapsed time.

use hero_core::float::{FloatOffset, FloatParams};
use std::f32::consts::PI;

const BOB: FloatParams = FloatParams::new(0.6, 0.3, 0.1);

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}

#[test]
fn offset_is_zero_at_start() {
    let o = BOB.offset(0.0);
    assert!(o.is_zero(), "expected no offset at t=0, got {o:?}");
}

#[test]
fn lift_peaks_at_float_intensity_a_quarter_period_in() {
    let t = PI / (2.0 * BOB.speed);
    assert!(close(BOB.offset(t).lift, BOB.float_intensity));
    assert!(close(BOB.offset(3.0 * t).lift, -BOB.float_intensity));
}

#[test]
fn lift_stays_within_intensity() {
    for i in 0..500 {
        let t = i as f32 * 0.037;
        assert!(BOB.offset(t).lift.abs() <= BOB.float_intensity + 1e-6);
    }
}

#[test]
fn motion_repeats_every_period() {
    let p = BOB.period();
    for t in [0.3_f32, 1.7, 4.2] {
        let a = BOB.offset(t);
        let b = BOB.offset(t + p);
        assert!(close(a.lift, b.lift));
        assert!((a.tilt - b.tilt).length() < 1e-4);
    }
}

#[test]
fn zero_rotation_intensity_never_tilts() {
    let still = FloatParams::new(1.0, 0.0, 0.2);
    for i in 0..50 {
        assert_eq!(still.offset(i as f32 * 0.25).tilt, glam::Vec3::ZERO);
    }
}

#[test]
fn same_time_gives_same_offset() {
    assert_eq!(BOB.offset(12.5), BOB.offset(12.5));
    assert_eq!(FloatOffset::ZERO.matrix(), glam::Mat4::IDENTITY);
}
