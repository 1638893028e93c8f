use glam::Vec3;

// Shared visual tuning constants for the hero scene.

// Camera
pub const CAMERA_DISTANCE: f32 = 6.0; // eye distance from the orbit target
pub const CAMERA_FOV_DEGREES: f32 = 45.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;

// Orbit controller
pub const AUTO_ROTATE_SPEED: f32 = 0.5; // 2π/60 rad/s per unit, i.e. one turn per 120 s
pub const ORBIT_ROTATE_SPEED: f32 = 1.0; // drag gain; a full viewport height drag = one turn
pub const ORBIT_COAST_TAU_SEC: f32 = 0.25; // decay of the release velocity
pub const ORBIT_COAST_EPSILON: f32 = 1e-4; // rad/s below which coasting stops
pub const POLAR_LOCK: f32 = std::f32::consts::FRAC_PI_2; // horizon band, min == max

// Clock
pub const MAX_FRAME_DELTA: f32 = 0.1; // seconds; caps catch-up after a stalled tab

// Central sphere
pub const SPHERE_SCALE: f32 = 1.8;
pub const SPHERE_COLOR: &str = "#00d4ff";
pub const SPHERE_SPIN: Vec3 = Vec3::new(0.2, 0.3, 0.0);
pub const SPHERE_DISTORT: f32 = 0.4;
pub const SPHERE_DISTORT_SPEED: f32 = 2.0;

// Float wrapper
pub const FLOAT_TILT_AMPLITUDE: Vec3 = Vec3::new(1.0 / 8.0, 1.0 / 8.0, 1.0 / 20.0);
pub const FLOAT_TILT_PHASE: Vec3 = Vec3::new(std::f32::consts::FRAC_PI_2, 0.0, std::f32::consts::PI);

// Bracket wobble
pub const BRACKET_WOBBLE_FREQUENCY: f32 = 0.5;
pub const BRACKET_WOBBLE_AMPLITUDE: f32 = 0.1;
pub const BRACKET_BAR_THICKNESS: f32 = 0.12;

// Badges
pub const BADGE_EMISSIVE_REST: f32 = 0.3;
pub const BADGE_EMISSIVE_HOVER: f32 = 0.6;
pub const BADGE_DEPTH: f32 = 0.25; // body is 1 x 1 x depth
pub const BADGE_CORNER_RADIUS: f32 = 0.1; // must not exceed half the depth
pub const BADGE_FACE_SIZE: f32 = 0.7; // icon quad edge relative to body
pub const BADGE_FACE_GAP: f32 = 0.01; // keeps icon quads off the body surface
pub const BADGE_PICK_RADIUS: f32 = 0.75; // pick sphere radius per unit of badge scale
pub const TOOLTIP_LIFT: f32 = 0.9; // tooltip anchor height per unit of badge scale

// Mesh tessellation
pub const SPHERE_SEGMENTS: u32 = 64;
pub const SPHERE_RINGS: u32 = 48;
pub const TORUS_RADIAL_SEGMENTS: u32 = 16;
pub const TORUS_TUBULAR_SEGMENTS: u32 = 50;
pub const ROUNDED_BOX_SUBDIVISIONS: u32 = 6;
