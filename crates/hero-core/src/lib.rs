pub mod badge;
pub mod camera;
pub mod clock;
pub mod color;
pub mod composer;
pub mod constants;
pub mod content;
pub mod error;
pub mod float;
pub mod frame;
pub mod hero;
pub mod listeners;
pub mod mesh;
pub mod object;
pub mod orbit;
pub mod picking;
pub mod scene;
pub mod scheduler;
pub mod transform;

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");
pub static SPRITE_WGSL: &str = include_str!("../shaders/sprite.wgsl");

pub use badge::{Badge, BadgeSpec, BadgeStyle, IconState, Tooltip};
pub use camera::{Camera, CameraState};
pub use clock::{FrameClock, FrameTime};
pub use composer::{compose, HeroConfig};
pub use content::{
    NavLink, Project, ProjectView, Route, TechStackEntry, MOCK_PROJECTS, NAV_LINKS, TECH_STACK,
};
pub use error::{ContentError, HeroError, SurfaceError};
pub use float::{FloatOffset, FloatParams};
pub use frame::{DrawItem, LightRig, Material, MeshKind, SceneFrame, TextureKey, TooltipFrame};
pub use hero::{mount, FrameStatus, Hero, HeroMount, RenderSurface};
pub use listeners::ListenerSet;
pub use object::{Animated, ObjectKind, SceneObjectSpec};
pub use orbit::{OrbitController, OrbitMode, PointerButton};
pub use scene::SceneGraph;
pub use scheduler::{FrameHandle, FrameScheduler};
