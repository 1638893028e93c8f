//! Hero lifecycle: compose once, animate per frame, tear down on unmount.
//!
//! Rendering goes through [`RenderSurface`], which the web build implements
//! with WebGPU and tests implement with a recorder. A surface that fails to
//! initialise leaves the hero mounted but blank; nothing else degrades.

use crate::badge::IconState;
use crate::camera::Camera;
use crate::clock::FrameTime;
use crate::composer::{compose, HeroConfig};
use crate::error::{HeroError, SurfaceError};
use crate::frame::SceneFrame;
use crate::listeners::ListenerSet;
use crate::orbit::{OrbitController, PointerButton};
use crate::scene::SceneGraph;
use crate::scheduler::{FrameHandle, FrameScheduler};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;

pub trait RenderSurface {
    /// Drawable size in physical pixels.
    fn viewport(&self) -> Vec2;

    fn draw(&mut self, frame: &SceneFrame, camera: &Camera) -> Result<(), SurfaceError>;

    /// Free GPU resources. Called once, on unmount.
    fn release(&mut self) {}
}

#[derive(Debug)]
enum SurfaceSlot<S> {
    Pending,
    Ready(S),
    Failed(SurfaceError),
    Released,
}

/// What a call to [`Hero::frame`] did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FrameStatus {
    Drawn,
    /// Fonts or other first-paint assets still loading.
    AwaitingAssets,
    AwaitingSurface,
    /// Surface never came up, or was released.
    Inactive,
    DrawFailed(SurfaceError),
}

pub struct Hero<S: RenderSurface> {
    config: HeroConfig,
    scene: SceneGraph,
    orbit: OrbitController,
    surface: SurfaceSlot<S>,
    assets_ready: bool,
    time: FrameTime,
    drawn: u64,
}

impl<S: RenderSurface> Hero<S> {
    pub fn new(config: HeroConfig) -> Result<Self, HeroError> {
        let scene = compose(&config)?;
        let orbit = OrbitController::new(config.camera);
        Ok(Self {
            config,
            scene,
            orbit,
            surface: SurfaceSlot::Pending,
            assets_ready: false,
            time: FrameTime::at(0.0),
            drawn: 0,
        })
    }

    pub fn config(&self) -> &HeroConfig {
        &self.config
    }

    pub fn scene(&self) -> &SceneGraph {
        &self.scene
    }

    pub fn orbit(&self) -> &OrbitController {
        &self.orbit
    }

    /// Time of the most recent frame.
    pub fn time(&self) -> FrameTime {
        self.time
    }

    pub fn frames_drawn(&self) -> u64 {
        self.drawn
    }

    /// Hand over the result of (possibly asynchronous) surface creation.
    pub fn attach_surface(&mut self, surface: Result<S, SurfaceError>) {
        self.surface = match surface {
            Ok(s) => {
                log::info!("[gpu] surface ready");
                SurfaceSlot::Ready(s)
            }
            Err(e) => {
                log::error!("[gpu] {e}; hero scene disabled");
                SurfaceSlot::Failed(e)
            }
        };
    }

    pub fn surface(&self) -> Option<&S> {
        match &self.surface {
            SurfaceSlot::Ready(s) => Some(s),
            _ => None,
        }
    }

    pub fn surface_mut(&mut self) -> Option<&mut S> {
        match &mut self.surface {
            SurfaceSlot::Ready(s) => Some(s),
            _ => None,
        }
    }

    pub fn surface_error(&self) -> Option<&SurfaceError> {
        match &self.surface {
            SurfaceSlot::Failed(e) => Some(e),
            _ => None,
        }
    }

    pub fn set_assets_ready(&mut self, ready: bool) {
        if ready && !self.assets_ready {
            log::info!("[assets] first-paint assets ready");
        }
        self.assets_ready = ready;
    }

    pub fn assets_ready(&self) -> bool {
        self.assets_ready
    }

    pub fn set_icon_state(&mut self, url: &str, state: IconState) -> usize {
        self.scene.set_icon_state(url, state)
    }

    fn viewport(&self) -> Vec2 {
        match &self.surface {
            SurfaceSlot::Ready(s) => s.viewport(),
            _ => Vec2::ONE,
        }
    }

    /// Camera for the current orbit state and surface aspect.
    pub fn camera(&self) -> Camera {
        let vp = self.viewport().max(Vec2::ONE);
        self.orbit.camera(vp.x / vp.y)
    }

    /// Advance and draw one frame. Every animated node sees `time.elapsed`.
    pub fn frame(&mut self, time: &FrameTime) -> FrameStatus {
        self.time = *time;
        self.orbit.update(time.delta);
        if !self.assets_ready {
            return FrameStatus::AwaitingAssets;
        }
        let camera = self.camera();
        let surface = match &mut self.surface {
            SurfaceSlot::Ready(s) => s,
            SurfaceSlot::Pending => return FrameStatus::AwaitingSurface,
            SurfaceSlot::Failed(_) | SurfaceSlot::Released => return FrameStatus::Inactive,
        };
        let frame = self.scene.evaluate(time);
        match surface.draw(&frame, &camera) {
            Ok(()) => {
                self.drawn += 1;
                FrameStatus::Drawn
            }
            Err(e) => {
                log::warn!("[gpu] frame {} dropped: {e}", time.frame);
                FrameStatus::DrawFailed(e)
            }
        }
    }

    /// Pointer moved to `px` (physical pixels). Drags the orbit when a drag is
    /// active, otherwise updates which badge is hovered. Hover is not picked
    /// until a surface supplies the viewport. Returns true if anything visible
    /// changed.
    pub fn pointer_move(&mut self, px: Vec2) -> bool {
        let viewport = self.viewport();
        if self.orbit.is_dragging() {
            return self.orbit.pointer_move(px, viewport.y);
        }
        if !matches!(self.surface, SurfaceSlot::Ready(_)) {
            return false;
        }
        let (origin, dir) = self.camera().screen_ray(px, viewport);
        let hit = self.scene.pick(origin, dir, self.time.elapsed);
        self.scene.set_pointer_over(hit)
    }

    pub fn pointer_down(&mut self, px: Vec2, button: PointerButton) -> bool {
        self.orbit.pointer_down(px, button)
    }

    pub fn pointer_up(&mut self) {
        self.orbit.pointer_up();
    }

    /// Pointer left the canvas; any hovered badge is released.
    pub fn pointer_leave(&mut self) -> bool {
        self.scene.set_pointer_over(None)
    }

    pub fn wheel(&mut self, delta: f32) -> bool {
        self.orbit.zoom(delta)
    }

    pub fn release(&mut self) {
        if let SurfaceSlot::Ready(mut s) = std::mem::replace(&mut self.surface, SurfaceSlot::Released) {
            s.release();
            log::info!("[gpu] surface released");
        }
        self.scene.set_pointer_over(None);
    }

    pub fn is_released(&self) -> bool {
        matches!(self.surface, SurfaceSlot::Released)
    }
}

/// A hero attached to a frame scheduler and a set of input listeners.
pub struct HeroMount<S: RenderSurface> {
    hero: Rc<RefCell<Hero<S>>>,
    frame: FrameHandle,
    listeners: ListenerSet,
}

/// Subscribe `hero` to `scheduler`. Listeners are attached by the host
/// through [`HeroMount::listeners_mut`].
pub fn mount<S: RenderSurface + 'static>(hero: Hero<S>, scheduler: &mut FrameScheduler) -> HeroMount<S> {
    let hero = Rc::new(RefCell::new(hero));
    let ticking = hero.clone();
    let frame = scheduler.subscribe(move |time| {
        ticking.borrow_mut().frame(time);
    });
    log::info!("[hero] mounted");
    HeroMount {
        hero,
        frame,
        listeners: ListenerSet::new(),
    }
}

impl<S: RenderSurface> HeroMount<S> {
    pub fn hero(&self) -> &Rc<RefCell<Hero<S>>> {
        &self.hero
    }

    pub fn frame_handle(&self) -> FrameHandle {
        self.frame
    }

    pub fn listeners(&self) -> &ListenerSet {
        &self.listeners
    }

    pub fn listeners_mut(&mut self) -> &mut ListenerSet {
        &mut self.listeners
    }

    /// Cancel the frame subscription, detach every listener, then release
    /// the surface. No callback runs after this returns.
    pub fn unmount(mut self, scheduler: &mut FrameScheduler) {
        scheduler.cancel(self.frame);
        let detached = self.listeners.detach_all();
        self.hero.borrow_mut().release();
        log::info!("[hero] unmounted ({detached} listeners detached)");
    }
}
