// Mount/unmount lifecycle and per-frame behaviour against a recording surface.

use glam::Vec2;
use hero_core::camera::Camera;
use hero_core::clock::{FrameClock, FrameTime};
use hero_core::composer::HeroConfig;
use hero_core::frame::SceneFrame;
use hero_core::hero::{mount, FrameStatus, Hero, RenderSurface};
use hero_core::orbit::PointerButton;
use hero_core::scheduler::FrameScheduler;
use hero_core::SurfaceError;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[derive(Default)]
struct Recorder {
    frames: Rc<RefCell<Vec<SceneFrame>>>,
    released: Rc<Cell<bool>>,
    fail_draws: bool,
}

impl RenderSurface for Recorder {
    fn viewport(&self) -> Vec2 {
        Vec2::new(800.0, 600.0)
    }

    fn draw(&mut self, frame: &SceneFrame, _camera: &Camera) -> Result<(), SurfaceError> {
        if self.fail_draws {
            return Err(SurfaceError::Draw("lost device".into()));
        }
        self.frames.borrow_mut().push(frame.clone());
        Ok(())
    }

    fn release(&mut self) {
        self.released.set(true);
    }
}

fn ready_hero() -> (Hero<Recorder>, Rc<RefCell<Vec<SceneFrame>>>, Rc<Cell<bool>>) {
    let rec = Recorder::default();
    let frames = rec.frames.clone();
    let released = rec.released.clone();
    let mut hero = Hero::new(HeroConfig::default()).expect("hero");
    hero.attach_surface(Ok(rec));
    hero.set_assets_ready(true);
    (hero, frames, released)
}

#[test]
fn nothing_is_drawn_until_assets_and_surface_are_ready() {
    let mut hero: Hero<Recorder> = Hero::new(HeroConfig::default()).expect("hero");
    assert_eq!(hero.frame(&FrameTime::at(0.0)), FrameStatus::AwaitingAssets);
    hero.set_assets_ready(true);
    assert_eq!(hero.frame(&FrameTime::at(0.1)), FrameStatus::AwaitingSurface);
    hero.attach_surface(Ok(Recorder::default()));
    assert_eq!(hero.frame(&FrameTime::at(0.2)), FrameStatus::Drawn);
    assert_eq!(hero.frames_drawn(), 1);
}

#[test]
fn failed_surface_leaves_the_hero_blank_but_alive() {
    let mut hero: Hero<Recorder> = Hero::new(HeroConfig::default()).expect("hero");
    hero.set_assets_ready(true);
    hero.attach_surface(Err(SurfaceError::NoAdapter));
    assert_eq!(hero.surface_error(), Some(&SurfaceError::NoAdapter));
    for i in 0..5 {
        assert_eq!(hero.frame(&FrameTime::at(i as f32)), FrameStatus::Inactive);
    }
    // input still works without a surface
    hero.pointer_move(Vec2::new(10.0, 10.0));
    assert_eq!(hero.frames_drawn(), 0);
}

#[test]
fn draw_errors_drop_the_frame_and_keep_going() {
    let mut hero = Hero::new(HeroConfig::default()).expect("hero");
    hero.set_assets_ready(true);
    hero.attach_surface(Ok(Recorder {
        fail_draws: true,
        ..Recorder::default()
    }));
    let status = hero.frame(&FrameTime::at(0.0));
    assert!(matches!(status, FrameStatus::DrawFailed(SurfaceError::Draw(_))));
    assert_eq!(hero.frame(&FrameTime::at(0.1)), status);
}

#[test]
fn unmount_stops_frames_detaches_listeners_and_releases() {
    let (hero, frames, released) = ready_hero();
    let mut scheduler = FrameScheduler::new();
    let mut clock = FrameClock::new();
    let mut mounted = mount(hero, &mut scheduler);

    let detached = Rc::new(Cell::new(0));
    for event in ["pointermove", "pointerdown", "pointerup", "pointerleave", "wheel"] {
        let detached = detached.clone();
        mounted
            .listeners_mut()
            .attach(event, move || detached.set(detached.get() + 1));
    }

    for i in 0..3 {
        scheduler.tick(&clock.advance_to(i as f32 / 60.0));
    }
    assert_eq!(frames.borrow().len(), 3);

    let hero = mounted.hero().clone();
    let handle = mounted.frame_handle();
    mounted.unmount(&mut scheduler);

    assert!(!scheduler.is_subscribed(handle));
    assert_eq!(detached.get(), 5);
    assert!(released.get());
    assert!(hero.borrow().is_released());

    for i in 3..10 {
        scheduler.tick(&clock.advance_to(i as f32 / 60.0));
    }
    assert_eq!(frames.borrow().len(), 3, "no frames after unmount");
}

#[test]
fn all_nodes_share_the_frame_time() {
    let (mut hero, frames, _) = ready_hero();
    hero.frame(&FrameTime::at(7.5));
    let frames = frames.borrow();
    let frame = frames.last().expect("frame");
    assert_eq!(frame.time.elapsed, 7.5);
    let again = hero.scene().evaluate(&FrameTime::at(7.5));
    assert_eq!(frame.items, again.items);
}

#[test]
fn pointer_over_a_badge_hovers_it_and_leaving_clears_it() {
    let (mut hero, _, _) = ready_hero();
    hero.frame(&FrameTime::at(0.0));
    let react = hero.scene().find_badge("React").expect("React");
    let (centre, _) = hero.scene().badge(react).expect("badge").pick_sphere(0.0);
    let px = hero
        .camera()
        .project(centre, Vec2::new(800.0, 600.0))
        .expect("in front of camera");

    assert!(hero.pointer_move(px));
    assert_eq!(hero.scene().pointer_over(), Some(react));
    let tip = hero.scene().badge(react).expect("badge").tooltip();
    assert_eq!((tip.text, tip.opacity), ("React", 1.0));

    assert!(hero.pointer_leave());
    assert_eq!(hero.scene().pointer_over(), None);
    assert!(hero.scene().badges().all(|b| b.tooltip().opacity == 0.0));
}

#[test]
fn hover_waits_for_the_surface_viewport() {
    let mut hero: Hero<Recorder> = Hero::new(HeroConfig::default()).expect("hero");
    hero.set_assets_ready(true);
    let viewport = Vec2::new(800.0, 600.0);
    let react = hero.scene().find_badge("React").expect("React");
    let (centre, _) = hero.scene().badge(react).expect("badge").pick_sphere(0.0);
    let px = hero
        .orbit()
        .camera(viewport.x / viewport.y)
        .project(centre, viewport)
        .expect("in front of camera");

    assert!(!hero.pointer_move(px));
    assert_eq!(hero.scene().pointer_over(), None);

    hero.attach_surface(Ok(Recorder::default()));
    assert!(hero.pointer_move(px));
    assert_eq!(hero.scene().pointer_over(), Some(react));
}

#[test]
fn dragging_turns_the_camera_instead_of_hovering() {
    let (mut hero, _, _) = ready_hero();
    hero.frame(&FrameTime::at(0.0));
    let start = hero.orbit().azimuth();
    assert!(hero.pointer_down(Vec2::new(400.0, 300.0), PointerButton::Primary));
    assert!(hero.pointer_move(Vec2::new(460.0, 300.0)));
    assert!(hero.orbit().azimuth() < start);
    assert_eq!(hero.scene().pointer_over(), None);
    hero.pointer_up();
    assert!(!hero.orbit().is_dragging());
    assert!(!hero.wheel(100.0));
}
