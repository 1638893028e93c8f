use crate::dom;
use crate::input;
use crate::render::GpuState;
use hero_core::{Hero, ListenerSet, PointerButton};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

type SharedHero = Rc<RefCell<Hero<GpuState>>>;

fn set_cursor(canvas: &web::HtmlCanvasElement, hero: &Hero<GpuState>) {
    let cursor = if hero.orbit().is_dragging() {
        "grabbing"
    } else if hero.scene().pointer_over().is_some() {
        "pointer"
    } else {
        "grab"
    };
    _ = canvas.style().set_property("cursor", cursor);
}

/// Pointer, wheel and resize handling for the hero canvas. Every listener is
/// registered in `listeners` so unmount removes all of them.
pub fn wire_pointer(hero: &SharedHero, canvas: &web::HtmlCanvasElement, listeners: &mut ListenerSet) {
    let target: &web::EventTarget = canvas.as_ref();

    let (h, c) = (hero.clone(), canvas.clone());
    dom::listen(
        target,
        "pointermove",
        move |ev: web::PointerEvent| {
            let px = input::pointer_canvas_px(&ev, &c);
            let Ok(mut hero) = h.try_borrow_mut() else {
                return;
            };
            if hero.pointer_move(px) {
                set_cursor(&c, &hero);
            }
        },
        listeners,
    );

    let (h, c) = (hero.clone(), canvas.clone());
    dom::listen(
        target,
        "pointerdown",
        move |ev: web::PointerEvent| {
            let px = input::pointer_canvas_px(&ev, &c);
            let Ok(mut hero) = h.try_borrow_mut() else {
                return;
            };
            if hero.pointer_down(px, PointerButton::from_dom(ev.button())) {
                _ = c.set_pointer_capture(ev.pointer_id());
                set_cursor(&c, &hero);
            }
        },
        listeners,
    );

    let (h, c) = (hero.clone(), canvas.clone());
    dom::listen(
        target,
        "pointerleave",
        move |_ev: web::PointerEvent| {
            let Ok(mut hero) = h.try_borrow_mut() else {
                return;
            };
            if hero.pointer_leave() {
                set_cursor(&c, &hero);
            }
        },
        listeners,
    );

    // no preventDefault: the page keeps scrolling over the hero
    let h = hero.clone();
    dom::listen(
        target,
        "wheel",
        move |ev: web::WheelEvent| {
            if let Ok(mut hero) = h.try_borrow_mut() {
                hero.wheel(input::wheel_delta_px(ev.delta_y(), ev.delta_mode()));
            }
        },
        listeners,
    );

    let Some(window) = web::window() else {
        log::warn!("[hero] no window; drag release and resize not wired");
        return;
    };
    let window: &web::EventTarget = window.as_ref();

    // released outside the canvas still ends the drag
    let (h, c) = (hero.clone(), canvas.clone());
    dom::listen(
        window,
        "pointerup",
        move |_ev: web::PointerEvent| {
            let Ok(mut hero) = h.try_borrow_mut() else {
                return;
            };
            hero.pointer_up();
            set_cursor(&c, &hero);
        },
        listeners,
    );

    let c = canvas.clone();
    dom::listen(
        window,
        "resize",
        move |_ev: web::Event| dom::sync_canvas_backing_size(&c),
        listeners,
    );
}
