#![cfg(target_arch = "wasm32")]
//! Browser host for the portfolio hero scene.
//!
//! `hero_core` owns the scene and its lifecycle; this crate supplies the
//! WebGPU surface, DOM overlays, input listeners and the frame loop.

use constants::*;
use hero_core::{
    mount, BadgeStyle, FrameClock, FrameScheduler, Hero, HeroConfig, HeroMount, IconState, Route,
    TextureKey,
};
use overlay::{HeroChrome, TooltipLayer};
use render::GpuState;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod assets;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod render;

type SharedHero = Rc<RefCell<Hero<GpuState>>>;

thread_local! {
    static HOME_HERO: RefCell<Option<HeroHandle>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();

    let Some(window) = web::window() else {
        return Ok(());
    };
    let path = window.location().pathname().unwrap_or_default();
    let route = Route::parse(&path);
    if let Some(document) = dom::window_document() {
        overlay::mark_active_nav(&document, &route);
    }
    match route {
        Route::Home => match mount_hero(HERO_CONTAINER_ID) {
            Ok(handle) => HOME_HERO.with(|slot| *slot.borrow_mut() = Some(handle)),
            Err(e) => log::warn!("[hero] not mounted: {:?}", e),
        },
        Route::Portfolio => {
            if let Some(document) = dom::window_document() {
                overlay::fill_portfolio_list(&document);
            }
        }
        Route::Project(id) => {
            if let Some(document) = dom::window_document() {
                overlay::fill_project_detail(&document, &id);
            }
        }
        // static pages; only the nav highlight applies
        Route::About | Route::ThemePreview | Route::NotFound => {}
    }
    Ok(())
}

/// A mounted hero. Dropping the handle without calling `unmount` leaves the
/// scene running for the life of the page.
#[wasm_bindgen]
pub struct HeroHandle {
    mount: Option<HeroMount<GpuState>>,
    scheduler: Rc<RefCell<FrameScheduler>>,
    frames: frame::FrameLoop,
    chrome: HeroChrome,
}

#[wasm_bindgen]
impl HeroHandle {
    pub fn unmount(&mut self) {
        let Some(mount) = self.mount.take() else {
            return;
        };
        self.frames.stop();
        mount.unmount(&mut self.scheduler.borrow_mut());
        self.chrome.remove();
    }

    #[wasm_bindgen(getter)]
    pub fn mounted(&self) -> bool {
        self.mount.is_some()
    }
}

/// Unmount the hero started for the home route, if any.
#[wasm_bindgen]
pub fn unmount_home_hero() {
    if let Some(mut handle) = HOME_HERO.with(|slot| slot.borrow_mut().take()) {
        handle.unmount();
    }
}

fn read_config(container: &web::Element) -> HeroConfig {
    let mut config = HeroConfig::default();
    if let Some(raw) = container.get_attribute(ATTR_BADGE_STYLE) {
        match raw.parse::<BadgeStyle>() {
            Ok(style) => config.badge_style = style,
            Err(e) => log::warn!("[hero] {e}; using {:?}", config.badge_style),
        }
    }
    if let Some(raw) = container.get_attribute(ATTR_TRANSPARENT) {
        config.transparent = raw != "false";
    }
    config
}

/// Mount the hero scene into the element with id `container_id`.
#[wasm_bindgen]
pub fn mount_hero(container_id: &str) -> Result<HeroHandle, JsValue> {
    mount_into(container_id).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn mount_into(container_id: &str) -> anyhow::Result<HeroHandle> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let container = document
        .get_element_by_id(container_id)
        .ok_or_else(|| anyhow::anyhow!("missing #{container_id}"))?;
    let config = read_config(&container);
    let hero = Hero::new(config)?;
    let chrome = HeroChrome::build(&document, container)?;

    let scheduler = Rc::new(RefCell::new(FrameScheduler::new()));
    let mut mount = mount(hero, &mut scheduler.borrow_mut());
    let shared = mount.hero().clone();
    events::wire_pointer(&shared, &chrome.canvas, mount.listeners_mut());
    let frames = frame::FrameLoop::start(scheduler.clone(), FrameClock::new());

    spawn_local(bring_up(shared, chrome.clone(), document));
    Ok(HeroHandle {
        mount: Some(mount),
        scheduler,
        frames,
        chrome,
    })
}

/// Surface, then fonts, then face textures. Each step re-checks that the
/// hero was not unmounted while it awaited.
async fn bring_up(hero: SharedHero, chrome: HeroChrome, document: web::Document) {
    let transparent = hero.borrow().config().transparent;
    let surface = GpuState::new(&chrome.canvas, transparent).await;
    if hero.borrow().is_released() {
        if let Ok(mut surface) = surface {
            surface.release();
        }
        return;
    }
    let surface = surface.map(|mut surface| {
        let labels: Vec<String> = hero
            .borrow()
            .scene()
            .badges()
            .map(|b| b.label().to_string())
            .collect();
        match TooltipLayer::build(&document, &chrome.container, labels.iter().map(String::as_str)) {
            Ok(layer) => surface.set_tooltips(layer),
            Err(e) => log::warn!("[hero] tooltips unavailable: {e}"),
        }
        surface
    });
    let ok = surface.is_ok();
    hero.borrow_mut().attach_surface(surface);
    if !ok {
        chrome.fail_closed();
        return;
    }

    if let Err(e) = assets::fonts_ready(&document).await {
        log::warn!("[assets] font loading: {e}");
    }
    if hero.borrow().is_released() {
        return;
    }
    hero.borrow_mut().set_assets_ready(true);
    chrome.assets_ready();

    let style = hero.borrow().config().badge_style;
    match style {
        BadgeStyle::Plain => {}
        BadgeStyle::Glyph => upload_glyphs(&hero),
        BadgeStyle::Textured => {
            let urls: Vec<String> = hero
                .borrow()
                .scene()
                .icon_urls()
                .into_iter()
                .map(String::from)
                .collect();
            for url in urls {
                spawn_local(load_icon(hero.clone(), url));
            }
        }
    }
}

fn upload_glyphs(hero: &SharedHero) {
    let labels: Vec<String> = hero
        .borrow()
        .scene()
        .badges()
        .map(|b| b.label().to_string())
        .collect();
    for label in labels {
        let pixels = match assets::rasterize_glyph(&label, GLYPH_TEXTURE_SIZE) {
            Ok(px) => px,
            Err(e) => {
                log::warn!("[assets] glyph {label}: {e}");
                continue;
            }
        };
        let mut hero = hero.borrow_mut();
        let Some(surface) = hero.surface_mut() else {
            return;
        };
        if let Err(e) = surface.upload_texture(TextureKey::Glyph(label.clone()), GLYPH_TEXTURE_SIZE, &pixels) {
            log::warn!("[assets] glyph {label}: {e}");
        }
    }
}

fn upload_icon(hero: &mut Hero<GpuState>, url: &str, pixels: &[u8]) -> anyhow::Result<()> {
    let surface = hero
        .surface_mut()
        .ok_or_else(|| anyhow::anyhow!("surface not ready"))?;
    surface.upload_texture(TextureKey::Icon(url.to_string()), ICON_TEXTURE_SIZE, pixels)?;
    Ok(())
}

async fn load_icon(hero: SharedHero, url: String) {
    let pixels = match assets::load_image(&url).await {
        Ok(img) => assets::rasterize_image(&img, ICON_TEXTURE_SIZE),
        Err(e) => Err(e),
    };
    let mut hero = hero.borrow_mut();
    if hero.is_released() {
        return;
    }
    let state = match pixels.and_then(|px| upload_icon(&mut hero, &url, &px)) {
        Ok(()) => IconState::Ready,
        Err(e) => {
            log::warn!("[assets] {e}");
            IconState::Failed
        }
    };
    let badges = hero.set_icon_state(&url, state);
    log::debug!("[assets] {url}: {state:?} ({badges} badges)");
}
