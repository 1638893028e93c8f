//! First-paint assets: web fonts, icon images and rasterised label glyphs.
//!
//! Everything ends up as square RGBA8 pixels ready for a texture upload.

use crate::constants::{GLYPH_FILL_RATIO, GLYPH_FONT_FAMILY, GLYPH_FONT_MAX_PX};
use crate::dom;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

fn js_err(e: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

/// Resolves once `document.fonts` has finished loading.
pub async fn fonts_ready(document: &web::Document) -> anyhow::Result<()> {
    let promise = document.fonts().ready().map_err(js_err)?;
    JsFuture::from(promise).await.map_err(js_err)?;
    Ok(())
}

pub async fn load_image(url: &str) -> anyhow::Result<web::HtmlImageElement> {
    let img = web::HtmlImageElement::new().map_err(js_err)?;
    // pixels are read back, so the CDN response must be CORS-clean
    img.set_cross_origin(Some("anonymous"));
    img.set_src(url);
    JsFuture::from(img.decode())
        .await
        .map_err(|e| anyhow::anyhow!("{url}: {:?}", e))?;
    Ok(img)
}

struct Scratch {
    ctx: web::CanvasRenderingContext2d,
    size: u32,
}

impl Scratch {
    fn new(size: u32) -> anyhow::Result<Self> {
        let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
        let canvas = dom::create_canvas(&document)?;
        canvas.set_width(size);
        canvas.set_height(size);
        let ctx = canvas
            .get_context("2d")
            .map_err(js_err)?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(js_err)?;
        Ok(Self { ctx, size })
    }

    fn set_fill_style(&self, value: &str) {
        _ = js_sys::Reflect::set(
            self.ctx.as_ref(),
            &JsValue::from_str("fillStyle"),
            &JsValue::from_str(value),
        );
    }

    fn pixels(&self) -> anyhow::Result<Vec<u8>> {
        let s = self.size as f64;
        let data = self.ctx.get_image_data(0.0, 0.0, s, s).map_err(js_err)?;
        Ok(data.data().0)
    }
}

/// Draw a decoded image scaled into a `size`² RGBA buffer.
pub fn rasterize_image(img: &web::HtmlImageElement, size: u32) -> anyhow::Result<Vec<u8>> {
    let scratch = Scratch::new(size)?;
    let s = size as f64;
    scratch
        .ctx
        .draw_image_with_html_image_element_and_dw_and_dh(img, 0.0, 0.0, s, s)
        .map_err(js_err)?;
    scratch.pixels()
}

/// Font size that lets `text` span at most the fill ratio of the texture.
pub fn glyph_font_px(text: &str, size: u32) -> f64 {
    let chars = text.chars().count().max(1) as f64;
    // average advance of a bold sans glyph is roughly 0.6 em
    (size as f64 * GLYPH_FILL_RATIO / (chars * 0.6)).min(GLYPH_FONT_MAX_PX)
}

/// White label text centred on a transparent `size`² buffer.
pub fn rasterize_glyph(text: &str, size: u32) -> anyhow::Result<Vec<u8>> {
    let scratch = Scratch::new(size)?;
    let s = size as f64;
    scratch.ctx.clear_rect(0.0, 0.0, s, s);
    scratch.ctx.set_font(&format!(
        "bold {:.0}px {GLYPH_FONT_FAMILY}",
        glyph_font_px(text, size)
    ));
    scratch.ctx.set_text_align("center");
    scratch.ctx.set_text_baseline("middle");
    scratch.set_fill_style("#ffffff");
    scratch
        .ctx
        .fill_text(text, s * 0.5, s * 0.5)
        .map_err(js_err)?;
    scratch.pixels()
}
