use crate::constants::*;
use crate::dom;
use crate::input;
use glam::Vec2;
use hero_core::{Camera, Project, ProjectView, Route, TooltipFrame, MOCK_PROJECTS, NAV_LINKS};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn hide(el: &web::Element) {
    _ = el.class_list().add_1("hidden");
    // fallback for pages without the utility class
    if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
        _ = html.style().set_property("display", "none");
    }
}

/// Backdrop and canvas inside the hero container. Until first-paint assets
/// are ready only the backdrop shows.
#[derive(Clone)]
pub struct HeroChrome {
    pub container: web::Element,
    pub glow: web::HtmlElement,
    pub canvas: web::HtmlCanvasElement,
}

impl HeroChrome {
    pub fn build(document: &web::Document, container: web::Element) -> anyhow::Result<Self> {
        if let Some(html) = container.dyn_ref::<web::HtmlElement>() {
            let style = html.style();
            if style.get_property_value("position").unwrap_or_default().is_empty() {
                _ = style.set_property("position", "relative");
            }
        }
        let glow = dom::append_div(document, &container, GLOW_CLASS, GLOW_STYLE)?;
        let canvas = dom::create_canvas(document)?;
        _ = canvas.set_attribute("style", CANVAS_STYLE);
        container
            .append_child(&canvas)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        dom::sync_canvas_backing_size(&canvas);
        Ok(Self {
            container,
            glow,
            canvas,
        })
    }

    pub fn assets_ready(&self) {
        _ = self.canvas.style().set_property("visibility", "visible");
    }

    /// The scene could not start; keep the backdrop, drop the canvas.
    pub fn fail_closed(&self) {
        hide(&self.canvas);
    }

    pub fn remove(&self) {
        self.glow.remove();
        self.canvas.remove();
    }
}

/// One absolutely positioned label per badge, created once.
#[derive(Default)]
pub struct TooltipLayer {
    nodes: Vec<web::HtmlElement>,
}

impl TooltipLayer {
    pub fn build<'a>(
        document: &web::Document,
        container: &web::Element,
        labels: impl IntoIterator<Item = &'a str>,
    ) -> anyhow::Result<Self> {
        let style = format!("{TOOLTIP_STYLE}opacity:0;transition:opacity {TOOLTIP_FADE_MS}ms;");
        let mut nodes = Vec::new();
        for label in labels {
            let node = dom::append_div(document, container, TOOLTIP_CLASS, &style)?;
            node.set_text_content(Some(label));
            nodes.push(node);
        }
        Ok(Self { nodes })
    }

    /// Position each tooltip at its projected anchor. Anchors behind the
    /// camera are hidden regardless of hover.
    pub fn place(&self, tooltips: &[TooltipFrame], camera: &Camera, backing: Vec2, rect_css: Vec2) {
        for tip in tooltips {
            let Some(node) = self.nodes.get(tip.badge) else {
                continue;
            };
            let style = node.style();
            match camera.project(tip.anchor, backing) {
                Some(px) => {
                    let css = input::backing_to_css(px, rect_css, backing);
                    _ = style.set_property("left", &format!("{:.1}px", css.x));
                    _ = style.set_property("top", &format!("{:.1}px", css.y));
                    _ = style.set_property("opacity", if tip.opacity > 0.0 { "1" } else { "0" });
                }
                None => {
                    _ = style.set_property("opacity", "0");
                }
            }
        }
    }

    pub fn remove(&mut self) {
        for node in self.nodes.drain(..) {
            node.remove();
        }
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn project_html(p: &Project) -> String {
    let tags: String = p
        .technologies
        .iter()
        .map(|t| format!("<span class='tag'>{}</span>", escape(t)))
        .collect();
    format!(
        "<h1>{}</h1><p>{}</p><div class='tags'>{tags}</div>\
         <p><a href='{}' target='_blank' rel='noopener'>Live demo</a> · \
         <a href='{}' target='_blank' rel='noopener'>Source</a></p>",
        escape(p.title),
        escape(p.description),
        escape(p.live_url),
        escape(p.github_url),
    )
}

/// Fill the project detail element; unknown ids show an empty state.
pub fn fill_project_detail(document: &web::Document, id: &str) {
    let Some(el) = document.get_element_by_id(PROJECT_DETAIL_ID) else {
        log::warn!("[hero] missing #{PROJECT_DETAIL_ID}");
        return;
    };
    match ProjectView::resolve(id) {
        ProjectView::Found(p) => el.set_inner_html(&project_html(p)),
        ProjectView::NotFound => {
            el.set_inner_html("<h1>Project not found</h1><p><a href='/portfolio'>Back to portfolio</a></p>")
        }
    }
}

fn project_card_html(p: &Project) -> String {
    let (shown, more) = p.tech_preview(TECH_PREVIEW_LIMIT);
    let mut tags: String = shown
        .iter()
        .map(|t| format!("<span class='tag'>{}</span>", escape(t)))
        .collect();
    if more > 0 {
        tags.push_str(&format!("<span class='tag'>+{more}</span>"));
    }
    format!(
        "<a class='project-card' href='{}'><h2>{}</h2><p>{}</p><div class='tags'>{tags}</div></a>",
        escape(&Route::Project(p.id.to_string()).path()),
        escape(p.title),
        escape(p.description),
    )
}

/// Fill the portfolio list with one card per project.
pub fn fill_portfolio_list(document: &web::Document) {
    let Some(el) = document.get_element_by_id(PORTFOLIO_LIST_ID) else {
        log::warn!("[hero] missing #{PORTFOLIO_LIST_ID}");
        return;
    };
    let html: String = MOCK_PROJECTS.iter().map(project_card_html).collect();
    el.set_inner_html(&html);
}

/// Highlight the navigation link for `route`; project pages keep Portfolio lit.
pub fn mark_active_nav(document: &web::Document, route: &Route) {
    for link in NAV_LINKS {
        let selector = format!("{NAV_SELECTOR} a[href='{}']", link.path);
        let Ok(Some(el)) = document.query_selector(&selector) else {
            continue;
        };
        if link.is_active(route) {
            _ = el.class_list().add_1(NAV_ACTIVE_CLASS);
            _ = el.set_attribute("aria-current", "page");
        } else {
            _ = el.class_list().remove_1(NAV_ACTIVE_CLASS);
            _ = el.remove_attribute("aria-current");
        }
    }
}
