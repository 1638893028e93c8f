// Web front-end tuning: DOM hooks, texture sizes and overlay styling.
// Scene tuning lives in `hero_core::constants`.

// DOM ids and attributes
pub const HERO_CONTAINER_ID: &str = "hero-3d";
pub const PROJECT_DETAIL_ID: &str = "project-detail";
pub const PORTFOLIO_LIST_ID: &str = "portfolio-list";
pub const NAV_SELECTOR: &str = "nav";
pub const NAV_ACTIVE_CLASS: &str = "active";
pub const ATTR_BADGE_STYLE: &str = "data-badge-style";
pub const ATTR_TRANSPARENT: &str = "data-transparent";

// Portfolio cards list this many technologies, then "+N"
pub const TECH_PREVIEW_LIMIT: usize = 3;

// Canvas backing store
pub const MAX_DEVICE_PIXEL_RATIO: f64 = 2.0; // caps fill cost on dense screens

// Texture rasterisation (square, RGBA8)
pub const ICON_TEXTURE_SIZE: u32 = 128;
pub const GLYPH_TEXTURE_SIZE: u32 = 256;
pub const GLYPH_FONT_FAMILY: &str = "Inter, system-ui, sans-serif";
pub const GLYPH_FONT_MAX_PX: f64 = 112.0;
pub const GLYPH_FILL_RATIO: f64 = 0.85; // share of the texture width text may span

// Clear colour when the hero is not transparent (linear)
pub const OPAQUE_CLEAR: [f64; 3] = [0.03, 0.04, 0.08];

// Tooltip overlay
pub const TOOLTIP_CLASS: &str = "hero-tooltip";
pub const TOOLTIP_FADE_MS: u32 = 150;
pub const TOOLTIP_STYLE: &str = "position:absolute;left:0;top:0;pointer-events:none;\
white-space:nowrap;padding:4px 10px;border-radius:6px;font:500 13px system-ui;\
color:#e6f1ff;background:rgba(10,14,24,0.85);border:1px solid rgba(0,212,255,0.35);\
transform:translate(-50%,-100%);";

// Backdrop
pub const GLOW_CLASS: &str = "hero-glow";
pub const GLOW_STYLE: &str = "position:absolute;inset:0;pointer-events:none;\
background:radial-gradient(circle at 50% 50%,rgba(0,212,255,0.18),rgba(168,85,247,0.12) 40%,transparent 70%);\
filter:blur(40px);";
// hidden (but laid out) until first-paint assets are ready
pub const CANVAS_STYLE: &str = "position:absolute;inset:0;width:100%;height:100%;touch-action:pan-y;\
visibility:hidden;";
