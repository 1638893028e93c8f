use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("record {index}: required field `{field}` is empty")]
    EmptyField { index: usize, field: &'static str },
    #[error("invalid hex colour `{0}`")]
    BadColor(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    #[error("no graphics adapter available")]
    NoAdapter,
    #[error("surface initialisation failed: {0}")]
    Init(String),
    #[error("draw failed: {0}")]
    Draw(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HeroError {
    #[error(transparent)]
    Content(#[from] ContentError),
    #[error("unknown badge style `{0}` (expected plain, textured or glyph)")]
    UnknownBadgeStyle(String),
}
