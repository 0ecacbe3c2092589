//! Error handling for text nodes

use hilo_render::SurfaceError;

#[derive(Debug, thiserror::Error)]
pub enum TextError {
    #[error("Surface error: {0}")]
    Surface(#[from] SurfaceError),

    #[error("Invalid property bag: {0}")]
    Config(#[from] serde_json::Error),
}

pub type TextResult<T> = Result<T, TextError>;
