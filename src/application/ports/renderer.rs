//! Renderer port for turning a scene into pixels

use thiserror::Error;

use crate::application::scene::Scene;

/// Errors that can occur while rendering
#[derive(Error, Debug)]
pub enum RenderError {
    /// Target surface cannot be allocated at this size
    #[error("Invalid surface size: {width}x{height}")]
    InvalidSize { width: u32, height: u32 },

    /// Encoding the rendered frame failed
    #[error("Failed to encode frame: {0}")]
    Encode(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Port trait for scene renderers
pub trait SceneRenderer {
    /// Rendered frame type
    type Frame;

    /// Draw the ring and the inner shape of `scene`
    fn render(&mut self, scene: &Scene) -> Result<Self::Frame, RenderError>;
}
