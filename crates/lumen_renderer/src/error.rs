//! Error type for scene evaluation and rendering.

use thiserror::Error;

/// Errors that can occur while rendering a scene.
#[derive(Error, Debug)]
pub enum RenderError {
    /// A surface or light variant that does not implement a contracted
    /// operation. Distinct from "no intersection" and "no contribution".
    #[error("{kind} does not support `{operation}`")]
    Unsupported {
        kind: &'static str,
        operation: &'static str,
    },

    #[error("Scene has no camera")]
    MissingCamera,

    #[error("Camera up vector is parallel to its viewing direction")]
    DegenerateCamera,

    #[error("Invalid resolution {width}x{height}")]
    InvalidResolution { width: u32, height: u32 },

    #[error("Invalid viewport width: {0}")]
    InvalidViewport(f64),

    #[error("Invalid anti-aliasing factor: {0}")]
    InvalidAntiAliasing(u32),

    #[error("Failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("Pixel ({x}, {y}) failed: {source}")]
    PixelFailed {
        x: u32,
        y: u32,
        #[source]
        source: Box<RenderError>,
    },
}

impl RenderError {
    /// Shorthand for [`RenderError::Unsupported`].
    pub fn unsupported(kind: &'static str, operation: &'static str) -> Self {
        Self::Unsupported { kind, operation }
    }
}

/// Result type for rendering operations.
pub type RenderResult<T> = Result<T, RenderError>;
