use thiserror::Error;

/// Errors surfaced by the shockwave compositor.
///
/// Effect bookkeeping itself never fails: degenerate trigger parameters are
/// absorbed numerically. These variants cover the boundary with the host.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ShockwaveError {
    /// The compositing program has not been compiled yet.
    #[error("shockwave program not initialized; call initialize() first")]
    NotInitialized,
    /// A render target with a zero dimension cannot produce an aspect ratio.
    #[error("invalid viewport {width}x{height}")]
    InvalidViewport { width: u32, height: u32 },
    /// The pass was asked to render before a source color buffer was bound.
    #[error("no source color buffer bound to the shockwave pass")]
    NoSource,
}

pub type Result<T> = std::result::Result<T, ShockwaveError>;
