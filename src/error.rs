use thiserror::Error;

/// Failures raised by a render backend. Any of these halts frame production.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to find a suitable GPU adapter: {0}")]
    AdapterUnavailable(String),

    #[error("failed to create GPU device: {0}")]
    DeviceRequest(String),

    #[error("failed to create window surface: {0}")]
    SurfaceCreation(String),

    #[error("surface acquisition failed: {0}")]
    Surface(#[from] wgpu::SurfaceError),

    #[error("kernel dispatch failed: {0}")]
    Kernel(String),

    #[error("accumulation surface requested with zero extent {width}x{height}")]
    ZeroExtent { width: u32, height: u32 },
}

pub type RenderResult<T> = std::result::Result<T, RenderError>;
