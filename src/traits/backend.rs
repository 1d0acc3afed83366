use crate::core::FrameSnapshot;
use crate::error::RenderResult;

/// Outcome of handing a finished surface to the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presentation {
    Presented,
    /// The display surface was out of date and has been reconfigured
    Skipped,
}

/// The rendering kernel and the display it composites into.
///
/// Every call blocks until the GPU work it submits has finished.
pub trait RenderBackend {
    /// Opaque off-screen accumulation surface
    type Surface;

    /// Create one accumulation surface. Never called with a zero extent.
    fn allocate_surface(&mut self, width: u32, height: u32) -> RenderResult<Self::Surface>;

    /// Run the kernel: read `previous`, write the blended result to `next`.
    fn trace(
        &mut self,
        snapshot: &FrameSnapshot,
        previous: &Self::Surface,
        next: &Self::Surface,
    ) -> RenderResult<()>;

    /// Show `next` on the display.
    fn composite(
        &mut self,
        snapshot: &FrameSnapshot,
        next: &Self::Surface,
    ) -> RenderResult<Presentation>;

    /// The display changed size. May be zero while minimized.
    fn resize_display(&mut self, width: u32, height: u32);
}
