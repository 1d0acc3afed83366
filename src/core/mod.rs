//! Engine plumbing: accumulation, input, snapshots and the tick loop.

pub mod accumulation;
pub mod clock;
pub mod events;
pub mod gpu_context;
pub mod input_adapter;
pub mod orchestrator;
pub mod snapshot;

pub use accumulation::{AccumulationController, AccumulationPhase, Invalidation, PassInfo};
pub use clock::{Clock, FixedRate};
pub use events::{InputMessage, InputQueue, InputSender};
pub use gpu_context::GpuContext;
pub use input_adapter::WinitInputAdapter;
pub use orchestrator::{FrameOrchestrator, FrameReport};
pub use snapshot::{FrameSnapshot, SNAPSHOT_LAYOUT_VERSION};
