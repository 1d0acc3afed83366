pub mod camera;
pub mod cli;
pub mod core;
pub mod error;
pub mod frame;
pub mod loaders;
pub mod math;
pub mod renderer;
pub mod scene;
pub mod scenes;
pub mod settings;
pub mod traits;
pub mod types;
pub mod ui;

pub use crate::core::{FrameOrchestrator, FrameReport, FrameSnapshot};
pub use scenes::{build_scene, ScenePreset};
pub use settings::FrameSettings;
