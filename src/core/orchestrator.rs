use log::{debug, info};

use super::accumulation::{AccumulationController, Invalidation, PassInfo};
use super::events::{InputMessage, InputQueue, InputSender};
use super::snapshot::FrameSnapshot;
use crate::camera::OrbitCamera;
use crate::error::{RenderError, RenderResult};
use crate::frame::{FrameCounter, FrameInfo};
use crate::scenes::{build_scene, environment_map_for, GLOBAL_DATA, LIGHTS};
use crate::settings::{FrameSettings, SettingChange};
use crate::traits::{Presentation, RenderBackend};

/// What one tick did
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    pub frame: FrameInfo,
    /// `None` when the viewport had no area and the kernel was skipped
    pub pass: Option<PassInfo>,
    pub presentation: Option<Presentation>,
}

/// Drives one backend at a fixed tick rate.
///
/// Input arrives through [`InputSender`]s and is applied only at the start
/// of a tick, so a pass never sees camera or settings change under it.
pub struct FrameOrchestrator<B: RenderBackend> {
    backend: B,
    camera: OrbitCamera,
    accumulation: AccumulationController<B::Surface>,
    settings: FrameSettings,
    counter: FrameCounter,
    queue: InputQueue,
}

impl<B: RenderBackend> FrameOrchestrator<B> {
    pub fn new(backend: B, settings: FrameSettings, width: u32, height: u32, tick_rate: u32) -> Self {
        info!(
            "Frame orchestrator: {}x{} at {} Hz, preset {}",
            width, height, tick_rate, settings.preset
        );
        Self {
            backend,
            camera: OrbitCamera::new(width, height),
            accumulation: AccumulationController::new(),
            settings: settings.clamped(),
            counter: FrameCounter::new(tick_rate),
            queue: InputQueue::new(),
        }
    }

    pub fn sender(&self) -> InputSender {
        self.queue.sender()
    }

    pub fn settings(&self) -> &FrameSettings {
        &self.settings
    }

    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    pub fn accumulation(&self) -> &AccumulationController<B::Surface> {
        &self.accumulation
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    fn apply(&mut self, message: InputMessage) {
        match message {
            InputMessage::OrbitDelta {
                d_azimuth,
                d_elevation,
            } => {
                self.camera.apply_orbit_delta(d_azimuth, d_elevation);
                self.accumulation.invalidate(Invalidation::Camera);
            }
            InputMessage::ZoomDelta(d_zoom) => {
                self.camera.apply_zoom_delta(d_zoom);
                self.accumulation.invalidate(Invalidation::Camera);
            }
            InputMessage::Resize { width, height } => {
                if self.camera.set_viewport(width, height) {
                    self.backend.resize_display(width, height);
                    self.accumulation.invalidate(Invalidation::Resize);
                }
            }
            InputMessage::SettingChanged(change) => self.change_setting(change),
        }
    }

    fn change_setting(&mut self, change: SettingChange) {
        let next = self.settings.apply(change);
        if next != self.settings {
            debug!("Setting changed: {:?}", change);
            self.settings = next;
            self.accumulation.invalidate(Invalidation::Settings);
        }
    }

    /// Snapshot for the pass described by `frame` and `pass`
    pub fn build_snapshot(&self, frame: FrameInfo, pass: PassInfo) -> FrameSnapshot {
        let camera = self.camera.current_matrices();
        let settings = &self.settings;
        FrameSnapshot {
            dimensions: self.camera.viewport(),
            first_pass: pass.first_pass,
            pass_count: pass.pass_count,
            time: frame.time,
            animation_time: frame.animation_time,
            inverse_camera: camera.inverse_camera(),
            camera,
            global_data: GLOBAL_DATA,
            lights: LIGHTS,
            objects: build_scene(settings.preset, frame.animation_time),
            features: settings.features,
            sample_count: settings.sample_count,
            aperture: settings.aperture,
            focal_length: settings.focal_length,
            light_intensity: settings.normalized_intensities(),
            environment_map: environment_map_for(settings.preset),
        }
    }

    /// Run one tick: apply queued input, trace, composite, then swap.
    ///
    /// An error means the kernel or display failed and no further frames
    /// should be produced.
    pub fn tick(&mut self) -> RenderResult<FrameReport> {
        for message in self.queue.drain() {
            self.apply(message);
        }

        let frame = self.counter.advance(self.settings.animation_enabled());
        let (width, height) = self.camera.viewport();

        let backend = &mut self.backend;
        let pass = self
            .accumulation
            .begin_pass(width, height, |w, h| backend.allocate_surface(w, h))?;

        let Some(pass) = pass else {
            return Ok(FrameReport {
                frame,
                pass: None,
                presentation: None,
            });
        };

        let snapshot = self.build_snapshot(frame, pass);
        let (previous, next) = self
            .accumulation
            .surfaces()
            .ok_or_else(|| RenderError::Kernel("accumulation surfaces missing".into()))?;

        self.backend.trace(&snapshot, previous, next)?;
        let presentation = self.backend.composite(&snapshot, next)?;
        self.accumulation.end_pass();

        Ok(FrameReport {
            frame,
            pass: Some(pass),
            presentation: Some(presentation),
        })
    }
}
