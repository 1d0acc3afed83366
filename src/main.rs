use std::sync::Arc;
use std::time::Instant;

use clap::Parser;
use log::{error, info, warn};
use progressive_tracer::cli::Cli;
use progressive_tracer::core::{Clock, FixedRate, FrameOrchestrator, WinitInputAdapter};
use progressive_tracer::error::RenderError;
use progressive_tracer::loaders::TextureTable;
use progressive_tracer::renderer::GpuBackend;
use progressive_tracer::settings::{FrameSettings, JsonSettingsStore, SettingChange};
use progressive_tracer::traits::SettingsStore;
use progressive_tracer::ui::{PanelStats, SettingsPanel};
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

const FPS_UPDATE_INTERVAL: f32 = 1.0;

/// Everything that only exists while the window does
struct Session {
    window: Arc<Window>,
    orchestrator: FrameOrchestrator<GpuBackend>,
    input: WinitInputAdapter,
    panel: Option<SettingsPanel>,
}

struct App {
    cli: Cli,
    store: JsonSettingsStore,
    settings: FrameSettings,
    textures: TextureTable,
    session: Option<Session>,
    rate: FixedRate,
    clock: Clock,
    frame_count: u32,
    fps: f32,
    fps_update_timer: f32,
    failure: Option<RenderError>,
}

impl App {
    fn new(cli: Cli) -> Self {
        let store = JsonSettingsStore::new(&cli.settings);
        let mut settings = store.load_or_default();
        if let Some(preset) = cli.preset {
            settings = settings.apply(SettingChange::Preset(preset));
        }
        let textures = TextureTable::load(&cli.textures);
        let rate = FixedRate::new(cli.tick_rate);

        Self {
            cli,
            store,
            settings,
            textures,
            session: None,
            rate,
            clock: Clock::new(),
            frame_count: 0,
            fps: 0.0,
            fps_update_timer: 0.0,
            failure: None,
        }
    }

    fn update_fps(&mut self, delta: f32) {
        self.frame_count += 1;
        self.fps_update_timer += delta;

        if self.fps_update_timer >= FPS_UPDATE_INTERVAL {
            self.fps = self.frame_count as f32 / self.fps_update_timer;
            let passes = self
                .session
                .as_ref()
                .map_or(0, |s| s.orchestrator.accumulation().pass_count());
            info!("FPS: {:.1}, accumulated passes: {}", self.fps, passes);
            self.frame_count = 0;
            self.fps_update_timer = 0.0;
        }
    }

    fn start_session(&mut self, event_loop: &ActiveEventLoop) -> Result<Session, String> {
        let window = event_loop
            .create_window(
                Window::default_attributes()
                    .with_title("Progressive Tracer")
                    .with_inner_size(winit::dpi::LogicalSize::new(self.cli.width, self.cli.height)),
            )
            .map(Arc::new)
            .map_err(|e| format!("Failed to create window: {}", e))?;

        let backend = pollster::block_on(GpuBackend::new(window.clone(), &self.textures))
            .map_err(|e| format!("Failed to initialize GPU backend: {}", e))?;

        let size = window.inner_size();
        let orchestrator = FrameOrchestrator::new(
            backend,
            self.settings.clone(),
            size.width,
            size.height,
            self.cli.tick_rate,
        );
        let input = WinitInputAdapter::new(orchestrator.sender(), size.width, size.height);
        let panel = (!self.cli.no_ui).then(|| SettingsPanel::new(&window, orchestrator.sender()));

        Ok(Session {
            window,
            orchestrator,
            input,
            panel,
        })
    }

    fn render_frame(&mut self, event_loop: &ActiveEventLoop) {
        let delta = self.clock.tick();
        self.update_fps(delta);

        let Some(session) = &mut self.session else {
            return;
        };

        if let Some(panel) = &mut session.panel {
            let (width, height) = session.orchestrator.camera().viewport();
            let stats = PanelStats {
                fps: self.fps,
                pass_count: session.orchestrator.accumulation().pass_count(),
                width,
                height,
            };
            let overlay = panel.run(&session.window, session.orchestrator.settings(), stats);
            session.orchestrator.backend_mut().queue_overlay(overlay);
        }

        if let Err(e) = session.orchestrator.tick() {
            error!("Frame production halted: {}", e);
            self.failure = Some(e);
            event_loop.exit();
        }
    }

    fn save_settings(&mut self) {
        if let Some(session) = &self.session {
            self.settings = session.orchestrator.settings().clone();
        }
        if let Err(e) = self.store.save(&self.settings) {
            warn!("{}", e);
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.session.is_some() {
            return;
        }
        match self.start_session(event_loop) {
            Ok(session) => self.session = Some(session),
            Err(e) => {
                error!("{}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::RedrawRequested => self.render_frame(event_loop),
            event => {
                let Some(session) = &mut self.session else {
                    return;
                };
                // Let egui handle the event first. Resizes always reach the camera.
                let consumed = session
                    .panel
                    .as_mut()
                    .is_some_and(|panel| panel.on_window_event(&session.window, &event));
                if !consumed || matches!(event, WindowEvent::Resized(_)) {
                    session
                        .input
                        .process_event(&event, session.orchestrator.settings());
                }
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.rate.poll(Instant::now()) {
            if let Some(session) = &self.session {
                session.window.request_redraw();
            }
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.rate.next_due()));
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.save_settings();
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let event_loop = EventLoop::new()?;
    let mut app = App::new(cli);

    info!("Controls: drag to orbit, wheel to zoom, 1-3 presets, Space pauses animation, Escape quits");
    event_loop.run_app(&mut app)?;

    match app.failure {
        Some(e) => Err(e.into()),
        None => Ok(()),
    }
}
