use winit::event::WindowEvent;
use winit::window::Window;

use crate::core::{InputMessage, InputSender};
use crate::renderer::OverlayFrame;
use crate::scenes::ScenePreset;
use crate::settings::{
    Feature, FrameSettings, SettingChange, APERTURE_RANGE, FOCAL_LENGTH_RANGE, INTENSITY_RANGE,
    SAMPLE_COUNT_RANGE,
};

/// Read-only figures shown at the top of the panel
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PanelStats {
    pub fps: f32,
    pub pass_count: u32,
    pub width: u32,
    pub height: u32,
}

/// egui window that edits [`FrameSettings`].
///
/// Edits are never applied directly. Each becomes a
/// [`InputMessage::SettingChanged`] for the orchestrator to pick up at
/// the next tick.
pub struct SettingsPanel {
    ctx: egui::Context,
    state: egui_winit::State,
    sender: InputSender,
}

impl SettingsPanel {
    pub fn new(window: &Window, sender: InputSender) -> Self {
        let ctx = egui::Context::default();
        let state = egui_winit::State::new(
            ctx.clone(),
            egui::ViewportId::ROOT,
            window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        Self { ctx, state, sender }
    }

    /// Returns true when egui consumed the event
    pub fn on_window_event(&mut self, window: &Window, event: &WindowEvent) -> bool {
        self.state.on_window_event(window, event).consumed
    }

    /// Lay out one frame of the panel and forward any edits
    pub fn run(&mut self, window: &Window, settings: &FrameSettings, stats: PanelStats) -> OverlayFrame {
        let raw_input = self.state.take_egui_input(window);
        let mut changes = Vec::new();
        let full_output = self.ctx.run(raw_input, |ctx| {
            changes = draw_settings(ctx, settings, stats);
        });

        for change in changes {
            self.sender.send(InputMessage::SettingChanged(change));
        }

        self.state
            .handle_platform_output(window, full_output.platform_output);

        let pixels_per_point = full_output.pixels_per_point;
        OverlayFrame {
            primitives: self.ctx.tessellate(full_output.shapes, pixels_per_point),
            textures_delta: full_output.textures_delta,
            pixels_per_point,
        }
    }
}

fn slider_row(ui: &mut egui::Ui, label: &str, value: u32, range: (u32, u32)) -> Option<u32> {
    let mut edited = value;
    let response = ui.add(egui::Slider::new(&mut edited, range.0..=range.1).text(label));
    (response.changed() && edited != value).then_some(edited)
}

/// The panel contents. Returns the edits made this frame.
pub fn draw_settings(ctx: &egui::Context, settings: &FrameSettings, stats: PanelStats) -> Vec<SettingChange> {
    let mut changes = Vec::new();

    egui::Window::new("Settings")
        .default_pos(egui::pos2(10.0, 10.0))
        .resizable(false)
        .show(ctx, |ui| {
            ui.label(
                egui::RichText::new(format!("{:.0} FPS", stats.fps))
                    .size(20.0)
                    .color(egui::Color32::from_rgb(74, 158, 255)),
            );
            ui.label(format!(
                "Pass {}  |  {}x{}",
                stats.pass_count, stats.width, stats.height
            ));
            ui.separator();

            ui.horizontal(|ui| {
                let mut selected = settings.preset;
                for preset in ScenePreset::ALL {
                    ui.radio_value(&mut selected, preset.id(), preset.name());
                }
                if selected != settings.preset {
                    changes.push(SettingChange::Preset(selected));
                }
            });

            ui.collapsing("Lights", |ui| {
                for (light, &value) in settings.light_intensity.iter().enumerate() {
                    let label = format!("Light {}", light + 1);
                    if let Some(value) = slider_row(ui, &label, value, INTENSITY_RANGE) {
                        changes.push(SettingChange::LightIntensity { light, value });
                    }
                }
            });

            ui.collapsing("Features", |ui| {
                for feature in Feature::ALL {
                    let mut enabled = settings.is_enabled(feature);
                    if ui.checkbox(&mut enabled, feature.label()).changed() {
                        changes.push(SettingChange::Toggle(feature, enabled));
                    }
                }
            });

            ui.collapsing("Sampling", |ui| {
                if let Some(n) = slider_row(ui, "Samples", settings.sample_count, SAMPLE_COUNT_RANGE) {
                    changes.push(SettingChange::SampleCount(n));
                }
                if let Some(n) = slider_row(ui, "Aperture", settings.aperture, APERTURE_RANGE) {
                    changes.push(SettingChange::Aperture(n));
                }
                if let Some(n) = slider_row(ui, "Focal length", settings.focal_length, FOCAL_LENGTH_RANGE) {
                    changes.push(SettingChange::FocalLength(n));
                }
            });
        });

    changes
}
