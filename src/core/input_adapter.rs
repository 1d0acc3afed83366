use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::events::{InputMessage, InputSender};
use crate::camera::{orbit_from_drag, zoom_from_wheel, WHEEL_UNITS_PER_LINE};
use crate::settings::{Feature, FrameSettings, SettingChange};

/// Translates winit window events into [`InputMessage`]s
#[derive(Debug, Clone)]
pub struct WinitInputAdapter {
    sender: InputSender,
    dragging: bool,
    cursor: Option<(f32, f32)>,
    viewport: (u32, u32),
}

impl WinitInputAdapter {
    pub fn new(sender: InputSender, width: u32, height: u32) -> Self {
        Self {
            sender,
            dragging: false,
            cursor: None,
            viewport: (width, height),
        }
    }

    /// Handle one event. `settings` is needed to turn key presses into
    /// toggles. Returns true if the event produced input.
    pub fn process_event(&mut self, event: &WindowEvent, settings: &FrameSettings) -> bool {
        match event {
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => {
                self.on_left_button(*state == ElementState::Pressed);
                false
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.on_cursor_moved(position.x as f32, position.y as f32)
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let units = match delta {
                    MouseScrollDelta::LineDelta(_, lines) => lines * WHEEL_UNITS_PER_LINE,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32,
                };
                self.on_wheel(units)
            }
            WindowEvent::Resized(size) => self.on_resize(size.width, size.height),
            WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed => {
                match event.physical_key {
                    PhysicalKey::Code(code) => self.on_key(code, settings),
                    PhysicalKey::Unidentified(_) => false,
                }
            }
            _ => false,
        }
    }

    /// Starts or ends a drag. A press on its own does not restart
    /// convergence; only the motion that follows does.
    pub fn on_left_button(&mut self, pressed: bool) {
        self.dragging = pressed;
    }

    /// Dragging with the left button orbits the camera
    pub fn on_cursor_moved(&mut self, x: f32, y: f32) -> bool {
        let previous = self.cursor.replace((x, y));
        let Some((px, py)) = previous else {
            return false;
        };
        if !self.dragging {
            return false;
        }
        let (d_azimuth, d_elevation) =
            orbit_from_drag(x - px, y - py, self.viewport.0, self.viewport.1);
        self.sender.send(InputMessage::OrbitDelta {
            d_azimuth,
            d_elevation,
        });
        true
    }

    /// `units` uses the 120-per-notch convention, positive away from the user
    pub fn on_wheel(&mut self, units: f32) -> bool {
        if units == 0.0 {
            return false;
        }
        self.sender.send(InputMessage::ZoomDelta(zoom_from_wheel(units)));
        true
    }

    pub fn on_resize(&mut self, width: u32, height: u32) -> bool {
        self.viewport = (width, height);
        self.sender.send(InputMessage::Resize { width, height });
        true
    }

    pub fn on_key(&mut self, code: KeyCode, settings: &FrameSettings) -> bool {
        let change = match code {
            KeyCode::Digit1 => SettingChange::Preset(0),
            KeyCode::Digit2 => SettingChange::Preset(1),
            KeyCode::Digit3 => SettingChange::Preset(2),
            KeyCode::Space => SettingChange::Toggle(Feature::Animation, !settings.animation_enabled()),
            _ => return false,
        };
        self.sender.send(InputMessage::SettingChanged(change));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::InputQueue;

    fn adapter() -> (InputQueue, WinitInputAdapter) {
        let queue = InputQueue::new();
        let adapter = WinitInputAdapter::new(queue.sender(), 800, 600);
        (queue, adapter)
    }

    #[test]
    fn test_hover_does_not_orbit() {
        let (queue, mut adapter) = adapter();
        adapter.on_cursor_moved(10.0, 10.0);
        assert!(!adapter.on_cursor_moved(50.0, 10.0));
        assert!(queue.drain().is_empty());
    }

    #[test]
    fn test_press_without_motion_sends_nothing() {
        let (queue, mut adapter) = adapter();
        adapter.on_cursor_moved(20.0, 20.0);
        adapter.on_left_button(true);
        adapter.on_left_button(false);
        assert!(queue.drain().is_empty());
    }

    #[test]
    fn test_drag_orbits() {
        let (queue, mut adapter) = adapter();
        adapter.on_cursor_moved(0.0, 0.0);
        adapter.on_left_button(true);
        assert!(adapter.on_cursor_moved(400.0, 300.0));
        match queue.drain().as_slice() {
            [InputMessage::OrbitDelta {
                d_azimuth,
                d_elevation,
            }] => {
                assert!((d_azimuth - 1.5).abs() < 1e-6);
                assert!((d_elevation - 1.5).abs() < 1e-6);
            }
            other => panic!("unexpected messages {:?}", other),
        }
    }

    #[test]
    fn test_wheel_notch_zooms_in() {
        let (queue, mut adapter) = adapter();
        adapter.on_wheel(120.0);
        assert_eq!(queue.drain(), vec![InputMessage::ZoomDelta(1.2)]);
    }

    #[test]
    fn test_space_flips_animation() {
        let (queue, mut adapter) = adapter();
        let settings = FrameSettings::default();
        assert!(adapter.on_key(KeyCode::Space, &settings));
        assert!(!adapter.on_key(KeyCode::KeyQ, &settings));
        assert_eq!(
            queue.drain(),
            vec![InputMessage::SettingChanged(SettingChange::Toggle(
                Feature::Animation,
                false
            ))]
        );
    }
}
