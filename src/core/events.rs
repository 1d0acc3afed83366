use std::sync::mpsc::{self, Receiver, Sender};

use log::debug;

use crate::settings::SettingChange;

/// Input translated into renderer terms
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputMessage {
    /// Radians to add to the camera angles
    OrbitDelta { d_azimuth: f32, d_elevation: f32 },
    /// Amount to move the eye toward the origin
    ZoomDelta(f32),
    Resize { width: u32, height: u32 },
    SettingChanged(SettingChange),
}

/// Producer side of the input queue. Cheap to clone.
#[derive(Debug, Clone)]
pub struct InputSender {
    tx: Sender<InputMessage>,
}

impl InputSender {
    pub fn send(&self, message: InputMessage) {
        if self.tx.send(message).is_err() {
            debug!("Input queue closed, dropping {:?}", message);
        }
    }
}

/// Single-consumer queue drained once at the start of each tick
#[derive(Debug)]
pub struct InputQueue {
    tx: Sender<InputMessage>,
    rx: Receiver<InputMessage>,
}

impl InputQueue {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self { tx, rx }
    }

    pub fn sender(&self) -> InputSender {
        InputSender {
            tx: self.tx.clone(),
        }
    }

    /// Everything queued so far, in arrival order
    pub fn drain(&self) -> Vec<InputMessage> {
        self.rx.try_iter().collect()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_preserves_order() {
        let queue = InputQueue::new();
        let sender = queue.sender();
        sender.send(InputMessage::ZoomDelta(1.0));
        sender.send(InputMessage::Resize { width: 2, height: 3 });
        assert_eq!(
            queue.drain(),
            vec![
                InputMessage::ZoomDelta(1.0),
                InputMessage::Resize { width: 2, height: 3 }
            ]
        );
        assert!(queue.drain().is_empty());
    }

    #[test]
    fn test_senders_share_one_queue() {
        let queue = InputQueue::new();
        let a = queue.sender();
        let b = a.clone();
        std::thread::spawn(move || b.send(InputMessage::ZoomDelta(2.0)))
            .join()
            .unwrap();
        a.send(InputMessage::ZoomDelta(3.0));
        assert_eq!(queue.drain().len(), 2);
    }
}
