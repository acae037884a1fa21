#![allow(dead_code)]
//! Interaction state and the pure pieces of the input state machine.
//!
//! The machine itself is driven from Engine::apply_event(); this module
//! holds the mode and the arithmetic that is worth testing in isolation.

use serde::{Deserialize, Serialize};

use crate::config::Config;

/// Pointer interaction mode. Rotating records the last pointer position so
/// each move event applies an incremental delta.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Mode {
    Idle,
    Rotating { last_x: f32, last_y: f32 },
}

impl Mode {
    #[inline]
    pub fn is_rotating(self) -> bool {
        matches!(self, Mode::Rotating { .. })
    }
}

impl Default for Mode {
    fn default() -> Self {
        Mode::Idle
    }
}

/// Clamp a proposed camera depth to the zoom window in front of the focused
/// card: never nearer than zoom_near, never farther than zoom_far.
#[inline]
pub fn clamp_zoom(cfg: &Config, card_z: f32, z: f32) -> f32 {
    z.clamp(card_z + cfg.zoom_near, card_z + cfg.zoom_far)
}

/// Pointer delta to card rotation delta: horizontal drag spins about the
/// vertical axis, vertical drag about the horizontal axis.
#[inline]
pub fn drag_rotation(cfg: &Config, dx: f32, dy: f32) -> (f32, f32) {
    (dy * cfg.rotate_sensitivity, dx * cfg.rotate_sensitivity)
}
