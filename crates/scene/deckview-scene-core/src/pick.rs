#![allow(dead_code)]
//! Picking seam between the core and the rendering adapter.
//!
//! The core never does ray/box intersection; adapters implement CardPicker
//! with their renderer's raycaster and pass it into Engine::update(). Tests
//! use stub pickers.

use crate::camera::Camera;
use crate::deck::Card;
use crate::ids::CardId;

/// Resolve a 2D pointer coordinate to the front-most intersected card.
pub trait CardPicker {
    fn pick(&mut self, x: f32, y: f32, camera: &Camera, cards: &[Card]) -> Option<CardId>;
}

/// Picker that never hits anything; pointer-down becomes a background drag.
#[derive(Default, Debug)]
pub struct NoPick;

impl CardPicker for NoPick {
    fn pick(&mut self, _x: f32, _y: f32, _camera: &Camera, _cards: &[Card]) -> Option<CardId> {
        None
    }
}
