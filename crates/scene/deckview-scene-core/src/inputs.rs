#![allow(dead_code)]
//! Input contracts for the core engine.
//!
//! Adapters translate their windowing events into these and pass them into
//! Engine::update() each frame. Pointer coordinates are in whatever space
//! the adapter's CardPicker expects (typically pixels); the core only ever
//! differences them.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Inputs {
    #[serde(default)]
    pub events: Vec<InputEvent>,
}

impl Inputs {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn single(event: InputEvent) -> Self {
        Self {
            events: vec![event],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    PointerDown { x: f32, y: f32 },
    PointerMove { x: f32, y: f32 },
    PointerUp,
    Wheel { delta_y: f32 },
    Escape,
}
