#![allow(dead_code)]
//! Deckview Scene Core (engine-agnostic)
//!
//! The hand layout & focus engine: ordered hand state, the pure layout
//! solver, the transition driver that turns layout deltas into
//! collision-avoiding tweens, and the pointer/keyboard/wheel interaction
//! state machine. Rendering, picking geometry and asset generation live in
//! adapters; the core talks to them through the `CardPicker` trait and the
//! per-tick `Outputs` change list.

pub mod camera;
pub mod config;
pub mod deck;
pub mod easing;
pub mod engine;
pub mod hand;
pub mod ids;
pub mod inputs;
pub mod interaction;
pub mod layout;
pub mod outputs;
pub mod pick;
pub mod transition;
pub mod tween;

// Re-exports for consumers (adapters)
pub use camera::Camera;
pub use config::Config;
pub use deck::{Card, Motion, DECK_SIZE};
pub use easing::Easing;
pub use engine::Engine;
pub use hand::HandState;
pub use ids::CardId;
pub use inputs::{InputEvent, Inputs};
pub use layout::Slot;
pub use outputs::{Change, Outputs, SceneEvent};
pub use pick::CardPicker;
pub use tween::{Channel, Segment, Tween, TweenBank, TweenKey, TweenTag, TweenTarget};
pub use deckview_api_core::{CardFace, Rank, Suit, Transform, Vec3};
