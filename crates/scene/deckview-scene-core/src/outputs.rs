#![allow(dead_code)]
//! Output contracts from the core engine.
//!
//! Outputs carry the rendered poses that changed this tick plus discrete
//! semantic events. Adapters apply changes to their scene graph and may
//! surface events (sound cues, UI) however they like.

use deckview_api_core::{Transform, Vec3};
use serde::{Deserialize, Serialize};

use crate::ids::CardId;

/// One changed pose for this tick.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Change {
    Card { id: CardId, transform: Transform },
    Camera { position: Vec3, target: Vec3 },
}

/// Discrete semantic signals emitted during stepping.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum SceneEvent {
    /// A deck card started its deck-to-hand transition.
    CardRaised { card: CardId },
    /// Focus moved to an already-held card.
    FocusChanged { card: CardId },
    /// A card's hand-position move completed.
    CardSettled { card: CardId },
    /// Escape emptied the hand.
    HandCleared,
    /// The camera lock was released back to orbit control.
    CameraReleased,
}

/// Outputs returned by Engine::update().
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Outputs {
    #[serde(default)]
    pub changes: Vec<Change>,
    #[serde(default)]
    pub events: Vec<SceneEvent>,
}

impl Outputs {
    #[inline]
    pub fn clear(&mut self) {
        self.changes.clear();
        self.events.clear();
    }

    #[inline]
    pub fn push_change(&mut self, change: Change) {
        self.changes.push(change);
    }

    #[inline]
    pub fn push_event(&mut self, event: SceneEvent) {
        self.events.push(event);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty() && self.events.is_empty()
    }
}
