#![allow(dead_code)]
//! Identifiers for core entities.

use serde::{Deserialize, Serialize};

/// Dense index of a card within the 52-card deck. Stable for the lifetime
/// of a session; the deck vector may be reordered (shuffled) underneath it.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}
