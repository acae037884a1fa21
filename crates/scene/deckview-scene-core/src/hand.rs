#![allow(dead_code)]
//! Hand state: the ordered sequence of held cards plus the focus slot.
//!
//! All mutations are total: invalid calls (re-adding a held card, focusing
//! the focused card, focusing an absent card) are idempotent no-ops that
//! return false. Invariants — no duplicates, focus is a member — are
//! asserted at every mutation boundary; violating them is a logic fault,
//! not a runtime condition.

use serde::{Deserialize, Serialize};

use crate::ids::CardId;

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct HandState {
    order: Vec<CardId>,
    focused: Option<CardId>,
}

impl HandState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Left-to-right display order.
    pub fn cards(&self) -> &[CardId] {
        &self.order
    }

    pub fn focused(&self) -> Option<CardId> {
        self.focused
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, card: CardId) -> bool {
        self.order.contains(&card)
    }

    pub fn index_of(&self, card: CardId) -> Option<usize> {
        self.order.iter().position(|c| *c == card)
    }

    /// Insert a deck card at the middle of the sequence and focus it.
    /// Returns false (and changes nothing) if the card is already held.
    pub fn add(&mut self, card: CardId) -> bool {
        if self.contains(card) {
            return false;
        }
        let mid = self.order.len() / 2;
        self.order.insert(mid, card);
        self.focused = Some(card);
        log::debug!("hand: add {:?} at {} (len {})", card, mid, self.order.len());
        self.assert_invariants();
        true
    }

    /// Bring a held card to the center and focus it, purely by reordering:
    /// remove it, then re-insert at the middle of the *remaining* sequence.
    /// The even-length tie-breaking therefore differs from `add`; this is
    /// observable behavior and kept deliberately.
    pub fn switch_focus(&mut self, card: CardId) -> bool {
        if self.focused == Some(card) {
            return false;
        }
        let Some(idx) = self.index_of(card) else {
            return false;
        };
        self.order.remove(idx);
        let mid = self.order.len() / 2;
        self.order.insert(mid, card);
        self.focused = Some(card);
        log::debug!("hand: focus {:?} at {}", card, mid);
        self.assert_invariants();
        true
    }

    /// Empty the hand and drop focus. Returns false if already empty.
    pub fn clear(&mut self) -> bool {
        if self.order.is_empty() && self.focused.is_none() {
            return false;
        }
        self.order.clear();
        self.focused = None;
        log::debug!("hand: cleared");
        self.assert_invariants();
        true
    }

    fn assert_invariants(&self) {
        debug_assert!(
            {
                let mut seen = self.order.clone();
                seen.sort_by_key(|c| c.0);
                seen.windows(2).all(|w| w[0] != w[1])
            },
            "duplicate card in hand sequence"
        );
        debug_assert!(
            self.focused.map_or(true, |f| self.contains(f)),
            "focused card absent from hand sequence"
        );
    }
}
