#![allow(dead_code)]
//! Deck data: per-card motion state and the stacked 52-card set.

use std::f32::consts::FRAC_PI_2;

use deckview_api_core::{CardFace, Rank, Suit, Transform, Vec3, RANKS, SUITS};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::ids::CardId;

pub const DECK_SIZE: usize = 52;

/// Resting orientation of a deck card: flat on the table.
pub const DECK_REST_ROTATION: Vec3 = Vec3::new(-FRAC_PI_2, 0.0, 0.0);

/// Authoritative motion state, distinct from the rendered transform.
/// The rendered position is always `base + idle offset(t)`; the idle offset
/// is never written back into `base`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Motion {
    /// Animated target anchor the tweens write to.
    pub base: Vec3,
    /// Authoritative rotation (manual drag and rotation tweens write here).
    pub rotation: Vec3,
    /// Phase of the idle bob signal.
    pub float_offset: f32,
    /// Speed of the idle bob signal.
    pub float_speed: f32,
    /// True while a deck-to-hand transition is in flight.
    pub rising: bool,
    /// True once the card is eligible for idle bobbing.
    pub floating: bool,
}

impl Motion {
    fn at_rest(position: Vec3) -> Self {
        Self {
            base: position,
            rotation: DECK_REST_ROTATION,
            float_offset: 0.0,
            float_speed: 0.0,
            rising: false,
            floating: false,
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub face: CardFace,
    /// Rendered pose, derived from `motion` every tick.
    pub transform: Transform,
    pub motion: Motion,
}

/// Build the 52-card deck in suit-major order, stacked bottom-up.
pub fn standard(cfg: &Config) -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    let mut next = 0u32;
    for suit in SUITS {
        for rank in RANKS {
            cards.push(Card {
                id: CardId(next),
                face: CardFace::new(rank, suit),
                transform: Transform::default(),
                motion: Motion::at_rest(Vec3::ZERO),
            });
            next += 1;
        }
    }
    restack(&mut cards, cfg);
    cards
}

/// Fisher-Yates shuffle of the stack order with the ace of spades pinned to
/// the top, then restack positions to match the new order.
pub fn shuffle(cards: &mut [Card], cfg: &Config, rng: &mut impl Rng) {
    for i in (1..cards.len()).rev() {
        let j = rng.gen_range(0..=i);
        cards.swap(i, j);
    }
    let ace = CardFace::new(Rank::Ace, Suit::Spades);
    if let Some(idx) = cards.iter().position(|c| c.face == ace) {
        let last = cards.len() - 1;
        cards[idx..=last].rotate_left(1);
    }
    restack(cards, cfg);
}

/// Reset every card to its stacked pose; index order is stack order.
pub fn restack(cards: &mut [Card], cfg: &Config) {
    for (i, card) in cards.iter_mut().enumerate() {
        let position = Vec3::new(0.0, i as f32 * cfg.stack_spacing + cfg.deck_lift, 0.0);
        card.motion = Motion::at_rest(position);
        card.transform = Transform::new(position, DECK_REST_ROTATION);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn standard_deck_is_distinct_and_stacked() {
        let cfg = Config::default();
        let cards = standard(&cfg);
        assert_eq!(cards.len(), DECK_SIZE);
        for i in 0..cards.len() {
            for j in (i + 1)..cards.len() {
                assert_ne!(cards[i].face, cards[j].face);
            }
        }
        for (i, c) in cards.iter().enumerate() {
            assert!((c.motion.base.y - (i as f32 * cfg.stack_spacing + cfg.deck_lift)).abs() < 1e-6);
            assert_eq!(c.transform.position, c.motion.base);
        }
    }

    #[test]
    fn shuffle_pins_ace_of_spades_on_top() {
        let cfg = Config::default();
        let mut cards = standard(&cfg);
        let mut rng = SmallRng::seed_from_u64(42);
        shuffle(&mut cards, &cfg, &mut rng);
        assert_eq!(cards.len(), DECK_SIZE);
        let top = cards.last().unwrap();
        assert_eq!(top.face, CardFace::new(Rank::Ace, Suit::Spades));
        // Still 52 distinct identities after the swap dance.
        let mut faces: Vec<String> = cards.iter().map(|c| c.face.to_string()).collect();
        faces.sort();
        faces.dedup();
        assert_eq!(faces.len(), DECK_SIZE);
    }
}
