#![allow(dead_code)]
//! Deckview API core (engine-agnostic)
//!
//! Shared value types used by the scene core and by adapters: card identity
//! (rank/suit with parsing and display) and the small 3D math types that
//! describe transforms. No rendering-surface types live here.

pub mod card;
pub mod math;

pub use card::{CardFace, ParseCardError, Rank, Suit, RANKS, SUITS};
pub use math::{Transform, Vec3};
