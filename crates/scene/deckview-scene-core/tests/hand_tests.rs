use deckview_scene_core::{layout, CardId, Config, HandState};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde_json::json;

fn face(engine: &deckview_scene_core::Engine, s: &str) -> CardId {
    engine.card_by_face(s.parse().unwrap()).unwrap()
}

/// Build a hand in an arbitrary starting state through its serde form.
fn hand_from(order: &[u32], focused: Option<u32>) -> HandState {
    serde_json::from_value(json!({
        "order": order.iter().map(|c| *c).collect::<Vec<_>>(),
        "focused": focused,
    }))
    .unwrap()
}

#[test]
fn add_to_empty_hand_focuses_at_origin() {
    let cfg = Config::default();
    let mut hand = HandState::new();
    assert!(hand.add(CardId(0)));
    assert_eq!(hand.cards(), &[CardId(0)]);
    assert_eq!(hand.focused(), Some(CardId(0)));
    let slots = layout::solve(&cfg, hand.cards(), hand.focused());
    assert_eq!(slots.len(), 1);
    assert_eq!(slots[0].x, 0.0);
    assert_eq!(slots[0].y, cfg.hand_y);
}

#[test]
fn add_inserts_at_middle_of_current_sequence() {
    // Hand [2♠,3♠] with no focus; adding 4♠ lands between them.
    let mut hand = hand_from(&[2, 3], None);
    assert!(hand.add(CardId(4)));
    assert_eq!(hand.cards(), &[CardId(2), CardId(4), CardId(3)]);
    assert_eq!(hand.focused(), Some(CardId(4)));
}

#[test]
fn add_held_card_is_a_no_op() {
    let mut hand = hand_from(&[2, 4, 3], Some(4));
    let before = hand.cards().to_vec();
    assert!(!hand.add(CardId(3)));
    assert_eq!(hand.cards(), &before[..]);
    assert_eq!(hand.focused(), Some(CardId(4)));
}

#[test]
fn switch_focus_reinserts_at_middle_of_remaining() {
    // [2♠,4♠,3♠] focused 4♠: focusing 2♠ removes it, then re-inserts at the
    // middle of the remaining two -> [4♠,2♠,3♠].
    let mut hand = hand_from(&[2, 4, 3], Some(4));
    assert!(hand.switch_focus(CardId(2)));
    assert_eq!(hand.cards(), &[CardId(4), CardId(2), CardId(3)]);
    assert_eq!(hand.focused(), Some(CardId(2)));
}

#[test]
fn switch_focus_on_focused_or_absent_is_a_no_op() {
    let mut hand = hand_from(&[2, 4, 3], Some(4));
    let before = hand.cards().to_vec();
    assert!(!hand.switch_focus(CardId(4)));
    assert!(!hand.switch_focus(CardId(51)));
    assert_eq!(hand.cards(), &before[..]);
    assert_eq!(hand.focused(), Some(CardId(4)));
}

#[test]
fn clear_empties_regardless_of_prior_state() {
    for state in [
        hand_from(&[0], Some(0)),
        hand_from(&[5, 1, 9], Some(1)),
        hand_from(&[7, 3], None),
    ] {
        let mut hand = state;
        assert!(hand.clear());
        assert!(hand.is_empty());
        assert_eq!(hand.focused(), None);
        assert!(!hand.clear());
    }
}

#[test]
fn new_card_lands_at_middle_index_for_any_length() {
    let mut hand = HandState::new();
    for n in 0..10u32 {
        hand.add(CardId(n));
        let len = hand.cards().len();
        assert_eq!(hand.index_of(CardId(n)), Some((len - 1) / 2));
        assert_eq!(hand.focused(), Some(CardId(n)));
    }
}

#[test]
fn random_op_sequences_preserve_invariants() {
    let mut rng = SmallRng::seed_from_u64(7);
    let mut hand = HandState::new();
    for _ in 0..2000 {
        let card = CardId(rng.gen_range(0..52));
        match rng.gen_range(0..10) {
            0..=4 => {
                hand.add(card);
            }
            5..=8 => {
                hand.switch_focus(card);
            }
            _ => {
                hand.clear();
            }
        }
        // No duplicates.
        let mut seen = hand.cards().to_vec();
        seen.sort_by_key(|c| c.0);
        seen.dedup();
        assert_eq!(seen.len(), hand.cards().len());
        // Focus is null or a member.
        if let Some(f) = hand.focused() {
            assert!(hand.contains(f));
        }
    }
}

#[test]
fn engine_lookup_by_face_matches_identity() {
    let engine = deckview_scene_core::Engine::new(Config::default());
    let id = face(&engine, "A♠");
    assert_eq!(engine.card(id).unwrap().face.to_string(), "A♠");
}
