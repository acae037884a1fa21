#![allow(dead_code)]
//! Layout solver: pure function from hand state to per-card target slots.
//!
//! Deterministic in (sequence, focus); never reads animated positions. The
//! fan is centered on x = 0, every slot sits at the hand height, and depth
//! grows monotonically with index so stacked cards stay pickable. A focus
//! opens a gap around the focused card and lifts it toward the camera.

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::ids::CardId;

/// Target pose for one held card (rotation targets are always neutral).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Solve target slots for the hand, index-aligned with `order`.
pub fn solve(cfg: &Config, order: &[CardId], focused: Option<CardId>) -> Vec<Slot> {
    let n = order.len();
    if n == 0 {
        return Vec::new();
    }
    let half_width = (n - 1) as f32 * cfg.hand_spacing / 2.0;
    let focus_idx = focused.and_then(|f| order.iter().position(|c| *c == f));

    order
        .iter()
        .enumerate()
        .map(|(i, _)| {
            let mut x = i as f32 * cfg.hand_spacing - half_width;
            let mut z = i as f32 * cfg.z_step;
            match focus_idx {
                Some(k) if i < k => x -= cfg.focus_gap,
                Some(k) if i > k => x += cfg.focus_gap,
                Some(_) => z += cfg.focus_lift,
                None => {}
            }
            Slot {
                x,
                y: cfg.hand_y,
                z,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(n: u32) -> Vec<CardId> {
        (0..n).map(CardId).collect()
    }

    #[test]
    fn unfocused_fan_is_centered_arithmetic_sequence() {
        let cfg = Config::default();
        for n in 1..=7u32 {
            let slots = solve(&cfg, &ids(n), None);
            let sum: f32 = slots.iter().map(|s| s.x).sum();
            assert!(sum.abs() < 1e-4, "n={n} sum={sum}");
            for w in slots.windows(2) {
                assert!((w[1].x - w[0].x - cfg.hand_spacing).abs() < 1e-5);
            }
            for s in &slots {
                assert_eq!(s.y, cfg.hand_y);
            }
        }
    }

    #[test]
    fn focus_opens_gap_and_lifts() {
        let cfg = Config::default();
        let order = ids(5);
        let plain = solve(&cfg, &order, None);
        let focused = solve(&cfg, &order, Some(CardId(2)));
        for i in 0..5 {
            match i.cmp(&2) {
                std::cmp::Ordering::Less => {
                    assert!((focused[i].x - (plain[i].x - cfg.focus_gap)).abs() < 1e-6)
                }
                std::cmp::Ordering::Greater => {
                    assert!((focused[i].x - (plain[i].x + cfg.focus_gap)).abs() < 1e-6)
                }
                std::cmp::Ordering::Equal => {
                    assert_eq!(focused[i].x, plain[i].x);
                    assert!((focused[i].z - (plain[i].z + cfg.focus_lift)).abs() < 1e-6);
                }
            }
        }
    }

    #[test]
    fn depth_is_monotonic() {
        let cfg = Config::default();
        let slots = solve(&cfg, &ids(6), None);
        for w in slots.windows(2) {
            assert!(w[1].z > w[0].z);
        }
    }
}
