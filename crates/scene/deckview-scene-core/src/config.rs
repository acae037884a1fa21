#![allow(dead_code)]
//! Core configuration: layout geometry, motion timing and input sensitivity.
//!
//! Defaults give the stock table: card stack spacing 0.008, hand height 8,
//! camera home at (8, 8, 12), wheel zoom clamped 5..25 units in front of
//! the focused card. Adapters may deserialize a Config to restyle the
//! scene without touching core logic.

use deckview_api_core::Vec3;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Vertical gap between stacked deck cards.
    pub stack_spacing: f32,
    /// Height of the deck above the floor plane.
    pub deck_lift: f32,

    /// Height of every held card.
    pub hand_y: f32,
    /// Left-to-right distance between hand slots.
    pub hand_spacing: f32,
    /// Monotonic per-index depth offset disambiguating stacking order.
    pub z_step: f32,
    /// Extra x padding opened on each side of the focused card.
    pub focus_gap: f32,
    /// Extra toward-camera depth for the focused card.
    pub focus_lift: f32,

    /// A move is "traveling" when |dx| exceeds this fraction of hand_spacing.
    pub travel_ratio: f32,
    /// Shared depth lane for non-focused traveling cards (they glide under).
    pub under_lane_z: f32,
    /// Lead ahead of the target depth for the focused traveler (glides over).
    pub over_lane_lead: f32,

    /// Duration of the x/y glide toward a new slot; an in-place depth
    /// settle shares this duration with its own easing.
    pub reflow_secs: f32,
    /// Duration of phase 1 of a traveling depth move (into the lane).
    pub lane_enter_secs: f32,
    /// Duration of phase 2 (lane back to the true target depth).
    pub lane_exit_secs: f32,
    /// Duration of the rotation return to neutral.
    pub rotation_return_secs: f32,
    /// Duration of the camera focus-follow move.
    pub camera_follow_secs: f32,
    /// Duration of the camera return to the home pose.
    pub camera_home_secs: f32,

    /// Amplitude of the idle bob added to rendered y.
    pub float_amplitude: f32,
    /// Idle bob speed is drawn from [min, min + span).
    pub float_speed_min: f32,
    pub float_speed_span: f32,
    /// Rendered z-rotation wobble of floating cards.
    pub wobble_speed: f32,
    pub wobble_amplitude: f32,

    /// Radians of card rotation per pointer pixel while dragging.
    pub rotate_sensitivity: f32,
    /// Camera depth change per wheel delta unit.
    pub zoom_speed: f32,
    /// Wheel zoom bounds relative to the focused card's depth.
    pub zoom_near: f32,
    pub zoom_far: f32,
    /// Camera sits this far in front of the focused card on z.
    pub camera_lead: f32,
    pub camera_home: Vec3,
    pub camera_home_target: Vec3,

    /// Seed for the engine's motion RNG (float speeds, shuffling).
    pub seed: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            stack_spacing: 0.008,
            deck_lift: 0.05,

            hand_y: 8.0,
            hand_spacing: 2.8,
            z_step: 0.02,
            focus_gap: 0.9,
            focus_lift: 1.2,

            travel_ratio: 0.5,
            under_lane_z: -1.5,
            over_lane_lead: 1.5,

            reflow_secs: 1.5,
            lane_enter_secs: 0.35,
            lane_exit_secs: 0.8,
            rotation_return_secs: 1.0,
            camera_follow_secs: 1.5,
            camera_home_secs: 1.5,

            float_amplitude: 0.3,
            float_speed_min: 0.5,
            float_speed_span: 0.5,
            wobble_speed: 0.5,
            wobble_amplitude: 0.02,

            rotate_sensitivity: 0.01,
            zoom_speed: 0.05,
            zoom_near: 5.0,
            zoom_far: 25.0,
            camera_lead: 14.0,
            camera_home: Vec3::new(8.0, 8.0, 12.0),
            camera_home_target: Vec3::ZERO,

            seed: 0,
        }
    }
}

impl Config {
    /// Absolute x distance beyond which a repositioning counts as traveling.
    #[inline]
    pub fn travel_threshold(&self) -> f32 {
        self.travel_ratio * self.hand_spacing
    }
}
