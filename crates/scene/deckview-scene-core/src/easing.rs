#![allow(dead_code)]
//! Easing curves used by the tween bank.
//!
//! A closed set rather than arbitrary cubic-bezier control points: the scene
//! only ever uses these profiles, and a closed enum keeps Config/tween data
//! trivially serializable.

use serde::{Deserialize, Serialize};

const BACK_OVERSHOOT: f32 = 1.70158;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Easing {
    Linear,
    QuadIn,
    QuadInOut,
    CubicIn,
    CubicOut,
    CubicInOut,
    /// Overshoots past the target before settling.
    BackOut,
}

impl Easing {
    /// Map normalized time t in [0,1] to eased progress. BackOut may exceed 1.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::QuadIn => t * t,
            Easing::QuadInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Easing::CubicIn => t * t * t,
            Easing::CubicOut => 1.0 - (1.0 - t).powi(3),
            Easing::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Easing::BackOut => {
                let c1 = BACK_OVERSHOOT;
                let c3 = c1 + 1.0;
                let u = t - 1.0;
                1.0 + c3 * u * u * u + c1 * u * u
            }
        }
    }
}
