#![allow(dead_code)]
//! Property tweens and the per-(target, channel) tween bank.
//!
//! Each tween owns one scalar channel of one target and is keyed by that
//! pair. Starting a tween on an occupied key cancels the old tween first —
//! last writer wins, conflicting writers never coexist. A tween is a list of
//! segments (piecewise targets with their own duration/easing), which is how
//! the two-phase lane glide is expressed as a single keyed animation.

use serde::{Deserialize, Serialize};

use crate::easing::Easing;
use crate::ids::CardId;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum TweenTarget {
    Card(CardId),
    Camera,
    CameraTarget,
}

/// Scalar channel within a target. For cards, position channels address the
/// authoritative base coordinate (never the rendered position).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Channel {
    PosX,
    PosY,
    PosZ,
    RotX,
    RotY,
    RotZ,
}

impl Channel {
    #[inline]
    pub fn is_rotation(self) -> bool {
        matches!(self, Channel::RotX | Channel::RotY | Channel::RotZ)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct TweenKey {
    pub target: TweenTarget,
    pub channel: Channel,
}

impl TweenKey {
    #[inline]
    pub const fn new(target: TweenTarget, channel: Channel) -> Self {
        Self { target, channel }
    }
}

/// One piece of a piecewise tween: ease from the previous value to `to`.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub to: f32,
    pub secs: f32,
    pub easing: Easing,
}

/// Completion marker delivered when a tween finishes (not when canceled).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum TweenTag {
    /// The card's hand-position move completed; clear its rising flag.
    Settle(CardId),
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Tween {
    pub key: TweenKey,
    from: f32,
    delay: f32,
    segments: Vec<Segment>,
    seg: usize,
    elapsed: f32,
    tag: Option<TweenTag>,
}

impl Tween {
    /// Single-segment tween from the current value to `to`.
    pub fn one(key: TweenKey, from: f32, to: f32, secs: f32, easing: Easing) -> Self {
        Self::seq(key, from, vec![Segment { to, secs, easing }])
    }

    /// Piecewise tween; segments run back to back, each easing from the
    /// previous segment's end value.
    pub fn seq(key: TweenKey, from: f32, segments: Vec<Segment>) -> Self {
        Self {
            key,
            from,
            delay: 0.0,
            segments,
            seg: 0,
            elapsed: 0.0,
            tag: None,
        }
    }

    pub fn with_delay(mut self, delay: f32) -> Self {
        self.delay = delay.max(0.0);
        self
    }

    pub fn with_tag(mut self, tag: TweenTag) -> Self {
        self.tag = Some(tag);
        self
    }

    #[inline]
    fn finished(&self) -> bool {
        self.seg >= self.segments.len()
    }

    /// Final value this tween settles at.
    pub fn end_value(&self) -> f32 {
        self.segments.last().map(|s| s.to).unwrap_or(self.from)
    }

    /// Advance by dt, reporting the current sampled value, or None while the
    /// start delay is still being consumed.
    fn advance(&mut self, dt: f32) -> Option<f32> {
        let mut budget = dt;
        if self.delay > 0.0 {
            if budget < self.delay {
                self.delay -= budget;
                return None;
            }
            budget -= self.delay;
            self.delay = 0.0;
        }
        self.elapsed += budget;
        while self.seg < self.segments.len() && self.elapsed >= self.segments[self.seg].secs {
            self.elapsed -= self.segments[self.seg].secs;
            self.from = self.segments[self.seg].to;
            self.seg += 1;
        }
        if self.finished() {
            return Some(self.from);
        }
        let s = self.segments[self.seg];
        let u = if s.secs > 0.0 {
            (self.elapsed / s.secs).clamp(0.0, 1.0)
        } else {
            1.0
        };
        Some(self.from + (s.to - self.from) * s.easing.apply(u))
    }
}

/// Registry of active tweens, at most one per key.
#[derive(Default, Debug)]
pub struct TweenBank {
    active: Vec<Tween>,
}

impl TweenBank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a tween, canceling any in-flight tween on the same key.
    pub fn play(&mut self, tween: Tween) {
        self.cancel(tween.key);
        self.active.push(tween);
    }

    /// Cancel the tween on one key, if any. Canceled tweens fire no tag.
    pub fn cancel(&mut self, key: TweenKey) {
        self.active.retain(|t| t.key != key);
    }

    /// Cancel all channels of a target (the kill-tweens-of pattern).
    pub fn cancel_target(&mut self, target: TweenTarget) {
        self.active.retain(|t| t.key.target != target);
    }

    /// Cancel only the rotation channels of a target, used when manual
    /// rotation takes over a card.
    pub fn cancel_rotation(&mut self, target: TweenTarget) {
        self.active
            .retain(|t| !(t.key.target == target && t.key.channel.is_rotation()));
    }

    pub fn has(&self, key: TweenKey) -> bool {
        self.active.iter().any(|t| t.key == key)
    }

    pub fn has_target(&self, target: TweenTarget) -> bool {
        self.active.iter().any(|t| t.key.target == target)
    }

    pub fn get(&self, key: TweenKey) -> Option<&Tween> {
        self.active.iter().find(|t| t.key == key)
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Advance every tween by dt, writing sampled values through `write`.
    /// Finished tweens are removed and their tags returned.
    pub fn step(&mut self, dt: f32, write: &mut dyn FnMut(TweenKey, f32)) -> Vec<TweenTag> {
        for t in &mut self.active {
            if let Some(v) = t.advance(dt) {
                write(t.key, v);
            }
        }
        let mut tags = Vec::new();
        self.active.retain(|t| {
            if t.finished() {
                if let Some(tag) = t.tag {
                    tags.push(tag);
                }
                false
            } else {
                true
            }
        });
        tags
    }
}
