#![allow(dead_code)]
//! Transition driver: turns solved slots into tweens on card bases and the
//! camera, with the two-lane collision-avoidance policy for traveling moves.
//!
//! Classification compares the card's current base x (the authoritative
//! anchor, however far a previous tween has carried it) against the newly
//! solved target. In-place settles ease straight there; traveling moves
//! route their depth through a lane — the focused mover glides over
//! everything, every other mover shares the under lane — so no two
//! simultaneously-traveling cards cross the same depth plane.

use crate::camera::Camera;
use crate::config::Config;
use crate::deck::Card;
use crate::easing::Easing;
use crate::layout::Slot;
use crate::tween::{Channel, Segment, Tween, TweenBank, TweenKey, TweenTag, TweenTarget};

/// Traveling iff the lateral delta exceeds half a spacing unit.
#[inline]
pub fn is_traveling(cfg: &Config, base_x: f32, target_x: f32) -> bool {
    (target_x - base_x).abs() > cfg.travel_threshold()
}

/// Depth lane a traveling card glides through: the focused mover leads its
/// own target (over), everyone else shares the fixed under lane.
#[inline]
pub fn lane_z(cfg: &Config, target_z: f32, is_focused: bool) -> f32 {
    if is_focused {
        target_z + cfg.over_lane_lead
    } else {
        cfg.under_lane_z
    }
}

/// Retarget one held card toward its slot. `rotating` suspends the rotation
/// return for a card under manual drag.
pub fn drive_card(
    cfg: &Config,
    bank: &mut TweenBank,
    card: &Card,
    slot: &Slot,
    is_focused: bool,
    rotating: bool,
) {
    let target = TweenTarget::Card(card.id);
    let base = card.motion.base;
    let traveling = is_traveling(cfg, base.x, slot.x);
    log::trace!(
        "transition: {:?} -> ({:.2},{:.2},{:.2}) traveling={}",
        card.id,
        slot.x,
        slot.y,
        slot.z,
        traveling
    );

    // x/y are a single-phase glide either way; completion of the vertical
    // move is what clears the rising flag.
    bank.play(Tween::one(
        TweenKey::new(target, Channel::PosX),
        base.x,
        slot.x,
        cfg.reflow_secs,
        Easing::CubicOut,
    ));
    bank.play(
        Tween::one(
            TweenKey::new(target, Channel::PosY),
            base.y,
            slot.y,
            cfg.reflow_secs,
            Easing::CubicOut,
        )
        .with_tag(TweenTag::Settle(card.id)),
    );

    if traveling {
        bank.play(Tween::seq(
            TweenKey::new(target, Channel::PosZ),
            base.z,
            vec![
                Segment {
                    to: lane_z(cfg, slot.z, is_focused),
                    secs: cfg.lane_enter_secs,
                    easing: Easing::QuadIn,
                },
                Segment {
                    to: slot.z,
                    secs: cfg.lane_exit_secs,
                    easing: Easing::CubicInOut,
                },
            ],
        ));
    } else {
        // Same duration as the x/y glide, its own easing.
        bank.play(Tween::one(
            TweenKey::new(target, Channel::PosZ),
            base.z,
            slot.z,
            cfg.reflow_secs,
            Easing::CubicInOut,
        ));
    }

    if !rotating {
        ease_rotation_neutral(cfg, bank, card, cfg.rotation_return_secs, Easing::CubicOut);
    }
}

/// Ease a card's rotation back to the neutral facing-camera orientation.
pub fn ease_rotation_neutral(
    _cfg: &Config,
    bank: &mut TweenBank,
    card: &Card,
    secs: f32,
    easing: Easing,
) {
    let target = TweenTarget::Card(card.id);
    let rot = card.motion.rotation;
    for (channel, from) in [
        (Channel::RotX, rot.x),
        (Channel::RotY, rot.y),
        (Channel::RotZ, rot.z),
    ] {
        bank.play(Tween::one(
            TweenKey::new(target, channel),
            from,
            0.0,
            secs,
            easing,
        ));
    }
}

/// Mirror the focused card's destination onto the camera: look-at target at
/// the slot, position leading it on z. Same duration and easing as the
/// card's own glide family so the lock lands with the card.
pub fn drive_camera(cfg: &Config, bank: &mut TweenBank, camera: &Camera, slot: &Slot) {
    let pairs = [
        (TweenTarget::CameraTarget, Channel::PosX, camera.target.x, slot.x),
        (TweenTarget::CameraTarget, Channel::PosY, camera.target.y, slot.y),
        (TweenTarget::CameraTarget, Channel::PosZ, camera.target.z, slot.z),
        (TweenTarget::Camera, Channel::PosX, camera.position.x, slot.x),
        (TweenTarget::Camera, Channel::PosY, camera.position.y, slot.y),
        (
            TweenTarget::Camera,
            Channel::PosZ,
            camera.position.z,
            slot.z + cfg.camera_lead,
        ),
    ];
    for (target, channel, from, to) in pairs {
        bank.play(Tween::one(
            TweenKey::new(target, channel),
            from,
            to,
            cfg.camera_follow_secs,
            Easing::CubicInOut,
        ));
    }
}

/// Ease camera position and look-at back to the fixed home pose.
pub fn release_camera(cfg: &Config, bank: &mut TweenBank, camera: &Camera) {
    let home = cfg.camera_home;
    let home_target = cfg.camera_home_target;
    let pairs = [
        (TweenTarget::Camera, Channel::PosX, camera.position.x, home.x),
        (TweenTarget::Camera, Channel::PosY, camera.position.y, home.y),
        (TweenTarget::Camera, Channel::PosZ, camera.position.z, home.z),
        (
            TweenTarget::CameraTarget,
            Channel::PosX,
            camera.target.x,
            home_target.x,
        ),
        (
            TweenTarget::CameraTarget,
            Channel::PosY,
            camera.target.y,
            home_target.y,
        ),
        (
            TweenTarget::CameraTarget,
            Channel::PosZ,
            camera.target.z,
            home_target.z,
        ),
    ];
    for (target, channel, from, to) in pairs {
        bank.play(Tween::one(
            TweenKey::new(target, channel),
            from,
            to,
            cfg.camera_home_secs,
            Easing::QuadInOut,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_threshold_is_half_spacing() {
        let cfg = Config::default();
        let t = cfg.travel_threshold();
        assert!(!is_traveling(&cfg, 0.0, t * 0.99));
        assert!(is_traveling(&cfg, 0.0, t * 1.01));
        assert!(is_traveling(&cfg, t * 1.01, 0.0));
    }

    #[test]
    fn lane_signs_differ_between_focused_and_others() {
        let cfg = Config::default();
        let target_z = 0.1;
        let over = lane_z(&cfg, target_z, true);
        let under = lane_z(&cfg, target_z, false);
        assert!(over > target_z);
        assert!(under < 0.0);
        assert!(over.signum() != under.signum());
    }
}
