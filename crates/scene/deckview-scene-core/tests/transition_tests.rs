use deckview_scene_core::{
    deck, transition, Camera, Channel, Config, Slot, TweenBank, TweenKey, TweenTarget, Vec3,
};

fn approx(a: f32, b: f32, eps: f32) {
    assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
}

fn key(target: TweenTarget, channel: Channel) -> TweenKey {
    TweenKey::new(target, channel)
}

/// Step the bank to completion while recording every PosZ sample for one card.
fn z_trace(bank: &mut TweenBank, target: TweenTarget, dt: f32, max_secs: f32) -> Vec<f32> {
    let mut trace = Vec::new();
    let mut t = 0.0;
    while t < max_secs && !bank.is_empty() {
        bank.step(dt, &mut |k, v| {
            if k.target == target && k.channel == Channel::PosZ {
                trace.push(v);
            }
        });
        t += dt;
    }
    trace
}

#[test]
fn settling_move_never_visits_a_lane() {
    let cfg = Config::default();
    let cards = deck::standard(&cfg);
    let mut card = cards[0];
    card.motion.base = Vec3::new(1.0, cfg.hand_y, 0.3);

    let slot = Slot {
        // Inside the travel threshold: settle in place.
        x: card.motion.base.x + cfg.travel_threshold() * 0.9,
        y: cfg.hand_y,
        z: 0.06,
    };
    let mut bank = TweenBank::new();
    transition::drive_card(&cfg, &mut bank, &card, &slot, false, false);

    let target = TweenTarget::Card(card.id);
    let trace = z_trace(&mut bank, target, 1.0 / 60.0, 5.0);
    assert!(!trace.is_empty());
    for z in &trace {
        assert!(*z <= card.motion.base.z + 1e-4 && *z >= slot.z - 1e-4);
    }
    approx(*trace.last().unwrap(), slot.z, 1e-3);
}

#[test]
fn traveling_focused_card_glides_over() {
    let cfg = Config::default();
    let cards = deck::standard(&cfg);
    let mut card = cards[0];
    card.motion.base = Vec3::new(-4.0, cfg.hand_y, 0.02);

    let slot = Slot {
        x: 4.0,
        y: cfg.hand_y,
        z: 0.08,
    };
    let mut bank = TweenBank::new();
    transition::drive_card(&cfg, &mut bank, &card, &slot, true, false);

    let target = TweenTarget::Card(card.id);
    let trace = z_trace(&mut bank, target, 1.0 / 60.0, 5.0);
    let peak = trace.iter().copied().fold(f32::MIN, f32::max);
    // Phase 1 carries the depth up toward the over lane, past the target.
    assert!(
        peak > slot.z + cfg.over_lane_lead * 0.8,
        "peak={peak} never approached the over lane"
    );
    approx(*trace.last().unwrap(), slot.z, 1e-3);
}

#[test]
fn traveling_unfocused_card_glides_under() {
    let cfg = Config::default();
    let cards = deck::standard(&cfg);
    let mut card = cards[1];
    card.motion.base = Vec3::new(4.0, cfg.hand_y, 0.06);

    let slot = Slot {
        x: -4.0,
        y: cfg.hand_y,
        z: 0.02,
    };
    let mut bank = TweenBank::new();
    transition::drive_card(&cfg, &mut bank, &card, &slot, false, false);

    let target = TweenTarget::Card(card.id);
    let trace = z_trace(&mut bank, target, 1.0 / 60.0, 5.0);
    let valley = trace.iter().copied().fold(f32::MAX, f32::min);
    assert!(
        valley < cfg.under_lane_z * 0.8,
        "valley={valley} never approached the under lane"
    );
    approx(*trace.last().unwrap(), slot.z, 1e-3);
}

#[test]
fn lane_signs_differ_between_concurrent_movers() {
    let cfg = Config::default();
    let over = transition::lane_z(&cfg, 0.1, true);
    let under = transition::lane_z(&cfg, 0.1, false);
    assert!(over > 0.0 && under < 0.0);
}

#[test]
fn rotation_returns_to_neutral_unless_rotating() {
    let cfg = Config::default();
    let cards = deck::standard(&cfg);
    let mut card = cards[2];
    card.motion.rotation = Vec3::new(0.4, -0.7, 0.1);
    let slot = Slot {
        x: 0.0,
        y: cfg.hand_y,
        z: 0.0,
    };
    let target = TweenTarget::Card(card.id);

    let mut bank = TweenBank::new();
    transition::drive_card(&cfg, &mut bank, &card, &slot, true, false);
    assert!(bank.has(key(target, Channel::RotX)));
    assert!(bank.has(key(target, Channel::RotY)));
    assert!(bank.has(key(target, Channel::RotZ)));

    // Under manual rotation the rotation channels are left alone.
    let mut bank = TweenBank::new();
    transition::drive_card(&cfg, &mut bank, &card, &slot, true, true);
    assert!(!bank.has(key(target, Channel::RotX)));
    assert!(!bank.has(key(target, Channel::RotY)));
    assert!(!bank.has(key(target, Channel::RotZ)));
    // Position channels still retarget.
    assert!(bank.has(key(target, Channel::PosX)));
}

#[test]
fn camera_follow_mirrors_slot_with_lead() {
    let cfg = Config::default();
    let camera = Camera::home(&cfg);
    let slot = Slot {
        x: 1.5,
        y: cfg.hand_y,
        z: 1.2,
    };
    let mut bank = TweenBank::new();
    transition::drive_camera(&cfg, &mut bank, &camera, &slot);

    let mut cam = camera.position;
    let mut look = camera.target;
    let mut t = 0.0;
    while t < 5.0 && !bank.is_empty() {
        bank.step(1.0 / 60.0, &mut |k, v| match (k.target, k.channel) {
            (TweenTarget::Camera, Channel::PosX) => cam.x = v,
            (TweenTarget::Camera, Channel::PosY) => cam.y = v,
            (TweenTarget::Camera, Channel::PosZ) => cam.z = v,
            (TweenTarget::CameraTarget, Channel::PosX) => look.x = v,
            (TweenTarget::CameraTarget, Channel::PosY) => look.y = v,
            (TweenTarget::CameraTarget, Channel::PosZ) => look.z = v,
            _ => {}
        });
        t += 1.0 / 60.0;
    }
    approx(look.x, slot.x, 1e-3);
    approx(look.y, slot.y, 1e-3);
    approx(look.z, slot.z, 1e-3);
    approx(cam.x, slot.x, 1e-3);
    approx(cam.y, slot.y, 1e-3);
    approx(cam.z, slot.z + cfg.camera_lead, 1e-3);
}
