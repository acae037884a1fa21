#![allow(dead_code)]
//! Engine: data ownership and the per-frame update loop.
//!
//! One Engine is one session: it owns the deck, the hand, the tween bank,
//! the camera rig and the interaction mode, and exposes
//! update(dt, inputs, picker) as the single entry point. Hand mutations
//! triggered by input events retrigger layout and transitions synchronously
//! inside the same update call, so a rendered frame never observes a stale
//! target.

use deckview_api_core::{CardFace, Transform};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::camera::Camera;
use crate::config::Config;
use crate::deck::{self, Card};
use crate::easing::Easing;
use crate::hand::HandState;
use crate::ids::CardId;
use crate::inputs::{InputEvent, Inputs};
use crate::interaction::{self, Mode};
use crate::layout;
use crate::outputs::{Change, Outputs, SceneEvent};
use crate::pick::CardPicker;
use crate::transition;
use crate::tween::{Channel, TweenBank, TweenKey, TweenTag, TweenTarget};

#[derive(Debug)]
pub struct Engine {
    // Owned data
    cfg: Config,
    clock: f32,
    cards: Vec<Card>,
    hand: HandState,
    camera: Camera,

    // Systems
    tweens: TweenBank,
    mode: Mode,
    rng: SmallRng,

    // Per-tick outputs. Events queue separately so that mutators called
    // directly between updates still surface on the next tick.
    queued: Vec<SceneEvent>,
    outputs: Outputs,
}

impl Engine {
    /// Create a session with the full deck stacked and the camera at home.
    pub fn new(cfg: Config) -> Self {
        let cards = deck::standard(&cfg);
        Self {
            camera: Camera::home(&cfg),
            rng: SmallRng::seed_from_u64(cfg.seed),
            cfg,
            clock: 0.0,
            cards,
            hand: HandState::new(),
            tweens: TweenBank::new(),
            mode: Mode::default(),
            queued: Vec::new(),
            outputs: Outputs::default(),
        }
    }

    /// Shuffle the deck stack (ace of spades pinned on top). Only sensible
    /// before any card has been picked.
    pub fn shuffle_deck(&mut self) {
        debug_assert!(self.hand.is_empty(), "shuffling with cards in hand");
        let Engine {
            cfg, cards, rng, ..
        } = self;
        deck::shuffle(cards, cfg, rng);
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    /// Total elapsed session time in seconds.
    pub fn elapsed(&self) -> f32 {
        self.clock
    }

    /// Cards in stack order (index order is deck stacking, not identity).
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }

    pub fn card_by_face(&self, face: CardFace) -> Option<CardId> {
        self.cards.iter().find(|c| c.face == face).map(|c| c.id)
    }

    /// Top-most deck card (highest stack index not currently held).
    pub fn top_of_deck(&self) -> Option<CardId> {
        self.cards
            .iter()
            .rev()
            .map(|c| c.id)
            .find(|id| !self.hand.contains(*id))
    }

    pub fn hand(&self) -> &HandState {
        &self.hand
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn is_rotating(&self) -> bool {
        self.mode.is_rotating()
    }

    /// Active tween introspection (tests, tooling).
    pub fn tweens(&self) -> &TweenBank {
        &self.tweens
    }

    /// Step the session by dt with this frame's input events, producing the
    /// rendered pose changes and semantic events for the tick.
    pub fn update(&mut self, dt: f32, inputs: Inputs, picker: &mut dyn CardPicker) -> &Outputs {
        self.outputs.clear();

        // 1) Input events; hand mutations retrigger transitions in here.
        for event in inputs.events {
            self.apply_event(event, picker);
        }

        // 2) Advance the session clock.
        self.clock += dt;

        // 3) Advance tweens; completions clear rising flags.
        self.step_tweens(dt);

        // 4) Idle-bob pass derives rendered transforms from base state.
        self.idle_pass();

        // 5) Flush queued events (this tick's, plus any from mutators
        //    called directly since the last update) and collect changes.
        self.outputs.events.append(&mut self.queued);
        self.emit_changes();
        &self.outputs
    }

    /// Pick a deck card into the hand (no-op if already held), focusing it.
    pub fn add_card(&mut self, id: CardId) {
        if self.hand.contains(id) {
            return;
        }
        let speed = self.cfg.float_speed_min + self.rng.gen::<f32>() * self.cfg.float_speed_span;
        if !self.hand.add(id) {
            return;
        }
        let now = self.clock;
        if let Some(card) = self.cards.iter_mut().find(|c| c.id == id) {
            let m = &mut card.motion;
            m.rising = true;
            m.floating = true;
            // The base takes over from wherever the card currently renders.
            m.base = card.transform.position;
            m.float_speed = speed;
            // Seed the bob phase so sin(now * speed + offset) == 0: no
            // visible jump at insertion time.
            m.float_offset = -(now * speed);
        }
        self.camera.locked = true;
        self.queued.push(SceneEvent::CardRaised { card: id });
        self.retrigger();
    }

    /// Focus an already-held card (no-op if absent or already focused).
    pub fn switch_focus(&mut self, id: CardId) {
        if !self.hand.switch_focus(id) {
            return;
        }
        self.camera.locked = true;
        self.queued.push(SceneEvent::FocusChanged { card: id });
        self.retrigger();
    }

    /// Empty the hand and send the camera home (the escape behavior).
    pub fn clear_hand(&mut self) {
        self.mode = Mode::Idle;
        if self.hand.clear() {
            self.queued.push(SceneEvent::HandCleared);
        }
        self.camera.locked = false;
        let Engine {
            cfg,
            tweens,
            camera,
            ..
        } = self;
        transition::release_camera(cfg, tweens, camera);
        self.queued.push(SceneEvent::CameraReleased);
    }

    fn apply_event(&mut self, event: InputEvent, picker: &mut dyn CardPicker) {
        match event {
            InputEvent::PointerDown { x, y } => {
                match picker.pick(x, y, &self.camera, &self.cards) {
                    Some(id) if self.hand.focused() == Some(id) => self.begin_rotation(id, x, y),
                    Some(id) => {
                        let rising = self.card(id).map(|c| c.motion.rising).unwrap_or(false);
                        if rising {
                            return;
                        }
                        if self.hand.contains(id) {
                            self.switch_focus(id);
                        } else {
                            self.add_card(id);
                        }
                    }
                    None => {
                        // Drag-anywhere-to-rotate while a card is focused.
                        if let Some(id) = self.hand.focused() {
                            self.begin_rotation(id, x, y);
                        }
                    }
                }
            }
            InputEvent::PointerMove { x, y } => {
                if let Mode::Rotating { last_x, last_y } = self.mode {
                    if let Some(id) = self.hand.focused() {
                        let (rx, ry) =
                            interaction::drag_rotation(&self.cfg, x - last_x, y - last_y);
                        if let Some(card) = self.cards.iter_mut().find(|c| c.id == id) {
                            card.motion.rotation.x += rx;
                            card.motion.rotation.y += ry;
                        }
                        self.mode = Mode::Rotating {
                            last_x: x,
                            last_y: y,
                        };
                    }
                }
            }
            InputEvent::PointerUp => {
                if self.mode.is_rotating() {
                    self.mode = Mode::Idle;
                    let Engine {
                        cfg,
                        cards,
                        hand,
                        tweens,
                        ..
                    } = self;
                    if let Some(card) = hand.focused().and_then(|id| cards.iter().find(|c| c.id == id)) {
                        transition::ease_rotation_neutral(
                            cfg,
                            tweens,
                            card,
                            cfg.rotation_return_secs,
                            Easing::BackOut,
                        );
                    }
                }
            }
            InputEvent::Wheel { delta_y } => {
                let Some(id) = self.hand.focused() else {
                    return;
                };
                let Some(card_z) = self.card(id).map(|c| c.motion.base.z) else {
                    return;
                };
                // Manual zoom takes the camera position over from any
                // follow tween; the look-at target keeps easing.
                self.tweens.cancel_target(TweenTarget::Camera);
                let z = self.camera.position.z + delta_y * self.cfg.zoom_speed;
                self.camera.position.z = interaction::clamp_zoom(&self.cfg, card_z, z);
            }
            InputEvent::Escape => self.clear_hand(),
        }
    }

    fn begin_rotation(&mut self, id: CardId, x: f32, y: f32) {
        self.mode = Mode::Rotating {
            last_x: x,
            last_y: y,
        };
        // Manual drag owns the rotation channels until pointer-up.
        self.tweens.cancel_rotation(TweenTarget::Card(id));
    }

    /// Recompute layout for the whole hand and retarget every held card
    /// (and the camera toward the focused one). Runs after every mutation;
    /// layout is always solved from scratch, never patched.
    fn retrigger(&mut self) {
        let slots = layout::solve(&self.cfg, self.hand.cards(), self.hand.focused());
        let rotating = self.mode.is_rotating();
        let focused = self.hand.focused();
        let Engine {
            cfg,
            cards,
            hand,
            tweens,
            camera,
            ..
        } = self;
        for (i, id) in hand.cards().iter().enumerate() {
            let Some(card) = cards.iter().find(|c| c.id == *id) else {
                continue;
            };
            let is_focused = focused == Some(*id);
            transition::drive_card(cfg, tweens, card, &slots[i], is_focused, rotating && is_focused);
            if is_focused {
                transition::drive_camera(cfg, tweens, camera, &slots[i]);
            }
        }
    }

    fn step_tweens(&mut self, dt: f32) {
        let Engine {
            cards,
            camera,
            tweens,
            queued,
            ..
        } = self;
        let tags = tweens.step(dt, &mut |key, v| write_channel(cards, camera, key, v));
        for tag in tags {
            match tag {
                TweenTag::Settle(id) => {
                    if let Some(card) = cards.iter_mut().find(|c| c.id == id) {
                        card.motion.rising = false;
                    }
                    queued.push(SceneEvent::CardSettled { card: id });
                }
            }
        }
    }

    /// Derive rendered transforms: base plus the sinusoidal idle offset.
    /// The offset is recomputed from the clock every tick and never written
    /// back into the authoritative motion state.
    fn idle_pass(&mut self) {
        let t = self.clock;
        let cfg = &self.cfg;
        for card in &mut self.cards {
            let m = card.motion;
            let mut position = m.base;
            let mut rotation = m.rotation;
            if m.floating {
                position.y += (t * m.float_speed + m.float_offset).sin() * cfg.float_amplitude;
                rotation.z += (t * cfg.wobble_speed).cos() * cfg.wobble_amplitude;
            }
            card.transform = Transform::new(position, rotation);
        }
    }

    fn emit_changes(&mut self) {
        let Engine {
            cards,
            camera,
            tweens,
            outputs,
            ..
        } = self;
        for card in cards.iter() {
            if card.motion.floating || tweens.has_target(TweenTarget::Card(card.id)) {
                outputs.push_change(Change::Card {
                    id: card.id,
                    transform: card.transform,
                });
            }
        }
        outputs.push_change(Change::Camera {
            position: camera.position,
            target: camera.target,
        });
    }
}

/// Route one sampled tween value into the state it addresses. Card position
/// channels write the base coordinate, never the rendered transform.
fn write_channel(cards: &mut [Card], camera: &mut Camera, key: TweenKey, v: f32) {
    match key.target {
        TweenTarget::Card(id) => {
            if let Some(card) = cards.iter_mut().find(|c| c.id == id) {
                let m = &mut card.motion;
                match key.channel {
                    Channel::PosX => m.base.x = v,
                    Channel::PosY => m.base.y = v,
                    Channel::PosZ => m.base.z = v,
                    Channel::RotX => m.rotation.x = v,
                    Channel::RotY => m.rotation.y = v,
                    Channel::RotZ => m.rotation.z = v,
                }
            }
        }
        TweenTarget::Camera => match key.channel {
            Channel::PosX => camera.position.x = v,
            Channel::PosY => camera.position.y = v,
            Channel::PosZ => camera.position.z = v,
            _ => {}
        },
        TweenTarget::CameraTarget => match key.channel {
            Channel::PosX => camera.target.x = v,
            Channel::PosY => camera.target.y = v,
            Channel::PosZ => camera.target.z = v,
            _ => {}
        },
    }
}
