//! Headless session walkthrough: deal three cards, refocus, escape.
//!
//! Drives the engine without any rendering surface, printing the semantic
//! events and the focused card's pose as transitions play out.

use deckview_scene_core::{pick::NoPick, Config, Engine, InputEvent, Inputs};

const DT: f32 = 1.0 / 60.0;

fn run_for(engine: &mut Engine, secs: f32, label: &str) {
    let steps = (secs / DT) as usize;
    for _ in 0..steps {
        let out = engine.update(DT, Inputs::none(), &mut NoPick);
        for event in &out.events {
            println!("[{label}] event: {event:?}");
        }
    }
    if let Some(id) = engine.hand().focused() {
        let card = engine.card(id).unwrap();
        println!(
            "[{label}] focused {} at ({:.2}, {:.2}, {:.2})",
            card.face,
            card.motion.base.x,
            card.motion.base.y,
            card.motion.base.z
        );
    }
}

fn main() {
    let mut engine = Engine::new(Config::default());
    engine.shuffle_deck();

    for round in 0..3 {
        let id = engine.top_of_deck().expect("deck never empties here");
        engine.add_card(id);
        run_for(&mut engine, 2.5, &format!("deal {round}"));
    }

    println!("hand: {:?}", engine.hand().cards());

    // Bring the left-most card back to the center.
    let leftmost = engine.hand().cards()[0];
    engine.switch_focus(leftmost);
    run_for(&mut engine, 2.5, "refocus");

    // Escape: clear the hand and send the camera home.
    let out = engine.update(DT, Inputs::single(InputEvent::Escape), &mut NoPick);
    for event in &out.events {
        println!("[escape] event: {event:?}");
    }
    run_for(&mut engine, 2.0, "home");
    let camera = engine.camera();
    println!(
        "camera home: pos ({:.1}, {:.1}, {:.1}) target ({:.1}, {:.1}, {:.1})",
        camera.position.x,
        camera.position.y,
        camera.position.z,
        camera.target.x,
        camera.target.y,
        camera.target.z
    );
}
