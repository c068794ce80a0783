//! Arena Duel headless runner
//!
//! Drives a session from a synthetic monotonic clock, logging the events a
//! presentation layer would consume.
//!
//! Usage: `arena-duel [settings.json]`

use arena_duel::Settings;
use arena_duel::sim::{
    GameEvent, Session, StandardHull, TickInput, advance_frame, start_session,
};

fn main() {
    env_logger::init();
    log::info!("Arena Duel (headless) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load_or_default(path),
        None => Settings::default(),
    };

    let mut session = Session::new(settings.seed);
    start_session(&mut session);

    let hull = StandardHull;
    let frame_dt = settings.frame_dt();
    let mut time = 0.0_f64;

    for _ in 0..settings.frame_count() {
        let input = TickInput {
            time,
            idle_mode: settings.autopilot,
            ..Default::default()
        };
        advance_frame(&mut session, &input, Some(&hull));
        time += frame_dt;

        for event in session.take_events() {
            report(&event);
        }
        if !session.is_playing() {
            break;
        }
    }

    log::info!(
        "Finished after {:.1}s simulated: health {:.0}, score {}",
        time,
        session.health,
        session.score
    );

    if settings.dump_snapshot {
        match serde_json::to_string_pretty(&session.snapshot()) {
            Ok(json) => println!("{}", json),
            Err(e) => log::error!("Failed to serialize snapshot: {}", e),
        }
    }
}

fn report(event: &GameEvent) {
    match event {
        GameEvent::EnemyHit { score, respawn } => {
            log::info!("Hit! score {} (enemy respawned at {:.1}, {:.1})", score, respawn.x, respawn.z);
        }
        GameEvent::PlayerDamaged {
            amount,
            health,
            source,
        } => {
            log::debug!("Took {:.1} ({:?}), health {:.1}", amount, source, health);
        }
        GameEvent::GameOver { final_score } => {
            log::info!("Game over - final score {}", final_score);
        }
        other => log::trace!("{:?}", other),
    }
}
