//! Per-frame simulation step
//!
//! Session controller: owns the Idle/Playing transitions and runs the frame
//! pipeline in a fixed order (movement, enemy, cooldown, player weapon,
//! trails). The order matters: enemy damage lands before the player gets to
//! shoot, and cooldowns tick down before the fire check.

use serde::{Deserialize, Serialize};

use super::combat::fire_player_weapon;
use super::enemy::update_enemy;
use super::hitscan::HitGeometry;
use super::movement::update_player;
use super::state::{Enemy, GameEvent, Player, Session, SessionPhase};
use crate::consts::*;
use crate::{normalize_angle, planar, yaw_toward};

/// Yaw error (radians) the autopilot tolerates before turning
const AUTOPILOT_TURN_DEADZONE: f32 = 0.025;
/// Yaw error (radians) inside which the autopilot pulls the trigger
const AUTOPILOT_FIRE_WINDOW: f32 = 0.03;
/// The autopilot closes in until this distance, and backs off inside melee reach
const AUTOPILOT_ENGAGE_DISTANCE: f32 = 12.0;

/// Input snapshot for a single frame
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TickInput {
    pub turn_left: bool,
    pub turn_right: bool,
    pub move_forward: bool,
    pub move_backward: bool,
    /// Trigger held
    pub fire: bool,
    /// Monotonic wall-clock sample (seconds) for this frame
    pub time: f64,
    /// Idle/demo mode - autopilot drives the player
    pub idle_mode: bool,
}

/// Idle -> Playing: reset the whole encounter to its canonical start
pub fn start_session(session: &mut Session) {
    session.health = MAX_HEALTH;
    session.score = 0;
    session.final_score = None;
    session.player = Player::default();
    session.enemy = Enemy::new(&mut session.rng);
    for id in session.trails.clear() {
        session.push_event(GameEvent::TrailRemoved { id });
    }
    session.weapon_cooldown = 0.0;
    session.enemy_weapon_cooldown = 0.0;
    session.time_ticks = 0;
    session.phase = SessionPhase::Playing;
    session.push_event(GameEvent::SessionStarted);
    log::info!("Session started (seed {})", session.seed);
}

/// Advance the session by `dt` seconds.
///
/// Does nothing while idle. `geometry` resolves hit-scan queries; when it
/// is absent the combat steps are skipped but everything else still runs.
pub fn tick(
    session: &mut Session,
    input: &TickInput,
    dt: f32,
    geometry: Option<&dyn HitGeometry>,
) {
    if !session.is_playing() {
        return;
    }

    let dt = dt.clamp(0.0, MAX_FRAME_DT);
    let input = if input.idle_mode {
        autopilot(session, input)
    } else {
        input.clone()
    };

    update_player(&mut session.player, &input, dt);

    update_enemy(session, dt, input.time, geometry);
    if !session.is_playing() {
        return;
    }

    session.weapon_cooldown = (session.weapon_cooldown - dt).max(0.0);
    if input.fire {
        fire_player_weapon(session, geometry);
    }

    for id in session.trails.update(dt) {
        log::trace!("Trail {} expired", id);
        session.push_event(GameEvent::TrailRemoved { id });
    }

    session.time_ticks += 1;
}

/// Advance one rendered frame, deriving `dt` from the input's time sample
pub fn advance_frame(
    session: &mut Session,
    input: &TickInput,
    geometry: Option<&dyn HitGeometry>,
) {
    let dt = session.clock.advance(input.time);
    tick(session, input, dt, geometry);
}

/// Demo AI: swing toward the enemy, hold a mid range, shoot when lined up
fn autopilot(session: &Session, base: &TickInput) -> TickInput {
    let player = &session.player;
    let enemy_pos = session.enemy.position;
    let distance = planar(enemy_pos - player.position).length();

    let error = yaw_toward(player.position, enemy_pos)
        .map(|desired| normalize_angle(desired - player.yaw))
        .unwrap_or(0.0);

    TickInput {
        turn_left: error > AUTOPILOT_TURN_DEADZONE,
        turn_right: error < -AUTOPILOT_TURN_DEADZONE,
        move_forward: distance > AUTOPILOT_ENGAGE_DISTANCE,
        move_backward: distance < MELEE_RANGE * 2.0,
        fire: error.abs() < AUTOPILOT_FIRE_WINDOW,
        time: base.time,
        idle_mode: true,
    }
}
