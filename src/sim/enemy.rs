//! Enemy behavior
//!
//! The chase/wander mode is never stored: it is re-derived from the distance
//! to the player every tick. Only the wander heading and its timer persist
//! (in [`AiState`]) so a wander leg resumes where it left off.

use glam::Vec3;
use rand::Rng;
use rand_pcg::Pcg32;

use super::arena::contain;
use super::combat::{apply_damage, enemy_ranged_attack};
use super::hitscan::HitGeometry;
use super::state::{AiState, DamageSource, Enemy, Session};
use crate::consts::*;
use crate::{planar, yaw_toward};

/// Movement intent for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyMode {
    /// Head straight for the player
    Chasing,
    /// Follow the stored wander heading
    Wandering,
}

/// Pick the movement intent from the distance to the player
pub fn behavior_mode(distance: f32) -> EnemyMode {
    if distance > CHASE_MIN_DISTANCE && distance < ARENA_RADIUS - CHASE_OUTER_INSET {
        EnemyMode::Chasing
    } else {
        EnemyMode::Wandering
    }
}

impl AiState {
    /// Count down the heading timer, re-rolling the heading when it runs out
    pub fn advance_wander(&mut self, dt: f32, rng: &mut Pcg32) {
        self.direction_timer -= dt;
        if self.direction_timer <= 0.0 {
            self.target_angle = rng.random_range(0.0..std::f32::consts::TAU);
            self.direction_timer = rng.random_range(WANDER_TIMER_MIN..WANDER_TIMER_MAX);
        }
    }
}

impl Enemy {
    /// Move one tick toward `player_pos` or along the wander heading
    pub fn steer(&mut self, player_pos: Vec3, dt: f32, rng: &mut Pcg32) -> EnemyMode {
        let mode = behavior_mode(self.position.distance(player_pos));
        // Chase direction ignores the height difference
        let to_player = planar(player_pos - self.position);
        match mode {
            EnemyMode::Chasing => {
                if let Some(dir) = to_player.try_normalize() {
                    self.position += Vec3::new(dir.x, 0.0, dir.y) * ENEMY_SPEED * dt;
                }
            }
            EnemyMode::Wandering => {
                self.ai.advance_wander(dt, rng);
                self.position += self.ai.heading() * ENEMY_SPEED * WANDER_SPEED_FACTOR * dt;
            }
        }
        self.position = contain(self.position);
        mode
    }

    /// Cosmetic vertical bob, a function of wall-clock time only
    pub fn apply_bob(&mut self, wall_clock: f64) {
        self.position.y = (wall_clock * BOB_RATE).sin() as f32 * BOB_AMPLITUDE;
    }

    /// Snap the facing toward a target (no turn-rate limit)
    pub fn face(&mut self, target: Vec3) {
        if let Some(yaw) = yaw_toward(self.position, target) {
            self.yaw = yaw;
        }
    }
}

/// Run one tick of enemy behavior, including its attacks on the player.
///
/// `wall_clock` is the time sample (seconds) used for the bob; `geometry`
/// resolves the ranged attack and may be absent, in which case the attack
/// is skipped.
pub fn update_enemy(
    session: &mut Session,
    dt: f32,
    wall_clock: f64,
    geometry: Option<&dyn HitGeometry>,
) {
    let player_pos = session.player.position;
    // 3D distance, so the player's body height counts toward every gate
    let distance = session.enemy.position.distance(player_pos);

    session.enemy.steer(player_pos, dt, &mut session.rng);
    session.enemy.apply_bob(wall_clock);
    session.enemy.face(player_pos);

    if distance < MELEE_RANGE {
        apply_damage(session, MELEE_DPS * dt, DamageSource::Melee);
        if !session.is_playing() {
            return;
        }
    }

    session.enemy_weapon_cooldown = (session.enemy_weapon_cooldown - dt).max(0.0);
    if session.enemy_weapon_cooldown <= 0.0 && distance < RANGED_TRIGGER_DISTANCE {
        session.enemy_weapon_cooldown = RANGED_COOLDOWN;
        enemy_ranged_attack(session, geometry);
    }
}
