//! Hit-scan combat resolution
//!
//! Player shots score and relocate the enemy; enemy shots and contact
//! damage drain the player's health. Health only ever changes through
//! [`apply_damage`], which is also the only path into game over.

use glam::Vec3;
use rand::Rng;

use super::hitscan::{HitGeometry, Ray, nearest_hit};
use super::state::{DamageSource, GameEvent, Session, SessionPhase};
use crate::consts::*;

/// Subtract `amount` from the player's health, ending the session at zero
pub fn apply_damage(session: &mut Session, amount: f32, source: DamageSource) {
    if !session.is_playing() {
        return;
    }

    session.health = (session.health - amount).clamp(0.0, MAX_HEALTH);
    session.push_event(GameEvent::PlayerDamaged {
        amount,
        health: session.health,
        source,
    });

    if session.health <= 0.0 {
        end_session(session);
    }
}

/// Playing -> Idle, capturing the final score
fn end_session(session: &mut Session) {
    session.phase = SessionPhase::Idle;
    session.final_score = Some(session.score);
    session.push_event(GameEvent::GameOver {
        final_score: session.score,
    });
    log::info!(
        "Game over after {} ticks, final score {}",
        session.time_ticks,
        session.score
    );
}

/// Fire the player's weapon if it is off cooldown.
///
/// Returns true when a shot was actually fired. Without geometry the combat
/// step is skipped entirely for this frame.
pub fn fire_player_weapon(session: &mut Session, geometry: Option<&dyn HitGeometry>) -> bool {
    if session.weapon_cooldown > 0.0 {
        return false;
    }
    let Some(geometry) = geometry else {
        log::warn!("No hit geometry available, skipping player shot");
        return false;
    };

    session.weapon_cooldown = WEAPON_COOLDOWN;

    let ray = geometry.player_view(&session.player);
    let parts = geometry.enemy_parts(&session.enemy);
    let hit = nearest_hit(&ray, &parts).filter(|d| *d < WEAPON_RANGE);
    let end = ray.at(hit.unwrap_or(WEAPON_RANGE));

    let id = session.trails.spawn(ray.origin, end);
    session.push_event(GameEvent::TrailSpawned {
        id,
        origin: ray.origin,
        end,
    });
    session.push_event(GameEvent::ShotFired {
        origin: ray.origin,
        end,
        hit: hit.is_some(),
    });

    if let Some(distance) = hit {
        session.score += 1;
        let respawn = respawn_enemy(session);
        log::debug!(
            "Enemy hit at {:.2}, score {}, respawned at ({:.1}, {:.1})",
            distance,
            session.score,
            respawn.x,
            respawn.z
        );
        session.push_event(GameEvent::EnemyHit {
            score: session.score,
            respawn,
        });
    }

    session.push_event(GameEvent::MuzzleFlash {
        position: ray.at(MUZZLE_FLASH_OFFSET),
        decay_rate: MUZZLE_FLASH_DECAY,
    });

    true
}

/// Drop the enemy somewhere in the central square and force it to re-plan
fn respawn_enemy(session: &mut Session) -> Vec3 {
    let span = ARENA_RADIUS - RESPAWN_INSET;
    let x = (session.rng.random::<f32>() - 0.5) * span;
    let z = (session.rng.random::<f32>() - 0.5) * span;
    session.enemy.position = Vec3::new(x, 0.0, z);
    session.enemy.ai.direction_timer = 0.0;
    session.enemy.position
}

/// Resolve the enemy's ranged attack against the player's volume
pub fn enemy_ranged_attack(session: &mut Session, geometry: Option<&dyn HitGeometry>) -> bool {
    let Some(geometry) = geometry else {
        log::warn!("No hit geometry available, skipping enemy shot");
        return false;
    };

    let mut origin = session.enemy.position;
    origin.y = EYE_HEIGHT;
    let Some(ray) = Ray::new(origin, session.player.eye() - origin) else {
        // Standing on the player's spot: no direction to shoot along
        return false;
    };

    let hit = geometry
        .player_volume(&session.player)
        .and_then(|volume| volume.ray_distance(&ray))
        .is_some_and(|d| d > 0.0 && d <= RANGED_MAX_RANGE);

    log::debug!("Enemy fired from ({:.1}, {:.1}), hit: {}", origin.x, origin.z, hit);
    session.push_event(GameEvent::EnemyShot {
        origin,
        direction: ray.direction,
        hit,
    });

    if hit {
        apply_damage(session, RANGED_DAMAGE, DamageSource::Ranged);
    }
    hit
}

/// Muzzle flash opacity after `dt` seconds of fading
#[inline]
pub fn fade_muzzle_flash(opacity: f32, dt: f32) -> f32 {
    (opacity - dt * MUZZLE_FLASH_DECAY).max(0.0)
}
