//! Arena Duel - simulation core of a first-person arena shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, enemy AI, hit-scan combat, session)
//! - `settings`: Headless runner configuration

pub mod settings;
pub mod sim;

pub use settings::{Settings, SettingsError};

use glam::{Vec2, Vec3};

/// Game configuration constants
pub mod consts {
    use glam::Vec3;

    /// Largest frame delta the simulation will integrate (spiral-of-death guard)
    pub const MAX_FRAME_DT: f32 = 0.05;

    /// Arena dimensions
    pub const ARENA_RADIUS: f32 = 40.0;
    pub const CONTAINMENT_MARGIN: f32 = 1.8;

    /// Player body and view
    pub const PLAYER_BODY_HEIGHT: f32 = 1.4;
    pub const EYE_HEIGHT: f32 = 1.6;
    pub const PLAYER_SPEED: f32 = 14.0;
    /// Radians per second
    pub const TURN_RATE: f32 = 2.5;
    pub const MAX_HEALTH: f32 = 100.0;

    /// Player weapon
    pub const WEAPON_COOLDOWN: f32 = 0.2;
    pub const WEAPON_RANGE: f32 = 40.0;

    /// Enemy movement
    pub const ENEMY_START: Vec3 = Vec3::new(8.0, 0.0, -8.0);
    pub const ENEMY_SPEED: f32 = 5.0;
    pub const WANDER_SPEED_FACTOR: f32 = 0.6;
    pub const WANDER_TIMER_MIN: f32 = 1.8;
    pub const WANDER_TIMER_MAX: f32 = 3.0;
    /// Chasing happens strictly inside (CHASE_MIN_DISTANCE, ARENA_RADIUS - CHASE_OUTER_INSET)
    pub const CHASE_MIN_DISTANCE: f32 = 4.0;
    pub const CHASE_OUTER_INSET: f32 = 2.0;
    /// Respawn square half-width is (ARENA_RADIUS - RESPAWN_INSET) / 2
    pub const RESPAWN_INSET: f32 = 8.0;

    /// Cosmetic bob of the enemy (driven by wall-clock time)
    pub const BOB_AMPLITUDE: f32 = 0.1;
    pub const BOB_RATE: f64 = 3.0;

    /// Enemy attacks
    pub const MELEE_RANGE: f32 = 2.2;
    pub const MELEE_DPS: f32 = 12.0;
    pub const RANGED_TRIGGER_DISTANCE: f32 = 22.0;
    pub const RANGED_COOLDOWN: f32 = 1.6;
    pub const RANGED_DAMAGE: f32 = 20.0;
    pub const RANGED_MAX_RANGE: f32 = 40.0;

    /// Shot trails
    pub const TRAIL_LIFETIME: f32 = 0.3;
    pub const TRAIL_PEAK_OPACITY: f32 = 0.8;

    /// Muzzle flash opacity lost per second
    pub const MUZZLE_FLASH_DECAY: f32 = 8.0;
    /// Distance ahead of the eye where the flash appears
    pub const MUZZLE_FLASH_OFFSET: f32 = 1.0;
}

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

/// Ground-plane forward vector for a yaw (yaw 0 looks down -Z)
#[inline]
pub fn forward_from_yaw(yaw: f32) -> Vec3 {
    Vec3::new(-yaw.sin(), 0.0, -yaw.cos())
}

/// Yaw whose forward vector points from `from` to `to` on the ground plane
#[inline]
pub fn yaw_toward(from: Vec3, to: Vec3) -> Option<f32> {
    let delta = planar(to - from);
    if delta.length_squared() < 1e-12 {
        return None;
    }
    Some((-delta.x).atan2(-delta.y))
}

/// Project a world position onto the ground plane (x, z)
#[inline]
pub fn planar(v: Vec3) -> Vec2 {
    Vec2::new(v.x, v.z)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_normalize_angle() {
        assert!((normalize_angle(2.5 * PI) - FRAC_PI_2).abs() < 1e-5);
        // Either end of the wrap point is acceptable after f32 rounding
        assert!((normalize_angle(3.0 * PI).abs() - PI).abs() < 1e-5);
        assert!(normalize_angle(PI) >= -PI && normalize_angle(PI) < PI);
        assert!((normalize_angle(0.5) - 0.5).abs() < 1e-6);
        assert!((normalize_angle(-3.0 * FRAC_PI_2) - FRAC_PI_2).abs() < 1e-5);
    }

    #[test]
    fn test_forward_from_yaw() {
        let f = forward_from_yaw(0.0);
        assert!((f - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-6);

        // Turning left (positive yaw) swings the view toward -X
        let f = forward_from_yaw(FRAC_PI_2);
        assert!((f - Vec3::new(-1.0, 0.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn test_yaw_toward_round_trip() {
        let from = Vec3::new(3.0, 0.0, -2.0);
        let to = Vec3::new(-5.0, 1.4, 7.0);
        let yaw = yaw_toward(from, to).unwrap();
        let dir = planar(to - from).normalize();
        let fwd = planar(forward_from_yaw(yaw));
        assert!((dir - fwd).length() < 1e-5);
    }

    #[test]
    fn test_yaw_toward_coincident() {
        let p = Vec3::new(1.0, 0.0, 1.0);
        assert!(yaw_toward(p, p + Vec3::Y).is_none());
    }
}
