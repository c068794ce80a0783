//! Built-in hit volumes
//!
//! Primitive stand-ins for the rendered meshes, used when the simulation runs
//! without a scene (headless runner, tests). Dimensions follow the models:
//! a tapered body, a head with two eyes, two arms, a row of back spikes, and
//! a box for the player.

use glam::Vec3;

use super::hitscan::{Aabb, Cylinder, HitGeometry, RayTarget, Sphere};
use super::state::{Enemy, Player};
use crate::forward_from_yaw;

const BODY_RADIUS: f32 = 0.7;
const BODY_HEIGHT: f32 = 1.6;
const HEAD_RADIUS: f32 = 0.5;
const HEAD_HEIGHT: f32 = 1.8;
const EYE_RADIUS: f32 = 0.12;
const EYE_HEIGHT: f32 = 1.9;
const EYE_FORWARD: f32 = 0.4;
const EYE_SPREAD: f32 = 0.2;
const ARM_RADIUS: f32 = 0.25;
const ARM_HEIGHT: f32 = 1.0;
const ARM_SPREAD: f32 = 0.7;
const SPIKE_COUNT: usize = 5;
const SPIKE_RADIUS: f32 = 0.1;
/// Mid-height of the spike row (the meshes scatter them over 1.2..1.5)
const SPIKE_HEIGHT: f32 = 1.35;
const SPIKE_SPACING: f32 = 0.15;
const SPIKE_BACK: f32 = 0.3;

const PLAYER_HALF_EXTENTS: Vec3 = Vec3::new(0.4, 0.7, 0.4);

/// Primitive hull matching the default meshes
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardHull;

impl StandardHull {
    /// World-space spheres for the enemy's head, eyes, arms and back spikes
    fn enemy_spheres(enemy: &Enemy) -> Vec<Sphere> {
        let base = enemy.position;
        let forward = forward_from_yaw(enemy.yaw);
        let right = Vec3::new(-forward.z, 0.0, forward.x);
        let at = |side: f32, up: f32, ahead: f32, radius: f32| Sphere {
            center: base + right * side + Vec3::Y * up + forward * ahead,
            radius,
        };
        let mut spheres = vec![
            at(0.0, HEAD_HEIGHT, 0.0, HEAD_RADIUS),
            at(-EYE_SPREAD, EYE_HEIGHT, EYE_FORWARD, EYE_RADIUS),
            at(EYE_SPREAD, EYE_HEIGHT, EYE_FORWARD, EYE_RADIUS),
            at(-ARM_SPREAD, ARM_HEIGHT, 0.0, ARM_RADIUS),
            at(ARM_SPREAD, ARM_HEIGHT, 0.0, ARM_RADIUS),
        ];
        spheres.extend((0..SPIKE_COUNT).map(|i| {
            let side = (i as f32 - 2.0) * SPIKE_SPACING;
            at(side, SPIKE_HEIGHT, -SPIKE_BACK, SPIKE_RADIUS)
        }));
        spheres
    }
}

impl HitGeometry for StandardHull {
    fn enemy_parts(&self, enemy: &Enemy) -> Vec<Box<dyn RayTarget>> {
        let mut parts: Vec<Box<dyn RayTarget>> = vec![Box::new(Cylinder {
            base: enemy.position,
            radius: BODY_RADIUS,
            height: BODY_HEIGHT,
        })];
        parts.extend(
            Self::enemy_spheres(enemy)
                .into_iter()
                .map(|s| Box::new(s) as Box<dyn RayTarget>),
        );
        parts
    }

    fn player_volume(&self, player: &Player) -> Option<Box<dyn RayTarget>> {
        Some(Box::new(Aabb::from_center(
            player.position,
            PLAYER_HALF_EXTENTS,
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::hitscan::{Ray, nearest_hit};
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn enemy_at(pos: Vec3) -> Enemy {
        let mut rng = Pcg32::seed_from_u64(0);
        let mut enemy = Enemy::new(&mut rng);
        enemy.position = pos;
        enemy
    }

    #[test]
    fn test_part_count() {
        let enemy = enemy_at(Vec3::new(0.0, 0.0, -10.0));
        assert_eq!(StandardHull.enemy_parts(&enemy).len(), 11);
    }

    #[test]
    fn test_spikes_sit_behind_facing() {
        let mut enemy = enemy_at(Vec3::new(3.0, 0.0, -10.0));
        enemy.face(Vec3::new(3.0, 0.0, 0.0));
        let forward = forward_from_yaw(enemy.yaw);
        let spheres = StandardHull::enemy_spheres(&enemy);
        let spikes = &spheres[5..];
        assert_eq!(spikes.len(), SPIKE_COUNT);
        for spike in spikes {
            let offset = spike.center - enemy.position;
            assert!((offset.dot(forward) + SPIKE_BACK).abs() < 1e-5);
            assert!((offset.y - SPIKE_HEIGHT).abs() < 1e-5);
        }
        // Row is centred on the body axis
        let mean_x: f32 = spikes.iter().map(|s| s.center.x).sum::<f32>() / SPIKE_COUNT as f32;
        assert!((mean_x - 3.0).abs() < 1e-5);
    }

    #[test]
    fn test_eye_level_shot_hits_enemy() {
        let mut enemy = enemy_at(Vec3::new(0.0, 0.0, -10.0));
        enemy.face(Vec3::ZERO);
        let player = Player::default();
        let ray = StandardHull.player_view(&player);
        let parts = StandardHull.enemy_parts(&enemy);
        let d = nearest_hit(&ray, &parts).unwrap();
        // Eye height grazes the top rim of the body cylinder at z=-9.3
        assert!(d > 9.0 && d < 10.0, "distance {d}");
    }

    #[test]
    fn test_shot_past_enemy_misses() {
        let enemy = enemy_at(Vec3::new(6.0, 0.0, -10.0));
        let player = Player::default();
        let ray = StandardHull.player_view(&player);
        assert!(nearest_hit(&ray, &StandardHull.enemy_parts(&enemy)).is_none());
    }

    #[test]
    fn test_player_volume_blocks_horizontal_shot() {
        let player = Player::default();
        let volume = StandardHull.player_volume(&player).unwrap();
        let ray = Ray::new(Vec3::new(10.0, 1.6, 0.0), Vec3::new(-1.0, 0.0, 0.0)).unwrap();
        let d = volume.ray_distance(&ray).unwrap();
        assert!((d - 9.6).abs() < 1e-4);
    }
}
