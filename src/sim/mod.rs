//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Driven only by `tick(dt)` from an external scheduler
//! - Seeded RNG only
//! - Stable iteration order (trails kept in spawn order)
//! - No rendering or platform dependencies

pub mod arena;
pub mod clock;
pub mod combat;
pub mod enemy;
pub mod hitscan;
pub mod hull;
pub mod movement;
pub mod state;
pub mod tick;
pub mod trails;

pub use arena::{contain, movable_radius};
pub use clock::Clock;
pub use combat::{apply_damage, enemy_ranged_attack, fade_muzzle_flash, fire_player_weapon};
pub use enemy::{EnemyMode, behavior_mode, update_enemy};
pub use hitscan::{Aabb, Cylinder, HitGeometry, Ray, RayTarget, Sphere, nearest_hit};
pub use hull::StandardHull;
pub use movement::update_player;
pub use state::{
    AiState, DamageSource, Enemy, FrameSnapshot, GameEvent, Player, Session, SessionPhase,
    TrailView, Transform,
};
pub use tick::{TickInput, advance_frame, start_session, tick};
pub use trails::{ShotTrail, TrailSet};
