//! Session state and core simulation types
//!
//! Everything the frame loop mutates is owned by a single [`Session`].

use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::clock::Clock;
use super::hitscan::Ray;
use super::trails::TrailSet;
use crate::consts::*;
use crate::forward_from_yaw;

/// Session state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Not started yet, or the game-over screen is showing
    Idle,
    /// Active gameplay
    Playing,
}

/// What dealt damage to the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DamageSource {
    /// Continuous contact damage, scaled by dt
    Melee,
    /// Discrete hit from the enemy's hit-scan attack
    Ranged,
}

/// The controllable entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Body position (y fixed at body height)
    pub position: Vec3,
    /// Shared by body and view (radians, 0 looks down -Z)
    pub yaw: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, PLAYER_BODY_HEIGHT, 0.0),
            yaw: 0.0,
        }
    }
}

impl Player {
    /// World-space eye position
    pub fn eye(&self) -> Vec3 {
        Vec3::new(self.position.x, EYE_HEIGHT, self.position.z)
    }

    /// Unit view direction on the ground plane
    pub fn forward(&self) -> Vec3 {
        forward_from_yaw(self.yaw)
    }

    /// Ray from the eye along the view direction
    pub fn view_ray(&self) -> Ray {
        Ray {
            origin: self.eye(),
            direction: self.forward(),
        }
    }
}

/// Wander parameters that persist across chase/wander switches
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AiState {
    /// Heading used while wandering (radians)
    pub target_angle: f32,
    /// Seconds until a new heading is picked
    pub direction_timer: f32,
}

impl AiState {
    /// Fresh state with a random heading and an already-expired timer
    pub fn random(rng: &mut Pcg32) -> Self {
        Self {
            target_angle: rng.random_range(0.0..std::f32::consts::TAU),
            direction_timer: 0.0,
        }
    }

    /// Ground-plane wander direction
    pub fn heading(&self) -> Vec3 {
        Vec3::new(self.target_angle.cos(), 0.0, self.target_angle.sin())
    }
}

/// The autonomous hostile entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    /// Ground position; y carries the cosmetic bob
    pub position: Vec3,
    /// Faces the player every tick (same convention as the player's yaw)
    pub yaw: f32,
    pub ai: AiState,
}

impl Enemy {
    pub fn new(rng: &mut Pcg32) -> Self {
        Self {
            position: ENEMY_START,
            yaw: 0.0,
            ai: AiState::random(rng),
        }
    }
}

/// Position and facing for mesh placement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    pub yaw: f32,
}

/// Render data for one live trail
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrailView {
    pub id: u32,
    pub origin: Vec3,
    pub end: Vec3,
    pub opacity: f32,
}

/// Domain events for the presentation layer, drained once per frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Idle -> Playing; hide the game-over screen
    SessionStarted,
    /// Health changed because of enemy damage
    PlayerDamaged {
        amount: f32,
        health: f32,
        source: DamageSource,
    },
    /// The player's weapon discharged
    ShotFired { origin: Vec3, end: Vec3, hit: bool },
    /// Player shot landed; the enemy was moved to `respawn`
    EnemyHit { score: u64, respawn: Vec3 },
    /// The enemy's ranged attack was resolved
    EnemyShot {
        origin: Vec3,
        direction: Vec3,
        hit: bool,
    },
    /// Flash at full opacity, fading by `decay_rate` per second
    MuzzleFlash { position: Vec3, decay_rate: f32 },
    TrailSpawned { id: u32, origin: Vec3, end: Vec3 },
    /// Release whatever visual resource backs this trail
    TrailRemoved { id: u32 },
    /// Playing -> Idle; show the end screen
    GameOver { final_score: u64 },
}

/// Everything the presentation layer needs to draw a frame
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub phase: SessionPhase,
    pub health: f32,
    pub score: u64,
    pub final_score: Option<u64>,
    pub player: Transform,
    pub enemy: Transform,
    pub trails: Vec<TrailView>,
}

/// Complete encounter state
#[derive(Debug, Clone)]
pub struct Session {
    /// Seed for reproducibility
    pub seed: u64,
    pub(crate) rng: Pcg32,
    pub phase: SessionPhase,
    /// Always within [0, MAX_HEALTH]
    pub health: f32,
    pub score: u64,
    /// Score captured at the moment of death
    pub final_score: Option<u64>,
    pub player: Player,
    pub enemy: Enemy,
    /// Seconds until the player's weapon may fire again (>= 0)
    pub weapon_cooldown: f32,
    /// Seconds until the enemy's ranged attack may fire again (>= 0)
    pub enemy_weapon_cooldown: f32,
    pub trails: TrailSet,
    /// Frames simulated while playing
    pub time_ticks: u64,
    pub(crate) clock: Clock,
    events: Vec<GameEvent>,
}

impl Session {
    /// Create an idle session with the given seed
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let enemy = Enemy::new(&mut rng);
        Self {
            seed,
            rng,
            phase: SessionPhase::Idle,
            health: MAX_HEALTH,
            score: 0,
            final_score: None,
            player: Player::default(),
            enemy,
            weapon_cooldown: 0.0,
            enemy_weapon_cooldown: 0.0,
            trails: TrailSet::default(),
            time_ticks: 0,
            clock: Clock::new(),
            events: Vec::new(),
        }
    }

    pub fn is_playing(&self) -> bool {
        self.phase == SessionPhase::Playing
    }

    /// Queue an event for the presentation layer
    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Drain queued events
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Pending events without draining them
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            phase: self.phase,
            health: self.health,
            score: self.score,
            final_score: self.final_score,
            player: Transform {
                position: self.player.position,
                yaw: self.player.yaw,
            },
            enemy: Transform {
                position: self.enemy.position,
                yaw: self.enemy.yaw,
            },
            trails: self.trails.views(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_idle() {
        let session = Session::new(7);
        assert_eq!(session.phase, SessionPhase::Idle);
        assert_eq!(session.health, MAX_HEALTH);
        assert_eq!(session.score, 0);
        assert_eq!(session.enemy.position, ENEMY_START);
        assert!(session.trails.is_empty());
    }

    #[test]
    fn test_same_seed_same_enemy_heading() {
        let a = Session::new(99);
        let b = Session::new(99);
        assert_eq!(a.enemy.ai, b.enemy.ai);
    }

    #[test]
    fn test_ai_heading_in_range() {
        let mut rng = Pcg32::seed_from_u64(3);
        for _ in 0..100 {
            let ai = AiState::random(&mut rng);
            assert!(ai.target_angle >= 0.0 && ai.target_angle < std::f32::consts::TAU);
            assert!((ai.heading().length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_player_view_ray() {
        let player = Player::default();
        let ray = player.view_ray();
        assert_eq!(ray.origin, Vec3::new(0.0, EYE_HEIGHT, 0.0));
        assert!((ray.direction - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-6);
    }

    #[test]
    fn test_take_events_drains() {
        let mut session = Session::new(1);
        session.push_event(GameEvent::SessionStarted);
        assert_eq!(session.events().len(), 1);
        assert_eq!(session.take_events(), vec![GameEvent::SessionStarted]);
        assert!(session.events().is_empty());
    }

    #[test]
    fn test_snapshot_serializes() {
        let session = Session::new(1);
        let json = serde_json::to_string(&session.snapshot()).unwrap();
        assert!(json.contains("\"phase\":\"Idle\""));
    }
}
