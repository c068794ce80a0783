//! Player movement
//!
//! Tank-style controls: turn intents rotate the shared body/view yaw, move
//! intents translate along the view's ground-plane forward vector.

use glam::Vec3;

use super::arena::contain;
use super::state::Player;
use super::tick::TickInput;
use crate::consts::{PLAYER_SPEED, TURN_RATE};
use crate::normalize_angle;

/// Apply one frame of input to the player
pub fn update_player(player: &mut Player, input: &TickInput, dt: f32) {
    // Both turn intents may be held at once; they cancel rather than exclude
    if input.turn_left {
        player.yaw += TURN_RATE * dt;
    }
    if input.turn_right {
        player.yaw -= TURN_RATE * dt;
    }
    player.yaw = normalize_angle(player.yaw);

    let forward = player.forward();
    let mut intent = Vec3::ZERO;
    if input.move_forward {
        intent += forward;
    }
    if input.move_backward {
        intent -= forward;
    }

    if let Some(dir) = intent.try_normalize() {
        player.position += dir * PLAYER_SPEED * dt;
    }
    player.position = contain(player.position);
}
