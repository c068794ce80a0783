//! Shot trail lifecycle
//!
//! Trails are purely visual, but the core owns them so that expiry is
//! deterministic and tied to simulated time rather than render time.

use glam::Vec3;

use super::state::TrailView;
use crate::consts::{TRAIL_LIFETIME, TRAIL_PEAK_OPACITY};

/// Remaining lifetime at or below this counts as expired (absorbs f32 drift
/// when the lifetime is consumed in many small steps)
const EXPIRY_EPSILON: f32 = 1e-5;

/// A fading line from the muzzle to the impact point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShotTrail {
    pub id: u32,
    pub origin: Vec3,
    pub end: Vec3,
    pub remaining: f32,
    pub max_lifetime: f32,
}

impl ShotTrail {
    /// Display opacity, fading linearly from the peak to zero
    pub fn opacity(&self) -> f32 {
        (self.remaining / self.max_lifetime).clamp(0.0, 1.0) * TRAIL_PEAK_OPACITY
    }

    fn is_expired(&self) -> bool {
        self.remaining <= EXPIRY_EPSILON
    }
}

/// Ordered collection of live trails
#[derive(Debug, Clone, Default)]
pub struct TrailSet {
    trails: Vec<ShotTrail>,
    next_id: u32,
}

impl TrailSet {
    /// Start a new trail at full lifetime, returning its id
    pub fn spawn(&mut self, origin: Vec3, end: Vec3) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.trails.push(ShotTrail {
            id,
            origin,
            end,
            remaining: TRAIL_LIFETIME,
            max_lifetime: TRAIL_LIFETIME,
        });
        id
    }

    /// Age every trail by `dt`, dropping expired ones.
    ///
    /// Returns the ids of removed trails in the order they were removed.
    pub fn update(&mut self, dt: f32) -> Vec<u32> {
        let mut removed = Vec::new();
        // Walk backwards so removal doesn't disturb unvisited indices
        for i in (0..self.trails.len()).rev() {
            let trail = &mut self.trails[i];
            trail.remaining -= dt;
            if trail.is_expired() {
                removed.push(self.trails.remove(i).id);
            }
        }
        removed
    }

    /// Drop every trail regardless of lifetime, returning their ids
    pub fn clear(&mut self) -> Vec<u32> {
        self.trails.drain(..).map(|t| t.id).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ShotTrail> {
        self.trails.iter()
    }

    pub fn len(&self) -> usize {
        self.trails.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trails.is_empty()
    }

    /// Render data for every live trail
    pub fn views(&self) -> Vec<TrailView> {
        self.trails
            .iter()
            .map(|t| TrailView {
                id: t.id,
                origin: t.origin,
                end: t.end,
                opacity: t.opacity(),
            })
            .collect()
    }
}
