//! Circular arena containment
//!
//! Entities are projected back onto the boundary circle rather than stopped,
//! so they can keep sliding along the tangent on the next frame.

use glam::Vec3;

use crate::consts::{ARENA_RADIUS, CONTAINMENT_MARGIN};
use crate::planar;

/// Effective radius an entity's ground position may reach
#[inline]
pub fn movable_radius() -> f32 {
    ARENA_RADIUS - CONTAINMENT_MARGIN
}

/// Clamp a world position into the arena, leaving height untouched
pub fn contain(pos: Vec3) -> Vec3 {
    let limit = movable_radius();
    let len = planar(pos).length();
    if len > limit {
        let scale = limit / len;
        Vec3::new(pos.x * scale, pos.y, pos.z * scale)
    } else {
        pos
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_inside_untouched() {
        let p = Vec3::new(10.0, 1.4, -5.0);
        assert_eq!(contain(p), p);
    }

    #[test]
    fn test_outside_projected_to_boundary() {
        let p = Vec3::new(50.0, 1.4, 0.0);
        let c = contain(p);
        assert!((c.x - movable_radius()).abs() < 1e-4);
        assert_eq!(c.z, 0.0);
        assert_eq!(c.y, 1.4);
    }

    #[test]
    fn test_projection_keeps_direction() {
        let p = Vec3::new(-60.0, 0.0, 80.0);
        let c = contain(p);
        let before = planar(p).normalize();
        let after = planar(c).normalize();
        assert!((before - after).length() < 1e-5);
    }

    proptest! {
        #[test]
        fn prop_contained_within_radius(x in -500.0f32..500.0, z in -500.0f32..500.0, y in -2.0f32..4.0) {
            let c = contain(Vec3::new(x, y, z));
            prop_assert!(planar(c).length() <= movable_radius() + 1e-3);
            prop_assert_eq!(c.y, y);
        }
    }
}
