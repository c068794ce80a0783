//! Hit-scan ray queries
//!
//! The simulation never sees meshes. Anything that can answer "how far along
//! this ray do you get hit" is a [`RayTarget`], and the presentation layer
//! hands the core its targets through [`HitGeometry`].
//!
//! The built-in primitives are one-sided: only surfaces facing the ray count,
//! so a ray that starts inside a volume never hits it.

use glam::Vec3;

use super::state::{Enemy, Player};

/// Distances at or below this are treated as "behind the origin"
const RAY_EPSILON: f32 = 1e-4;

/// A ray with a unit-length direction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Build a ray, normalizing the direction. Returns None for a zero direction.
    pub fn new(origin: Vec3, direction: Vec3) -> Option<Self> {
        direction.try_normalize().map(|direction| Self { origin, direction })
    }

    /// Point at distance `t` along the ray
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Something a ray can hit
pub trait RayTarget {
    /// Nearest positive distance along `ray` where it hits this target
    fn ray_distance(&self, ray: &Ray) -> Option<f32>;
}

impl<F> RayTarget for F
where
    F: Fn(&Ray) -> Option<f32>,
{
    fn ray_distance(&self, ray: &Ray) -> Option<f32> {
        self(ray)
    }
}

/// Geometry collaborator supplied by whoever owns the scene
pub trait HitGeometry {
    /// Every hittable sub-part of the enemy, in world space
    fn enemy_parts(&self, enemy: &Enemy) -> Vec<Box<dyn RayTarget>>;

    /// The player's hittable volume, if any
    fn player_volume(&self, player: &Player) -> Option<Box<dyn RayTarget>>;

    /// The view ray the player's weapon fires along
    fn player_view(&self, player: &Player) -> Ray {
        player.view_ray()
    }
}

/// Nearest hit among all parts (minimum positive distance wins)
pub fn nearest_hit(ray: &Ray, parts: &[Box<dyn RayTarget>]) -> Option<f32> {
    parts
        .iter()
        .filter_map(|part| part.ray_distance(ray))
        .filter(|d| *d > 0.0 && d.is_finite())
        .fold(None, |best: Option<f32>, d| match best {
            Some(b) if b <= d => Some(b),
            _ => Some(d),
        })
}

/// Solid sphere
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
}

impl RayTarget for Sphere {
    fn ray_distance(&self, ray: &Ray) -> Option<f32> {
        let oc = ray.origin - self.center;
        let b = oc.dot(ray.direction);
        let c = oc.length_squared() - self.radius * self.radius;
        let disc = b * b - c;
        if disc < 0.0 {
            return None;
        }
        let near = -b - disc.sqrt();
        (near > RAY_EPSILON).then_some(near)
    }
}

/// Axis-aligned box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn from_center(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }
}

impl RayTarget for Aabb {
    fn ray_distance(&self, ray: &Ray) -> Option<f32> {
        let mut t_min = f32::NEG_INFINITY;
        let mut t_max = f32::INFINITY;

        for axis in 0..3 {
            let o = ray.origin[axis];
            let d = ray.direction[axis];
            let (lo, hi) = (self.min[axis], self.max[axis]);

            if d.abs() < 1e-8 {
                // Parallel to this slab: must already be inside it
                if o < lo || o > hi {
                    return None;
                }
                continue;
            }

            let t1 = (lo - o) / d;
            let t2 = (hi - o) / d;
            t_min = t_min.max(t1.min(t2));
            t_max = t_max.min(t1.max(t2));
            if t_max < t_min {
                return None;
            }
        }

        // t_min <= 0 with t_max > 0 means the origin is inside
        (t_min > RAY_EPSILON).then_some(t_min)
    }
}

/// Capped cylinder standing on the ground plane (vertical axis)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cylinder {
    /// Centre of the bottom cap
    pub base: Vec3,
    pub radius: f32,
    pub height: f32,
}

impl RayTarget for Cylinder {
    fn ray_distance(&self, ray: &Ray) -> Option<f32> {
        let y_lo = self.base.y;
        let y_hi = self.base.y + self.height;
        let ox = ray.origin.x - self.base.x;
        let oz = ray.origin.z - self.base.z;

        let inside = ox * ox + oz * oz < self.radius * self.radius
            && ray.origin.y > y_lo
            && ray.origin.y < y_hi;
        if inside {
            return None;
        }

        let mut best: Option<f32> = None;
        let mut consider = |t: f32| {
            if t > RAY_EPSILON && best.is_none_or(|b| t < b) {
                best = Some(t);
            }
        };

        let (dx, dz) = (ray.direction.x, ray.direction.z);

        // Curved side
        let a = dx * dx + dz * dz;
        if a > 1e-10 {
            let b = ox * dx + oz * dz;
            let c = ox * ox + oz * oz - self.radius * self.radius;
            let disc = b * b - a * c;
            if disc >= 0.0 {
                let s = disc.sqrt();
                for t in [(-b - s) / a, (-b + s) / a] {
                    let y = ray.origin.y + ray.direction.y * t;
                    if y >= y_lo && y <= y_hi {
                        consider(t);
                    }
                }
            }
        }

        // Caps
        if ray.direction.y.abs() > 1e-8 {
            for plane in [y_lo, y_hi] {
                let t = (plane - ray.origin.y) / ray.direction.y;
                let px = ox + dx * t;
                let pz = oz + dz * t;
                if px * px + pz * pz <= self.radius * self.radius {
                    consider(t);
                }
            }
        }

        best
    }
}
