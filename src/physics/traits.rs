use bevy_rapier3d::prelude::Group;
use glam::Vec3;

/// Closest intersection returned by a ray query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Distance along the ray [m]
    pub distance: f32,
    /// World-space hit point
    pub point: Vec3,
    /// World-space surface normal at the hit
    pub normal: Vec3,
}

/// Query interface onto whatever holds the collision geometry.
///
/// Implementations must be pure: the same query against unchanged geometry
/// returns the same answer.
pub trait RayCaster {
    /// Cast a ray from `origin` along `direction` and return the closest hit
    /// within `max_distance` on any collider whose memberships intersect `filter`.
    ///
    /// `direction` does not need to be normalized; distances in the returned
    /// hit are measured in world units along the normalized direction. Rays
    /// starting inside a collider hit it at distance zero.
    fn cast_ray(&self, origin: Vec3, direction: Vec3, max_distance: f32, filter: Group)
        -> Option<RayHit>;
}

/// A missing collision world answers every query with a miss.
impl<R: RayCaster + ?Sized> RayCaster for Option<&R> {
    fn cast_ray(
        &self,
        origin: Vec3,
        direction: Vec3,
        max_distance: f32,
        filter: Group,
    ) -> Option<RayHit> {
        self.and_then(|caster| caster.cast_ray(origin, direction, max_distance, filter))
    }
}
