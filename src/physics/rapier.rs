use bevy_rapier3d::prelude::{CollisionGroups, Group, QueryFilter, RapierContext};
use glam::Vec3;

use crate::physics::{RayCaster, RayHit};

impl RayCaster for RapierContext {
    fn cast_ray(
        &self,
        origin: Vec3,
        direction: Vec3,
        max_distance: f32,
        filter: Group,
    ) -> Option<RayHit> {
        let direction = direction.try_normalize()?;
        if max_distance.is_nan() || max_distance < 0.0 {
            return None;
        }

        let query = QueryFilter::new().groups(CollisionGroups::new(Group::ALL, filter));
        let (_, hit) = self.cast_ray_and_get_normal(origin, direction, max_distance, true, query)?;
        Some(RayHit {
            distance: hit.time_of_impact,
            point: hit.point,
            normal: hit.normal,
        })
    }
}
