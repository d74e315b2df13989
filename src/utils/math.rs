use glam::{EulerRot, Quat, Vec3};

/// Clamp an interpolation factor into `[0, 1]`. NaN maps to 0.
#[inline]
pub fn clamp01(t: f32) -> f32 {
    if t.is_nan() {
        0.0
    } else {
        t.clamp(0.0, 1.0)
    }
}

/// Project a direction onto the horizontal (XZ) plane and normalize it.
///
/// Returns `None` when nothing is left after the projection, e.g. for a camera
/// looking straight down.
pub fn horizontal(direction: Vec3) -> Option<Vec3> {
    Vec3::new(direction.x, 0.0, direction.z).try_normalize()
}

/// Yaw about +Y (radians) that turns the local forward axis (-Z) onto `direction`.
#[inline]
pub fn heading_yaw(direction: Vec3) -> f32 {
    f32::atan2(-direction.x, -direction.z)
}

/// Yaw component of an orientation, using the same YXZ order as [`tilt_rotation`].
#[inline]
pub fn yaw_of(rotation: Quat) -> f32 {
    let (yaw, _pitch, _roll) = rotation.to_euler(EulerRot::YXZ);
    yaw
}

/// Rotate `from` toward `to` by at most `max_degrees`, landing exactly on `to`
/// when it is within reach.
pub fn rotate_towards(from: Quat, to: Quat, max_degrees: f32) -> Quat {
    let angle = from.angle_between(to);
    if angle <= f32::EPSILON {
        return to;
    }

    let max_step = max_degrees.max(0.0).to_radians();
    if max_step >= angle {
        return to;
    }

    from.slerp(to, max_step / angle).normalize()
}

/// Orientation built from a heading, a nose-down pitch and a roll.
///
/// Rotations are applied roll first, then pitch, then yaw. A positive
/// `pitch_down_deg` dips the nose (-Z) toward the ground and a negative
/// `roll_deg` drops the right side (+X).
pub fn tilt_rotation(yaw: f32, pitch_down_deg: f32, roll_deg: f32) -> Quat {
    Quat::from_euler(
        EulerRot::YXZ,
        yaw,
        -pitch_down_deg.to_radians(),
        roll_deg.to_radians(),
    )
}
