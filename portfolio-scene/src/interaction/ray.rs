use bevy::prelude::*;

/// Screen position (logical pixels, origin top-left) to normalised device
/// coordinates (`[-1, 1]`, y up).
pub fn pointer_to_ndc(pointer: Vec2, viewport: Vec2) -> Vec2 {
    Vec2::new(
        (pointer.x / viewport.x) * 2.0 - 1.0,
        -(pointer.y / viewport.y) * 2.0 + 1.0,
    )
}

/// World-space ray from the camera through a screen position.
///
/// Unprojects the NDC point on the near plane (z = 1 under reverse-z) and
/// towards the far plane. Returns `None` for a degenerate viewport.
pub fn pointer_ray(
    pointer: Vec2,
    viewport: Vec2,
    camera_transform: &GlobalTransform,
    clip_from_view: Mat4,
) -> Option<Ray3d> {
    if viewport.x <= 0.0 || viewport.y <= 0.0 {
        return None;
    }
    let ndc = pointer_to_ndc(pointer, viewport);
    let world_from_clip = camera_transform.compute_matrix() * clip_from_view.inverse();

    let near = world_from_clip.project_point3(ndc.extend(1.0));
    let far = world_from_clip.project_point3(ndc.extend(f32::EPSILON));
    if !near.is_finite() || !far.is_finite() {
        return None;
    }

    let direction = Dir3::new(far - near).ok()?;
    Some(Ray3d::new(near, direction))
}

/// Ray against a box given in the local space of `xf`.
pub fn ray_hits_obb(
    origin: Vec3,
    dir: Vec3,
    xf: &GlobalTransform,
    center: Vec3,
    half_extents: Vec3,
) -> Option<f32> {
    let inv = xf.compute_matrix().inverse();
    let o_local = inv.transform_point3(origin);
    let d_local = inv.transform_vector3(dir);
    ray_aabb_hit_t(o_local, d_local, center - half_extents, center + half_extents)
}

// Slab-method ray–AABB intersection, returns Some(t) or None
pub fn ray_aabb_hit_t(ray_origin: Vec3, ray_direction: Vec3, min: Vec3, max: Vec3) -> Option<f32> {
    let inv = Vec3::new(
        if ray_direction.x != 0.0 { 1.0 / ray_direction.x } else { f32::INFINITY },
        if ray_direction.y != 0.0 { 1.0 / ray_direction.y } else { f32::INFINITY },
        if ray_direction.z != 0.0 { 1.0 / ray_direction.z } else { f32::INFINITY },
    );

    let (mut tmin, mut tmax) = ((min.x - ray_origin.x) * inv.x, (max.x - ray_origin.x) * inv.x);
    if tmin > tmax { std::mem::swap(&mut tmin, &mut tmax); }

    let (mut tymin, mut tymax) = ((min.y - ray_origin.y) * inv.y, (max.y - ray_origin.y) * inv.y);
    if tymin > tymax { std::mem::swap(&mut tymin, &mut tymax); }

    if (tmin > tymax) || (tymin > tmax) { return None; }
    if tymin > tmin { tmin = tymin; }
    if tymax < tmax { tmax = tymax; }

    let (mut tzmin, mut tzmax) = ((min.z - ray_origin.z) * inv.z, (max.z - ray_origin.z) * inv.z);
    if tzmin > tzmax { std::mem::swap(&mut tzmin, &mut tzmax); }

    if (tmin > tzmax) || (tzmin > tmax) { return None; }
    if tzmin > tmin { tmin = tzmin; }
    if tzmax < tmax { tmax = tzmax; }

    if tmax < 0.0 { return None; }
    Some(if tmin >= 0.0 { tmin } else { tmax })
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::render::camera::CameraProjection;

    fn projection() -> Mat4 {
        let perspective = PerspectiveProjection {
            fov: 60f32.to_radians(),
            aspect_ratio: 1.0,
            near: 0.1,
            far: 100.0,
            ..default()
        };
        perspective.get_clip_from_view()
    }

    #[test]
    fn ndc_corners() {
        let viewport = Vec2::new(800.0, 600.0);
        assert_eq!(pointer_to_ndc(Vec2::ZERO, viewport), Vec2::new(-1.0, 1.0));
        assert_eq!(pointer_to_ndc(viewport, viewport), Vec2::new(1.0, -1.0));
        assert_eq!(pointer_to_ndc(viewport * 0.5, viewport), Vec2::ZERO);
    }

    #[test]
    fn centre_ray_follows_camera_forward() {
        let camera = GlobalTransform::from(
            Transform::from_xyz(0.0, 0.0, 5.0).looking_at(Vec3::ZERO, Vec3::Y),
        );
        let viewport = Vec2::splat(500.0);
        let ray = pointer_ray(viewport * 0.5, viewport, &camera, projection()).unwrap();

        assert!(ray.direction.as_vec3().abs_diff_eq(Vec3::NEG_Z, 1e-4));
        assert!((ray.origin.z - 4.9).abs() < 1e-3);
    }

    #[test]
    fn left_edge_ray_leans_left() {
        let camera = GlobalTransform::IDENTITY;
        let viewport = Vec2::splat(500.0);
        let ray = pointer_ray(Vec2::new(0.0, 250.0), viewport, &camera, projection()).unwrap();
        assert!(ray.direction.x < 0.0);
        assert!(ray.direction.y.abs() < 1e-4);
    }

    #[test]
    fn empty_viewport_has_no_ray() {
        assert!(pointer_ray(Vec2::ZERO, Vec2::ZERO, &GlobalTransform::IDENTITY, projection()).is_none());
    }

    #[test]
    fn obb_respects_rotation_and_centre() {
        let xf = GlobalTransform::from(
            Transform::from_xyz(0.0, 0.0, -5.0).with_rotation(Quat::from_rotation_y(0.7)),
        );
        let hit = ray_hits_obb(Vec3::ZERO, Vec3::NEG_Z, &xf, Vec3::ZERO, Vec3::splat(0.5));
        assert!(hit.is_some());

        let miss = ray_hits_obb(Vec3::ZERO, Vec3::NEG_Z, &xf, Vec3::new(3.0, 0.0, 0.0), Vec3::splat(0.5));
        assert!(miss.is_none());
    }

    #[test]
    fn box_behind_the_ray_is_missed() {
        let hit = ray_aabb_hit_t(Vec3::ZERO, Vec3::Z, Vec3::new(-1.0, -1.0, -3.0), Vec3::new(1.0, 1.0, -2.0));
        assert!(hit.is_none());
    }
}
