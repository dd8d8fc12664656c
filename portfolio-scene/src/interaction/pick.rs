use bevy::ecs::system::SystemParam;
use bevy::picking::mesh_picking::ray_cast::{MeshRayCast, MeshRayCastSettings};
use bevy::prelude::*;
use bevy::render::primitives::Aabb;

use super::clickable::ClickableGroup;
use super::ray::ray_hits_obb;
use crate::engine::assets::portfolio_config::{PickPrecision, PortfolioConfig};

/// Answers whether a ray touches any entity in a mesh list.
pub trait HitTester {
    fn hits_any(&mut self, ray: Ray3d, meshes: &[Entity]) -> bool;
}

/// Registered clickable groups, in registration order.
///
/// Populated once the model has been categorised and read-only afterwards.
#[derive(Resource, Default, Debug)]
pub struct PickController {
    groups: Vec<ClickableGroup>,
}

impl PickController {
    /// Append a group. Groups without meshes are ignored.
    pub fn register(&mut self, group: ClickableGroup) {
        if group.meshes.is_empty() {
            return;
        }
        info!(
            "Registered clickable group '{}' ({} meshes, {})",
            group.name,
            group.meshes.len(),
            group.action.kind()
        );
        self.groups.push(group);
    }

    pub fn groups(&self) -> &[ClickableGroup] {
        &self.groups
    }

    pub fn group(&self, name: &str) -> Option<&ClickableGroup> {
        self.groups.iter().find(|group| group.name == name)
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn clear(&mut self) {
        self.groups.clear();
    }

    /// First group, in registration order, with any mesh under the ray.
    ///
    /// Groups are not ranked by hit distance: when meshes of two groups
    /// overlap on screen the earlier-registered group wins.
    pub fn pick<T: HitTester + ?Sized>(&self, ray: Ray3d, tester: &mut T) -> Option<&ClickableGroup> {
        self.groups
            .iter()
            .filter(|group| !group.meshes.is_empty())
            .find(|group| tester.hits_any(ray, &group.meshes))
    }
}

/// Scene-backed hit tester. Uses triangle ray casts or bounding boxes
/// depending on `picking.precision`.
#[derive(SystemParam)]
pub struct GroupPicker<'w, 's> {
    mesh_ray_cast: MeshRayCast<'w, 's>,
    bounds: Query<'w, 's, (&'static Aabb, &'static GlobalTransform)>,
    config: Res<'w, PortfolioConfig>,
}

impl HitTester for GroupPicker<'_, '_> {
    fn hits_any(&mut self, ray: Ray3d, meshes: &[Entity]) -> bool {
        match self.config.picking.precision {
            PickPrecision::Mesh => {
                let filter = |entity: Entity| meshes.contains(&entity);
                let settings = MeshRayCastSettings::default()
                    .with_filter(&filter)
                    .always_early_exit();
                !self.mesh_ray_cast.cast_ray(ray, &settings).is_empty()
            }
            PickPrecision::Bounds => BoundsHitTester {
                bounds: &self.bounds,
            }
            .hits_any(ray, meshes),
        }
    }
}

/// Oriented bounding box tester over `Aabb` + `GlobalTransform`.
pub struct BoundsHitTester<'q, 'w, 's> {
    pub bounds: &'q Query<'w, 's, (&'static Aabb, &'static GlobalTransform)>,
}

impl HitTester for BoundsHitTester<'_, '_, '_> {
    fn hits_any(&mut self, ray: Ray3d, meshes: &[Entity]) -> bool {
        meshes.iter().any(|&entity| {
            self.bounds.get(entity).is_ok_and(|(aabb, xf)| {
                ray_hits_obb(
                    ray.origin,
                    ray.direction.as_vec3(),
                    xf,
                    Vec3::from(aabb.center),
                    Vec3::from(aabb.half_extents),
                )
                .is_some()
            })
        })
    }
}
