use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

/// Marks entities added to the scene at runtime through `SceneHost`.
#[derive(Component)]
pub struct SceneObject;

/// Add/remove access to the rendered scene.
///
/// Objects added here are top-level: their `Transform` is a world transform.
#[derive(SystemParam)]
pub struct SceneHost<'w, 's> {
    commands: Commands<'w, 's>,
}

impl SceneHost<'_, '_> {
    pub fn add(&mut self, bundle: impl Bundle) -> Entity {
        self.commands.spawn((bundle, SceneObject)).id()
    }

    /// Despawns `entity` and its children. Unknown entities are ignored.
    pub fn remove(&mut self, entity: Entity) {
        if let Ok(mut entity_commands) = self.commands.get_entity(entity) {
            entity_commands.despawn();
        }
    }
}
