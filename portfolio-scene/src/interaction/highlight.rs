use bevy::pbr::{NotShadowCaster, NotShadowReceiver};
use bevy::prelude::*;
use bevy::render::render_resource::Face;

use super::clickable::ClickableGroup;
use crate::engine::assets::portfolio_config::{HighlightConfig, hex_to_color};
use crate::engine::scene::host::SceneHost;
use crate::overlay::page::CursorStyle;

/// Marks a transient outline duplicate and the model mesh it shadows.
#[derive(Component, Debug)]
pub struct OutlineMesh {
    pub source: Entity,
}

/// Material shared by every outline duplicate.
#[derive(Resource)]
pub struct OutlineMaterial(pub Handle<StandardMaterial>);

/// Unlit, translucent, front faces culled so only the enlarged shell's back
/// faces show around the original mesh.
pub fn outline_material(config: &HighlightConfig) -> StandardMaterial {
    StandardMaterial {
        base_color: hex_to_color(config.color).with_alpha(config.opacity),
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        cull_mode: Some(Face::Front),
        ..default()
    }
}

/// Which group the pointer is over and the outline entities that belong to it.
#[derive(Resource, Default, Debug)]
pub struct HighlightState {
    hovered: Option<String>,
    outlines: Vec<Entity>,
}

impl HighlightState {
    pub fn hovered(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    pub fn outlines(&self) -> &[Entity] {
        &self.outlines
    }

    pub fn cursor(&self) -> CursorStyle {
        if self.hovered.is_some() {
            CursorStyle::Pointer
        } else {
            CursorStyle::Default
        }
    }

    /// Records the hovered group. Returns `true` when it differs from before.
    pub fn set_hovered(&mut self, group: Option<&str>) -> bool {
        if self.hovered.as_deref() == group {
            return false;
        }
        self.hovered = group.map(str::to_string);
        true
    }

    /// Despawns every tracked outline. Returns how many were released.
    pub fn release(&mut self, host: &mut SceneHost) -> usize {
        let released = self.outlines.len();
        for outline in self.outlines.drain(..) {
            host.remove(outline);
        }
        released
    }

    /// Spawns one outline per group mesh that has geometry and a world
    /// transform. Meshes missing either are skipped.
    pub fn acquire(
        &mut self,
        host: &mut SceneHost,
        group: &ClickableGroup,
        sources: &Query<(&Mesh3d, &GlobalTransform)>,
        material: &Handle<StandardMaterial>,
        scale_factor: f32,
    ) {
        for &source in &group.meshes {
            let Ok((mesh, xf)) = sources.get(source) else {
                continue;
            };
            let outline = host.add((
                Mesh3d(mesh.0.clone()),
                MeshMaterial3d(material.clone()),
                outline_transform(xf, scale_factor),
                NotShadowCaster,
                NotShadowReceiver,
                OutlineMesh { source },
                Name::new(format!("outline_{}", group.name)),
            ));
            self.outlines.push(outline);
        }
    }

    /// Drops hover and outlines, as on controller teardown.
    pub fn teardown(&mut self, host: &mut SceneHost) {
        self.release(host);
        self.hovered = None;
    }
}

/// World transform of `source`, scaled up about its own origin.
pub fn outline_transform(source: &GlobalTransform, scale_factor: f32) -> Transform {
    let (scale, rotation, translation) = source.to_scale_rotation_translation();
    Transform {
        translation,
        rotation,
        scale: scale * scale_factor,
    }
}
