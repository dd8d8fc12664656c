use bevy::prelude::*;
use constants::clickables::{ActionKind, CLICKABLE_MAP};
use constants::overlays::OVERLAY_MAP;
use constants::{assets, camera, render_settings};
use serde::{Deserialize, Serialize};

use crate::interaction::clickable::{ClickAction, sanitize_node_name};

/// Runtime configuration. Loaded from `portfolio.json` when present; every
/// missing field falls back to the compiled defaults in the `constants` crate.
#[derive(Asset, TypePath, Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PortfolioConfig {
    pub model: ModelConfig,
    pub environment: EnvironmentConfig,
    pub camera: CameraConfig,
    pub lights: LightsConfig,
    pub highlight: HighlightConfig,
    pub picking: PickingConfig,
    pub clickables: Vec<ClickableSpec>,
    pub overlays: Vec<OverlaySpec>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ModelConfig {
    pub primary: String,
    pub fallback: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EnvironmentConfig {
    pub path: String,
    pub face_size: u32,
    pub intensity: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CameraConfig {
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub position: [f32; 3],
    pub target: [f32; 3],
    pub exposure: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LightsConfig {
    pub ambient_color: u32,
    pub ambient_brightness: f32,
    pub directional_color: u32,
    pub directional_illuminance: f32,
    pub directional_position: [f32; 3],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HighlightConfig {
    pub scale_factor: f32,
    pub color: u32,
    pub opacity: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PickingConfig {
    pub precision: PickPrecision,
    pub click_drag_tolerance: f32,
}

/// How a pointer ray is tested against a group's meshes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PickPrecision {
    /// Ray against every triangle.
    #[default]
    Mesh,
    /// Ray against each mesh's oriented bounding box.
    Bounds,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionTag {
    Overlay,
    Link,
}

/// One row of the clickable table as written in JSON:
/// `{"name": "books", "meshNames": [...], "action": "link", "target": "https://..."}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClickableSpec {
    pub name: String,
    pub mesh_names: Vec<String>,
    pub action: ActionTag,
    pub target: String,
}

impl ClickableSpec {
    pub fn click_action(&self) -> ClickAction {
        match self.action {
            ActionTag::Overlay => ClickAction::Overlay {
                panel: self.target.clone(),
            },
            ActionTag::Link => ClickAction::ExternalLink {
                url: self.target.clone(),
            },
        }
    }

    /// `mesh_name` is already sanitised. Table entries are sanitised too so
    /// hand-written configs may use raw Blender names.
    pub fn matches(&self, mesh_name: &str) -> bool {
        self.mesh_names
            .iter()
            .any(|name| sanitize_node_name(name) == mesh_name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlaySpec {
    pub id: String,
    pub close_button: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub initially_visible: bool,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            model: ModelConfig::default(),
            environment: EnvironmentConfig::default(),
            camera: CameraConfig::default(),
            lights: LightsConfig::default(),
            highlight: HighlightConfig::default(),
            picking: PickingConfig::default(),
            clickables: default_clickables(),
            overlays: default_overlays(),
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            primary: assets::PRIMARY_MODEL_PATH.to_string(),
            fallback: assets::FALLBACK_MODEL_PATH.to_string(),
        }
    }
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            path: assets::ENVIRONMENT_PATH.to_string(),
            face_size: assets::ENVIRONMENT_FACE_SIZE,
            intensity: assets::ENVIRONMENT_INTENSITY,
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_degrees: camera::FOV_DEGREES,
            near: camera::NEAR,
            far: camera::FAR,
            position: camera::POSITION.to_array(),
            target: camera::TARGET.to_array(),
            exposure: render_settings::TONE_MAPPING_EXPOSURE,
        }
    }
}

impl Default for LightsConfig {
    fn default() -> Self {
        Self {
            ambient_color: color_to_hex(render_settings::AMBIENT_COLOR),
            ambient_brightness: render_settings::AMBIENT_BRIGHTNESS,
            directional_color: color_to_hex(render_settings::DIRECTIONAL_COLOR),
            directional_illuminance: render_settings::DIRECTIONAL_ILLUMINANCE,
            directional_position: render_settings::DIRECTIONAL_POSITION.to_array(),
        }
    }
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            scale_factor: render_settings::HIGHLIGHT_SCALE_FACTOR,
            color: render_settings::HIGHLIGHT_COLOR_HEX,
            opacity: render_settings::HIGHLIGHT_OPACITY,
        }
    }
}

impl Default for PickingConfig {
    fn default() -> Self {
        Self {
            precision: PickPrecision::default(),
            click_drag_tolerance: camera::CLICK_DRAG_TOLERANCE,
        }
    }
}

fn default_clickables() -> Vec<ClickableSpec> {
    CLICKABLE_MAP
        .iter()
        .map(|info| ClickableSpec {
            name: info.name.to_string(),
            mesh_names: info.mesh_names.iter().map(|name| name.to_string()).collect(),
            action: match info.action {
                ActionKind::Overlay => ActionTag::Overlay,
                ActionKind::Link => ActionTag::Link,
            },
            target: info.target.to_string(),
        })
        .collect()
}

fn default_overlays() -> Vec<OverlaySpec> {
    OVERLAY_MAP
        .iter()
        .map(|info| OverlaySpec {
            id: info.id.to_string(),
            close_button: info.close_button.to_string(),
            title: info.title.to_string(),
            initially_visible: info.initially_visible,
        })
        .collect()
}

/// `0xRRGGBB` to an sRGB colour.
pub fn hex_to_color(hex: u32) -> Color {
    Color::srgb_u8((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
}

fn color_to_hex(color: Color) -> u32 {
    let [r, g, b, _] = color.to_srgba().to_u8_array();
    (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_mirror_the_compiled_tables() {
        let config = PortfolioConfig::default();
        assert_eq!(config.clickables.len(), CLICKABLE_MAP.len());
        assert_eq!(config.clickables[0].name, "greenFolder");
        assert_eq!(config.overlays.len(), OVERLAY_MAP.len());
        assert_eq!(config.lights.ambient_color, 0xFFFFFF);
        assert_eq!(config.highlight.color, 0x00BFFF);
    }

    #[test]
    fn partial_document_keeps_defaults_for_missing_fields() {
        let config: PortfolioConfig = serde_json::from_str(
            r#"{"model": {"fallback": "release://other.glb"}, "picking": {"precision": "bounds"}}"#,
        )
        .unwrap();

        assert_eq!(config.model.primary, assets::PRIMARY_MODEL_PATH);
        assert_eq!(config.model.fallback, "release://other.glb");
        assert_eq!(config.picking.precision, PickPrecision::Bounds);
        assert_eq!(config.clickables, default_clickables());
    }

    #[test]
    fn action_tag_maps_to_variant() {
        let rows: Vec<ClickableSpec> = serde_json::from_str(
            r#"[
                {"name": "greenFolder", "meshNames": ["grh"], "action": "overlay", "target": "resume-overlay"},
                {"name": "movieNumber", "meshNames": ["Movie_numberator"], "action": "link", "target": "https://www.imdb.com/"}
            ]"#,
        )
        .unwrap();

        assert_eq!(
            rows[0].click_action(),
            ClickAction::Overlay {
                panel: "resume-overlay".to_string()
            }
        );
        assert_eq!(
            rows[1].click_action(),
            ClickAction::ExternalLink {
                url: "https://www.imdb.com/".to_string()
            }
        );
    }

    #[test]
    fn raw_blender_names_in_config_still_match() {
        let row: ClickableSpec = serde_json::from_str(
            r#"{"name": "books", "meshNames": ["Cube.066"], "action": "link", "target": "https://example.com"}"#,
        )
        .unwrap();
        assert!(row.matches("Cube066"));
        assert!(!row.matches("Cube.066"));
    }

    #[test]
    fn unknown_action_tag_is_rejected() {
        let row = serde_json::from_str::<ClickableSpec>(
            r#"{"name": "x", "meshNames": [], "action": "teleport", "target": ""}"#,
        );
        assert!(row.is_err());
    }

    #[test]
    fn hex_colour_round_trips() {
        assert_eq!(color_to_hex(hex_to_color(0x00BFFF)), 0x00BFFF);
    }
}
