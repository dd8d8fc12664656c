use bevy::prelude::*;

use crate::engine::assets::portfolio_config::ClickableSpec;

/// What happens when a group is clicked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickAction {
    /// Reveal the overlay panel with this id.
    Overlay { panel: String },
    /// Open this URL in a new browsing context.
    ExternalLink { url: String },
}

impl ClickAction {
    /// Short tag used in log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Overlay { .. } => "overlay",
            Self::ExternalLink { .. } => "link",
        }
    }

    pub fn target(&self) -> &str {
        match self {
            Self::Overlay { panel } => panel,
            Self::ExternalLink { url } => url,
        }
    }
}

/// Named set of model meshes sharing one interactive action.
#[derive(Debug, Clone, PartialEq)]
pub struct ClickableGroup {
    pub name: String,
    pub meshes: Vec<Entity>,
    pub action: ClickAction,
}

/// Normalises a glTF node name to the form the clickable table uses:
/// whitespace becomes `_` and the characters `[ ] . : /` are dropped.
pub fn sanitize_node_name(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '[' | ']' | '.' | ':' | '/'))
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .collect()
}

/// Sanitised names a loaded mesh entity answers to.
///
/// A glTF mesh with several primitives spawns one entity per primitive, named
/// `<mesh>.<index>`. Each also answers to `<mesh>`, and from index 1 on to
/// `<mesh>_<index>`, the way the table lists them. The parent node's name is
/// taken whole. Duplicates and empty names are dropped.
pub fn candidate_names(own: Option<&str>, multi_primitive: bool, parent: Option<&str>) -> Vec<String> {
    let mut names: Vec<String> = Vec::with_capacity(4);
    let mut push = |name: String| {
        if !name.is_empty() && !names.contains(&name) {
            names.push(name);
        }
    };

    if let Some(own) = own {
        push(sanitize_node_name(own));
        let primitive = own
            .rsplit_once('.')
            .filter(|_| multi_primitive)
            .and_then(|(mesh, index)| Some((mesh, index.parse::<usize>().ok()?)));
        if let Some((mesh, index)) = primitive {
            let mesh = sanitize_node_name(mesh);
            if index > 0 {
                push(format!("{mesh}_{index}"));
            }
            push(mesh);
        }
    }
    if let Some(parent) = parent {
        push(sanitize_node_name(parent));
    }
    names
}

/// Sorts meshes into groups by exact name match against the table.
///
/// Groups come out in table order. A mesh may land in several groups, but at
/// most once in each. Groups that matched nothing are dropped.
pub fn categorize<I>(table: &[ClickableSpec], meshes: I) -> Vec<ClickableGroup>
where
    I: IntoIterator<Item = (Entity, Vec<String>)>,
{
    let meshes: Vec<(Entity, Vec<String>)> = meshes.into_iter().collect();

    table
        .iter()
        .filter_map(|spec| {
            let members: Vec<Entity> = meshes
                .iter()
                .filter(|(_, names)| names.iter().any(|name| spec.matches(name)))
                .map(|(entity, _)| *entity)
                .collect();

            if members.is_empty() {
                debug!("No meshes matched clickable group '{}'", spec.name);
                return None;
            }

            Some(ClickableGroup {
                name: spec.name.clone(),
                meshes: members,
                action: spec.click_action(),
            })
        })
        .collect()
}
