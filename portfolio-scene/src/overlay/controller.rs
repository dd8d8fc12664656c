use bevy::prelude::*;

use super::page::Page;
use crate::engine::assets::portfolio_config::{OverlaySpec, PortfolioConfig};
use crate::engine::loading::progress::LoadingProgress;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState {
    Hidden,
    Visible,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub id: String,
    pub close_button: String,
    pub title: String,
    pub state: PanelState,
}

impl Panel {
    pub fn is_visible(&self) -> bool {
        self.state == PanelState::Visible
    }
}

/// Requests to change panel visibility, from clicks, buttons and keys.
#[derive(Event, Debug, Clone, PartialEq)]
pub enum OverlayCommand {
    Show(String),
    Hide(String),
    /// Escape key.
    HideAllVisible,
    /// Intro "enter" button. Ignored until loading has completed.
    Enter,
}

/// Independent show/hide state per overlay panel.
#[derive(Resource, Default, Debug)]
pub struct OverlayController {
    panels: Vec<Panel>,
}

impl OverlayController {
    pub fn from_specs(specs: &[OverlaySpec]) -> Self {
        let panels = specs
            .iter()
            .map(|spec| Panel {
                id: spec.id.clone(),
                close_button: spec.close_button.clone(),
                title: spec.title.clone(),
                state: if spec.initially_visible {
                    PanelState::Visible
                } else {
                    PanelState::Hidden
                },
            })
            .collect();
        Self { panels }
    }

    /// Returns `true` if the panel was hidden. Unknown ids are ignored.
    pub fn show(&mut self, id: &str) -> bool {
        self.set_state(id, PanelState::Visible)
    }

    /// Returns `true` if the panel was visible. Unknown ids are ignored.
    pub fn hide(&mut self, id: &str) -> bool {
        self.set_state(id, PanelState::Hidden)
    }

    /// Hides every visible panel and returns their ids.
    pub fn hide_all_visible(&mut self) -> Vec<String> {
        self.panels
            .iter_mut()
            .filter(|panel| panel.is_visible())
            .map(|panel| {
                panel.state = PanelState::Hidden;
                panel.id.clone()
            })
            .collect()
    }

    pub fn any_visible(&self) -> bool {
        self.panels.iter().any(Panel::is_visible)
    }

    pub fn state(&self, id: &str) -> Option<PanelState> {
        self.panel(id).map(|panel| panel.state)
    }

    pub fn panel(&self, id: &str) -> Option<&Panel> {
        self.panels.iter().find(|panel| panel.id == id)
    }

    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    fn set_state(&mut self, id: &str, state: PanelState) -> bool {
        match self.panels.iter_mut().find(|panel| panel.id == id) {
            Some(panel) if panel.state != state => {
                panel.state = state;
                true
            }
            _ => false,
        }
    }
}

/// Ordering point so panel commands issued this frame apply this frame.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct OverlayCommandSet;

/// Builds the panels from the resolved config and pushes their initial
/// visibility to the page.
pub fn init_overlays(
    mut commands: Commands,
    mut page: ResMut<Page>,
    config: Res<PortfolioConfig>,
) {
    let controller = OverlayController::from_specs(&config.overlays);
    for panel in controller.panels() {
        page.0.set_overlay_visible(&panel.id, panel.is_visible());
    }
    info!("Registered {} overlay panels", controller.panels().len());
    commands.insert_resource(controller);
}

pub fn apply_overlay_commands(
    mut overlay_commands: EventReader<OverlayCommand>,
    mut controller: ResMut<OverlayController>,
    mut page: ResMut<Page>,
    progress: Res<LoadingProgress>,
) {
    for command in overlay_commands.read() {
        let changed: Vec<(String, bool)> = match command {
            OverlayCommand::Show(id) => visibility_change(controller.show(id), id, true),
            OverlayCommand::Hide(id) => visibility_change(controller.hide(id), id, false),
            OverlayCommand::HideAllVisible => controller
                .hide_all_visible()
                .into_iter()
                .map(|id| (id, false))
                .collect(),
            OverlayCommand::Enter if progress.is_complete() => {
                let intro = constants::overlays::INTRO_OVERLAY;
                visibility_change(controller.hide(intro), intro, false)
            }
            OverlayCommand::Enter => {
                debug!("Enter pressed while still loading");
                Vec::new()
            }
        };

        for (id, visible) in changed {
            debug!("Overlay '{}' visible: {}", id, visible);
            page.0.set_overlay_visible(&id, visible);
        }
    }
}

fn visibility_change(changed: bool, id: &str, visible: bool) -> Vec<(String, bool)> {
    if changed {
        vec![(id.to_string(), visible)]
    } else {
        Vec::new()
    }
}

pub fn escape_key_system(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut overlay_commands: EventWriter<OverlayCommand>,
) {
    if keyboard.just_pressed(KeyCode::Escape) {
        overlay_commands.write(OverlayCommand::HideAllVisible);
    }
}
