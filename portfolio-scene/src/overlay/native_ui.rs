//! Bevy UI rendition of the overlay panels for desktop builds.

use bevy::prelude::*;
use bevy::ui::FocusPolicy;
use constants::overlays::{ENTER_BUTTON_LOADING_LABEL, ENTER_BUTTON_READY_LABEL, INTRO_OVERLAY};

use super::controller::{OverlayCommand, OverlayController};
use crate::engine::core::app_state::FpsText;
use crate::engine::loading::progress::LoadingProgress;

const BACKDROP_COLOR: Color = Color::srgba(0.0, 0.0, 0.0, 0.6);
const PANEL_COLOR: Color = Color::srgb(0.12, 0.12, 0.14);
const BUTTON_COLOR: Color = Color::srgb(0.0, 0.75, 1.0);

/// Full-window node behind a panel. Pressing it hides the panel.
#[derive(Component)]
pub struct OverlayBackdrop {
    pub panel: String,
}

/// Panel body. Blocks presses from reaching the backdrop.
#[derive(Component)]
pub struct OverlayContent;

#[derive(Component)]
pub struct OverlayCloseButton {
    pub panel: String,
}

#[derive(Component)]
pub struct EnterButton;

#[derive(Component)]
pub struct EnterButtonLabel;

pub fn spawn_native_overlays(mut commands: Commands, controller: Res<OverlayController>) {
    for panel in controller.panels() {
        let visibility = if panel.is_visible() {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };

        commands
            .spawn((
                Button,
                Node {
                    position_type: PositionType::Absolute,
                    width: Val::Percent(100.0),
                    height: Val::Percent(100.0),
                    justify_content: JustifyContent::Center,
                    align_items: AlignItems::Center,
                    ..default()
                },
                BackgroundColor(BACKDROP_COLOR),
                visibility,
                OverlayBackdrop {
                    panel: panel.id.clone(),
                },
                Name::new(panel.id.clone()),
            ))
            .with_children(|backdrop| {
                backdrop
                    .spawn((
                        Node {
                            flex_direction: FlexDirection::Column,
                            row_gap: Val::Px(16.0),
                            padding: UiRect::all(Val::Px(24.0)),
                            min_width: Val::Px(320.0),
                            ..default()
                        },
                        BackgroundColor(PANEL_COLOR),
                        Interaction::default(),
                        FocusPolicy::Block,
                        OverlayContent,
                    ))
                    .with_children(|content| {
                        content.spawn((
                            Text::new(panel.title.clone()),
                            TextFont {
                                font_size: 28.0,
                                ..default()
                            },
                        ));
                        if panel.id == INTRO_OVERLAY {
                            content
                                .spawn((button_node(), BackgroundColor(BUTTON_COLOR), EnterButton))
                                .with_child((Text::new(ENTER_BUTTON_LOADING_LABEL), EnterButtonLabel));
                        }
                        content
                            .spawn((
                                button_node(),
                                BackgroundColor(BUTTON_COLOR),
                                OverlayCloseButton {
                                    panel: panel.id.clone(),
                                },
                            ))
                            .with_child(Text::new("Close"));
                    });
            });
    }
}

fn button_node() -> (Button, Node) {
    (
        Button,
        Node {
            padding: UiRect::axes(Val::Px(16.0), Val::Px(8.0)),
            justify_content: JustifyContent::Center,
            ..default()
        },
    )
}

pub fn native_overlay_buttons(
    backdrops: Query<(&Interaction, &OverlayBackdrop), Changed<Interaction>>,
    close_buttons: Query<(&Interaction, &OverlayCloseButton), Changed<Interaction>>,
    enter_buttons: Query<&Interaction, (Changed<Interaction>, With<EnterButton>)>,
    mut overlay_commands: EventWriter<OverlayCommand>,
) {
    for (interaction, backdrop) in &backdrops {
        if *interaction == Interaction::Pressed {
            overlay_commands.write(OverlayCommand::Hide(backdrop.panel.clone()));
        }
    }
    for (interaction, button) in &close_buttons {
        if *interaction == Interaction::Pressed {
            overlay_commands.write(OverlayCommand::Hide(button.panel.clone()));
        }
    }
    if enter_buttons.iter().any(|i| *i == Interaction::Pressed) {
        overlay_commands.write(OverlayCommand::Enter);
    }
}

pub fn sync_native_overlays(
    controller: Res<OverlayController>,
    mut backdrops: Query<(&OverlayBackdrop, &mut Visibility)>,
) {
    if !controller.is_changed() {
        return;
    }
    for (backdrop, mut visibility) in &mut backdrops {
        let visible = controller
            .panel(&backdrop.panel)
            .is_some_and(|panel| panel.is_visible());
        visibility.set_if_neq(if visible {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        });
    }
}

pub fn update_enter_label(
    progress: Res<LoadingProgress>,
    mut labels: Query<&mut Text, With<EnterButtonLabel>>,
) {
    if !progress.is_changed() {
        return;
    }
    let label = if progress.is_complete() {
        ENTER_BUTTON_READY_LABEL
    } else {
        ENTER_BUTTON_LOADING_LABEL
    };
    for mut text in &mut labels {
        if text.0 != label {
            text.0 = label.to_string();
        }
    }
}

pub fn spawn_fps_counter(mut commands: Commands) {
    commands.spawn((
        Text::new("FPS: "),
        TextFont {
            font_size: 16.0,
            ..default()
        },
        TextColor(Color::srgb(1., 0., 0.)),
        Node {
            position_type: PositionType::Absolute,
            bottom: Val::Px(12.0),
            right: Val::Px(12.0),
            ..default()
        },
        FpsText,
    ));
}
