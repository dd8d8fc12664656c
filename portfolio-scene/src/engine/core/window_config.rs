use bevy::prelude::*;
use bevy::window::PresentMode;

const WINDOW_TITLE: &str = "Portfolio";

pub fn create_window_config() -> Window {
    let window = Window {
        title: WINDOW_TITLE.into(),
        present_mode: PresentMode::AutoVsync,
        // Right-drag and wheel on the canvas must not open the context menu
        // or scroll the page.
        prevent_default_event_handling: true,
        ..default()
    };

    #[cfg(target_arch = "wasm32")]
    {
        Window {
            canvas: Some("#bevy".into()),
            fit_canvas_to_parent: true,
            ..window
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        window
    }
}
