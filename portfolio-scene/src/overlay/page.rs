//! The page the scene is embedded in.
//!
//! On the web this is the DOM around the canvas. Native builds draw overlays
//! with Bevy UI and apply the cursor to the window, so their surface only logs.

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorStyle {
    #[default]
    Default,
    Pointer,
}

impl CursorStyle {
    /// Inline `cursor` value for the body. `None` clears it so the page's
    /// stylesheet applies again.
    pub fn css(&self) -> Option<&'static str> {
        match self {
            Self::Default => None,
            Self::Pointer => Some("pointer"),
        }
    }
}

/// Side effects the scene has on its surroundings. Missing elements are
/// silently ignored by every implementation.
pub trait PageSurface: Send + Sync {
    fn set_overlay_visible(&mut self, id: &str, visible: bool);
    fn set_cursor(&mut self, cursor: CursorStyle);
    /// Open `url` in a new browsing context.
    fn open_link(&mut self, url: &str);
    /// Make the intro enter button usable.
    fn mark_loading_complete(&mut self);
}

#[derive(Resource)]
pub struct Page(pub Box<dyn PageSurface>);

impl Default for Page {
    fn default() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            Self(Box::new(DomSurface))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Self(Box::new(NativeSurface))
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use dom::DomSurface;

#[cfg(target_arch = "wasm32")]
mod dom {
    use super::{CursorStyle, PageSurface};
    use bevy::prelude::*;
    use constants::overlays::{
        ENTER_BUTTON, ENTER_BUTTON_LOADING_CLASS, ENTER_BUTTON_READY_LABEL,
    };
    use wasm_bindgen::JsCast;
    use web_sys::{Document, HtmlElement, window};

    /// Drives the overlay markup that ships with the host page.
    pub struct DomSurface;

    fn document() -> Option<Document> {
        window()?.document()
    }

    fn html_element(id: &str) -> Option<HtmlElement> {
        document()?
            .get_element_by_id(id)?
            .dyn_into::<HtmlElement>()
            .ok()
    }

    impl PageSurface for DomSurface {
        fn set_overlay_visible(&mut self, id: &str, visible: bool) {
            let Some(panel) = html_element(id) else {
                debug!("Overlay element '{}' not in page", id);
                return;
            };
            let display = if visible { "flex" } else { "none" };
            if let Err(e) = panel.style().set_property("display", display) {
                warn!("Failed to toggle overlay '{}': {:?}", id, e);
            }
        }

        fn set_cursor(&mut self, cursor: CursorStyle) {
            let Some(body) = document().and_then(|document| document.body()) else {
                return;
            };
            let style = body.style();
            let result = match cursor.css() {
                Some(value) => style.set_property("cursor", value),
                None => style.remove_property("cursor").map(drop),
            };
            if let Err(e) = result {
                debug!("Failed to set cursor: {:?}", e);
            }
        }

        fn open_link(&mut self, url: &str) {
            let Some(window) = window() else {
                return;
            };
            if let Err(e) = window.open_with_url_and_target(url, "_blank") {
                warn!("Failed to open {}: {:?}", url, e);
            }
        }

        fn mark_loading_complete(&mut self) {
            let Some(button) = html_element(ENTER_BUTTON) else {
                return;
            };
            let _ = button.class_list().remove_1(ENTER_BUTTON_LOADING_CLASS);
            button.set_text_content(Some(ENTER_BUTTON_READY_LABEL));
        }
    }
}

/// Native stand-in. Panels and the cursor are applied by ECS systems.
#[cfg(not(target_arch = "wasm32"))]
pub struct NativeSurface;

#[cfg(not(target_arch = "wasm32"))]
impl PageSurface for NativeSurface {
    fn set_overlay_visible(&mut self, id: &str, visible: bool) {
        debug!("Overlay '{}' visible: {}", id, visible);
    }

    fn set_cursor(&mut self, cursor: CursorStyle) {
        debug!("Cursor: {:?}", cursor);
    }

    fn open_link(&mut self, url: &str) {
        info!("Open link (new tab on the web build): {}", url);
    }

    fn mark_loading_complete(&mut self) {
        debug!("Loading complete");
    }
}
