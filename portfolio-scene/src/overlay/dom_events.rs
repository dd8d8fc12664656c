use bevy::prelude::*;
use std::sync::{Arc, Mutex};

use super::controller::OverlayCommand;

/// Commands raised by DOM callbacks, drained into the ECS each frame.
#[derive(Resource, Clone, Default)]
pub struct DomCommandQueue(pub Arc<Mutex<Vec<OverlayCommand>>>);

impl DomCommandQueue {
    pub fn push(&self, command: OverlayCommand) {
        if let Ok(mut queue) = self.0.lock() {
            queue.push(command);
        }
    }

    fn take(&self) -> Vec<OverlayCommand> {
        self.0
            .lock()
            .map(|mut queue| std::mem::take(&mut *queue))
            .unwrap_or_default()
    }
}

pub fn drain_dom_commands(
    queue: Option<Res<DomCommandQueue>>,
    mut overlay_commands: EventWriter<OverlayCommand>,
) {
    let Some(queue) = queue else {
        return;
    };
    for command in queue.take() {
        overlay_commands.write(command);
    }
}

/// Hooks close buttons, backdrops, the enter button and the escape key.
#[cfg(target_arch = "wasm32")]
pub fn setup_dom_listeners(
    mut commands: Commands,
    controller: Res<super::controller::OverlayController>,
) {
    use constants::overlays::ENTER_BUTTON;
    use wasm_bindgen::prelude::*;
    use web_sys::{Element, Event, KeyboardEvent, window};

    let queue = DomCommandQueue::default();
    let Some(document) = window().and_then(|window| window.document()) else {
        warn!("No document available, overlay controls disabled");
        commands.insert_resource(queue);
        return;
    };

    fn listen(
        target: &web_sys::EventTarget,
        kind: &str,
        closure: Closure<dyn FnMut(web_sys::Event)>,
    ) {
        if let Err(e) =
            target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
        {
            warn!("Failed to register {} listener: {:?}", kind, e);
        }
        // Handed to JS for the lifetime of the page.
        closure.forget();
    }

    for panel in controller.panels() {
        if let Some(button) = document.get_element_by_id(&panel.close_button) {
            let queue = queue.clone();
            let id = panel.id.clone();
            let closure = Closure::wrap(Box::new(move |_event: Event| {
                queue.push(OverlayCommand::Hide(id.clone()));
            }) as Box<dyn FnMut(Event)>);
            listen(&button, "click", closure);
        }

        if let Some(backdrop) = document.get_element_by_id(&panel.id) {
            let queue = queue.clone();
            let id = panel.id.clone();
            let closure = Closure::wrap(Box::new(move |event: Event| {
                // Presses on the panel content bubble up with a different target.
                let on_backdrop = event
                    .target()
                    .and_then(|target| target.dyn_into::<Element>().ok())
                    .is_some_and(|element| element.id() == id);
                if on_backdrop {
                    queue.push(OverlayCommand::Hide(id.clone()));
                }
            }) as Box<dyn FnMut(Event)>);
            listen(&backdrop, "mousedown", closure);
        }
    }

    if let Some(enter) = document.get_element_by_id(ENTER_BUTTON) {
        let queue = queue.clone();
        let closure = Closure::wrap(Box::new(move |_event: Event| {
            queue.push(OverlayCommand::Enter);
        }) as Box<dyn FnMut(Event)>);
        listen(&enter, "click", closure);
    }

    {
        let queue = queue.clone();
        let closure = Closure::wrap(Box::new(move |event: Event| {
            let escape = event
                .dyn_into::<KeyboardEvent>()
                .is_ok_and(|key| key.key() == "Escape");
            if escape {
                queue.push(OverlayCommand::HideAllVisible);
            }
        }) as Box<dyn FnMut(Event)>);
        listen(&document, "keydown", closure);
    }

    commands.insert_resource(queue);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queued_commands_become_events_once() {
        let queue = DomCommandQueue::default();
        let mut app = App::new();
        app.add_event::<OverlayCommand>()
            .insert_resource(queue.clone())
            .add_systems(Update, drain_dom_commands);

        queue.push(OverlayCommand::Hide("resume-overlay".to_string()));
        queue.push(OverlayCommand::HideAllVisible);
        app.update();

        let events = app.world().resource::<Events<OverlayCommand>>();
        let mut cursor = events.get_cursor();
        let sent: Vec<_> = cursor.read(events).cloned().collect();
        assert_eq!(
            sent,
            vec![
                OverlayCommand::Hide("resume-overlay".to_string()),
                OverlayCommand::HideAllVisible,
            ]
        );
        assert!(queue.take().is_empty());
    }
}
