//! Window event source backed by `gloo-events`

use gloo_events::EventListener;
use history_guard_core::{EventSource, Handler, PageEventKind};
use web_sys::Window;

pub struct WindowEvents {
    window: Window,
}

impl WindowEvents {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl EventSource for WindowEvents {
    type Registration = EventListener;

    fn listen(&self, kind: PageEventKind, mut handler: Handler) -> EventListener {
        EventListener::new(&self.window, kind.event_name(), move |_event| handler())
    }

    fn already_loaded(&self) -> bool {
        self.window
            .document()
            .is_some_and(|document| document.ready_state() == "complete")
    }
}
