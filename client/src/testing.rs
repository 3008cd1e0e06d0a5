use crate::view::{Action, NoticeKind, SessionView};
use parking_lot::Mutex;
use std::collections::HashSet;
use std::time::Duration;
use time::OffsetDateTime;

//--------------------------------------------------------------------------------------------------
// A view that records everything it is asked to draw
//--------------------------------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Dashboard(String),
    Login,
    Remaining(String),
    Notice(NoticeKind, String),
    Busy(Action, bool),
}

#[derive(Default)]
pub struct RecordingView {
    events: Mutex<Vec<Event>>,
    busy: Mutex<HashSet<Action>>,
}

impl RecordingView {
    pub fn events(&self) -> Vec<Event> {
        self.events.lock().clone()
    }

    // Everything except the per-second countdown
    pub fn transitions(&self) -> Vec<Event> {
        self.events
            .lock()
            .iter()
            .filter(|event| !matches!(event, Event::Remaining(_)))
            .cloned()
            .collect()
    }

    pub fn notices(&self) -> Vec<(NoticeKind, String)> {
        self.events
            .lock()
            .iter()
            .filter_map(|event| match event {
                Event::Notice(kind, text) => Some((*kind, text.clone())),
                _ => None,
            })
            .collect()
    }

    pub fn last_remaining(&self) -> Option<String> {
        self.events.lock().iter().rev().find_map(|event| match event {
            Event::Remaining(text) => Some(text.clone()),
            _ => None,
        })
    }

    pub fn is_busy(&self, action: Action) -> bool {
        self.busy.lock().contains(&action)
    }

    pub fn clear(&self) {
        self.events.lock().clear();
    }
}

impl SessionView for RecordingView {
    fn show_dashboard(&self, username: &str, _login_time: OffsetDateTime) {
        self.events.lock().push(Event::Dashboard(username.to_string()));
    }

    fn show_login(&self) {
        self.events.lock().push(Event::Login);
    }

    fn show_remaining(&self, remaining: Duration) {
        self.events
            .lock()
            .push(Event::Remaining(crate::view::format_remaining(remaining)));
    }

    fn notice(&self, kind: NoticeKind, text: &str) {
        self.events.lock().push(Event::Notice(kind, text.to_string()));
    }

    fn set_busy(&self, action: Action, busy: bool) {
        if busy {
            self.busy.lock().insert(action);
        } else {
            self.busy.lock().remove(&action);
        }
        self.events.lock().push(Event::Busy(action, busy));
    }
}
