pub mod layout;
pub mod nav;
pub mod pages;

use dioxus::prelude::*;
use crate::backend::session::SessionState;
use crate::backend::AppEvent;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LayoutState {
    pub session: SessionState,
    pub unread_count: u32,
}

impl LayoutState {
    pub fn apply(&mut self, event: AppEvent) {
        match event {
            AppEvent::SessionResolved(session) => {
                // Counts are keyed by user; a different user starts from zero.
                if session.user_id() != self.session.user_id() {
                    self.unread_count = 0;
                }
                self.session = session;
            }
            AppEvent::UnreadCountFetched { user_id, count } => {
                if self.session.owns(&user_id) {
                    self.unread_count = count;
                }
            }
            AppEvent::LoggedOut => self.sign_out(),
        }
    }

    pub fn sign_out(&mut self) {
        self.session = SessionState::Unauthenticated;
        self.unread_count = 0;
    }
}

#[derive(Clone, Copy)]
pub struct AppState {
    pub layout: Signal<LayoutState>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            layout: use_signal(LayoutState::default),
        }
    }

    pub fn apply(&mut self, event: AppEvent) {
        self.layout.write().apply(event);
    }

    pub fn sign_out(&mut self) {
        self.layout.write().sign_out();
    }
}
