//! Shared page chrome: loading overlay, error banner, shortcuts, input checks.

use std::time::Duration;

use question_core::{check_question_id, IdCheck};

use crate::page::{ElementId, Page};

/// How long an error banner stays up.
pub const ERROR_DISMISS_AFTER: Duration = Duration::from_secs(5);

pub const EMPTY_SEARCH: &str = "Please enter a question ID";

/// A key the viewer reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Char(char),
}

/// A key press with its modifier state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub key: Key,
    pub ctrl: bool,
}

impl KeyPress {
    pub fn plain(key: Key) -> Self {
        Self { key, ctrl: false }
    }

    pub fn ctrl(key: Key) -> Self {
        Self { key, ctrl: true }
    }
}

/// Page-wide keyboard shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    CloseQuestion,
    FocusSearch,
}

impl Shortcut {
    /// The host must suppress its own handling of the key (find-in-page).
    pub fn prevents_default(self) -> bool {
        matches!(self, Self::FocusSearch)
    }
}

pub fn shortcut_for(press: KeyPress) -> Option<Shortcut> {
    match press.key {
        Key::Escape => Some(Shortcut::CloseQuestion),
        Key::Char('f') if press.ctrl => Some(Shortcut::FocusSearch),
        _ => None,
    }
}

/// Loading overlay and error banner state.
#[derive(Debug, Default)]
pub struct Shell {
    error_generation: u64,
}

impl Shell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show_loading(&self, page: &mut dyn Page) {
        page.set_visible(ElementId::LoadingOverlay, true);
    }

    pub fn hide_loading(&self, page: &mut dyn Page) {
        page.set_visible(ElementId::LoadingOverlay, false);
    }

    /// Show an error and return the generation its dismiss timer must present.
    pub fn show_error(&mut self, page: &mut dyn Page, message: &str) -> u64 {
        self.error_generation += 1;
        page.set_text(ElementId::ErrorText, message);
        page.set_visible(ElementId::ErrorBanner, true);
        self.error_generation
    }

    /// Timer expiry for the banner shown at `generation`. Stale timers are ignored.
    pub fn expire_error(&self, page: &mut dyn Page, generation: u64) -> bool {
        if generation != self.error_generation {
            return false;
        }
        page.set_visible(ElementId::ErrorBanner, false);
        true
    }

    pub fn hide_error(&mut self, page: &mut dyn Page) {
        self.error_generation += 1;
        page.set_visible(ElementId::ErrorBanner, false);
    }

    /// Flag the search input when it cannot be a question id.
    ///
    /// Input too short to judge leaves the current flag alone.
    pub fn validate_input(&self, page: &mut dyn Page) {
        match check_question_id(&page.value(ElementId::SearchInput)) {
            IdCheck::Pending => {}
            verdict => page.set_invalid(ElementId::SearchInput, verdict.is_invalid()),
        }
    }
}
