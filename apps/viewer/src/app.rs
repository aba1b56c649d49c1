//! Event dispatch.
//!
//! Gestures from the hosting page and completed fetches arrive as [`Event`]s
//! and are handled one at a time by the component that owns the affected
//! state. Fetches run on spawned tasks and report back through the channel;
//! overlapping fetches are neither cancelled nor ordered, so whichever
//! completion is handled last wins.

use std::future::Future;
use std::sync::Arc;

use question_core::{Folder, LoadedQuestion};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::api::{ApiError, QuestionApi};
use crate::components::shell::{self, ERROR_DISMISS_AFTER};
use crate::components::viewer::load_failure_message;
use crate::components::{
    shortcut_for, FolderCatalog, KeyPress, QuestionBrowser, QuestionViewer, Shell, Shortcut,
};
use crate::page::{ElementId, Page};

/// Everything the viewer reacts to.
#[derive(Debug)]
pub enum Event {
    /// Page ready: load the folder catalog.
    Init,
    /// The viewport changed size.
    Resized,
    InputChanged(String),
    /// Search button or Enter in the search box.
    SearchSubmitted,
    Key(KeyPress),
    FolderClicked(String),
    /// A row in the question list modal.
    QuestionPicked(String),
    ModalBackdropClicked,
    CategoryHeaderClicked(usize),
    OptionClicked(usize),
    CloseClicked,
    ErrorCloseClicked,

    FoldersLoaded(Result<Vec<Folder>, ApiError>),
    FolderQuestionsLoaded {
        folder: String,
        result: Result<Vec<String>, ApiError>,
    },
    QuestionLoaded {
        id: String,
        result: Result<LoadedQuestion, ApiError>,
    },
    ErrorExpired(u64),
}

/// The question viewer application bound to one page.
pub struct App<P> {
    page: P,
    api: Arc<dyn QuestionApi>,
    tx: UnboundedSender<Event>,
    rx: UnboundedReceiver<Event>,
    in_flight: usize,
    shell: Shell,
    catalog: FolderCatalog,
    browser: QuestionBrowser,
    viewer: QuestionViewer,
}

impl<P: Page> App<P> {
    pub fn new(page: P, api: Arc<dyn QuestionApi>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            page,
            api,
            tx,
            rx,
            in_flight: 0,
            shell: Shell::new(),
            catalog: FolderCatalog::new(),
            browser: QuestionBrowser::new(),
            viewer: QuestionViewer::new(),
        }
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut P {
        &mut self.page
    }

    pub fn catalog(&self) -> &FolderCatalog {
        &self.catalog
    }

    pub fn browser(&self) -> &QuestionBrowser {
        &self.browser
    }

    pub fn viewer(&self) -> &QuestionViewer {
        &self.viewer
    }

    /// Sender for hosts that post events from elsewhere.
    pub fn sender(&self) -> UnboundedSender<Event> {
        self.tx.clone()
    }

    /// Number of fetches whose completion has not been handled yet.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Wait for the next queued event and handle it.
    pub async fn step(&mut self) -> bool {
        match self.rx.recv().await {
            Some(event) => {
                self.dispatch(event);
                true
            }
            None => false,
        }
    }

    /// Handle events until every started fetch has completed, then drain
    /// whatever else is already queued.
    pub async fn settle(&mut self) {
        while self.in_flight > 0 {
            if !self.step().await {
                break;
            }
        }
        while let Ok(event) = self.rx.try_recv() {
            self.dispatch(event);
        }
    }

    pub fn dispatch(&mut self, event: Event) {
        match event {
            Event::Init => self.load_folders(),
            Event::Resized => {
                self.catalog.render(&mut self.page);
                self.page.typeset_math();
            }
            Event::InputChanged(value) => {
                self.page.set_value(ElementId::SearchInput, &value);
                self.shell.validate_input(&mut self.page);
            }
            Event::SearchSubmitted => self.search(),
            Event::Key(press) => {
                self.press_key(press);
            }
            Event::FolderClicked(folder) => self.browse(folder),
            Event::QuestionPicked(id) => {
                self.load_question(id);
                self.browser.close(&mut self.page);
            }
            Event::ModalBackdropClicked => self.browser.close(&mut self.page),
            Event::CategoryHeaderClicked(index) => self.catalog.toggle(&mut self.page, index),
            Event::OptionClicked(index) => {
                self.viewer.select(&mut self.page, index);
            }
            Event::CloseClicked => self.viewer.close(&mut self.page),
            Event::ErrorCloseClicked => self.shell.hide_error(&mut self.page),

            Event::FoldersLoaded(result) => {
                self.complete_fetch();
                if let Some(message) = self.catalog.apply_loaded(&mut self.page, result) {
                    self.report_error(message);
                }
            }
            Event::FolderQuestionsLoaded { folder, result } => {
                self.complete_fetch();
                self.browser.apply_loaded(&mut self.page, &folder, result);
            }
            Event::QuestionLoaded { id, result } => {
                self.complete_fetch();
                self.shell.hide_loading(&mut self.page);
                match result {
                    Ok(loaded) => self.viewer.display(&mut self.page, &id, loaded),
                    Err(e) => {
                        tracing::error!(id = %id, error = %e, "error loading question");
                        self.viewer.fail(&mut self.page);
                        self.report_error(&load_failure_message(&e));
                    }
                }
            }
            Event::ErrorExpired(generation) => {
                self.shell.expire_error(&mut self.page, generation);
            }
        }
    }

    /// Handle a key press. Returns `true` when the host must suppress its own
    /// handling of the key.
    pub fn press_key(&mut self, press: KeyPress) -> bool {
        let Some(shortcut) = shortcut_for(press) else {
            return false;
        };
        match shortcut {
            Shortcut::CloseQuestion => {
                if self.page.is_visible(ElementId::QuestionSection) {
                    self.viewer.close(&mut self.page);
                }
            }
            Shortcut::FocusSearch => self.page.focus(ElementId::SearchInput),
        }
        shortcut.prevents_default()
    }

    fn search(&mut self) {
        let id = self.page.value(ElementId::SearchInput).trim().to_string();
        if id.is_empty() {
            self.report_error(shell::EMPTY_SEARCH);
            return;
        }
        self.load_question(id);
    }

    fn load_folders(&mut self) {
        self.spawn_fetch(|api| async move { Event::FoldersLoaded(api.folders().await) });
    }

    fn browse(&mut self, folder: String) {
        self.browser
            .open(&mut self.page, &folder, self.catalog.find(&folder));
        self.spawn_fetch(move |api| async move {
            let result = api.folder_questions(&folder).await;
            Event::FolderQuestionsLoaded { folder, result }
        });
    }

    fn load_question(&mut self, id: String) {
        tracing::debug!(id = %id, "loading question");
        self.shell.show_loading(&mut self.page);
        self.viewer.begin_load();
        self.spawn_fetch(move |api| async move {
            let result = api.question(&id).await;
            Event::QuestionLoaded { id, result }
        });
    }

    fn spawn_fetch<F, Fut>(&mut self, fetch: F)
    where
        F: FnOnce(Arc<dyn QuestionApi>) -> Fut,
        Fut: Future<Output = Event> + Send + 'static,
    {
        self.in_flight += 1;
        let tx = self.tx.clone();
        let fut = fetch(Arc::clone(&self.api));
        tokio::spawn(async move {
            if tx.send(fut.await).is_err() {
                tracing::debug!("viewer dropped before fetch completed");
            }
        });
    }

    fn complete_fetch(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
    }

    fn report_error(&mut self, message: &str) {
        let generation = self.shell.show_error(&mut self.page, message);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(ERROR_DISMISS_AFTER).await;
            let _ = tx.send(Event::ErrorExpired(generation));
        });
    }
}
