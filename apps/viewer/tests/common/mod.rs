//! Shared test infrastructure for the viewer integration tests.
//!
//! [`StubApi`] stands in for the question backend so flows can run without a
//! server. Responses can be delayed to force a particular completion order.

pub mod fixtures;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use question_core::{Folder, LoadedQuestion, Question};

use question_viewer::api::{ApiError, QuestionApi};
use question_viewer::app::App;
use question_viewer::page::MemoryPage;

#[derive(Default)]
struct StubData {
    folders: Vec<Folder>,
    folder_questions: HashMap<String, Vec<String>>,
    questions: HashMap<String, LoadedQuestion>,
    delays: HashMap<String, Duration>,
    offline: bool,
}

/// In-memory question backend.
#[derive(Default)]
pub struct StubApi {
    data: Mutex<StubData>,
}

impl StubApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a folder holding the given question ids.
    pub fn with_folder(self, name: &str, ids: &[&str]) -> Self {
        {
            let mut data = self.data.lock().unwrap();
            data.folders.push(Folder::new(name, ids.len() as u64));
            data.folder_questions
                .insert(name.to_string(), ids.iter().map(|id| id.to_string()).collect());
        }
        self
    }

    pub fn with_question(self, id: &str, folder: &str, question: Question) -> Self {
        self.data.lock().unwrap().questions.insert(
            id.to_string(),
            LoadedQuestion {
                question,
                folder: folder.to_string(),
            },
        );
        self
    }

    /// Hold back the response for `key` (a question id or folder name).
    pub fn with_delay(self, key: &str, delay: Duration) -> Self {
        self.data
            .lock()
            .unwrap()
            .delays
            .insert(key.to_string(), delay);
        self
    }

    /// Fail every request with a network error from now on.
    pub fn go_offline(&self) {
        self.data.lock().unwrap().offline = true;
    }

    fn delay_for(&self, key: &str) -> Option<Duration> {
        self.data.lock().unwrap().delays.get(key).copied()
    }

    async fn wait(&self, key: &str) -> Result<(), ApiError> {
        if let Some(delay) = self.delay_for(key) {
            tokio::time::sleep(delay).await;
        }
        if self.data.lock().unwrap().offline {
            return Err(ApiError::Network("connection refused".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl QuestionApi for StubApi {
    async fn folders(&self) -> Result<Vec<Folder>, ApiError> {
        self.wait("").await?;
        Ok(self.data.lock().unwrap().folders.clone())
    }

    async fn folder_questions(&self, folder: &str) -> Result<Vec<String>, ApiError> {
        self.wait(folder).await?;
        self.data
            .lock()
            .unwrap()
            .folder_questions
            .get(folder)
            .cloned()
            .ok_or_else(|| ApiError::Rejected(format!("Folder '{folder}' not found")))
    }

    async fn question(&self, id: &str) -> Result<LoadedQuestion, ApiError> {
        self.wait(id).await?;
        self.data
            .lock()
            .unwrap()
            .questions
            .get(id)
            .cloned()
            .ok_or_else(|| ApiError::Rejected(format!("Question with ID '{id}' not found")))
    }
}

/// An app over a fresh page, plus a handle on its backend.
pub fn app_with(api: StubApi, viewport_width: u32) -> (App<MemoryPage>, Arc<StubApi>) {
    let api = Arc::new(api);
    let app = App::new(MemoryPage::new(viewport_width), api.clone());
    (app, api)
}
