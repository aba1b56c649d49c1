//! Modal listing the question ids of one folder.

use question_core::{format_folder_name, Folder};

use crate::api::ApiError;
use crate::page::{ElementId, Page};
use crate::views;

#[derive(Debug, Default)]
pub struct QuestionBrowser {
    folder: Option<String>,
    questions: Vec<String>,
}

impl QuestionBrowser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folder the modal was last opened for, while it is open.
    pub fn folder(&self) -> Option<&str> {
        self.folder.as_deref()
    }

    pub fn questions(&self) -> &[String] {
        &self.questions
    }

    /// Open the modal with a loading placeholder.
    ///
    /// `known` is the catalog entry for the folder, used for the count in the title.
    pub fn open(&mut self, page: &mut dyn Page, folder: &str, known: Option<&Folder>) {
        let count = known.map_or_else(|| "?".to_string(), |f| f.count.to_string());
        let title = format!("{} ({} questions)", format_folder_name(folder), count);

        self.folder = Some(folder.to_string());
        self.questions.clear();

        page.set_text(ElementId::QuestionListTitle, &title);
        page.set_html(
            ElementId::QuestionListScroll,
            views::list_status(views::LOADING_QUESTIONS, false),
        );
        page.set_visible(ElementId::QuestionListModal, true);
    }

    /// Fill the list from a fetch result. Failures stay inside the modal.
    pub fn apply_loaded(
        &mut self,
        page: &mut dyn Page,
        folder: &str,
        result: Result<Vec<String>, ApiError>,
    ) {
        match result {
            Ok(ids) => {
                tracing::debug!(folder, count = ids.len(), "loaded folder questions");
                page.set_html(ElementId::QuestionListScroll, views::question_rows(&ids));
                self.questions = ids;
            }
            Err(e) => {
                tracing::error!(folder, error = %e, "error browsing folder");
                self.questions.clear();
                page.set_html(
                    ElementId::QuestionListScroll,
                    views::list_status(views::ERROR_LOADING_QUESTIONS, true),
                );
            }
        }
    }

    pub fn close(&mut self, page: &mut dyn Page) {
        self.folder = None;
        page.set_visible(ElementId::QuestionListModal, false);
    }
}
