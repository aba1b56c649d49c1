//! Question viewer: renders the displayed question and its reveal state.

use question_core::{
    format_folder_name, DisplayedQuestion, LoadedQuestion, RevealOutcome, ViewerState,
};

use crate::api::ApiError;
use crate::page::{ElementId, Page};
use crate::views;

pub const CONNECTION_FAILED: &str = "Failed to load question. Please check your connection.";

/// Banner text for a failed question load.
pub fn load_failure_message(error: &ApiError) -> String {
    match error {
        ApiError::Rejected(message) => message.clone(),
        _ => CONNECTION_FAILED.to_string(),
    }
}

#[derive(Debug, Default)]
pub struct QuestionViewer {
    state: ViewerState,
}

impl QuestionViewer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ViewerState {
        &self.state
    }

    pub fn begin_load(&mut self) {
        self.state.begin_load();
    }

    /// Show a freshly loaded question, unanswered.
    pub fn display(&mut self, page: &mut dyn Page, id: &str, loaded: LoadedQuestion) {
        self.state.show(id, loaded);
        let Some(shown) = self.state.displayed() else {
            return;
        };
        tracing::info!(id, folder = %shown.folder, "displaying question");

        page.set_text(ElementId::DisplayQuestionId, &shown.id);
        page.set_text(ElementId::DisplayFolder, &format_folder_name(&shown.folder));
        page.set_text(ElementId::DisplayType, &shown.question.type_label());
        page.set_html(ElementId::StemContent, views::content(&shown.question.stem));

        if shown.question.has_options() {
            draw_options(page, shown);
        }
        draw_panels(page, shown);

        page.set_visible(ElementId::QuestionSection, true);
        page.scroll_into_view(ElementId::QuestionSection);
        page.typeset_math();
    }

    /// A load failed: nothing is displayed.
    pub fn fail(&mut self, page: &mut dyn Page) {
        self.state.fail();
        page.set_visible(ElementId::QuestionSection, false);
    }

    /// Option click. Only the first click on a displayed question counts.
    pub fn select(&mut self, page: &mut dyn Page, index: usize) -> Option<RevealOutcome> {
        let outcome = self.state.select(index)?;
        let shown = self.state.displayed()?;
        tracing::debug!(id = %shown.id, index, ?outcome, "answered");

        draw_options(page, shown);
        draw_panels(page, shown);
        page.typeset_math();
        Some(outcome)
    }

    /// Hide the viewer and reset it for the next question.
    pub fn close(&mut self, page: &mut dyn Page) {
        self.state.close();
        page.set_visible(ElementId::QuestionSection, false);
        page.set_value(ElementId::SearchInput, "");
        page.set_invalid(ElementId::SearchInput, false);
        page.set_visible(ElementId::CorrectAnswerSection, true);
        page.set_visible(ElementId::RationaleSection, true);
    }
}

fn draw_options(page: &mut dyn Page, shown: &DisplayedQuestion) {
    page.set_html(
        ElementId::OptionsContainer,
        views::answer_options(&shown.question, &shown.marks()),
    );
}

fn draw_panels(page: &mut dyn Page, shown: &DisplayedQuestion) {
    let panels = shown.panels();
    page.set_html(
        ElementId::CorrectAnswerDisplay,
        views::correct_answer(&shown.question.correct_answer),
    );
    page.set_html(
        ElementId::RationaleContent,
        views::rationale(shown.question.rationale()),
    );
    page.set_visible(ElementId::OptionsSection, panels.options);
    page.set_visible(ElementId::CorrectAnswerSection, panels.correct_answer);
    page.set_visible(ElementId::RationaleSection, panels.rationale);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::MemoryPage;
    use question_core::{AnswerOption, Question, ViewerPhase};

    fn loaded() -> LoadedQuestion {
        LoadedQuestion {
            question: Question {
                stem: "What is <b>x</b>?".into(),
                kind: Some("mcq".into()),
                answer_options: vec![
                    AnswerOption {
                        id: "id1".into(),
                        content: "1".into(),
                    },
                    AnswerOption {
                        id: "id2".into(),
                        content: "2".into(),
                    },
                ],
                keys: vec!["id2".into()],
                correct_answer: vec!["B".into()],
                rationale: Some("Because x is 2.".into()),
                ..Default::default()
            },
            folder: "math/algebra".into(),
        }
    }

    #[test]
    fn test_display_populates_metadata() {
        let mut page = MemoryPage::new(1280);
        let mut viewer = QuestionViewer::new();
        viewer.display(&mut page, "abc", loaded());

        assert_eq!(page.content(ElementId::DisplayQuestionId), "abc");
        assert_eq!(page.content(ElementId::DisplayFolder), "Algebra");
        assert_eq!(page.content(ElementId::DisplayType), "MCQ");
        assert_eq!(page.content(ElementId::StemContent), "<p>What is <b>x</b>?</p>");
        assert!(page.is_shown(ElementId::OptionsContainer));
        assert!(!page.is_shown(ElementId::CorrectAnswerDisplay));
        assert!(!page.is_shown(ElementId::RationaleContent));
        assert_eq!(page.scrolled_to(), Some(ElementId::QuestionSection));
        assert_eq!(page.typeset_requests(), 1);
    }

    #[test]
    fn test_select_reveals_once() {
        let mut page = MemoryPage::new(1280);
        let mut viewer = QuestionViewer::new();
        viewer.display(&mut page, "abc", loaded());

        assert_eq!(viewer.select(&mut page, 0), Some(RevealOutcome::Incorrect));
        let options = page.content(ElementId::OptionsContainer).to_string();
        assert!(options.contains(r#"class="option selected incorrect""#));
        assert!(options.contains(r#"class="option correct""#));
        assert!(page.is_shown(ElementId::CorrectAnswerDisplay));
        assert!(page.is_shown(ElementId::RationaleContent));

        assert_eq!(viewer.select(&mut page, 1), None);
        assert_eq!(page.content(ElementId::OptionsContainer), options);
    }

    #[test]
    fn test_close_resets_page() {
        let mut page = MemoryPage::new(1280);
        let mut viewer = QuestionViewer::new();
        page.set_value(ElementId::SearchInput, "abc");
        viewer.display(&mut page, "abc", loaded());

        viewer.close(&mut page);

        assert_eq!(viewer.state().phase(), &ViewerPhase::Idle);
        assert!(!page.is_visible(ElementId::QuestionSection));
        assert_eq!(page.value(ElementId::SearchInput), "");
        assert!(page.is_visible(ElementId::CorrectAnswerSection));
        assert!(page.is_visible(ElementId::RationaleSection));
    }

    #[test]
    fn test_failure_messages() {
        assert_eq!(
            load_failure_message(&ApiError::Rejected("Question with ID 'x' not found".into())),
            "Question with ID 'x' not found"
        );
        assert_eq!(
            load_failure_message(&ApiError::Network("refused".into())),
            CONNECTION_FAILED
        );
        assert_eq!(
            load_failure_message(&ApiError::Parse("eof".into())),
            CONNECTION_FAILED
        );
    }
}
