//! The rendering surface the viewer draws on.
//!
//! The hosting page defines a fixed set of elements; components address them
//! through [`ElementId`] and never create or remove them.

mod memory;

pub use memory::{ElementState, MemoryPage};

use maud::Markup;

/// Elements the hosting page must provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ElementId {
    FolderCount,
    TotalQuestions,
    SearchInput,
    SearchButton,
    ErrorBanner,
    ErrorText,
    LoadingOverlay,
    FoldersGrid,
    QuestionListModal,
    QuestionListTitle,
    QuestionListScroll,
    QuestionSection,
    CloseButton,
    DisplayQuestionId,
    DisplayFolder,
    DisplayType,
    StemContent,
    OptionsSection,
    OptionsContainer,
    CorrectAnswerSection,
    CorrectAnswerDisplay,
    RationaleSection,
    RationaleContent,
}

impl ElementId {
    pub const ALL: [ElementId; 23] = [
        Self::FolderCount,
        Self::TotalQuestions,
        Self::SearchInput,
        Self::SearchButton,
        Self::ErrorBanner,
        Self::ErrorText,
        Self::LoadingOverlay,
        Self::FoldersGrid,
        Self::QuestionListModal,
        Self::QuestionListTitle,
        Self::QuestionListScroll,
        Self::QuestionSection,
        Self::CloseButton,
        Self::DisplayQuestionId,
        Self::DisplayFolder,
        Self::DisplayType,
        Self::StemContent,
        Self::OptionsSection,
        Self::OptionsContainer,
        Self::CorrectAnswerSection,
        Self::CorrectAnswerDisplay,
        Self::RationaleSection,
        Self::RationaleContent,
    ];

    /// The element's id attribute in the hosting page.
    pub fn dom_id(self) -> &'static str {
        match self {
            Self::FolderCount => "folder-count",
            Self::TotalQuestions => "total-questions",
            Self::SearchInput => "questionId",
            Self::SearchButton => "searchBtn",
            Self::ErrorBanner => "errorMessage",
            Self::ErrorText => "errorText",
            Self::LoadingOverlay => "loadingOverlay",
            Self::FoldersGrid => "foldersGrid",
            Self::QuestionListModal => "questionListModal",
            Self::QuestionListTitle => "questionListTitle",
            Self::QuestionListScroll => "questionListScroll",
            Self::QuestionSection => "questionSection",
            Self::CloseButton => "closeBtn",
            Self::DisplayQuestionId => "displayQuestionId",
            Self::DisplayFolder => "displayFolder",
            Self::DisplayType => "displayType",
            Self::StemContent => "stemContent",
            Self::OptionsSection => "answerOptions",
            Self::OptionsContainer => "optionsContainer",
            Self::CorrectAnswerSection => "correctAnswerSection",
            Self::CorrectAnswerDisplay => "correctAnswerDisplay",
            Self::RationaleSection => "rationaleSection",
            Self::RationaleContent => "rationaleContent",
        }
    }

    /// Enclosing element, for elements nested inside a toggled container.
    pub fn parent(self) -> Option<ElementId> {
        match self {
            Self::ErrorText => Some(Self::ErrorBanner),
            Self::QuestionListTitle | Self::QuestionListScroll => Some(Self::QuestionListModal),
            Self::CloseButton
            | Self::DisplayQuestionId
            | Self::DisplayFolder
            | Self::DisplayType
            | Self::StemContent
            | Self::OptionsSection
            | Self::CorrectAnswerSection
            | Self::RationaleSection => Some(Self::QuestionSection),
            Self::OptionsContainer => Some(Self::OptionsSection),
            Self::CorrectAnswerDisplay => Some(Self::CorrectAnswerSection),
            Self::RationaleContent => Some(Self::RationaleSection),
            _ => None,
        }
    }

    /// Whether the hosting page starts with this element hidden.
    pub fn hidden_initially(self) -> bool {
        matches!(
            self,
            Self::ErrorBanner
                | Self::LoadingOverlay
                | Self::QuestionListModal
                | Self::QuestionSection
        )
    }
}

/// Operations the viewer performs on the hosting page.
pub trait Page {
    fn set_text(&mut self, id: ElementId, text: &str);

    /// Replace the element's children with trusted markup.
    fn set_html(&mut self, id: ElementId, markup: Markup);

    fn set_visible(&mut self, id: ElementId, visible: bool);

    fn is_visible(&self, id: ElementId) -> bool;

    /// Current value of an input element.
    fn value(&self, id: ElementId) -> String;

    fn set_value(&mut self, id: ElementId, value: &str);

    /// Flag an input as holding invalid text.
    fn set_invalid(&mut self, id: ElementId, invalid: bool);

    fn focus(&mut self, id: ElementId);

    fn scroll_into_view(&mut self, id: ElementId);

    /// Ask the math renderer to typeset newly inserted content.
    fn typeset_math(&mut self);

    fn viewport_width(&self) -> u32;
}
