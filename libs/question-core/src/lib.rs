//! Core library for the question viewer.
//!
//! Provides:
//! - Wire types for the folder and question endpoints
//! - Content formatter for embedded question markup
//! - Folder classification, labelling and catalog layout
//! - The single-attempt answer-reveal state machine
//! - Search input validation

pub mod catalog;
pub mod error;
pub mod formatter;
pub mod reveal;
pub mod types;
pub mod validation;

pub use catalog::{
    classify, format_folder_name, group_folders, leaf_name, CatalogLayout, CatalogStats,
    FolderCategory, Subject,
};
pub use error::{PayloadError, Result};
pub use formatter::format_content;
pub use reveal::{
    DisplayedQuestion, OptionMark, PanelVisibility, RevealOutcome, RevealState, ViewerPhase,
    ViewerState,
};
pub use types::{
    option_letter, AnswerOption, Folder, FolderListResponse, FolderQuestionsResponse,
    LoadedQuestion, Question, QuestionResponse,
};
pub use validation::{check_question_id, IdCheck};
