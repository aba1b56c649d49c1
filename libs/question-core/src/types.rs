//! Wire types for the question API.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{PayloadError, Result};

/// Default message when a question lookup fails without a server explanation.
pub const QUESTION_NOT_FOUND: &str = "Question not found";

/// Default message when a folder listing fails without a server explanation.
pub const FOLDER_NOT_FOUND: &str = "Folder not found";

/// Treat an explicit JSON `null` the same as an absent field.
fn nullable<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A folder of questions as listed by `/api/folders`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    pub name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub count: u64,
}

impl Folder {
    pub fn new(name: impl Into<String>, count: u64) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }
}

/// Body of `GET /api/folders`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FolderListResponse {
    #[serde(default, deserialize_with = "nullable")]
    pub folders: Vec<Folder>,
}

/// Body of `GET /api/questions/{folder}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FolderQuestionsResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, deserialize_with = "nullable")]
    pub questions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FolderQuestionsResponse {
    /// Unwrap the envelope into the list of question ids.
    pub fn into_result(self) -> Result<Vec<String>> {
        if self.success {
            Ok(self.questions)
        } else {
            Err(PayloadError::Rejected(
                self.error.unwrap_or_else(|| FOLDER_NOT_FOUND.to_string()),
            ))
        }
    }
}

/// A single multiple-choice option.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    #[serde(default, deserialize_with = "nullable")]
    pub id: String,
    #[serde(default, deserialize_with = "nullable")]
    pub content: String,
}

/// A question as stored by the backend.
///
/// Every field is optional on the wire; informational items carry no options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    #[serde(default, deserialize_with = "nullable")]
    pub id: String,
    #[serde(default, deserialize_with = "nullable")]
    pub stem: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(rename = "answerOptions", default, deserialize_with = "nullable")]
    pub answer_options: Vec<AnswerOption>,
    /// Ids of the correct options.
    #[serde(default, deserialize_with = "nullable")]
    pub keys: Vec<String>,
    /// Letters of the correct options, as authored.
    #[serde(default, deserialize_with = "nullable")]
    pub correct_answer: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rationale: Option<String>,
}

impl Question {
    /// Upper-cased question type, `MCQ` when missing or blank.
    pub fn type_label(&self) -> String {
        match self.kind.as_deref() {
            Some(kind) if !kind.is_empty() => kind.to_uppercase(),
            _ => "MCQ".to_string(),
        }
    }

    pub fn has_options(&self) -> bool {
        !self.answer_options.is_empty()
    }

    /// Whether the option id belongs to the correct-key set.
    pub fn is_key(&self, option_id: &str) -> bool {
        self.keys.iter().any(|k| k == option_id)
    }

    /// Rationale markup, ignoring blank values.
    pub fn rationale(&self) -> Option<&str> {
        self.rationale.as_deref().filter(|r| !r.is_empty())
    }
}

/// Body of `GET /api/question/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuestionResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Question>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// A successfully fetched question and the folder it lives in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedQuestion {
    pub question: Question,
    pub folder: String,
}

impl QuestionResponse {
    /// Unwrap the envelope, mapping `success: false` to a rejection.
    pub fn into_result(self) -> Result<LoadedQuestion> {
        if !self.success {
            return Err(PayloadError::Rejected(
                self.error.unwrap_or_else(|| QUESTION_NOT_FOUND.to_string()),
            ));
        }
        let question = self.data.ok_or(PayloadError::MissingData)?;
        Ok(LoadedQuestion {
            question,
            folder: self.folder.unwrap_or_default(),
        })
    }
}

/// Display letter for the option at `index` (A, B, C, ...).
pub fn option_letter(index: usize) -> char {
    u32::try_from(index)
        .ok()
        .and_then(|i| char::from_u32('A' as u32 + i))
        .unwrap_or('?')
}
