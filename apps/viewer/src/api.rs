//! Client for the question API.

use async_trait::async_trait;
use question_core::types::{
    FolderListResponse, FolderQuestionsResponse, LoadedQuestion, QuestionResponse,
};
use question_core::{Folder, PayloadError};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

/// API errors.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Backend error: {status} - {message}")]
    Backend { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),

    /// The backend answered `success: false`.
    #[error("{0}")]
    Rejected(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl From<PayloadError> for ApiError {
    fn from(e: PayloadError) -> Self {
        match e {
            PayloadError::Rejected(message) => Self::Rejected(message),
            PayloadError::MissingData => Self::Parse(e.to_string()),
        }
    }
}

/// Read access to the question backend.
#[async_trait]
pub trait QuestionApi: Send + Sync {
    /// `GET /api/folders`
    async fn folders(&self) -> Result<Vec<Folder>, ApiError>;

    /// `GET /api/questions/{folder}`
    async fn folder_questions(&self, folder: &str) -> Result<Vec<String>, ApiError>;

    /// `GET /api/question/{id}`
    async fn question(&self, id: &str) -> Result<LoadedQuestion, ApiError>;
}

/// HTTP implementation of [`QuestionApi`].
#[derive(Debug, Clone)]
pub struct HttpQuestionApi {
    client: Client,
    base_url: Url,
}

impl HttpQuestionApi {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let base_url =
            Url::parse(base_url).map_err(|e| ApiError::InvalidUrl(format!("{base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(base_url.to_string()));
        }
        Ok(Self {
            client: Client::new(),
            base_url,
        })
    }

    /// Build an endpoint URL. Each segment is percent-encoded on its own, so a
    /// folder such as `math/algebra` travels as `math%2Falgebra`.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        tracing::debug!(%url, "GET");

        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = resp.status();
        let body = resp
            .bytes()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        match serde_json::from_slice(&body) {
            Ok(value) => Ok(value),
            Err(_) if !status.is_success() => Err(ApiError::Backend {
                status: status.as_u16(),
                message: String::from_utf8_lossy(&body).into_owned(),
            }),
            Err(e) => Err(ApiError::Parse(e.to_string())),
        }
    }
}

#[async_trait]
impl QuestionApi for HttpQuestionApi {
    async fn folders(&self) -> Result<Vec<Folder>, ApiError> {
        let url = self.endpoint(&["api", "folders"])?;
        let response: FolderListResponse = self.get_json(url).await?;
        Ok(response.folders)
    }

    async fn folder_questions(&self, folder: &str) -> Result<Vec<String>, ApiError> {
        let url = self.endpoint(&["api", "questions", folder])?;
        let response: FolderQuestionsResponse = self.get_json(url).await?;
        Ok(response.into_result()?)
    }

    async fn question(&self, id: &str) -> Result<LoadedQuestion, ApiError> {
        let url = self.endpoint(&["api", "question", id])?;
        let response: QuestionResponse = self.get_json(url).await?;
        Ok(response.into_result()?)
    }
}
