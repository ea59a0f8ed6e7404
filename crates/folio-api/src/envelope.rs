//! JSON envelope.
//!
//! Requests are tagged by `op`:
//!
//! ```json
//! {"op": "listArticles"}
//! {"op": "editArticle", "id": 1, "title": "New title"}
//! ```
//!
//! Responses carry either `data` or `error`:
//!
//! ```json
//! {"data": {"title": "New title", "id": 1, "content": "...", "lastEditedBy": 2}}
//! {"error": {"code": "FORBIDDEN", "message": "Forbidden: requires one of the roles [admin, editor]"}}
//! ```

use folio_core::{ArticlePatch, ArticleView, Error, Result};
use serde::{Deserialize, Serialize};

/// One operation to run inside a request scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum Request {
    /// `ListArticles`.
    ListArticles,
    /// `EditArticle`.
    EditArticle(ArticlePatch),
}

/// Successful result of a [`Request`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Payload {
    /// Result of `ListArticles`.
    Articles(Vec<ArticleView>),
    /// Result of `EditArticle`.
    Article(ArticleView),
}

/// Wire form of an [`Error`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Stable error code, see [`Error::code`].
    pub code: String,
    /// Human-readable message.
    pub message: String,
}

impl From<&Error> for ErrorBody {
    fn from(err: &Error) -> Self {
        Self {
            code: err.code().to_string(),
            message: err.to_string(),
        }
    }
}

/// Outcome of a [`Request`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Response {
    /// The operation succeeded.
    Data(Payload),
    /// The operation failed.
    Error(ErrorBody),
}

impl Response {
    /// Whether this response carries an error.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

impl From<Result<Payload>> for Response {
    fn from(result: Result<Payload>) -> Self {
        match result {
            Ok(payload) => Self::Data(payload),
            Err(err) => {
                log::debug!("Request failed: {err}");
                Self::Error(ErrorBody::from(&err))
            }
        }
    }
}
