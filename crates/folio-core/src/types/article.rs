//! Articles, edit patches, and the caller-facing article shape.

use serde::{Deserialize, Serialize};

use super::ids::{ArticleId, UserId};
use crate::policy::AccessPolicy;

/// A content item guarded by an optional access policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Unique, immutable identifier.
    pub id: ArticleId,
    /// Article title.
    pub title: String,
    /// Article body.
    pub content: String,
    /// User who last edited the article.
    pub last_edited_by: UserId,
    /// Who may read or write this article. `None` allows everything.
    #[serde(default, rename = "policy", skip_serializing_if = "Option::is_none")]
    pub access_policy: Option<AccessPolicy>,
}

impl Article {
    /// Creates an article with no access policy.
    pub fn new(
        id: impl Into<ArticleId>,
        title: impl Into<String>,
        content: impl Into<String>,
        last_edited_by: impl Into<UserId>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: content.into(),
            last_edited_by: last_edited_by.into(),
            access_policy: None,
        }
    }

    /// Attaches an access policy.
    pub fn with_policy(mut self, policy: AccessPolicy) -> Self {
        self.access_policy = Some(policy);
        self
    }

    /// Applies the provided fields of `patch` and records `editor`.
    ///
    /// The patch id is not consulted; callers select the article.
    pub fn apply(&mut self, patch: &ArticlePatch, editor: UserId) {
        if let Some(title) = &patch.title {
            self.title.clone_from(title);
        }
        if let Some(content) = &patch.content {
            self.content.clone_from(content);
        }
        self.last_edited_by = editor;
    }

    /// The caller-facing representation (never includes the policy).
    pub fn view(&self) -> ArticleView {
        ArticleView::from(self)
    }
}

/// A partial update to one article.
///
/// Unknown fields are rejected so a misspelled field cannot turn into an
/// empty edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ArticlePatch {
    /// Article to edit.
    pub id: ArticleId,
    /// New title, if changing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New body, if changing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl ArticlePatch {
    /// A patch that changes nothing but the editor stamp.
    pub fn new(id: impl Into<ArticleId>) -> Self {
        Self {
            id: id.into(),
            title: None,
            content: None,
        }
    }

    /// Sets the new title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the new body.
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }
}

/// Wire shape of an article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleView {
    /// Article title.
    pub title: String,
    /// Article identifier.
    pub id: ArticleId,
    /// Article body.
    pub content: String,
    /// Identifier of the last editor.
    pub last_edited_by: UserId,
}

impl From<&Article> for ArticleView {
    fn from(article: &Article) -> Self {
        Self {
            title: article.title.clone(),
            id: article.id,
            content: article.content.clone(),
            last_edited_by: article.last_edited_by,
        }
    }
}

impl From<Article> for ArticleView {
    fn from(article: Article) -> Self {
        Self {
            title: article.title,
            id: article.id,
            content: article.content,
            last_edited_by: article.last_edited_by,
        }
    }
}
