//! Core data model.

mod article;
mod ids;
mod proptests;
mod user;

pub use article::{Article, ArticlePatch, ArticleView};
pub use ids::{ArticleId, UserId};
pub use user::{Caller, User};
