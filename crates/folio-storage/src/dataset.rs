//! Dataset files.
//!
//! A dataset is a TOML document listing users and articles:
//!
//! ```toml
//! [[users]]
//! id = 1
//! username = "alice"
//! credential = "alice-token"
//! roles = ["admin"]
//!
//! [[articles]]
//! id = 1
//! title = "Welcome"
//! content = "Hello"
//! last_edited_by = 1
//!
//! [articles.policy]
//! everyone = { read = true }
//! roles.admin = { read = true, write = true }
//! ```
//!
//! Articles without a `policy` table are unrestricted.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use folio_core::{Article, Error, Result, User};

/// Users and articles making up one dataset, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    /// Known users.
    #[serde(default)]
    pub users: Vec<User>,
    /// Articles, in listing order.
    #[serde(default)]
    pub articles: Vec<Article>,
}

impl Dataset {
    /// Parse a dataset from TOML and validate it.
    pub fn parse(toml_src: &str) -> Result<Self> {
        let dataset: Self = toml::from_str(toml_src)
            .map_err(|e| Error::dataset(format!("Invalid dataset TOML: {e}")))?;
        dataset.validate()?;
        Ok(dataset)
    }

    /// Read, parse, and validate a dataset file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let dataset = Self::parse(&content)?;
        log::info!(
            "Loaded dataset from {} ({} users, {} articles)",
            path.display(),
            dataset.users.len(),
            dataset.articles.len()
        );
        Ok(dataset)
    }

    /// Check id and credential uniqueness.
    pub fn validate(&self) -> Result<()> {
        let mut article_ids = HashSet::new();
        if let Some(dup) = self.articles.iter().find(|a| !article_ids.insert(a.id)) {
            return Err(Error::dataset(format!("duplicate article id {}", dup.id)));
        }

        let mut user_ids = HashSet::new();
        if let Some(dup) = self.users.iter().find(|u| !user_ids.insert(u.id)) {
            return Err(Error::dataset(format!("duplicate user id {}", dup.id)));
        }

        let mut credentials = HashSet::new();
        if let Some(dup) = self
            .users
            .iter()
            .find(|u| !credentials.insert(u.credential.as_str()))
        {
            return Err(Error::dataset(format!(
                "credential of user '{}' is already in use",
                dup.username
            )));
        }

        Ok(())
    }
}
