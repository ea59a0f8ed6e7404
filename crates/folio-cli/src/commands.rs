//! Command execution.

use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use folio_api::{ContentService, RequestContext, Request, Response};
use folio_core::{ArticleId, ArticlePatch, FolioConfig, Result};
use folio_storage::{seed, ContentStore, Dataset, MemoryStore};

use crate::cli::{Cli, Command};

/// Build the store from `dataset`, else the configured path, else the demo seed.
pub fn open_store(config: &FolioConfig, dataset: Option<&Path>) -> Result<Arc<dyn ContentStore>> {
    let dataset = match dataset.or(config.dataset.path.as_deref()) {
        Some(path) => Dataset::load(path)?,
        None => {
            log::info!("No dataset configured, using the demo seed");
            seed::demo()
        }
    };
    Ok(Arc::new(MemoryStore::from_dataset(dataset)?))
}

/// Run `cli.command`, writing its output to `out`.
///
/// Returns `false` when a single-request command (`list`, `edit`) produced
/// an error response. `run` reports errors per request and always succeeds
/// once its file parses.
pub async fn execute<W: Write>(cli: Cli, config: &FolioConfig, out: &mut W) -> anyhow::Result<bool> {
    let Cli {
        dataset,
        credential,
        command,
        ..
    } = cli;
    let scope = || open_scope(config, dataset.as_deref(), credential.as_deref());

    match command {
        Command::Config => {
            write!(out, "{}", config.to_toml_string()?)?;
            Ok(true)
        }
        Command::List => {
            let (service, ctx) = scope().await?;
            single(&service, &ctx, Request::ListArticles, out).await
        }
        Command::Edit { id, title, content } => {
            let patch = ArticlePatch {
                id: ArticleId::new(id),
                title,
                content,
            };
            let (service, ctx) = scope().await?;
            single(&service, &ctx, Request::EditArticle(patch), out).await
        }
        Command::Run { file } => {
            let src = std::fs::read_to_string(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let requests: Vec<Request> = serde_json::from_str(&src)
                .with_context(|| format!("Invalid request file {}", file.display()))?;
            log::debug!("Running {} requests in one scope", requests.len());

            let (service, ctx) = scope().await?;
            let mut responses = Vec::with_capacity(requests.len());
            for request in requests {
                responses.push(service.handle(&ctx, request).await);
            }
            writeln!(out, "{}", serde_json::to_string_pretty(&responses)?)?;
            Ok(true)
        }
    }
}

async fn open_scope(
    config: &FolioConfig,
    dataset: Option<&Path>,
    credential: Option<&str>,
) -> anyhow::Result<(ContentService, RequestContext)> {
    let store = open_store(config, dataset)?;
    let service = ContentService::new(store, &config.acl);
    let ctx = service.scope(credential).await?;
    Ok((service, ctx))
}

async fn single<W: Write>(
    service: &ContentService,
    ctx: &RequestContext,
    request: Request,
    out: &mut W,
) -> anyhow::Result<bool> {
    let response: Response = service.handle(ctx, request).await;
    writeln!(out, "{}", serde_json::to_string_pretty(&response)?)?;
    Ok(!response.is_error())
}
