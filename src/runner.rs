//! Fetch, extract and write, in that order

use thiserror::Error;
use tracing::info;

use crate::config::Config;
use crate::output::{OutputTarget, write_json};
use crate::version::error::{FetchError, WriteError};
use crate::version::extractor::LinkExtractor;
use crate::version::source::{HttpIndexSource, IndexSource};
use crate::version::types::ReleaseLines;

/// Fatal errors of a run
#[derive(Debug, Error)]
pub enum RunError {
    #[error("failed to fetch index")]
    Fetch(#[from] FetchError),

    #[error("failed to write JSON")]
    Write(#[from] WriteError),
}

/// Fetch the index from `source`, aggregate release lines and write them to `target`.
///
/// Nothing is written when the fetch fails.
pub async fn run<S>(source: &S, target: &OutputTarget) -> Result<ReleaseLines, RunError>
where
    S: IndexSource + ?Sized,
{
    info!("Fetching release index from {}", source.location());
    let html = source.fetch_index().await?;

    let lines = LinkExtractor::new().extract(&html);

    write_json(&lines, target)?;
    Ok(lines)
}

/// Run against the HTTP index named in `config`
pub async fn run_with_config(config: &Config) -> Result<ReleaseLines, RunError> {
    let source = HttpIndexSource::new(&config.url)?;
    run(&source, &config.output).await
}
