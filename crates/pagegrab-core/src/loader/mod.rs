//! Pipeline driver: fetch the page, rewrite its references, persist assets,
//! then persist the rewritten page.

mod persist;

pub use persist::execute;

use std::path::{Path, PathBuf};
use url::Url;

use crate::error::LoadError;
use crate::fetch::{self, FetchOptions};
use crate::fs_ops;
use crate::naming;
use crate::observer::{LoadObserver, NoopObserver};
use crate::rewrite;

/// Downloads `url` and its same-origin assets into `destination` and returns
/// the path of the saved page.
pub fn download(
    url: &str,
    destination: &Path,
    options: &FetchOptions,
) -> Result<PathBuf, LoadError> {
    download_with_observer(url, destination, options, &NoopObserver)
}

/// Like [`download`], reporting stage completion to `observer`.
///
/// Stage order is fixed: the page body is fetched first, references are
/// rewritten in memory, assets are fetched and written one by one, and the
/// page file is written last, so a failed asset fetch never leaves a page
/// file pointing at missing copies.
pub fn download_with_observer(
    url: &str,
    destination: &Path,
    options: &FetchOptions,
    observer: &dyn LoadObserver,
) -> Result<PathBuf, LoadError> {
    let page_url = Url::parse(url).map_err(|source| LoadError::InvalidUrl {
        url: url.to_string(),
        source,
    })?;
    let destination = absolute(destination)?;

    tracing::info!(url, "fetching page");
    let body = fetch::fetch(page_url.as_str(), options)?;
    observer.page_fetched(&page_url, body.len());
    let markup = String::from_utf8_lossy(&body);

    let page_name = naming::page_file_name(&page_url);
    let assets_dir_name = naming::assets_dir_name(&page_url);

    let (rewritten, plan) = rewrite::rewrite(&page_url, &markup, &assets_dir_name);
    tracing::info!(assets = plan.len(), "rewrote page references");

    if !plan.is_empty() {
        persist::execute(&plan, &destination.join(&assets_dir_name), options, observer)?;
    }

    let page_path = destination.join(&page_name);
    fs_ops::write_file(&page_path, rewritten.as_bytes())?;
    tracing::info!(path = %page_path.display(), "page saved");
    observer.page_saved(&page_path);

    Ok(page_path)
}

fn absolute(path: &Path) -> Result<PathBuf, LoadError> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir().map_err(|error| fs_ops::classify(path, error))?;
    Ok(cwd.join(path))
}
