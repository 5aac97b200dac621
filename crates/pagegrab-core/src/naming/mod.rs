//! Deterministic local names for the saved page, its assets, and the
//! per-page assets directory.
//!
//! Names are derived from `host[:port] + path + query` with every character
//! outside `[A-Za-z0-9]` replaced by `-`; the scheme never appears in a name.
//! The mapping is pure: the same URL yields the same name within one process
//! and across processes.

mod ext;
mod sanitize;

pub use sanitize::sanitize;

use sha2::{Digest, Sha256};
use url::Url;

/// Suffix of the directory holding a page's downloaded assets.
const ASSETS_DIR_SUFFIX: &str = "_files";

/// Extension used when the URL path carries none.
const DEFAULT_EXTENSION: &str = ".html";

/// Derives the local name for `url`.
///
/// With `as_directory` set, the whole `host+path+query` is sanitized and the
/// `_files` suffix appended. Otherwise the final path segment's extension is
/// split off first and re-appended verbatim after sanitization, defaulting to
/// `.html` when the path has none. A single trailing `/` is stripped before
/// either, so `https://example.ru` and `https://example.ru/` name the same
/// files.
pub fn generate_name(url: &Url, as_directory: bool) -> String {
    let mut host = url.host_str().unwrap_or_default().to_string();
    if let Some(port) = url.port() {
        host.push(':');
        host.push_str(&port.to_string());
    }

    let path = url.path();
    let path = path.strip_suffix('/').unwrap_or(path);

    let query = url
        .query()
        .filter(|q| !q.is_empty())
        .map(|q| format!("?{q}"))
        .unwrap_or_default();

    if as_directory {
        let source = format!("{host}{path}{query}");
        return format!("{}{ASSETS_DIR_SUFFIX}", sanitize(&source));
    }

    let (stem, extension) = ext::split_extension(path);
    let source = format!("{host}{stem}{query}");
    format!(
        "{}{}",
        sanitize(&source),
        extension.unwrap_or(DEFAULT_EXTENSION)
    )
}

/// Name of the saved page file for `url`.
pub fn page_file_name(url: &Url) -> String {
    generate_name(url, false)
}

/// Name of the assets directory for `url`.
pub fn assets_dir_name(url: &Url) -> String {
    generate_name(url, true)
}

/// Resolves a sanitization collision by tagging `name` with the first 8 hex
/// chars of the SHA-256 of `url`, inserted before the extension.
///
/// Distinct URLs can legitimately sanitize to the same name (punctuation all
/// maps to `-`); the tag depends only on the URL, so disambiguated names stay
/// deterministic across runs.
pub fn disambiguate(name: &str, url: &Url) -> String {
    let digest = Sha256::digest(url.as_str().as_bytes());
    let tag = hex::encode(&digest[..4]);
    match name.rfind('.') {
        Some(dot) => format!("{}-{}{}", &name[..dot], tag, &name[dot..]),
        None => format!("{name}-{tag}"),
    }
}
