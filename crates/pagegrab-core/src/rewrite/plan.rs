//! Download plan produced by rewriting and consumed by the orchestrator.

use url::Url;

/// One same-origin asset discovered during rewriting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAsset {
    /// Fully resolved URL to fetch.
    pub absolute_url: Url,
    /// File name inside the assets directory.
    pub local_file_name: String,
    /// `<assets dir>/<file name>`, as written into the rewritten attribute.
    pub relative_path: String,
}

/// Ordered sequence of assets to fetch: built once per run by the rewriter,
/// consumed exactly once by the orchestrator.
pub type DownloadPlan = Vec<ResolvedAsset>;
