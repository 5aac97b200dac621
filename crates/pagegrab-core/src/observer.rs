//! Run observation hooks.
//!
//! The pipeline reports stage completion through an explicitly injected
//! observer instead of global state; [`NoopObserver`] is the default for
//! callers that do not care.

use std::path::Path;
use url::Url;

/// Receives pipeline stage events during a download run. All methods default
/// to no-ops so implementors pick only the events they need.
pub trait LoadObserver {
    /// Page markup fetched, before rewriting.
    fn page_fetched(&self, url: &Url, bytes: usize) {
        let _ = (url, bytes);
    }

    /// One asset fetched and written to disk.
    fn asset_saved(&self, url: &Url, path: &Path) {
        let _ = (url, path);
    }

    /// Rewritten page written to disk; the run is complete.
    fn page_saved(&self, path: &Path) {
        let _ = path;
    }
}

/// Observer that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl LoadObserver for NoopObserver {}
