//! Same-origin classification of candidate asset references.

use url::Url;

/// Returns the page URL with a trailing `/` appended to its path when absent,
/// so relative references resolve against the page itself rather than its
/// parent.
pub fn normalized_base(page: &Url) -> Url {
    if page.path().ends_with('/') {
        return page.clone();
    }
    let mut base = page.clone();
    base.set_path(&format!("{}/", page.path()));
    base
}

/// Decides whether `candidate`, as written in the page markup, denotes a
/// resource on the page's own origin.
///
/// Empty values and `data:` URIs are never local. Everything else is resolved
/// against `page` per standard URL-resolution rules (relative, absolute-path,
/// and protocol-relative references all supported) and compared on the
/// `scheme://host[:port]` origin triple; a reference that does not resolve is
/// not local.
pub fn is_local(page: &Url, candidate: &str) -> bool {
    if candidate.is_empty() || candidate.starts_with("data:") {
        return false;
    }
    match page.join(candidate) {
        Ok(resolved) => resolved.origin() == page.origin(),
        Err(_) => false,
    }
}

/// Resolves `candidate` to an absolute URL against `page`.
pub fn resolve(page: &Url, candidate: &str) -> Option<Url> {
    page.join(candidate).ok()
}
