//! Local-name sanitization.

/// Sanitizes a URL-derived name source for safe use as a local file name.
///
/// Replaces every character outside `[A-Za-z0-9]` with `-`; the result
/// contains no separators, no dots, and no percent-escapes. Distinct inputs
/// differing only in punctuation can collide; the rewriter resolves such
/// collisions with [`disambiguate`](super::disambiguate).
pub fn sanitize(input: &str) -> String {
    input
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect()
}
