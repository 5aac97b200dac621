//! Extension detection on the URL path.

/// Splits the extension off the final segment of `path` (a URL path with any
/// trailing slash already removed).
///
/// Returns `(path_without_extension, Some(".ext"))` when the last segment
/// carries a non-empty extension; dot-files (`/.hidden`) and trailing dots
/// (`/name.`) yield no extension.
pub fn split_extension(path: &str) -> (&str, Option<&str>) {
    let segment_start = path.rfind('/').map(|i| i + 1).unwrap_or(0);
    let segment = &path[segment_start..];

    match segment.rfind('.') {
        Some(dot) if dot > 0 && dot + 1 < segment.len() => {
            let split = segment_start + dot;
            (&path[..split], Some(&path[split..]))
        }
        _ => (path, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_final_segment_extension() {
        assert_eq!(split_extension("/img/logo.png"), ("/img/logo", Some(".png")));
        assert_eq!(split_extension("/a.b/c.css"), ("/a.b/c", Some(".css")));
    }

    #[test]
    fn no_extension() {
        assert_eq!(split_extension("/courses"), ("/courses", None));
        assert_eq!(split_extension(""), ("", None));
    }

    #[test]
    fn dot_file_and_trailing_dot() {
        assert_eq!(split_extension("/.hidden"), ("/.hidden", None));
        assert_eq!(split_extension("/name."), ("/name.", None));
    }

    #[test]
    fn dot_in_earlier_segment_only() {
        assert_eq!(split_extension("/v1.2/app"), ("/v1.2/app", None));
    }
}
