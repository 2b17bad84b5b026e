//! Scoping changed files to the content prefix.

/// Keeps the paths that start with `prefix`, in input order.
///
/// This is a plain string prefix test: `book/content` also keeps
/// `book/contents.md`. Applying it twice gives the same result as once.
///
/// # Examples
///
/// ```
/// use ll_scanner::filter_by_prefix;
///
/// let changed = vec!["book/content/x.md".to_owned(), "README.md".to_owned()];
/// assert_eq!(filter_by_prefix(changed, "book/content"), vec!["book/content/x.md"]);
/// ```
#[must_use]
pub fn filter_by_prefix<I, S>(paths: I, prefix: &str) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    paths
        .into_iter()
        .map(Into::into)
        .filter(|path| path.starts_with(prefix))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn changed() -> Vec<String> {
        [
            "book/content/intro.md",
            ".github/workflows/ci.yml",
            "book/content/guides/a.md",
            "README.md",
            "book/website/_config.yml",
            "book/contents.md",
        ]
        .map(str::to_owned)
        .to_vec()
    }

    #[test]
    fn test_keeps_prefixed_paths_in_order() {
        assert_eq!(
            filter_by_prefix(changed(), "book/content"),
            vec![
                "book/content/intro.md",
                "book/content/guides/a.md",
                "book/contents.md",
            ]
        );
    }

    #[test]
    fn test_idempotent() {
        let once = filter_by_prefix(changed(), "book/content/");
        let twice = filter_by_prefix(once.clone(), "book/content/");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_empty_input() {
        assert!(filter_by_prefix(Vec::<String>::new(), "book/content").is_empty());
    }

    #[test]
    fn test_accepts_str_slices() {
        let kept = filter_by_prefix(["book/content/a.md", "docs/b.md"], "book");
        assert_eq!(kept, vec!["book/content/a.md"]);
    }
}
