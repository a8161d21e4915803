/// Whether a document path falls inside the blog directory.
///
/// Matching is substring-based against both the canonical (`./blog/`)
/// and bare (`blog/`) forms, so document sets enumerated with or
/// without the relative-root prefix both work. A path that merely
/// contains the directory name somewhere (`notblog/x.md`) also matches;
/// that looseness is pinned by test.
#[must_use]
pub fn is_blog_member(file: &str, blog_directory: &str) -> bool {
    let bare = blog_directory
        .strip_prefix("./")
        .unwrap_or(blog_directory);

    file.contains(&format!("{blog_directory}/")) || file.contains(&format!("{bare}/"))
}

/// Derive the public-facing path for a document.
///
/// Permalinks on: drop the first occurrence of the extension, then one
/// trailing `/index` segment. Permalinks off: swap the first occurrence
/// of the extension for `.html`.
#[must_use]
pub fn derive_path(file: &str, file_extension: &str, use_permalinks: bool) -> String {
    if use_permalinks {
        let path = file.replacen(file_extension, "", 1);
        match path.strip_suffix("/index") {
            Some(stripped) => stripped.to_owned(),
            None => path,
        }
    } else {
        file.replacen(file_extension, ".html", 1)
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::{derive_path, is_blog_member};

    #[test]
    fn matches_with_and_without_relative_prefix() {
        assert!(is_blog_member("blog/post-a.md", "./blog"));
        assert!(is_blog_member("./blog/post-a.md", "./blog"));
        assert!(is_blog_member("site/blog/post-a.md", "./blog"));
    }

    #[test]
    fn rejects_paths_outside_the_blog_directory() {
        assert!(!is_blog_member("pages/about.md", "./blog"));
        assert!(!is_blog_member("blog.md", "./blog"));
    }

    #[test]
    fn substring_matching_stays_permissive() {
        // Not a proper path segment, but the substring rule accepts it.
        assert!(is_blog_member("notblog/x.md", "./blog"));
    }

    #[test]
    fn permalink_path_drops_the_extension() {
        assert_eq!("blog/post-a", derive_path("blog/post-a.md", ".md", true));
    }

    #[test]
    fn permalink_path_collapses_index_files() {
        assert_eq!(
            "blog/post-a",
            derive_path("blog/post-a/index.md", ".md", true)
        );
    }

    #[test]
    fn non_permalink_path_gets_an_html_extension() {
        assert_eq!(
            "blog/post-a.html",
            derive_path("blog/post-a.md", ".md", false)
        );
    }

    #[test]
    fn only_the_first_extension_occurrence_is_replaced() {
        assert_eq!("blog/md.md", derive_path("blog/md.md.md", ".md", true));
    }
}
