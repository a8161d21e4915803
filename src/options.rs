use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

/// Pipeline configuration. Any subset of keys may be supplied when
/// deserializing; the rest fall back to the defaults below. Legacy key
/// spellings (`featuredPostSortOrder`, `blogDirectoryName`) are accepted
/// as aliases here and nowhere else.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Options {
    pub latest_quantity: usize,
    pub featured_quantity: usize,
    #[serde(alias = "featuredPostSortOrder")]
    pub featured_post_order: SortOrder,
    pub file_extension: String,
    #[serde(alias = "blogDirectoryName")]
    pub blog_directory: String,
    /// Name of a nested frontmatter object holding the blog fields
    /// (e.g. `post` for `post.title`). Empty selects the flat schema.
    pub blog_object: String,
    pub use_permalinks: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            latest_quantity: 3,
            featured_quantity: 3,
            featured_post_order: SortOrder::Desc,
            file_extension: ".md".to_owned(),
            blog_directory: "./blog".to_owned(),
            blog_object: "post".to_owned(),
            use_permalinks: true,
        }
    }
}

impl Options {
    /// Canonicalize `blog_directory`: make it start with `./` and not
    /// end with `/`. Idempotent; nothing else is validated.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        if !self.blog_directory.starts_with("./") {
            self.blog_directory = format!("./{}", self.blog_directory);
        }
        if let Some(stripped) = self.blog_directory.strip_suffix('/') {
            self.blog_directory = stripped.to_owned();
        }
        self
    }
}
