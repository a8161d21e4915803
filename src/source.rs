use std::collections::{btree_map, BTreeMap};

use serde_yaml::Mapping;

/// The in-memory working set handed over by the build: one frontmatter
/// bag per document path. Paths are forward-slash strings, with or
/// without a leading `./`; not every document is a blog post.
///
/// A `BTreeMap` keeps the classification scan's iteration order
/// deterministic, which the stable sorts downstream inherit as their
/// tie-break.
#[derive(Debug, Clone, Default)]
pub struct Source {
    pub inner: BTreeMap<String, Mapping>,
}

impl Source {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<String>, frontmatter: Mapping) {
        self.inner.insert(path.into(), frontmatter);
    }

    pub fn documents(&self) -> btree_map::Iter<'_, String, Mapping> {
        self.inner.iter()
    }
}

impl FromIterator<(String, Mapping)> for Source {
    fn from_iter<T: IntoIterator<Item = (String, Mapping)>>(iter: T) -> Self {
        Source {
            inner: iter.into_iter().collect(),
        }
    }
}
