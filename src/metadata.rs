use std::sync::{Arc, LockResult, Mutex, MutexGuard};

use serde::Serialize;

use crate::aggregate::{BlogLists, YearBucket};
use crate::markup;
use crate::post::Post;

/// Build-wide metadata context consumed by the template-rendering
/// stage. One per build, constructed and owned by the caller; the four
/// entries are written unconditionally on every pipeline run, empty
/// corpus included.
#[derive(Debug, Default, Serialize)]
pub struct Metadata {
    #[serde(rename = "latestBlogPosts")]
    pub latest_blog_posts: Vec<Arc<Post>>,
    #[serde(rename = "featuredBlogPosts")]
    pub featured_blog_posts: Vec<Arc<Post>>,
    #[serde(rename = "allSortedBlogPosts")]
    pub all_sorted_blog_posts: Vec<Arc<Post>>,
    #[serde(rename = "annualizedBlogPosts")]
    pub annualized_blog_posts: Vec<YearBucket>,
}

impl Metadata {
    pub fn publish(&mut self, lists: BlogLists) {
        self.latest_blog_posts = lists.latest;
        self.featured_blog_posts = lists.featured;
        self.all_sorted_blog_posts = lists.all_sorted;
        self.annualized_blog_posts = lists.annualized;
    }

    /// JSON view for rendering engines that consume plain values.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        markup::to_json(self)
    }
}

#[derive(Clone, Default)]
pub struct ArcMutex(pub Arc<Mutex<Metadata>>);

impl ArcMutex {
    #[must_use]
    pub fn new(metadata: Metadata) -> Self {
        Self(Arc::new(Mutex::new(metadata)))
    }

    pub fn lock(&self) -> LockResult<MutexGuard<'_, Metadata>> {
        self.0.as_ref().lock()
    }
}
