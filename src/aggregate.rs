use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::blog_path;
use crate::options::{Options, SortOrder};
use crate::post::Post;
use crate::property::{self, is_truthy};
use crate::source::Source;

/// One calendar year's worth of posts, in ascending date order.
#[derive(Debug, Clone, Serialize)]
pub struct YearBucket {
    pub year: String,
    pub posts: Vec<Arc<Post>>,
}

/// The four derived collections. Records are shared between them, so
/// membership is by identity rather than by copy.
#[derive(Debug, Default)]
pub struct BlogLists {
    /// Newest first, at most `latest_quantity` entries.
    pub latest: Vec<Arc<Post>>,
    /// Ordered per `featured_post_order`, at most `featured_quantity`.
    pub featured: Vec<Arc<Post>>,
    /// Every classified post, newest first.
    pub all_sorted: Vec<Arc<Post>>,
    /// Year buckets, newest year first.
    pub annualized: Vec<YearBucket>,
}

/// Scan every document once, classify blog members and derive the four
/// collections. Total: an empty corpus yields four empty collections,
/// and no document can fail the pipeline.
#[must_use]
pub fn aggregate(source: &Source, options: &Options) -> BlogLists {
    let mut all = Vec::new();
    let mut featured = Vec::new();

    for (path, frontmatter) in source.documents() {
        if !blog_path::is_blog_member(path, &options.blog_directory) {
            continue;
        }

        let derived =
            blog_path::derive_path(path, &options.file_extension, options.use_permalinks);
        let post = Arc::new(Post::from_frontmatter(
            frontmatter,
            derived,
            &options.blog_object,
        ));

        let is_featured =
            property::resolve(frontmatter, "featuredBlogpost", None, &options.blog_object)
                .is_some_and(is_truthy);
        if is_featured {
            featured.push(Arc::clone(&post));
        }
        all.push(post);
    }

    // Working order is oldest-first; stability keeps equal dates in
    // scan order.
    all.sort_by_key(|post| post.date_key());

    featured.sort_by(|a, b| a.order_key().total_cmp(&b.order_key()));
    if options.featured_post_order == SortOrder::Desc {
        featured.reverse();
    }
    featured.truncate(options.featured_quantity);

    // Buckets are built from the ascending order, so each bucket's
    // posts stay oldest-first.
    let annualized = annualize(&all);

    // The published all-sorted list is newest-first; flipping here also
    // makes `latest` a plain prefix of it.
    all.reverse();
    let latest = all.iter().take(options.latest_quantity).cloned().collect();

    debug!(
        "classified {} blog posts ({} featured, {} years)",
        all.len(),
        featured.len(),
        annualized.len()
    );

    BlogLists {
        latest,
        featured,
        all_sorted: all,
        annualized,
    }
}

fn annualize(all_ascending: &[Arc<Post>]) -> Vec<YearBucket> {
    let mut buckets: Vec<YearBucket> = Vec::new();

    for post in all_ascending {
        let year = post.year_label();
        match buckets.iter_mut().find(|bucket| bucket.year == year) {
            Some(bucket) => bucket.posts.push(Arc::clone(post)),
            None => buckets.push(YearBucket {
                year,
                posts: vec![Arc::clone(post)],
            }),
        }
    }

    buckets.sort_by(|a, b| b.year.cmp(&a.year));

    buckets
}
