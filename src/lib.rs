#![allow(clippy::missing_errors_doc)]

pub mod aggregate;
pub mod blog_path;
mod markup;
pub mod metadata;
pub mod options;
pub mod post;
pub mod property;
pub mod source;

use tracing::debug;

pub use aggregate::{BlogLists, YearBucket};
pub use metadata::Metadata;
pub use options::{Options, SortOrder};
pub use post::Post;
pub use source::Source;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("metadata store lock was poisoned")]
    MetadataPoisoned,
}

/// Run the pipeline once: classify every document, derive the four
/// blog collections and publish them into the shared metadata store.
///
/// Returning is the completion signal: downstream build stages may
/// read the store only after `run` comes back `Ok`. Per-document data
/// problems never surface here; only an unavailable store does.
pub fn run(
    source: &Source,
    metadata: &metadata::ArcMutex,
    options: Options,
) -> Result<(), Error> {
    let options = options.normalize();
    debug!("running blog-lists with options: {options:?}");

    let lists = aggregate::aggregate(source, &options);

    let mut metadata = metadata.lock().map_err(|_| Error::MetadataPoisoned)?;
    metadata.publish(lists);

    Ok(())
}
