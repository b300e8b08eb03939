//! Collection sources and sinks.
//!
//! A source yields the persisted drawings in paint order; a sink accepts one
//! committed shape at a time and answers with the identifier it assigned.

mod file;
mod http;
mod memory;

pub use file::FileCollection;
pub use http::HttpCollection;
pub use memory::MemoryCollection;

use crate::document::{Drawing, DrawingCollection};
use crate::shapes::Shape;
use std::future::Future;
use std::pin::Pin;
use thiserror::Error;

/// Storage errors.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Collection not found: {0}")]
    NotFound(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("IO error: {0}")]
    Io(String),
    #[error("HTTP error: {0}")]
    Http(String),
    #[error("Storage error: {0}")]
    Other(String),
}

/// Result type for storage operations.
pub type SourceResult<T> = Result<T, SourceError>;

/// Boxed future for async storage operations.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Read path: the ordered list of persisted drawings.
pub trait CollectionSource: Send + Sync {
    /// Fetch every drawing, oldest first.
    fn fetch_all(&self) -> BoxFuture<'_, SourceResult<Vec<Drawing>>>;
}

/// Write path: append one committed shape.
pub trait CollectionSink: Send + Sync {
    /// Persist `shape` after the existing drawings. Returns the assigned id.
    fn append(&self, shape: &Shape) -> BoxFuture<'_, SourceResult<String>>;
}

/// A backend that can be read from and appended to.
pub trait DrawingStore: CollectionSource + CollectionSink {}

impl<T: CollectionSource + CollectionSink> DrawingStore for T {}

/// Fetch the collection, falling back to an empty one on failure.
pub async fn fetch_or_empty<S>(source: &S) -> DrawingCollection
where
    S: CollectionSource + ?Sized,
{
    match source.fetch_all().await {
        Ok(drawings) => {
            log::info!("Fetched {} drawings", drawings.len());
            DrawingCollection::from_drawings(drawings)
        }
        Err(e) => {
            log::error!("Error fetching drawings: {}", e);
            DrawingCollection::new()
        }
    }
}

/// Open a store from a location string: an `http(s)://` base URL or a
/// path to a JSON file.
pub fn open(location: &str) -> SourceResult<Box<dyn DrawingStore>> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Ok(Box::new(HttpCollection::new(location)?))
    } else {
        Ok(Box::new(FileCollection::new(location)))
    }
}

/// Reject shapes that must never be persisted.
pub(crate) fn check_appendable(shape: &Shape) -> SourceResult<()> {
    shape
        .validate()
        .map_err(|e| SourceError::Serialization(format!("Refusing to store shape: {}", e)))
}

#[cfg(test)]
pub(crate) fn block_on<F: std::future::Future>(f: F) -> F::Output {
    // Simple blocking executor for tests
    use std::task::{Context, Poll, RawWaker, RawWakerVTable, Waker};

    fn dummy_raw_waker() -> RawWaker {
        fn no_op(_: *const ()) {}
        fn clone(_: *const ()) -> RawWaker {
            dummy_raw_waker()
        }
        static VTABLE: RawWakerVTable = RawWakerVTable::new(clone, no_op, no_op, no_op);
        RawWaker::new(std::ptr::null(), &VTABLE)
    }

    let waker = unsafe { Waker::from_raw(dummy_raw_waker()) };
    let mut cx = Context::from_waker(&waker);
    let mut f = std::pin::pin!(f);

    loop {
        match f.as_mut().poll(&mut cx) {
            Poll::Ready(result) => return result,
            Poll::Pending => {}
        }
    }
}
