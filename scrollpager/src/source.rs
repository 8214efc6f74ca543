use alloc::vec::Vec;

use crate::{FetchError, Page, PageRequest};

/// A paged data source: the replaceable collaborator behind a [`crate::Pager`].
///
/// `fetch` takes `(page, page_size)` and returns `(items, has_more)`. An empty page (or
/// [`FetchError::EndOfData`]) ends pagination for good; [`FetchError::Transient`] leaves the
/// pager free to retry the same page later.
///
/// Closures `FnMut(PageRequest) -> Result<Page<T>, FetchError>` implement this trait.
pub trait PageSource<T> {
    fn fetch(&mut self, request: PageRequest) -> Result<Page<T>, FetchError>;
}

impl<T, F> PageSource<T> for F
where
    F: FnMut(PageRequest) -> Result<Page<T>, FetchError>,
{
    fn fetch(&mut self, request: PageRequest) -> Result<Page<T>, FetchError> {
        self(request)
    }
}

/// An in-memory source that serves contiguous slices of a fixed dataset.
///
/// The dataset is set once and never mutated. Pages past the end come back empty; a short
/// final page still reports `has_more = true`, so the end is detected by the following (empty)
/// fetch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SliceSource<T> {
    items: Vec<T>,
}

impl<T: Clone> SliceSource<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the slice for `request`, clamped to the dataset.
    pub fn slice(&self, request: PageRequest) -> &[T] {
        let len = self.items.len();
        let start = request.offset().min(len);
        let end = request.end().min(len);
        &self.items[start..end]
    }

    pub fn into_inner(self) -> Vec<T> {
        self.items
    }
}

impl<T: Clone> FromIterator<T> for SliceSource<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T: Clone> PageSource<T> for SliceSource<T> {
    fn fetch(&mut self, request: PageRequest) -> Result<Page<T>, FetchError> {
        let items = self.slice(request).to_vec();
        let has_more = !items.is_empty();
        ptrace!(
            page = request.page,
            page_size = request.page_size,
            returned = items.len(),
            "SliceSource::fetch"
        );
        Ok(Page::new(items, has_more))
    }
}
