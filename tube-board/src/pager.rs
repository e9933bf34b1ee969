//! Paging a variable-length list through a fixed-height panel.

/// Rows shown per page.
pub const DEFAULT_PAGE_SIZE: usize = 4;

/// The page of `list` starting at `offset`.
///
/// Shorter than `page_size` near the end of the list, and empty if `offset`
/// is past it.
pub fn visible_page<T>(list: &[T], offset: usize, page_size: usize) -> &[T] {
    let start = offset.min(list.len());
    let end = offset.saturating_add(page_size).min(list.len());
    &list[start..end]
}

/// Offset of the page after the one at `offset`, wrapping to 0 at the end.
///
/// ```
/// use tube_board::pager::advance;
///
/// let offsets: Vec<_> = std::iter::successors(Some(0), |&o| Some(advance(o, 10, 4)))
///     .take(6)
///     .collect();
/// assert_eq!(offsets, [0, 4, 8, 0, 4, 8]);
/// ```
pub fn advance(offset: usize, len: usize, page_size: usize) -> usize {
    let next = offset + page_size;
    if next >= len { 0 } else { next }
}

/// Scroll position through the cached arrivals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pager {
    page_size: usize,
    offset: usize,
}

impl Pager {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            offset: 0,
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Return the current page of `list` and move to the next one.
    ///
    /// If `list` shrank below the current offset since the last call, paging
    /// restarts from the top rather than producing an empty page.
    pub fn next_page<'a, T>(&mut self, list: &'a [T]) -> (usize, &'a [T]) {
        if self.offset >= list.len() {
            self.offset = 0;
        }
        let offset = self.offset;
        let page = visible_page(list, offset, self.page_size);
        self.offset = advance(offset, list.len(), self.page_size);
        (offset, page)
    }
}

impl Default for Pager {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}
