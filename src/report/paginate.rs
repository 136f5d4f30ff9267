//! Page composition
//!
//! Splits a sequence into fixed-size pages, preserving order. The last page
//! holds the remainder; an empty sequence has no pages.

/// Split `items` into pages of at most `page_size` elements.
///
/// A `page_size` of zero is treated as one so every item still lands on a
/// page.
pub fn paginate<T, I>(items: I, page_size: usize) -> Vec<Vec<T>>
where
    I: IntoIterator<Item = T>,
{
    let size = page_size.max(1);
    let mut pages: Vec<Vec<T>> = Vec::new();
    let mut current = Vec::with_capacity(size);

    for item in items {
        current.push(item);
        if current.len() == size {
            pages.push(std::mem::replace(&mut current, Vec::with_capacity(size)));
        }
    }
    if !current.is_empty() {
        pages.push(current);
    }
    pages
}

/// Number of pages `len` items occupy.
pub const fn page_count(len: usize, page_size: usize) -> usize {
    let size = if page_size == 0 { 1 } else { page_size };
    len.div_ceil(size)
}
