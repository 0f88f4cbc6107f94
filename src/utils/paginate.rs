//! Page bounds for list endpoints

use std::ops::Range;

/// Index range of `page` (1-based) in a list of `total` items.
///
/// A page below 1 is treated as the first page and a page size of 0 falls
/// back to `default_page_size`. Pages past the end are empty.
pub fn paginate(page: usize, page_size: usize, default_page_size: usize, total: usize) -> Range<usize> {
    let page = page.max(1);
    let page_size = if page_size == 0 { default_page_size } else { page_size };

    let start = (page - 1).saturating_mul(page_size);
    if start >= total {
        return 0..0;
    }
    start..start.saturating_add(page_size).min(total)
}
