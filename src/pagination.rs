use serde::{Deserialize, Serialize};

/// Widest run of page buttons the pagination bar renders before collapsing
/// the remainder behind ellipses.
pub const MAX_VISIBLE_PAGES: usize = 5;

/// One entry of the pagination bar.
///
/// Omitted ranges are a dedicated variant rather than a sentinel page number,
/// so the renderer can never confuse a gap with a clickable page.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum PageEntry {
    Page(usize),
    Ellipsis,
}

/// Computes the display window of page numbers around `current_page`.
///
/// When everything fits (`total_pages <= max_visible`) the window is simply
/// `1..=total_pages`. Otherwise page 1 and the last page are always present,
/// up to `max_visible - 2` pages surround the current one, and an
/// [`PageEntry::Ellipsis`] marks each side where pages were omitted.
///
/// Out-of-range input is clamped rather than rejected: `current_page` is
/// pulled into `[1, total_pages]`, and `total_pages == 0` yields an empty
/// window. Callers render no pagination control at all when
/// `total_pages <= 1`; the single-entry window returned for one page exists
/// only so the contract stays total.
pub fn page_window(current_page: usize, total_pages: usize, max_visible: usize) -> Vec<PageEntry> {
    if total_pages == 0 {
        return Vec::new();
    }

    let current = current_page.clamp(1, total_pages);

    if total_pages <= max_visible {
        return (1..=total_pages).map(PageEntry::Page).collect();
    }

    let mut start = current.saturating_sub(1).max(2);
    let mut end = (current + 1).min(total_pages - 1);

    // Near the edges the window is widened so the bar always shows the same
    // number of entries.
    if current <= 2 {
        end = max_visible - 1;
    }
    if current + 1 >= total_pages {
        start = total_pages + 2 - max_visible;
    }

    let mut pages = Vec::with_capacity(max_visible + 2);
    pages.push(PageEntry::Page(1));

    if start > 2 {
        pages.push(PageEntry::Ellipsis);
    }
    pages.extend((start..=end).map(PageEntry::Page));

    if end < total_pages - 1 {
        pages.push(PageEntry::Ellipsis);
    }
    pages.push(PageEntry::Page(total_pages));

    pages
}

/// A page of items together with its display-ready pagination window.
#[derive(Clone, Debug, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pages: Vec<PageEntry>,
    pub page: usize,
}

impl<T> Paginated<T> {
    /// Wraps one page of items, clamping `current_page` into
    /// `[1, total_pages]` and windowing with [`MAX_VISIBLE_PAGES`].
    pub fn new(items: Vec<T>, current_page: usize, total_pages: usize) -> Self {
        let current_page = current_page.clamp(1, total_pages.max(1));

        let pages = page_window(current_page, total_pages, MAX_VISIBLE_PAGES);

        Self {
            items,
            pages,
            page: current_page,
        }
    }
}
