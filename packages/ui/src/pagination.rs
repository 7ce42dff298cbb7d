//! # Client-side pagination
//!
//! The task and user lists live fully in memory, so paging is pure index
//! arithmetic: [`total_pages`], [`page_bounds`], and a bounded window of
//! page numbers for the button row ([`page_numbers`]). [`Pager`] bundles the
//! two knobs a view keeps in a signal; [`Pagination`] is the button row
//! itself.
//!
//! All inputs are clamped defensively — a zero page size or a page past the
//! end never panics, it just shows the nearest valid slice.

use dioxus::prelude::*;

const MAX_VISIBLE_PAGES: usize = 5;

/// Number of pages needed for `total_items` at `per_page` items each.
pub fn total_pages(total_items: usize, per_page: usize) -> usize {
    total_items.div_ceil(per_page.max(1))
}

/// Half-open index range of the items visible on `current_page`.
pub fn page_bounds(current_page: usize, per_page: usize, total_items: usize) -> (usize, usize) {
    let per_page = per_page.max(1);
    let start = (current_page.max(1) - 1) * per_page;
    let end = (start + per_page).min(total_items);
    (start.min(total_items), end)
}

/// Window of up to five page numbers centred on the current page, clamped
/// to `[1, total_pages]`. Empty when there are no pages at all.
pub fn page_numbers(current_page: usize, total_pages: usize) -> Vec<usize> {
    if total_pages == 0 {
        return Vec::new();
    }
    let current = current_page.clamp(1, total_pages);
    let mut start = current.saturating_sub(MAX_VISIBLE_PAGES / 2).max(1);
    let end = (start + MAX_VISIBLE_PAGES - 1).min(total_pages);
    if end + 1 - start < MAX_VISIBLE_PAGES {
        start = end.saturating_sub(MAX_VISIBLE_PAGES - 1).max(1);
    }
    (start..=end).collect()
}

/// Paging state for views that slice a local list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    pub page: usize,
    pub per_page: usize,
}

impl Pager {
    pub fn new(per_page: usize) -> Self {
        Self {
            page: 1,
            per_page: per_page.max(1),
        }
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Changing the page size always jumps back to the first page.
    pub fn set_per_page(&mut self, per_page: usize) {
        self.per_page = per_page.max(1);
        self.page = 1;
    }

    pub fn total_pages(&self, total_items: usize) -> usize {
        total_pages(total_items, self.per_page)
    }

    pub fn bounds(&self, total_items: usize) -> (usize, usize) {
        page_bounds(self.page, self.per_page, total_items)
    }

    /// The visible slice of `items` for the current page.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let (start, end) = self.bounds(items.len());
        &items[start..end]
    }
}

/// Reusable pagination row: per-page selector, first/prev/window/next/last
/// buttons, and a "showing X - Y of Z" caption. Renders nothing for an
/// empty list.
#[component]
pub fn Pagination(
    current_page: usize,
    per_page: usize,
    total_items: usize,
    on_page_change: EventHandler<usize>,
    on_per_page_change: EventHandler<usize>,
) -> Element {
    if total_items == 0 {
        return rsx! {};
    }

    let pages = total_pages(total_items, per_page);
    let (start, end) = page_bounds(current_page, per_page, total_items);
    let window = page_numbers(current_page, pages);
    let first_shown = start + 1;

    rsx! {
        div { class: "pagination",
            div { class: "pagination-size",
                label { "Showing:" }
                select {
                    value: "{per_page}",
                    onchange: move |evt| {
                        if let Ok(size) = evt.value().parse::<usize>() {
                            on_per_page_change.call(size);
                        }
                    },
                    for size in [5usize, 10, 15, 20, 25, 50] {
                        option { value: "{size}", selected: size == per_page, "{size}" }
                    }
                }
                span { "per page" }
            }

            if pages > 1 {
                div { class: "pagination-buttons",
                    button {
                        disabled: current_page <= 1,
                        onclick: move |_| on_page_change.call(1),
                        title: "First page",
                        "«"
                    }
                    button {
                        disabled: current_page <= 1,
                        onclick: move |_| on_page_change.call(current_page.saturating_sub(1).max(1)),
                        title: "Previous page",
                        "‹"
                    }
                    for page in window {
                        button {
                            class: if page == current_page { "pagination-page pagination-page--active" } else { "pagination-page" },
                            onclick: move |_| on_page_change.call(page),
                            "{page}"
                        }
                    }
                    button {
                        disabled: current_page >= pages,
                        onclick: move |_| on_page_change.call((current_page + 1).min(pages)),
                        title: "Next page",
                        "›"
                    }
                    button {
                        disabled: current_page >= pages,
                        onclick: move |_| on_page_change.call(pages),
                        title: "Last page",
                        "»"
                    }
                }
            }

            div { class: "pagination-caption",
                "Showing {first_shown} - {end} of {total_items}"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(23, 10), 3);
    }

    #[test]
    fn test_page_bounds_example() {
        // 23 items, 10 per page, page 3 -> [20, 23)
        assert_eq!(page_bounds(3, 10, 23), (20, 23));
        assert_eq!(total_pages(23, 10), 3);
    }

    #[test]
    fn test_slice_length_never_exceeds_per_page() {
        for total in 0..40usize {
            for per_page in 1..12usize {
                for page in 1..8usize {
                    let (start, end) = page_bounds(page, per_page, total);
                    assert!(end >= start);
                    assert!(end - start <= per_page);
                    if start >= total {
                        assert_eq!(start, end);
                    } else {
                        assert_eq!(end - start, per_page.min(total - start));
                    }
                }
            }
        }
    }

    #[test]
    fn test_page_past_the_end_is_empty_not_a_panic() {
        assert_eq!(page_bounds(9, 10, 23), (23, 23));
    }

    #[test]
    fn test_malformed_inputs_are_clamped() {
        // Zero page size behaves like one item per page.
        assert_eq!(total_pages(3, 0), 3);
        assert_eq!(page_bounds(2, 0, 3), (1, 2));
        // Page zero behaves like page one.
        assert_eq!(page_bounds(0, 10, 23), (0, 10));
    }

    #[test]
    fn test_page_window_is_centred_and_clamped() {
        assert_eq!(page_numbers(1, 10), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_numbers(5, 10), vec![3, 4, 5, 6, 7]);
        assert_eq!(page_numbers(10, 10), vec![6, 7, 8, 9, 10]);
        assert_eq!(page_numbers(2, 3), vec![1, 2, 3]);
        assert_eq!(page_numbers(1, 0), Vec::<usize>::new());
    }

    #[test]
    fn test_pager_per_page_change_resets_to_first_page() {
        let mut pager = Pager::new(10);
        pager.set_page(3);
        assert_eq!(pager.page, 3);

        pager.set_per_page(25);
        assert_eq!(pager.page, 1);
        assert_eq!(pager.per_page, 25);
    }

    #[test]
    fn test_pager_slice() {
        let items: Vec<usize> = (0..23).collect();
        let mut pager = Pager::new(10);
        pager.set_page(3);
        assert_eq!(pager.slice(&items), &[20, 21, 22]);

        pager.set_page(5);
        assert!(pager.slice(&items).is_empty());
    }
}
