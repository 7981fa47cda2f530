//! Client-side pagination over an already filtered list.

/// Number of pages for `total` items; `0` for an empty list.
pub fn page_count(total: usize, page_size: usize) -> usize {
    let page_size = page_size.max(1);
    total.div_ceil(page_size)
}

/// Slice out page `page_index` (clamped into range).
///
/// Returns the items of the page and the page count.
pub fn paginate<T: Clone>(items: &[T], page_size: usize, page_index: usize) -> (Vec<T>, usize) {
    let page_size = page_size.max(1);
    let count = page_count(items.len(), page_size);
    let index = clamp_index(page_index, count);
    let start = index * page_size;
    let end = (start + page_size).min(items.len());
    let page = items.get(start..end).map(<[T]>::to_vec).unwrap_or_default();
    (page, count)
}

fn clamp_index(index: usize, page_count: usize) -> usize {
    index.min(page_count.saturating_sub(1))
}

/// Current page of a list whose size changes (filtering, deletes).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    page_index: usize,
    page_size: usize,
    total: usize,
}

impl Paginator {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_index: 0,
            page_size: page_size.max(1),
            total: 0,
        }
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn page_count(&self) -> usize {
        page_count(self.total, self.page_size)
    }

    /// Item count changed; pull the index back if it now points past the end.
    pub fn set_total(&mut self, total: usize) {
        self.total = total;
        self.page_index = clamp_index(self.page_index, self.page_count());
    }

    /// Keeps the first visible item on screen where possible.
    pub fn set_page_size(&mut self, page_size: usize) {
        let first_item = self.page_index * self.page_size;
        self.page_size = page_size.max(1);
        self.page_index = clamp_index(first_item / self.page_size, self.page_count());
    }

    pub fn go_to(&mut self, page_index: usize) {
        self.page_index = clamp_index(page_index, self.page_count());
    }

    pub fn next(&mut self) {
        if self.page_index + 1 < self.page_count() {
            self.page_index += 1;
        }
    }

    pub fn prev(&mut self) {
        self.page_index = self.page_index.saturating_sub(1);
    }

    pub fn first(&mut self) {
        self.page_index = 0;
    }

    pub fn last(&mut self) {
        self.page_index = self.page_count().saturating_sub(1);
    }

    pub fn has_next(&self) -> bool {
        self.page_index + 1 < self.page_count()
    }

    pub fn has_prev(&self) -> bool {
        self.page_index > 0
    }

    /// Items of the current page.
    pub fn slice<T: Clone>(&self, items: &[T]) -> Vec<T> {
        paginate(items, self.page_size, self.page_index).0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0, 10), 0);
        assert_eq!(page_count(1, 10), 1);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(11, 10), 2);
        assert_eq!(page_count(5, 0), 5, "zero page size treated as 1");
    }

    #[test]
    fn test_page_count_matches_ceil_for_all_sizes() {
        for n in 0..50usize {
            for p in 1..12usize {
                let expected = (n as f64 / p as f64).ceil() as usize;
                assert_eq!(page_count(n, p), expected, "n={n} p={p}");
            }
        }
    }

    #[test]
    fn test_paginate() {
        let items: Vec<u32> = (1..=7).collect();
        assert_eq!(paginate(&items, 3, 0), (vec![1, 2, 3], 3));
        assert_eq!(paginate(&items, 3, 2), (vec![7], 3));
        // past the end -> last page
        assert_eq!(paginate(&items, 3, 9), (vec![7], 3));

        let empty: Vec<u32> = Vec::new();
        assert_eq!(paginate(&empty, 3, 4), (vec![], 0));
    }

    #[test]
    fn test_navigation_stays_in_range() {
        let mut p = Paginator::new(4);
        p.set_total(10);
        assert_eq!(p.page_count(), 3);

        p.prev();
        assert_eq!(p.page_index(), 0);
        for _ in 0..10 {
            p.next();
            assert!(p.page_index() < p.page_count());
        }
        assert_eq!(p.page_index(), 2);
        assert!(!p.has_next());

        p.first();
        assert_eq!(p.page_index(), 0);
        assert!(!p.has_prev());
        p.last();
        assert_eq!(p.page_index(), 2);
    }

    #[test]
    fn test_navigation_on_empty_list() {
        let mut p = Paginator::new(4);
        p.next();
        p.prev();
        p.last();
        assert_eq!(p.page_index(), 0);
        assert_eq!(p.page_count(), 0);
    }

    #[test]
    fn test_shrink_clamps_index() {
        let mut p = Paginator::new(5);
        p.set_total(23);
        p.last();
        assert_eq!(p.page_index(), 4);

        // filter narrowed the list
        p.set_total(7);
        assert_eq!(p.page_index(), 1);

        // delete the only item of page 1
        p.set_total(5);
        assert_eq!(p.page_index(), 0);

        p.set_total(0);
        assert_eq!(p.page_index(), 0);
    }

    #[test]
    fn test_set_page_size_keeps_position() {
        let mut p = Paginator::new(10);
        p.set_total(95);
        p.go_to(5);
        assert_eq!(p.page_index(), 5);

        // first visible item was #50
        p.set_page_size(25);
        assert_eq!(p.page_index(), 2);

        p.set_page_size(100);
        assert_eq!(p.page_index(), 0);
    }

    #[test]
    fn test_go_to_clamps() {
        let mut p = Paginator::new(10);
        p.set_total(25);
        p.go_to(99);
        assert_eq!(p.page_index(), 2);
    }

    #[test]
    fn test_slice() {
        let mut p = Paginator::new(2);
        let items = vec!["a", "b", "c"];
        p.set_total(items.len());
        p.next();
        assert_eq!(p.slice(&items), vec!["c"]);
    }
}
