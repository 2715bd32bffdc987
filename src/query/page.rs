//! Page stage of the listing pipeline.
//!
//! Pages are 1-based. Requesting a page beyond range returns an empty
//! slice; callers clamp with [`PageSpec::clamp_page`] when they want the
//! nearest valid page instead.

// ===== PageSpec =====

/// Page window: 1-based page number and page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSpec {
    pub page: usize,
    pub page_size: usize,
}

pub const DEFAULT_PAGE_SIZE: usize = 25;

impl Default for PageSpec {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageSpec {
    /// Total number of pages for `count` items: `ceil(count/page_size)`,
    /// minimum 1 (an empty result set still has one empty page).
    pub fn total_pages(&self, count: usize) -> usize {
        if self.page_size == 0 {
            return 1;
        }
        count.div_ceil(self.page_size).max(1)
    }

    /// Clamp the page number into `[1, total_pages]`.
    pub fn clamp_page(&self, count: usize) -> usize {
        self.page.clamp(1, self.total_pages(count))
    }

    /// Slice the sorted set into the requested window. A page beyond range
    /// yields an empty slice, never a panic.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        if self.page == 0 || self.page_size == 0 {
            return &[];
        }
        let start = (self.page - 1).saturating_mul(self.page_size);
        if start >= items.len() {
            return &[];
        }
        let end = start.saturating_add(self.page_size).min(items.len());
        &items[start..end]
    }
}

// ===== Tests =====

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_takes_leading_items() {
        let items: Vec<u32> = (0..10).collect();
        let spec = PageSpec { page: 1, page_size: 3 };
        assert_eq!(spec.slice(&items), &[0, 1, 2]);
    }

    #[test]
    fn last_partial_page_is_short() {
        let items: Vec<u32> = (0..10).collect();
        let spec = PageSpec { page: 4, page_size: 3 };
        assert_eq!(spec.slice(&items), &[9]);
    }

    #[test]
    fn page_beyond_range_is_empty_not_panic() {
        let items: Vec<u32> = (0..10).collect();
        let spec = PageSpec { page: 99, page_size: 3 };
        assert!(spec.slice(&items).is_empty());
    }

    #[test]
    fn page_zero_is_empty() {
        let items: Vec<u32> = (0..10).collect();
        let spec = PageSpec { page: 0, page_size: 3 };
        assert!(spec.slice(&items).is_empty());
    }

    #[test]
    fn total_pages_rounds_up() {
        let spec = PageSpec { page: 1, page_size: 3 };
        assert_eq!(spec.total_pages(10), 4);
        assert_eq!(spec.total_pages(9), 3);
    }

    #[test]
    fn total_pages_is_at_least_one() {
        let spec = PageSpec { page: 1, page_size: 25 };
        assert_eq!(spec.total_pages(0), 1);
    }

    #[test]
    fn clamp_page_bounds_both_ends() {
        let spec = PageSpec { page: 99, page_size: 3 };
        assert_eq!(spec.clamp_page(10), 4);
        let spec = PageSpec { page: 0, page_size: 3 };
        assert_eq!(spec.clamp_page(10), 1);
        let spec = PageSpec { page: 2, page_size: 3 };
        assert_eq!(spec.clamp_page(10), 2);
    }

    #[test]
    fn pages_concatenate_to_full_set() {
        let items: Vec<u32> = (0..23).collect();
        let mut spec = PageSpec { page: 1, page_size: 5 };
        let mut rebuilt = Vec::new();
        for page in 1..=spec.total_pages(items.len()) {
            spec.page = page;
            rebuilt.extend_from_slice(spec.slice(&items));
        }
        assert_eq!(rebuilt, items);
    }

    #[test]
    fn zero_page_size_yields_single_empty_page() {
        let items: Vec<u32> = (0..10).collect();
        let spec = PageSpec { page: 1, page_size: 0 };
        assert!(spec.slice(&items).is_empty());
        assert_eq!(spec.total_pages(items.len()), 1);
    }
}
