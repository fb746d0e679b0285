//! Pagination cursor plus the server-reported total.

use reservations_api::{DEFAULT_PAGE, DEFAULT_PER_PAGE};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    /// 1-based page number.
    pub page: i64,
    pub per_page: i64,
    /// Matching record count from the last successful fetch.
    pub total: i64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
            total: 0,
        }
    }
}

impl Pagination {
    pub fn with_per_page(per_page: i64) -> Self {
        Self {
            per_page: if per_page > 0 {
                per_page
            } else {
                DEFAULT_PER_PAGE
            },
            ..Self::default()
        }
    }

    /// `ceil(total / per_page)`. Holds for any total the server reports.
    pub fn total_pages(&self) -> i64 {
        if self.total <= 0 {
            return 0;
        }
        let per_page = self.per_page.max(1);
        self.total / per_page + i64::from(self.total % per_page != 0)
    }

    /// Highest page the cursor may point at. Never below 1, even for an empty result.
    pub fn last_page(&self) -> i64 {
        self.total_pages().max(1)
    }

    pub fn has_next(&self) -> bool {
        self.page.saturating_mul(self.per_page) < self.total
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    /// Pulls `page` back into `1..=last_page()`. Returns true if it moved.
    pub fn clamp(&mut self) -> bool {
        let clamped = self.page.clamp(1, self.last_page());
        let moved = clamped != self.page;
        self.page = clamped;
        moved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pagination(page: i64, per_page: i64, total: i64) -> Pagination {
        Pagination {
            page,
            per_page,
            total,
        }
    }

    #[test]
    fn defaults() {
        let p = Pagination::default();
        assert_eq!((p.page, p.per_page, p.total), (1, 10, 0));
        assert_eq!(p.total_pages(), 0);
        assert_eq!(p.last_page(), 1);
        assert!(!p.has_next());
        assert!(!p.has_prev());
    }

    #[test]
    fn last_page_of_twenty_five() {
        let p = pagination(3, 10, 25);
        assert_eq!(p.total_pages(), 3);
        assert!(!p.has_next());
        assert!(p.has_prev());
    }

    #[test]
    fn exact_multiple_has_no_extra_page() {
        let p = pagination(2, 10, 20);
        assert_eq!(p.total_pages(), 2);
        assert!(!p.has_next());

        let p = pagination(1, 10, 20);
        assert!(p.has_next());
        assert!(!p.has_prev());
    }

    #[test]
    fn clamp_after_total_shrinks() {
        let mut p = pagination(3, 10, 20);
        assert!(p.clamp());
        assert_eq!(p.page, 2);
        assert!(!p.clamp());
    }

    #[test]
    fn clamp_empty_result_to_first_page() {
        let mut p = pagination(4, 10, 0);
        assert!(p.clamp());
        assert_eq!(p.page, 1);
    }

    #[test]
    fn huge_page_does_not_overflow() {
        let p = pagination(i64::MAX, 10, 25);
        assert!(!p.has_next());
        assert!(p.has_prev());

        let mut p = pagination(i64::MAX, 100, i64::MAX);
        assert!(!p.has_next());
        assert!(p.clamp());
        assert_eq!(p.page, i64::MAX / 100 + 1);
    }

    #[test]
    fn huge_total_does_not_overflow() {
        let p = pagination(1, 10, i64::MAX);
        assert_eq!(p.total_pages(), i64::MAX / 10 + 1);
        assert_eq!(p.last_page(), i64::MAX / 10 + 1);
        assert!(p.has_next());

        assert_eq!(pagination(1, 1, i64::MAX).total_pages(), i64::MAX);
    }

    #[test]
    fn non_positive_per_page_falls_back() {
        assert_eq!(Pagination::with_per_page(0).per_page, 10);
        assert_eq!(Pagination::with_per_page(25).per_page, 25);
    }
}
