//! Offset pagination window shared by the list screens and the table widget.
//!
//! The window is owned by whoever fetches the data (the controller). Widgets only
//! read it and ask for a new one through [`PageChange`].

/// Page sizes offered to the user.
pub const PAGE_SIZE_OPTIONS: [u64; 4] = [2, 10, 20, 50];

pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// A requested `(skip, take)` pair, emitted when the user navigates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageChange {
    pub skip: u64,
    pub take: u64,
}

/// `skip`/`take`/`total` of the page currently shown.
///
/// Callers must never construct a window with `take == 0`; the math below still
/// stays panic-free if they do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub skip: u64,
    pub take: u64,
    pub total: u64,
}

impl PageWindow {
    pub fn new(skip: u64, take: u64, total: u64) -> Self {
        Self { skip, take, total }
    }

    /// First page of an empty dataset.
    pub fn first(take: u64) -> Self {
        Self::new(0, take, 0)
    }

    /// One-based page number.
    pub fn current_page(&self) -> u64 {
        match self.take {
            0 => 1,
            take => self.skip / take + 1,
        }
    }

    pub fn total_pages(&self) -> u64 {
        match self.take {
            0 => 0,
            take => self.total.div_ceil(take),
        }
    }

    pub fn has_previous(&self) -> bool {
        self.skip > 0
    }

    pub fn has_next(&self) -> bool {
        self.skip.saturating_add(self.take) < self.total
    }

    pub fn next(&self) -> Option<PageChange> {
        self.has_next().then(|| PageChange {
            skip: self.skip + self.take,
            take: self.take,
        })
    }

    pub fn previous(&self) -> Option<PageChange> {
        self.has_previous().then(|| PageChange {
            skip: self.skip.saturating_sub(self.take),
            take: self.take,
        })
    }

    /// Changing the page size always goes back to the first page.
    pub fn with_page_size(&self, take: u64) -> PageChange {
        PageChange { skip: 0, take }
    }

    /// `skip` points past the data, e.g. after a delete shrank `total`.
    pub fn is_out_of_range(&self) -> bool {
        self.total > 0 && self.skip >= self.total
    }

    /// Moves `skip` to the start of the last page when it is out of range.
    pub fn clamped(&self) -> Self {
        if !self.is_out_of_range() || self.take == 0 {
            return *self;
        }
        let last_page_start = (self.total - 1) / self.take * self.take;
        Self::new(last_page_start, self.take, self.total)
    }

    pub fn apply(&mut self, change: PageChange) {
        self.skip = change.skip;
        self.take = change.take;
    }
}

impl Default for PageWindow {
    fn default() -> Self {
        Self::first(DEFAULT_PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_math_holds_for_small_windows() {
        for take in 1..=7_u64 {
            for total in 0..=30_u64 {
                for skip in (0..=30_u64).step_by(take as usize) {
                    let window = PageWindow::new(skip, take, total);
                    assert_eq!(window.current_page(), skip / take + 1);
                    assert_eq!(window.total_pages(), total.div_ceil(take));
                    assert_eq!(window.has_previous(), skip != 0);
                    assert_eq!(window.has_next(), skip + take < total);
                }
            }
        }
    }

    #[test]
    fn last_partial_page() {
        let window = PageWindow::new(20, 10, 25);
        assert_eq!(window.current_page(), 3);
        assert_eq!(window.total_pages(), 3);
        assert!(window.next().is_none());
        assert_eq!(window.previous(), Some(PageChange { skip: 10, take: 10 }));
    }

    #[test]
    fn empty_dataset_has_no_pages_and_no_navigation() {
        let window = PageWindow::new(0, 10, 0);
        assert_eq!(window.total_pages(), 0);
        assert_eq!(window.current_page(), 1);
        assert!(window.next().is_none());
        assert!(window.previous().is_none());
    }

    #[test]
    fn zero_take_does_not_panic() {
        let window = PageWindow::new(5, 0, 10);
        assert_eq!(window.current_page(), 1);
        assert_eq!(window.total_pages(), 0);
        assert_eq!(window.clamped(), window);
    }

    #[test]
    fn page_size_change_resets_skip() {
        let window = PageWindow::new(40, 20, 100);
        assert_eq!(window.with_page_size(50), PageChange { skip: 0, take: 50 });
        assert_eq!(window.with_page_size(2), PageChange { skip: 0, take: 2 });
    }

    #[test]
    fn next_advances_by_take() {
        let window = PageWindow::new(10, 10, 25);
        assert_eq!(window.next(), Some(PageChange { skip: 20, take: 10 }));
    }

    #[test]
    fn clamp_moves_to_last_page_start() {
        assert_eq!(PageWindow::new(30, 10, 25).clamped(), PageWindow::new(20, 10, 25));
        assert_eq!(PageWindow::new(20, 10, 20).clamped(), PageWindow::new(10, 10, 20));
        // In range windows are untouched.
        assert_eq!(PageWindow::new(10, 10, 25).clamped(), PageWindow::new(10, 10, 25));
        // Nothing to clamp to when the dataset is empty.
        assert_eq!(PageWindow::new(10, 10, 0).clamped(), PageWindow::new(10, 10, 0));
    }
}
