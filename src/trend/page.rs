//! Windowed view over the journal history, newest window first.

use crate::models::JournalEntry;

use super::chart::ChartPoint;

/// Number of pages needed for `total` entries; never less than one.
pub fn page_count(total: usize, page_size: usize) -> usize {
    let size = page_size.max(1);
    total.div_ceil(size).max(1)
}

/// Clamp a requested page index into `[0, page_count - 1]`.
pub fn clamp_page(total: usize, page_size: usize, page_index: usize) -> usize {
    page_index.min(page_count(total, page_size) - 1)
}

/// Chart points for one page of history.
///
/// Entries are sorted ascending by `created_at` first. Page 0 holds the most
/// recent `page_size` entries; requests past the oldest page return the
/// oldest page. The returned points are in ascending time order.
pub fn paginate(entries: &[JournalEntry], page_index: usize, page_size: usize) -> Vec<ChartPoint> {
    let size = page_size.max(1);
    let mut sorted: Vec<&JournalEntry> = entries.iter().collect();
    sorted.sort_by_key(|e| e.created_at);

    let n = sorted.len();
    let page = clamp_page(n, size, page_index);
    let end = n.saturating_sub(page * size);
    let start = n.saturating_sub((page + 1) * size);

    sorted[start..end].iter().map(|e| ChartPoint::from(*e)).collect()
}

/// Navigation state for the history chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    page: usize,
    page_size: usize,
    total: usize,
}

impl Pager {
    pub fn new(total: usize, page_size: usize) -> Self {
        Self {
            page: 0,
            page_size: page_size.max(1),
            total,
        }
    }

    /// Start at `page`, clamped to the valid range.
    pub fn at(total: usize, page_size: usize, page: usize) -> Self {
        let mut pager = Self::new(total, page_size);
        pager.page = clamp_page(total, pager.page_size, page);
        pager
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn page_count(&self) -> usize {
        page_count(self.total, self.page_size)
    }

    pub fn has_older(&self) -> bool {
        self.page + 1 < self.page_count()
    }

    pub fn has_newer(&self) -> bool {
        self.page > 0
    }

    /// Step toward older entries; stops at the last page.
    pub fn older(&mut self) -> usize {
        if self.has_older() {
            self.page += 1;
        }
        self.page
    }

    /// Step toward newer entries; stops at page 0.
    pub fn newer(&mut self) -> usize {
        self.page = self.page.saturating_sub(1);
        self.page
    }

    pub fn points(&self, entries: &[JournalEntry]) -> Vec<ChartPoint> {
        paginate(entries, self.page, self.page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trend::fixtures::{entry, entry_with_mood};

    fn scrambled(n: usize) -> Vec<JournalEntry> {
        // Days 1..=n in a non-chronological order.
        let mut days: Vec<u32> = (1..=n as u32).collect();
        days.reverse();
        days.swap(0, n / 2);
        days.into_iter().map(entry).collect()
    }

    fn days_of(points: &[ChartPoint]) -> Vec<u32> {
        use chrono::Datelike;
        points.iter().map(|p| p.timestamp.day()).collect()
    }

    #[test]
    fn test_first_page_is_most_recent_sorted_ascending() {
        let entries = scrambled(10);
        let points = paginate(&entries, 0, 7);
        assert_eq!(days_of(&points), vec![4, 5, 6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_second_page_holds_remainder() {
        let entries = scrambled(10);
        let points = paginate(&entries, 1, 7);
        assert_eq!(days_of(&points), vec![1, 2, 3]);
    }

    #[test]
    fn test_page_beyond_last_returns_oldest_page() {
        let entries = scrambled(10);
        assert_eq!(paginate(&entries, 5, 7), paginate(&entries, 1, 7));
        assert!(!paginate(&entries, usize::MAX, 7).is_empty());
    }

    #[test]
    fn test_empty_history() {
        assert!(paginate(&[], 0, 7).is_empty());
        assert!(paginate(&[], 3, 7).is_empty());
        assert_eq!(page_count(0, 7), 1);
    }

    #[test]
    fn test_zero_page_size_treated_as_one() {
        let entries = scrambled(3);
        assert_eq!(days_of(&paginate(&entries, 0, 0)), vec![3]);
    }

    #[test]
    fn test_points_carry_scores_and_dates() {
        let entries = vec![entry_with_mood(2, Some("Sad 😢")), entry_with_mood(1, None)];
        let points = paginate(&entries, 0, 7);
        assert_eq!(points[0].mood_score, 5);
        assert_eq!(points[0].primary_mood, None);
        assert_eq!(points[1].mood_score, 2);
        assert_eq!(points[1].formatted_date, "Mar 2, 2026");
        assert_eq!(points[1].primary_mood.as_deref(), Some("Sad 😢"));
    }

    #[test]
    fn test_pager_clamps_navigation() {
        let mut pager = Pager::new(15, 7);
        assert_eq!(pager.page_count(), 3);
        assert!(!pager.has_newer());
        assert_eq!(pager.newer(), 0);
        assert_eq!(pager.older(), 1);
        assert_eq!(pager.older(), 2);
        assert_eq!(pager.older(), 2);
        assert!(!pager.has_older());
        assert_eq!(pager.newer(), 1);
    }

    #[test]
    fn test_pager_at_clamps_start() {
        let pager = Pager::at(10, 7, 9);
        assert_eq!(pager.page(), 1);
        let entries = scrambled(10);
        assert_eq!(days_of(&pager.points(&entries)), vec![1, 2, 3]);
    }
}
