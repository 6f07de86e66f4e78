use crate::date_key::{days_in_month, month_title, normalize_month};
use crate::grid::{compute_grid, GridCell};
use crate::index::EventIndex;
use crate::models::{CalendarResponse, EventFeed};
use chrono::{Datelike, NaiveDate};
use tracing::info;

/// The displayed month. `month` is 0-based and always in `0..12`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarView {
    pub year: i32,
    pub month: u32,
}

impl CalendarView {
    /// Normalizes `month` into the year. `None` when the result falls outside
    /// the dates chrono can represent.
    pub fn try_new(year: i32, month: i32) -> Option<Self> {
        let (year, month) = normalize_month(year, month)?;
        (days_in_month(year, month) > 0).then_some(Self { year, month })
    }

    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month0(),
        }
    }

    pub fn prev_month(self) -> Self {
        Self::try_new(self.year, self.month as i32 - 1).unwrap_or(self)
    }

    pub fn next_month(self) -> Self {
        Self::try_new(self.year, self.month as i32 + 1).unwrap_or(self)
    }

    pub fn title(self) -> String {
        month_title(self.year, self.month)
    }

    pub fn grid(self, index: &EventIndex, today: NaiveDate) -> Vec<GridCell> {
        compute_grid(self.year, self.month as i32, index, today)
    }

    pub fn snapshot(self, index: &EventIndex, today: NaiveDate) -> CalendarResponse {
        CalendarResponse {
            year: self.year,
            month: self.month,
            title: self.title(),
            cells: self.grid(index, today),
        }
    }
}

/// Owns the displayed month and the index for one feed snapshot.
#[derive(Debug, Clone)]
pub struct CalendarWidget {
    view: CalendarView,
    feed: EventFeed,
    index: EventIndex,
}

impl CalendarWidget {
    pub fn new(feed: EventFeed, today: NaiveDate) -> Self {
        let index = EventIndex::build(&feed);
        Self {
            view: CalendarView::containing(today),
            feed,
            index,
        }
    }

    pub fn view(&self) -> CalendarView {
        self.view
    }

    pub fn feed(&self) -> &EventFeed {
        &self.feed
    }

    pub fn index(&self) -> &EventIndex {
        &self.index
    }

    pub fn prev_month(&mut self) -> CalendarView {
        self.view = self.view.prev_month();
        info!(year = self.view.year, month = self.view.month, "calendar moved back");
        self.view
    }

    pub fn next_month(&mut self) -> CalendarView {
        self.view = self.view.next_month();
        info!(year = self.view.year, month = self.view.month, "calendar moved forward");
        self.view
    }

    /// Swaps in a fresh feed; the displayed month is kept.
    pub fn refresh(&mut self, feed: EventFeed) {
        self.index = EventIndex::build(&feed);
        self.feed = feed;
        info!(
            routine = self.feed.routine_events.len(),
            expiry = self.feed.expiry_events.len(),
            weekly = self.feed.weekly_due_dates.len(),
            monthly = self.feed.monthly_due_dates.len(),
            "calendar data refreshed"
        );
    }

    pub fn snapshot(&self, today: NaiveDate) -> CalendarResponse {
        self.view.snapshot(&self.index, today)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::CellStatus;
    use crate::models::{RoutineEvent, RoutineStatus};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 15).unwrap()
    }

    #[test]
    fn navigation_wraps_across_years() {
        let january = CalendarView::try_new(2025, 0).unwrap();
        assert_eq!(january.prev_month(), CalendarView { year: 2024, month: 11 });

        let december = CalendarView::try_new(2025, 11).unwrap();
        assert_eq!(december.next_month(), CalendarView { year: 2026, month: 0 });
    }

    #[test]
    fn next_then_prev_is_identity() {
        for year in [1999, 2024, 2025] {
            for month in 0..12 {
                let view = CalendarView::try_new(year, month).unwrap();
                assert_eq!(view.next_month().prev_month(), view);
                assert_eq!(view.prev_month().next_month(), view);
            }
        }
    }

    #[test]
    fn out_of_range_views_are_rejected() {
        assert_eq!(CalendarView::try_new(2025, 12), Some(CalendarView { year: 2026, month: 0 }));
        assert_eq!(CalendarView::try_new(i32::MAX, 12), None);
        assert_eq!(CalendarView::try_new(300_000, 0), None);
    }

    #[test]
    fn widget_starts_on_current_month() {
        let widget = CalendarWidget::new(EventFeed::default(), today());
        assert_eq!(widget.view(), CalendarView { year: 2025, month: 2 });
        let snapshot = widget.snapshot(today());
        assert_eq!(snapshot.title, "March 2025");
        assert_eq!(snapshot.cells.len(), 42);
    }

    #[test]
    fn widget_navigation_updates_snapshot() {
        let mut widget = CalendarWidget::new(EventFeed::default(), today());
        assert_eq!(widget.next_month(), CalendarView { year: 2025, month: 3 });
        assert_eq!(widget.snapshot(today()).title, "April 2025");
        widget.prev_month();
        widget.prev_month();
        assert_eq!(widget.snapshot(today()).title, "February 2025");
    }

    #[test]
    fn refresh_rebuilds_index_and_keeps_month() {
        let mut widget = CalendarWidget::new(EventFeed::default(), today());
        widget.prev_month();

        widget.refresh(EventFeed {
            routine_events: vec![RoutineEvent {
                date: Some("2025-02-03".into()),
                status: RoutineStatus::Completed,
                event_name: None,
            }],
            ..EventFeed::default()
        });

        assert_eq!(widget.view(), CalendarView { year: 2025, month: 1 });
        assert_eq!(widget.feed().routine_events.len(), 1);
        let snapshot = widget.snapshot(today());
        let third = snapshot
            .cells
            .iter()
            .filter_map(GridCell::as_day)
            .find(|cell| cell.date_key == "2025-02-03")
            .unwrap();
        assert_eq!(third.status, CellStatus::Completed);
    }
}
