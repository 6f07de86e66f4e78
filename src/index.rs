use crate::models::{DueDateReminder, EventFeed, ExpiryEvent, RoutineEvent};
use std::collections::HashMap;

/// Date-keyed lookups built once per feed snapshot.
#[derive(Debug, Clone, Default)]
pub struct EventIndex {
    routine: HashMap<String, RoutineEvent>,
    expiry: HashMap<String, Vec<ExpiryEvent>>,
    weekly: HashMap<String, Vec<DueDateReminder>>,
    monthly: HashMap<String, Vec<DueDateReminder>>,
}

impl EventIndex {
    pub fn build(feed: &EventFeed) -> Self {
        let mut routine = HashMap::new();
        for event in &feed.routine_events {
            if let Some(date) = &event.date {
                // Later entries for the same date replace earlier ones.
                routine.insert(date.clone(), event.clone());
            }
        }

        Self {
            routine,
            expiry: group_by_date(&feed.expiry_events, |event| event.date.as_deref()),
            weekly: group_by_date(&feed.weekly_due_dates, |item| item.date.as_deref()),
            monthly: group_by_date(&feed.monthly_due_dates, |item| item.date.as_deref()),
        }
    }

    pub fn routine(&self, date_key: &str) -> Option<&RoutineEvent> {
        self.routine.get(date_key)
    }

    pub fn expiries(&self, date_key: &str) -> &[ExpiryEvent] {
        self.expiry.get(date_key).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn weekly(&self, date_key: &str) -> &[DueDateReminder] {
        self.weekly.get(date_key).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn monthly(&self, date_key: &str) -> &[DueDateReminder] {
        self.monthly.get(date_key).map(Vec::as_slice).unwrap_or_default()
    }
}

fn group_by_date<T: Clone>(
    items: &[T],
    date_of: impl Fn(&T) -> Option<&str>,
) -> HashMap<String, Vec<T>> {
    let mut grouped: HashMap<String, Vec<T>> = HashMap::new();
    for item in items {
        if let Some(date) = date_of(item) {
            grouped.entry(date.to_string()).or_default().push(item.clone());
        }
    }
    grouped
}
