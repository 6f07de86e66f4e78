use crate::date_key::{
    date_key, days_in_month, first_of_month, first_weekday, normalize_month, readable_date,
};
use crate::index::EventIndex;
use crate::models::{DueDateReminder, ExpiryEvent, RoutineEvent, RoutineStatus};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

const EXPIRY_PREVIEW: usize = 2;
pub const EXPIRY_BADGE: &str = "⚠️";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CellStatus {
    Completed,
    Morning,
    Evening,
    Missed,
    Upcoming,
    NoEvents,
}

impl CellStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::Morning => "Morning routine",
            Self::Evening => "Evening routine",
            Self::Missed => "Missed",
            Self::Upcoming => "Upcoming",
            Self::NoEvents => "No events",
        }
    }

    pub fn icon(self) -> Option<&'static str> {
        match self {
            Self::Completed => Some("✨"),
            Self::Morning => Some("☀️"),
            Self::Evening => Some("🌙"),
            Self::Missed => Some("×"),
            Self::Upcoming | Self::NoEvents => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReminderKind {
    Weekly,
    Monthly,
}

impl ReminderKind {
    fn prefix(self) -> &'static str {
        match self {
            Self::Weekly => "Weekly step",
            Self::Monthly => "Monthly step",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayCell {
    pub date_key: String,
    pub day_number: u32,
    pub is_today: bool,
    pub is_future: bool,
    pub status: CellStatus,
    pub status_icon: Option<&'static str>,
    pub expiry_badge: bool,
    pub tooltip: String,
    /// Border of the last reminder applied to this day.
    pub border: Option<ReminderKind>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GridCell {
    Blank,
    Day(DayCell),
}

impl GridCell {
    pub fn as_day(&self) -> Option<&DayCell> {
        match self {
            Self::Day(day) => Some(day),
            Self::Blank => None,
        }
    }
}

/// Lays out one month as whole Sunday-first weeks. `month0` is 0-based and
/// carried into `year` when out of range. A month chrono cannot represent
/// yields no cells; callers validate through `CalendarView::try_new`.
pub fn compute_grid(year: i32, month0: i32, index: &EventIndex, today: NaiveDate) -> Vec<GridCell> {
    let Some((year, month0)) = normalize_month(year, month0) else {
        return Vec::new();
    };
    let Some(first) = first_of_month(year, month0) else {
        return Vec::new();
    };
    let days = days_in_month(year, month0) as usize;
    if days == 0 {
        return Vec::new();
    }

    let leading = first_weekday(year, month0) as usize;
    let trailing = (7 - (leading + days) % 7) % 7;

    let mut cells = Vec::with_capacity(leading + days + trailing);
    cells.extend(std::iter::repeat_n(GridCell::Blank, leading));
    cells.extend(
        first
            .iter_days()
            .take(days)
            .map(|date| GridCell::Day(build_day(date, index, today))),
    );
    cells.extend(std::iter::repeat_n(GridCell::Blank, trailing));
    cells
}

fn build_day(date: NaiveDate, index: &EventIndex, today: NaiveDate) -> DayCell {
    let key = date_key(date);
    let is_today = date == today;
    let is_future = date > today;
    let status = resolve_status(index.routine(&key), is_future);

    let mut tooltip = format!("{} — {}", readable_date(&key), status.label());
    if is_today {
        tooltip.push_str(" • Today");
    }

    let expiries = index.expiries(&key);
    if !expiries.is_empty() {
        tooltip.push_str(" • ");
        tooltip.push_str(&expiry_clause(expiries));
    }

    let mut border = None;
    for (kind, reminders) in [
        (ReminderKind::Weekly, index.weekly(&key)),
        (ReminderKind::Monthly, index.monthly(&key)),
    ] {
        for reminder in reminders {
            border = Some(kind);
            tooltip.push_str(" • ");
            tooltip.push_str(&reminder_clause(kind, reminder));
        }
    }

    DayCell {
        day_number: date.day(),
        date_key: key,
        is_today,
        is_future,
        status,
        status_icon: status.icon(),
        expiry_badge: !expiries.is_empty(),
        tooltip,
        border,
    }
}

fn resolve_status(event: Option<&RoutineEvent>, is_future: bool) -> CellStatus {
    match event.map(|ev| ev.status) {
        Some(RoutineStatus::Completed) => CellStatus::Completed,
        Some(RoutineStatus::Morning) => CellStatus::Morning,
        Some(RoutineStatus::Evening) => CellStatus::Evening,
        Some(RoutineStatus::NotDone) if is_future => CellStatus::Upcoming,
        Some(RoutineStatus::NotDone) => CellStatus::Missed,
        Some(RoutineStatus::Unknown) => CellStatus::NoEvents,
        None if is_future => CellStatus::Upcoming,
        None => CellStatus::NoEvents,
    }
}

fn expiry_clause(expiries: &[ExpiryEvent]) -> String {
    let shown: Vec<String> = expiries
        .iter()
        .take(EXPIRY_PREVIEW)
        .map(ExpiryEvent::display_name)
        .collect();
    let more = expiries.len() - shown.len();
    let mut clause = format!("Expiring: {}", shown.join(" || "));
    if more > 0 {
        clause.push_str(&format!(" and {more} more"));
    }
    clause
}

fn reminder_clause(kind: ReminderKind, reminder: &DueDateReminder) -> String {
    format!(
        "{}: {} ({})",
        kind.prefix(),
        reminder.step_name.as_deref().unwrap_or_default(),
        reminder.routine_type.as_deref().unwrap_or_default()
    )
}
