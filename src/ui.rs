use crate::grid::{CellStatus, DayCell, GridCell, ReminderKind, EXPIRY_BADGE};
use crate::models::CalendarResponse;
use maud::{html, Markup, PreEscaped, DOCTYPE};

const DAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

pub fn render_index(calendar: &CalendarResponse) -> String {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { "Routine Calendar" }
                style { (PreEscaped(CSS)) }
            }
            body {
                main.app {
                    header {
                        h1 { "Routine Calendar" }
                        p.subtitle { "Completed steps, expiring products and weekly or monthly reminders." }
                    }
                    (render_calendar(calendar))
                }
                script { (PreEscaped(SCRIPT)) }
            }
        }
    }
    .into_string()
}

/// Contents of the `#calendar` mount point; rebuilt whole on every render.
pub fn render_calendar(calendar: &CalendarResponse) -> Markup {
    html! {
        section #calendar data-year=(calendar.year) data-month=(calendar.month) {
            div.sc-header {
                form method="post" action="/calendar/prev" {
                    button type="submit" aria-label="Previous month" { "<" }
                }
                div.sc-title { (calendar.title) }
                form method="post" action="/calendar/next" {
                    button type="submit" aria-label="Next month" { ">" }
                }
            }
            div.sc-dow {
                @for name in DAY_NAMES {
                    div.sc-dow-cell { (name) }
                }
            }
            div.sc-grid {
                @for cell in &calendar.cells {
                    @match cell {
                        GridCell::Blank => { div.sc-cell.sc-other {} }
                        GridCell::Day(day) => { (render_day(day)) }
                    }
                }
            }
        }
    }
}

fn render_day(day: &DayCell) -> Markup {
    html! {
        div.sc-cell.sc-day
            .sc-today[day.is_today]
            .sc-future[day.is_future]
            .sc-border-weekly[day.border == Some(ReminderKind::Weekly)]
            .sc-border-monthly[day.border == Some(ReminderKind::Monthly)]
            id={ "calendar-day-" (day.date_key) }
            data-date=(day.date_key)
            title=(day.tooltip)
            aria-label=(day.tooltip) {
            div.sc-day-num { (day.day_number) }
            div.sc-day-icon.sc-missed[day.status == CellStatus::Missed] {
                @if let Some(icon) = day.status_icon {
                    (icon)
                }
            }
            @if day.expiry_badge {
                div.sc-expiry-badge { (EXPIRY_BADGE) }
            }
        }
    }
}

const CSS: &str = r#"
:root {
  --bg: #fbf7f4;
  --ink: #2b2a28;
  --card: #ffffff;
  --muted: #8b857d;
  --today: #f5d3a7;
  --error-color: #c63b2b;
  --accent-step-weekly: #7fb7be;
  --accent-step-monthly: #b48ead;
}

* {
  box-sizing: border-box;
}

body {
  margin: 0;
  min-height: 100vh;
  background: var(--bg);
  color: var(--ink);
  font-family: "Trebuchet MS", sans-serif;
  display: grid;
  place-items: center;
  padding: 32px 18px 48px;
}

.app {
  width: min(720px, 100%);
  display: grid;
  gap: 24px;
}

h1 {
  margin: 0;
  font-size: clamp(1.8rem, 4vw, 2.4rem);
}

.subtitle {
  margin: 6px 0 0;
  color: var(--muted);
}

#calendar {
  background: var(--card);
  border-radius: 20px;
  padding: 20px;
  box-shadow: 0 16px 40px rgba(47, 72, 88, 0.12);
}

.sc-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  margin-bottom: 12px;
}

.sc-header button {
  border: none;
  border-radius: 999px;
  padding: 8px 14px;
  font-size: 1rem;
  cursor: pointer;
}

.sc-title {
  font-weight: 600;
  font-size: 1.2rem;
}

.sc-dow,
.sc-grid {
  display: grid;
  grid-template-columns: repeat(7, 1fr);
  gap: 6px;
}

.sc-dow-cell {
  text-align: center;
  font-size: 0.8rem;
  text-transform: uppercase;
  color: var(--muted);
}

.sc-cell {
  position: relative;
  min-height: 64px;
  border-radius: 12px;
  padding: 6px;
  border: 2px solid transparent;
}

.sc-day {
  background: rgba(47, 72, 88, 0.05);
}

.sc-today {
  background: var(--today);
}

.sc-border-weekly {
  border-color: var(--accent-step-weekly);
}

.sc-border-monthly {
  border-color: var(--accent-step-monthly);
}

.sc-day-num {
  font-size: 0.85rem;
  font-weight: 600;
}

.sc-day-icon {
  text-align: center;
  font-size: 1.3rem;
}

.sc-day-icon.sc-missed {
  color: var(--error-color);
  font-size: 2rem;
  line-height: 1;
}

.sc-expiry-badge {
  position: absolute;
  top: 4px;
  right: 6px;
  font-size: 0.8rem;
}
"#;

const SCRIPT: &str = r#"
document.addEventListener('routineStepUpdated', () => {
  window.location.reload();
});
"#;
