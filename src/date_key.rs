use chrono::{Datelike, NaiveDate};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Formats a `YYYY-MM-DD` key. `month0` is 0-based.
pub fn to_date_key(year: i32, month0: u32, day: u32) -> String {
    format!("{year:04}-{:02}-{day:02}", month0 + 1)
}

pub fn date_key(date: NaiveDate) -> String {
    to_date_key(date.year(), date.month0(), date.day())
}

/// Inverse of [`to_date_key`]: returns `(year, month0, day)`.
pub fn parse_date_key(key: &str) -> Option<(i32, u32, u32)> {
    let mut parts = key.splitn(3, '-');
    let (year, month, day) = (parts.next()?, parts.next()?, parts.next()?);
    if year.len() != 4 || month.len() != 2 || day.len() != 2 {
        return None;
    }
    let date = NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, day.parse().ok()?)?;
    Some((date.year(), date.month0(), date.day()))
}

/// `YYYY-MM-DD` becomes `DD-MM-YYYY`.
pub fn readable_date(key: &str) -> String {
    let parts: Vec<&str> = key.split('-').collect();
    match parts.as_slice() {
        [year, month, day] => format!("{day}-{month}-{year}"),
        _ => key.to_string(),
    }
}

/// Carries an out-of-range 0-based month into the year. `None` when the
/// carried year overflows.
pub fn normalize_month(year: i32, month0: i32) -> Option<(i32, u32)> {
    let year = year.checked_add(month0.div_euclid(12))?;
    Some((year, month0.rem_euclid(12) as u32))
}

pub fn first_of_month(year: i32, month0: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month0 + 1, 1)
}

/// Zero when chrono cannot represent the month or the one after it.
pub fn days_in_month(year: i32, month0: u32) -> u32 {
    let next = normalize_month(year, month0 as i32 + 1)
        .and_then(|(next_year, next_month0)| first_of_month(next_year, next_month0));
    match (first_of_month(year, month0), next) {
        (Some(first), Some(next)) => next.signed_duration_since(first).num_days() as u32,
        _ => 0,
    }
}

/// Day of week of the 1st, 0 = Sunday.
pub fn first_weekday(year: i32, month0: u32) -> u32 {
    first_of_month(year, month0)
        .map(|date| date.weekday().num_days_from_sunday())
        .unwrap_or(0)
}

pub fn month_title(year: i32, month0: u32) -> String {
    let name = MONTH_NAMES.get(month0 as usize).copied().unwrap_or("Unknown");
    format!("{name} {year}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_key_is_zero_padded() {
        assert_eq!(to_date_key(2025, 2, 5), "2025-03-05");
        assert_eq!(to_date_key(2025, 11, 31), "2025-12-31");
    }

    #[test]
    fn date_key_parses_back_for_every_day_of_a_leap_year() {
        let mut date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        while date.year() == 2024 {
            let key = date_key(date);
            assert_eq!(
                parse_date_key(&key),
                Some((date.year(), date.month0(), date.day())),
                "{key}"
            );
            date = date.succ_opt().unwrap();
        }
    }

    #[test]
    fn parse_rejects_malformed_keys() {
        assert_eq!(parse_date_key("2025-3-5"), None);
        assert_eq!(parse_date_key("2025-02-30"), None);
        assert_eq!(parse_date_key("not-a-date"), None);
        assert_eq!(parse_date_key(""), None);
    }

    #[test]
    fn readable_date_reverses_parts() {
        assert_eq!(readable_date("2025-03-05"), "05-03-2025");
    }

    #[test]
    fn normalize_month_carries_into_year() {
        assert_eq!(normalize_month(2025, 12), Some((2026, 0)));
        assert_eq!(normalize_month(2025, -1), Some((2024, 11)));
        assert_eq!(normalize_month(2025, 25), Some((2027, 1)));
        assert_eq!(normalize_month(2025, 4), Some((2025, 4)));
    }

    #[test]
    fn normalize_month_reports_year_overflow() {
        assert_eq!(normalize_month(i32::MAX, 12), None);
        assert_eq!(normalize_month(i32::MIN, -1), None);
        assert_eq!(normalize_month(i32::MAX, 11), Some((i32::MAX, 11)));
    }

    #[test]
    fn unrepresentable_months_have_no_days() {
        assert_eq!(days_in_month(300_000, 0), 0);
        assert_eq!(days_in_month(i32::MAX, 11), 0);
    }

    #[test]
    fn days_in_month_follows_gregorian_rules() {
        assert_eq!(days_in_month(2024, 1), 29);
        assert_eq!(days_in_month(2025, 1), 28);
        assert_eq!(days_in_month(1900, 1), 28);
        assert_eq!(days_in_month(2000, 1), 29);
        assert_eq!(days_in_month(2025, 11), 31);
        assert_eq!(days_in_month(2025, 3), 30);
    }

    #[test]
    fn first_weekday_counts_from_sunday() {
        // 2025-03-01 was a Saturday, 2026-02-01 a Sunday.
        assert_eq!(first_weekday(2025, 2), 6);
        assert_eq!(first_weekday(2026, 1), 0);
    }

    #[test]
    fn month_title_uses_english_names() {
        assert_eq!(month_title(2025, 2), "March 2025");
    }
}
