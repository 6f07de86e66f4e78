use crate::grid::GridCell;
use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RoutineStatus {
    Completed,
    NotDone,
    Morning,
    Evening,
    #[default]
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutineEvent {
    #[serde(default, deserialize_with = "lenient")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "lenient_status")]
    pub status: RoutineStatus,
    #[serde(
        default,
        rename = "eventName",
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub event_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpiryEvent {
    #[serde(default, deserialize_with = "lenient")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
}

impl ExpiryEvent {
    pub fn display_name(&self) -> String {
        let name = [&self.product_name, &self.title]
            .into_iter()
            .flatten()
            .find(|name| !name.is_empty())
            .map(String::as_str)
            .unwrap_or("Product");
        match self.brand.as_deref() {
            Some(brand) if !brand.is_empty() => format!("{name} — {brand}"),
            _ => name.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DueDateReminder {
    #[serde(default, deserialize_with = "lenient")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub step_name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub routine_type: Option<String>,
}

/// A null or wrongly-typed field reads as absent instead of failing the
/// whole record.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(&value).ok())
}

fn lenient_status<'de, D>(deserializer: D) -> Result<RoutineStatus, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient(deserializer)?.unwrap_or_default())
}

/// Raw event arrays as supplied by the backend. Parsing is lenient: a record
/// that fails to deserialize is dropped and the rest of the feed survives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(from = "Value")]
pub struct EventFeed {
    pub routine_events: Vec<RoutineEvent>,
    pub expiry_events: Vec<ExpiryEvent>,
    pub weekly_due_dates: Vec<DueDateReminder>,
    pub monthly_due_dates: Vec<DueDateReminder>,
}

impl From<Value> for EventFeed {
    fn from(value: Value) -> Self {
        Self {
            routine_events: lenient_list(&value, "routine_events"),
            expiry_events: lenient_list(&value, "expiry_events"),
            weekly_due_dates: lenient_list(&value, "weekly_due_dates"),
            monthly_due_dates: lenient_list(&value, "monthly_due_dates"),
        }
    }
}

fn lenient_list<T: DeserializeOwned>(value: &Value, key: &str) -> Vec<T> {
    let Some(items) = value.get(key).and_then(Value::as_array) else {
        return Vec::new();
    };
    items
        .iter()
        .filter_map(|item| match T::deserialize(item) {
            Ok(record) => Some(record),
            Err(err) => {
                debug!("skipping malformed {key} record: {err}");
                None
            }
        })
        .collect()
}

#[derive(Debug, Deserialize)]
pub struct RoutineEventRequest {
    pub date: String,
    pub status: RoutineStatus,
    #[serde(default, rename = "eventName")]
    pub event_name: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct CalendarQuery {
    pub year: Option<i32>,
    pub month: Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct CalendarResponse {
    pub year: i32,
    pub month: u32,
    pub title: String,
    pub cells: Vec<GridCell>,
}
