use crate::calendar::CalendarWidget;
use crate::models::EventFeed;
use chrono::NaiveDate;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub calendar: Arc<Mutex<CalendarWidget>>,
}

impl AppState {
    pub fn new(data_path: PathBuf, feed: EventFeed, today: NaiveDate) -> Self {
        Self {
            data_path,
            calendar: Arc::new(Mutex::new(CalendarWidget::new(feed, today))),
        }
    }
}
