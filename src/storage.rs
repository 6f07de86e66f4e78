use crate::errors::AppError;
use crate::models::EventFeed;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::{error, info};

pub fn resolve_data_path() -> Result<PathBuf, std::io::Error> {
    if let Ok(path) = env::var("APP_DATA_PATH") {
        return Ok(PathBuf::from(path));
    }

    Ok(PathBuf::from("data/events.json"))
}

/// Reads the event snapshot. Any failure degrades to an empty feed.
pub async fn load_feed(path: &Path) -> EventFeed {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice::<EventFeed>(&bytes) {
            Ok(feed) => {
                info!(
                    routine = feed.routine_events.len(),
                    expiry = feed.expiry_events.len(),
                    "loaded event feed from {}",
                    path.display()
                );
                feed
            }
            Err(err) => {
                error!("failed to parse event feed: {err}");
                EventFeed::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => EventFeed::default(),
        Err(err) => {
            error!("failed to read event feed: {err}");
            EventFeed::default()
        }
    }
}

pub async fn persist_feed(path: &Path, feed: &EventFeed) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(feed).map_err(AppError::internal)?;
    fs::write(path, payload).await?;
    Ok(())
}
