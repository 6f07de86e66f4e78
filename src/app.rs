use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/calendar/prev", post(handlers::calendar_prev))
        .route("/calendar/next", post(handlers::calendar_next))
        .route("/api/calendar", get(handlers::get_calendar))
        .route("/api/calendar/prev", post(handlers::api_prev))
        .route("/api/calendar/next", post(handlers::api_next))
        .route("/api/events", get(handlers::get_events).put(handlers::replace_events))
        .route("/api/events/routine", post(handlers::upsert_routine_event))
        .with_state(state)
}
