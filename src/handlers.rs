use crate::calendar::CalendarView;
use crate::date_key::parse_date_key;
use crate::errors::AppError;
use crate::models::{
    CalendarQuery, CalendarResponse, EventFeed, RoutineEvent, RoutineEventRequest, RoutineStatus,
};
use crate::state::AppState;
use crate::storage::persist_feed;
use crate::ui::render_index;
use axum::{
    extract::{Query, State},
    response::{Html, Redirect},
    Json,
};
use chrono::{Local, NaiveDate};
use tracing::info;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let calendar = state.calendar.lock().await;
    Html(render_index(&calendar.snapshot(today())))
}

pub async fn calendar_prev(State(state): State<AppState>) -> Redirect {
    state.calendar.lock().await.prev_month();
    Redirect::to("/")
}

pub async fn calendar_next(State(state): State<AppState>) -> Redirect {
    state.calendar.lock().await.next_month();
    Redirect::to("/")
}

/// Snapshot of the displayed month, or of `?year=&month=` without moving the
/// widget.
pub async fn get_calendar(
    State(state): State<AppState>,
    Query(query): Query<CalendarQuery>,
) -> Result<Json<CalendarResponse>, AppError> {
    let calendar = state.calendar.lock().await;
    let response = match (query.year, query.month) {
        (None, None) => calendar.snapshot(today()),
        (year, month) => {
            let current = calendar.view();
            CalendarView::try_new(
                year.unwrap_or(current.year),
                month.unwrap_or(current.month as i32),
            )
            .ok_or_else(|| AppError::bad_request("year and month are out of range"))?
            .snapshot(calendar.index(), today())
        }
    };
    Ok(Json(response))
}

pub async fn api_prev(State(state): State<AppState>) -> Json<CalendarResponse> {
    let mut calendar = state.calendar.lock().await;
    calendar.prev_month();
    Json(calendar.snapshot(today()))
}

pub async fn api_next(State(state): State<AppState>) -> Json<CalendarResponse> {
    let mut calendar = state.calendar.lock().await;
    calendar.next_month();
    Json(calendar.snapshot(today()))
}

pub async fn get_events(State(state): State<AppState>) -> Json<EventFeed> {
    let calendar = state.calendar.lock().await;
    Json(calendar.feed().clone())
}

/// Replaces the whole feed, then re-renders the displayed month.
pub async fn replace_events(
    State(state): State<AppState>,
    Json(feed): Json<EventFeed>,
) -> Result<Json<CalendarResponse>, AppError> {
    let mut calendar = state.calendar.lock().await;
    persist_feed(&state.data_path, &feed).await?;
    calendar.refresh(feed);
    Ok(Json(calendar.snapshot(today())))
}

pub async fn upsert_routine_event(
    State(state): State<AppState>,
    Json(payload): Json<RoutineEventRequest>,
) -> Result<Json<CalendarResponse>, AppError> {
    let date = payload.date.trim();
    if parse_date_key(date).is_none() {
        return Err(AppError::bad_request("date must be a YYYY-MM-DD calendar date"));
    }
    if payload.status == RoutineStatus::Unknown {
        return Err(AppError::bad_request(
            "status must be one of 'completed', 'not_done', 'morning' or 'evening'",
        ));
    }

    let mut calendar = state.calendar.lock().await;
    let mut feed = calendar.feed().clone();
    feed.routine_events
        .retain(|event| event.date.as_deref() != Some(date));
    feed.routine_events.push(RoutineEvent {
        date: Some(date.to_string()),
        status: payload.status,
        event_name: payload.event_name,
    });

    persist_feed(&state.data_path, &feed).await?;
    calendar.refresh(feed);
    info!(date, status = ?payload.status, "routine event recorded");

    Ok(Json(calendar.snapshot(today())))
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
