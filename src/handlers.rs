use crate::errors::AppError;
use crate::models::{
    Entry, EntrySavedResponse, FlashbackItem, FlashbackQuery, NewEntry, TimelinePoint,
    TimelineQuery,
};
use crate::state::AppState;
use crate::ui::render_index;
use crate::views::{self, Limit, MoodFilter, TimelineMode};
use axum::{
    extract::{rejection::JsonRejection, Query, State},
    response::Html,
    Json,
};
use tracing::info;

pub async fn index() -> Html<String> {
    Html(render_index())
}

pub async fn list_entries(State(state): State<AppState>) -> Result<Json<Vec<Entry>>, AppError> {
    Ok(Json(state.store.list_entries().await?))
}

pub async fn create_entry(
    State(state): State<AppState>,
    payload: Result<Json<NewEntry>, JsonRejection>,
) -> Result<Json<EntrySavedResponse>, AppError> {
    let Json(payload) = payload?;
    let entry = state.store.append_entry(payload).await?;
    info!(mood = %entry.mood, timestamp = %entry.timestamp, "journal entry accepted");

    Ok(Json(EntrySavedResponse {
        message: "Entry saved successfully!".into(),
        entry,
    }))
}

pub async fn get_timeline(
    State(state): State<AppState>,
    Query(query): Query<TimelineQuery>,
) -> Result<Json<Vec<TimelinePoint>>, AppError> {
    let mode = match query.mode.as_deref() {
        Some(mode) => mode.parse::<TimelineMode>().map_err(AppError::bad_request)?,
        None => TimelineMode::Last7,
    };

    let entries = state.store.list_entries().await?;
    Ok(Json(views::timeline(&entries, mode)))
}

pub async fn get_flashback(
    State(state): State<AppState>,
    Query(query): Query<FlashbackQuery>,
) -> Result<Json<Vec<FlashbackItem>>, AppError> {
    let mood = MoodFilter::parse(query.mood.as_deref().unwrap_or("all"));
    let limit = query
        .limit
        .as_deref()
        .unwrap_or("5")
        .parse::<Limit>()
        .map_err(AppError::bad_request)?;

    let entries = state.store.list_entries().await?;
    Ok(Json(views::flashback(&entries, &mood, limit)))
}
