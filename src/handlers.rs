use crate::errors::AppError;
use crate::models::{AnalyticsQuery, AnalyticsResult, TimeRange};
use crate::state::AppState;
use crate::ui::render_index;
use axum::{
    Json,
    extract::{Query, State},
    response::Html,
};
use tracing::info;

pub async fn index() -> Html<String> {
    Html(render_index(TimeRange::Week))
}

pub async fn get_analytics(
    State(state): State<AppState>,
    Query(query): Query<AnalyticsQuery>,
) -> Result<Json<AnalyticsResult>, AppError> {
    let range = match query.range.as_deref() {
        None => TimeRange::Week,
        Some(raw) => TimeRange::parse(raw)
            .ok_or_else(|| AppError::bad_request("range must be 'day', 'week' or 'month'"))?,
    };

    info!(range = range.as_str(), "running analytics aggregation");
    let result = state.aggregator.compute(range).await;
    Ok(Json(result))
}

pub async fn get_snapshot(State(state): State<AppState>) -> Json<AnalyticsResult> {
    Json(state.aggregator.snapshot())
}
