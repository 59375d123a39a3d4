use crate::{dto::StatsQuery, errors::ApiError, state::AppState, utils::resolve_window};
use axum::{
    extract::{Query, State},
    Json,
};
use querystats_application::use_cases::MetricsReport;
use tracing::{debug, instrument};

#[instrument(skip(state), name = "api_get_metrics")]
pub async fn get_metrics(
    State(state): State<AppState>,
    Query(params): Query<StatsQuery>,
) -> Result<Json<MetricsReport>, ApiError> {
    let window = resolve_window(&state.default_window, &params)?;
    let report = state.get_metrics.execute(window).await?;
    debug!(
        total = report.metrics.total_queries,
        skipped = report.skipped,
        "Metrics retrieved successfully"
    );
    Ok(Json(report))
}
