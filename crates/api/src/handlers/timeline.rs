use crate::{dto::StatsQuery, errors::ApiError, state::AppState, utils::resolve_window};
use axum::{
    extract::{Query, State},
    Json,
};
use querystats_application::{stats::TimeGranularity, use_cases::TimelineReport};
use tracing::{debug, instrument};

#[instrument(skip(state), name = "api_get_timeline")]
pub async fn get_timeline(
    State(state): State<AppState>,
    Query(params): Query<StatsQuery>,
) -> Result<Json<TimelineReport>, ApiError> {
    let granularity: TimeGranularity = params.granularity.parse()?;
    let window = resolve_window(&state.default_window, &params)?;

    let report = state.get_timeline.execute(window, granularity).await?;
    debug!(
        buckets = report.verdicts.len(),
        granularity = %granularity,
        "Timeline retrieved successfully"
    );
    Ok(Json(report))
}
