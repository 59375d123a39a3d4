use crate::{
    dto::StatsQuery,
    errors::ApiError,
    state::AppState,
    utils::{parse_limit, resolve_window},
};
use axum::{
    extract::{Query, State},
    Json,
};
use querystats_application::use_cases::TopEntries;
use tracing::{debug, instrument};

#[instrument(skip(state), name = "api_get_top")]
pub async fn get_top(
    State(state): State<AppState>,
    Query(params): Query<StatsQuery>,
) -> Result<Json<TopEntries>, ApiError> {
    let limit = parse_limit(params.limit, state.default_limit);
    let window = resolve_window(&state.default_window, &params)?;

    let top = state.get_top_entries.execute(window, limit).await?;
    debug!(
        limit,
        allowed = top.allowed_domains.len(),
        blocked = top.blocked_domains.len(),
        "Top entries retrieved successfully"
    );
    Ok(Json(top))
}
