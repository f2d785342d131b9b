use crate::errors::ApiResult;
use crate::model::date_validation::{DateValidationRequest, DateValidationResult};
use crate::util::extractor::Query;
use crate::AppState;
use axum::extract::State;
use axum::routing::get;
use axum::Router;
use tracing::debug;

pub fn create_routes() -> Router<AppState> {
    Router::new().route("/provider", get(validate_date_time))
}

async fn validate_date_time(
    State(state): State<AppState>,
    Query(query): Query<DateValidationRequest>,
) -> ApiResult<DateValidationResult> {
    let raw_input = query.raw_input();
    let result = DateValidationResult::check(&state.db, raw_input).await?;
    debug!("validDateTime={:?} -> {}", raw_input, result.status_code());
    Ok(result)
}
