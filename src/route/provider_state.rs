use crate::errors::ApiResult;
use crate::model::provider_state::ProviderStateRequest;
use crate::service::provider_state_service::ProviderStateService;
use crate::util::extractor::ValidatedJson;
use crate::AppState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::Router;

pub fn create_routes() -> Router<AppState> {
    Router::new().route("/provider-states", post(set_provider_state))
}

async fn set_provider_state(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<ProviderStateRequest>,
) -> ApiResult<StatusCode> {
    ProviderStateService::apply(&state.db, &state.config.provider_states, &request).await?;
    Ok(StatusCode::NO_CONTENT)
}
