use crate::config::ProviderStatesConfig;
use crate::errors::{bad_request, ApiResult};
use crate::model::known_date::KnownDate;
use crate::model::provider_state::{ProviderStateRequest, THERE_IS_DATA, THERE_IS_NO_DATA};
use sqlx::SqlitePool;
use tracing::info;

pub struct ProviderStateService;

impl ProviderStateService {
    /// Puts the dataset into the named state before an interaction is verified.
    pub async fn apply(pool: &SqlitePool, config: &ProviderStatesConfig, request: &ProviderStateRequest) -> ApiResult<()> {
        let consumer = request.consumer.as_deref().unwrap_or("unknown consumer");

        match request.state.as_str() {
            THERE_IS_DATA => {
                let dates = match &request.params {
                    Some(params) if !params.dates.is_empty() => &params.dates,
                    _ => &config.seed_dates,
                };
                let inserted = KnownDate::replace_all(pool, dates).await?;
                info!("[{}] provider state {:?}: seeded {} dates", consumer, request.state, inserted);
            }
            THERE_IS_NO_DATA => {
                let removed = KnownDate::clear(pool).await?;
                info!("[{}] provider state {:?}: removed {} dates", consumer, request.state, removed);
            }
            other => {
                return Err(bad_request(&format!("Unknown provider state: {}", other)));
            }
        }

        Ok(())
    }
}
