pub mod provider_api;
pub mod provider_state;
