pub mod known_date_service;
pub mod provider_state_service;
