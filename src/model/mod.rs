pub mod date_validation;
pub mod known_date;
pub mod provider_state;
pub mod validator;
