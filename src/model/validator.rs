use crate::model::date_validation::parse_valid_date_time;
use validator::ValidationError;

/// Validate that a string would be accepted as a `validDateTime` query value
pub fn validate_date_input(date: &str) -> Result<(), ValidationError> {
    match parse_valid_date_time(date) {
        Ok(_) => Ok(()),
        Err(reason) => {
            let mut error = ValidationError::new("invalid_date");
            error.message = Some(format!("{:?}: {}", date, reason.message()).into());
            Err(error)
        }
    }
}
