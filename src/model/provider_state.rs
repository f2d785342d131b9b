use crate::model::validator::validate_date_input;
use serde::Deserialize;
use validator::Validate;

pub const THERE_IS_DATA: &str = "There is data";
pub const THERE_IS_NO_DATA: &str = "There is no data";

#[derive(Debug, Deserialize, Validate)]
pub struct ProviderStateRequest {
    pub consumer: Option<String>,
    #[validate(length(min = 1, message = "can not be empty"))]
    pub state: String,
    #[validate(nested)]
    pub params: Option<ProviderStateParams>,
}

#[derive(Debug, Deserialize, Validate, Default)]
pub struct ProviderStateParams {
    #[serde(default)]
    #[validate(custom(function = "validate_date_inputs"))]
    pub dates: Vec<String>,
}

fn validate_date_inputs(dates: &[String]) -> Result<(), validator::ValidationError> {
    dates.iter().try_for_each(|date| validate_date_input(date))
}
