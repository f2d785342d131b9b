use dateval::model::date_validation::{normalize, parse_valid_date_time};
use serde_json::{json, Value};

pub const CONSUMER: &str = "Consumer";

/// One expected request/response pair between the consumer and the provider.
///
/// The consumer tests replay these against a mock, the provider tests against the real service.
#[derive(Debug, Clone)]
pub struct Interaction {
    pub provider_state: &'static str,
    pub description: &'static str,
    pub valid_date_time: &'static str,
    pub status: u16,
    // a body always comes as `application/json; charset=utf-8`
    pub body: Option<Value>,
}

pub fn invalid_date_param() -> Interaction {
    Interaction {
        provider_state: "There is data",
        description: "A invalid GET request for Date Validation with invalid date parameter",
        valid_date_time: "lolz",
        status: 400,
        body: Some(json!({"message": "validDateTime is not a date or time"})),
    }
}

pub fn empty_date_param() -> Interaction {
    Interaction {
        provider_state: "There is data",
        description: "An invalid GET request for Date Validation with empty date parameter",
        valid_date_time: "",
        status: 400,
        body: Some(json!({"message": "validDateTime is required"})),
    }
}

pub fn no_data() -> Interaction {
    Interaction {
        provider_state: "There is no data",
        description: "A valid GET request for Date Validation",
        valid_date_time: "04/04/2018",
        status: 404,
        body: None,
    }
}

pub fn parses_date() -> Interaction {
    let expected = expected_normalized("04/05/2018");
    Interaction {
        provider_state: "There is data",
        description: "A valid GET request for Date Validation",
        valid_date_time: "04/05/2018",
        status: 200,
        body: Some(json!({"test": "NO", "validDateTIme": expected})),
    }
}

pub fn expected_normalized(raw: &str) -> String {
    normalize(&parse_valid_date_time(raw).unwrap())
}

pub fn contract() -> Vec<Interaction> {
    vec![invalid_date_param(), empty_date_param(), no_data(), parses_date()]
}
