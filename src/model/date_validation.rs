use crate::util::extractor::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use derive_more::Display;
use serde::{Deserialize, Serialize};

// Month first, whole input, no locale.
const DATE_TIME_FORMATS: [&str; 4] = [
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %I:%M %p",
];
const DATE_FORMAT: &str = "%m/%d/%Y";
const NORMALIZED_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

#[derive(Debug, Deserialize, Default)]
pub struct DateValidationRequest {
    // A missing parameter is handled exactly like an empty one
    #[serde(rename = "validDateTime", default)]
    pub valid_date_time: Option<String>,
}

impl DateValidationRequest {
    pub fn raw_input(&self) -> &str {
        self.valid_date_time.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum RejectReason {
    #[display("EMPTY")]
    Empty,
    #[display("MALFORMED")]
    Malformed,
}

impl RejectReason {
    pub fn message(&self) -> &'static str {
        match self {
            RejectReason::Empty => "validDateTime is required",
            RejectReason::Malformed => "validDateTime is not a date or time",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateValidationResult {
    Rejected { reason: RejectReason },
    NotFound,
    Accepted { normalized_date: String },
}

#[derive(Debug, Serialize)]
pub struct RejectedBody {
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct AcceptedBody {
    pub test: &'static str,
    // the key spelling is part of the published contract
    #[serde(rename = "validDateTIme")]
    pub valid_date_time: String,
}

/// Parses a raw `validDateTime` value.
///
/// Accepts `MM/DD/YYYY` optionally followed by a 24-hour `HH:mm[:ss]` or a 12-hour
/// `hh:mm[:ss] AM|PM` time. Month and day may drop their leading zero, the year
/// must have four digits. Date, time and meridiem are separated by exactly one ASCII
/// space; any other whitespace, including leading or trailing, is rejected rather than trimmed.
pub fn parse_valid_date_time(raw: &str) -> Result<NaiveDateTime, RejectReason> {
    if raw.is_empty() {
        return Err(RejectReason::Empty);
    }
    if !has_single_spaces(raw) || !has_four_digit_year(raw) {
        return Err(RejectReason::Malformed);
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, DATE_FORMAT) {
        return Ok(date.and_time(NaiveTime::MIN));
    }

    DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .ok_or(RejectReason::Malformed)
}

// chrono lets a format space match any run of whitespace, so the separator rule lives here
fn has_single_spaces(raw: &str) -> bool {
    raw.split(' ').all(|part| !part.is_empty() && !part.contains(char::is_whitespace))
}

fn has_four_digit_year(raw: &str) -> bool {
    let date_part = raw.split(' ').next().unwrap_or_default();
    date_part
        .rsplit('/')
        .next()
        .is_some_and(|year| year.len() == 4 && year.bytes().all(|b| b.is_ascii_digit()))
}

pub fn normalize(date_time: &NaiveDateTime) -> String {
    date_time.format(NORMALIZED_FORMAT).to_string()
}

/// Classifies `raw_input`. `exists` is only consulted for inputs that parse.
pub fn validate<F>(raw_input: &str, exists: F) -> DateValidationResult
where
    F: FnOnce(&str) -> bool,
{
    match parse_valid_date_time(raw_input) {
        Err(reason) => DateValidationResult::Rejected { reason },
        Ok(_) if !exists(raw_input) => DateValidationResult::NotFound,
        Ok(parsed) => DateValidationResult::accepted(&parsed),
    }
}

impl DateValidationResult {
    pub fn accepted(parsed: &NaiveDateTime) -> Self {
        DateValidationResult::Accepted {
            normalized_date: normalize(parsed),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            DateValidationResult::Rejected { .. } => StatusCode::BAD_REQUEST,
            DateValidationResult::NotFound => StatusCode::NOT_FOUND,
            DateValidationResult::Accepted { .. } => StatusCode::OK,
        }
    }
}

impl IntoResponse for DateValidationResult {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            DateValidationResult::Rejected { reason } => {
                (status, Json(RejectedBody { message: reason.message() })).into_response()
            }
            DateValidationResult::NotFound => status.into_response(),
            DateValidationResult::Accepted { normalized_date } => (
                status,
                Json(AcceptedBody {
                    test: "NO",
                    valid_date_time: normalized_date,
                }),
            )
                .into_response(),
        }
    }
}
