//! Parsing for date-valued payload fields.

use super::TaskDomainError;
use chrono::NaiveDate;

/// Calendar format accepted for payload dates.
const PAYLOAD_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a date-valued payload field supplied as text.
///
/// Payload dates (working date, pickup, delivery, invoice date) arrive as
/// text and must become a date type before storage; a sentinel value is
/// never stored in place of an unparseable date.
///
/// # Errors
///
/// Returns [`TaskDomainError::UnparseableDate`] when the value is not an
/// ISO `YYYY-MM-DD` calendar date.
pub fn parse_payload_date(field: &'static str, value: &str) -> Result<NaiveDate, TaskDomainError> {
    NaiveDate::parse_from_str(value.trim(), PAYLOAD_DATE_FORMAT).map_err(|_| {
        TaskDomainError::UnparseableDate {
            field,
            value: value.to_owned(),
        }
    })
}
