use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Deserialize;

use crate::domain::types::Pesel;
use crate::forms::FormError;

/// Layouts accepted for the payment date, tried in order.
const PAYMENT_DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];
const PAYMENT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Input of `POST /api/trips/{trip_id}/clients`.
///
/// Only `pesel` and `payment_date` drive the assignment. The contact fields
/// and `trip_name` are accepted for compatibility with existing callers and
/// otherwise ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignClientForm {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub telephone: Option<String>,
    pub pesel: Option<String>,
    pub trip_name: Option<String>,
    pub payment_date: Option<String>,
}

/// Normalized assignment input.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignClientPayload {
    /// `None` when the caller sent no usable identifier.
    pub pesel: Option<Pesel>,
    /// Trimmed raw payment date, `None` when missing or blank.
    pub payment_date: Option<String>,
}

impl From<AssignClientForm> for AssignClientPayload {
    fn from(form: AssignClientForm) -> Self {
        Self {
            pesel: form.pesel.and_then(|pesel| Pesel::new(pesel).ok()),
            payment_date: form
                .payment_date
                .map(|date| date.trim().to_string())
                .filter(|date| !date.is_empty()),
        }
    }
}

impl AssignClientPayload {
    /// Parses the payment date if one was supplied.
    pub fn parse_payment_date(&self) -> Result<Option<NaiveDateTime>, FormError> {
        self.payment_date
            .as_deref()
            .map(parse_payment_date)
            .transpose()
    }
}

/// Parses a payment date given either as a calendar date or as a date-time.
///
/// Timestamps carrying `Z` or an offset are converted to UTC.
pub fn parse_payment_date(value: &str) -> Result<NaiveDateTime, FormError> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Ok(parsed.naive_utc());
    }

    for format in PAYMENT_DATE_TIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(parsed);
        }
    }

    NaiveDate::parse_from_str(value, PAYMENT_DATE_FORMAT)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or_else(|| FormError::InvalidPaymentDate(value.to_string()))
}
