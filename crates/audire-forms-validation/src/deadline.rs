//! Casting deadline constraints

use chrono::{Days, NaiveDate};

use crate::error::{FormError, Result};
use crate::messages;

const ISO_DATE: &str = "%Y-%m-%d";

/// Earliest deadline a casting may be published with.
pub fn min_deadline(today: NaiveDate, lead_days: u32) -> Result<NaiveDate> {
    today
        .checked_add_days(Days::new(u64::from(lead_days)))
        .ok_or(FormError::DateOutOfRange {
            date: today,
            days: lead_days,
        })
}

/// Format a date the way `<input type="date">` expects it (`YYYY-MM-DD`).
pub fn format_iso_date(date: NaiveDate) -> String {
    date.format(ISO_DATE).to_string()
}

/// Minimum deadline, already formatted for the `min` attribute.
pub fn min_deadline_iso(today: NaiveDate, lead_days: u32) -> Result<String> {
    min_deadline(today, lead_days).map(format_iso_date)
}

/// Check a submitted deadline value against the minimum.
///
/// An empty value passes; whether the field is mandatory is left to the
/// native `required` attribute.
pub fn check_deadline(value: &str, today: NaiveDate, lead_days: u32) -> std::result::Result<(), String> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(());
    }

    let too_soon = || messages::deadline_too_soon(lead_days);

    let deadline = NaiveDate::parse_from_str(value, ISO_DATE).map_err(|_| too_soon())?;
    let min = min_deadline(today, lead_days).map_err(|_| too_soon())?;

    if deadline < min {
        tracing::debug!("Deadline {} is before minimum {}", deadline, min);
        return Err(too_soon());
    }
    Ok(())
}
