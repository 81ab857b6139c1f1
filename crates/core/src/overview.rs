//! # Availability Overview
//!
//! Builds the response of the collection read: every stored row keyed by its
//! date, plus the earliest open date that has not passed yet.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};

use crate::models::availability::{
    normalize_time_slots, AvailabilityOverview, AvailabilityRow, DayEntry, NextAvailable,
    STATUS_AVAILABLE,
};

/// Wire format of the `date` column.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Finds the earliest row marked available whose date is on or after `today`.
///
/// Rows whose date does not parse as `YYYY-MM-DD` never qualify.
pub fn next_available(rows: &[AvailabilityRow], today: NaiveDate) -> Option<NextAvailable> {
    rows.iter()
        .filter(|row| row.status == STATUS_AVAILABLE)
        .filter_map(|row| {
            NaiveDate::parse_from_str(&row.date, DATE_FORMAT)
                .ok()
                .filter(|date| *date >= today)
                .map(|date| (date, row))
        })
        .min_by_key(|(date, _)| *date)
        .map(|(_, row)| NextAvailable {
            date: row.date.clone(),
            time_slots: normalize_time_slots(row.time_slots.clone()),
        })
}

/// Shapes the rows returned by the store into the list response as of `now`.
pub fn build_overview(rows: Vec<AvailabilityRow>, now: DateTime<Utc>) -> AvailabilityOverview {
    let next_available = next_available(&rows, now.date_naive());

    let days = rows
        .into_iter()
        .map(|row| (row.date.clone(), DayEntry::from(row)))
        .collect();

    AvailabilityOverview {
        days,
        next_available,
        last_updated: now.to_rfc3339_opts(SecondsFormat::Millis, true),
    }
}
