//! Calendar-correct month arithmetic for due date generation
//!
//! Due dates advance by whole calendar months, not fixed 30-day increments.
//! When the source day does not exist in the target month the date clamps to
//! the target month's last day, and the clamp carries forward to later steps
//! (Jan 31 -> Feb 28 -> Mar 28).

use chrono::{Months, NaiveDate};

/// Advance a date by one calendar month, clamping to the last day of the
/// target month when needed.
///
/// Returns `None` only when the result would fall outside chrono's
/// representable date range.
pub fn add_one_month(date: NaiveDate) -> Option<NaiveDate> {
    date.checked_add_months(Months::new(1))
}
