//! EMI computation via the fixed-payment annuity formula
//!
//! Pure computation: no I/O, no logging, no ambient clock. Safe to call
//! concurrently from any number of threads.

use chrono::NaiveDate;

use super::calendar::add_one_month;
use super::installments::{AmortizationSchedule, Installment};
use crate::error::ScheduleError;

/// Round a positive currency amount half-up to 2 decimal places.
/// `f64::round` ties away from zero, which is half-up for positive values.
fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Compute the fixed monthly installment for a loan.
///
/// Uses the standard annuity formula `P * r * (1+r)^n / ((1+r)^n - 1)` with
/// the monthly rate `r = annual% / 100 / 12`. A zero rate degenerates to
/// straight-line `P / n` (the formula would divide by zero).
///
/// The result is unrounded; callers wanting the billed amount should go
/// through [`compute_schedule`].
pub fn monthly_installment(
    principal: f64,
    annual_rate_percent: f64,
    tenure_months: u32,
) -> Result<f64, ScheduleError> {
    validate_inputs(principal, annual_rate_percent, tenure_months)?;

    let r = annual_rate_percent / 100.0 / 12.0;
    let n = tenure_months as f64;

    if r == 0.0 {
        return Ok(principal / n);
    }

    let growth = (1.0 + r).powi(tenure_months as i32);
    let installment = principal * r * growth / (growth - 1.0);

    // (1+r)^n overflows to infinity for extreme tenures, turning the
    // quotient into NaN. Reject rather than emit a non-finite amount.
    if !installment.is_finite() {
        return Err(ScheduleError::invalid(format!(
            "installment is not representable for a tenure of {} months at {}%",
            tenure_months, annual_rate_percent
        )));
    }

    Ok(installment)
}

/// Compute the full EMI schedule for a loan.
///
/// # Arguments
/// * `principal` - Loan amount in currency units, must be > 0
/// * `annual_rate_percent` - Annual nominal rate in percent, must be >= 0
/// * `tenure_months` - Number of monthly installments, must be > 0
/// * `start_date` - Due date of the first installment
///
/// # Returns
/// The fixed installment (rounded half-up to cents) and the ordered due
/// date schedule, exactly `tenure_months` entries. Entry 0 falls on
/// `start_date`; each later entry advances one calendar month with
/// end-of-month clamping.
///
/// Every entry carries the same rounded amount. The residual between the
/// billed total and the exact annuity total is left uncorrected and is
/// exposed through [`AmortizationSchedule::summary`].
pub fn compute_schedule(
    principal: f64,
    annual_rate_percent: f64,
    tenure_months: u32,
    start_date: NaiveDate,
) -> Result<AmortizationSchedule, ScheduleError> {
    let unrounded = monthly_installment(principal, annual_rate_percent, tenure_months)?;
    let amount = round_to_cents(unrounded);

    let mut installments = Vec::with_capacity(tenure_months as usize);
    let mut due_date = start_date;
    for sequence in 0..tenure_months {
        if sequence > 0 {
            due_date = add_one_month(due_date).ok_or_else(|| {
                ScheduleError::invalid(format!(
                    "due date overflows calendar range after {} months from {}",
                    sequence, start_date
                ))
            })?;
        }
        installments.push(Installment {
            sequence,
            due_date,
            amount,
        });
    }

    Ok(AmortizationSchedule {
        principal,
        annual_rate_percent,
        installment_amount: amount,
        unrounded_installment: unrounded,
        installments,
    })
}

fn validate_inputs(
    principal: f64,
    annual_rate_percent: f64,
    tenure_months: u32,
) -> Result<(), ScheduleError> {
    if !principal.is_finite() || principal <= 0.0 {
        return Err(ScheduleError::invalid(format!(
            "principal must be positive, got {}",
            principal
        )));
    }
    if !annual_rate_percent.is_finite() || annual_rate_percent < 0.0 {
        return Err(ScheduleError::invalid(format!(
            "annual rate must be non-negative, got {}",
            annual_rate_percent
        )));
    }
    if tenure_months == 0 {
        return Err(ScheduleError::invalid("tenure must be at least 1 month"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_reference_loan() {
        // 100,000 @ 12%/year over 12 months: r = 0.01, EMI ~= 8884.88
        let schedule = compute_schedule(100_000.0, 12.0, 12, d(2025, 1, 5)).unwrap();

        assert_abs_diff_eq!(schedule.installment_amount, 8884.88, epsilon = 1e-9);
        assert_eq!(schedule.installments.len(), 12);

        for (i, entry) in schedule.installments.iter().enumerate() {
            assert_eq!(entry.sequence, i as u32);
            assert_eq!(entry.due_date, d(2025, 1 + i as u32, 5));
            assert_abs_diff_eq!(entry.amount, 8884.88, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_zero_rate_is_straight_line() {
        let schedule = compute_schedule(12_000.0, 0.0, 12, d(2025, 1, 1)).unwrap();

        assert_abs_diff_eq!(schedule.installment_amount, 1000.0, epsilon = 1e-9);
        assert_eq!(schedule.installments.len(), 12);
        for (i, entry) in schedule.installments.iter().enumerate() {
            assert_eq!(entry.due_date, d(2025, 1 + i as u32, 1));
            assert_abs_diff_eq!(entry.amount, 1000.0, epsilon = 1e-9);
        }

        // Exact division leaves no rounding residual
        let summary = schedule.summary();
        assert_abs_diff_eq!(summary.rounding_residual, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(summary.total_interest, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        let start = d(2025, 1, 1);
        assert!(matches!(
            compute_schedule(0.0, 5.0, 12, start),
            Err(ScheduleError::InvalidInput(_))
        ));
        assert!(matches!(
            compute_schedule(-100.0, 5.0, 12, start),
            Err(ScheduleError::InvalidInput(_))
        ));
        assert!(matches!(
            compute_schedule(10_000.0, -1.0, 12, start),
            Err(ScheduleError::InvalidInput(_))
        ));
        assert!(matches!(
            compute_schedule(10_000.0, 5.0, 0, start),
            Err(ScheduleError::InvalidInput(_))
        ));
        assert!(matches!(
            compute_schedule(f64::NAN, 5.0, 12, start),
            Err(ScheduleError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_round_half_up_at_cent_boundary() {
        assert_abs_diff_eq!(round_to_cents(0.125), 0.13, epsilon = 1e-12);
        assert_abs_diff_eq!(round_to_cents(0.124), 0.12, epsilon = 1e-12);
        assert_abs_diff_eq!(round_to_cents(8884.878868), 8884.88, epsilon = 1e-12);
    }

    #[test]
    fn test_extreme_tenure_rejected_not_nan() {
        // (1.01)^500000 overflows f64; the engine must reject, not return NaN
        let err = compute_schedule(1000.0, 12.0, 500_000, d(2025, 1, 1)).unwrap_err();
        assert!(matches!(err, ScheduleError::InvalidInput(_)));
    }

    #[test]
    fn test_leap_february_clamp_carries_forward() {
        // Jan 31 2024 start: Feb 29 (leap), then Mar 29
        let schedule = compute_schedule(30_000.0, 8.0, 3, d(2024, 1, 31)).unwrap();
        let dates: Vec<_> = schedule.installments.iter().map(|e| e.due_date).collect();
        assert_eq!(dates, vec![d(2024, 1, 31), d(2024, 2, 29), d(2024, 3, 29)]);
    }

    #[test]
    fn test_end_of_month_start_clamps_and_stays() {
        // Jan 31 start: Feb 28, then Mar 28 - the clamp carries forward
        let schedule = compute_schedule(50_000.0, 10.0, 4, d(2025, 1, 31)).unwrap();
        let dates: Vec<_> = schedule.installments.iter().map(|e| e.due_date).collect();
        assert_eq!(
            dates,
            vec![d(2025, 1, 31), d(2025, 2, 28), d(2025, 3, 28), d(2025, 4, 28)]
        );
    }

    #[test]
    fn test_schedule_length_matches_tenure() {
        for tenure in [1, 6, 60, 240] {
            let schedule = compute_schedule(250_000.0, 7.2, tenure, d(2025, 3, 10)).unwrap();
            assert_eq!(schedule.installments.len(), tenure as usize);
        }
    }

    #[test]
    fn test_residual_reported_not_corrected() {
        let schedule = compute_schedule(100_000.0, 12.0, 12, d(2025, 1, 5)).unwrap();
        let summary = schedule.summary();

        // All periods bill the same rounded amount
        assert!(schedule
            .installments
            .iter()
            .all(|e| e.amount == schedule.installment_amount));

        let exact_total = schedule.unrounded_installment * 12.0;
        assert_abs_diff_eq!(
            summary.rounding_residual,
            summary.total_payable - exact_total,
            epsilon = 1e-9
        );
        // Residual stays within a cent per period
        assert!(summary.rounding_residual.abs() < 0.01 * 12.0);
    }

    #[test]
    fn test_deterministic_for_identical_inputs() {
        let a = compute_schedule(98_765.43, 9.35, 48, d(2026, 2, 28)).unwrap();
        let b = compute_schedule(98_765.43, 9.35, 48, d(2026, 2, 28)).unwrap();
        assert_eq!(a, b);
    }
}
