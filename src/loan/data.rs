//! Loan record structures matching the onboarding form fields

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;
use crate::schedule::{compute_schedule, AmortizationSchedule};

/// Category of loan, as offered by the onboarding form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoanType {
    Personal,
    Home,
    Car,
    Education,
    Gold,
}

impl LoanType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoanType::Personal => "personal",
            LoanType::Home => "home",
            LoanType::Car => "car",
            LoanType::Education => "education",
            LoanType::Gold => "gold",
        }
    }
}

/// Lifecycle status of a loan
///
/// A loan is created active; closing it is a status transition performed by
/// the persistence layer, never a mutation of the generated schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoanStatus {
    Active,
    Closed,
}

impl LoanStatus {
    pub fn is_active(&self) -> bool {
        matches!(self, LoanStatus::Active)
    }
}

/// A single loan record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Loan {
    /// Unique loan identifier
    pub loan_id: u32,

    /// Lender / issuing organization
    pub organization: String,

    /// Loan category
    pub loan_type: LoanType,

    /// Principal amount in currency units
    pub amount: f64,

    /// Annual nominal interest rate in percent (7.2 = 7.2%/year)
    pub interest_rate: f64,

    /// Number of monthly installments
    pub tenure_months: u32,

    /// Due date of the first installment
    pub start_date: NaiveDate,

    /// Lifecycle status
    pub status: LoanStatus,

    /// Free-text remarks
    #[serde(default)]
    pub remarks: Option<String>,
}

impl Loan {
    /// Create a new active loan with required fields
    pub fn new(
        loan_id: u32,
        organization: impl Into<String>,
        loan_type: LoanType,
        amount: f64,
        interest_rate: f64,
        tenure_months: u32,
        start_date: NaiveDate,
    ) -> Self {
        Self {
            loan_id,
            organization: organization.into(),
            loan_type,
            amount,
            interest_rate,
            tenure_months,
            start_date,
            status: LoanStatus::Active,
            remarks: None,
        }
    }

    /// Monthly decimal rate used by the annuity formula
    pub fn monthly_rate(&self) -> f64 {
        self.interest_rate / 100.0 / 12.0
    }

    /// Generate the EMI schedule for this loan
    pub fn schedule(&self) -> Result<AmortizationSchedule, ScheduleError> {
        compute_schedule(
            self.amount,
            self.interest_rate,
            self.tenure_months,
            self.start_date,
        )
    }

    /// Effective end date: the final installment's due date.
    /// Derived from the schedule so it cannot disagree with it.
    pub fn end_date(&self) -> Result<NaiveDate, ScheduleError> {
        let schedule = self.schedule()?;
        schedule
            .end_date()
            .ok_or_else(|| ScheduleError::invalid("schedule is empty"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_loan_schedule_matches_fields() {
        let loan = Loan::new(
            1,
            "Bank of India",
            LoanType::Home,
            2_500_000.0,
            7.2,
            240,
            d(2025, 4, 10),
        );

        assert!(loan.status.is_active());
        assert!((loan.monthly_rate() - 0.006).abs() < 1e-12);

        let schedule = loan.schedule().unwrap();
        assert_eq!(schedule.installments.len(), 240);
        assert_eq!(schedule.first_due_date(), Some(d(2025, 4, 10)));
        // 239 months after April 2025 is March 2045
        assert_eq!(loan.end_date().unwrap(), d(2045, 3, 10));
    }

    #[test]
    fn test_invalid_loan_rejected_at_schedule_time() {
        let loan = Loan::new(2, "Acme", LoanType::Personal, -5_000.0, 10.0, 12, d(2025, 1, 1));
        assert!(loan.schedule().is_err());
    }

    #[test]
    fn test_loan_type_labels() {
        assert_eq!(LoanType::Gold.as_str(), "gold");
        assert_eq!(LoanType::Education.as_str(), "education");
    }
}
