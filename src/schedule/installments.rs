//! Output structures for generated EMI schedules

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single installment entry in an amortization schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Installment {
    /// Zero-based position within the schedule
    pub sequence: u32,

    /// Calendar due date (start date advanced by `sequence` months)
    pub due_date: NaiveDate,

    /// Installment amount in currency units, rounded to cents
    pub amount: f64,
}

/// Complete generated schedule for one loan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationSchedule {
    /// Principal the schedule was generated from
    pub principal: f64,

    /// Annual nominal interest rate in percent (e.g. 7.2 = 7.2%/year)
    pub annual_rate_percent: f64,

    /// Fixed monthly installment, rounded half-up to cents
    pub installment_amount: f64,

    /// Exact annuity payment before rounding; kept so the rounding
    /// residual can be reported without re-deriving the formula
    pub unrounded_installment: f64,

    /// Ordered installment entries, length = tenure in months
    pub installments: Vec<Installment>,
}

impl AmortizationSchedule {
    /// First due date (the loan's start date)
    pub fn first_due_date(&self) -> Option<NaiveDate> {
        self.installments.first().map(|e| e.due_date)
    }

    /// Final due date (the loan's effective end date)
    pub fn end_date(&self) -> Option<NaiveDate> {
        self.installments.last().map(|e| e.due_date)
    }

    /// Get summary statistics
    pub fn summary(&self) -> ScheduleSummary {
        let tenure_months = self.installments.len() as u32;
        let total_payable: f64 = self.installments.iter().map(|e| e.amount).sum();
        let exact_total = self.unrounded_installment * tenure_months as f64;

        ScheduleSummary {
            tenure_months,
            installment_amount: self.installment_amount,
            total_payable,
            total_interest: exact_total - self.principal,
            // Every period carries the same rounded amount, so the sum can
            // drift from principal + interest by a few cents. The residual
            // is reported, never folded back into the final installment.
            rounding_residual: total_payable - exact_total,
            end_date: self.end_date(),
        }
    }
}

/// Summary statistics for a generated schedule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleSummary {
    pub tenure_months: u32,
    pub installment_amount: f64,
    /// Sum of the rounded installments actually billed
    pub total_payable: f64,
    /// Interest over the loan's life, from the unrounded payment
    pub total_interest: f64,
    /// total_payable minus the exact annuity total
    pub rounding_residual: f64,
    pub end_date: Option<NaiveDate>,
}
