//! Portfolio runner for batch schedule generation
//!
//! Pre-loads a set of loans once, then generates schedules and aggregate
//! commitment figures without re-reading CSV files.

use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;
use crate::loan::{load_loans, Loan};
use crate::schedule::AmortizationSchedule;

/// A generated schedule paired with its loan identifier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanSchedule {
    pub loan_id: u32,
    pub schedule: AmortizationSchedule,
}

/// Pre-loaded runner over a set of loans
///
/// # Example
/// ```ignore
/// let runner = PortfolioRunner::from_csv_path("loans.csv")?;
/// let schedules = runner.run_all()?;
/// let outflow = runner.monthly_commitment()?;
/// ```
#[derive(Debug, Clone)]
pub struct PortfolioRunner {
    loans: Vec<Loan>,
}

impl PortfolioRunner {
    /// Create runner with pre-built loans
    pub fn with_loans(loans: Vec<Loan>) -> Self {
        Self { loans }
    }

    /// Create runner by loading loans from a CSV file
    pub fn from_csv_path<P: AsRef<std::path::Path>>(
        path: P,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        Ok(Self {
            loans: load_loans(path)?,
        })
    }

    /// Generate schedules for every loan, active or closed
    pub fn run_all(&self) -> Result<Vec<LoanSchedule>, ScheduleError> {
        self.loans
            .iter()
            .map(|loan| {
                Ok(LoanSchedule {
                    loan_id: loan.loan_id,
                    schedule: loan.schedule()?,
                })
            })
            .collect()
    }

    /// Total monthly EMI outflow across active loans
    /// (the aggregate figure the dashboard displays)
    pub fn monthly_commitment(&self) -> Result<f64, ScheduleError> {
        let mut total = 0.0;
        for loan in self.loans.iter().filter(|l| l.status.is_active()) {
            total += loan.schedule()?.installment_amount;
        }
        Ok(total)
    }

    /// Get reference to the loaded loans for inspection/modification
    pub fn loans(&self) -> &[Loan] {
        &self.loans
    }

    /// Get mutable reference to the loaded loans for customization
    pub fn loans_mut(&mut self) -> &mut Vec<Loan> {
        &mut self.loans
    }
}
