//! EMI Engine - Loan amortization and installment schedule generation
//!
//! This library provides:
//! - Fixed-payment (EMI) computation via the standard annuity formula
//! - Calendar-correct due date generation with end-of-month clamping
//! - Loan domain records with CSV loading
//! - Portfolio-level batch schedule generation and commitment reporting

pub mod error;
pub mod loan;
pub mod schedule;
pub mod portfolio;

// Re-export commonly used types
pub use error::ScheduleError;
pub use loan::{Loan, LoanStatus, LoanType};
pub use schedule::{compute_schedule, AmortizationSchedule, Installment, ScheduleSummary};
pub use portfolio::PortfolioRunner;
