//! Loan domain records and CSV loading

pub mod data;
pub mod loader;

pub use data::{Loan, LoanStatus, LoanType};
pub use loader::{load_loans, load_loans_from_reader};
