//! Amortization core: EMI computation and due date schedule generation

pub mod calendar;
pub mod engine;
pub mod installments;

pub use engine::compute_schedule;
pub use installments::{AmortizationSchedule, Installment, ScheduleSummary};
