//! Generate EMI schedules for an entire loan portfolio CSV
//!
//! Outputs one row per installment across all loans, plus a JSON summary
//! of per-loan totals and the aggregate monthly commitment.

use emi_engine::loan::load_loans;
use emi_engine::portfolio::LoanSchedule;
use emi_engine::Loan;
use log::{info, warn};
use rayon::prelude::*;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::time::Instant;

/// Per-loan totals for the JSON report
#[derive(Debug, Serialize)]
struct LoanReport {
    loan_id: u32,
    organization: String,
    installment_amount: f64,
    tenure_months: u32,
    total_payable: f64,
    total_interest: f64,
    rounding_residual: f64,
}

#[derive(Debug, Serialize)]
struct PortfolioReport {
    loan_count: usize,
    active_monthly_commitment: f64,
    loans: Vec<LoanReport>,
}

fn main() {
    env_logger::init();

    let input_path = std::env::args().nth(1).unwrap_or_else(|| "loans.csv".to_string());

    let start = Instant::now();
    println!("Loading loans from {}...", input_path);

    let loans = load_loans(&input_path).expect("Failed to load loans");
    println!("Loaded {} loans in {:?}", loans.len(), start.elapsed());

    println!("Generating schedules...");
    let gen_start = Instant::now();

    // Generate schedules in parallel; skip loans that fail validation
    let schedules: Vec<(Loan, LoanSchedule)> = loans
        .par_iter()
        .filter_map(|loan| match loan.schedule() {
            Ok(schedule) => Some((
                loan.clone(),
                LoanSchedule {
                    loan_id: loan.loan_id,
                    schedule,
                },
            )),
            Err(e) => {
                warn!("loan {} skipped: {}", loan.loan_id, e);
                None
            }
        })
        .collect();

    println!("Schedules complete in {:?}", gen_start.elapsed());
    info!("{} of {} loans produced schedules", schedules.len(), loans.len());

    // Write flat installment output
    let output_path = "portfolio_schedule.csv";
    let mut file = File::create(output_path).expect("Failed to create output file");

    writeln!(file, "LoanID,Organization,Seq,DueDate,Amount").unwrap();
    for (loan, ls) in &schedules {
        for entry in &ls.schedule.installments {
            writeln!(
                file,
                "{},{},{},{},{:.2}",
                loan.loan_id, loan.organization, entry.sequence, entry.due_date, entry.amount
            )
            .unwrap();
        }
    }
    println!("Installments written to {}", output_path);

    // Aggregate monthly commitment over active loans
    let active_monthly_commitment: f64 = schedules
        .iter()
        .filter(|(loan, _)| loan.status.is_active())
        .map(|(_, ls)| ls.schedule.installment_amount)
        .sum();

    let report = PortfolioReport {
        loan_count: schedules.len(),
        active_monthly_commitment,
        loans: schedules
            .iter()
            .map(|(loan, ls)| {
                let summary = ls.schedule.summary();
                LoanReport {
                    loan_id: loan.loan_id,
                    organization: loan.organization.clone(),
                    installment_amount: summary.installment_amount,
                    tenure_months: summary.tenure_months,
                    total_payable: summary.total_payable,
                    total_interest: summary.total_interest,
                    rounding_residual: summary.rounding_residual,
                }
            })
            .collect(),
    };

    let report_path = "portfolio_summary.json";
    let json = serde_json::to_string_pretty(&report).expect("Failed to serialize report");
    std::fs::write(report_path, json).expect("Failed to write report");
    println!("Summary written to {}", report_path);

    println!("\nPortfolio Summary:");
    println!("  Loans: {}", report.loan_count);
    println!("  Active monthly commitment: {:.2}", report.active_monthly_commitment);

    println!("\nTotal time: {:?}", start.elapsed());
}
