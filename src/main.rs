//! EMI Engine CLI
//!
//! Command-line demo: generate and print an amortization schedule

use chrono::NaiveDate;
use emi_engine::{Loan, LoanType};
use std::fs::File;
use std::io::Write;
use std::process;

fn main() {
    env_logger::init();

    println!("EMI Engine v0.1.0");
    println!("=================\n");

    // Sample loan - Home loan, 25,00,000 @ 7.2% over 20 years
    let start_date = NaiveDate::from_ymd_opt(2025, 4, 10).unwrap();
    let loan = Loan::new(
        1001,
        "Bank of India",
        LoanType::Home,
        2_500_000.0, // principal
        7.2,         // annual rate %
        240,         // tenure months
        start_date,
    );

    println!("Loan: {}", loan.loan_id);
    println!("  Organization: {}", loan.organization);
    println!("  Type: {}", loan.loan_type.as_str());
    println!("  Principal: {:.2}", loan.amount);
    println!("  Rate: {:.2}%/year", loan.interest_rate);
    println!("  Tenure: {} months", loan.tenure_months);
    println!();

    let schedule = match loan.schedule() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Schedule generation failed: {}", e);
            process::exit(1);
        }
    };

    // Print header
    println!("Schedule ({} installments):", schedule.installments.len());
    println!("{:>5} {:>12} {:>14}", "Seq", "DueDate", "Amount");
    println!("{}", "-".repeat(34));

    // Print first 24 installments to console
    for entry in schedule.installments.iter().take(24) {
        println!(
            "{:>5} {:>12} {:>14.2}",
            entry.sequence, entry.due_date, entry.amount
        );
    }

    if schedule.installments.len() > 24 {
        println!("... ({} more installments)", schedule.installments.len() - 24);
    }

    // Write full schedule to CSV
    let csv_path = "emi_schedule.csv";
    let mut file = File::create(csv_path).expect("Unable to create CSV file");

    writeln!(file, "Seq,DueDate,Amount").unwrap();
    for entry in &schedule.installments {
        writeln!(file, "{},{},{:.2}", entry.sequence, entry.due_date, entry.amount).unwrap();
    }

    println!("\nFull schedule written to: {}", csv_path);

    // Print summary
    let summary = schedule.summary();
    println!("\nSummary:");
    println!("  Tenure: {} months", summary.tenure_months);
    println!("  Monthly EMI: {:.2}", summary.installment_amount);
    println!("  Total Payable: {:.2}", summary.total_payable);
    println!("  Total Interest: {:.2}", summary.total_interest);
    println!("  Rounding Residual: {:.4}", summary.rounding_residual);
    if let Some(end) = summary.end_date {
        println!("  Final Due Date: {}", end);
    }
}
