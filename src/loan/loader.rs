//! Load loan records from CSV

use super::{Loan, LoanStatus, LoanType};
use chrono::NaiveDate;
use csv::Reader;
use std::error::Error;
use std::path::Path;

/// Raw CSV row matching the loan export columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "LoanID")]
    loan_id: u32,
    #[serde(rename = "Organization")]
    organization: String,
    #[serde(rename = "LoanType")]
    loan_type: String,
    #[serde(rename = "Amount")]
    amount: f64,
    #[serde(rename = "InterestRate")]
    interest_rate: f64,
    #[serde(rename = "TenureMonths")]
    tenure_months: u32,
    #[serde(rename = "StartDate")]
    start_date: String,
    #[serde(rename = "Status")]
    status: String,
    #[serde(rename = "Remarks")]
    remarks: Option<String>,
}

impl CsvRow {
    fn to_loan(self) -> Result<Loan, Box<dyn Error>> {
        let loan_type = match self.loan_type.as_str() {
            "personal" => LoanType::Personal,
            "home" => LoanType::Home,
            "car" => LoanType::Car,
            "education" => LoanType::Education,
            "gold" => LoanType::Gold,
            other => return Err(format!("Unknown LoanType: {}", other).into()),
        };

        let status = match self.status.as_str() {
            "active" => LoanStatus::Active,
            "closed" => LoanStatus::Closed,
            other => return Err(format!("Unknown Status: {}", other).into()),
        };

        let start_date = NaiveDate::parse_from_str(&self.start_date, "%Y-%m-%d")
            .map_err(|e| format!("Bad StartDate {:?}: {}", self.start_date, e))?;

        let remarks = self.remarks.filter(|r| !r.is_empty());

        Ok(Loan {
            loan_id: self.loan_id,
            organization: self.organization,
            loan_type,
            amount: self.amount,
            interest_rate: self.interest_rate,
            tenure_months: self.tenure_months,
            start_date,
            status,
            remarks,
        })
    }
}

/// Load all loans from a CSV file
pub fn load_loans<P: AsRef<Path>>(path: P) -> Result<Vec<Loan>, Box<dyn Error>> {
    let mut reader = Reader::from_path(path)?;
    let mut loans = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        let loan = row.to_loan()?;
        loans.push(loan);
    }

    Ok(loans)
}

/// Load loans from any reader (e.g., string buffer, network stream)
pub fn load_loans_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<Loan>, Box<dyn Error>> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut loans = Vec::new();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        let loan = row.to_loan()?;
        loans.push(loan);
    }

    Ok(loans)
}
