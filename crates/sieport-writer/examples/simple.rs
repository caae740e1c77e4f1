//! Minimal walkthrough: build a company, validate it, print the document.

use std::io::{self, Write};

use chrono::NaiveDate;
use rust_decimal_macros::dec;
use sieport_model::{Account, Company, Transaction, Verification, VerificationSeries};
use sieport_writer::{write_document, WriterConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut company = Company::new().with_name("My company");
    company
        .add_verification_series(VerificationSeries::default())?
        .add_account(Account::new(1511).with_name("Kundfordringar"))?
        .add_account(Account::new(3741).with_name("Öresutjämning"))?;

    let date = NaiveDate::from_ymd_opt(2015, 1, 5).unwrap();
    let verification = Verification::new("591000490")
        .with_date(date)
        .with_transaction(
            Transaction::new()
                .with_account(company.account(1511).unwrap())
                .with_amount(dec!(-0.24)),
        )
        .with_transaction(
            Transaction::new()
                .with_account(company.account(3741).unwrap())
                .with_amount(dec!(0.24)),
        );
    company
        .verification_series_mut("A")
        .unwrap()
        .add_verification(verification)?;

    company.validate()?;

    let document = write_document(&company, &WriterConfig::default());
    io::stdout().write_all(&document)?;
    Ok(())
}
