//! Import adapter for tab-separated voucher rows.
//!
//! The input is the fixed-layout voucher export of the upstream system: one
//! row per transaction, rows of the same verification carrying the same
//! verification number. Rows are grouped by verification number and row
//! number before the model is built; accounts and dimension objects are
//! registered on first sight. Only the model's public API is used here.

use std::str::FromStr;

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sieport_model::{
    Account, Company, Dimension, DimensionObject, Transaction, Verification, VerificationSeries,
};

// Column positions in the voucher export.
const COL_VERIFICATION_NO: usize = 0;
const COL_DATE: usize = 1;
const COL_ACCOUNT_NO: usize = 3;
const COL_ACCOUNT_NAME: usize = 4;
const COL_RESULT_UNIT: usize = 5;
const COL_PROJECT: usize = 6;
const COL_VERIFICATION_TEXT: usize = 13;
const COL_ROW_NO: usize = 14;
const COL_TRANSACTION_TEXT: usize = 15;
const COL_AMOUNT: usize = 18;

/// Builds a [`Company`] from tab-separated voucher rows.
#[derive(Debug, Clone)]
pub struct TsvLoader {
    company_name: String,
    skip_header_lines: usize,
}

impl TsvLoader {
    /// Create a loader that stamps the given company name.
    #[must_use]
    pub fn new(company_name: impl Into<String>) -> Self {
        Self {
            company_name: company_name.into(),
            skip_header_lines: 1,
        }
    }

    /// Set how many header lines to skip (default: 1).
    #[must_use]
    pub const fn with_skip_header_lines(mut self, lines: usize) -> Self {
        self.skip_header_lines = lines;
        self
    }

    /// Parse the rows and build the model.
    ///
    /// The returned company has not been validated; that is the caller's
    /// step in the build -> validate -> encode pipeline.
    pub fn parse(&self, content: &str) -> Result<Company> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .flexible(true)
            .from_reader(content.as_bytes());

        let mut rows = Vec::new();
        for (index, result) in reader.records().enumerate() {
            if index < self.skip_header_lines {
                continue;
            }
            let record = result.with_context(|| format!("row {}: malformed input", index + 1))?;
            if record.iter().all(str::is_empty) {
                continue;
            }
            rows.push(Row::parse(&record, index + 1)?);
        }

        // The export interleaves verifications; group the rows first.
        rows.sort_by(|a, b| {
            a.verification_no
                .cmp(&b.verification_no)
                .then_with(|| a.row_no.cmp(&b.row_no))
        });

        let mut company = Company::new().with_name(self.company_name.as_str());
        company
            .add_verification_series(VerificationSeries::default())?
            .add_dimension(Dimension::new(Dimension::COST_CENTRE))?
            .add_dimension(Dimension::new(Dimension::PROJECT))?;

        let mut current: Option<Verification> = None;
        for row in &rows {
            let starts_new_verification = current
                .as_ref()
                .is_some_and(|verification| verification.id() != row.verification_no);
            if starts_new_verification {
                if let Some(done) = current.take() {
                    add_to_series(&mut company, done)?;
                }
            }
            if current.is_none() {
                current = Some(
                    Verification::new(row.verification_no.as_str())
                        .with_date(row.date)
                        .with_text(row.verification_text.as_str()),
                );
            }

            if company.account(row.account_no).is_none() {
                company.add_account(
                    Account::new(row.account_no).with_name(row.account_name.as_str()),
                )?;
            }
            let account = company
                .account(row.account_no)
                .context("account missing from the registry")?;
            let mut transaction = Transaction::new()
                .with_account(account)
                .with_amount(row.amount);
            if !row.transaction_text.is_empty() {
                transaction = transaction.with_text(row.transaction_text.as_str());
            }
            transaction = attach_object(
                &mut company,
                transaction,
                Dimension::COST_CENTRE,
                &row.result_unit,
                "Resultatenhet",
            )?;
            transaction = attach_object(
                &mut company,
                transaction,
                Dimension::PROJECT,
                &row.project,
                "Projekt",
            )?;

            if let Some(verification) = current.take() {
                current = Some(verification.with_transaction(transaction));
            }
        }
        if let Some(done) = current.take() {
            add_to_series(&mut company, done)?;
        }

        Ok(company)
    }
}

struct Row {
    verification_no: String,
    date: NaiveDate,
    account_no: u32,
    account_name: String,
    result_unit: String,
    project: String,
    verification_text: String,
    row_no: u32,
    transaction_text: String,
    amount: Decimal,
}

impl Row {
    fn parse(record: &csv::StringRecord, line: usize) -> Result<Self> {
        let date_str = field(record, line, COL_DATE)?;
        let date = NaiveDate::parse_from_str(date_str.trim(), "%Y%m%d")
            .with_context(|| format!("row {line}: failed to parse date '{date_str}'"))?;
        let account_no = field(record, line, COL_ACCOUNT_NO)?
            .trim()
            .parse()
            .with_context(|| format!("row {line}: failed to parse account number"))?;
        let row_no = field(record, line, COL_ROW_NO)?
            .trim()
            .parse()
            .with_context(|| format!("row {line}: failed to parse row number"))?;
        let amount = parse_amount(field(record, line, COL_AMOUNT)?)
            .with_context(|| format!("row {line}: failed to parse amount"))?;

        Ok(Self {
            verification_no: field(record, line, COL_VERIFICATION_NO)?.trim().to_owned(),
            date,
            account_no,
            account_name: field(record, line, COL_ACCOUNT_NAME)?.trim().to_owned(),
            result_unit: field(record, line, COL_RESULT_UNIT)?.trim().to_owned(),
            project: field(record, line, COL_PROJECT)?.trim().to_owned(),
            verification_text: field(record, line, COL_VERIFICATION_TEXT)?.trim().to_owned(),
            row_no,
            transaction_text: field(record, line, COL_TRANSACTION_TEXT)?.trim().to_owned(),
            amount,
        })
    }
}

fn field<'a>(record: &'a csv::StringRecord, line: usize, column: usize) -> Result<&'a str> {
    record
        .get(column)
        .with_context(|| format!("row {line}: missing column {column}"))
}

fn add_to_series(company: &mut Company, verification: Verification) -> Result<()> {
    company
        .verification_series_mut(VerificationSeries::DEFAULT_SERIES)
        .context("default verification series missing from the registry")?
        .add_verification(verification)?;
    Ok(())
}

fn attach_object(
    company: &mut Company,
    transaction: Transaction,
    dimension_id: u32,
    object_id: &str,
    name_prefix: &str,
) -> Result<Transaction> {
    if object_id.is_empty() {
        return Ok(transaction);
    }
    let dimension = company
        .dimension_mut(dimension_id)
        .with_context(|| format!("dimension {dimension_id} is not registered"))?;
    if dimension.object(object_id).is_none() {
        // The export carries no object names; synthesize one.
        let object = DimensionObject::new(dimension_id, object_id)?
            .with_name(format!("{name_prefix} {object_id}"));
        dimension.add_object(object)?;
    }
    let object = dimension
        .object(object_id)
        .context("object missing from the dimension")?;
    Ok(transaction.with_object(object)?)
}

/// Amounts arrive with thousands dots and a decimal comma, like `1.234,56`.
fn parse_amount(value: &str) -> Result<Decimal> {
    let normalized = value.trim().replace('.', "").replace(',', ".");
    if normalized.is_empty() {
        bail!("empty amount");
    }
    Decimal::from_str(&normalized).with_context(|| format!("invalid amount '{value}'"))
}
