//! Document assembly.

use chrono::{Local, NaiveDate};
use sieport_model::Company;

use crate::cp437;
use crate::field::{escape_field, Field};

/// Header options stamped into every document.
///
/// Passed explicitly to [`write_document`]; the writer keeps no state
/// between calls.
#[derive(Debug, Clone)]
pub struct WriterConfig {
    /// Name of the generating program, written to the PROGRAM record.
    pub generator: String,
    /// Version of the generating program.
    pub generator_version: String,
    /// Generation date, written to the GEN record.
    pub generated_at: NaiveDate,
    /// Name, signature or user id of the generating person or process.
    pub generated_by: Option<String>,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            generator: "sieport".to_owned(),
            generator_version: env!("CARGO_PKG_VERSION").to_owned(),
            generated_at: Local::now().date_naive(),
            generated_by: None,
        }
    }
}

/// Render one record: `#LABEL` plus space-separated parameters, ended with
/// CRLF.
///
/// Omitted parameters are trimmed from the tail of the line only; an
/// omitted parameter left of a set one renders as an empty quoted token.
fn record(label: &str, fields: &[Field]) -> String {
    let mut line = format!("#{label}");
    let last_set = fields
        .iter()
        .rposition(|field| !matches!(field, Field::Empty));
    if let Some(last) = last_set {
        for field in &fields[..=last] {
            line.push(' ');
            match field {
                Field::Empty => line.push_str(&escape_field("")),
                Field::Value(value) => line.push_str(&escape_field(value)),
                Field::List(items) => {
                    line.push('{');
                    for (index, item) in items.iter().enumerate() {
                        if index > 0 {
                            line.push(' ');
                        }
                        line.push_str(&escape_field(item));
                    }
                    line.push('}');
                }
            }
        }
    }
    line.push_str("\r\n");
    line
}

/// Fiscal years are indexed 0, -1, -2, ... in stored order, most recent
/// first.
fn year_index(position: usize) -> i32 {
    -(position as i32)
}

/// Assemble the complete interchange document for a company.
///
/// Walks the graph read-only and returns the document as code page 437
/// bytes. The writer re-checks nothing: run [`Company::validate`] first. A
/// model with missing mandatory references produces trimmed or malformed
/// records, which is a caller error.
#[must_use]
pub fn write_document(company: &Company, config: &WriterConfig) -> Vec<u8> {
    let mut doc = String::new();

    doc.push_str(&record("FLAGGA", &["0".into()]));
    doc.push_str(&record("FORMAT", &["PC8".into()]));
    doc.push_str(&record("SIETYP", &["4".into()]));
    doc.push_str(&record(
        "PROGRAM",
        &[
            config.generator.as_str().into(),
            config.generator_version.as_str().into(),
        ],
    ));
    doc.push_str(&record(
        "GEN",
        &[
            config.generated_at.into(),
            config.generated_by.as_deref().into(),
        ],
    ));
    doc.push_str(&record("FNAMN", &[company.name().into()]));
    if let Some(number) = company.company_number() {
        doc.push_str(&record("ORGNR", &[number.into()]));
    }
    if let Some(chart) = company.chart_of_accounts() {
        doc.push_str(&record("KPTYP", &[chart.into()]));
    }

    for account in company.accounts() {
        doc.push_str(&record(
            "KONTO",
            &[account.id().into(), account.name().into()],
        ));
    }
    for dimension in company.dimensions() {
        for object in dimension.objects() {
            doc.push_str(&record(
                "OBJEKT",
                &[
                    dimension.id().into(),
                    object.id().into(),
                    object.name().into(),
                ],
            ));
        }
    }

    for (position, year) in company.fiscal_years().iter().enumerate() {
        doc.push_str(&record(
            "RAR",
            &[
                year_index(position).into(),
                year.start().into(),
                year.end().into(),
            ],
        ));
    }
    for (position, year) in company.fiscal_years().iter().enumerate() {
        for balance in year.account_balances() {
            doc.push_str(&record(
                "IB",
                &[
                    year_index(position).into(),
                    balance.account().into(),
                    balance.incoming().into(),
                ],
            ));
            doc.push_str(&record(
                "UB",
                &[
                    year_index(position).into(),
                    balance.account().into(),
                    balance.outgoing().into(),
                ],
            ));
        }
    }

    // Blank line between the header block and the verifications.
    doc.push_str("\r\n");

    for series in company.verification_series_all() {
        for verification in series.verifications() {
            doc.push_str(&record(
                "VER",
                &[
                    series.id().into(),
                    verification.id().into(),
                    verification.date().into(),
                    verification.text().into(),
                    verification.registration_date().into(),
                    verification.registration_sign().into(),
                ],
            ));
            doc.push_str("{\r\n");
            for transaction in verification.transactions() {
                let pairs: Vec<String> = transaction
                    .objects()
                    .flat_map(|(dimension, object)| [dimension.to_string(), object.to_owned()])
                    .collect();
                doc.push_str("    ");
                doc.push_str(&record(
                    "TRANS",
                    &[
                        transaction.account().into(),
                        Field::List(pairs),
                        transaction.amount().into(),
                        // A transaction without its own date inherits the
                        // verification date.
                        transaction.date().or(verification.date()).into(),
                        transaction.text().into(),
                        transaction.quantity().into(),
                        transaction.registration_sign().into(),
                    ],
                ));
            }
            doc.push_str("}\r\n\r\n");
        }
    }

    cp437::encode(&doc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_trims_trailing_empties() {
        let line = record("GEN", &["20150921".into(), Field::Empty]);
        assert_eq!(line, "#GEN 20150921\r\n");
    }

    #[test]
    fn test_record_keeps_interior_empties() {
        let line = record(
            "VER",
            &[
                "A".into(),
                "7".into(),
                "20150105".into(),
                Field::Empty,
                Field::Empty,
                "SG".into(),
            ],
        );
        assert_eq!(line, "#VER A 7 20150105 \"\" \"\" SG\r\n");
    }

    #[test]
    fn test_record_with_all_empty_parameters() {
        assert_eq!(record("GEN", &[Field::Empty, Field::Empty]), "#GEN\r\n");
    }

    #[test]
    fn test_record_renders_lists_unquoted() {
        let line = record(
            "TRANS",
            &[
                "1910".into(),
                Field::List(vec!["1".to_owned(), "North East".to_owned()]),
                "250.00".into(),
            ],
        );
        assert_eq!(line, "#TRANS 1910 {1 \"North East\"} 250.00\r\n");
    }

    #[test]
    fn test_empty_list_still_renders_braces() {
        let line = record("TRANS", &["1910".into(), Field::List(Vec::new())]);
        assert_eq!(line, "#TRANS 1910 {}\r\n");
    }

    #[test]
    fn test_list_stops_tail_trimming() {
        // A list is a set parameter, so an empty value before it survives.
        let line = record(
            "X",
            &[Field::Empty, Field::List(Vec::new()), Field::Empty],
        );
        assert_eq!(line, "#X \"\" {}\r\n");
    }
}
