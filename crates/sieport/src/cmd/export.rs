//! Export command: TSV voucher rows in, SIE document out.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use sieport_writer::{write_document, WriterConfig};
use tracing::Level;

use crate::tsv::TsvLoader;

/// Export tab-separated voucher rows as a SIE type 4 document.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// The voucher file to import
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short = 'o', long, value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Company name written to the document header
    #[arg(long, value_name = "NAME")]
    pub company_name: String,

    /// Company registration number, like 555555-5555
    #[arg(long, value_name = "ORGNR")]
    pub orgnr: Option<String>,

    /// Number of header lines to skip in the input
    #[arg(long, default_value = "1")]
    pub skip_header: usize,

    /// Generation date stamped into the GEN record (ISO date, default: today)
    #[arg(long, value_name = "DATE")]
    pub gen_date: Option<NaiveDate>,

    /// Signature stamped into the GEN record
    #[arg(long, value_name = "SIGN")]
    pub sign: Option<String>,

    /// Show verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

fn run(args: &Args) -> Result<ExitCode> {
    let content = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;

    let loader = TsvLoader::new(args.company_name.as_str())
        .with_skip_header_lines(args.skip_header);
    let mut company = loader.parse(&content)?;
    if let Some(orgnr) = &args.orgnr {
        company = company.with_company_number(orgnr.as_str());
    }

    company
        .validate()
        .context("imported data is not exportable")?;
    tracing::debug!(
        accounts = company.accounts().count(),
        series = company.verification_series_all().len(),
        "model validated"
    );

    let mut config = WriterConfig::default();
    if let Some(gen_date) = args.gen_date {
        config.generated_at = gen_date;
    }
    config.generated_by = args.sign.clone();

    let document = write_document(&company, &config);

    if let Some(output) = &args.output {
        fs::write(output, &document)
            .with_context(|| format!("failed to write {}", output.display()))?;
        if args.verbose {
            eprintln!("Wrote {} bytes to {}", document.len(), output.display());
        }
    } else {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(&document)
            .context("failed to write to stdout")?;
    }

    Ok(ExitCode::SUCCESS)
}

/// Main entry point for the export command.
pub fn main() -> ExitCode {
    let args = Args::parse();

    if args.verbose {
        tracing_subscriber::fmt()
            .with_max_level(Level::DEBUG)
            .init();
    }

    match run(&args) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(2)
        }
    }
}
