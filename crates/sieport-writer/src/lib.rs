//! SIE type 4 document writer.
//!
//! Turns a validated [`sieport_model::Company`] into the line-oriented
//! interchange text:
//!
//! - [`escape_field`] - scalar-to-token escaping
//! - [`Field`] - the closed record-parameter variant
//! - [`cp437`] - code page 437 ("PC8") transcoding
//! - [`WriterConfig`] / [`write_document`] - full document assembly
//!
//! The writer is a pure transform: it walks an already-built graph
//! read-only and returns the document bytes. Validation is the model's
//! job and happens before encoding, never during.
//!
//! # Example
//!
//! ```
//! use sieport_model::{Account, Company};
//! use sieport_writer::{write_document, WriterConfig};
//! use chrono::NaiveDate;
//!
//! let mut company = Company::new().with_name("Example AB");
//! company.add_account(Account::new(1910).with_name("Kassa"))?;
//! company.validate()?;
//!
//! let config = WriterConfig {
//!     generator: "example".to_owned(),
//!     generator_version: "1.0".to_owned(),
//!     generated_at: NaiveDate::from_ymd_opt(2015, 9, 21).unwrap(),
//!     generated_by: None,
//! };
//! let document = write_document(&company, &config);
//! assert!(document.starts_with(b"#FLAGGA 0\r\n"));
//! # Ok::<(), sieport_model::DomainError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cp437;
pub mod field;
pub mod writer;

pub use field::{escape_field, Field};
pub use writer::{write_document, WriterConfig};
