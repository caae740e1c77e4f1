//! Bookkeeping data model for SIE export.
//!
//! This crate provides the in-memory ledger graph that the writer crate
//! serializes:
//!
//! - [`Company`] - The root aggregate owning everything below
//! - [`Account`] - A ledger account with number and name
//! - [`Dimension`] / [`DimensionObject`] - Classification axes and values
//! - [`FiscalYear`] / [`AccountBalance`] - Periods with per-account balances
//! - [`VerificationSeries`] / [`Verification`] - Journal entries
//! - [`Transaction`] - One debit or credit line
//!
//! Building is incremental: entities are constructed with their identifying
//! field, completed through `with_*` builders, and added to their owning
//! collection. Nothing is checked until [`Company::validate`] runs.
//!
//! # Example
//!
//! ```
//! use sieport_model::{Account, Company, Transaction, Verification, VerificationSeries};
//! use chrono::NaiveDate;
//! use rust_decimal_macros::dec;
//!
//! let mut company = Company::new().with_name("My company");
//! company
//!     .add_account(Account::new(1511).with_name("Kundfordringar"))?
//!     .add_account(Account::new(3741).with_name("Öresutjämning"))?
//!     .add_verification_series(VerificationSeries::default())?;
//!
//! let date = NaiveDate::from_ymd_opt(2015, 1, 5).unwrap();
//! let verification = Verification::new("591000490")
//!     .with_date(date)
//!     .with_transaction(
//!         Transaction::new()
//!             .with_account(company.account(1511).unwrap())
//!             .with_amount(dec!(-0.24)),
//!     )
//!     .with_transaction(
//!         Transaction::new()
//!             .with_account(company.account(3741).unwrap())
//!             .with_amount(dec!(0.24)),
//!     );
//! company
//!     .verification_series_mut("A")
//!     .unwrap()
//!     .add_verification(verification)?;
//!
//! company.validate()?;
//! # Ok::<(), sieport_model::DomainError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod account;
pub mod company;
pub mod dimension;
pub mod error;
pub mod fiscal_year;
pub mod transaction;
pub mod verification;

pub use account::Account;
pub use company::Company;
pub use dimension::{Dimension, DimensionObject};
pub use error::DomainError;
pub use fiscal_year::{AccountBalance, FiscalYear};
pub use transaction::Transaction;
pub use verification::{Verification, VerificationSeries};

// Re-export commonly used external types
pub use chrono::NaiveDate;
pub use rust_decimal::Decimal;
