//! Verifications (journal entries) and their numbered series.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{DomainError, Transaction};

/// A journal entry: a dated, balanced, ordered list of transactions.
///
/// The id may be empty when the entry comes from a pre-processing system
/// that defers numbering to the receiving system. Such entries skip both
/// the series uniqueness check and the validation cascade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verification {
    id: String,
    date: Option<NaiveDate>,
    text: Option<String>,
    registration_date: Option<NaiveDate>,
    registration_sign: Option<String>,
    transactions: Vec<Transaction>,
}

impl Verification {
    /// Create a verification with the given id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            date: None,
            text: None,
            registration_date: None,
            registration_sign: None,
            transactions: Vec::new(),
        }
    }

    /// Set the verification date.
    #[must_use]
    pub const fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Set the verification text.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set the registration date.
    #[must_use]
    pub const fn with_registration_date(mut self, date: NaiveDate) -> Self {
        self.registration_date = Some(date);
        self
    }

    /// Set the registration sign.
    #[must_use]
    pub fn with_registration_sign(mut self, sign: impl Into<String>) -> Self {
        self.registration_sign = Some(sign.into());
        self
    }

    /// Append a transaction. Transactions keep insertion order.
    #[must_use]
    pub fn with_transaction(mut self, transaction: Transaction) -> Self {
        self.transactions.push(transaction);
        self
    }

    /// The verification id. Empty for pre-processing entries.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Whether numbering is deferred to the receiving system.
    #[must_use]
    pub fn is_preprocessing(&self) -> bool {
        self.id.is_empty()
    }

    /// The verification date, if set.
    #[must_use]
    pub const fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    /// The verification text, if set.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// The registration date, if set.
    #[must_use]
    pub const fn registration_date(&self) -> Option<NaiveDate> {
        self.registration_date
    }

    /// The registration sign, if set.
    #[must_use]
    pub fn registration_sign(&self) -> Option<&str> {
        self.registration_sign.as_deref()
    }

    /// The transactions, in insertion order.
    #[must_use]
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub(crate) fn validate(&self) -> Result<(), DomainError> {
        if self.date.is_none() {
            return Err(DomainError::MissingVerificationDate(self.id.clone()));
        }
        if self.transactions.is_empty() {
            return Err(DomainError::EmptyVerification(self.id.clone()));
        }
        let mut sum = Decimal::ZERO;
        for transaction in &self.transactions {
            transaction.validate()?;
            sum += transaction.amount().unwrap_or_default();
        }
        // Rounding absorbs accumulated sub-cent noise before the zero check.
        if !sum.round_dp(2).is_zero() {
            return Err(DomainError::UnbalancedVerification {
                verification: self.id.clone(),
                sum,
            });
        }
        Ok(())
    }
}

/// A verification series.
///
/// Holds two disjoint collections: numbered verifications, keyed by id with
/// duplicates rejected, and pre-processing entries with an empty id,
/// appended without any uniqueness check. The collections are merged only
/// when enumerating: numbered first, ascending by id, then pre-processing
/// entries in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationSeries {
    id: String,
    numbered: BTreeMap<String, Verification>,
    preprocessing: Vec<Verification>,
}

impl Default for VerificationSeries {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SERIES)
    }
}

impl VerificationSeries {
    /// Series designation used when none is given.
    pub const DEFAULT_SERIES: &'static str = "A";

    /// Create a series with the given designation.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            numbered: BTreeMap::new(),
            preprocessing: Vec::new(),
        }
    }

    /// The series designation.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Add a verification.
    ///
    /// A numbered verification is rejected when its id is already present
    /// in the series; pre-processing entries are always appended.
    pub fn add_verification(
        &mut self,
        verification: Verification,
    ) -> Result<&mut Self, DomainError> {
        if verification.is_preprocessing() {
            self.preprocessing.push(verification);
            return Ok(self);
        }
        if self.numbered.contains_key(verification.id()) {
            return Err(DomainError::DuplicateVerification {
                series: self.id.clone(),
                verification: verification.id().to_owned(),
            });
        }
        self.numbered
            .insert(verification.id().to_owned(), verification);
        Ok(self)
    }

    /// Look up a numbered verification by id.
    #[must_use]
    pub fn verification(&self, id: &str) -> Option<&Verification> {
        self.numbered.get(id)
    }

    /// All verifications: numbered ascending by id (lexicographic), then
    /// pre-processing entries in insertion order.
    pub fn verifications(&self) -> impl Iterator<Item = &Verification> {
        self.numbered.values().chain(self.preprocessing.iter())
    }

    pub(crate) fn validate(&self) -> Result<(), DomainError> {
        // Pre-processing entries are numbered and checked by the receiving
        // system, not here.
        for verification in self.numbered.values() {
            verification.validate()?;
        }
        Ok(())
    }
}
