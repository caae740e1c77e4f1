//! Journal entry lines.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{Account, DimensionObject, DomainError};

/// One debit or credit line within a [`Verification`](crate::Verification).
///
/// References exactly one account and carries a signed amount; both are
/// mandatory once the owning company validates. Everything else is
/// optional, and a missing transaction date inherits the verification date
/// on output. At most one dimension object can be attached per dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    account: Option<u32>,
    amount: Option<Decimal>,
    date: Option<NaiveDate>,
    text: Option<String>,
    quantity: Option<Decimal>,
    registration_sign: Option<String>,
    objects: BTreeMap<u32, String>,
}

impl Transaction {
    /// Create an empty transaction.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the account.
    ///
    /// Attaching requires a reference to an account that already lives in
    /// the owning company.
    #[must_use]
    pub fn with_account(mut self, account: &Account) -> Self {
        self.account = Some(account.id());
        self
    }

    /// Set the amount.
    #[must_use]
    pub const fn with_amount(mut self, amount: Decimal) -> Self {
        self.amount = Some(amount);
        self
    }

    /// Set the transaction date.
    #[must_use]
    pub const fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Set the transaction text.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set the quantity.
    #[must_use]
    pub const fn with_quantity(mut self, quantity: Decimal) -> Self {
        self.quantity = Some(quantity);
        self
    }

    /// Set the registration sign.
    #[must_use]
    pub fn with_registration_sign(mut self, sign: impl Into<String>) -> Self {
        self.registration_sign = Some(sign.into());
        self
    }

    /// Attach a dimension object.
    ///
    /// Fails if the transaction already carries an object for the same
    /// dimension.
    pub fn with_object(mut self, object: &DimensionObject) -> Result<Self, DomainError> {
        if self.objects.contains_key(&object.dimension()) {
            return Err(DomainError::DuplicateTransactionDimension(
                object.dimension(),
            ));
        }
        self.objects.insert(object.dimension(), object.id().to_owned());
        Ok(self)
    }

    /// The referenced account number, if set.
    #[must_use]
    pub const fn account(&self) -> Option<u32> {
        self.account
    }

    /// The amount, if set.
    #[must_use]
    pub const fn amount(&self) -> Option<Decimal> {
        self.amount
    }

    /// The transaction date, if set.
    #[must_use]
    pub const fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    /// The transaction text, if set.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// The quantity, if set.
    #[must_use]
    pub const fn quantity(&self) -> Option<Decimal> {
        self.quantity
    }

    /// The registration sign, if set.
    #[must_use]
    pub fn registration_sign(&self) -> Option<&str> {
        self.registration_sign.as_deref()
    }

    /// The object id attached for a dimension, if any.
    #[must_use]
    pub fn object(&self, dimension: u32) -> Option<&str> {
        self.objects.get(&dimension).map(String::as_str)
    }

    /// All attached (dimension id, object id) pairs, ascending by dimension.
    pub fn objects(&self) -> impl Iterator<Item = (u32, &str)> {
        self.objects
            .iter()
            .map(|(dimension, object)| (*dimension, object.as_str()))
    }

    pub(crate) fn validate(&self) -> Result<(), DomainError> {
        if self.account.is_none() {
            return Err(DomainError::MissingTransactionAccount);
        }
        if self.amount.is_none() {
            return Err(DomainError::MissingTransactionAmount);
        }
        Ok(())
    }
}
