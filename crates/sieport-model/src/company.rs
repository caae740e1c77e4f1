//! The root aggregate.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{Account, Dimension, DomainError, FiscalYear, VerificationSeries};

/// Everything that goes into one interchange document.
///
/// The company exclusively owns its accounts, dimensions, verification
/// series and fiscal years. Building is incremental and unchecked:
/// incomplete entities are legal until [`Company::validate`] runs, which
/// enforces the mandatory-field and balance invariants in one fail-fast
/// depth-first pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    name: Option<String>,
    company_number: Option<String>,
    chart_of_accounts: Option<String>,
    accounts: BTreeMap<u32, Account>,
    dimensions: BTreeMap<u32, Dimension>,
    verification_series: Vec<VerificationSeries>,
    fiscal_years: Vec<FiscalYear>,
}

impl Company {
    /// Create an empty company.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the company name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the company registration number, like `555555-5555`.
    #[must_use]
    pub fn with_company_number(mut self, number: impl Into<String>) -> Self {
        self.company_number = Some(number.into());
        self
    }

    /// Set the chart-of-accounts type.
    #[must_use]
    pub fn with_chart_of_accounts(mut self, chart: impl Into<String>) -> Self {
        self.chart_of_accounts = Some(chart.into());
        self
    }

    /// The company name, if set.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The company registration number, if set.
    #[must_use]
    pub fn company_number(&self) -> Option<&str> {
        self.company_number.as_deref()
    }

    /// The chart-of-accounts type, if set.
    #[must_use]
    pub fn chart_of_accounts(&self) -> Option<&str> {
        self.chart_of_accounts.as_deref()
    }

    /// Add an account.
    ///
    /// Fails if the account number is already defined; the existing account
    /// is left untouched.
    pub fn add_account(&mut self, account: Account) -> Result<&mut Self, DomainError> {
        if self.accounts.contains_key(&account.id()) {
            return Err(DomainError::DuplicateAccount(account.id()));
        }
        self.accounts.insert(account.id(), account);
        Ok(self)
    }

    /// Look up an account by number.
    #[must_use]
    pub fn account(&self, id: u32) -> Option<&Account> {
        self.accounts.get(&id)
    }

    /// All accounts, ascending by account number.
    pub fn accounts(&self) -> impl Iterator<Item = &Account> {
        self.accounts.values()
    }

    /// Add a dimension.
    ///
    /// Fails if the dimension id is already defined.
    pub fn add_dimension(&mut self, dimension: Dimension) -> Result<&mut Self, DomainError> {
        if self.dimensions.contains_key(&dimension.id()) {
            return Err(DomainError::DuplicateDimension(dimension.id()));
        }
        self.dimensions.insert(dimension.id(), dimension);
        Ok(self)
    }

    /// Look up a dimension by id.
    #[must_use]
    pub fn dimension(&self, id: u32) -> Option<&Dimension> {
        self.dimensions.get(&id)
    }

    /// Mutable dimension lookup, for registering objects on an owned
    /// dimension.
    #[must_use]
    pub fn dimension_mut(&mut self, id: u32) -> Option<&mut Dimension> {
        self.dimensions.get_mut(&id)
    }

    /// All dimensions, ascending by id.
    pub fn dimensions(&self) -> impl Iterator<Item = &Dimension> {
        self.dimensions.values()
    }

    /// Add a verification series.
    ///
    /// Fails if the designation is already taken.
    pub fn add_verification_series(
        &mut self,
        series: VerificationSeries,
    ) -> Result<&mut Self, DomainError> {
        if self
            .verification_series
            .iter()
            .any(|existing| existing.id() == series.id())
        {
            return Err(DomainError::DuplicateSeries(series.id().to_owned()));
        }
        self.verification_series.push(series);
        Ok(self)
    }

    /// Look up a verification series by designation.
    #[must_use]
    pub fn verification_series(&self, id: &str) -> Option<&VerificationSeries> {
        self.verification_series
            .iter()
            .find(|series| series.id() == id)
    }

    /// Mutable series lookup, for adding verifications to an owned series.
    #[must_use]
    pub fn verification_series_mut(&mut self, id: &str) -> Option<&mut VerificationSeries> {
        self.verification_series
            .iter_mut()
            .find(|series| series.id() == id)
    }

    /// All verification series, in insertion order.
    #[must_use]
    pub fn verification_series_all(&self) -> &[VerificationSeries] {
        &self.verification_series
    }

    /// Append a fiscal year.
    ///
    /// Years keep insertion order; the writer indexes them 0, -1, -2, ...
    /// from the first stored year onwards, so append the most recent year
    /// first.
    pub fn add_fiscal_year(&mut self, fiscal_year: FiscalYear) -> &mut Self {
        self.fiscal_years.push(fiscal_year);
        self
    }

    /// All fiscal years, in insertion order.
    #[must_use]
    pub fn fiscal_years(&self) -> &[FiscalYear] {
        &self.fiscal_years
    }

    /// Validate the whole aggregate.
    ///
    /// The cascade is depth-first and stops at the first violation: company
    /// name present, every account named, then every numbered verification
    /// checked (date set, at least one transaction, account and amount on
    /// each transaction, amounts summing to zero after 2-decimal rounding).
    /// Pre-processing verifications are skipped.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.is_none() {
            return Err(DomainError::MissingCompanyName);
        }
        for account in self.accounts.values() {
            account.validate()?;
        }
        for series in &self.verification_series {
            series.validate()?;
        }
        Ok(())
    }
}
