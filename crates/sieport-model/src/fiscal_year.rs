//! Fiscal years and per-account balances.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{Account, DomainError};

/// Opening and closing balances for one account in one fiscal year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountBalance {
    account: u32,
    incoming: Decimal,
    outgoing: Decimal,
}

impl AccountBalance {
    /// Create a zeroed balance entry for the given account.
    ///
    /// Attaching requires a reference to an account that already lives in
    /// the owning company.
    #[must_use]
    pub fn new(account: &Account) -> Self {
        Self {
            account: account.id(),
            incoming: Decimal::ZERO,
            outgoing: Decimal::ZERO,
        }
    }

    /// Set the incoming (opening) balance.
    #[must_use]
    pub const fn with_incoming(mut self, incoming: Decimal) -> Self {
        self.incoming = incoming;
        self
    }

    /// Set the outgoing (closing) balance.
    #[must_use]
    pub const fn with_outgoing(mut self, outgoing: Decimal) -> Self {
        self.outgoing = outgoing;
        self
    }

    /// The account number the balances belong to.
    #[must_use]
    pub const fn account(&self) -> u32 {
        self.account
    }

    /// The opening balance.
    #[must_use]
    pub const fn incoming(&self) -> Decimal {
        self.incoming
    }

    /// The closing balance.
    #[must_use]
    pub const fn outgoing(&self) -> Decimal {
        self.outgoing
    }
}

/// An accounting period holding opening and closing balances per account.
///
/// One balance entry per account and year. The owning company keeps years
/// in insertion order; put the most recent year first and derive earlier
/// ones with [`FiscalYear::previous_year`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FiscalYear {
    start: NaiveDate,
    end: NaiveDate,
    balances: BTreeMap<u32, AccountBalance>,
}

impl FiscalYear {
    /// Create a fiscal year spanning the given dates.
    #[must_use]
    pub const fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start,
            end,
            balances: BTreeMap::new(),
        }
    }

    /// Create a fiscal year covering one calendar year.
    #[must_use]
    pub fn calendar_year(year: i32) -> Self {
        let start = NaiveDate::from_ymd_opt(year, 1, 1).expect("year out of range");
        let end = NaiveDate::from_ymd_opt(year, 12, 31).expect("year out of range");
        Self::new(start, end)
    }

    /// Derive the fiscal year before this one: the same span shifted back
    /// one year, with no balances.
    #[must_use]
    pub fn previous_year(&self) -> Self {
        Self::new(shift_back_one_year(self.start), shift_back_one_year(self.end))
    }

    /// First day of the fiscal year.
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day of the fiscal year.
    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Add balances for an account.
    ///
    /// Fails if the year already holds balances for that account.
    pub fn add_account_balance(
        &mut self,
        balance: AccountBalance,
    ) -> Result<&mut Self, DomainError> {
        if self.balances.contains_key(&balance.account()) {
            return Err(DomainError::DuplicateBalance(balance.account()));
        }
        self.balances.insert(balance.account(), balance);
        Ok(self)
    }

    /// Look up the balances for an account.
    #[must_use]
    pub fn account_balance(&self, account: u32) -> Option<&AccountBalance> {
        self.balances.get(&account)
    }

    /// All balances, ascending by account number.
    pub fn account_balances(&self) -> impl Iterator<Item = &AccountBalance> {
        self.balances.values()
    }
}

// Feb 29 collapses to Feb 28 in non-leap years.
fn shift_back_one_year(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year() - 1, date.month(), date.day()).unwrap_or_else(|| {
        NaiveDate::from_ymd_opt(date.year() - 1, date.month(), 28).expect("valid fallback date")
    })
}
