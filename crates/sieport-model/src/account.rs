//! Ledger accounts.

use serde::{Deserialize, Serialize};

use crate::DomainError;

/// A ledger account, identified by its account number.
///
/// The number is unique within a [`Company`](crate::Company). The name may
/// be missing while the model is being built, but must be set before the
/// owning company validates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    id: u32,
    name: Option<String>,
}

impl Account {
    /// Create an account with the given account number.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self { id, name: None }
    }

    /// Set the account name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The account number.
    #[must_use]
    pub const fn id(&self) -> u32 {
        self.id
    }

    /// The account name, if set.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub(crate) fn validate(&self) -> Result<(), DomainError> {
        if self.name.is_none() {
            return Err(DomainError::MissingAccountName(self.id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_round_trip() {
        let account = Account::new(1511).with_name("Kundfordringar");
        assert_eq!(account.id(), 1511);
        assert_eq!(account.name(), Some("Kundfordringar"));
    }

    #[test]
    fn test_validate_requires_name() {
        let account = Account::new(1511);
        assert_eq!(
            account.validate(),
            Err(DomainError::MissingAccountName(1511))
        );
        assert!(account.with_name("Kundfordringar").validate().is_ok());
    }
}
