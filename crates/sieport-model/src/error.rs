//! Domain errors for the bookkeeping model.

use rust_decimal::Decimal;
use thiserror::Error;

/// A violated model invariant.
///
/// Every operation is fail-fast: the first broken invariant aborts the add
/// or the validation cascade, nothing is accumulated. Adds that fail leave
/// the owning collection untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum DomainError {
    /// An account with this number is already registered on the company.
    #[error("account {0} is already defined")]
    DuplicateAccount(u32),
    /// A dimension with this id is already registered on the company.
    #[error("dimension {0} is already defined")]
    DuplicateDimension(u32),
    /// The dimension already owns an object with this id.
    #[error("object \"{object}\" in dimension {dimension} is already defined")]
    DuplicateObject {
        /// Id of the owning dimension.
        dimension: u32,
        /// The rejected object id.
        object: String,
    },
    /// A verification series with this designation is already registered.
    #[error("verification series \"{0}\" is already defined")]
    DuplicateSeries(String),
    /// The series already holds a numbered verification with this id.
    #[error("verification \"{verification}\" in series \"{series}\" already exists")]
    DuplicateVerification {
        /// The series designation.
        series: String,
        /// The rejected verification id.
        verification: String,
    },
    /// The fiscal year already holds balances for this account.
    #[error("balances for account {0} are already defined")]
    DuplicateBalance(u32),
    /// The transaction already carries an object for this dimension.
    #[error("dimension {0} is already set on this transaction")]
    DuplicateTransactionDimension(u32),
    /// A dimension object was constructed with an empty identifier.
    #[error("object id must not be empty")]
    EmptyObjectId,
    /// The company name was not set before validation.
    #[error("mandatory field company name is not set")]
    MissingCompanyName,
    /// An account was left without a name before validation.
    #[error("account {0} has no name")]
    MissingAccountName(u32),
    /// A numbered verification has no date.
    #[error("verification \"{0}\" has no date")]
    MissingVerificationDate(String),
    /// A numbered verification has no transactions.
    #[error("verification \"{0}\" has no transactions")]
    EmptyVerification(String),
    /// A transaction has no account.
    #[error("transaction has no account")]
    MissingTransactionAccount,
    /// A transaction has no amount.
    #[error("transaction has no amount")]
    MissingTransactionAmount,
    /// The transactions of a verification do not sum to zero.
    #[error("verification \"{verification}\" has a non-zero sum: {sum}")]
    UnbalancedVerification {
        /// The offending verification id.
        verification: String,
        /// The unrounded sum of its transaction amounts.
        sum: Decimal,
    },
}
