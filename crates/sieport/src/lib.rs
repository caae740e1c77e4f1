//! Command line glue around the sieport model and writer crates.
//!
//! The binary imports tab-separated voucher rows through the model's public
//! API, validates the aggregate and writes the interchange bytes. Nothing
//! here touches the writer internals; the pipeline is the plain
//! build -> validate -> encode sequence.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cmd;
pub mod tsv;
