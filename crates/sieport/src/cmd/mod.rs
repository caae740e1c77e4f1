//! Command implementations for the sieport binary.

pub mod export;
