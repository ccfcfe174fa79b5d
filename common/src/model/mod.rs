//! Domain models for the customer ledger

pub mod customer;
pub mod statement;
