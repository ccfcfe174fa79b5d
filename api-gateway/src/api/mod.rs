//! API handlers
//!
//! This module contains all the API endpoint handlers organized by resource.
//! Each guarded handler follows the same pattern:
//! - Resolve the customer from the `cpf` header with [`guard::resolve_customer`]
//! - Decode the body leniently with [`body::parse_body`] where there is one
//! - Call the appropriate service method
//! - Map the result to a JSON body and status code

pub mod account;
pub mod body;
pub mod guard;
pub mod statement;

pub use guard::{resolve_customer, CPF_HEADER};
