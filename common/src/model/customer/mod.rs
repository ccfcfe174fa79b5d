//! Customer model

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::decimal::Amount;
use crate::error::Result;
use crate::model::statement::{self, StatementEntry};
#[cfg(feature = "utoipa")]
use crate::utoipa::ToSchema;

/// A registered customer and their statement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(ToSchema))]
pub struct Customer {
    /// Unique customer ID
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Fiscal identifier, unique across customers
    pub cpf: String,
    /// Credits and debits in the order they were recorded
    pub statement: Vec<StatementEntry>,
}

impl Customer {
    /// Create a customer with a fresh ID and an empty statement
    pub fn new(name: String, cpf: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            cpf,
            statement: Vec::new(),
        }
    }

    /// Current balance, recomputed from the statement
    pub fn balance(&self) -> Result<Amount> {
        statement::balance(&self.statement)
    }
}
