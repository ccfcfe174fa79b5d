//! Repository for customer data

use async_trait::async_trait;
use common::error::{Error, Result};
use common::model::customer::Customer;
use common::model::statement::{self, OperationType, StatementEntry};
use tokio::sync::RwLock;
use tracing::debug;

/// Customer repository trait defining the interface for customer storage.
///
/// Every mutating method is a single atomic step: implementations must not
/// let another writer observe or interleave with a half-applied change.
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Store a new customer, rejecting a fiscal identifier already in use
    async fn insert_customer(&self, customer: Customer) -> Result<Customer>;

    /// Find a customer by fiscal identifier
    async fn find_by_cpf(&self, cpf: &str) -> Result<Option<Customer>>;

    /// All customers in registration order
    async fn list_customers(&self) -> Result<Vec<Customer>>;

    /// Overwrite a customer's name
    async fn update_name(&self, cpf: &str, name: String) -> Result<Customer>;

    /// Append an entry to a customer's statement.
    ///
    /// Debits are rejected with [`Error::InsufficientFunds`] when the amount
    /// exceeds the balance at the moment of the append. Any entry that would
    /// push the balance out of range is rejected with
    /// [`Error::BalanceOverflow`].
    async fn append_entry(&self, cpf: &str, entry: StatementEntry) -> Result<StatementEntry>;

    /// Remove a customer, returning the customers that remain
    async fn remove_customer(&self, cpf: &str) -> Result<Vec<Customer>>;
}

/// In-memory repository for customer data
#[derive(Default)]
pub struct InMemoryCustomerRepository {
    /// Customers in registration order
    customers: RwLock<Vec<Customer>>,
}

impl InMemoryCustomerRepository {
    /// Create a new, empty in-memory customer repository
    pub fn new() -> Self {
        Self::default()
    }

    fn position(customers: &[Customer], cpf: &str) -> Result<usize> {
        customers
            .iter()
            .position(|c| c.cpf == cpf)
            .ok_or(Error::CustomerNotFound)
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn insert_customer(&self, customer: Customer) -> Result<Customer> {
        let mut customers = self.customers.write().await;

        if customers.iter().any(|c| c.cpf == customer.cpf) {
            return Err(Error::CustomerAlreadyExists);
        }

        customers.push(customer.clone());
        Ok(customer)
    }

    async fn find_by_cpf(&self, cpf: &str) -> Result<Option<Customer>> {
        debug!("Looking up customer by cpf {}", cpf);
        let customers = self.customers.read().await;
        Ok(customers.iter().find(|c| c.cpf == cpf).cloned())
    }

    async fn list_customers(&self) -> Result<Vec<Customer>> {
        Ok(self.customers.read().await.clone())
    }

    async fn update_name(&self, cpf: &str, name: String) -> Result<Customer> {
        let mut customers = self.customers.write().await;
        let index = Self::position(&customers, cpf)?;

        let customer = &mut customers[index];
        customer.name = name;
        Ok(customer.clone())
    }

    async fn append_entry(&self, cpf: &str, entry: StatementEntry) -> Result<StatementEntry> {
        let mut customers = self.customers.write().await;
        let index = Self::position(&customers, cpf)?;
        let customer = &mut customers[index];

        let current = customer.balance()?;
        if entry.kind == OperationType::Debit && entry.amount > current {
            return Err(Error::InsufficientFunds);
        }
        statement::apply(current, &entry)?;

        customer.statement.push(entry.clone());
        Ok(entry)
    }

    async fn remove_customer(&self, cpf: &str) -> Result<Vec<Customer>> {
        let mut customers = self.customers.write().await;
        let index = Self::position(&customers, cpf)?;

        customers.remove(index);
        Ok(customers.clone())
    }
}
