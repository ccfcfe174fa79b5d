//! Account service implementation

use std::sync::Arc;

use common::decimal::Amount;
use common::error::{Error, ErrorExt, Result};
use common::model::customer::Customer;
use common::model::statement::StatementEntry;
use tracing::info;

use crate::config::AccountServiceConfig;
use crate::repository::{CustomerRepository, InMemoryCustomerRepository};

/// Account service for managing customers and their statements
pub struct AccountService {
    /// Repository for customer data
    repo: Arc<dyn CustomerRepository>,
    /// Log each recorded statement entry
    transaction_logging: bool,
}

impl Default for AccountService {
    fn default() -> Self {
        Self::new()
    }
}

impl AccountService {
    /// Create a new account service backed by an empty in-memory store
    pub fn new() -> Self {
        Self::with_repository(Arc::new(InMemoryCustomerRepository::new()))
    }

    /// Create a new account service over an existing repository
    pub fn with_repository(repo: Arc<dyn CustomerRepository>) -> Self {
        Self {
            repo,
            transaction_logging: false,
        }
    }

    /// Create a new account service with a configuration
    pub fn with_config(config: &AccountServiceConfig) -> Self {
        Self {
            repo: Arc::new(InMemoryCustomerRepository::new()),
            transaction_logging: config.transaction_logging,
        }
    }

    /// Register a new customer
    pub async fn create_account(&self, name: String, cpf: String) -> Result<Customer> {
        info!("Creating account for cpf {}", cpf);
        self.repo.insert_customer(Customer::new(name, cpf)).await
    }

    /// Find the customer registered under `cpf`, failing when there is none
    pub async fn resolve(&self, cpf: &str) -> Result<Customer> {
        self.repo
            .find_by_cpf(cpf)
            .await
            .with_context(|| format!("Failed to look up customer {}", cpf))?
            .ok_or(Error::CustomerNotFound)
    }

    /// All customers in registration order
    pub async fn list_accounts(&self) -> Result<Vec<Customer>> {
        self.repo.list_customers().await
    }

    /// Record a credit on the customer's statement
    pub async fn deposit(
        &self,
        cpf: &str,
        description: Option<String>,
        amount: Amount,
    ) -> Result<StatementEntry> {
        info!("Depositing {} to cpf {}", amount, cpf);
        let entry = self
            .repo
            .append_entry(cpf, StatementEntry::credit(description, amount))
            .await?;
        self.log_entry(cpf, &entry);
        Ok(entry)
    }

    /// Record a debit on the customer's statement if the balance covers it
    pub async fn withdraw(&self, cpf: &str, amount: Amount) -> Result<StatementEntry> {
        info!("Withdrawing {} from cpf {}", amount, cpf);
        let entry = self
            .repo
            .append_entry(cpf, StatementEntry::debit(amount))
            .await?;
        self.log_entry(cpf, &entry);
        Ok(entry)
    }

    /// Rename the customer
    pub async fn update_account(&self, cpf: &str, name: String) -> Result<Customer> {
        info!("Updating name for cpf {}", cpf);
        self.repo.update_name(cpf, name).await
    }

    /// Remove the customer, returning everyone who remains
    pub async fn delete_account(&self, cpf: &str) -> Result<Vec<Customer>> {
        info!("Deleting account for cpf {}", cpf);
        self.repo.remove_customer(cpf).await
    }

    fn log_entry(&self, cpf: &str, entry: &StatementEntry) {
        if self.transaction_logging {
            info!(
                cpf,
                kind = ?entry.kind,
                amount = %entry.amount,
                created_at = %entry.created_at,
                "Recorded statement entry"
            );
        }
    }
}
