//! Account service for managing customers and their statements

pub mod service;
pub mod repository;
pub mod config;

pub use service::AccountService;
pub use repository::{CustomerRepository, InMemoryCustomerRepository};
pub use config::AccountServiceConfig;
