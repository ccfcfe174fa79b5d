use common::decimal::{Amount, dec};
use common::error::Error;
use common::model::customer::Customer;
use common::model::statement::{OperationType, StatementEntry};
use account_service::{CustomerRepository, InMemoryCustomerRepository};

#[tokio::test]
async fn test_insert_and_find_customer() {
    let repo = InMemoryCustomerRepository::new();
    assert!(repo.list_customers().await.unwrap().is_empty());

    let customer = repo
        .insert_customer(Customer::new("Alice".to_string(), "111".to_string()))
        .await
        .unwrap();

    let found = repo.find_by_cpf("111").await.unwrap().unwrap();
    assert_eq!(found, customer);
    assert!(repo.find_by_cpf("999").await.unwrap().is_none());
}

#[tokio::test]
async fn test_insert_rejects_duplicate_cpf() {
    let repo = InMemoryCustomerRepository::new();
    repo.insert_customer(Customer::new("Alice".to_string(), "111".to_string()))
        .await
        .unwrap();

    let result = repo
        .insert_customer(Customer::new("Bob".to_string(), "111".to_string()))
        .await;
    assert!(matches!(result, Err(Error::CustomerAlreadyExists)));

    // The original customer is untouched
    let customers = repo.list_customers().await.unwrap();
    assert_eq!(customers.len(), 1);
    assert_eq!(customers[0].name, "Alice");
}

#[tokio::test]
async fn test_append_entries_keeps_order() {
    let repo = InMemoryCustomerRepository::new();
    repo.insert_customer(Customer::new("Alice".to_string(), "111".to_string()))
        .await
        .unwrap();

    repo.append_entry("111", StatementEntry::credit(Some("salary".into()), dec!(100)))
        .await
        .unwrap();
    repo.append_entry("111", StatementEntry::debit(dec!(40))).await.unwrap();
    repo.append_entry("111", StatementEntry::credit(None, dec!(5))).await.unwrap();

    let customer = repo.find_by_cpf("111").await.unwrap().unwrap();
    let kinds: Vec<OperationType> = customer.statement.iter().map(|e| e.kind).collect();
    assert_eq!(kinds, vec![OperationType::Credit, OperationType::Debit, OperationType::Credit]);
    assert_eq!(customer.balance().unwrap(), dec!(65));
}

#[tokio::test]
async fn test_debit_beyond_balance_is_rejected() {
    let repo = InMemoryCustomerRepository::new();
    repo.insert_customer(Customer::new("Alice".to_string(), "111".to_string()))
        .await
        .unwrap();
    repo.append_entry("111", StatementEntry::credit(None, dec!(10))).await.unwrap();

    let result = repo.append_entry("111", StatementEntry::debit(dec!(10.01))).await;
    assert!(matches!(result, Err(Error::InsufficientFunds)));

    let customer = repo.find_by_cpf("111").await.unwrap().unwrap();
    assert_eq!(customer.statement.len(), 1);
    assert_eq!(customer.balance().unwrap(), dec!(10));
}

#[tokio::test]
async fn test_credit_past_the_decimal_range_is_rejected() {
    let repo = InMemoryCustomerRepository::new();
    repo.insert_customer(Customer::new("Alice".to_string(), "111".to_string()))
        .await
        .unwrap();
    repo.append_entry("111", StatementEntry::credit(None, Amount::MAX)).await.unwrap();

    let result = repo.append_entry("111", StatementEntry::credit(None, dec!(1))).await;
    assert!(matches!(result, Err(Error::BalanceOverflow)));

    // A negative debit raises the balance too, so it is held to the same bound
    let result = repo.append_entry("111", StatementEntry::debit(dec!(-1))).await;
    assert!(matches!(result, Err(Error::BalanceOverflow)));

    let customer = repo.find_by_cpf("111").await.unwrap().unwrap();
    assert_eq!(customer.statement.len(), 1);
    assert_eq!(customer.balance().unwrap(), Amount::MAX);

    // The account stays usable
    repo.append_entry("111", StatementEntry::debit(dec!(1))).await.unwrap();
    let customer = repo.find_by_cpf("111").await.unwrap().unwrap();
    assert_eq!(customer.balance().unwrap(), Amount::MAX - dec!(1));
}

#[tokio::test]
async fn test_operations_on_unknown_cpf() {
    let repo = InMemoryCustomerRepository::new();

    let append = repo.append_entry("404", StatementEntry::credit(None, dec!(1))).await;
    assert!(matches!(append, Err(Error::CustomerNotFound)));

    let update = repo.update_name("404", "Nobody".to_string()).await;
    assert!(matches!(update, Err(Error::CustomerNotFound)));

    let remove = repo.remove_customer("404").await;
    assert!(matches!(remove, Err(Error::CustomerNotFound)));
}

#[tokio::test]
async fn test_update_name_only_touches_name() {
    let repo = InMemoryCustomerRepository::new();
    let original = repo
        .insert_customer(Customer::new("Alice".to_string(), "111".to_string()))
        .await
        .unwrap();
    repo.append_entry("111", StatementEntry::credit(None, dec!(3))).await.unwrap();

    let updated = repo.update_name("111", "Alicia".to_string()).await.unwrap();
    assert_eq!(updated.name, "Alicia");
    assert_eq!(updated.id, original.id);
    assert_eq!(updated.cpf, "111");
    assert_eq!(updated.statement.len(), 1);
}

#[tokio::test]
async fn test_remove_customer_by_position() {
    let repo = InMemoryCustomerRepository::new();
    for (name, cpf) in [("Alice", "111"), ("Bob", "222"), ("Carol", "333")] {
        repo.insert_customer(Customer::new(name.to_string(), cpf.to_string()))
            .await
            .unwrap();
    }

    let remaining = repo.remove_customer("222").await.unwrap();
    let cpfs: Vec<&str> = remaining.iter().map(|c| c.cpf.as_str()).collect();
    assert_eq!(cpfs, vec!["111", "333"]);

    // Removing the last one leaves the first intact as well
    let remaining = repo.remove_customer("333").await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].cpf, "111");
    assert_eq!(remaining[0].balance().unwrap(), Amount::ZERO);
}
