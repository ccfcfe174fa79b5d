//! Statement entries and the balance fold

use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::decimal::Amount;
use crate::error::{Error, Result};
#[cfg(feature = "utoipa")]
use crate::utoipa::ToSchema;

/// Direction of a statement entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum OperationType {
    /// Money in
    Credit,
    /// Money out
    Debit,
}

/// A single credit or debit recorded on a customer's statement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(ToSchema))]
pub struct StatementEntry {
    /// Free-text description, only set on credits
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Amount moved by this entry
    #[cfg_attr(feature = "utoipa", schema(value_type = f64))]
    pub amount: Amount,
    /// When the entry was recorded
    pub created_at: DateTime<Utc>,
    /// Credit or debit
    #[serde(rename = "type")]
    pub kind: OperationType,
}

impl StatementEntry {
    /// Create a credit entry stamped with the current time
    pub fn credit(description: Option<String>, amount: Amount) -> Self {
        Self {
            description,
            amount,
            created_at: Utc::now(),
            kind: OperationType::Credit,
        }
    }

    /// Create a debit entry stamped with the current time
    pub fn debit(amount: Amount) -> Self {
        Self {
            description: None,
            amount,
            created_at: Utc::now(),
            kind: OperationType::Debit,
        }
    }

    /// Signed contribution of this entry to the balance
    pub fn signed_amount(&self) -> Amount {
        match self.kind {
            OperationType::Credit => self.amount,
            OperationType::Debit => -self.amount,
        }
    }

    /// Calendar day of `created_at` as seen in `tz`
    pub fn day_in<Tz: TimeZone>(&self, tz: &Tz) -> NaiveDate {
        self.created_at.with_timezone(tz).date_naive()
    }
}

/// Net balance of a statement: credits minus debits, folded left to right.
///
/// Fails with [`Error::BalanceOverflow`] if any running total leaves the
/// representable decimal range.
pub fn balance(statement: &[StatementEntry]) -> Result<Amount> {
    statement
        .iter()
        .try_fold(Amount::ZERO, |acc, entry| apply(acc, entry))
}

/// Balance after adding `entry` to a running total of `acc`
pub fn apply(acc: Amount, entry: &StatementEntry) -> Result<Amount> {
    acc.checked_add(entry.signed_amount())
        .ok_or(Error::BalanceOverflow)
}

/// Entries recorded on `date` in the local time zone, in statement order
pub fn entries_on(statement: &[StatementEntry], date: NaiveDate) -> Vec<StatementEntry> {
    entries_on_in(statement, date, &Local)
}

/// Entries recorded on `date` in time zone `tz`, in statement order
pub fn entries_on_in<Tz: TimeZone>(
    statement: &[StatementEntry],
    date: NaiveDate,
    tz: &Tz,
) -> Vec<StatementEntry> {
    statement
        .iter()
        .filter(|entry| entry.day_in(tz) == date)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decimal::dec;
    use chrono::{Duration, FixedOffset};

    fn entry_at(kind: OperationType, amount: Amount, created_at: DateTime<Utc>) -> StatementEntry {
        StatementEntry {
            description: None,
            amount,
            created_at,
            kind,
        }
    }

    #[test]
    fn test_empty_statement_has_zero_balance() {
        assert_eq!(balance(&[]).unwrap(), Amount::ZERO);
    }

    #[test]
    fn test_balance_is_order_independent() {
        let mut statement = vec![
            StatementEntry::credit(Some("salary".into()), dec!(100)),
            StatementEntry::debit(dec!(30.5)),
            StatementEntry::credit(None, dec!(12.25)),
            StatementEntry::debit(dec!(1.75)),
        ];
        assert_eq!(balance(&statement).unwrap(), dec!(80));

        statement.reverse();
        assert_eq!(balance(&statement).unwrap(), dec!(80));
    }

    #[test]
    fn test_balance_can_go_negative_with_unvalidated_amounts() {
        let statement = vec![StatementEntry::credit(None, dec!(-5))];
        assert_eq!(balance(&statement).unwrap(), dec!(-5));
    }

    #[test]
    fn test_balance_overflow_is_an_error() {
        let statement = vec![
            StatementEntry::credit(None, Amount::MAX),
            StatementEntry::credit(None, dec!(1)),
        ];
        assert!(matches!(balance(&statement), Err(Error::BalanceOverflow)));

        let statement = vec![
            StatementEntry::debit(Amount::MAX),
            StatementEntry::debit(dec!(1)),
        ];
        assert!(matches!(balance(&statement), Err(Error::BalanceOverflow)));
    }

    #[test]
    fn test_apply_checks_running_total() {
        assert_eq!(apply(dec!(10), &StatementEntry::debit(dec!(4))).unwrap(), dec!(6));
        assert!(matches!(
            apply(Amount::MAX, &StatementEntry::credit(None, dec!(0.5))),
            Err(Error::BalanceOverflow)
        ));
    }

    #[test]
    fn test_entries_on_compares_calendar_day() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let morning = Utc.from_utc_datetime(&day.and_hms_opt(0, 5, 0).unwrap());
        let night = Utc.from_utc_datetime(&day.and_hms_opt(23, 59, 0).unwrap());
        let next_day = morning + Duration::days(1);

        let statement = vec![
            entry_at(OperationType::Credit, dec!(10), morning),
            entry_at(OperationType::Credit, dec!(20), next_day),
            entry_at(OperationType::Debit, dec!(5), night),
        ];

        let found = entries_on_in(&statement, day, &Utc);
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].amount, dec!(10));
        assert_eq!(found[1].amount, dec!(5));
    }

    #[test]
    fn test_entries_on_respects_time_zone() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        // 23:30 UTC on the 10th is already the 11th at UTC+3
        let late = Utc.from_utc_datetime(&day.and_hms_opt(23, 30, 0).unwrap());
        let statement = vec![entry_at(OperationType::Credit, dec!(1), late)];

        let plus_three = FixedOffset::east_opt(3 * 3600).unwrap();
        assert!(entries_on_in(&statement, day, &plus_three).is_empty());
        assert_eq!(entries_on_in(&statement, day.succ_opt().unwrap(), &plus_three).len(), 1);
    }

    #[test]
    fn test_entry_json_shape() {
        let entry = StatementEntry::debit(dec!(100));
        let value = serde_json::to_value(&entry).unwrap();

        assert_eq!(value["type"], "debit");
        assert_eq!(value["amount"].as_f64(), Some(100.0));
        assert!(value.get("description").is_none());
        assert!(value.get("created_at").is_some());
    }
}
