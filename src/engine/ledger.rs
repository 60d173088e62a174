use crate::engine::{InputRecord, Transaction, TransactionSnapshot, TransactionType};
use anyhow::Result;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::ops::Bound;

/// Owns every transaction handed to it, ordered by timestamp.
///
/// Entries are keyed by `Transaction::date_time`. Adding a transaction whose
/// timestamp is already present replaces the stored one.
#[derive(Debug, Default)]
pub struct TransactionList {
    transactions: BTreeMap<NaiveDateTime, Box<dyn Transaction>>,
}

impl TransactionList {
    pub fn new() -> Self {
        TransactionList {
            transactions: BTreeMap::new(),
        }
    }

    /// Takes ownership of `tx`. Returns the entry it superseded, if any;
    /// dropping the returned box releases it.
    pub fn add_transaction(
        &mut self,
        tx: impl Into<Box<dyn Transaction>>,
    ) -> Option<Box<dyn Transaction>> {
        let tx = tx.into();
        let key = tx.date_time();
        log::debug!("Adding transaction to list: {tx}");

        let previous = self.transactions.insert(key, tx);
        if let Some(old) = &previous {
            log::warn!("Timestamp collision at {key}, replacing: {old}");
        }
        previous
    }

    /// Converts a raw input record and adds the resulting transaction.
    pub fn add_record(&mut self, record: &InputRecord) -> Result<()> {
        let tx = record.to_transaction()?;
        self.add_transaction(tx);
        Ok(())
    }

    pub fn total_transaction_cost(&self) -> f64 {
        self.transactions
            .values()
            .fold(0.0, |total, tx| total + tx.compute_cost())
    }

    /// The type seen most often. On a tie, the type that reached the
    /// winning count first (walking in timestamp order) wins.
    pub fn frequent_transaction_type(&self) -> Option<TransactionType> {
        let mut counts: HashMap<TransactionType, usize> = HashMap::new();
        let mut best: Option<(TransactionType, usize)> = None;

        for tx in self.transactions.values() {
            let count = counts.entry(tx.kind()).or_insert(0);
            *count += 1;

            match best {
                Some((_, best_count)) if *count <= best_count => {}
                _ => best = Some((tx.kind(), *count)),
            }
        }

        best.map(|(kind, _)| kind)
    }

    /// Every transaction whose timestamp falls on `date`, in timestamp order.
    pub fn transactions_on_a_date(&self, date: NaiveDate) -> Vec<&dyn Transaction> {
        let start = Bound::Included(date.and_time(NaiveTime::MIN));
        let end = match date.succ_opt() {
            Some(next) => Bound::Excluded(next.and_time(NaiveTime::MIN)),
            None => Bound::Unbounded,
        };

        self.transactions
            .range((start, end))
            .map(|(_, tx)| tx.as_ref())
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Transaction> {
        self.transactions.values().map(|tx| tx.as_ref())
    }

    pub fn snapshots(&self) -> impl Iterator<Item = TransactionSnapshot> + '_ {
        self.iter().map(TransactionSnapshot::of)
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

impl fmt::Display for TransactionList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for tx in self.transactions.values() {
            writeln!(f, "{tx}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{Deposit, RecordType, Withdrawal};
    use std::cell::Cell;
    use std::rc::Rc;

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    /// Counts how many times it has been dropped.
    #[derive(Debug)]
    struct Tracked {
        timestamp: NaiveDateTime,
        drops: Rc<Cell<usize>>,
    }

    impl Transaction for Tracked {
        fn kind(&self) -> TransactionType {
            TransactionType::Deposit
        }

        fn date_time(&self) -> NaiveDateTime {
            self.timestamp
        }

        fn amount(&self) -> f64 {
            1.0
        }

        fn compute_cost(&self) -> f64 {
            1.0
        }
    }

    impl fmt::Display for Tracked {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "Tracked {}", self.timestamp)
        }
    }

    impl Drop for Tracked {
        fn drop(&mut self) {
            self.drops.set(self.drops.get() + 1);
        }
    }

    fn tracked(timestamp: NaiveDateTime, drops: &Rc<Cell<usize>>) -> Box<dyn Transaction> {
        Box::new(Tracked {
            timestamp,
            drops: Rc::clone(drops),
        })
    }

    #[test]
    fn test_that_empty_list_has_neutral_aggregates() {
        let list = TransactionList::new();

        assert!(list.is_empty());
        assert_eq!(list.total_transaction_cost(), 0.0);
        assert_eq!(list.frequent_transaction_type(), None);
        assert!(list.transactions_on_a_date(at(1, 0).date()).is_empty());
        assert_eq!(list.to_string(), "");
    }

    #[test]
    fn test_that_total_cost_sums_every_entry() {
        let mut list = TransactionList::new();
        list.add_transaction(Deposit::at(at(1, 9), 100.0, 5.0).unwrap());
        list.add_transaction(Withdrawal::at(at(2, 9), 200.0, 0.02).unwrap());

        assert_eq!(list.len(), 2);
        assert!((list.total_transaction_cost() - 299.0).abs() < 1e-9);
    }

    #[test]
    fn test_that_most_frequent_type_wins() {
        let mut list = TransactionList::new();
        list.add_transaction(Deposit::at(at(1, 9), 10.0, 0.0).unwrap());
        list.add_transaction(Withdrawal::at(at(1, 10), 10.0, 0.0).unwrap());
        list.add_transaction(Deposit::at(at(1, 11), 10.0, 0.0).unwrap());

        assert_eq!(
            list.frequent_transaction_type(),
            Some(TransactionType::Deposit)
        );
    }

    #[test]
    fn test_that_tie_goes_to_first_type_reaching_max() {
        let mut list = TransactionList::new();
        list.add_transaction(Deposit::at(at(1, 9), 10.0, 0.0).unwrap());
        list.add_transaction(Withdrawal::at(at(1, 10), 10.0, 0.0).unwrap());
        list.add_transaction(Withdrawal::at(at(1, 11), 10.0, 0.0).unwrap());
        list.add_transaction(Deposit::at(at(1, 12), 10.0, 0.0).unwrap());

        assert_eq!(
            list.frequent_transaction_type(),
            Some(TransactionType::Withdrawal)
        );
    }

    #[test]
    fn test_that_date_lookup_returns_matches_in_order() {
        let mut list = TransactionList::new();
        list.add_transaction(Deposit::at(at(3, 8), 1.0, 0.0).unwrap());
        list.add_transaction(Withdrawal::at(at(2, 23), 2.0, 0.0).unwrap());
        list.add_transaction(Deposit::at(at(2, 0), 3.0, 0.0).unwrap());
        list.add_transaction(Deposit::at(at(1, 23), 4.0, 0.0).unwrap());
        list.add_transaction(Withdrawal::at(at(4, 0), 5.0, 0.0).unwrap());

        let found = list.transactions_on_a_date(at(2, 0).date());

        assert_eq!(found.len(), 2);
        assert_eq!(found[0].date_time(), at(2, 0));
        assert_eq!(found[1].date_time(), at(2, 23));
        assert!(list.transactions_on_a_date(at(9, 0).date()).is_empty());
    }

    #[test]
    fn test_that_date_lookup_handles_last_representable_day() {
        let last = NaiveDate::MAX.and_hms_opt(12, 0, 0).unwrap();
        let mut list = TransactionList::new();
        list.add_transaction(Deposit::at(last, 1.0, 0.0).unwrap());

        assert_eq!(list.transactions_on_a_date(NaiveDate::MAX).len(), 1);
    }

    #[test]
    fn test_that_display_lists_one_transaction_per_line() {
        let mut list = TransactionList::new();
        list.add_transaction(Withdrawal::at(at(2, 9), 50.0, 0.1).unwrap());
        list.add_transaction(Deposit::at(at(1, 9), 100.0, 5.0).unwrap());

        assert_eq!(
            list.to_string(),
            "Type: Deposit, Date/time: 2024-03-01 09:00:00, Amount: 100, Fee: 5\n\
             Type: Withdrawal, Date/time: 2024-03-02 09:00:00, Amount: 50, Percentage: 0.1\n"
        );
    }

    #[test]
    fn test_that_colliding_timestamp_replaces_and_releases_old_entry() {
        let drops = Rc::new(Cell::new(0));
        let mut list = TransactionList::new();

        assert!(list.add_transaction(tracked(at(1, 9), &drops)).is_none());
        let replaced = list.add_transaction(tracked(at(1, 9), &drops));

        assert_eq!(list.len(), 1);
        assert!(replaced.is_some());
        assert_eq!(drops.get(), 0);

        drop(replaced);
        assert_eq!(drops.get(), 1);
    }

    #[test]
    fn test_that_dropping_list_releases_every_entry_once() {
        let drops = Rc::new(Cell::new(0));
        let mut list = TransactionList::new();
        for day in 1..=4 {
            list.add_transaction(tracked(at(day, 12), &drops));
        }

        drop(list);
        assert_eq!(drops.get(), 4);
    }

    #[test]
    fn test_that_invalid_record_is_not_added() {
        let mut list = TransactionList::new();
        let record = InputRecord {
            typ: RecordType::Deposit,
            amount: -5.0,
            charge: None,
            timestamp: Some("2024-03-01 10:00:00".into()),
        };

        assert!(list.add_record(&record).is_err());
        assert!(list.is_empty());
    }
}
