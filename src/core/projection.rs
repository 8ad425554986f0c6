//! Derived list views over fetched records
//!
//! A projection filters a collection and orders what is left; it never
//! mutates its input and the returned `Vec` belongs to the caller. Sorting is
//! stable and each sort key is computed once per record, so records whose
//! keys tie (two unparseable dates, for instance) keep their input order on
//! every call.

use crate::core::date::NormalizedDate;
use crate::core::money::Money;
use crate::core::query::{CropQuery, SortDirection, TaskQuery, TransactionQuery};
use crate::entities::{Crop, Task, Transaction, TransactionType};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::cmp::Reverse;

/// Filter + sort over a slice of records
pub trait ViewProjector<T: Clone> {
    /// View parameters (filters, direction)
    type Query;

    /// Sort key; ascending order of the key is display order
    type Key: Ord;

    /// Whether `record` belongs in the view
    fn matches(&self, record: &T, query: &Self::Query) -> bool;

    fn sort_key(&self, record: &T, query: &Self::Query) -> Self::Key;

    /// Produce the ordered, filtered view
    fn project(&self, records: &[T], query: &Self::Query) -> Vec<T> {
        let mut view: Vec<T> = records
            .iter()
            .filter(|record| self.matches(record, query))
            .cloned()
            .collect();
        view.sort_by_cached_key(|record| self.sort_key(record, query));
        view
    }
}

/// Position of a date within a sorted view.
///
/// Within one sort every valid key uses the same direction; `Invalid` is the
/// greatest key, so unparseable or missing dates always land last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DateKey {
    Ascending(DateTime<Utc>),
    Descending(Reverse<DateTime<Utc>>),
    Invalid,
}

impl DateKey {
    pub fn new(date: NormalizedDate, direction: SortDirection) -> Self {
        match (date, direction) {
            (NormalizedDate::Valid(dt), SortDirection::Ascending) => DateKey::Ascending(dt),
            (NormalizedDate::Valid(dt), SortDirection::Descending) => {
                DateKey::Descending(Reverse(dt))
            }
            (NormalizedDate::Invalid, _) => DateKey::Invalid,
        }
    }
}

/// Task list: pending before completed, then by due date, invalid dates last
#[derive(Debug, Clone, Copy, Default)]
pub struct TaskView;

impl ViewProjector<Task> for TaskView {
    type Query = TaskQuery;
    type Key = (bool, DateKey);

    fn matches(&self, task: &Task, query: &TaskQuery) -> bool {
        query.status.matches(task.completed) && query.priority.matches(task.priority)
    }

    fn sort_key(&self, task: &Task, _query: &TaskQuery) -> Self::Key {
        (task.completed, DateKey::new(task.due(), SortDirection::Ascending))
    }
}

/// Transaction list: by date (most recent first by default), invalid dates last
#[derive(Debug, Clone, Copy, Default)]
pub struct TransactionView;

impl ViewProjector<Transaction> for TransactionView {
    type Query = TransactionQuery;
    type Key = DateKey;

    fn matches(&self, tx: &Transaction, query: &TransactionQuery) -> bool {
        query.kind.matches(tx.kind)
    }

    fn sort_key(&self, tx: &Transaction, query: &TransactionQuery) -> DateKey {
        DateKey::new(tx.normalized_date(), query.direction)
    }
}

/// Crop grid: status filter only, input order kept
#[derive(Debug, Clone, Copy, Default)]
pub struct CropView;

impl ViewProjector<Crop> for CropView {
    type Query = CropQuery;
    type Key = ();

    fn matches(&self, crop: &Crop, query: &CropQuery) -> bool {
        query.status.matches(crop.status)
    }

    fn sort_key(&self, _crop: &Crop, _query: &CropQuery) {}
}

/// Shorthand for `TaskView.project(tasks, query)`
pub fn project_tasks(tasks: &[Task], query: &TaskQuery) -> Vec<Task> {
    TaskView.project(tasks, query)
}

/// Shorthand for `TransactionView.project(transactions, query)`
pub fn project_transactions(transactions: &[Transaction], query: &TransactionQuery) -> Vec<Transaction> {
    TransactionView.project(transactions, query)
}

/// Income, expense and net balance over a set of transactions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TransactionTotals {
    pub income: Money,
    pub expense: Money,
}

impl TransactionTotals {
    pub fn from_transactions<'a, I>(transactions: I) -> Self
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        transactions
            .into_iter()
            .fold(Self::default(), |mut totals, tx| {
                match tx.kind {
                    TransactionType::Income => totals.income += tx.money(),
                    TransactionType::Expense => totals.expense += tx.money(),
                }
                totals
            })
    }

    /// income − expense
    pub fn net(&self) -> Money {
        self.income - self.expense
    }
}
