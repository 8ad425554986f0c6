//! Dashboard summary: the metric tiles and short lists on the landing page

use crate::backend::Backend;
use crate::config::DashboardConfig;
use crate::core::error::Result;
use crate::core::money::Money;
use crate::core::projection::{TransactionTotals, project_tasks, project_transactions};
use crate::core::query::{PriorityFilter, StatusFilter, TaskQuery, TransactionQuery};
use crate::entities::{Crop, Task, Transaction};
use crate::weather::WeatherReport;
use chrono::{DateTime, Datelike, Utc};
use serde::Serialize;

/// Figures derived from the crop, task and transaction collections
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    /// Crops that are planted or growing
    pub active_crops: usize,
    pub pending_tasks: usize,
    /// Income dated in the current calendar month
    pub month_income: Money,
    /// Expenses dated in the current calendar month
    pub month_expense: Money,
    /// Pending tasks, earliest due first
    pub upcoming_tasks: Vec<Task>,
    /// Newest transactions first
    pub recent_transactions: Vec<Transaction>,
}

impl DashboardSummary {
    /// Compute the summary as of `now`, keeping at most `upcoming` tasks and
    /// `recent` transactions
    pub fn compute(
        crops: &[Crop],
        tasks: &[Task],
        transactions: &[Transaction],
        now: DateTime<Utc>,
        upcoming: usize,
        recent: usize,
    ) -> Self {
        let active_crops = crops.iter().filter(|c| c.status.is_active()).count();
        let pending_tasks = tasks.iter().filter(|t| !t.completed).count();

        let month = TransactionTotals::from_transactions(
            transactions
                .iter()
                .filter(|tx| in_same_month(tx.normalized_date().as_datetime(), now)),
        );

        let mut upcoming_tasks = project_tasks(
            tasks,
            &TaskQuery::new(StatusFilter::Pending, PriorityFilter::All),
        );
        upcoming_tasks.truncate(upcoming);

        let mut recent_transactions = project_transactions(transactions, &TransactionQuery::default());
        recent_transactions.truncate(recent);

        Self {
            active_crops,
            pending_tasks,
            month_income: month.income,
            month_expense: month.expense,
            upcoming_tasks,
            recent_transactions,
        }
    }

    /// Tile text for month income (`$1200`, whole units)
    pub fn month_income_label(&self) -> String {
        format!("${}", self.month_income.whole_units())
    }

    /// Tile text for month expenses
    pub fn month_expense_label(&self) -> String {
        format!("${}", self.month_expense.whole_units())
    }
}

fn in_same_month(date: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
    date.is_some_and(|d| d.year() == now.year() && d.month() == now.month())
}

/// Everything the landing page renders
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSnapshot {
    pub summary: DashboardSummary,
    pub weather: WeatherReport,
}

/// Loads dashboard data from a [`Backend`]
#[derive(Clone)]
pub struct Dashboard {
    backend: Backend,
    config: DashboardConfig,
}

impl Dashboard {
    pub fn new(backend: Backend, config: DashboardConfig) -> Self {
        Self { backend, config }
    }

    pub fn backend(&self) -> &Backend {
        &self.backend
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Load the snapshot as of the current time
    pub async fn load(&self) -> Result<DashboardSnapshot> {
        self.load_at(Utc::now()).await
    }

    /// Fetch all collections concurrently and summarize them as of `now`
    ///
    /// Any failed fetch fails the whole load.
    pub async fn load_at(&self, now: DateTime<Utc>) -> Result<DashboardSnapshot> {
        let (crops, tasks, transactions, weather) = tokio::try_join!(
            self.backend.crops.get_all(),
            self.backend.tasks.get_all(),
            self.backend.transactions.get_all(),
            self.backend.weather.current(Some(self.config.weather.location.as_str())),
        )
        .inspect_err(|e| tracing::warn!(error = %e, code = e.error_code(), "dashboard load failed"))?;

        let limits = &self.config.dashboard;
        let summary = DashboardSummary::compute(
            &crops,
            &tasks,
            &transactions,
            now,
            limits.upcoming_tasks,
            limits.recent_transactions,
        );

        tracing::debug!(
            crops = crops.len(),
            tasks = tasks.len(),
            transactions = transactions.len(),
            pending = summary.pending_tasks,
            "dashboard loaded"
        );

        Ok(DashboardSnapshot { summary, weather })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{CropStatus, Priority, TransactionType};
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 20, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_counts_active_crops_and_pending_tasks() {
        let crops = vec![
            Crop::new(1, "Corn", CropStatus::Planted),
            Crop::new(2, "Beans", CropStatus::Growing),
            Crop::new(3, "Wheat", CropStatus::Ready),
            Crop::new(4, "Oats", CropStatus::Harvested),
        ];
        let tasks = vec![
            Task::new(1, "a", Priority::High, "2024-03-25"),
            Task::new(2, "b", Priority::Low, "2024-03-21").mark_completed(),
            Task::new(3, "c", Priority::Low, None::<&str>),
        ];

        let summary = DashboardSummary::compute(&crops, &tasks, &[], now(), 5, 5);
        assert_eq!(summary.active_crops, 2);
        assert_eq!(summary.pending_tasks, 2);
        let upcoming: Vec<_> = summary.upcoming_tasks.iter().map(|t| t.id).collect();
        assert_eq!(upcoming, vec![1, 3]);
    }

    #[test]
    fn test_month_totals_only_count_current_month() {
        let txs = vec![
            Transaction::new(1, TransactionType::Income, 1200.4, "2024-03-02", "Sales"),
            Transaction::new(2, TransactionType::Expense, 300.0, "2024-03-15", "Seeds"),
            Transaction::new(3, TransactionType::Expense, 999.0, "2024-02-28", "Labor"),
            Transaction::new(4, TransactionType::Expense, 50.0, "2023-03-10", "Labor"),
            Transaction::new(5, TransactionType::Expense, 10.0, "garbage", "Other"),
        ];

        let summary = DashboardSummary::compute(&[], &[], &txs, now(), 5, 5);
        assert_eq!(summary.month_income, Money::from_cents(120_040));
        assert_eq!(summary.month_expense, Money::from_cents(30_000));
        assert_eq!(summary.month_income_label(), "$1200");
        assert_eq!(summary.month_expense_label(), "$300");
    }

    #[test]
    fn test_lists_are_truncated() {
        let tasks: Vec<_> = (1..=8)
            .map(|i| Task::new(i, format!("task {i}"), Priority::Medium, format!("2024-04-{i:02}")))
            .collect();
        let txs: Vec<_> = (1..=8)
            .map(|i| {
                Transaction::new(i, TransactionType::Income, 1.0, format!("2024-01-{i:02}"), "Sales")
            })
            .collect();

        let summary = DashboardSummary::compute(&[], &tasks, &txs, now(), 5, 3);
        let upcoming: Vec<_> = summary.upcoming_tasks.iter().map(|t| t.id).collect();
        let recent: Vec<_> = summary.recent_transactions.iter().map(|t| t.id).collect();
        assert_eq!(upcoming, vec![1, 2, 3, 4, 5]);
        assert_eq!(recent, vec![8, 7, 6]);
    }

    #[test]
    fn test_empty_collections() {
        let summary = DashboardSummary::compute(&[], &[], &[], now(), 5, 5);
        assert_eq!(summary.active_crops, 0);
        assert_eq!(summary.month_income, Money::ZERO);
        assert!(summary.upcoming_tasks.is_empty());
        assert_eq!(summary.month_expense_label(), "$0");
    }
}
