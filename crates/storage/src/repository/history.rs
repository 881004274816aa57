use sqlx::SqlitePool;

use crate::error::Result;
use crate::models::{DutyType, HistoryRecord};

pub struct HistoryRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> HistoryRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List the history stream for one duty type, newest first. The id
    /// tie-break keeps the order stable when timestamps collide.
    pub async fn list(&self, duty: DutyType) -> Result<Vec<HistoryRecord>> {
        let records = sqlx::query_as::<_, HistoryRecord>(&format!(
            "SELECT id, employee_id, employee_name, date FROM {} ORDER BY date DESC, id DESC",
            duty.history_table()
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::employee::EmployeeRepository;
    use crate::testing::test_pool;

    #[tokio::test]
    async fn test_empty_history_is_not_an_error() {
        let pool = test_pool().await;
        let repo = HistoryRepository::new(&pool);

        assert!(repo.list(DutyType::Breakfast).await.unwrap().is_empty());
        assert!(repo.list(DutyType::Orders).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_returns_newest_first() {
        let pool = test_pool().await;
        let employees = EmployeeRepository::new(&pool);
        let repo = HistoryRepository::new(&pool);

        let a = employees.create("Alice").await.unwrap();
        let b = employees.create("Bob").await.unwrap();

        employees.record_completion(a.id, DutyType::Breakfast).await.unwrap();
        employees.record_completion(b.id, DutyType::Breakfast).await.unwrap();
        employees.record_completion(a.id, DutyType::Breakfast).await.unwrap();

        let history = repo.list(DutyType::Breakfast).await.unwrap();
        assert_eq!(history.len(), 3);
        assert!(history.windows(2).all(|w| w[0].date >= w[1].date));
        // Equal timestamps fall back to id, so repeated reads agree.
        assert!(history.windows(2).all(|w| w[0].id > w[1].id));
    }

    #[tokio::test]
    async fn test_streams_are_independent_with_per_duty_ids() {
        let pool = test_pool().await;
        let employees = EmployeeRepository::new(&pool);
        let repo = HistoryRepository::new(&pool);

        let a = employees.create("Alice").await.unwrap();

        employees.record_completion(a.id, DutyType::Breakfast).await.unwrap();
        employees.record_completion(a.id, DutyType::Breakfast).await.unwrap();
        employees.record_completion(a.id, DutyType::Orders).await.unwrap();

        let breakfast = repo.list(DutyType::Breakfast).await.unwrap();
        let orders = repo.list(DutyType::Orders).await.unwrap();

        assert_eq!(breakfast.len(), 2);
        assert_eq!(orders.len(), 1);
        // Each stream numbers its records from 1.
        assert_eq!(orders[0].id, 1);
        assert_eq!(breakfast.iter().map(|r| r.id).max(), Some(2));
    }
}
