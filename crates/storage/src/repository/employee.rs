use chrono::Utc;
use sqlx::SqlitePool;

use crate::error::{Result, StorageError};
use crate::models::{DutyType, Employee};

const EMPLOYEE_COLUMNS: &str = "id, name, breakfast_last_turn_date, breakfast_turn_count, \
     orders_last_turn_date, orders_turn_count, is_active, created_at";

pub struct EmployeeRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> EmployeeRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all employees, active and inactive, ordered by id.
    pub async fn list(&self) -> Result<Vec<Employee>> {
        let employees = sqlx::query_as::<_, Employee>(&format!(
            "SELECT {EMPLOYEE_COLUMNS} FROM employees ORDER BY id"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(employees)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Employee> {
        let employee = sqlx::query_as::<_, Employee>(&format!(
            "SELECT {EMPLOYEE_COLUMNS} FROM employees WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(employee)
    }

    /// Create an employee with zeroed turn state for every duty type.
    pub async fn create(&self, name: &str) -> Result<Employee> {
        let created_at = Utc::now();

        let id = sqlx::query("INSERT INTO employees (name, created_at) VALUES (?, ?)")
            .bind(name)
            .bind(created_at)
            .execute(self.pool)
            .await?
            .last_insert_rowid();

        self.find_by_id(id).await
    }

    /// Change the display name. History records keep the name snapshot
    /// taken when they were written.
    pub async fn rename(&self, id: i64, name: &str) -> Result<Employee> {
        let result = sqlx::query("UPDATE employees SET name = ? WHERE id = ?")
            .bind(name)
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        self.find_by_id(id).await
    }

    /// Toggle rotation membership. Turn counters are untouched, so a
    /// reactivated employee resumes with their prior fairness state.
    pub async fn set_active(&self, id: i64, is_active: bool) -> Result<Employee> {
        let result = sqlx::query("UPDATE employees SET is_active = ? WHERE id = ?")
            .bind(is_active)
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        self.find_by_id(id).await
    }

    /// Delete an employee. History records cascade for every duty type.
    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM employees WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }

    /// Record a completed turn: stamp `last_turn_date`, increment
    /// `turn_count`, and append a history record carrying the employee's
    /// current name and the same timestamp. One transaction; on any
    /// failure (including an unknown id) nothing is applied.
    ///
    /// The `UPDATE` runs first so the transaction takes the write lock
    /// with its opening statement. Starting with a read would hold a
    /// shared lock that cannot be upgraded while other writers wait,
    /// making concurrent completions fail busy instead of queueing.
    ///
    /// Active status is not a precondition: completions may be recorded
    /// for deactivated employees.
    pub async fn record_completion(&self, id: i64, duty: DutyType) -> Result<Employee> {
        let mut tx = self.pool.begin().await?;

        let now = Utc::now();
        let (date_column, count_column) = duty.turn_columns();

        let result = sqlx::query(&format!(
            "UPDATE employees SET {date_column} = ?, {count_column} = {count_column} + 1 \
             WHERE id = ?"
        ))
        .bind(now)
        .bind(id)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        let name: String = sqlx::query_scalar("SELECT name FROM employees WHERE id = ?")
            .bind(id)
            .fetch_one(&mut *tx)
            .await?;

        sqlx::query(&format!(
            "INSERT INTO {} (employee_id, employee_name, date) VALUES (?, ?, ?)",
            duty.history_table()
        ))
        .bind(id)
        .bind(&name)
        .bind(now)
        .execute(&mut *tx)
        .await?;

        let employee = sqlx::query_as::<_, Employee>(&format!(
            "SELECT {EMPLOYEE_COLUMNS} FROM employees WHERE id = ?"
        ))
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(employee)
    }
}
