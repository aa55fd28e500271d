//! Repository layer for database operations

pub mod students;

use async_trait::async_trait;

use crate::{error::AppResult, models::Student};

pub use students::PgStudentRepository;

/// Persistence boundary for student records.
///
/// No business rules live here; the service decides when a write is allowed.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// All students, ordered by id
    async fn find_all(&self) -> AppResult<Vec<Student>>;

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Student>>;

    /// Insert when `student.id` is `None`, otherwise overwrite the row with that id.
    /// Returns the stored row.
    async fn save(&self, student: &Student) -> AppResult<Student>;

    /// Deleting a missing id is a no-op
    async fn delete_by_id(&self, id: i64) -> AppResult<()>;

    async fn exists_by_id(&self, id: i64) -> AppResult<bool>;

    async fn exists_by_email(&self, email: &str) -> AppResult<bool>;

    async fn count(&self) -> AppResult<i64>;
}
