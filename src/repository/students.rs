//! PostgreSQL storage for students

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use super::StudentRepository;
use crate::{
    error::{AppError, AppResult},
    models::Student,
};

const EMAIL_UNIQUE_CONSTRAINT: &str = "student_email_unique";

#[derive(Clone)]
pub struct PgStudentRepository {
    pool: Pool<Postgres>,
}

impl PgStudentRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

/// Turn a lost race on the email constraint into the same error the
/// uniqueness check produces.
fn map_write_error(err: sqlx::Error, email: &str) -> AppError {
    if let sqlx::Error::Database(ref db_err) = err {
        if db_err.constraint() == Some(EMAIL_UNIQUE_CONSTRAINT) {
            return AppError::Validation(format!("Email {} is taken", email));
        }
    }
    AppError::Database(err)
}

#[async_trait]
impl StudentRepository for PgStudentRepository {
    async fn find_all(&self) -> AppResult<Vec<Student>> {
        let rows = sqlx::query_as::<_, Student>(
            "SELECT id, name, email, gender FROM student ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Student>> {
        let row = sqlx::query_as::<_, Student>(
            "SELECT id, name, email, gender FROM student WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn save(&self, student: &Student) -> AppResult<Student> {
        match student.id {
            None => sqlx::query_as::<_, Student>(
                r#"
                INSERT INTO student (name, email, gender)
                VALUES ($1, $2, $3)
                RETURNING id, name, email, gender
                "#,
            )
            .bind(&student.name)
            .bind(&student.email)
            .bind(student.gender)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_write_error(e, &student.email)),
            Some(id) => sqlx::query_as::<_, Student>(
                r#"
                UPDATE student SET name = $2, email = $3, gender = $4
                WHERE id = $1
                RETURNING id, name, email, gender
                "#,
            )
            .bind(id)
            .bind(&student.name)
            .bind(&student.email)
            .bind(student.gender)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_write_error(e, &student.email))?
            .ok_or_else(|| AppError::NotFound(format!("Student with id {} does not exists", id))),
        }
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<()> {
        sqlx::query("DELETE FROM student WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn exists_by_id(&self, id: i64) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM student WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(exists)
    }

    async fn exists_by_email(&self, email: &str) -> AppResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM student WHERE email = $1)")
                .bind(email)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }

    async fn count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM student")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
