//! Student service

use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::Student,
    repository::StudentRepository,
};

fn not_found(id: i64) -> AppError {
    AppError::NotFound(format!("Student with id {} does not exists", id))
}

#[derive(Clone)]
pub struct StudentsService {
    repository: Arc<dyn StudentRepository>,
}

impl StudentsService {
    pub fn new(repository: Arc<dyn StudentRepository>) -> Self {
        Self { repository }
    }

    pub async fn get_all_students(&self) -> AppResult<Vec<Student>> {
        self.repository.find_all().await
    }

    pub async fn get_student(&self, id: i64) -> AppResult<Student> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Register a new student. The email must not belong to anyone yet.
    pub async fn add_student(&self, candidate: Student) -> AppResult<Student> {
        if self.repository.exists_by_email(&candidate.email).await? {
            return Err(AppError::Validation(format!(
                "Email {} is taken",
                candidate.email
            )));
        }

        let student = self
            .repository
            .save(&Student { id: None, ..candidate })
            .await?;
        tracing::info!(id = ?student.id, email = %student.email, "Student added");
        Ok(student)
    }

    /// Overwrite name, email and gender of an existing student
    pub async fn update_student(&self, id: i64, new_data: Student) -> AppResult<Student> {
        if !self.repository.exists_by_id(id).await? {
            return Err(not_found(id));
        }

        let student = self.repository.save(&new_data.with_id(id)).await?;
        tracing::info!(id, "Student updated");
        Ok(student)
    }

    pub async fn delete_student(&self, id: i64) -> AppResult<()> {
        if !self.repository.exists_by_id(id).await? {
            return Err(not_found(id));
        }

        self.repository.delete_by_id(id).await?;
        tracing::info!(id, "Student deleted");
        Ok(())
    }

    pub async fn count_students(&self) -> AppResult<i64> {
        self.repository.count().await
    }
}
