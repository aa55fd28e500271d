//! Business logic services

pub mod students;

use std::sync::Arc;

use crate::repository::StudentRepository;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub students: students::StudentsService,
}

impl Services {
    pub fn new(student_repository: Arc<dyn StudentRepository>) -> Self {
        Self {
            students: students::StudentsService::new(student_repository),
        }
    }
}
