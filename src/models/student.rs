//! Student model

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::{Validate, ValidationError, ValidationErrors};

use super::enums::Gender;
use crate::error::AppError;

/// Stored student record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow, ToSchema)]
pub struct Student {
    /// Assigned by the database on insert
    pub id: Option<i64>,
    pub name: String,
    pub email: String,
    pub gender: Gender,
}

impl Student {
    /// New, not yet persisted student
    pub fn new(name: impl Into<String>, email: impl Into<String>, gender: Gender) -> Self {
        Self {
            id: None,
            name: name.into(),
            email: email.into(),
            gender,
        }
    }

    pub fn with_id(self, id: i64) -> Self {
        Self { id: Some(id), ..self }
    }
}

/// Create / update student request
///
/// Every field is optional at the JSON level so that missing fields are
/// reported as validation messages rather than deserialization failures.
/// An `id` in the body is ignored.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct StudentRequest {
    #[validate(
        required(message = "Name must not be blank"),
        custom(function = "validate_not_blank")
    )]
    pub name: Option<String>,
    #[validate(
        required(message = "Email must not be blank"),
        email(message = "Email must be a well-formed email address")
    )]
    pub email: Option<String>,
    #[validate(required(message = "Gender must be provided"))]
    pub gender: Option<Gender>,
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message(Cow::from("Name must not be blank")));
    }
    Ok(())
}

/// Flatten validation failures into one message per line, ordered by field
pub fn violation_messages(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|(a, _), (b, _)| a.cmp(b));

    fields
        .into_iter()
        .flat_map(|(_, errs)| errs.iter())
        .map(|e| match &e.message {
            Some(msg) => msg.to_string(),
            None => e.code.to_string(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

impl TryFrom<StudentRequest> for Student {
    type Error = AppError;

    fn try_from(request: StudentRequest) -> Result<Self, Self::Error> {
        request
            .validate()
            .map_err(|e| AppError::Validation(violation_messages(&e)))?;

        // validate() has already rejected every missing field
        let (Some(name), Some(email), Some(gender)) = (request.name, request.email, request.gender)
        else {
            return Err(AppError::Validation(
                "Name, email and gender must be provided".to_string(),
            ));
        };

        Ok(Student::new(name, email, gender))
    }
}
