//! Data models for the student registry

pub mod enums;
pub mod student;

pub use enums::Gender;
pub use student::{Student, StudentRequest};
