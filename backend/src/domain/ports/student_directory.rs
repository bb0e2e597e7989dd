//! Driving port for single-student operations.

use async_trait::async_trait;

use crate::domain::{Error, PersonDetails, Student, StudentId};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StudentDirectory: Send + Sync {
    /// Create a student with a freshly generated display identifier.
    async fn create_student(&self, person: PersonDetails) -> Result<Student, Error>;

    async fn list_students(&self) -> Result<Vec<Student>, Error>;

    async fn get_student(&self, id: StudentId) -> Result<Student, Error>;

    async fn update_student(&self, id: StudentId, person: PersonDetails) -> Result<Student, Error>;

    async fn delete_student(&self, id: StudentId) -> Result<(), Error>;
}
