//! Port abstraction for student persistence.

use async_trait::async_trait;

use crate::domain::{NewStudent, PersonDetails, Student, StudentId};

use super::RepositoryError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Insert a student and return the stored row.
    async fn create(&self, student: &NewStudent) -> Result<Student, RepositoryError>;

    /// Fetch every student ordered by identity.
    async fn list(&self) -> Result<Vec<Student>, RepositoryError>;

    async fn find_by_id(&self, id: StudentId) -> Result<Option<Student>, RepositoryError>;

    /// Replace a student's personal details. The display identifier is kept.
    ///
    /// Returns `None` when no row has the given identity.
    async fn update(
        &self,
        id: StudentId,
        person: &PersonDetails,
    ) -> Result<Option<Student>, RepositoryError>;

    /// Delete a student, returning whether a row was removed.
    async fn delete(&self, id: StudentId) -> Result<bool, RepositoryError>;
}
