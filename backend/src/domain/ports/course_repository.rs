//! Port abstraction for course persistence. Reads resolve the owning teacher.

use async_trait::async_trait;

use crate::domain::{Course, CourseId, NewCourse};

use super::RepositoryError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// Insert a course and return it joined with its teacher.
    async fn create(&self, course: &NewCourse) -> Result<Course, RepositoryError>;

    async fn find_by_id(&self, id: CourseId) -> Result<Option<Course>, RepositoryError>;

    /// Returns `None` when no row has the given identity.
    async fn update(
        &self,
        id: CourseId,
        course: &NewCourse,
    ) -> Result<Option<Course>, RepositoryError>;

    /// Delete a course, returning whether a row was removed. Courses with
    /// enrolled students fail with [`RepositoryError::Referenced`].
    async fn delete(&self, id: CourseId) -> Result<bool, RepositoryError>;
}
