//! Port abstraction for teacher persistence.

use async_trait::async_trait;

use crate::domain::{PersonDetails, Teacher, TeacherId};

use super::RepositoryError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TeacherRepository: Send + Sync {
    async fn create(&self, person: &PersonDetails) -> Result<Teacher, RepositoryError>;

    async fn find_by_id(&self, id: TeacherId) -> Result<Option<Teacher>, RepositoryError>;

    /// Returns `None` when no row has the given identity.
    async fn update(
        &self,
        id: TeacherId,
        person: &PersonDetails,
    ) -> Result<Option<Teacher>, RepositoryError>;

    /// Delete a teacher, returning whether a row was removed. Teachers that
    /// still own courses fail with [`RepositoryError::Referenced`].
    async fn delete(&self, id: TeacherId) -> Result<bool, RepositoryError>;
}
