//! Driving port for single-teacher operations.

use async_trait::async_trait;

use crate::domain::{Error, PersonDetails, Teacher, TeacherId};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TeacherDirectory: Send + Sync {
    async fn create_teacher(&self, person: PersonDetails) -> Result<Teacher, Error>;

    async fn get_teacher(&self, id: TeacherId) -> Result<Teacher, Error>;

    async fn update_teacher(&self, id: TeacherId, person: PersonDetails) -> Result<Teacher, Error>;

    async fn delete_teacher(&self, id: TeacherId) -> Result<(), Error>;
}
