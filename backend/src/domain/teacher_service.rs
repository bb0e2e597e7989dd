//! Teacher directory service implementing the [`TeacherDirectory`] port.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{TeacherDirectory, TeacherRepository};
use crate::domain::{Error, PersonDetails, Teacher, TeacherId};

#[derive(Clone)]
pub struct TeacherDirectoryService<R: ?Sized> {
    teachers: Arc<R>,
}

impl<R: ?Sized> TeacherDirectoryService<R> {
    pub fn new(teachers: Arc<R>) -> Self {
        Self { teachers }
    }
}

fn teacher_not_found(id: TeacherId) -> Error {
    Error::not_found(format!("teacher {id} not found"))
}

#[async_trait]
impl<R> TeacherDirectory for TeacherDirectoryService<R>
where
    R: TeacherRepository + ?Sized,
{
    async fn create_teacher(&self, person: PersonDetails) -> Result<Teacher, Error> {
        Ok(self.teachers.create(&person).await?)
    }

    async fn get_teacher(&self, id: TeacherId) -> Result<Teacher, Error> {
        self.teachers
            .find_by_id(id)
            .await?
            .ok_or_else(|| teacher_not_found(id))
    }

    async fn update_teacher(&self, id: TeacherId, person: PersonDetails) -> Result<Teacher, Error> {
        self.teachers
            .update(id, &person)
            .await?
            .ok_or_else(|| teacher_not_found(id))
    }

    async fn delete_teacher(&self, id: TeacherId) -> Result<(), Error> {
        if self.teachers.delete(id).await? {
            Ok(())
        } else {
            Err(teacher_not_found(id))
        }
    }
}
