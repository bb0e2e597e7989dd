//! Course catalogue service implementing the [`CourseCatalogue`] port.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{CourseCatalogue, CourseRepository};
use crate::domain::{Course, CourseId, Error, NewCourse};

#[derive(Clone)]
pub struct CourseCatalogueService<R: ?Sized> {
    courses: Arc<R>,
}

impl<R: ?Sized> CourseCatalogueService<R> {
    pub fn new(courses: Arc<R>) -> Self {
        Self { courses }
    }
}

fn course_not_found(id: CourseId) -> Error {
    Error::not_found(format!("course {id} not found"))
}

#[async_trait]
impl<R> CourseCatalogue for CourseCatalogueService<R>
where
    R: CourseRepository + ?Sized,
{
    async fn create_course(&self, course: NewCourse) -> Result<Course, Error> {
        Ok(self.courses.create(&course).await?)
    }

    async fn get_course(&self, id: CourseId) -> Result<Course, Error> {
        self.courses
            .find_by_id(id)
            .await?
            .ok_or_else(|| course_not_found(id))
    }

    async fn update_course(&self, id: CourseId, course: NewCourse) -> Result<Course, Error> {
        self.courses
            .update(id, &course)
            .await?
            .ok_or_else(|| course_not_found(id))
    }

    async fn delete_course(&self, id: CourseId) -> Result<(), Error> {
        if self.courses.delete(id).await? {
            Ok(())
        } else {
            Err(course_not_found(id))
        }
    }
}
