//! Driving port for single-course operations.

use async_trait::async_trait;

use crate::domain::{Course, CourseId, Error, NewCourse};

/// Course operations. Every returned course has its teacher resolved.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CourseCatalogue: Send + Sync {
    /// Create a course owned by an existing teacher.
    async fn create_course(&self, course: NewCourse) -> Result<Course, Error>;

    async fn get_course(&self, id: CourseId) -> Result<Course, Error>;

    async fn update_course(&self, id: CourseId, course: NewCourse) -> Result<Course, Error>;

    async fn delete_course(&self, id: CourseId) -> Result<(), Error>;
}
