//! Driving port for registering a new student on a new course.

use async_trait::async_trait;

use crate::domain::{CourseOffering, Error, PersonDetails, Registration};

/// Inbound contract for the registration workflow.
///
/// One call creates a student, a teacher, a course, and the enrollment that
/// joins them, all inside a single transaction. Calls are not idempotent:
/// repeating identical input creates new rows each time.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CourseRegistration: Send + Sync {
    /// Register `student` on `course`.
    ///
    /// # Errors
    ///
    /// Returns an error when identifier generation fails, no transaction can
    /// be opened, any statement is rejected, or the commit fails. Nothing is
    /// persisted in any of these cases.
    async fn register_course(
        &self,
        student: PersonDetails,
        course: CourseOffering,
    ) -> Result<Registration, Error>;
}
