//! Driven port for the transactional writes behind course registration.
//!
//! A [`RegistrationStore`] opens one [`RegistrationTransaction`] per
//! registration. The transaction is consumed by `commit` or `rollback`, so a
//! finished transaction cannot be used again. Dropping an unfinished
//! transaction must discard its work; the Diesel adapter does this by
//! abandoning the connection so the server rolls back.

use async_trait::async_trait;

use crate::domain::{CourseId, NewCourse, NewStudent, PersonDetails, StudentId, TeacherId};

use super::define_port_error;

define_port_error! {
    /// Failures raised by registration store adapters.
    ///
    /// Messages carry the driver's text verbatim.
    pub enum RegistrationStoreError {
        /// No transaction could be opened.
        Connection { message: String } => "{message}",
        /// The store rejected a statement inside the transaction.
        ConstraintViolation { message: String } => "{message}",
        /// The commit itself failed; nothing was persisted.
        Commit { message: String } => "{message}",
    }
}

/// Opens registration transactions.
#[async_trait]
pub trait RegistrationStore: Send + Sync {
    /// Begin a new transaction on a dedicated connection.
    async fn begin(&self) -> Result<Box<dyn RegistrationTransaction>, RegistrationStoreError>;
}

/// An open transaction. Statements run in call order.
#[async_trait]
pub trait RegistrationTransaction: Send {
    async fn insert_student(
        &mut self,
        student: &NewStudent,
    ) -> Result<StudentId, RegistrationStoreError>;

    async fn insert_teacher(
        &mut self,
        teacher: &PersonDetails,
    ) -> Result<TeacherId, RegistrationStoreError>;

    async fn insert_course(&mut self, course: &NewCourse) -> Result<CourseId, RegistrationStoreError>;

    /// Insert the `students_courses` row joining a student to a course.
    async fn link_enrollment(
        &mut self,
        student_id: StudentId,
        course_id: CourseId,
    ) -> Result<(), RegistrationStoreError>;

    /// Commit the transaction. On failure the adapter has already attempted
    /// a rollback.
    async fn commit(self: Box<Self>) -> Result<(), RegistrationStoreError>;

    /// Roll the transaction back. Best effort: failures are logged by the
    /// adapter, never returned.
    async fn rollback(self: Box<Self>);
}
