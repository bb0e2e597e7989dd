//! Course registration workflow.
//!
//! Registering a student on a course runs, in order: generate the student's
//! display identifier, open a transaction, insert the student, insert the
//! teacher, insert the course, link the enrollment, commit. The first
//! failure ends the workflow. Every failure after the transaction opens is
//! followed by a rollback, and the caller receives the original error with no
//! partial result. Nothing is retried.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::domain::ports::{
    CourseRegistration, IdentifierGenerator, IdentifierPatternError, RegistrationStore,
    RegistrationStoreError, RegistrationTransaction,
};
use crate::domain::{
    Course, CourseId, CourseOffering, Error, NewCourse, NewStudent, PersonDetails,
    STUDENT_CODE_MAX_LENGTH, STUDENT_CODE_PATTERN, Student, StudentId, Teacher, TeacherId,
};

/// The rows created by one successful registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub student: Student,
    pub course: Course,
}

/// Failure of a registration, carrying the first error unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistrationError {
    /// The identifier pattern was rejected; the store was never touched.
    #[error(transparent)]
    Pattern(#[from] IdentifierPatternError),
    /// The store failed to open, write, or commit.
    #[error(transparent)]
    Store(#[from] RegistrationStoreError),
}

impl From<RegistrationError> for Error {
    fn from(error: RegistrationError) -> Self {
        match &error {
            RegistrationError::Store(RegistrationStoreError::Connection { .. }) => {
                Error::service_unavailable(error.to_string())
            }
            RegistrationError::Pattern(_) | RegistrationError::Store(_) => {
                Error::internal(error.to_string())
            }
        }
    }
}

/// Progress markers of the workflow, used in logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationStage {
    Start,
    IdentifierGenerated,
    TransactionOpen,
    StudentInserted,
    TeacherInserted,
    CourseInserted,
    EnrollmentLinked,
    Committed,
}

impl fmt::Display for RegistrationStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Start => "start",
            Self::IdentifierGenerated => "identifier_generated",
            Self::TransactionOpen => "transaction_open",
            Self::StudentInserted => "student_inserted",
            Self::TeacherInserted => "teacher_inserted",
            Self::CourseInserted => "course_inserted",
            Self::EnrollmentLinked => "enrollment_linked",
            Self::Committed => "committed",
        };
        f.write_str(name)
    }
}

struct InsertedIds {
    student: StudentId,
    teacher: TeacherId,
    course: CourseId,
}

/// Coordinates the registration transaction.
///
/// Stateless between calls; concurrent registrations each hold their own
/// transaction.
#[derive(Clone)]
pub struct CourseRegistrationService<S: ?Sized, G: ?Sized> {
    store: Arc<S>,
    identifiers: Arc<G>,
}

impl<S: ?Sized, G: ?Sized> CourseRegistrationService<S, G> {
    pub fn new(store: Arc<S>, identifiers: Arc<G>) -> Self {
        Self { store, identifiers }
    }
}

impl<S, G> CourseRegistrationService<S, G>
where
    S: RegistrationStore + ?Sized,
    G: IdentifierGenerator + ?Sized,
{
    /// Run the registration workflow.
    ///
    /// # Errors
    ///
    /// Returns the first [`RegistrationError`] raised. When it is a
    /// [`RegistrationError::Pattern`] no transaction was opened.
    pub async fn register(
        &self,
        student: PersonDetails,
        course: CourseOffering,
    ) -> Result<Registration, RegistrationError> {
        let student_code = self
            .identifiers
            .generate(STUDENT_CODE_PATTERN, STUDENT_CODE_MAX_LENGTH)
            .inspect_err(|error| log_failure(RegistrationStage::Start, error))?;
        debug!(stage = %RegistrationStage::IdentifierGenerated, %student_code, "registration progressed");

        let mut tx = self
            .store
            .begin()
            .await
            .inspect_err(|error| log_failure(RegistrationStage::IdentifierGenerated, error))?;
        debug!(stage = %RegistrationStage::TransactionOpen, "registration progressed");

        let new_student = NewStudent {
            student_code,
            person: student,
        };
        let ids = match write_rows(tx.as_mut(), &new_student, &course).await {
            Ok(ids) => ids,
            Err((stage, error)) => {
                log_failure(stage, &error);
                tx.rollback().await;
                return Err(error.into());
            }
        };

        tx.commit()
            .await
            .inspect_err(|error| log_failure(RegistrationStage::EnrollmentLinked, error))?;
        debug!(stage = %RegistrationStage::Committed, student_id = %ids.student, course_id = %ids.course, "registration progressed");

        let CourseOffering { details, teacher } = course;
        let teacher = Teacher::from_details(ids.teacher, teacher);
        Ok(Registration {
            student: Student::from_new(ids.student, new_student),
            course: Course::from_details(ids.course, details, teacher),
        })
    }
}

/// Issue the four inserts in order, reporting the last stage reached on
/// failure.
async fn write_rows(
    tx: &mut dyn RegistrationTransaction,
    student: &NewStudent,
    course: &CourseOffering,
) -> Result<InsertedIds, (RegistrationStage, RegistrationStoreError)> {
    let student_id = tx
        .insert_student(student)
        .await
        .map_err(|error| (RegistrationStage::TransactionOpen, error))?;
    debug!(stage = %RegistrationStage::StudentInserted, %student_id, "registration progressed");

    let teacher_id = tx
        .insert_teacher(&course.teacher)
        .await
        .map_err(|error| (RegistrationStage::StudentInserted, error))?;
    debug!(stage = %RegistrationStage::TeacherInserted, %teacher_id, "registration progressed");

    let new_course = NewCourse {
        details: course.details.clone(),
        teacher_id,
    };
    let course_id = tx
        .insert_course(&new_course)
        .await
        .map_err(|error| (RegistrationStage::TeacherInserted, error))?;
    debug!(stage = %RegistrationStage::CourseInserted, %course_id, "registration progressed");

    tx.link_enrollment(student_id, course_id)
        .await
        .map_err(|error| (RegistrationStage::CourseInserted, error))?;
    debug!(stage = %RegistrationStage::EnrollmentLinked, "registration progressed");

    Ok(InsertedIds {
        student: student_id,
        teacher: teacher_id,
        course: course_id,
    })
}

fn log_failure(reached: RegistrationStage, error: &dyn std::error::Error) {
    warn!(reached = %reached, error = %error, "registration failed");
}

#[async_trait]
impl<S, G> CourseRegistration for CourseRegistrationService<S, G>
where
    S: RegistrationStore + ?Sized,
    G: IdentifierGenerator + ?Sized,
{
    async fn register_course(
        &self,
        student: PersonDetails,
        course: CourseOffering,
    ) -> Result<Registration, Error> {
        self.register(student, course).await.map_err(Error::from)
    }
}
