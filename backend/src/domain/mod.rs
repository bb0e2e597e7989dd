//! Domain entities, services, and ports.
//!
//! Purpose: hold the registrar's business rules independent of HTTP and
//! PostgreSQL. Inbound adapters call the driving ports; outbound adapters
//! implement the driven ports.
//!
//! Public surface:
//! - `Error` / `ErrorCode`: transport-agnostic failures.
//! - `Student`, `Teacher`, `Course` and their inputs.
//! - `CourseRegistrationService`: the transactional registration workflow.
//! - `StudentDirectoryService`, `TeacherDirectoryService`,
//!   `CourseCatalogueService`: single-entity CRUD.
//! - `RandomIdentifierGenerator`: pattern-driven student code generation.

pub mod course;
pub mod course_service;
pub mod error;
pub mod identifier;
pub mod person;
pub mod ports;
pub mod registration;
pub mod student;
pub mod student_service;
pub mod teacher;
pub mod teacher_service;
pub mod trace_id;

pub use self::course::{Course, CourseDetails, CourseId, CourseOffering, NewCourse};
pub use self::course_service::CourseCatalogueService;
pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::identifier::{RandomIdentifierGenerator, generate_identifier};
pub use self::person::PersonDetails;
pub use self::registration::{
    CourseRegistrationService, Registration, RegistrationError, RegistrationStage,
};
pub use self::student::{
    NewStudent, STUDENT_CODE_MAX_LENGTH, STUDENT_CODE_PATTERN, Student, StudentId,
};
pub use self::student_service::StudentDirectoryService;
pub use self::teacher::{Teacher, TeacherId};
pub use self::teacher_service::TeacherDirectoryService;
pub use self::trace_id::TraceId;
