//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driving ports (`CourseRegistration`, `StudentDirectory`,
//! `TeacherDirectory`, `CourseCatalogue`) are called by inbound adapters.
//! Driven ports (`IdentifierGenerator`, `RegistrationStore` and the entity
//! repositories) are implemented by outbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod course_catalogue;
mod course_registration;
mod course_repository;
mod identifier_generator;
mod registration_store;
mod repository_error;
mod student_directory;
mod student_repository;
mod teacher_directory;
mod teacher_repository;

pub use course_catalogue::CourseCatalogue;
#[cfg(test)]
pub use course_catalogue::MockCourseCatalogue;
pub use course_registration::CourseRegistration;
#[cfg(test)]
pub use course_registration::MockCourseRegistration;
pub use course_repository::CourseRepository;
#[cfg(test)]
pub use course_repository::MockCourseRepository;
#[cfg(test)]
pub use identifier_generator::MockIdentifierGenerator;
pub use identifier_generator::{IdentifierGenerator, IdentifierPatternError};
pub use registration_store::{RegistrationStore, RegistrationStoreError, RegistrationTransaction};
pub use repository_error::RepositoryError;
#[cfg(test)]
pub use student_directory::MockStudentDirectory;
pub use student_directory::StudentDirectory;
#[cfg(test)]
pub use student_repository::MockStudentRepository;
pub use student_repository::StudentRepository;
#[cfg(test)]
pub use teacher_directory::MockTeacherDirectory;
pub use teacher_directory::TeacherDirectory;
#[cfg(test)]
pub use teacher_repository::MockTeacherRepository;
pub use teacher_repository::TeacherRepository;
