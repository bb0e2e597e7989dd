//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Concrete implementations of the domain's driven ports, backed by
//! PostgreSQL through `diesel-async` and a `bb8` connection pool.
//!
//! - Repository adapters translate between row structs and domain types and
//!   hold no business rules.
//! - Row structs (`models.rs`) and table definitions (`schema.rs`) stay
//!   private to this module.
//! - Every Diesel failure is mapped onto a port error with the driver's
//!   message kept verbatim.
//!
//! # Example
//!
//! ```ignore
//! use registrar::outbound::persistence::{DbPool, DieselStudentRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/registrar")).await?;
//! let students = DieselStudentRepository::new(pool);
//! ```

mod diesel_course_repository;
mod diesel_error_mapping;
mod diesel_registration_store;
mod diesel_student_repository;
mod diesel_teacher_repository;
mod fixture;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_course_repository::DieselCourseRepository;
pub use diesel_registration_store::{DieselRegistrationStore, DieselRegistrationTransaction};
pub use diesel_student_repository::DieselStudentRepository;
pub use diesel_teacher_repository::DieselTeacherRepository;
pub use fixture::{FixtureError, load_fixture, read_fixture, split_statements};
pub use migrations::{MigrationError, run_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
