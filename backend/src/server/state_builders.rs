//! Wiring of Diesel adapters into the domain services behind `HttpState`.

use std::sync::Arc;

use actix_web::web;

use registrar::domain::{
    CourseCatalogueService, CourseRegistrationService, RandomIdentifierGenerator,
    StudentDirectoryService, TeacherDirectoryService,
};
use registrar::inbound::http::state::HttpState;
use registrar::outbound::persistence::{
    DbPool, DieselCourseRepository, DieselRegistrationStore, DieselStudentRepository,
    DieselTeacherRepository,
};

/// Build the handler state over one shared pool.
///
/// Services and adapters are created once; each request clones the `Arc`s.
pub(super) fn build_http_state(pool: &DbPool) -> web::Data<HttpState> {
    let identifiers = Arc::new(RandomIdentifierGenerator);

    let registration = CourseRegistrationService::new(
        Arc::new(DieselRegistrationStore::new(pool.clone())),
        Arc::clone(&identifiers),
    );
    let students = StudentDirectoryService::new(
        Arc::new(DieselStudentRepository::new(pool.clone())),
        identifiers,
    );
    let teachers = TeacherDirectoryService::new(Arc::new(DieselTeacherRepository::new(pool.clone())));
    let courses = CourseCatalogueService::new(Arc::new(DieselCourseRepository::new(pool.clone())));

    web::Data::new(HttpState::new(
        Arc::new(registration),
        Arc::new(students),
        Arc::new(teachers),
        Arc::new(courses),
    ))
}
