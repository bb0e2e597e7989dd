//! HTTP inbound adapter exposing the REST API.
//!
//! Routes are mounted at the root: `/students`, `/teachers`, `/courses`.
//! Handlers depend only on the driving
//! ports in [`state::HttpState`].

use actix_web::web;

pub mod courses;
pub mod error;
pub mod health;
pub mod schemas;
pub mod state;
pub mod students;
pub mod teachers;
#[cfg(test)]
pub(crate) mod test_utils;
pub(crate) mod validation;

pub use error::ApiResult;

/// Register every handler at the root along with the extractor error
/// handlers.
///
/// The caller supplies [`state::HttpState`] as `web::Data`.
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(error::json_error_handler))
        .app_data(web::PathConfig::default().error_handler(error::path_error_handler))
        .service(students::register_course)
        .service(students::create_student)
        .service(students::list_students)
        .service(students::get_student)
        .service(students::update_student)
        .service(students::delete_student)
        .service(teachers::create_teacher)
        .service(teachers::get_teacher)
        .service(teachers::update_teacher)
        .service(teachers::delete_teacher)
        .service(courses::create_course)
        .service(courses::get_course)
        .service(courses::update_course)
        .service(courses::delete_course);
}
