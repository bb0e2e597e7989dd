//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::test::{self, TestRequest};
use actix_web::{App, web};

use crate::Trace;
use crate::domain::ports::{
    MockCourseCatalogue, MockCourseRegistration, MockStudentDirectory, MockTeacherDirectory,
};
use crate::inbound::http::configure_api;
use crate::inbound::http::state::HttpState;

/// Mock driving ports; any port left at its default panics when called.
#[derive(Default)]
pub struct TestPorts {
    pub registration: MockCourseRegistration,
    pub students: MockStudentDirectory,
    pub teachers: MockTeacherDirectory,
    pub courses: MockCourseCatalogue,
}

impl TestPorts {
    pub fn into_state(self) -> HttpState {
        HttpState::new(
            Arc::new(self.registration),
            Arc::new(self.students),
            Arc::new(self.teachers),
            Arc::new(self.courses),
        )
    }
}

/// Send `request` through the full API and return the status and body text.
pub async fn call(ports: TestPorts, request: TestRequest) -> (StatusCode, String) {
    let app = test::init_service(
        App::new()
            .wrap(Trace)
            .app_data(web::Data::new(ports.into_state()))
            .configure(configure_api),
    )
    .await;
    let response = test::call_service(&app, request.to_request()).await;
    let status = response.status();
    let body = test::read_body(response).await;
    let text = String::from_utf8(body.to_vec()).expect("body is UTF-8");
    (status, text)
}
