//! OpenAPI documentation.
//!
//! [`ApiDoc`] collects every handler's `#[utoipa::path]` and the JSON bodies
//! from [`crate::inbound::http::schemas`]. Swagger UI serves it at `/docs`
//! in debug builds.

use utoipa::OpenApi;

use crate::inbound::http::schemas::{
    CourseBody, CourseOfferingRequest, CourseRequest, CourseResponse, PersonRequest,
    RegisterCourseRequest, RegisterCourseResponse, StudentBody, StudentResponse,
    StudentsResponse, SuccessResponse, TeacherBody, TeacherResponse,
};

/// OpenAPI document for the registrar API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Registrar API",
        description = "Students, teachers, and courses, with transactional course registration. \
            Failures are returned as plain-text messages."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::students::create_student,
        crate::inbound::http::students::list_students,
        crate::inbound::http::students::get_student,
        crate::inbound::http::students::update_student,
        crate::inbound::http::students::delete_student,
        crate::inbound::http::students::register_course,
        crate::inbound::http::teachers::create_teacher,
        crate::inbound::http::teachers::get_teacher,
        crate::inbound::http::teachers::update_teacher,
        crate::inbound::http::teachers::delete_teacher,
        crate::inbound::http::courses::create_course,
        crate::inbound::http::courses::get_course,
        crate::inbound::http::courses::update_course,
        crate::inbound::http::courses::delete_course,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        PersonRequest,
        CourseRequest,
        CourseOfferingRequest,
        RegisterCourseRequest,
        StudentBody,
        TeacherBody,
        CourseBody,
        StudentResponse,
        StudentsResponse,
        TeacherResponse,
        CourseResponse,
        RegisterCourseResponse,
        SuccessResponse,
    )),
    tags(
        (name = "students", description = "Students and course registration"),
        (name = "teachers", description = "Teachers"),
        (name = "courses", description = "Courses and their teachers"),
        (name = "health", description = "Liveness and readiness probes")
    )
)]
pub struct ApiDoc;
