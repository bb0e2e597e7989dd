//! Student HTTP handlers.
//!
//! ```text
//! POST   /students
//! GET    /students
//! GET    /students/student/{id}
//! PUT    /students/student/{id}
//! DELETE /students/student/{id}
//! POST   /students/register-course
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use tracing::info;

use crate::domain::StudentId;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{
    PersonRequest, RegisterCourseRequest, RegisterCourseResponse, StudentBody, StudentResponse,
    StudentsResponse, SuccessResponse,
};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{validate_person, validate_registration};

/// Create a student with a generated six-character `studentID`.
#[utoipa::path(
    post,
    path = "/students",
    request_body = PersonRequest,
    responses(
        (status = 200, description = "Student created", body = StudentResponse),
        (status = 400, description = "Invalid request", body = String, content_type = "text/plain"),
        (status = 500, description = "Store rejected the row", body = String, content_type = "text/plain"),
        (status = 503, description = "Database unavailable", body = String, content_type = "text/plain")
    ),
    tags = ["students"],
    operation_id = "createStudent"
)]
#[post("/students")]
pub async fn create_student(
    state: web::Data<HttpState>,
    payload: web::Json<PersonRequest>,
) -> ApiResult<HttpResponse> {
    let person = validate_person(payload.into_inner())?;
    let student = state.students.create_student(person).await?;
    Ok(HttpResponse::Ok().json(StudentResponse {
        success: true,
        student: student.into(),
    }))
}

/// List every student.
#[utoipa::path(
    get,
    path = "/students",
    responses(
        (status = 200, description = "All students", body = StudentsResponse),
        (status = 503, description = "Database unavailable", body = String, content_type = "text/plain")
    ),
    tags = ["students"],
    operation_id = "listStudents"
)]
#[get("/students")]
pub async fn list_students(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let students = state.students.list_students().await?;
    Ok(HttpResponse::Ok().json(StudentsResponse {
        success: true,
        students: students.into_iter().map(StudentBody::from).collect(),
    }))
}

/// Fetch one student by row id.
#[utoipa::path(
    get,
    path = "/students/student/{id}",
    params(("id" = i32, Path, description = "Student row id")),
    responses(
        (status = 200, description = "Student", body = StudentResponse),
        (status = 400, description = "Invalid id", body = String, content_type = "text/plain"),
        (status = 404, description = "No such student", body = String, content_type = "text/plain")
    ),
    tags = ["students"],
    operation_id = "getStudent"
)]
#[get("/students/student/{id}")]
pub async fn get_student(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    let student = state
        .students
        .get_student(StudentId::new(path.into_inner()))
        .await?;
    Ok(HttpResponse::Ok().json(StudentResponse {
        success: true,
        student: student.into(),
    }))
}

/// Replace a student's names and date of birth. The `studentID` is kept.
#[utoipa::path(
    put,
    path = "/students/student/{id}",
    params(("id" = i32, Path, description = "Student row id")),
    request_body = PersonRequest,
    responses(
        (status = 200, description = "Student updated", body = SuccessResponse),
        (status = 400, description = "Invalid request", body = String, content_type = "text/plain"),
        (status = 404, description = "No such student", body = String, content_type = "text/plain")
    ),
    tags = ["students"],
    operation_id = "updateStudent"
)]
#[put("/students/student/{id}")]
pub async fn update_student(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
    payload: web::Json<PersonRequest>,
) -> ApiResult<HttpResponse> {
    let person = validate_person(payload.into_inner())?;
    state
        .students
        .update_student(StudentId::new(path.into_inner()), person)
        .await?;
    Ok(HttpResponse::Ok().json(SuccessResponse::ok()))
}

/// Delete a student that is not enrolled anywhere.
#[utoipa::path(
    delete,
    path = "/students/student/{id}",
    params(("id" = i32, Path, description = "Student row id")),
    responses(
        (status = 200, description = "Student deleted", body = SuccessResponse),
        (status = 404, description = "No such student", body = String, content_type = "text/plain"),
        (status = 409, description = "Student is still enrolled", body = String, content_type = "text/plain")
    ),
    tags = ["students"],
    operation_id = "deleteStudent"
)]
#[delete("/students/student/{id}")]
pub async fn delete_student(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    state
        .students
        .delete_student(StudentId::new(path.into_inner()))
        .await?;
    Ok(HttpResponse::Ok().json(SuccessResponse::ok()))
}

/// Create a student, a teacher and a course, and enrol the student, in one
/// transaction.
///
/// Nothing is written unless every row is; the first store error is returned
/// as the response body.
#[utoipa::path(
    post,
    path = "/students/register-course",
    request_body = RegisterCourseRequest,
    responses(
        (status = 200, description = "Registration committed", body = RegisterCourseResponse),
        (status = 400, description = "Missing required field", body = String, content_type = "text/plain"),
        (status = 500, description = "Registration rolled back", body = String, content_type = "text/plain"),
        (status = 503, description = "Database unavailable", body = String, content_type = "text/plain")
    ),
    tags = ["students"],
    operation_id = "registerCourse"
)]
#[post("/students/register-course")]
pub async fn register_course(
    state: web::Data<HttpState>,
    payload: web::Json<RegisterCourseRequest>,
) -> ApiResult<HttpResponse> {
    let (student, course) = validate_registration(payload.into_inner())?;
    let registration = state.registration.register_course(student, course).await?;
    info!(
        student_id = %registration.student.id,
        course_id = %registration.course.id,
        "course registration committed"
    );
    Ok(HttpResponse::Ok().json(RegisterCourseResponse {
        success: true,
        course: registration.course.into(),
        student: registration.student.into(),
    }))
}
