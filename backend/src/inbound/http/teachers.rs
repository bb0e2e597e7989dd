//! Teacher HTTP handlers.
//!
//! ```text
//! POST   /teachers
//! GET    /teachers/teacher/{id}
//! PUT    /teachers/teacher/{id}
//! DELETE /teachers/teacher/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};

use crate::domain::TeacherId;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{PersonRequest, SuccessResponse, TeacherResponse};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::validate_person;

#[utoipa::path(
    post,
    path = "/teachers",
    request_body = PersonRequest,
    responses(
        (status = 200, description = "Teacher created", body = TeacherResponse),
        (status = 400, description = "Invalid request", body = String, content_type = "text/plain"),
        (status = 500, description = "Store rejected the row", body = String, content_type = "text/plain")
    ),
    tags = ["teachers"],
    operation_id = "createTeacher"
)]
#[post("/teachers")]
pub async fn create_teacher(
    state: web::Data<HttpState>,
    payload: web::Json<PersonRequest>,
) -> ApiResult<HttpResponse> {
    let person = validate_person(payload.into_inner())?;
    let teacher = state.teachers.create_teacher(person).await?;
    Ok(HttpResponse::Ok().json(TeacherResponse {
        success: true,
        teacher: teacher.into(),
    }))
}

#[utoipa::path(
    get,
    path = "/teachers/teacher/{id}",
    params(("id" = i32, Path, description = "Teacher row id")),
    responses(
        (status = 200, description = "Teacher", body = TeacherResponse),
        (status = 404, description = "No such teacher", body = String, content_type = "text/plain")
    ),
    tags = ["teachers"],
    operation_id = "getTeacher"
)]
#[get("/teachers/teacher/{id}")]
pub async fn get_teacher(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    let teacher = state
        .teachers
        .get_teacher(TeacherId::new(path.into_inner()))
        .await?;
    Ok(HttpResponse::Ok().json(TeacherResponse {
        success: true,
        teacher: teacher.into(),
    }))
}

#[utoipa::path(
    put,
    path = "/teachers/teacher/{id}",
    params(("id" = i32, Path, description = "Teacher row id")),
    request_body = PersonRequest,
    responses(
        (status = 200, description = "Teacher updated", body = SuccessResponse),
        (status = 400, description = "Invalid request", body = String, content_type = "text/plain"),
        (status = 404, description = "No such teacher", body = String, content_type = "text/plain")
    ),
    tags = ["teachers"],
    operation_id = "updateTeacher"
)]
#[put("/teachers/teacher/{id}")]
pub async fn update_teacher(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
    payload: web::Json<PersonRequest>,
) -> ApiResult<HttpResponse> {
    let person = validate_person(payload.into_inner())?;
    state
        .teachers
        .update_teacher(TeacherId::new(path.into_inner()), person)
        .await?;
    Ok(HttpResponse::Ok().json(SuccessResponse::ok()))
}

/// Delete a teacher. Fails with 409 while any course still names them.
#[utoipa::path(
    delete,
    path = "/teachers/teacher/{id}",
    params(("id" = i32, Path, description = "Teacher row id")),
    responses(
        (status = 200, description = "Teacher deleted", body = SuccessResponse),
        (status = 404, description = "No such teacher", body = String, content_type = "text/plain"),
        (status = 409, description = "Teacher still runs a course", body = String, content_type = "text/plain")
    ),
    tags = ["teachers"],
    operation_id = "deleteTeacher"
)]
#[delete("/teachers/teacher/{id}")]
pub async fn delete_teacher(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    state
        .teachers
        .delete_teacher(TeacherId::new(path.into_inner()))
        .await?;
    Ok(HttpResponse::Ok().json(SuccessResponse::ok()))
}
