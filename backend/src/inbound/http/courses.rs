//! Course HTTP handlers.
//!
//! ```text
//! POST   /courses
//! GET    /courses/course/{id}
//! PUT    /courses/course/{id}
//! DELETE /courses/course/{id}
//! ```
//!
//! Course bodies name an existing teacher by `teacherID`; responses embed the
//! full teacher.

use actix_web::{HttpResponse, delete, get, post, put, web};

use crate::domain::{CourseId, NewCourse, TeacherId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{CourseRequest, CourseResponse, SuccessResponse};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::validate_course;

fn new_course(payload: CourseRequest) -> ApiResult<NewCourse> {
    let (details, teacher_id) = validate_course(payload)?;
    Ok(NewCourse {
        details,
        teacher_id: TeacherId::new(teacher_id),
    })
}

#[utoipa::path(
    post,
    path = "/courses",
    request_body = CourseRequest,
    responses(
        (status = 200, description = "Course created", body = CourseResponse),
        (status = 400, description = "Invalid request", body = String, content_type = "text/plain"),
        (status = 500, description = "Unknown teacher or bad dates", body = String, content_type = "text/plain")
    ),
    tags = ["courses"],
    operation_id = "createCourse"
)]
#[post("/courses")]
pub async fn create_course(
    state: web::Data<HttpState>,
    payload: web::Json<CourseRequest>,
) -> ApiResult<HttpResponse> {
    let course = state
        .courses
        .create_course(new_course(payload.into_inner())?)
        .await?;
    Ok(HttpResponse::Ok().json(CourseResponse {
        success: true,
        course: course.into(),
    }))
}

#[utoipa::path(
    get,
    path = "/courses/course/{id}",
    params(("id" = i32, Path, description = "Course row id")),
    responses(
        (status = 200, description = "Course with its teacher", body = CourseResponse),
        (status = 404, description = "No such course", body = String, content_type = "text/plain")
    ),
    tags = ["courses"],
    operation_id = "getCourse"
)]
#[get("/courses/course/{id}")]
pub async fn get_course(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    let course = state
        .courses
        .get_course(CourseId::new(path.into_inner()))
        .await?;
    Ok(HttpResponse::Ok().json(CourseResponse {
        success: true,
        course: course.into(),
    }))
}

#[utoipa::path(
    put,
    path = "/courses/course/{id}",
    params(("id" = i32, Path, description = "Course row id")),
    request_body = CourseRequest,
    responses(
        (status = 200, description = "Course updated", body = SuccessResponse),
        (status = 400, description = "Invalid request", body = String, content_type = "text/plain"),
        (status = 404, description = "No such course", body = String, content_type = "text/plain")
    ),
    tags = ["courses"],
    operation_id = "updateCourse"
)]
#[put("/courses/course/{id}")]
pub async fn update_course(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
    payload: web::Json<CourseRequest>,
) -> ApiResult<HttpResponse> {
    let course = new_course(payload.into_inner())?;
    state
        .courses
        .update_course(CourseId::new(path.into_inner()), course)
        .await?;
    Ok(HttpResponse::Ok().json(SuccessResponse::ok()))
}

#[utoipa::path(
    delete,
    path = "/courses/course/{id}",
    params(("id" = i32, Path, description = "Course row id")),
    responses(
        (status = 200, description = "Course deleted", body = SuccessResponse),
        (status = 404, description = "No such course", body = String, content_type = "text/plain"),
        (status = 409, description = "Students are enrolled", body = String, content_type = "text/plain")
    ),
    tags = ["courses"],
    operation_id = "deleteCourse"
)]
#[delete("/courses/course/{id}")]
pub async fn delete_course(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    state
        .courses
        .delete_course(CourseId::new(path.into_inner()))
        .await?;
    Ok(HttpResponse::Ok().json(SuccessResponse::ok()))
}
