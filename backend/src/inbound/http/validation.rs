//! Request validation for the HTTP adapter.
//!
//! Checks run in a fixed order and the first failure is returned as an
//! `invalid_request` error. A field counts as missing when it is absent or
//! the empty string.

use crate::domain::{CourseDetails, CourseOffering, Error, PersonDetails};

use super::schemas::{CourseRequest, PersonRequest, RegisterCourseRequest};

fn require(value: &str, message: &'static str) -> Result<(), Error> {
    if value.is_empty() {
        return Err(Error::invalid_request(message));
    }
    Ok(())
}

/// Validate a student or teacher body.
pub(crate) fn validate_person(person: PersonRequest) -> Result<PersonDetails, Error> {
    require(&person.first_name, "first name is required")?;
    require(&person.last_name, "last name is required")?;
    Ok(person.into())
}

/// Validate a course body, returning its details and teacher reference.
pub(crate) fn validate_course(course: CourseRequest) -> Result<(CourseDetails, i32), Error> {
    require(&course.name, "course name is required")?;
    let CourseRequest {
        name,
        start_time,
        end_time,
        teacher_id,
    } = course;
    Ok((CourseDetails::new(name, start_time, end_time), teacher_id))
}

/// Validate a registration body.
///
/// Order: student present, student names, course present, course name,
/// teacher present, teacher names.
pub(crate) fn validate_registration(
    request: RegisterCourseRequest,
) -> Result<(PersonDetails, CourseOffering), Error> {
    let student = request
        .student
        .ok_or_else(|| Error::invalid_request("student is required"))?;
    let student = validate_person(student)?;

    let course = request
        .course
        .ok_or_else(|| Error::invalid_request("course is required"))?;
    require(&course.name, "course name is required")?;
    let details = course.details();
    let teacher = course
        .teacher
        .ok_or_else(|| Error::invalid_request("teacher is required"))?;
    let teacher = validate_person(teacher)?;

    Ok((student, CourseOffering { details, teacher }))
}
