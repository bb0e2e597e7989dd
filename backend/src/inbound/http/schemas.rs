//! JSON request and response bodies shared by the HTTP handlers.
//!
//! Field names follow the public API: camelCase, except the identifier
//! fields `studentID` and `teacherID`. Missing string fields decode as empty
//! strings; required ones are rejected by [`super::validation`].

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Course, CourseDetails, PersonDetails, Student, Teacher};

/// Name and date of birth of a student or teacher.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonRequest {
    pub first_name: String,
    pub last_name: String,
    /// Any date text PostgreSQL accepts as a `timestamp`.
    pub date_of_birth: String,
}

impl From<PersonRequest> for PersonDetails {
    fn from(value: PersonRequest) -> Self {
        PersonDetails::new(value.first_name, value.last_name, value.date_of_birth)
    }
}

/// Body of `POST /courses` and `PUT /courses/course/{id}`.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct CourseRequest {
    pub name: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(rename = "teacherID")]
    pub teacher_id: i32,
}

/// Course section of a registration request; the teacher is created inline.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct CourseOfferingRequest {
    pub name: String,
    pub start_time: String,
    pub end_time: String,
    pub teacher: Option<PersonRequest>,
}

impl CourseOfferingRequest {
    pub(crate) fn details(&self) -> CourseDetails {
        CourseDetails::new(&self.name, &self.start_time, &self.end_time)
    }
}

/// Body of `POST /students/register-course`.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(default)]
pub struct RegisterCourseRequest {
    pub student: Option<PersonRequest>,
    pub course: Option<CourseOfferingRequest>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentBody {
    pub id: i32,
    #[serde(rename = "studentID")]
    pub student_id: String,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String,
}

impl From<Student> for StudentBody {
    fn from(value: Student) -> Self {
        Self {
            id: value.id.get(),
            student_id: value.student_code,
            first_name: value.first_name,
            last_name: value.last_name,
            date_of_birth: value.date_of_birth,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeacherBody {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String,
}

impl From<Teacher> for TeacherBody {
    fn from(value: Teacher) -> Self {
        Self {
            id: value.id.get(),
            first_name: value.first_name,
            last_name: value.last_name,
            date_of_birth: value.date_of_birth,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseBody {
    pub id: i32,
    pub name: String,
    pub start_time: String,
    pub end_time: String,
    pub teacher: TeacherBody,
}

impl From<Course> for CourseBody {
    fn from(value: Course) -> Self {
        Self {
            id: value.id.get(),
            name: value.name,
            start_time: value.start_time,
            end_time: value.end_time,
            teacher: value.teacher.into(),
        }
    }
}

/// `{"success": true}` acknowledgement for updates and deletes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub(crate) fn ok() -> Self {
        Self { success: true }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct StudentResponse {
    pub success: bool,
    pub student: StudentBody,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct StudentsResponse {
    pub success: bool,
    pub students: Vec<StudentBody>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct TeacherResponse {
    pub success: bool,
    pub teacher: TeacherBody,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct CourseResponse {
    pub success: bool,
    pub course: CourseBody,
}

/// Result of a successful registration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct RegisterCourseResponse {
    pub success: bool,
    pub course: CourseBody,
    pub student: StudentBody,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{StudentId, TeacherId};
    use rstest::rstest;
    use serde_json::{Value, json};

    #[rstest]
    fn missing_person_fields_decode_as_empty() {
        let person: PersonRequest =
            serde_json::from_value(json!({ "firstName": "Ada" })).expect("decodes");

        assert_eq!(person.first_name, "Ada");
        assert_eq!(person.last_name, "");
        assert_eq!(person.date_of_birth, "");
    }

    #[rstest]
    fn course_request_reads_teacher_id_field() {
        let course: CourseRequest = serde_json::from_value(json!({
            "name": "Logic",
            "startTime": "2024-09-01",
            "endTime": "2024-12-20",
            "teacherID": 7
        }))
        .expect("decodes");

        assert_eq!(course.teacher_id, 7);
        assert_eq!(course.start_time, "2024-09-01");
    }

    #[rstest]
    fn student_body_uses_student_id_field() {
        let body = StudentBody::from(Student {
            id: StudentId::new(3),
            student_code: "AB12CD".into(),
            first_name: "Grace".into(),
            last_name: "Hopper".into(),
            date_of_birth: "1906-12-09T00:00:00Z".into(),
        });

        let value = serde_json::to_value(body).expect("encodes");

        assert_eq!(value["studentID"], Value::from("AB12CD"));
        assert_eq!(value["dateOfBirth"], Value::from("1906-12-09T00:00:00Z"));
        assert_eq!(value["id"], Value::from(3));
    }

    #[rstest]
    fn teacher_body_is_camel_case() {
        let body = TeacherBody::from(Teacher {
            id: TeacherId::new(5),
            first_name: "Alan".into(),
            last_name: "Turing".into(),
            date_of_birth: "1912-06-23T00:00:00Z".into(),
        });

        let value = serde_json::to_value(body).expect("encodes");

        assert_eq!(value["firstName"], Value::from("Alan"));
        assert_eq!(value["lastName"], Value::from("Turing"));
    }
}
