//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain. Read rows are loaded with `sql_query`, so
//! every field names its SQL type; timestamps arrive pre-rendered as text.

use diesel::prelude::*;
use diesel::sql_types::{Integer, Text};

use crate::domain::{Course, CourseId, Student, StudentId, Teacher, TeacherId};

use super::schema::students_courses;

/// Identity returned by `INSERT ... RETURNING id`.
#[derive(Debug, QueryableByName)]
pub(crate) struct InsertedIdRow {
    #[diesel(sql_type = Integer)]
    pub id: i32,
}

#[derive(Debug, QueryableByName)]
pub(crate) struct StudentRow {
    #[diesel(sql_type = Integer)]
    pub id: i32,
    #[diesel(sql_type = Text)]
    pub student_id: String,
    #[diesel(sql_type = Text)]
    pub first_name: String,
    #[diesel(sql_type = Text)]
    pub last_name: String,
    #[diesel(sql_type = Text)]
    pub date_of_birth: String,
}

impl From<StudentRow> for Student {
    fn from(row: StudentRow) -> Self {
        Self {
            id: StudentId::new(row.id),
            student_code: row.student_id,
            first_name: row.first_name,
            last_name: row.last_name,
            date_of_birth: row.date_of_birth,
        }
    }
}

#[derive(Debug, QueryableByName)]
pub(crate) struct TeacherRow {
    #[diesel(sql_type = Integer)]
    pub id: i32,
    #[diesel(sql_type = Text)]
    pub first_name: String,
    #[diesel(sql_type = Text)]
    pub last_name: String,
    #[diesel(sql_type = Text)]
    pub date_of_birth: String,
}

impl From<TeacherRow> for Teacher {
    fn from(row: TeacherRow) -> Self {
        Self {
            id: TeacherId::new(row.id),
            first_name: row.first_name,
            last_name: row.last_name,
            date_of_birth: row.date_of_birth,
        }
    }
}

/// A course joined with its owning teacher.
#[derive(Debug, QueryableByName)]
pub(crate) struct CourseWithTeacherRow {
    #[diesel(sql_type = Integer)]
    pub id: i32,
    #[diesel(sql_type = Text)]
    pub name: String,
    #[diesel(sql_type = Text)]
    pub start_time: String,
    #[diesel(sql_type = Text)]
    pub end_time: String,
    #[diesel(sql_type = Integer)]
    pub teacher_id: i32,
    #[diesel(sql_type = Text)]
    pub teacher_first_name: String,
    #[diesel(sql_type = Text)]
    pub teacher_last_name: String,
    #[diesel(sql_type = Text)]
    pub teacher_date_of_birth: String,
}

impl From<CourseWithTeacherRow> for Course {
    fn from(row: CourseWithTeacherRow) -> Self {
        Self {
            id: CourseId::new(row.id),
            name: row.name,
            start_time: row.start_time,
            end_time: row.end_time,
            teacher: Teacher {
                id: TeacherId::new(row.teacher_id),
                first_name: row.teacher_first_name,
                last_name: row.teacher_last_name,
                date_of_birth: row.teacher_date_of_birth,
            },
        }
    }
}

/// Insertable enrollment link.
#[derive(Debug, Clone, Copy, Insertable)]
#[diesel(table_name = students_courses)]
pub(crate) struct NewEnrollmentRow {
    pub student_id: i32,
    pub course_id: i32,
}
