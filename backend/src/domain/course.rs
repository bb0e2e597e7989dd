//! Course entity and the inputs used to create one.

use super::person::{PersonDetails, define_row_id};
use super::teacher::{Teacher, TeacherId};

define_row_id! {
    /// Store-assigned numeric identity of a course row.
    CourseId
}

/// Course name and schedule. Times are raw client text cast by the store.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CourseDetails {
    pub name: String,
    pub start_time: String,
    pub end_time: String,
}

impl CourseDetails {
    pub fn new(
        name: impl Into<String>,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            start_time: start_time.into(),
            end_time: end_time.into(),
        }
    }
}

/// A course row about to be written, owned by an existing teacher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCourse {
    pub details: CourseDetails,
    pub teacher_id: TeacherId,
}

/// A course offered together with the teacher who will run it.
///
/// Registration always creates the teacher as a new row.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CourseOffering {
    pub details: CourseDetails,
    pub teacher: PersonDetails,
}

/// A stored course with its owning teacher resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub id: CourseId,
    pub name: String,
    pub start_time: String,
    pub end_time: String,
    pub teacher: Teacher,
}

impl Course {
    pub fn from_details(id: CourseId, details: CourseDetails, teacher: Teacher) -> Self {
        Self {
            id,
            name: details.name,
            start_time: details.start_time,
            end_time: details.end_time,
            teacher,
        }
    }
}
