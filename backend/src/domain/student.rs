//! Student entity.

use super::person::{PersonDetails, define_row_id};

define_row_id! {
    /// Store-assigned numeric identity of a student row.
    StudentId
}

/// Pattern every generated student display identifier matches.
pub const STUDENT_CODE_PATTERN: &str = "[A-Z0-9]{6}";

/// Upper bound on the length of a student display identifier.
///
/// Matches the `VARCHAR(6)` column that stores it.
pub const STUDENT_CODE_MAX_LENGTH: usize = 6;

/// A student about to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStudent {
    /// Generated display identifier, exposed to clients as `studentID`.
    pub student_code: String,
    pub person: PersonDetails,
}

/// A stored student.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub id: StudentId,
    pub student_code: String,
    pub first_name: String,
    pub last_name: String,
    /// Rendered as `YYYY-MM-DDTHH:MM:SSZ`.
    pub date_of_birth: String,
}

impl Student {
    /// Assemble a stored student from an inserted row id and its input.
    ///
    /// Used when the stored form is not read back; the date keeps the text
    /// the client supplied.
    pub fn from_new(id: StudentId, new: NewStudent) -> Self {
        let NewStudent {
            student_code,
            person,
        } = new;
        Self {
            id,
            student_code,
            first_name: person.first_name,
            last_name: person.last_name,
            date_of_birth: person.date_of_birth,
        }
    }
}
