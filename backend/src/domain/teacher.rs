//! Teacher entity.

use super::person::{PersonDetails, define_row_id};

define_row_id! {
    /// Store-assigned numeric identity of a teacher row.
    TeacherId
}

/// A stored teacher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Teacher {
    pub id: TeacherId,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String,
}

impl Teacher {
    pub fn from_details(id: TeacherId, person: PersonDetails) -> Self {
        Self {
            id,
            first_name: person.first_name,
            last_name: person.last_name,
            date_of_birth: person.date_of_birth,
        }
    }
}
