//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly. Date columns
//! are read through `sql_query` with `to_char` so rows reach the domain as
//! text; the DSL is used for deletes and the enrollment link.

diesel::table! {
    teachers (id) {
        id -> Int4,
        first_name -> Varchar,
        last_name -> Varchar,
        date_of_birth -> Timestamp,
    }
}

diesel::table! {
    /// `student_id` holds the generated six-character display identifier.
    students (id) {
        id -> Int4,
        student_id -> Varchar,
        first_name -> Varchar,
        last_name -> Varchar,
        date_of_birth -> Timestamp,
    }
}

diesel::table! {
    courses (id) {
        id -> Int4,
        name -> Varchar,
        start_time -> Timestamp,
        end_time -> Timestamp,
        teacher_id -> Int4,
    }
}

diesel::table! {
    /// Enrollment join rows.
    students_courses (student_id, course_id) {
        student_id -> Int4,
        course_id -> Int4,
    }
}

diesel::joinable!(courses -> teachers (teacher_id));
diesel::joinable!(students_courses -> courses (course_id));
diesel::joinable!(students_courses -> students (student_id));

diesel::allow_tables_to_appear_in_same_query!(courses, students, students_courses, teachers);
