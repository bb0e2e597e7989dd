//! PostgreSQL-backed `StudentRepository` implementation using Diesel.
//!
//! Dates are bound as text and cast with `::timestamp`, so PostgreSQL
//! decides which inputs are valid dates. Reads render them as
//! `YYYY-MM-DDTHH:MM:SSZ`.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::sql_types::{Integer, Text};
use diesel_async::RunQueryDsl;

use crate::domain::ports::{RepositoryError, StudentRepository};
use crate::domain::{NewStudent, PersonDetails, Student, StudentId};

use super::diesel_error_mapping::{map_delete_error, map_diesel_error, map_pool_error};
use super::models::StudentRow;
use super::pool::DbPool;
use super::schema::students;

const INSERT_STUDENT: &str = r#"
INSERT INTO students (student_id, first_name, last_name, date_of_birth)
VALUES ($1, $2, $3, $4::timestamp)
RETURNING id, student_id, first_name, last_name,
    to_char(date_of_birth, 'YYYY-MM-DD"T"HH24:MI:SS"Z"') AS date_of_birth
"#;

const SELECT_STUDENTS: &str = r#"
SELECT id, student_id, first_name, last_name,
    to_char(date_of_birth, 'YYYY-MM-DD"T"HH24:MI:SS"Z"') AS date_of_birth
FROM students
ORDER BY id
"#;

const SELECT_STUDENT: &str = r#"
SELECT id, student_id, first_name, last_name,
    to_char(date_of_birth, 'YYYY-MM-DD"T"HH24:MI:SS"Z"') AS date_of_birth
FROM students
WHERE id = $1
"#;

const UPDATE_STUDENT: &str = r#"
UPDATE students
SET first_name = $2, last_name = $3, date_of_birth = $4::timestamp
WHERE id = $1
RETURNING id, student_id, first_name, last_name,
    to_char(date_of_birth, 'YYYY-MM-DD"T"HH24:MI:SS"Z"') AS date_of_birth
"#;

/// Diesel-backed implementation of the `StudentRepository` port.
#[derive(Clone)]
pub struct DieselStudentRepository {
    pool: DbPool,
}

impl DieselStudentRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StudentRepository for DieselStudentRepository {
    async fn create(&self, student: &NewStudent) -> Result<Student, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: StudentRow = diesel::sql_query(INSERT_STUDENT)
            .bind::<Text, _>(student.student_code.as_str())
            .bind::<Text, _>(student.person.first_name.as_str())
            .bind::<Text, _>(student.person.last_name.as_str())
            .bind::<Text, _>(student.person.date_of_birth.as_str())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(row.into())
    }

    async fn list(&self) -> Result<Vec<Student>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<StudentRow> = diesel::sql_query(SELECT_STUDENTS)
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(Student::from).collect())
    }

    async fn find_by_id(&self, id: StudentId) -> Result<Option<Student>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<StudentRow> = diesel::sql_query(SELECT_STUDENT)
            .bind::<Integer, _>(id.get())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(row.map(Student::from))
    }

    async fn update(
        &self,
        id: StudentId,
        person: &PersonDetails,
    ) -> Result<Option<Student>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<StudentRow> = diesel::sql_query(UPDATE_STUDENT)
            .bind::<Integer, _>(id.get())
            .bind::<Text, _>(person.first_name.as_str())
            .bind::<Text, _>(person.last_name.as_str())
            .bind::<Text, _>(person.date_of_birth.as_str())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(row.map(Student::from))
    }

    async fn delete(&self, id: StudentId) -> Result<bool, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let deleted = diesel::delete(students::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(map_delete_error)?;
        Ok(deleted > 0)
    }
}
