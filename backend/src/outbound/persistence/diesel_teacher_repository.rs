//! PostgreSQL-backed `TeacherRepository` implementation using Diesel.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::sql_types::{Integer, Text};
use diesel_async::RunQueryDsl;

use crate::domain::ports::{RepositoryError, TeacherRepository};
use crate::domain::{PersonDetails, Teacher, TeacherId};

use super::diesel_error_mapping::{map_delete_error, map_diesel_error, map_pool_error};
use super::models::TeacherRow;
use super::pool::DbPool;
use super::schema::teachers;

const INSERT_TEACHER: &str = r#"
INSERT INTO teachers (first_name, last_name, date_of_birth)
VALUES ($1, $2, $3::timestamp)
RETURNING id, first_name, last_name,
    to_char(date_of_birth, 'YYYY-MM-DD"T"HH24:MI:SS"Z"') AS date_of_birth
"#;

const SELECT_TEACHER: &str = r#"
SELECT id, first_name, last_name,
    to_char(date_of_birth, 'YYYY-MM-DD"T"HH24:MI:SS"Z"') AS date_of_birth
FROM teachers
WHERE id = $1
"#;

const UPDATE_TEACHER: &str = r#"
UPDATE teachers
SET first_name = $2, last_name = $3, date_of_birth = $4::timestamp
WHERE id = $1
RETURNING id, first_name, last_name,
    to_char(date_of_birth, 'YYYY-MM-DD"T"HH24:MI:SS"Z"') AS date_of_birth
"#;

/// Diesel-backed implementation of the `TeacherRepository` port.
#[derive(Clone)]
pub struct DieselTeacherRepository {
    pool: DbPool,
}

impl DieselTeacherRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TeacherRepository for DieselTeacherRepository {
    async fn create(&self, person: &PersonDetails) -> Result<Teacher, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: TeacherRow = diesel::sql_query(INSERT_TEACHER)
            .bind::<Text, _>(person.first_name.as_str())
            .bind::<Text, _>(person.last_name.as_str())
            .bind::<Text, _>(person.date_of_birth.as_str())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(row.into())
    }

    async fn find_by_id(&self, id: TeacherId) -> Result<Option<Teacher>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<TeacherRow> = diesel::sql_query(SELECT_TEACHER)
            .bind::<Integer, _>(id.get())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(row.map(Teacher::from))
    }

    async fn update(
        &self,
        id: TeacherId,
        person: &PersonDetails,
    ) -> Result<Option<Teacher>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<TeacherRow> = diesel::sql_query(UPDATE_TEACHER)
            .bind::<Integer, _>(id.get())
            .bind::<Text, _>(person.first_name.as_str())
            .bind::<Text, _>(person.last_name.as_str())
            .bind::<Text, _>(person.date_of_birth.as_str())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(row.map(Teacher::from))
    }

    async fn delete(&self, id: TeacherId) -> Result<bool, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let deleted = diesel::delete(teachers::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(map_delete_error)?;
        Ok(deleted > 0)
    }
}
