//! PostgreSQL-backed `CourseRepository` implementation using Diesel.
//!
//! Writes use a data-modifying CTE so the written row comes back joined with
//! its teacher in one round trip.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::sql_types::{Integer, Text};
use diesel_async::RunQueryDsl;

use crate::domain::ports::{CourseRepository, RepositoryError};
use crate::domain::{Course, CourseId, NewCourse};

use super::diesel_error_mapping::{map_delete_error, map_diesel_error, map_pool_error};
use super::models::CourseWithTeacherRow;
use super::pool::DbPool;
use super::schema::courses;

const INSERT_COURSE: &str = r#"
WITH c AS (
    INSERT INTO courses (name, start_time, end_time, teacher_id)
    VALUES ($1, $2::timestamp, $3::timestamp, $4)
    RETURNING *
)
SELECT c.id, c.name,
    to_char(c.start_time, 'YYYY-MM-DD"T"HH24:MI:SS"Z"') AS start_time,
    to_char(c.end_time, 'YYYY-MM-DD"T"HH24:MI:SS"Z"') AS end_time,
    t.id AS teacher_id,
    t.first_name AS teacher_first_name,
    t.last_name AS teacher_last_name,
    to_char(t.date_of_birth, 'YYYY-MM-DD"T"HH24:MI:SS"Z"') AS teacher_date_of_birth
FROM c
JOIN teachers t ON t.id = c.teacher_id
"#;

const SELECT_COURSE: &str = r#"
SELECT c.id, c.name,
    to_char(c.start_time, 'YYYY-MM-DD"T"HH24:MI:SS"Z"') AS start_time,
    to_char(c.end_time, 'YYYY-MM-DD"T"HH24:MI:SS"Z"') AS end_time,
    t.id AS teacher_id,
    t.first_name AS teacher_first_name,
    t.last_name AS teacher_last_name,
    to_char(t.date_of_birth, 'YYYY-MM-DD"T"HH24:MI:SS"Z"') AS teacher_date_of_birth
FROM courses c
JOIN teachers t ON t.id = c.teacher_id
WHERE c.id = $1
"#;

const UPDATE_COURSE: &str = r#"
WITH c AS (
    UPDATE courses
    SET name = $2, start_time = $3::timestamp, end_time = $4::timestamp, teacher_id = $5
    WHERE id = $1
    RETURNING *
)
SELECT c.id, c.name,
    to_char(c.start_time, 'YYYY-MM-DD"T"HH24:MI:SS"Z"') AS start_time,
    to_char(c.end_time, 'YYYY-MM-DD"T"HH24:MI:SS"Z"') AS end_time,
    t.id AS teacher_id,
    t.first_name AS teacher_first_name,
    t.last_name AS teacher_last_name,
    to_char(t.date_of_birth, 'YYYY-MM-DD"T"HH24:MI:SS"Z"') AS teacher_date_of_birth
FROM c
JOIN teachers t ON t.id = c.teacher_id
"#;

/// Diesel-backed implementation of the `CourseRepository` port.
#[derive(Clone)]
pub struct DieselCourseRepository {
    pool: DbPool,
}

impl DieselCourseRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CourseRepository for DieselCourseRepository {
    async fn create(&self, course: &NewCourse) -> Result<Course, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: CourseWithTeacherRow = diesel::sql_query(INSERT_COURSE)
            .bind::<Text, _>(course.details.name.as_str())
            .bind::<Text, _>(course.details.start_time.as_str())
            .bind::<Text, _>(course.details.end_time.as_str())
            .bind::<Integer, _>(course.teacher_id.get())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(row.into())
    }

    async fn find_by_id(&self, id: CourseId) -> Result<Option<Course>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<CourseWithTeacherRow> = diesel::sql_query(SELECT_COURSE)
            .bind::<Integer, _>(id.get())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(row.map(Course::from))
    }

    async fn update(
        &self,
        id: CourseId,
        course: &NewCourse,
    ) -> Result<Option<Course>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<CourseWithTeacherRow> = diesel::sql_query(UPDATE_COURSE)
            .bind::<Integer, _>(id.get())
            .bind::<Text, _>(course.details.name.as_str())
            .bind::<Text, _>(course.details.start_time.as_str())
            .bind::<Text, _>(course.details.end_time.as_str())
            .bind::<Integer, _>(course.teacher_id.get())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(row.map(Course::from))
    }

    async fn delete(&self, id: CourseId) -> Result<bool, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let deleted = diesel::delete(courses::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(map_delete_error)?;
        Ok(deleted > 0)
    }
}
