//! PostgreSQL-backed `RegistrationStore` using an explicit Diesel
//! transaction on an owned pooled connection.
//!
//! The transaction lives as long as the [`DieselRegistrationTransaction`].
//! If one is dropped before `commit` or `rollback` (for example when the
//! request future is cancelled), the connection goes back to the pool with an
//! open transaction; bb8 treats that connection as broken and closes it, and
//! PostgreSQL aborts the transaction on disconnect.

use async_trait::async_trait;
use diesel::sql_types::{Integer, Text};
use diesel_async::pooled_connection::bb8::PooledConnection;
use diesel_async::{AnsiTransactionManager, AsyncPgConnection, RunQueryDsl, TransactionManager};
use tracing::{debug, warn};

use crate::domain::ports::{RegistrationStore, RegistrationStoreError, RegistrationTransaction};
use crate::domain::{CourseId, NewCourse, NewStudent, PersonDetails, StudentId, TeacherId};

use super::diesel_error_mapping::{classify, map_statement_error};
use super::models::{InsertedIdRow, NewEnrollmentRow};
use super::pool::DbPool;
use super::schema::students_courses;

const INSERT_STUDENT: &str = "INSERT INTO students (student_id, first_name, last_name, date_of_birth) \
     VALUES ($1, $2, $3, $4::timestamp) RETURNING id";

const INSERT_TEACHER: &str = "INSERT INTO teachers (first_name, last_name, date_of_birth) \
     VALUES ($1, $2, $3::timestamp) RETURNING id";

const INSERT_COURSE: &str = "INSERT INTO courses (name, start_time, end_time, teacher_id) \
     VALUES ($1, $2::timestamp, $3::timestamp, $4) RETURNING id";

type OwnedConnection = PooledConnection<'static, AsyncPgConnection>;

/// Diesel-backed implementation of the `RegistrationStore` port.
#[derive(Clone)]
pub struct DieselRegistrationStore {
    pool: DbPool,
}

impl DieselRegistrationStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RegistrationStore for DieselRegistrationStore {
    async fn begin(&self) -> Result<Box<dyn RegistrationTransaction>, RegistrationStoreError> {
        let mut conn = self
            .pool
            .get_owned()
            .await
            .map_err(|err| RegistrationStoreError::connection(err.to_string()))?;
        AnsiTransactionManager::begin_transaction(&mut *conn)
            .await
            .map_err(|err| RegistrationStoreError::connection(classify(err).1))?;
        debug!("registration transaction opened");
        Ok(Box::new(DieselRegistrationTransaction { conn }))
    }
}

/// An open registration transaction holding its own connection.
pub struct DieselRegistrationTransaction {
    conn: OwnedConnection,
}

#[async_trait]
impl RegistrationTransaction for DieselRegistrationTransaction {
    async fn insert_student(
        &mut self,
        student: &NewStudent,
    ) -> Result<StudentId, RegistrationStoreError> {
        let row: InsertedIdRow = diesel::sql_query(INSERT_STUDENT)
            .bind::<Text, _>(student.student_code.as_str())
            .bind::<Text, _>(student.person.first_name.as_str())
            .bind::<Text, _>(student.person.last_name.as_str())
            .bind::<Text, _>(student.person.date_of_birth.as_str())
            .get_result(&mut *self.conn)
            .await
            .map_err(map_statement_error)?;
        Ok(StudentId::new(row.id))
    }

    async fn insert_teacher(
        &mut self,
        teacher: &PersonDetails,
    ) -> Result<TeacherId, RegistrationStoreError> {
        let row: InsertedIdRow = diesel::sql_query(INSERT_TEACHER)
            .bind::<Text, _>(teacher.first_name.as_str())
            .bind::<Text, _>(teacher.last_name.as_str())
            .bind::<Text, _>(teacher.date_of_birth.as_str())
            .get_result(&mut *self.conn)
            .await
            .map_err(map_statement_error)?;
        Ok(TeacherId::new(row.id))
    }

    async fn insert_course(
        &mut self,
        course: &NewCourse,
    ) -> Result<CourseId, RegistrationStoreError> {
        let row: InsertedIdRow = diesel::sql_query(INSERT_COURSE)
            .bind::<Text, _>(course.details.name.as_str())
            .bind::<Text, _>(course.details.start_time.as_str())
            .bind::<Text, _>(course.details.end_time.as_str())
            .bind::<Integer, _>(course.teacher_id.get())
            .get_result(&mut *self.conn)
            .await
            .map_err(map_statement_error)?;
        Ok(CourseId::new(row.id))
    }

    async fn link_enrollment(
        &mut self,
        student_id: StudentId,
        course_id: CourseId,
    ) -> Result<(), RegistrationStoreError> {
        diesel::insert_into(students_courses::table)
            .values(NewEnrollmentRow {
                student_id: student_id.get(),
                course_id: course_id.get(),
            })
            .execute(&mut *self.conn)
            .await
            .map_err(map_statement_error)?;
        Ok(())
    }

    async fn commit(self: Box<Self>) -> Result<(), RegistrationStoreError> {
        let mut conn = self.conn;
        let Err(error) = AnsiTransactionManager::commit_transaction(&mut *conn).await else {
            debug!("registration transaction committed");
            return Ok(());
        };
        let (_, message) = classify(error);
        if let Err(rollback_error) = AnsiTransactionManager::rollback_transaction(&mut *conn).await {
            debug!(error = %rollback_error, "rollback after failed commit did not run");
        }
        Err(RegistrationStoreError::commit(message))
    }

    async fn rollback(self: Box<Self>) {
        let mut conn = self.conn;
        match AnsiTransactionManager::rollback_transaction(&mut *conn).await {
            Ok(()) => debug!("registration transaction rolled back"),
            Err(error) => warn!(%error, "registration rollback failed; connection will be discarded"),
        }
    }
}
