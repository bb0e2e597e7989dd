//! Student directory service implementing the [`StudentDirectory`] port.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{IdentifierGenerator, StudentDirectory, StudentRepository};
use crate::domain::{
    Error, NewStudent, PersonDetails, STUDENT_CODE_MAX_LENGTH, STUDENT_CODE_PATTERN, Student,
    StudentId,
};

#[derive(Clone)]
pub struct StudentDirectoryService<R: ?Sized, G: ?Sized> {
    students: Arc<R>,
    identifiers: Arc<G>,
}

impl<R: ?Sized, G: ?Sized> StudentDirectoryService<R, G> {
    pub fn new(students: Arc<R>, identifiers: Arc<G>) -> Self {
        Self {
            students,
            identifiers,
        }
    }
}

fn student_not_found(id: StudentId) -> Error {
    Error::not_found(format!("student {id} not found"))
}

#[async_trait]
impl<R, G> StudentDirectory for StudentDirectoryService<R, G>
where
    R: StudentRepository + ?Sized,
    G: IdentifierGenerator + ?Sized,
{
    async fn create_student(&self, person: PersonDetails) -> Result<Student, Error> {
        let student_code = self
            .identifiers
            .generate(STUDENT_CODE_PATTERN, STUDENT_CODE_MAX_LENGTH)
            .map_err(|err| Error::internal(err.to_string()))?;
        let student = NewStudent {
            student_code,
            person,
        };
        Ok(self.students.create(&student).await?)
    }

    async fn list_students(&self) -> Result<Vec<Student>, Error> {
        Ok(self.students.list().await?)
    }

    async fn get_student(&self, id: StudentId) -> Result<Student, Error> {
        self.students
            .find_by_id(id)
            .await?
            .ok_or_else(|| student_not_found(id))
    }

    async fn update_student(&self, id: StudentId, person: PersonDetails) -> Result<Student, Error> {
        self.students
            .update(id, &person)
            .await?
            .ok_or_else(|| student_not_found(id))
    }

    async fn delete_student(&self, id: StudentId) -> Result<(), Error> {
        if self.students.delete(id).await? {
            Ok(())
        } else {
            Err(student_not_found(id))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::ports::{
        IdentifierPatternError, MockIdentifierGenerator, MockStudentRepository, RepositoryError,
    };
    use rstest::rstest;

    fn stored(id: i32, code: &str) -> Student {
        Student {
            id: StudentId::new(id),
            student_code: code.to_owned(),
            first_name: "Katherine".into(),
            last_name: "Johnson".into(),
            date_of_birth: "1918-08-26T00:00:00Z".into(),
        }
    }

    fn make_service(
        repo: MockStudentRepository,
        generator: MockIdentifierGenerator,
    ) -> StudentDirectoryService<MockStudentRepository, MockIdentifierGenerator> {
        StudentDirectoryService::new(Arc::new(repo), Arc::new(generator))
    }

    #[tokio::test]
    async fn create_assigns_generated_code() {
        let mut generator = MockIdentifierGenerator::new();
        generator
            .expect_generate()
            .times(1)
            .returning(|_, _| Ok("K7J0H5".to_owned()));
        let mut repo = MockStudentRepository::new();
        repo.expect_create()
            .withf(|student| student.student_code == "K7J0H5" && student.person.first_name == "Katherine")
            .times(1)
            .returning(|student| Ok(stored(4, &student.student_code)));

        let service = make_service(repo, generator);
        let student = service
            .create_student(PersonDetails::new("Katherine", "Johnson", "8/26/1918"))
            .await
            .expect("create succeeds");

        assert_eq!(student.id, StudentId::new(4));
        assert_eq!(student.student_code, "K7J0H5");
    }

    #[tokio::test]
    async fn create_skips_repository_when_pattern_fails() {
        let mut generator = MockIdentifierGenerator::new();
        generator
            .expect_generate()
            .returning(|_, _| Err(IdentifierPatternError::unsatisfiable()));
        let mut repo = MockStudentRepository::new();
        repo.expect_create().never();

        let error = make_service(repo, generator)
            .create_student(PersonDetails::new("Katherine", "Johnson", "8/26/1918"))
            .await
            .expect_err("pattern failure");

        assert_eq!(error.code(), ErrorCode::InternalError);
    }

    #[tokio::test]
    async fn get_reports_missing_student() {
        let mut repo = MockStudentRepository::new();
        repo.expect_find_by_id().times(1).return_once(|_| Ok(None));

        let error = make_service(repo, MockIdentifierGenerator::new())
            .get_student(StudentId::new(9))
            .await
            .expect_err("not found");

        assert_eq!(error.code(), ErrorCode::NotFound);
        assert_eq!(error.message(), "student 9 not found");
    }

    #[tokio::test]
    async fn update_reports_missing_student() {
        let mut repo = MockStudentRepository::new();
        repo.expect_update().times(1).return_once(|_, _| Ok(None));

        let error = make_service(repo, MockIdentifierGenerator::new())
            .update_student(
                StudentId::new(2),
                PersonDetails::new("Katherine", "Johnson", "8/26/1918"),
            )
            .await
            .expect_err("not found");

        assert_eq!(error.code(), ErrorCode::NotFound);
    }

    #[rstest]
    #[case(Ok(true), None)]
    #[case(Ok(false), Some(ErrorCode::NotFound))]
    #[case(Err(RepositoryError::referenced("enrolled")), Some(ErrorCode::Conflict))]
    #[case(Err(RepositoryError::connection("refused")), Some(ErrorCode::ServiceUnavailable))]
    #[tokio::test]
    async fn delete_maps_outcomes(
        #[case] outcome: Result<bool, RepositoryError>,
        #[case] expected: Option<ErrorCode>,
    ) {
        let mut repo = MockStudentRepository::new();
        repo.expect_delete().times(1).return_once(move |_| outcome);

        let result = make_service(repo, MockIdentifierGenerator::new())
            .delete_student(StudentId::new(1))
            .await;

        assert_eq!(result.err().map(|err| err.code()), expected);
    }

    #[tokio::test]
    async fn list_returns_repository_rows() {
        let mut repo = MockStudentRepository::new();
        repo.expect_list()
            .times(1)
            .return_once(|| Ok(vec![stored(1, "AAAAAA"), stored(2, "BBBBBB")]));

        let students = make_service(repo, MockIdentifierGenerator::new())
            .list_students()
            .await
            .expect("list succeeds");

        assert_eq!(students.len(), 2);
    }

    #[tokio::test]
    async fn works_behind_trait_objects() {
        let mut repo = MockStudentRepository::new();
        repo.expect_find_by_id()
            .times(1)
            .return_once(|id| Ok(Some(stored(id.get(), "DYN001"))));
        let repo: Arc<dyn StudentRepository> = Arc::new(repo);
        let generator: Arc<dyn IdentifierGenerator> = Arc::new(MockIdentifierGenerator::new());

        let student = StudentDirectoryService::new(repo, generator)
            .get_student(StudentId::new(3))
            .await
            .expect("lookup succeeds");

        assert_eq!(student.student_code, "DYN001");
    }
}
