//! Registration workflow against an in-memory store, driven both through
//! the domain service and through the HTTP API.
//!
//! The store keeps pending rows per transaction and publishes them only on
//! commit, mirroring how PostgreSQL treats an aborted registration.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use async_trait::async_trait;
use regex::Regex;
use registrar::Trace;
use registrar::domain::ports::{
    CourseCatalogue, RegistrationStore, RegistrationStoreError, RegistrationTransaction,
    StudentDirectory, TeacherDirectory,
};
use registrar::domain::{
    Course, CourseDetails, CourseId, CourseOffering, CourseRegistrationService, Error, NewCourse,
    NewStudent, PersonDetails, RandomIdentifierGenerator, RegistrationError, Student, StudentId,
    Teacher, TeacherId,
};
use registrar::inbound::http::configure_api;
use registrar::inbound::http::state::HttpState;
use rstest::{fixture, rstest};
use serde_json::{Value, json};

#[derive(Debug, Default, Clone)]
struct Tables {
    students: Vec<NewStudent>,
    teachers: Vec<PersonDetails>,
    courses: Vec<NewCourse>,
    enrollments: Vec<(StudentId, CourseId)>,
}

#[derive(Default)]
struct InMemoryStore {
    committed: Arc<Mutex<Tables>>,
    open: Arc<AtomicUsize>,
    park_on_link: bool,
}

impl InMemoryStore {
    /// A store whose transactions never finish linking the enrollment.
    fn parking_on_link() -> Self {
        Self {
            park_on_link: true,
            ..Self::default()
        }
    }

    fn open_transactions(&self) -> usize {
        self.open.load(Ordering::SeqCst)
    }

    fn snapshot(&self) -> Tables {
        self.committed
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

struct InMemoryTransaction {
    committed: Arc<Mutex<Tables>>,
    open: Arc<AtomicUsize>,
    park_on_link: bool,
    pending: Tables,
    base: Tables,
}

impl Drop for InMemoryTransaction {
    fn drop(&mut self) {
        self.open.fetch_sub(1, Ordering::SeqCst);
    }
}

fn require_timestamp(value: &str) -> Result<(), RegistrationStoreError> {
    if value.is_empty() {
        return Err(RegistrationStoreError::constraint_violation(
            "invalid input syntax for type timestamp: \"\"",
        ));
    }
    Ok(())
}

fn next_id(existing: usize, pending: usize) -> i32 {
    i32::try_from(existing + pending + 1).unwrap_or(i32::MAX)
}

#[async_trait]
impl RegistrationStore for InMemoryStore {
    async fn begin(&self) -> Result<Box<dyn RegistrationTransaction>, RegistrationStoreError> {
        self.open.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(InMemoryTransaction {
            committed: Arc::clone(&self.committed),
            open: Arc::clone(&self.open),
            park_on_link: self.park_on_link,
            pending: Tables::default(),
            base: self.snapshot(),
        }))
    }
}

#[async_trait]
impl RegistrationTransaction for InMemoryTransaction {
    async fn insert_student(
        &mut self,
        student: &NewStudent,
    ) -> Result<StudentId, RegistrationStoreError> {
        require_timestamp(&student.person.date_of_birth)?;
        let id = next_id(self.base.students.len(), self.pending.students.len());
        self.pending.students.push(student.clone());
        Ok(StudentId::new(id))
    }

    async fn insert_teacher(
        &mut self,
        teacher: &PersonDetails,
    ) -> Result<TeacherId, RegistrationStoreError> {
        require_timestamp(&teacher.date_of_birth)?;
        let id = next_id(self.base.teachers.len(), self.pending.teachers.len());
        self.pending.teachers.push(teacher.clone());
        Ok(TeacherId::new(id))
    }

    async fn insert_course(
        &mut self,
        course: &NewCourse,
    ) -> Result<CourseId, RegistrationStoreError> {
        require_timestamp(&course.details.start_time)?;
        require_timestamp(&course.details.end_time)?;
        let id = next_id(self.base.courses.len(), self.pending.courses.len());
        self.pending.courses.push(course.clone());
        Ok(CourseId::new(id))
    }

    async fn link_enrollment(
        &mut self,
        student_id: StudentId,
        course_id: CourseId,
    ) -> Result<(), RegistrationStoreError> {
        if self.park_on_link {
            std::future::pending::<()>().await;
        }
        self.pending.enrollments.push((student_id, course_id));
        Ok(())
    }

    async fn commit(mut self: Box<Self>) -> Result<(), RegistrationStoreError> {
        let Tables {
            students,
            teachers,
            courses,
            enrollments,
        } = std::mem::take(&mut self.pending);
        let mut committed = self
            .committed
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        committed.students.extend(students);
        committed.teachers.extend(teachers);
        committed.courses.extend(courses);
        committed.enrollments.extend(enrollments);
        Ok(())
    }

    async fn rollback(self: Box<Self>) {}
}

type InMemoryRegistration = CourseRegistrationService<InMemoryStore, RandomIdentifierGenerator>;

fn registration_service() -> (Arc<InMemoryStore>, InMemoryRegistration) {
    service_over(InMemoryStore::default())
}

fn service_over(store: InMemoryStore) -> (Arc<InMemoryStore>, InMemoryRegistration) {
    let store = Arc::new(store);
    let service =
        CourseRegistrationService::new(Arc::clone(&store), Arc::new(RandomIdentifierGenerator));
    (store, service)
}

#[fixture]
fn student() -> PersonDetails {
    PersonDetails::new("Grace", "Hopper", "12/9/1906")
}

fn offering(teacher_birth: &str) -> CourseOffering {
    CourseOffering {
        details: CourseDetails::new("Compilers", "9/1/2024", "12/20/2024"),
        teacher: PersonDetails::new("Alan", "Turing", teacher_birth),
    }
}

#[rstest]
#[tokio::test]
async fn successful_registration_publishes_one_of_each_row(student: PersonDetails) {
    let (store, service) = registration_service();

    let registration = service
        .register(student, offering("6/23/1912"))
        .await
        .expect("registration succeeds");

    let tables = store.snapshot();
    assert_eq!(tables.students.len(), 1);
    assert_eq!(tables.teachers.len(), 1);
    assert_eq!(tables.courses.len(), 1);
    assert_eq!(
        tables.enrollments,
        vec![(registration.student.id, registration.course.id)]
    );
    assert_eq!(tables.courses[0].teacher_id, registration.course.teacher.id);
    assert_eq!(
        tables.students[0].student_code,
        registration.student.student_code
    );
}

#[rstest]
#[tokio::test]
async fn failed_teacher_insert_leaves_no_student_behind(student: PersonDetails) {
    let (store, service) = registration_service();

    let error = service
        .register(student, offering(""))
        .await
        .expect_err("empty timestamp is rejected");

    assert!(matches!(
        error,
        RegistrationError::Store(RegistrationStoreError::ConstraintViolation { .. })
    ));
    let tables = store.snapshot();
    assert!(tables.students.is_empty());
    assert!(tables.teachers.is_empty());
    assert!(tables.enrollments.is_empty());
}

#[rstest]
#[tokio::test]
async fn repeated_registration_duplicates_the_teacher(student: PersonDetails) {
    let (store, service) = registration_service();

    let first = service
        .register(student.clone(), offering("6/23/1912"))
        .await
        .expect("first registration");
    let second = service
        .register(student, offering("6/23/1912"))
        .await
        .expect("second registration");

    assert_ne!(first.course.teacher.id, second.course.teacher.id);
    let tables = store.snapshot();
    assert_eq!(tables.teachers.len(), 2);
    assert_eq!(tables.enrollments.len(), 2);
}

#[rstest]
#[tokio::test]
async fn abandoned_registration_publishes_nothing(student: PersonDetails) {
    let (store, service) = service_over(InMemoryStore::parking_on_link());

    let outcome = tokio::time::timeout(
        Duration::from_millis(50),
        service.register(student, offering("6/23/1912")),
    )
    .await;

    assert!(outcome.is_err(), "registration parks on the enrollment link");
    let tables = store.snapshot();
    assert!(tables.students.is_empty());
    assert!(tables.teachers.is_empty());
    assert!(tables.courses.is_empty());
    assert!(tables.enrollments.is_empty());
    assert_eq!(store.open_transactions(), 0);
}

/// Directory ports that the registration endpoint never reaches.
struct Unreachable;

fn unreachable_port() -> Error {
    Error::internal("port not wired in this test")
}

#[async_trait]
impl StudentDirectory for Unreachable {
    async fn create_student(&self, _person: PersonDetails) -> Result<Student, Error> {
        Err(unreachable_port())
    }

    async fn list_students(&self) -> Result<Vec<Student>, Error> {
        Err(unreachable_port())
    }

    async fn get_student(&self, _id: StudentId) -> Result<Student, Error> {
        Err(unreachable_port())
    }

    async fn update_student(&self, _id: StudentId, _person: PersonDetails) -> Result<Student, Error> {
        Err(unreachable_port())
    }

    async fn delete_student(&self, _id: StudentId) -> Result<(), Error> {
        Err(unreachable_port())
    }
}

#[async_trait]
impl TeacherDirectory for Unreachable {
    async fn create_teacher(&self, _person: PersonDetails) -> Result<Teacher, Error> {
        Err(unreachable_port())
    }

    async fn get_teacher(&self, _id: TeacherId) -> Result<Teacher, Error> {
        Err(unreachable_port())
    }

    async fn update_teacher(&self, _id: TeacherId, _person: PersonDetails) -> Result<Teacher, Error> {
        Err(unreachable_port())
    }

    async fn delete_teacher(&self, _id: TeacherId) -> Result<(), Error> {
        Err(unreachable_port())
    }
}

#[async_trait]
impl CourseCatalogue for Unreachable {
    async fn create_course(&self, _course: NewCourse) -> Result<Course, Error> {
        Err(unreachable_port())
    }

    async fn get_course(&self, _id: CourseId) -> Result<Course, Error> {
        Err(unreachable_port())
    }

    async fn update_course(&self, _id: CourseId, _course: NewCourse) -> Result<Course, Error> {
        Err(unreachable_port())
    }

    async fn delete_course(&self, _id: CourseId) -> Result<(), Error> {
        Err(unreachable_port())
    }
}

async fn post_registration(body: Value) -> (Arc<InMemoryStore>, StatusCode, String) {
    let (store, service) = registration_service();
    let state = HttpState::new(
        Arc::new(service),
        Arc::new(Unreachable),
        Arc::new(Unreachable),
        Arc::new(Unreachable),
    );
    let app = test::init_service(
        App::new()
            .wrap(Trace)
            .app_data(web::Data::new(state))
            .configure(configure_api),
    )
    .await;
    let response = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/students/register-course")
            .set_json(body)
            .to_request(),
    )
    .await;
    let status = response.status();
    let bytes = test::read_body(response).await;
    (store, status, String::from_utf8_lossy(&bytes).into_owned())
}

fn registration_body(teacher_birth: &str) -> Value {
    json!({
        "student": {
            "firstName": "Grace",
            "lastName": "Hopper",
            "dateOfBirth": "12/9/1906"
        },
        "course": {
            "name": "Compilers",
            "startTime": "9/1/2024",
            "endTime": "12/20/2024",
            "teacher": {
                "firstName": "Alan",
                "lastName": "Turing",
                "dateOfBirth": teacher_birth
            }
        }
    })
}

#[rstest]
#[actix_web::test]
async fn http_registration_returns_both_records() {
    let (store, status, body) = post_registration(registration_body("6/23/1912")).await;

    assert_eq!(status, StatusCode::OK);
    let payload: Value = serde_json::from_str(&body).expect("json body");
    assert_eq!(payload["success"], json!(true));
    assert_eq!(payload["course"]["teacher"]["lastName"], json!("Turing"));
    assert_eq!(payload["course"]["startTime"], json!("9/1/2024"));
    let code = payload["student"]["studentID"]
        .as_str()
        .expect("student code is text");
    assert!(Regex::new("^[A-Z0-9]{1,6}$").expect("valid regex").is_match(code));
    assert_eq!(store.snapshot().enrollments.len(), 1);
}

#[rstest]
#[actix_web::test]
async fn http_registration_failure_is_plain_text_and_persists_nothing() {
    let (store, status, body) = post_registration(registration_body("")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, "invalid input syntax for type timestamp: \"\"");
    assert!(store.snapshot().students.is_empty());
}
