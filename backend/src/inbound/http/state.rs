//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` and only see the driving ports,
//! so they can be exercised with mocks and no database.

use std::sync::Arc;

use crate::domain::ports::{CourseCatalogue, CourseRegistration, StudentDirectory, TeacherDirectory};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub registration: Arc<dyn CourseRegistration>,
    pub students: Arc<dyn StudentDirectory>,
    pub teachers: Arc<dyn TeacherDirectory>,
    pub courses: Arc<dyn CourseCatalogue>,
}

impl HttpState {
    /// Bundle the driving ports.
    pub fn new(
        registration: Arc<dyn CourseRegistration>,
        students: Arc<dyn StudentDirectory>,
        teachers: Arc<dyn TeacherDirectory>,
        courses: Arc<dyn CourseCatalogue>,
    ) -> Self {
        Self {
            registration,
            students,
            teachers,
            courses,
        }
    }
}
