//! Error type shared by the single-table entity repositories.

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by student, teacher, and course adapters.
    pub enum RepositoryError {
        /// No connection could be checked out.
        Connection { message: String } => "{message}",
        /// A delete was blocked by a row that references the target.
        Referenced { message: String } => "{message}",
        /// The store rejected a statement, such as an unparseable timestamp.
        Constraint { message: String } => "{message}",
        /// Any other query failure.
        Query { message: String } => "{message}",
    }
}
