//! Outbound adapters implementing the domain's driven ports.
//!
//! - **persistence**: PostgreSQL-backed repositories and the registration
//!   store, using Diesel.
//!
//! Adapters convert between domain types and storage representations and
//! contain no business rules.

pub mod persistence;
