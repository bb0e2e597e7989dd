//! SQL fixture loading.
//!
//! A fixture is a plain SQL file. It is split on `;` and each non-empty
//! statement runs in file order on one pooled connection. The first failing
//! statement stops the load; statements before it stay applied.

use std::path::Path;

use cap_std::ambient_authority;
use cap_std::fs::Dir;
use diesel_async::RunQueryDsl;
use tracing::{debug, info};

use super::diesel_error_mapping::classify;
use super::pool::DbPool;

/// Failure while loading a fixture file.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FixtureError {
    #[error("failed to read fixture {path}: {message}")]
    Read { path: String, message: String },
    #[error("failed to get connection for fixture: {message}")]
    Connection { message: String },
    #[error("fixture statement {index} failed: {message}")]
    Statement { index: usize, message: String },
}

impl FixtureError {
    fn read(path: &Path, error: impl std::fmt::Display) -> Self {
        Self::Read {
            path: path.display().to_string(),
            message: error.to_string(),
        }
    }
}

/// Split a SQL script into trimmed, non-empty statements.
///
/// Splitting is purely textual: a `;` inside a string literal ends the
/// statement too.
pub fn split_statements(script: &str) -> Vec<&str> {
    script
        .split(';')
        .map(str::trim)
        .filter(|statement| !statement.is_empty())
        .collect()
}

/// Read the fixture at `path`.
///
/// # Errors
///
/// Returns [`FixtureError::Read`] when the file or its directory cannot be
/// opened, or the content is not UTF-8.
pub fn read_fixture(path: &Path) -> Result<String, FixtureError> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = path
        .file_name()
        .ok_or_else(|| FixtureError::read(path, "path has no file name"))?;
    let dir = Dir::open_ambient_dir(parent, ambient_authority())
        .map_err(|error| FixtureError::read(path, error))?;
    dir.read_to_string(file_name)
        .map_err(|error| FixtureError::read(path, error))
}

/// Run every statement of the fixture at `path` against `pool`.
///
/// Returns the number of statements executed.
///
/// # Errors
///
/// Returns the first [`FixtureError`] encountered.
pub async fn load_fixture(pool: &DbPool, path: &Path) -> Result<usize, FixtureError> {
    let script = read_fixture(path)?;
    let statements = split_statements(&script);
    let mut conn = pool
        .get()
        .await
        .map_err(|error| FixtureError::Connection {
            message: error.to_string(),
        })?;

    for (index, statement) in statements.iter().enumerate() {
        debug!(index, "executing fixture statement");
        diesel::sql_query(*statement)
            .execute(&mut conn)
            .await
            .map_err(|error| FixtureError::Statement {
                index,
                message: classify(error).1,
            })?;
    }

    info!(path = %path.display(), statements = statements.len(), "fixture loaded");
    Ok(statements.len())
}
