//! Driven port for producing random identifiers from a pattern.

use super::define_port_error;

define_port_error! {
    /// A pattern that cannot be parsed, sampled, or fitted to its length cap.
    pub enum IdentifierPatternError {
        /// The pattern is not a valid regular expression.
        Syntax { message: String } => "invalid identifier pattern: {message}",
        /// The pattern parses but uses syntax that cannot be sampled.
        Unsupported { message: String } => "unsupported identifier pattern: {message}",
        /// No string matches the pattern.
        Unsatisfiable => "identifier pattern matches nothing",
        /// Even the shortest match would be longer than the cap.
        ExceedsMaxLength { min_length: usize, max_length: usize } =>
            "shortest match is {min_length} characters, longer than the limit of {max_length}",
        /// Every sample drawn was longer than the cap.
        NoFittingMatch { max_length: usize, attempts: usize } =>
            "no match of at most {max_length} characters after {attempts} attempts",
    }
}

/// Produces identifiers matching a pattern.
///
/// Implementations must never return a value longer than `max_length`
/// characters. Output is expected to vary between calls.
#[cfg_attr(test, mockall::automock)]
pub trait IdentifierGenerator: Send + Sync {
    /// Generate one identifier matching `pattern`.
    fn generate(&self, pattern: &str, max_length: usize)
    -> Result<String, IdentifierPatternError>;
}
