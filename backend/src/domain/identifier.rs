//! Random identifier generation from a regular expression.
//!
//! Patterns are parsed with `regex-syntax` and sampled with `rand_regex`, so
//! the accepted syntax is the `regex` crate's. Unbounded repetitions are
//! limited to the characters left over after the shortest match, and samples
//! longer than `max_length` characters are drawn again.

use rand::Rng;
use rand::distributions::Distribution;
use regex_syntax::ParserBuilder;

use crate::domain::ports::{IdentifierGenerator, IdentifierPatternError};

/// Samples drawn before giving up on fitting `max_length`.
const MAX_ATTEMPTS: usize = 64;

/// Generator backed by the thread-local random number generator.
///
/// # Examples
/// ```
/// use registrar::domain::ports::IdentifierGenerator;
/// use registrar::domain::{RandomIdentifierGenerator, STUDENT_CODE_MAX_LENGTH, STUDENT_CODE_PATTERN};
///
/// let code = RandomIdentifierGenerator
///     .generate(STUDENT_CODE_PATTERN, STUDENT_CODE_MAX_LENGTH)
///     .expect("student code pattern is valid");
/// assert_eq!(code.len(), 6);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIdentifierGenerator;

impl IdentifierGenerator for RandomIdentifierGenerator {
    fn generate(
        &self,
        pattern: &str,
        max_length: usize,
    ) -> Result<String, IdentifierPatternError> {
        generate_identifier(pattern, max_length, &mut rand::thread_rng())
    }
}

/// Generate one string matching `pattern` using the supplied random source.
///
/// The shortest match is measured in UTF-8 bytes, so patterns built from
/// non-ASCII characters are judged against the cap conservatively.
///
/// # Errors
/// Returns [`IdentifierPatternError`] when the pattern does not parse, can
/// never match, or cannot produce a match of at most `max_length`
/// characters.
pub fn generate_identifier<R: Rng + ?Sized>(
    pattern: &str,
    max_length: usize,
    rng: &mut R,
) -> Result<String, IdentifierPatternError> {
    let hir = ParserBuilder::new()
        .build()
        .parse(pattern)
        .map_err(|err| IdentifierPatternError::syntax(err.to_string()))?;
    let min_length = hir
        .properties()
        .minimum_len()
        .ok_or_else(IdentifierPatternError::unsatisfiable)?;
    if min_length > max_length {
        return Err(IdentifierPatternError::exceeds_max_length(
            min_length, max_length,
        ));
    }

    let max_repeat = u32::try_from(max_length - min_length).unwrap_or(u32::MAX);
    let sampler = rand_regex::Regex::with_hir(hir, max_repeat)
        .map_err(|err| IdentifierPatternError::unsupported(err.to_string()))?;

    for _ in 0..MAX_ATTEMPTS {
        let candidate: String = Distribution::<String>::sample(&sampler, &mut *rng);
        if candidate.chars().count() <= max_length {
            return Ok(candidate);
        }
    }
    Err(IdentifierPatternError::no_fitting_match(max_length, MAX_ATTEMPTS))
}
