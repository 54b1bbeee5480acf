//! URL normalization.
//!
//! Three policies rewrite a URL into a stable form:
//! - `canonical`: drop the query and one trailing path slash
//! - `redirection`: rehost onto [`REDIRECT_HOST`], lower-case the path, then
//!   lower-case the entire serialized URL
//! - `all`: both of the above
//!
//! The whole-string lower-casing in `redirection` and `all` also folds the
//! scheme, query, fragment and percent escapes. Clients depend on that output,
//! so it is kept as is.
//!
//! Everything here is a pure function of its inputs and safe to call from any
//! number of tasks.

mod parsed;


use std::str::FromStr;

use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

use crate::error_handling::NormalizeError;

pub use parsed::{check_characters, ParsedUrl};

/// Host every `redirection` and `all` result points at.
pub const REDIRECT_HOST: &str = "www.byfood.com";

/// Normalization policy selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, AsRefStr, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Operation {
    /// Strip query string and one trailing slash
    Canonical,
    /// Rehost and lower-case
    Redirection,
    /// Canonical and redirection combined
    All,
}

impl Operation {
    /// Comma-separated list of the accepted literals, in declaration order.
    pub fn literals() -> String {
        Operation::iter()
            .map(|op| op.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Normalizes `url` with the operation named by `operation`.
///
/// The URL is parsed before the operation is resolved, so a call with both
/// inputs bad reports the URL.
///
/// # Errors
///
/// * `NormalizeError::InvalidUrl` if `url` cannot be parsed
/// * `NormalizeError::UnsupportedOperation` if `operation` is not one of
///   `canonical`, `redirection` or `all`
pub fn process(url: &str, operation: &str) -> Result<String, NormalizeError> {
    let parsed = ParsedUrl::parse(url)?;
    let operation = Operation::from_str(operation)
        .map_err(|_| NormalizeError::UnsupportedOperation(operation.to_string()))?;
    Ok(transform(parsed, operation))
}

/// Normalizes `url` with an already-validated operation.
pub fn apply(url: &str, operation: Operation) -> Result<String, NormalizeError> {
    ParsedUrl::parse(url).map(|parsed| transform(parsed, operation))
}

fn transform(mut parsed: ParsedUrl, operation: Operation) -> String {
    match operation {
        Operation::Canonical => {
            canonicalize(&mut parsed);
            parsed.to_string()
        }
        Operation::Redirection => {
            rehost(&mut parsed);
            parsed.to_string().to_lowercase()
        }
        Operation::All => {
            rehost(&mut parsed);
            canonicalize(&mut parsed);
            parsed.to_string().to_lowercase()
        }
    }
}

fn canonicalize(parsed: &mut ParsedUrl) {
    parsed.drop_query();
    parsed.strip_trailing_slash();
}

fn rehost(parsed: &mut ParsedUrl) {
    parsed.set_host(REDIRECT_HOST);
    parsed.lowercase_path();
}
