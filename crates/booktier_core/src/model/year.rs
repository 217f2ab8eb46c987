//! Year-key boundary validation.
//!
//! # Responsibility
//! - Give input boundaries (forms, CLI) one place to validate year keys
//!   before they reach the store.
//!
//! # Invariants
//! - The store itself never re-validates key format; it only guards against
//!   blank keys and overwriting an existing collection.

use once_cell::sync::Lazy;
use regex::Regex;

static YEAR_KEY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}$").expect("valid year key regex"));

/// Returns whether `value` is a well-formed year key: exactly four ASCII
/// digits, no surrounding whitespace.
pub fn is_valid_year_key(value: &str) -> bool {
    YEAR_KEY_RE.is_match(value)
}
