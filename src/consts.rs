use regex::Regex;
use std::sync::LazyLock;

pub const DEFAULT_SEPARATOR: &str = "_";
pub const DEFAULT_MIN_NUMLEN: usize = 1;

/// Longest zero padding accepted for the number part.
pub const MAX_MIN_NUMLEN: usize = 255;

/// Matches any Unicode numeric character (decimal digits, superscripts,
/// fractions), which separators may not contain.
pub static DIGIT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\p{N}").unwrap());
