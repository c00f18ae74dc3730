//! Mapping between sequence indexes and the numbers embedded in names.
//!
//! With the default settings index 0 is `light.bak`, index 1 is `light_1.bak`,
//! so index and number coincide. `from_zero` and `enumerate_first` shift the
//! number by one in either direction; the mappings here undo each other
//! for every index the encoder can produce.

use crate::config::NameNumerator;
use crate::error::{Error, Result, Rule};

impl NameNumerator {
    /// Number embedded in the name of `index`, or `None` when the name carries
    /// no number at all (index 0 without `enumerate_first`).
    pub(crate) fn index_to_number(&self, index: usize) -> Result<Option<usize>> {
        let number = match (self.enumerate_first(), self.from_zero()) {
            (false, _) if index == 0 => return Ok(None),
            (true, true) => Some(index),
            (true, false) => index.checked_add(1),
            (false, true) => Some(index - 1),
            (false, false) => Some(index),
        };
        number
            .map(Some)
            .ok_or_else(|| Error::invalid_value("index", Rule::OutOfRange))
    }

    /// Index for an embedded number, or `None` if it would fall below 0.
    pub(crate) fn number_value_to_index(&self, number: usize) -> Option<usize> {
        match (self.enumerate_first(), self.from_zero()) {
            (true, true) => Some(number),
            (true, false) => number.checked_sub(1),
            (false, true) => number.checked_add(1),
            (false, false) => Some(number),
        }
    }

    /// Parse the digits of a number part and translate them into an index.
    pub fn number_to_index(&self, number_part: &str) -> Result<usize> {
        let number = parse_number(number_part).ok_or_else(|| number_part_error(number_part))?;
        self.number_value_to_index(number)
            .ok_or_else(|| Error::invalid_value("number_part", Rule::OutOfRange))
    }
}

/// Parse a non-empty run of ASCII digits. Leading zeros are accepted.
pub(crate) fn parse_number(digits: &str) -> Option<usize> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

fn number_part_error(number_part: &str) -> Error {
    let rule = if number_part.is_empty() {
        Rule::Empty
    } else if number_part.bytes().all(|b| b.is_ascii_digit()) {
        Rule::OutOfRange
    } else {
        Rule::NotDigits
    };
    Error::invalid_value("number_part", rule)
}
