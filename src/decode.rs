//! Recovering indexes from names.
//!
//! A candidate is split in two stages: the first `.` separates the extension,
//! then the separator occurrence that directly precedes the trailing run of
//! digits separates the name from the number. Separators never contain
//! digits, so that occurrence is also the rightmost one followed only by
//! digits.

use crate::config::NameNumerator;
use crate::error::{Error, Result, Rule};
use crate::translate::parse_number;

/// The pieces of a decodable name, borrowed from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeqnameParts<'a> {
    pub name: &'a str,
    pub separator: &'a str,
    /// Trailing digits, `None` when the separator ends the stem.
    pub number: Option<&'a str>,
    /// Everything after the first dot, further dots included.
    pub ext: &'a str,
}

pub(crate) fn split_seqname<'a>(seqname: &'a str, separator: &str) -> Option<SeqnameParts<'a>> {
    let Some((stem, ext)) = seqname.split_once('.') else {
        tracing::trace!(seqname, "no extension");
        return None;
    };

    let digits = stem.bytes().rev().take_while(u8::is_ascii_digit).count();
    let number_start = stem.len() - digits;
    let head = &stem[..number_start];
    let Some(name) = head.strip_suffix(separator) else {
        tracing::trace!(seqname, separator, "no separator before number");
        return None;
    };

    let number = (digits > 0).then(|| &stem[number_start..]);
    Some(SeqnameParts {
        name,
        separator: &head[name.len()..],
        number,
        ext,
    })
}

impl NameNumerator {
    /// Split `seqname` into name, separator, number and extension.
    ///
    /// Returns `None` when there is no extension or no separator in front of
    /// the trailing digits. This is purely structural: the parsed name and
    /// extension are not compared against any configured value.
    ///
    /// Only ASCII digits form the number, so `light_٣.bak` has no separator
    /// directly before a number and does not decode.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use name_numerator::NameNumerator;
    ///
    /// let nn = NameNumerator::default();
    /// let parts = nn.extract_parts("my_light_12.tar.gz").unwrap();
    /// assert_eq!(parts.name, "my_light");
    /// assert_eq!(parts.number, Some("12"));
    /// assert_eq!(parts.ext, "tar.gz");
    /// assert!(nn.extract_parts("light_12").is_none());
    /// ```
    pub fn extract_parts<'a>(&self, seqname: &'a str) -> Option<SeqnameParts<'a>> {
        split_seqname(seqname, self.separator())
    }

    /// Index of `seqname` in the sequence, or `None` if it is not a member.
    ///
    /// Fails only when `name`/`ext` cannot be resolved.
    pub fn seqname_to_index(
        &self,
        seqname: &str,
        name: Option<&str>,
        ext: Option<&str>,
    ) -> Result<Option<usize>> {
        let (name, ext) = self.resolve(name, ext)?;
        self.index_of(seqname, name, ext)
    }

    /// Index following `seqname`, or `None` if it is not a member.
    pub fn seqname_next(
        &self,
        seqname: &str,
        name: Option<&str>,
        ext: Option<&str>,
    ) -> Result<Option<usize>> {
        let index = self.seqname_to_index(seqname, name, ext)?;
        index
            .map(|i| {
                i.checked_add(1)
                    .ok_or_else(|| Error::invalid_value("index", Rule::OutOfRange))
            })
            .transpose()
    }

    /// Whether `seqname` belongs to the sequence. Agrees with
    /// [`NameNumerator::seqname_to_index`]: a name ending in a bare separator
    /// is not a member.
    pub fn is_member(&self, seqname: &str, name: Option<&str>, ext: Option<&str>) -> Result<bool> {
        Ok(self.seqname_to_index(seqname, name, ext)?.is_some())
    }

    pub(crate) fn index_of(
        &self,
        seqname: &str,
        name: &str,
        ext: Option<&str>,
    ) -> Result<Option<usize>> {
        if seqname == self.render(0, name, ext)? {
            return Ok(Some(0));
        }

        let Some(parts) = self.extract_parts(seqname) else {
            return Ok(None);
        };
        if self.strict() && (parts.name != name || Some(parts.ext) != ext) {
            tracing::trace!(seqname, name, "name or extension differs");
            return Ok(None);
        }

        let index = parts
            .number
            .and_then(parse_number)
            .and_then(|n| self.number_value_to_index(n));
        tracing::trace!(seqname, ?index, "decoded");
        Ok(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NumeratorOptions;

    fn light(options: NumeratorOptions) -> NameNumerator {
        NameNumerator::new(NumeratorOptions {
            default_name: Some("light".into()),
            default_ext: Some("bak".into()),
            ..options
        })
        .unwrap()
    }

    #[test]
    fn split_picks_first_dot_and_last_separator() {
        let parts = split_seqname("a_b_3.tar.gz", "_").unwrap();
        assert_eq!(
            parts,
            SeqnameParts {
                name: "a_b",
                separator: "_",
                number: Some("3"),
                ext: "tar.gz",
            }
        );
    }

    #[test]
    fn split_without_digits() {
        let parts = split_seqname("light_.bak", "_").unwrap();
        assert_eq!(parts.name, "light");
        assert_eq!(parts.number, None);
    }

    #[test]
    fn split_rejects() {
        assert_eq!(split_seqname("light_2", "_"), None);
        assert_eq!(split_seqname("videoPrivado.mp4", "_"), None);
        // separator present, but not right before the digits
        assert_eq!(split_seqname("my_light2.bak", "_"), None);
        assert_eq!(split_seqname("light_2x.bak", "_"), None);
        assert_eq!(split_seqname("light_\u{0663}.bak", "_"), None);
    }

    #[test]
    fn split_multichar_separator() {
        let parts = split_seqname("light--07.bak", "--").unwrap();
        assert_eq!(parts.name, "light");
        assert_eq!(parts.separator, "--");
        assert_eq!(parts.number, Some("07"));
    }

    #[test]
    fn decode_members() {
        let nn = light(NumeratorOptions::default());
        assert_eq!(nn.seqname_to_index("light.bak", None, None), Ok(Some(0)));
        assert_eq!(nn.seqname_to_index("light_1.bak", None, None), Ok(Some(1)));
        assert_eq!(nn.seqname_to_index("light_010.bak", None, None), Ok(Some(10)));
        assert_eq!(nn.seqname_next("light_2.bak", None, None), Ok(Some(3)));
    }

    #[test]
    fn decode_non_members() {
        let nn = light(NumeratorOptions::default());
        assert_eq!(nn.seqname_to_index("videoPrivado.mp4", None, None), Ok(None));
        assert_eq!(nn.seqname_next("videoPrivado.mp4", None, None), Ok(None));
        assert_eq!(nn.is_member("videoPrivado.mp4", None, None), Ok(false));
    }

    #[test]
    fn bare_separator_is_not_a_member() {
        let nn = light(NumeratorOptions::default());
        assert!(nn.extract_parts("light_.bak").is_some());
        assert_eq!(nn.seqname_to_index("light_.bak", None, None), Ok(None));
        assert_eq!(nn.is_member("light_.bak", None, None), Ok(false));
    }

    #[test]
    fn first_name_without_extension() {
        let nn = NameNumerator::default();
        assert_eq!(nn.seqname_to_index("light", Some("light"), None), Ok(Some(0)));
        assert_eq!(nn.is_member("light", Some("light"), None), Ok(true));
        // the decode grammar needs an extension
        assert_eq!(nn.seqname_to_index("light_1", Some("light"), None), Ok(None));
    }

    #[test]
    fn lenient_mode_ignores_name_and_ext() {
        let nn = light(NumeratorOptions::default());
        assert_eq!(nn.seqname_to_index("other_2.bak", None, None), Ok(Some(2)));
        assert_eq!(nn.seqname_to_index("light_2.tar", None, None), Ok(Some(2)));
    }

    #[test]
    fn strict_mode_checks_name_and_ext() {
        let nn = light(NumeratorOptions {
            strict: true,
            ..Default::default()
        });
        assert_eq!(nn.seqname_to_index("other_2.bak", None, None), Ok(None));
        assert_eq!(nn.seqname_to_index("light_2.tar", None, None), Ok(None));
        assert_eq!(nn.seqname_to_index("light_2.bak", None, None), Ok(Some(2)));
        assert_eq!(nn.seqname_to_index("light.bak", None, None), Ok(Some(0)));
    }

    #[test]
    fn number_below_zero_is_not_a_member() {
        let nn = light(NumeratorOptions {
            enumerate_first: true,
            ..Default::default()
        });
        assert_eq!(nn.seqname_to_index("light_0.bak", None, None), Ok(None));
        assert_eq!(nn.seqname_to_index("light_1.bak", None, None), Ok(Some(0)));
    }

    #[test]
    fn next_after_last_representable_index() {
        let nn = light(NumeratorOptions::default());
        let last = format!("light_{}.bak", usize::MAX);
        assert_eq!(nn.seqname_to_index(&last, None, None), Ok(Some(usize::MAX)));
        assert_eq!(
            nn.seqname_next(&last, None, None),
            Err(Error::invalid_value("index", Rule::OutOfRange))
        );
    }

    #[test]
    fn resolution_errors_propagate() {
        let nn = NameNumerator::default();
        assert!(nn.seqname_to_index("light_1.bak", None, None).is_err());
        assert!(nn.is_member("light_1.bak", Some(""), None).is_err());
    }
}
