//! Batch checks over the indexes found for a sequence.
//!
//! The free functions work on plain index lists, typically the output of
//! [`NameNumerator::get_seqindexes`]. They never decode strings.

use crate::config::NameNumerator;
use crate::error::{Error, Result, Rule};
use std::collections::{BTreeMap, HashMap, HashSet};

/// Summary of the state of a sequence found among a list of names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SequenceReport {
    /// Indexes of the members, ascending, duplicates kept.
    pub indexes: Vec<usize>,
    /// Indexes in `0..indexes.len()` that were not found.
    pub missing: Vec<usize>,
    /// Repeated indexes and how many times each appears.
    pub duplicates: BTreeMap<usize, usize>,
}

impl SequenceReport {
    /// True when the members form `0..n` exactly once each.
    pub fn is_intact(&self) -> bool {
        self.missing.is_empty() && self.duplicates.is_empty()
    }
}

impl NameNumerator {
    /// Sorted indexes of every member of the sequence found in `names`.
    ///
    /// Non-members are skipped. Duplicates and gaps are not reported here;
    /// see [`get_missing`] and [`get_duplicates`].
    pub fn get_seqindexes<S: AsRef<str>>(
        &self,
        names: &[S],
        name: Option<&str>,
        ext: Option<&str>,
    ) -> Result<Vec<usize>> {
        let (name, ext) = self.resolve(name, ext)?;
        let mut indexes = Vec::with_capacity(names.len());
        for candidate in names {
            if let Some(index) = self.index_of(candidate.as_ref(), name, ext)? {
                indexes.push(index);
            }
        }
        indexes.sort_unstable();
        tracing::debug!(
            candidates = names.len(),
            members = indexes.len(),
            "collected sequence indexes"
        );
        Ok(indexes)
    }

    /// Decode `names` and report gaps and duplicates in one pass.
    pub fn analyze<S: AsRef<str>>(
        &self,
        names: &[S],
        name: Option<&str>,
        ext: Option<&str>,
    ) -> Result<SequenceReport> {
        let indexes = self.get_seqindexes(names, name, ext)?;
        let missing = get_missing(&indexes);
        let duplicates = get_duplicates(&indexes);
        if !missing.is_empty() || !duplicates.is_empty() {
            tracing::warn!(?missing, ?duplicates, "sequence is broken");
        }
        Ok(SequenceReport {
            indexes,
            missing,
            duplicates,
        })
    }
}

/// Indexes of `0..indexes.len()` that do not appear in `indexes`, ascending.
///
/// A list of `n` indexes should be exactly `0..n`; `[0, 2, 3]` is missing `1`
/// and `[0, 0]` is missing `1` as well.
pub fn get_missing(indexes: &[usize]) -> Vec<usize> {
    let present: HashSet<usize> = indexes.iter().copied().collect();
    let missing: Vec<usize> = (0..indexes.len())
        .filter(|i| !present.contains(i))
        .collect();
    tracing::debug!(?missing, "missing indexes");
    missing
}

/// Every index that appears more than once, with its number of occurrences.
pub fn get_duplicates(indexes: &[usize]) -> BTreeMap<usize, usize> {
    let mut counts: BTreeMap<usize, usize> = BTreeMap::new();
    for &index in indexes {
        *counts.entry(index).or_default() += 1;
    }
    counts.retain(|_, count| *count > 1);
    counts
}

pub fn any_duplicated(indexes: &[usize]) -> bool {
    let mut seen = HashSet::with_capacity(indexes.len());
    indexes.iter().any(|index| !seen.insert(*index))
}

/// Propose a gap-free renumbering: each index maps to its position in the
/// given order, so `[0, 2, 3]` becomes `{0: 0, 2: 1, 3: 2}`.
///
/// Pass a sorted list, such as the output of
/// [`NameNumerator::get_seqindexes`], to keep the relative order of the
/// items. Nothing is renamed; see [`NameNumerator::rename_plan`].
///
/// # Errors
///
/// [`Error::DuplicateElement`] if any index repeats.
pub fn adjust_broken(indexes: &[usize]) -> Result<BTreeMap<usize, usize>> {
    ensure_unique("indexes", indexes)?;
    let mapping: BTreeMap<usize, usize> = indexes
        .iter()
        .enumerate()
        .map(|(new, &old)| (old, new))
        .collect();
    tracing::debug!(?mapping, "renumbering proposal");
    Ok(mapping)
}

/// Propose moving every index one position up, freeing index 0 for a new item.
pub fn shift_up(indexes: &[usize]) -> Result<BTreeMap<usize, usize>> {
    ensure_unique("indexes", indexes)?;
    indexes
        .iter()
        .map(|&index| {
            index
                .checked_add(1)
                .map(|next| (index, next))
                .ok_or_else(|| Error::invalid_value("indexes", Rule::OutOfRange))
        })
        .collect()
}

pub(crate) fn ensure_unique(param: &str, indexes: &[usize]) -> Result<()> {
    let mut seen: HashMap<usize, usize> = HashMap::with_capacity(indexes.len());
    for (position, &index) in indexes.iter().enumerate() {
        if let Some(&first) = seen.get(&index) {
            return Err(Error::DuplicateElement {
                param: param.to_string(),
                element: index,
                first,
                second: position,
            });
        }
        seen.insert(index, position);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn missing_from_intact_sequence() {
        assert!(get_missing(&[0, 1, 2]).is_empty());
        assert!(get_missing(&[2, 0, 1]).is_empty());
        assert!(get_missing(&[]).is_empty());
    }

    #[test]
    fn missing_from_broken_sequence() {
        assert_eq!(get_missing(&[1, 2]), vec![0]);
        assert_eq!(get_missing(&[0, 2, 3]), vec![1]);
        assert_eq!(get_missing(&[0, 0]), vec![1]);
        assert_eq!(get_missing(&[7, 9]), vec![0, 1]);
    }

    #[test]
    fn duplicates_counted() {
        assert_eq!(get_duplicates(&[0, 0, 1]), BTreeMap::from([(0, 2)]));
        assert_eq!(
            get_duplicates(&[3, 1, 3, 1, 3]),
            BTreeMap::from([(1, 2), (3, 3)])
        );
        assert!(get_duplicates(&[0, 1, 2]).is_empty());
    }

    #[test]
    fn any_duplicated_detects_repeats() {
        assert!(any_duplicated(&[0, 0, 1]));
        assert!(!any_duplicated(&[0, 1, 2]));
        assert!(!any_duplicated(&[]));
    }

    #[test]
    fn adjust_broken_keeps_given_order() {
        assert_eq!(adjust_broken(&[1, 2]), Ok(BTreeMap::from([(1, 0), (2, 1)])));
        assert_eq!(
            adjust_broken(&[0, 2, 3]),
            Ok(BTreeMap::from([(0, 0), (2, 1), (3, 2)]))
        );
        assert_eq!(adjust_broken(&[5, 1]), Ok(BTreeMap::from([(5, 0), (1, 1)])));
        assert_eq!(adjust_broken(&[]), Ok(BTreeMap::new()));
    }

    #[test]
    fn adjust_broken_rejects_duplicates() {
        let err = adjust_broken(&[0, 0]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DuplicateElement);
        assert_eq!(
            err,
            Error::DuplicateElement {
                param: "indexes".into(),
                element: 0,
                first: 0,
                second: 1,
            }
        );
    }

    #[test]
    fn shift_up_moves_everything() {
        assert_eq!(
            shift_up(&[0, 1, 2]),
            Ok(BTreeMap::from([(0, 1), (1, 2), (2, 3)]))
        );
        assert!(shift_up(&[1, 1]).is_err());
        assert!(shift_up(&[usize::MAX]).is_err());
    }
}
