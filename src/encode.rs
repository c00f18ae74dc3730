use crate::analyze::ensure_unique;
use crate::config::NameNumerator;
use crate::error::Result;
use std::collections::BTreeMap;
use std::ops::Range;

/// One step of a rename plan: move the artifact called `from` to `to`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rename {
    pub from: String,
    pub to: String,
}

impl NameNumerator {
    /// Canonical name for `index`.
    ///
    /// `name` and `ext` fall back to the configured defaults. Without an
    /// extension the result has no dot at all.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use name_numerator::NameNumerator;
    ///
    /// let nn = NameNumerator::default();
    /// assert_eq!(nn.encode(0, Some("light"), Some("bak")).unwrap(), "light.bak");
    /// assert_eq!(nn.encode(2, Some("light"), Some("bak")).unwrap(), "light_2.bak");
    /// assert_eq!(nn.encode(2, Some("light"), None).unwrap(), "light_2");
    /// ```
    pub fn encode(&self, index: usize, name: Option<&str>, ext: Option<&str>) -> Result<String> {
        let (name, ext) = self.resolve(name, ext)?;
        self.render(index, name, ext)
    }

    /// Build the name from an already resolved `name` and `ext`.
    pub(crate) fn render(&self, index: usize, name: &str, ext: Option<&str>) -> Result<String> {
        let mut out = String::from(name);
        if let Some(number) = self.index_to_number(index)? {
            out.push_str(self.separator());
            out.push_str(&format!("{number:0>width$}", width = self.min_numlen()));
        }
        if let Some(ext) = ext {
            out.push('.');
            out.push_str(ext);
        }
        tracing::trace!(index, seqname = %out, "encoded");
        Ok(out)
    }

    /// Canonical names for every index in `range`, in order.
    pub fn encode_range(
        &self,
        range: Range<usize>,
        name: Option<&str>,
        ext: Option<&str>,
    ) -> Result<Vec<String>> {
        let (name, ext) = self.resolve(name, ext)?;
        range.map(|index| self.render(index, name, ext)).collect()
    }

    /// Turn an index mapping (from [`crate::adjust_broken`] or
    /// [`crate::shift_up`]) into concrete renames.
    ///
    /// Entries that keep their index are skipped. A step is emitted only once
    /// its target name has been vacated, so applying the steps one by one never
    /// overwrites an artifact. When the remaining moves form a cycle (`[1, 0]`
    /// swaps two names) one artifact is parked under a temporary name, which
    /// starts with a dot and never decodes as a member, and moved to its
    /// target once the cycle has unwound.
    ///
    /// # Errors
    ///
    /// [`crate::Error::DuplicateElement`] if two entries share a target.
    pub fn rename_plan(
        &self,
        mapping: &BTreeMap<usize, usize>,
        name: Option<&str>,
        ext: Option<&str>,
    ) -> Result<Vec<Rename>> {
        let (name, ext) = self.resolve(name, ext)?;
        let targets: Vec<usize> = mapping.values().copied().collect();
        ensure_unique("mapping", &targets)?;

        let mut pending: BTreeMap<usize, usize> = mapping
            .iter()
            .filter(|(old, new)| old != new)
            .map(|(&old, &new)| (old, new))
            .collect();
        // (temporary name, target index) of the artifact parked to break a cycle
        let mut parked: Option<(String, usize)> = None;

        let mut plan = Vec::new();
        loop {
            if let Some((temp, new)) = &parked
                && !pending.contains_key(new)
            {
                plan.push(Rename {
                    from: temp.clone(),
                    to: self.render(*new, name, ext)?,
                });
                parked = None;
                continue;
            }

            let ready = pending
                .iter()
                .find(|(_, new)| !pending.contains_key(*new))
                .map(|(&old, &new)| (old, new));
            match ready {
                Some((old, new)) => {
                    pending.remove(&old);
                    plan.push(Rename {
                        from: self.render(old, name, ext)?,
                        to: self.render(new, name, ext)?,
                    });
                }
                None => {
                    let Some((old, new)) = pending.pop_first() else {
                        break;
                    };
                    let from = self.render(old, name, ext)?;
                    let temp = format!(".{from}.renaming");
                    tracing::debug!(seqname = %from, %temp, "parking to break a rename cycle");
                    plan.push(Rename {
                        from,
                        to: temp.clone(),
                    });
                    parked = Some((temp, new));
                }
            }
        }
        tracing::debug!(steps = plan.len(), "rename plan built");
        Ok(plan)
    }
}
