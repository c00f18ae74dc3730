//! Numbering settings and their validation.

use crate::consts::{DEFAULT_MIN_NUMLEN, DEFAULT_SEPARATOR, MAX_MIN_NUMLEN};
use crate::error::{Error, Result, Rule};
use crate::name::{resolve_ext, resolve_name, validate_component, validate_separator};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Raw, unvalidated settings for a [`NameNumerator`].
///
/// `Default` yields the recommended settings: the first name is left
/// undecorated, the second one gets `_1`, and no zero padding is added.
///
/// # Examples
///
/// ```rust
/// use name_numerator::{NameNumerator, NumeratorOptions};
///
/// let nn = NameNumerator::new(NumeratorOptions {
///     min_numlen: 3,
///     default_name: Some("light".into()),
///     default_ext: Some("bak".into()),
///     ..Default::default()
/// })
/// .unwrap();
/// assert_eq!(nn.encode(1, None, None).unwrap(), "light_001.bak");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumeratorOptions {
    /// Text placed between the base name and the number. Non-empty, no dots, no digits.
    pub separator: String,
    /// Whether index 0 is decorated too: `avatar.png` (false) vs `avatar_1.png` (true).
    pub enumerate_first: bool,
    /// Whether the first decorated name carries `0` instead of `1`.
    pub from_zero: bool,
    /// Minimum digit count of the number, padded with leading zeros. At most 255.
    pub min_numlen: usize,
    /// Name used when a call does not pass one.
    pub default_name: Option<String>,
    /// Extension used when a call does not pass one.
    pub default_ext: Option<String>,
    /// Require decoded names to carry the resolved name and extension.
    pub strict: bool,
}

impl Default for NumeratorOptions {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            enumerate_first: false,
            from_zero: false,
            min_numlen: DEFAULT_MIN_NUMLEN,
            default_name: None,
            default_ext: None,
            strict: false,
        }
    }
}

/// Validated numbering settings. Everything but the two defaults is fixed
/// once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameNumerator {
    separator: String,
    enumerate_first: bool,
    from_zero: bool,
    min_numlen: usize,
    strict: bool,
    default_name: Option<String>,
    default_ext: Option<String>,
}

impl NameNumerator {
    pub fn new(options: NumeratorOptions) -> Result<Self> {
        validate_separator(&options.separator)?;
        if options.min_numlen > MAX_MIN_NUMLEN {
            return Err(Error::invalid_value("min_numlen", Rule::OutOfRange));
        }
        if let Some(name) = &options.default_name {
            validate_component("default_name", name)?;
        }
        if let Some(ext) = &options.default_ext {
            validate_component("default_ext", ext)?;
        }
        tracing::debug!(
            separator = %options.separator,
            enumerate_first = options.enumerate_first,
            from_zero = options.from_zero,
            min_numlen = options.min_numlen,
            strict = options.strict,
            "numerator configured"
        );
        Ok(Self {
            separator: options.separator,
            enumerate_first: options.enumerate_first,
            from_zero: options.from_zero,
            min_numlen: options.min_numlen,
            strict: options.strict,
            default_name: options.default_name,
            default_ext: options.default_ext,
        })
    }

    /// Load settings from a JSON object such as `{"separator": "-", "min_numlen": 2}`.
    /// Missing keys take their default value.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value =
            serde_json::from_str(json).map_err(|_| Error::invalid_type("options", "object"))?;
        Self::from_value(&value)
    }

    pub fn from_value(value: &Value) -> Result<Self> {
        let map = value
            .as_object()
            .ok_or_else(|| Error::invalid_type("options", "object"))?;

        let mut options = NumeratorOptions::default();
        for (key, val) in map {
            match key.as_str() {
                "separator" => options.separator = json_string(key, val)?,
                "enumerate_first" => options.enumerate_first = json_bool(key, val)?,
                "from_zero" => options.from_zero = json_bool(key, val)?,
                "min_numlen" => options.min_numlen = json_count(key, val)?,
                "default_name" => options.default_name = json_opt_string(key, val)?,
                "default_ext" => options.default_ext = json_opt_string(key, val)?,
                "strict" => options.strict = json_bool(key, val)?,
                _ => return Err(Error::invalid_value(key.as_str(), Rule::Unrecognized)),
            }
        }
        Self::new(options)
    }

    /// Current settings, including the defaults as they are now.
    pub fn options(&self) -> NumeratorOptions {
        NumeratorOptions {
            separator: self.separator.clone(),
            enumerate_first: self.enumerate_first,
            from_zero: self.from_zero,
            min_numlen: self.min_numlen,
            default_name: self.default_name.clone(),
            default_ext: self.default_ext.clone(),
            strict: self.strict,
        }
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    pub fn enumerate_first(&self) -> bool {
        self.enumerate_first
    }

    pub fn from_zero(&self) -> bool {
        self.from_zero
    }

    pub fn min_numlen(&self) -> usize {
        self.min_numlen
    }

    pub fn strict(&self) -> bool {
        self.strict
    }

    pub fn default_name(&self) -> Option<&str> {
        self.default_name.as_deref()
    }

    /// Replace the default name. `None` clears it.
    pub fn set_default_name(&mut self, value: Option<String>) -> Result<()> {
        if let Some(name) = &value {
            validate_component("default_name", name)?;
        }
        self.default_name = value;
        Ok(())
    }

    pub fn default_ext(&self) -> Option<&str> {
        self.default_ext.as_deref()
    }

    /// Replace the default extension. `None` clears it.
    pub fn set_default_ext(&mut self, value: Option<String>) -> Result<()> {
        if let Some(ext) = &value {
            validate_component("default_ext", ext)?;
        }
        self.default_ext = value;
        Ok(())
    }

    /// Effective name and extension for a single call.
    pub(crate) fn resolve<'a>(
        &'a self,
        name: Option<&'a str>,
        ext: Option<&'a str>,
    ) -> Result<(&'a str, Option<&'a str>)> {
        let name = resolve_name(name, self.default_name.as_deref())?;
        let ext = resolve_ext(ext, self.default_ext.as_deref())?;
        Ok((name, ext))
    }
}

impl Default for NameNumerator {
    fn default() -> Self {
        let options = NumeratorOptions::default();
        Self {
            separator: options.separator,
            enumerate_first: options.enumerate_first,
            from_zero: options.from_zero,
            min_numlen: options.min_numlen,
            strict: options.strict,
            default_name: None,
            default_ext: None,
        }
    }
}

fn json_string(key: &str, val: &Value) -> Result<String> {
    val.as_str()
        .map(str::to_string)
        .ok_or_else(|| Error::invalid_type(key, "string"))
}

fn json_opt_string(key: &str, val: &Value) -> Result<Option<String>> {
    match val {
        Value::Null => Ok(None),
        _ => json_string(key, val).map(Some),
    }
}

fn json_bool(key: &str, val: &Value) -> Result<bool> {
    val.as_bool().ok_or_else(|| Error::invalid_type(key, "bool"))
}

fn json_count(key: &str, val: &Value) -> Result<usize> {
    if let Some(n) = val.as_u64() {
        return usize::try_from(n).map_err(|_| Error::invalid_value(key, Rule::OutOfRange));
    }
    match val.as_i64() {
        Some(_) => Err(Error::invalid_value(key, Rule::Negative)),
        None => Err(Error::invalid_type(key, "integer")),
    }
}
