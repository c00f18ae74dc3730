use crate::consts::DIGIT_RE;
use crate::error::{Error, Result, Rule};

/// Validate a base name or extension: at least one character and no dots.
pub fn validate_component(param: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::invalid_value(param, Rule::Empty));
    }
    if value.contains('.') {
        return Err(Error::invalid_value(param, Rule::ContainsDot));
    }
    tracing::trace!(param, value, "component ok");
    Ok(())
}

/// Validate a separator: non-empty, no dots and no digits.
pub fn validate_separator(value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::invalid_value("separator", Rule::Empty));
    }
    if value.contains('.') {
        return Err(Error::invalid_value("separator", Rule::ContainsDot));
    }
    if DIGIT_RE.is_match(value) {
        return Err(Error::invalid_value("separator", Rule::ContainsDigit));
    }
    Ok(())
}

/// Pick the explicit name or fall back to the default. A name is required.
pub fn resolve_name<'a>(explicit: Option<&'a str>, default: Option<&'a str>) -> Result<&'a str> {
    match (explicit, default) {
        (Some(name), _) => {
            validate_component("name", name)?;
            Ok(name)
        }
        (None, Some(name)) => Ok(name),
        (None, None) => Err(Error::MissingRequiredValue {
            param: "name".into(),
        }),
    }
}

/// Pick the explicit ext or fall back to the default. No ext at all is valid.
pub fn resolve_ext<'a>(
    explicit: Option<&'a str>,
    default: Option<&'a str>,
) -> Result<Option<&'a str>> {
    match explicit {
        Some(ext) => {
            validate_component("ext", ext)?;
            Ok(Some(ext))
        }
        None => Ok(default),
    }
}
