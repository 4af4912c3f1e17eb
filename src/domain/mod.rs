//! Input validation for the mail domain and DKIM selectors.
//!
//! Key items:
//! - [`Domain`] - a normalized, validated mail domain
//! - [`SelectorSpec`] - either "discover selectors" or an explicit list
//! - [`selector_dns_name`] - builds `<selector>._domainkey.<domain>`

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::config::{DKIM_DOMAIN_LABEL, DOMAIN_PATTERN, SELECTOR_PATTERN};
use crate::error_handling::ValidationError;

static DOMAIN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(DOMAIN_PATTERN).expect("DOMAIN_PATTERN is a valid regex - this is a programming error")
});

static SELECTOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(SELECTOR_PATTERN)
        .expect("SELECTOR_PATTERN is a valid regex - this is a programming error")
});

/// A mail domain under test.
///
/// Normalized on construction: surrounding whitespace and a trailing dot are
/// removed and the name is lowercased. Internationalized names must be given
/// in their punycode (`xn--`) form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Domain(String);

impl Domain {
    /// Validates and normalizes a domain name.
    ///
    /// # Errors
    ///
    /// - `ValidationError::EmptyDomain` if the input is empty or whitespace
    /// - `ValidationError::InvalidDomain` if it is not a dotted host name
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        let trimmed = trimmed.strip_suffix('.').unwrap_or(trimmed);
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyDomain);
        }

        let normalized = trimmed.to_ascii_lowercase();
        if !DOMAIN_RE.is_match(&normalized) {
            return Err(ValidationError::InvalidDomain(input.to_string()));
        }
        Ok(Domain(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Domain {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Which DKIM selectors to check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorSpec {
    /// No selector supplied; find them with the discovery service.
    Discover,
    /// One or more validated selector names, checked in this order.
    Explicit(Vec<String>),
}

impl SelectorSpec {
    /// Builds a spec from a single selector name.
    pub fn single(name: &str) -> Result<Self, ValidationError> {
        Self::from_names([name])
    }

    /// Builds a spec from a list of selector names.
    ///
    /// Names are trimmed; order is preserved.
    ///
    /// # Errors
    ///
    /// - `ValidationError::EmptySelectorList` if `names` is empty
    /// - `ValidationError::InvalidSelector` for a blank or malformed name
    pub fn from_names<I, S>(names: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names = names
            .into_iter()
            .map(|name| validate_selector(name.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        if names.is_empty() {
            return Err(ValidationError::EmptySelectorList);
        }
        Ok(SelectorSpec::Explicit(names))
    }

    /// Maps the optional selector list of a [`crate::Config`] to a spec.
    ///
    /// `None` means discovery; `Some` must hold at least one valid name.
    pub fn from_option(names: Option<&[String]>) -> Result<Self, ValidationError> {
        match names {
            None => Ok(SelectorSpec::Discover),
            Some(names) => Self::from_names(names),
        }
    }
}

fn validate_selector(name: &str) -> Result<String, ValidationError> {
    let trimmed = name.trim();
    if !SELECTOR_RE.is_match(trimmed) {
        return Err(ValidationError::InvalidSelector(name.to_string()));
    }
    Ok(trimmed.to_string())
}

/// Builds the DNS name under which a selector's DKIM key is published.
pub fn selector_dns_name(selector: &str, domain: &Domain) -> String {
    format!("{}.{}.{}", selector, DKIM_DOMAIN_LABEL, domain)
}
