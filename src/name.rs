use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;

use crate::utils::{Error, Result};

/// Returns `true` when `name` starts with an uppercase ASCII letter followed
/// only by ASCII letters, digits or underscores.
pub fn is_valid_name(name: &str) -> bool {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"^[A-Z][A-Za-z0-9_]*$").expect("valid pattern"))
        .is_match(name)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentName(String);

impl TryFrom<String> for ComponentName {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if !is_valid_name(&value) {
            return Err(Error::InvalidName { name: value });
        }
        Ok(Self(value))
    }
}

impl FromStr for ComponentName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s.to_string())
    }
}

impl ComponentName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ComponentName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
