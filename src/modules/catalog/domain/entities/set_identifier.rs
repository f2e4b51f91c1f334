use crate::shared::errors::{AppError, AppResult};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Suffix appended when the user leaves out the variant number
pub const DEFAULT_VARIANT_SUFFIX: &str = "-1";

static NORMALIZED_FORM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^.+-\d+$").expect("static pattern is valid"));

/// Catalog set number in normalized `<number>-<variant>` form, e.g. `75192-1`.
///
/// Only constructible through [`SetIdentifier::normalize`], so every value matches
/// `^.+-\d+$`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SetIdentifier(String);

impl SetIdentifier {
    pub fn normalize(raw: &str) -> AppResult<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(AppError::empty_input());
        }

        if NORMALIZED_FORM.is_match(trimmed) {
            Ok(Self(trimmed.to_string()))
        } else {
            Ok(Self(format!("{}{}", trimmed, DEFAULT_VARIANT_SUFFIX)))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SetIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SetIdentifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for SetIdentifier {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::normalize(s)
    }
}

impl TryFrom<String> for SetIdentifier {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::normalize(&value)
    }
}

impl From<SetIdentifier> for String {
    fn from(value: SetIdentifier) -> Self {
        value.0
    }
}
