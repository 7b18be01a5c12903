use ::std::fmt;
use ::std::str::FromStr;

use crate::error::NameError;

const MIN_GIVEN_NAMES: usize = 1;
const MAX_GIVEN_NAMES: usize = 3;

/// A validated person name: one to three given names followed by a last name.
///
/// Two names are equal when their rendered forms are equal. Tokens never hold
/// whitespace, so comparing the parts is the same as comparing the text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FullName {
    given_names: Vec<String>,
    last_name: String,
}

impl FullName {
    /// Validates a raw line and builds a name from it.
    ///
    /// `None` stands for a missing line and fails with [`NameError::NullInput`].
    pub fn create(raw: Option<&str>) -> Result<Self, NameError> {
        let raw = raw.ok_or(NameError::NullInput)?;

        if raw.trim().is_empty() {
            return Err(NameError::EmptyInput);
        }

        let mut parts: Vec<&str> = raw.split_whitespace().collect();
        if parts.len() < 2 {
            return Err(NameError::MissingNamePart(raw.to_string()));
        }

        let last_name = parts.pop().map(str::to_string).unwrap_or_default();

        // Unreachable below the minimum after the check above; kept for parity.
        if !(MIN_GIVEN_NAMES..=MAX_GIVEN_NAMES).contains(&parts.len()) {
            return Err(NameError::TooManyGivenNames(raw.to_string()));
        }

        Ok(Self {
            given_names: parts.into_iter().map(str::to_string).collect(),
            last_name,
        })
    }

    /// Given names joined with single spaces.
    pub fn given_name(&self) -> String {
        self.given_names.join(" ")
    }

    pub fn given_names(&self) -> &[String] {
        &self.given_names
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }
}

impl fmt::Display for FullName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.given_name(), self.last_name)
    }
}

impl FromStr for FullName {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::create(Some(s))
    }
}

impl TryFrom<&str> for FullName {
    type Error = NameError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}
