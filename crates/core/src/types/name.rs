//! Colleague name type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`ColleagueName`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum NameError {
    /// The input string is empty after trimming.
    #[error("name cannot be empty")]
    Empty,
    /// The input string is too long.
    #[error("name must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
}

/// A colleague's display name.
///
/// Names double as login identifiers, so each colleague's name is
/// unique and kept short. Parsing trims surrounding whitespace.
///
/// ## Constraints
///
/// - Length: 1-64 characters after trimming
///
/// ## Examples
///
/// ```
/// use lunchbox_core::ColleagueName;
///
/// assert!(ColleagueName::parse("Ada").is_ok());
/// assert!(ColleagueName::parse("  Ada  ").is_ok()); // trimmed
///
/// assert!(ColleagueName::parse("").is_err());
/// assert!(ColleagueName::parse("   ").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct ColleagueName(String);

impl ColleagueName {
    /// Maximum length of a colleague name.
    pub const MAX_LENGTH: usize = 64;

    /// Parse a `ColleagueName` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the trimmed input is empty or longer than
    /// 64 characters.
    pub fn parse(s: &str) -> Result<Self, NameError> {
        let s = s.trim();

        if s.is_empty() {
            return Err(NameError::Empty);
        }

        if s.len() > Self::MAX_LENGTH {
            return Err(NameError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `ColleagueName` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ColleagueName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ColleagueName {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for ColleagueName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_names() {
        assert!(ColleagueName::parse("Ada").is_ok());
        assert!(ColleagueName::parse("Grace Hopper").is_ok());
        assert!(ColleagueName::parse("jean-luc").is_ok());
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let name = ColleagueName::parse("  Ada  ").unwrap();
        assert_eq!(name.as_str(), "Ada");
    }

    #[test]
    fn test_parse_empty() {
        assert!(matches!(ColleagueName::parse(""), Err(NameError::Empty)));
        assert!(matches!(ColleagueName::parse("   "), Err(NameError::Empty)));
    }

    #[test]
    fn test_parse_too_long() {
        let long = "a".repeat(ColleagueName::MAX_LENGTH + 1);
        assert!(matches!(
            ColleagueName::parse(&long),
            Err(NameError::TooLong { .. })
        ));
    }

    #[test]
    fn test_parse_max_length_accepted() {
        let max = "a".repeat(ColleagueName::MAX_LENGTH);
        assert!(ColleagueName::parse(&max).is_ok());
    }

    #[test]
    fn test_display() {
        let name = ColleagueName::parse("Ada").unwrap();
        assert_eq!(format!("{name}"), "Ada");
    }

    #[test]
    fn test_from_str() {
        let name: ColleagueName = "Ada".parse().unwrap();
        assert_eq!(name.as_str(), "Ada");
    }

    #[test]
    fn test_serde_roundtrip() {
        let name = ColleagueName::parse("Ada").unwrap();
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, "\"Ada\"");

        let parsed: ColleagueName = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, name);
    }

    #[test]
    fn test_into_inner() {
        let name = ColleagueName::parse("Ada").unwrap();
        assert_eq!(name.into_inner(), "Ada");
    }
}
