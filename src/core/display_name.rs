use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::config::DisplayNameRules;
use crate::error::ValidationError;

/// A user chosen, off-ledger name of an account. Trimmed, never empty.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DisplayName {
    value: String,
}

impl DisplayName {
    /// Validates `value` against the default rules.
    pub fn new(value: &str) -> Result<Self, ValidationError> {
        Self::with_rules(value, &DisplayNameRules::default())
    }

    pub fn with_rules(value: &str, rules: &DisplayNameRules) -> Result<Self, ValidationError> {
        let value = value.trim();
        if value.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if value.len() > rules.max_len {
            return Err(ValidationError::NameTooLong {
                len: value.len(),
                max: rules.max_len,
            });
        }
        Ok(Self {
            value: value.to_string(),
        })
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl TryFrom<&str> for DisplayName {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        DisplayName::new(value)
    }
}

impl fmt::Display for DisplayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl Serialize for DisplayName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.value)
    }
}

impl<'de> Deserialize<'de> for DisplayName {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let s = String::deserialize(d)?;
        DisplayName::with_rules(&s, &DisplayNameRules::widest()).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_name() {
        let name = DisplayName::new("Main account").unwrap();
        assert_eq!(name.value(), "Main account");
        assert_eq!(name.to_string(), "Main account");
    }

    #[test]
    fn test_empty_is_invalid() {
        assert_eq!(DisplayName::new(""), Err(ValidationError::EmptyName));
    }

    #[test]
    fn test_spaces_trimmed_into_empty_is_invalid() {
        assert_eq!(DisplayName::new("   "), Err(ValidationError::EmptyName));
    }

    #[test]
    fn test_surrounding_whitespace_trimmed() {
        assert_eq!(DisplayName::new("  Alice ").unwrap().value(), "Alice");
    }

    #[test]
    fn test_max_len_is_ok() {
        assert!(DisplayName::new("0|RDX|Dev Nano S|Some very lon").is_ok());
    }

    #[test]
    fn test_too_long_is_invalid() {
        assert_eq!(
            DisplayName::new("this is a much much too long display name"),
            Err(ValidationError::NameTooLong { len: 41, max: 30 })
        );
    }

    #[test]
    fn test_custom_rules() {
        let rules = DisplayNameRules { max_len: 5 };
        assert!(DisplayName::with_rules("Alice", &rules).is_ok());
        assert_eq!(
            DisplayName::with_rules("Satoshi", &rules),
            Err(ValidationError::NameTooLong { len: 7, max: 5 })
        );
    }

    #[test]
    fn test_json_revalidates() {
        let name: DisplayName = serde_json::from_str("\"Bob\"").unwrap();
        assert_eq!(name.value(), "Bob");
        assert_eq!(serde_json::to_string(&name).unwrap(), "\"Bob\"");
        assert!(serde_json::from_str::<DisplayName>("\"  \"").is_err());
    }

    #[test]
    fn test_json_accepts_names_allowed_by_wider_config() {
        let long = "A name that is longer than thirty bytes";
        let name: DisplayName = serde_json::from_str(&format!("\"{long}\"")).unwrap();
        assert_eq!(name.value(), long);

        let too_long = format!("\"{}\"", "x".repeat(256));
        assert!(serde_json::from_str::<DisplayName>(&too_long).is_err());
    }
}
