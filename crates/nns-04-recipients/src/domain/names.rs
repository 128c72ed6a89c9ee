//! Registrable name rules.

use crate::domain::errors::NameError;

/// Suffix every registered name carries.
pub const NAME_SUFFIX: &str = ".ntu";

/// Length and suffix constraints the engine enforces on names.
///
/// Lengths count characters and include the suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameRules {
    /// Required ending, e.g. `.ntu`.
    pub suffix: String,
    /// Shortest accepted name.
    pub min_len: usize,
    /// Longest accepted name.
    pub max_len: usize,
}

impl Default for NameRules {
    fn default() -> Self {
        Self {
            suffix: NAME_SUFFIX.to_string(),
            min_len: 5,
            max_len: 40,
        }
    }
}

impl NameRules {
    /// Check `name` after trimming. Checks run in a fixed order and the
    /// first failure is returned.
    pub fn validate(&self, name: &str) -> Result<(), NameError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(NameError::Empty);
        }

        let len = trimmed.chars().count();
        if len < self.min_len {
            return Err(NameError::TooShort { min: self.min_len });
        }
        if len > self.max_len {
            return Err(NameError::TooLong { max: self.max_len });
        }

        let Some(base) = trimmed.strip_suffix(self.suffix.as_str()) else {
            return Err(NameError::MissingSuffix {
                suffix: self.suffix.clone(),
            });
        };
        if base.is_empty() {
            return Err(NameError::BareSuffix {
                suffix: self.suffix.clone(),
            });
        }

        Ok(())
    }

    /// Lowercase, trim and append the suffix if missing. Empty stays empty.
    pub fn format(&self, input: &str) -> String {
        let lowered = input.trim().to_lowercase();
        if lowered.is_empty() || lowered.ends_with(self.suffix.as_str()) {
            lowered
        } else {
            format!("{lowered}{}", self.suffix)
        }
    }

    /// `name` without its suffix.
    pub fn base<'a>(&self, name: &'a str) -> &'a str {
        name.strip_suffix(self.suffix.as_str()).unwrap_or(name)
    }

    /// Case-insensitive suffix test.
    pub fn has_suffix(&self, input: &str) -> bool {
        input.to_lowercase().ends_with(&self.suffix.to_lowercase())
    }
}

/// Validate against the default rules.
pub fn validate_name(name: &str) -> Result<(), NameError> {
    NameRules::default().validate(name)
}

/// Format against the default rules.
pub fn format_name(input: &str) -> String {
    NameRules::default().format(input)
}

/// Strip the default suffix.
pub fn base_name(name: &str) -> &str {
    name.strip_suffix(NAME_SUFFIX).unwrap_or(name)
}
