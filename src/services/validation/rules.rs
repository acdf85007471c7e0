use serde::Deserialize;

use super::Validator;

/// Rejects empty or whitespace-only input.
#[derive(Debug, Clone, Copy, Default)]
pub struct NotBlank;

impl Validator for NotBlank {
    fn label(&self) -> &str {
        "not_blank"
    }

    fn validate(&self, input: &str) -> bool {
        !input.trim().is_empty()
    }
}

/// Requires at least `n` characters.
#[derive(Debug, Clone, Copy)]
pub struct MinLength(pub usize);

impl Validator for MinLength {
    fn label(&self) -> &str {
        "min_length"
    }

    fn validate(&self, input: &str) -> bool {
        input.chars().count() >= self.0
    }
}

/// Allows at most `n` characters.
#[derive(Debug, Clone, Copy)]
pub struct MaxLength(pub usize);

impl Validator for MaxLength {
    fn label(&self) -> &str {
        "max_length"
    }

    fn validate(&self, input: &str) -> bool {
        input.chars().count() <= self.0
    }
}

/// Rules for one string field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FieldRules {
    pub not_blank: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
}

impl FieldRules {
    /// Builds the validators in a fixed order: not_blank, min_length, max_length.
    pub fn validators(&self) -> Vec<Box<dyn Validator>> {
        let mut validators: Vec<Box<dyn Validator>> = Vec::new();
        if self.not_blank {
            validators.push(Box::new(NotBlank));
        }
        if let Some(min) = self.min_length {
            validators.push(Box::new(MinLength(min)));
        }
        if let Some(max) = self.max_length {
            validators.push(Box::new(MaxLength(max)));
        }
        validators
    }
}

/// Declarative validator setup for auction names and descriptions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidationConfig {
    pub name: FieldRules,
    pub description: FieldRules,
}
