pub mod rules;

use std::fmt;

pub use rules::{FieldRules, MaxLength, MinLength, NotBlank, ValidationConfig};

/// A business rule applied to a single string field.
///
/// On failure the validator's label is reported, never the rejected value.
pub trait Validator: Send + Sync {
    fn label(&self) -> &str;

    fn validate(&self, input: &str) -> bool;
}

/// Adapts a plain predicate into a labelled [`Validator`].
pub struct FnValidator<F> {
    label: String,
    predicate: F,
}

impl<F> FnValidator<F>
where
    F: Fn(&str) -> bool + Send + Sync,
{
    pub fn new(label: impl Into<String>, predicate: F) -> Self {
        FnValidator {
            label: label.into(),
            predicate,
        }
    }
}

impl<F> Validator for FnValidator<F>
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn label(&self) -> &str {
        &self.label
    }

    fn validate(&self, input: &str) -> bool {
        (self.predicate)(input)
    }
}

impl<F> fmt::Debug for FnValidator<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnValidator")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

/// Boxes a predicate as a validator.
pub fn validator<F>(label: impl Into<String>, predicate: F) -> Box<dyn Validator>
where
    F: Fn(&str) -> bool + Send + Sync + 'static,
{
    Box::new(FnValidator::new(label, predicate))
}

/// Runs every validator against `input` and returns the labels of those that
/// rejected it, in order.
pub fn failing_labels(validators: &[Box<dyn Validator>], input: &str) -> Vec<String> {
    validators
        .iter()
        .filter(|v| !v.validate(input))
        .map(|v| v.label().to_string())
        .collect()
}
