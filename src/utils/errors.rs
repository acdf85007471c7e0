use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::domain::AuctionUpTime;

/// Failures of the auction workflow.
#[derive(Error, Debug)]
pub enum AuctionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("End date out of range: {start_date} + {up_time}")]
    EndDateOutOfRange {
        start_date: DateTime<Utc>,
        up_time: AuctionUpTime,
    },
}

/// Labels of every validator that rejected the input, in evaluation order.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Auction validation failed: {}", .errors.join(", "))]
pub struct ValidationError {
    errors: Vec<String>,
}

impl ValidationError {
    /// Returns `None` for an empty label list; a validation error always names
    /// at least one validator.
    pub fn from_labels(errors: Vec<String>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(Self { errors })
        }
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }
}

/// Errors raised by repository adapters.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Storage error: {0}")]
    Storage(String),
}

impl AuctionError {
    pub fn validation_errors(&self) -> Option<&[String]> {
        match self {
            AuctionError::Validation(err) => Some(err.errors()),
            _ => None,
        }
    }
}
