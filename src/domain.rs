use std::fmt;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::errors::RepositoryError;

/// Lifecycle state of an auction.
///
/// Progression is linear: `Draft -> Open -> Closed`. A cancelled auction is
/// closed; cancellation details live in a separate record so that no state is
/// ever skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuctionStatus {
    Draft,
    Open,
    Closed,
}

impl AuctionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuctionStatus::Draft => "draft",
            AuctionStatus::Open => "open",
            AuctionStatus::Closed => "closed",
        }
    }

    /// Returns the status that follows this one, or `None` once closed.
    pub fn next(&self) -> Option<AuctionStatus> {
        match self {
            AuctionStatus::Draft => Some(AuctionStatus::Open),
            AuctionStatus::Open => Some(AuctionStatus::Closed),
            AuctionStatus::Closed => None,
        }
    }

    pub fn can_transition_to(&self, other: AuctionStatus) -> bool {
        self.next() == Some(other)
    }
}

impl fmt::Display for AuctionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How long an auction stays up once started. Only these durations exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuctionUpTime {
    #[serde(rename = "1d")]
    OneDay,
    #[serde(rename = "3d")]
    ThreeDays,
    #[serde(rename = "7d")]
    SevenDays,
    #[serde(rename = "14d")]
    FourteenDays,
    #[serde(rename = "30d")]
    ThirtyDays,
}

impl AuctionUpTime {
    pub const ALL: [AuctionUpTime; 5] = [
        AuctionUpTime::OneDay,
        AuctionUpTime::ThreeDays,
        AuctionUpTime::SevenDays,
        AuctionUpTime::FourteenDays,
        AuctionUpTime::ThirtyDays,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AuctionUpTime::OneDay => "1d",
            AuctionUpTime::ThreeDays => "3d",
            AuctionUpTime::SevenDays => "7d",
            AuctionUpTime::FourteenDays => "14d",
            AuctionUpTime::ThirtyDays => "30d",
        }
    }

    pub fn days(&self) -> i64 {
        match self {
            AuctionUpTime::OneDay => 1,
            AuctionUpTime::ThreeDays => 3,
            AuctionUpTime::SevenDays => 7,
            AuctionUpTime::FourteenDays => 14,
            AuctionUpTime::ThirtyDays => 30,
        }
    }

    /// Computes when an auction starting at `start_date` ends.
    /// `None` only if the result falls outside the representable date range.
    pub fn end_date(&self, start_date: DateTime<Utc>) -> Option<DateTime<Utc>> {
        start_date.checked_add_signed(Duration::days(self.days()))
    }
}

impl fmt::Display for AuctionUpTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user as handed out by the user repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserObject {
    pub user_id: UserId,
    pub name: String,
    pub email: String,
    /// Opaque storage version marker.
    pub snapshot_id: String,
}

/// Business auction object.
///
/// `end_date` is always `start_date + up_time`, and `current_bid` is `None`
/// while the auction is a draft. `owner` is only filled in on lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuctionObject {
    pub auction_id: AuctionId,
    pub name: String,
    pub description: String,
    pub owner_id: UserId,
    pub status: AuctionStatus,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub owner: Option<UserObject>,
    pub current_bid: Option<f64>,
    pub up_time: Option<AuctionUpTime>,
}

impl AuctionObject {
    pub fn is_draft(&self) -> bool {
        self.status == AuctionStatus::Draft
    }
}

/// Caller input for creating an auction. `auction_id` is ignored on create;
/// the repository hands out identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuctionDto {
    pub name: String,
    pub description: String,
    pub owner_id: UserId,
    pub start_date: DateTime<Utc>,
    pub up_time: AuctionUpTime,
    #[serde(default)]
    pub auction_id: Option<AuctionId>,
}

// ------------------------------------------------------------------------
// Type aliases
// ------------------------------------------------------------------------

pub type AuctionId = String;
pub type UserId = String;

// ------------------------------------------------------------------------
// Repository Traits
// ------------------------------------------------------------------------

pub trait IdGenerator: Send + Sync {
    fn generate_id(&self) -> String;
}

#[async_trait]
pub trait AuctionRepository: Send + Sync {
    fn get_new_id(&self) -> AuctionId;

    /// Stores a new auction. Implementations may return an enriched copy.
    async fn create_auction(
        &self,
        auction: AuctionObject,
    ) -> Result<AuctionObject, RepositoryError>;

    async fn get_auction(&self, auction_id: &str) -> Result<AuctionObject, RepositoryError>;

    async fn update_auction(
        &self,
        auction: AuctionObject,
    ) -> Result<AuctionObject, RepositoryError>;

    async fn delete_auction(&self, auction_id: &str) -> Result<(), RepositoryError>;
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    fn get_new_id(&self) -> UserId;

    async fn get_user(&self, user_id: &str) -> Result<UserObject, RepositoryError>;
}
