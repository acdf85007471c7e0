use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use crate::domain::{AuctionDto, AuctionObject, AuctionRepository, AuctionStatus, UserRepository};
use crate::services::validation::{failing_labels, ValidationConfig, Validator};
use crate::utils::errors::{AuctionError, RepositoryError, ValidationError};

/// `AuctionService` validates caller input, builds draft auctions and looks
/// auctions up together with their owner. Persistence is left to the injected
/// repositories.
pub struct AuctionService {
    auction_repo: Arc<dyn AuctionRepository>,
    user_repo: Arc<dyn UserRepository>,

    /// Applied to `AuctionDto::name`, in order
    name_validators: Vec<Box<dyn Validator>>,

    /// Applied to `AuctionDto::description`, in order
    description_validators: Vec<Box<dyn Validator>>,
}

impl AuctionService {
    /// Creates a service with no validators configured.
    pub fn new(
        auction_repo: Arc<dyn AuctionRepository>,
        user_repo: Arc<dyn UserRepository>,
    ) -> Self {
        AuctionService {
            auction_repo,
            user_repo,
            name_validators: Vec::new(),
            description_validators: Vec::new(),
        }
    }

    /// Creates a service with the validators described by `config`.
    pub fn from_config(
        auction_repo: Arc<dyn AuctionRepository>,
        user_repo: Arc<dyn UserRepository>,
        config: &ValidationConfig,
    ) -> Self {
        Self::new(auction_repo, user_repo)
            .with_name_validators(config.name.validators())
            .with_description_validators(config.description.validators())
    }

    pub fn with_name_validators(mut self, validators: Vec<Box<dyn Validator>>) -> Self {
        self.name_validators.extend(validators);
        self
    }

    pub fn with_description_validators(mut self, validators: Vec<Box<dyn Validator>>) -> Self {
        self.description_validators.extend(validators);
        self
    }

    pub fn with_name_validator(mut self, validator: impl Validator + 'static) -> Self {
        self.name_validators.push(Box::new(validator));
        self
    }

    pub fn with_description_validator(mut self, validator: impl Validator + 'static) -> Self {
        self.description_validators.push(Box::new(validator));
        self
    }

    // ------------------------------------------------------------------------
    // Operations
    // ------------------------------------------------------------------------

    /// Validates `dto`, builds a draft auction from it and hands it to the
    /// auction repository. Returns whatever the repository stored.
    ///
    /// Every validator runs; on failure the error lists all failing labels,
    /// name validators first. Nothing is persisted in that case.
    #[instrument(skip_all, fields(owner_id = %dto.owner_id, up_time = %dto.up_time))]
    pub async fn create_auction(&self, dto: AuctionDto) -> Result<AuctionObject, AuctionError> {
        let draft = self.construct_draft_auction(dto)?;
        debug!(auction_id = %draft.auction_id, end_date = %draft.end_date, "Draft auction built");

        let auction = self.auction_repo.create_auction(draft).await?;
        info!(auction_id = %auction.auction_id, "Draft auction created");

        Ok(auction)
    }

    /// Fetches an auction and attaches its owner. Repository failures are
    /// returned unchanged.
    #[instrument(skip(self))]
    pub async fn get_auction(&self, auction_id: &str) -> Result<AuctionObject, RepositoryError> {
        let mut auction = self.auction_repo.get_auction(auction_id).await?;
        let owner = self.user_repo.get_user(&auction.owner_id).await?;
        debug!(owner_id = %owner.user_id, "Owner attached");

        auction.owner = Some(owner);
        Ok(auction)
    }

    // ------------------------------------------------------------------------
    // Helpers
    // ------------------------------------------------------------------------

    fn validate(&self, dto: &AuctionDto) -> Result<(), ValidationError> {
        let mut errors = failing_labels(&self.name_validators, &dto.name);
        let description_errors = failing_labels(&self.description_validators, &dto.description);
        errors.extend(description_errors);

        match ValidationError::from_labels(errors) {
            Some(err) => {
                warn!(errors = ?err.errors(), "Auction rejected by validators");
                Err(err)
            }
            None => Ok(()),
        }
    }

    fn construct_draft_auction(&self, dto: AuctionDto) -> Result<AuctionObject, AuctionError> {
        self.validate(&dto)?;

        let Some(end_date) = dto.up_time.end_date(dto.start_date) else {
            return Err(AuctionError::EndDateOutOfRange {
                start_date: dto.start_date,
                up_time: dto.up_time,
            });
        };

        Ok(AuctionObject {
            auction_id: self.auction_repo.get_new_id(),
            name: dto.name,
            description: dto.description,
            owner_id: dto.owner_id,
            status: AuctionStatus::Draft,
            start_date: dto.start_date,
            end_date,
            owner: None,
            current_bid: None,
            up_time: Some(dto.up_time),
        })
    }
}
