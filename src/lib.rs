pub mod domain;
pub mod services;
pub mod utils;

pub use domain::{
    AuctionDto, AuctionObject, AuctionRepository, AuctionStatus, AuctionUpTime, IdGenerator,
    UserObject, UserRepository,
};
pub use services::auction::AuctionService;
pub use utils::errors::{AuctionError, RepositoryError, ValidationError};
