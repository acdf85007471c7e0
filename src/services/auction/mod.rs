pub mod service;

pub use service::AuctionService;
