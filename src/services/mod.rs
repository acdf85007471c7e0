pub mod auction;
pub mod validation;
