pub mod use_garden;
pub mod use_request_epoch;
