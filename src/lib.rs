pub mod args;
pub mod config;
pub mod error;
pub mod handicap;
pub mod ledger;
pub mod model;
pub mod round;
pub mod settle;
pub mod view;
pub mod wager;

pub use error::CoreError;
pub use settle::{assign_missing_pairings, settle_group};
