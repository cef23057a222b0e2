pub mod course;
pub mod player;
pub mod result;
pub mod wager;

pub use course::*;
pub use player::*;
pub use result::*;
pub use wager::*;
