pub mod catalog;
pub mod dedup;
pub mod place;

pub use catalog::*;
pub use dedup::*;
pub use place::*;
