pub mod detail_resolver;
pub mod harvester;
pub mod places_client;
pub mod rate_limiter;
pub mod search_paginator;

#[cfg(test)]
pub mod testing;

pub use detail_resolver::*;
pub use harvester::*;
pub use places_client::*;
pub use rate_limiter::*;
pub use search_paginator::*;
