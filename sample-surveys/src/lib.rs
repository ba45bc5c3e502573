//! Sample listing data for demos and tests.

pub mod catalog;
pub mod created;
pub mod participated;

pub use catalog::explore_catalog;
pub use created::created;
pub use participated::participated;
