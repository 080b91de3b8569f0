//! Gravity-weighted contact model built from a population snapshot.
//!
//! [`GravityContactModel`] queries a spatial index once per individual, turns each
//! distance into a gravity `distance ^ exponent`, and freezes the resulting
//! tables. Sampling afterwards only reads them.
pub mod config;
pub mod model;
pub mod summary;

pub use config::{GravityConfig, DEFAULT_EXPONENT, DEFAULT_MAX_DISTANCE};
pub use model::GravityContactModel;
pub use summary::ContactSummary;
