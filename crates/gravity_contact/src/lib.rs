#![forbid(unsafe_code)]
//! gravity_contact: gravity-weighted neighbor contact model for spatial populations.
//!
//! Modules:
//! - population: the [`population::Located`] trait and an id-indexed [`population::Population`]
//! - spatial: bounded-radius nearest-neighbor indices (k-d tree, linear scan)
//! - weighted: weighted random draws and the [`weighted::WeightedSampler`] seam
//! - contact: configuration, model construction, and contact sampling
pub mod contact;
pub mod error;
pub mod population;
pub mod spatial;
pub mod weighted;

/// Convenient re-exports for common types. Import with `use gravity_contact::prelude::*;`.
pub mod prelude {
    pub use crate::contact::{ContactSummary, GravityConfig, GravityContactModel};
    pub use crate::error::{Error, Result};
    pub use crate::population::{Individual, Located, Population};
    pub use crate::spatial::{KdTree, LinearScanIndex, Neighbor, SpatialIndex};
    pub use crate::weighted::{pick_weighted_index, WeightedSampler};
}
