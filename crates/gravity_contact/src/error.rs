//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias. Variants cover
//! invalid configuration, malformed populations, unknown ids, and weighted draws
//! that have nothing to draw from.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("unknown individual '{id}'")]
    UnknownId { id: String },

    #[error("duplicate individual '{id}' in population")]
    DuplicateId { id: String },

    #[error("individual '{id}' has a non-finite position")]
    InvalidPosition { id: String },

    #[error("empty distribution: {context}")]
    EmptyDistribution { context: String },

    #[error("invalid weight {weight} at index {index}")]
    InvalidWeight { index: usize, weight: f64 },

    #[error("sampler picked index {index} from {len} weights")]
    IndexOutOfRange { index: usize, len: usize },
}

impl Error {
    pub(crate) fn unknown_id(id: &impl std::fmt::Debug) -> Self {
        Error::UnknownId {
            id: format!("{id:?}"),
        }
    }

    pub(crate) fn empty(context: impl Into<String>) -> Self {
        Error::EmptyDistribution {
            context: context.into(),
        }
    }

    /// Returns `true` for [`Error::EmptyDistribution`].
    pub fn is_empty_distribution(&self) -> bool {
        matches!(self, Error::EmptyDistribution { .. })
    }
}
