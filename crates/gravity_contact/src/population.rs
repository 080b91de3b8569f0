//! Population container and the [`Located`] trait consumed by the contact model.
//!
//! A [`Population`] is an ordered, id-indexed list of individuals. Order matters:
//! the contact model's total-gravity vector is aligned with it.
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use glam::DVec2;
use mint::Vector2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Anything with a unique id and a 2D position.
pub trait Located {
    type Id: Clone + Eq + Hash + Debug;

    fn id(&self) -> &Self::Id;

    fn position(&self) -> Vector2<f64>;
}

/// A plain individual: an id plus a position in domain coordinates.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Individual<Id = String> {
    pub id: Id,
    pub position: DVec2,
}

impl<Id> Individual<Id> {
    pub fn new(id: impl Into<Id>, x: f64, y: f64) -> Self {
        Self::at(id, DVec2::new(x, y))
    }

    pub fn at(id: impl Into<Id>, position: DVec2) -> Self {
        Self {
            id: id.into(),
            position,
        }
    }
}

impl<Id: Clone + Eq + Hash + Debug> Located for Individual<Id> {
    type Id = Id;

    fn id(&self) -> &Id {
        &self.id
    }

    fn position(&self) -> Vector2<f64> {
        self.position.into()
    }
}

/// Ordered collection of individuals with lookup by id.
#[derive(Debug, Clone)]
pub struct Population<I: Located> {
    members: Vec<I>,
    index: HashMap<I::Id, usize>,
}

impl<I: Located> Population<I> {
    /// Creates a population, rejecting duplicate ids and non-finite positions.
    pub fn new(members: Vec<I>) -> Result<Self> {
        let mut index = HashMap::with_capacity(members.len());
        for (i, member) in members.iter().enumerate() {
            let p = member.position();
            if !p.x.is_finite() || !p.y.is_finite() {
                return Err(Error::InvalidPosition {
                    id: format!("{:?}", member.id()),
                });
            }
            if index.insert(member.id().clone(), i).is_some() {
                return Err(Error::DuplicateId {
                    id: format!("{:?}", member.id()),
                });
            }
        }
        Ok(Self { members, index })
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn as_slice(&self) -> &[I] {
        &self.members
    }

    pub fn iter(&self) -> std::slice::Iter<'_, I> {
        self.members.iter()
    }

    /// Looks up an individual by id.
    pub fn get(&self, id: &I::Id) -> Option<&I> {
        self.index_of(id).map(|i| &self.members[i])
    }

    /// Position of `id` in population order.
    pub fn index_of(&self, id: &I::Id) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn get_index(&self, index: usize) -> Option<&I> {
        self.members.get(index)
    }

    pub fn contains(&self, id: &I::Id) -> bool {
        self.index.contains_key(id)
    }

    pub fn into_inner(self) -> Vec<I> {
        self.members
    }
}

impl<'a, I: Located> IntoIterator for &'a Population<I> {
    type Item = &'a I;
    type IntoIter = std::slice::Iter<'a, I>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}
