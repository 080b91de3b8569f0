//! The gravity contact model: frozen neighbor tables plus weighted sampling.
use glam::DVec2;
use tracing::{debug, info, warn};

use crate::contact::config::GravityConfig;
use crate::contact::summary::ContactSummary;
use crate::error::{Error, Result};
use crate::population::{Located, Population};
use crate::spatial::{KdTree, SpatialIndex};
use crate::weighted::WeightedSampler;

/// Per-individual neighbor and gravity tables built once from a population snapshot.
///
/// Tables are aligned with population order. For the individual at position
/// `i`, `neighbor_ids[i]` lists neighbors nearest first, `neighbor_gravities[i]`
/// holds the matching gravities, and `total_gravity[i]` is their sum.
#[derive(Debug, Clone)]
pub struct GravityContactModel<'p, I: Located> {
    population: &'p Population<I>,
    config: GravityConfig,
    neighbor_ids: Box<[Box<[I::Id]>]>,
    neighbor_gravities: Box<[Box<[f64]>]>,
    total_gravity: Box<[f64]>,
}

impl<'p, I: Located> GravityContactModel<'p, I> {
    /// Builds the model using a [`KdTree`] for neighbor queries.
    pub fn try_new(population: &'p Population<I>, config: GravityConfig) -> Result<Self> {
        Self::build_with_index::<KdTree<usize>>(population, config)
    }

    /// Builds the model with a caller-chosen spatial index.
    pub fn build_with_index<S: SpatialIndex<usize>>(
        population: &'p Population<I>,
        config: GravityConfig,
    ) -> Result<Self> {
        config.validate()?;
        if config.exponent > 0.0 {
            warn!(
                "Gravity exponent {} is positive; gravity will grow with distance.",
                config.exponent
            );
        }

        let members = population.as_slice();
        debug!(
            "Indexing {} individuals (max_distance {}, exponent {}).",
            members.len(),
            config.max_distance,
            config.exponent
        );

        let index = S::from_points(
            members
                .iter()
                .enumerate()
                .map(|(slot, member)| (DVec2::from(member.position()), slot))
                .collect(),
        );

        let k = members.len();
        let mut neighbor_ids = Vec::with_capacity(k);
        let mut neighbor_gravities = Vec::with_capacity(k);
        let mut total_gravity = Vec::with_capacity(k);

        for member in members {
            let origin = DVec2::from(member.position());
            let mut ids = Vec::new();
            let mut gravities = Vec::new();

            for hit in index.nearest(origin, k, config.max_distance) {
                // Zero distance is the individual itself (or someone standing on it).
                if hit.distance == 0.0 {
                    continue;
                }
                ids.push(members[*hit.payload].id().clone());
                gravities.push(config.gravity(hit.distance));
            }

            total_gravity.push(gravities.iter().fold(0.0, |acc, g| acc + g));
            neighbor_ids.push(ids.into_boxed_slice());
            neighbor_gravities.push(gravities.into_boxed_slice());
        }

        let model = Self {
            population,
            config,
            neighbor_ids: neighbor_ids.into_boxed_slice(),
            neighbor_gravities: neighbor_gravities.into_boxed_slice(),
            total_gravity: total_gravity.into_boxed_slice(),
        };

        let summary = model.summary();
        info!(
            "Contact model: {} individuals | {} links | {} isolated.",
            summary.individuals, summary.links, summary.isolated
        );

        Ok(model)
    }

    pub fn population(&self) -> &'p Population<I> {
        self.population
    }

    pub fn config(&self) -> &GravityConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.total_gravity.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total_gravity.is_empty()
    }

    fn slot(&self, id: &I::Id) -> Result<usize> {
        self.population
            .index_of(id)
            .ok_or_else(|| Error::unknown_id(id))
    }

    /// Neighbor ids of `id`, nearest first.
    pub fn neighbor_ids(&self, id: &I::Id) -> Result<&[I::Id]> {
        let slot = self.slot(id)?;
        Ok(&self.neighbor_ids[slot])
    }

    /// Gravities of `id`'s neighbors, aligned with [`Self::neighbor_ids`].
    pub fn neighbor_gravities(&self, id: &I::Id) -> Result<&[f64]> {
        let slot = self.slot(id)?;
        Ok(&self.neighbor_gravities[slot])
    }

    /// `(neighbor id, gravity)` pairs for `id`, nearest first.
    pub fn neighbors(&self, id: &I::Id) -> Result<impl Iterator<Item = (&I::Id, f64)> + '_> {
        let slot = self.slot(id)?;
        Ok(self.neighbor_ids[slot]
            .iter()
            .zip(self.neighbor_gravities[slot].iter().copied()))
    }

    /// Total gravity per individual, in population order.
    pub fn total_gravity(&self) -> &[f64] {
        &self.total_gravity
    }

    pub fn total_gravity_of(&self, id: &I::Id) -> Result<f64> {
        let slot = self.slot(id)?;
        Ok(self.total_gravity[slot])
    }

    /// Aggregate statistics over the frozen tables.
    pub fn summary(&self) -> ContactSummary {
        ContactSummary::from_tables(&self.neighbor_gravities, &self.total_gravity)
    }

    /// Draws an individual with probability proportional to its total gravity.
    ///
    /// Fails with [`Error::EmptyDistribution`] when nobody has a neighbor.
    pub fn sample_individual<S: WeightedSampler + ?Sized>(
        &self,
        sampler: &mut S,
    ) -> Result<&'p I> {
        if self.total_gravity.iter().all(|&g| g == 0.0) {
            return Err(Error::empty("no individual has a neighbor within max_distance"));
        }

        let slot = sampler.pick_index(&self.total_gravity)?;
        self.population
            .get_index(slot)
            .ok_or(Error::IndexOutOfRange {
                index: slot,
                len: self.total_gravity.len(),
            })
    }

    /// Draws a neighbor id of `id` with probability proportional to pairwise gravity.
    pub fn sample_neighbor_id<S: WeightedSampler + ?Sized>(
        &self,
        id: &I::Id,
        sampler: &mut S,
    ) -> Result<&I::Id> {
        let slot = self.slot(id)?;
        let ids = &self.neighbor_ids[slot];
        if ids.is_empty() {
            return Err(Error::empty(format!("individual {id:?} has no neighbors")));
        }

        let pick = sampler.pick_index(&self.neighbor_gravities[slot])?;
        ids.get(pick).ok_or(Error::IndexOutOfRange {
            index: pick,
            len: ids.len(),
        })
    }

    /// Like [`Self::sample_neighbor_id`], resolved to the individual.
    pub fn sample_neighbor<S: WeightedSampler + ?Sized>(
        &self,
        id: &I::Id,
        sampler: &mut S,
    ) -> Result<&'p I> {
        let neighbor = self.sample_neighbor_id(id, sampler)?;
        self.population
            .get(neighbor)
            .ok_or_else(|| Error::unknown_id(neighbor))
    }

    /// Draws an individual, then one of its neighbors.
    pub fn sample_contact<S: WeightedSampler + ?Sized>(
        &self,
        sampler: &mut S,
    ) -> Result<(&'p I, &'p I)> {
        let source = self.sample_individual(sampler)?;
        let target = self.sample_neighbor(source.id(), sampler)?;
        Ok((source, target))
    }
}
