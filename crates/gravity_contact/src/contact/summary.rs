//! Aggregate statistics over a built contact model.

/// Counts and totals describing a [`crate::contact::GravityContactModel`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ContactSummary {
    /// Number of individuals in the model.
    pub individuals: usize,
    /// Number of directed neighbor links.
    pub links: usize,
    /// Individuals without any neighbor.
    pub isolated: usize,
    /// Largest neighbor count of any individual.
    pub max_neighbors: usize,
    /// Sum of all total-gravity entries.
    pub gravity_mass: f64,
}

impl ContactSummary {
    pub(crate) fn from_tables(gravities: &[Box<[f64]>], totals: &[f64]) -> Self {
        let mut summary = Self {
            individuals: totals.len(),
            gravity_mass: totals.iter().fold(0.0, |acc, g| acc + g),
            ..Default::default()
        };
        for row in gravities {
            summary.links += row.len();
            summary.max_neighbors = summary.max_neighbors.max(row.len());
            if row.is_empty() {
                summary.isolated += 1;
            }
        }
        summary
    }

    /// Mean number of neighbors per individual; zero for an empty model.
    pub fn mean_neighbors(&self) -> f64 {
        if self.individuals == 0 {
            return 0.0;
        }
        self.links as f64 / self.individuals as f64
    }
}
