use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::{CategoryTag, Item};

/// Rows produced for a category that has no saved inventory yet.
pub const SEED_ROWS: u32 = 5;

/// Produces placeholder inventory for unvisited categories.
#[derive(Debug, Clone)]
pub struct CategoryDataGenerator<R = StdRng> {
    rng: R,
}

impl CategoryDataGenerator<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl Default for CategoryDataGenerator<StdRng> {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl<R: Rng> CategoryDataGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn generate(&mut self, category: CategoryTag) -> Vec<Item> {
        let key = category.key();
        (1..=SEED_ROWS)
            .map(|n| Item {
                id: n,
                item: format!("{key} Item {n}"),
                quantity: self.rng.gen_range(1..=100),
                description: format!("Description for {key} Item {n}"),
                notes: format!("Notes for {key} Item {n}"),
            })
            .collect()
    }
}
