//! Seeded random terrain generation.
//!
//! Heights are drawn uniformly from an inclusive range using a ChaCha8
//! RNG seeded from [`FillConfig::seed`], so identical configurations
//! produce identical terrain on every platform.

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use crate::error::GridError;
use crate::grid::{Grid, Height};

/// Parameters for [`random_fill`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FillConfig {
    /// Lowest height generated (inclusive). Default: 0.
    pub min_height: Height,
    /// Highest height generated (inclusive). Default: 10.
    pub max_height: Height,
    /// RNG seed. Default: 0.
    pub seed: u64,
}

impl Default for FillConfig {
    fn default() -> Self {
        Self {
            min_height: 0,
            max_height: 10,
            seed: 0,
        }
    }
}

impl FillConfig {
    /// Check that the height range is non-empty.
    pub fn validate(&self) -> Result<(), GridError> {
        if self.min_height > self.max_height {
            return Err(GridError::InvalidHeightRange {
                min: self.min_height,
                max: self.max_height,
            });
        }
        Ok(())
    }
}

/// Generate a `rows x cols` grid of uniformly random heights.
///
/// # Examples
///
/// ```
/// use basin_core::{random_fill, FillConfig};
///
/// let config = FillConfig { seed: 7, ..FillConfig::default() };
/// let a = random_fill(4, 5, &config).unwrap();
/// let b = random_fill(4, 5, &config).unwrap();
/// assert_eq!(a, b);
/// assert!(a.as_slice().iter().all(|&h| h <= 10));
/// ```
pub fn random_fill(rows: usize, cols: usize, config: &FillConfig) -> Result<Grid, GridError> {
    config.validate()?;
    let len = rows.checked_mul(cols).unwrap_or(0);
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let cells = (0..len)
        .map(|_| rng.gen_range(config.min_height..=config.max_height))
        .collect();
    Grid::new(rows, cols, cells)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heights_stay_in_range() {
        let config = FillConfig {
            min_height: 3,
            max_height: 5,
            seed: 11,
        };
        let g = random_fill(20, 20, &config).unwrap();
        assert!(g.as_slice().iter().all(|h| (3..=5).contains(h)));
    }

    #[test]
    fn different_seeds_differ() {
        let a = random_fill(10, 10, &FillConfig::default()).unwrap();
        let b = random_fill(
            10,
            10,
            &FillConfig {
                seed: 1,
                ..FillConfig::default()
            },
        )
        .unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn degenerate_range_is_constant() {
        let config = FillConfig {
            min_height: 4,
            max_height: 4,
            seed: 0,
        };
        let g = random_fill(3, 3, &config).unwrap();
        assert_eq!(g, Grid::filled(3, 3, 4).unwrap());
    }

    #[test]
    fn inverted_range_is_rejected() {
        let config = FillConfig {
            min_height: 5,
            max_height: 1,
            seed: 0,
        };
        assert_eq!(
            random_fill(2, 2, &config),
            Err(GridError::InvalidHeightRange { min: 5, max: 1 })
        );
    }

    #[test]
    fn empty_shape_is_rejected() {
        assert!(matches!(
            random_fill(0, 4, &FillConfig::default()),
            Err(GridError::EmptyGrid { .. })
        ));
    }
}
