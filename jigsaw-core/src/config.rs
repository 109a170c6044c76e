use crate::{error::ConfigError, grid::Border, types::FILLER_PIECE};
use rand::{SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};

/// Seed placement parameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeedConfig {
    pub num_pieces: u32,
    /// Minimum Euclidean distance between any two seeds.
    pub min_dist: f64,
    /// Random samples tried per seed before giving up on it.
    pub max_attempts: usize,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            num_pieces: 11,
            min_dist: 1.0,
            max_attempts: 1000,
        }
    }
}

impl SeedConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_pieces >= FILLER_PIECE {
            return Err(ConfigError::TooManyPieces {
                requested: self.num_pieces,
                max: FILLER_PIECE - 1,
            });
        }
        if self.min_dist.is_nan() || self.min_dist < 0.0 {
            return Err(ConfigError::MinDistance(self.min_dist));
        }
        Ok(())
    }
}

/// Growth and completion parameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GrowthConfig {
    /// Probability that an active cell claims its chosen neighbour.
    pub grow_prob: f64,
    /// Generation budget for [`crate::growth::run`].
    pub max_steps: usize,
    /// Generation budget for each filler region grown by the completer.
    pub filler_steps: usize,
}

impl Default for GrowthConfig {
    fn default() -> Self {
        Self {
            grow_prob: 1.0,
            max_steps: 500,
            filler_steps: 1000,
        }
    }
}

impl GrowthConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.grow_prob) {
            return Err(ConfigError::GrowProbability(self.grow_prob));
        }
        Ok(())
    }
}

/// Everything needed for a full generation run.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct JigsawConfig {
    /// Interior side length; the grid adds one border cell on each side.
    pub resolution: usize,
    pub border: Border,
    pub seeding: SeedConfig,
    pub growth: GrowthConfig,
    /// Seed for the random source. `None` draws one from the OS.
    pub rng_seed: Option<u64>,
}

impl Default for JigsawConfig {
    fn default() -> Self {
        Self {
            resolution: 50,
            border: Border::Rectangular,
            seeding: SeedConfig::default(),
            growth: GrowthConfig::default(),
            rng_seed: None,
        }
    }
}

impl JigsawConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.resolution == 0 {
            return Err(ConfigError::ZeroResolution);
        }
        self.seeding.validate()?;
        self.growth.validate()
    }

    pub fn rng(&self) -> StdRng {
        match self.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}
