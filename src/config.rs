use std::path::Path;

use crate::error::ConfigError;

/// Hill-climber hyperparameters.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct HillClimberConfig {
    /// Length of the retained action plan.
    pub sequence_length: usize,
    /// Per-position probability of resampling a gene when perturbing.
    pub resample_probability: f64,
}

impl Default for HillClimberConfig {
    fn default() -> Self {
        HillClimberConfig {
            sequence_length: 5,
            resample_probability: 0.5,
        }
    }
}

/// Genetic-search hyperparameters.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GeneticConfig {
    /// Number of sequences per generation. Must be even: the next generation
    /// is built two members at a time.
    pub population_size: usize,
    /// Length of each action sequence.
    pub sequence_length: usize,
    /// Probability that a pairing round performs crossover instead of
    /// copying both parents.
    pub crossover_probability: f64,
    /// Per-member probability of a single-gene mutation each generation.
    pub mutation_probability: f64,
}

impl Default for GeneticConfig {
    fn default() -> Self {
        GeneticConfig {
            population_size: 8,
            sequence_length: 5,
            crossover_probability: 0.7,
            mutation_probability: 0.1,
        }
    }
}

/// Random-sequence baseline hyperparameters.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RandomSequenceConfig {
    pub sequence_length: usize,
}

impl Default for RandomSequenceConfig {
    fn default() -> Self {
        RandomSequenceConfig {
            sequence_length: 10,
        }
    }
}

/// Arena (episode runner) parameters.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    /// Successor-call budget granted per decision step.
    pub successor_budget: u32,
    /// Hard cap on frames per episode.
    pub frame_cap: u32,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        ArenaConfig {
            successor_budget: 300,
            frame_cap: 1000,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub hill_climber: HillClimberConfig,
    pub genetic: GeneticConfig,
    pub random_sequence: RandomSequenceConfig,
    pub arena: ArenaConfig,
}

impl SearchConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: SearchConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            eprintln!(
                "Warning: config file '{}' not found, using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.hill_climber.sequence_length == 0 {
            return Err(ConfigError::Validation(
                "hill_climber.sequence_length must be > 0".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.hill_climber.resample_probability) {
            return Err(ConfigError::Validation(
                "hill_climber.resample_probability must be in [0, 1]".into(),
            ));
        }
        if self.genetic.population_size < 2 {
            return Err(ConfigError::Validation(
                "genetic.population_size must be >= 2".into(),
            ));
        }
        if self.genetic.population_size % 2 != 0 {
            return Err(ConfigError::Validation(
                "genetic.population_size must be even".into(),
            ));
        }
        if self.genetic.sequence_length == 0 {
            return Err(ConfigError::Validation(
                "genetic.sequence_length must be > 0".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.genetic.crossover_probability) {
            return Err(ConfigError::Validation(
                "genetic.crossover_probability must be in [0, 1]".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.genetic.mutation_probability) {
            return Err(ConfigError::Validation(
                "genetic.mutation_probability must be in [0, 1]".into(),
            ));
        }
        if self.random_sequence.sequence_length == 0 {
            return Err(ConfigError::Validation(
                "random_sequence.sequence_length must be > 0".into(),
            ));
        }
        if self.arena.frame_cap == 0 {
            return Err(ConfigError::Validation(
                "arena.frame_cap must be > 0".into(),
            ));
        }
        Ok(())
    }
}
