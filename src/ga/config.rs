//! Sequencer configuration.
//!
//! [`SequencerConfig`] holds all parameters that control the evolutionary
//! loop of the waypoint sequencer.

use thiserror::Error;

/// Rejected [`SequencerConfig`] values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// The population must hold at least one chromosome.
    #[error("population_size must be at least 1, got {0}")]
    PopulationSize(usize),

    /// At least one generation must run.
    #[error("generations must be at least 1, got {0}")]
    Generations(usize),

    /// Tournaments need at least one contestant.
    #[error("tournament_size must be at least 1, got {0}")]
    TournamentSize(usize),

    /// Mutation rate is a probability.
    #[error("mutation_rate must lie in [0, 1], got {0}")]
    MutationRate(f64),
}

/// Configuration for the genetic waypoint sequencer.
///
/// # Defaults
///
/// ```
/// use u_route_engine::ga::SequencerConfig;
///
/// let config = SequencerConfig::default();
/// assert_eq!(config.population_size, 50);
/// assert_eq!(config.generations, 100);
/// assert_eq!(config.tournament_size, 3);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_route_engine::ga::SequencerConfig;
///
/// let config = SequencerConfig::default()
///     .with_population_size(80)
///     .with_generations(200)
///     .with_mutation_rate(0.1)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SequencerConfig {
    /// Number of chromosomes in each generation.
    pub population_size: usize,

    /// Exact number of generations to run. There is no early stop.
    pub generations: usize,

    /// Probability of applying swap mutation to each child (0.0–1.0).
    pub mutation_rate: f64,

    /// Contestants drawn (without replacement) per tournament.
    ///
    /// Capped at the population size when the population is smaller.
    pub tournament_size: usize,

    /// Whether to evaluate fitness in parallel using rayon.
    ///
    /// Ignored unless the `parallel` feature is enabled. Results are the
    /// same either way since fitness is a pure function.
    pub parallel: bool,

    /// Random seed used by the seeded entry points.
    ///
    /// `None` draws a fresh seed per run.
    pub seed: Option<u64>,
}

impl Default for SequencerConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            generations: 100,
            mutation_rate: 0.2,
            tournament_size: 3,
            parallel: false,
            seed: None,
        }
    }
}

impl SequencerConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the mutation rate, clamped into `[0, 1]`.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Preset for interactive use: 30 chromosomes, 50 generations.
    pub fn fast() -> Self {
        Self {
            population_size: 30,
            generations: 50,
            ..Self::default()
        }
    }

    /// The default parameters (50 chromosomes, 100 generations).
    pub fn balanced() -> Self {
        Self::default()
    }

    /// Preset for many waypoints: 150 chromosomes, 400 generations.
    pub fn quality() -> Self {
        Self {
            population_size: 150,
            generations: 400,
            mutation_rate: 0.15,
            ..Self::default()
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size == 0 {
            return Err(ConfigError::PopulationSize(self.population_size));
        }
        if self.generations == 0 {
            return Err(ConfigError::Generations(self.generations));
        }
        if self.tournament_size == 0 {
            return Err(ConfigError::TournamentSize(self.tournament_size));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(ConfigError::MutationRate(self.mutation_rate));
        }
        Ok(())
    }
}
