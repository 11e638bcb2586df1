//! Configuration System
//!
//! Loads tuning parameters from outbreak.toml for easy adjustment without
//! recompiling. All values have compiled-in defaults matching the original
//! model; validation rejects non-positive counts and probabilities outside
//! [0, 1] before a model is ever constructed.

use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Default tuning file path
pub const DEFAULT_TUNING_PATH: &str = "outbreak.toml";

/// Top-level configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub simulation: SimulationConfig,
    pub grid: GridConfig,
    pub population: PopulationConfig,
    pub combat: CombatConfig,
    pub infection: InfectionConfig,
    pub scavenging: ScavengingConfig,
}

/// Run-length parameters for the driver
#[derive(Debug, Clone, Deserialize)]
pub struct SimulationConfig {
    pub default_ticks: u64,
    pub snapshot_interval: u64,
}

/// Grid dimensions
#[derive(Debug, Clone, Deserialize)]
pub struct GridConfig {
    pub width: u32,
    pub height: u32,
}

/// Population seeding and reinforcement
#[derive(Debug, Clone, Deserialize)]
pub struct PopulationConfig {
    pub initial_population: u32,
    /// Fraction of the initial population converted to infected at
    /// construction, taken as a creation-order prefix.
    pub infected_fraction: f64,
    /// Starting ammunition for every newly created agent
    pub initial_shots: u32,
    /// Tick at which the one-time reinforcement batch arrives
    pub reinforcement_tick: u64,
    pub reinforcement_count: u32,
}

/// Combat parameters
#[derive(Debug, Clone, Deserialize)]
pub struct CombatConfig {
    /// Chance a fired shot puts the target down
    pub hit_chance: f64,
}

/// Infection-side parameters
#[derive(Debug, Clone, Deserialize)]
pub struct InfectionConfig {
    /// Chance that a remaining susceptible cellmate picks up dropped ammo
    /// after a conversion attempt
    pub supply_drop_chance: f64,
    pub supply_drop_shots: u32,
}

/// Passive resupply parameters
#[derive(Debug, Clone, Deserialize)]
pub struct ScavengingConfig {
    /// Per-tick chance a susceptible agent finds a spare round
    pub find_chance: f64,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io(e.to_string()))?;
        let config: Config =
            toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from default path, or use defaults if not found
    pub fn load_or_default() -> Self {
        Self::load(DEFAULT_TUNING_PATH).unwrap_or_else(|e| {
            tracing::warn!("could not load {}: {}. Using defaults.", DEFAULT_TUNING_PATH, e);
            Self::default()
        })
    }

    /// Rejects parameter combinations the engine cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        Self::require_positive("grid.width", self.grid.width as u64)?;
        Self::require_positive("grid.height", self.grid.height as u64)?;
        Self::require_positive(
            "population.initial_population",
            self.population.initial_population as u64,
        )?;
        Self::require_positive(
            "population.reinforcement_count",
            self.population.reinforcement_count as u64,
        )?;
        Self::require_positive(
            "population.reinforcement_tick",
            self.population.reinforcement_tick,
        )?;
        Self::require_fraction("population.infected_fraction", self.population.infected_fraction)?;
        Self::require_fraction("combat.hit_chance", self.combat.hit_chance)?;
        Self::require_fraction("infection.supply_drop_chance", self.infection.supply_drop_chance)?;
        Self::require_fraction("scavenging.find_chance", self.scavenging.find_chance)?;
        Ok(())
    }

    fn require_positive(field: &'static str, value: u64) -> Result<(), ConfigError> {
        if value == 0 {
            return Err(ConfigError::NonPositive { field });
        }
        Ok(())
    }

    fn require_fraction(field: &'static str, value: f64) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&value) {
            return Err(ConfigError::OutOfRange { field, value });
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            simulation: SimulationConfig {
                default_ticks: 100,
                snapshot_interval: 10,
            },
            grid: GridConfig {
                width: 20,
                height: 20,
            },
            population: PopulationConfig {
                initial_population: 100,
                infected_fraction: 0.10,
                initial_shots: 15,
                reinforcement_tick: 20,
                reinforcement_count: 50,
            },
            combat: CombatConfig { hit_chance: 0.5 },
            infection: InfectionConfig {
                supply_drop_chance: 0.5,
                supply_drop_shots: 2,
            },
            scavenging: ScavengingConfig { find_chance: 0.25 },
        }
    }
}

/// Configuration error type
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("{field} must be a positive integer")]
    NonPositive { field: &'static str },
    #[error("{field} must be within 0.0..=1.0 (got {value})")]
    OutOfRange { field: &'static str, value: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.grid.width, 20);
        assert_eq!(config.population.initial_population, 100);
        assert_eq!(config.population.reinforcement_tick, 20);
    }

    #[test]
    fn test_zero_dimension_rejected() {
        let mut config = Config::default();
        config.grid.width = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositive { field: "grid.width" })
        ));
    }

    #[test]
    fn test_bad_fraction_rejected() {
        let mut config = Config::default();
        config.combat.hit_chance = 1.5;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::OutOfRange { field: "combat.hit_chance", .. })
        ));
    }

    #[test]
    fn test_load_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[simulation]
default_ticks = 50
snapshot_interval = 5

[grid]
width = 10
height = 12

[population]
initial_population = 40
infected_fraction = 0.25
initial_shots = 3
reinforcement_tick = 8
reinforcement_count = 20

[combat]
hit_chance = 0.75

[infection]
supply_drop_chance = 0.5
supply_drop_shots = 2

[scavenging]
find_chance = 0.1
"#
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.grid.height, 12);
        assert_eq!(config.population.infected_fraction, 0.25);
        assert_eq!(config.combat.hit_chance, 0.75);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        assert!(matches!(
            Config::load("definitely_missing.toml"),
            Err(ConfigError::Io(_))
        ));
    }
}
