//! JSON configuration file.
//!
//! ```json
//! {
//!   "Resistors": [
//!     { "Value": 100, "Tolerance": 5 },
//!     { "Value": 220, "Tolerance": 5 }
//!   ],
//!   "PopulationSize": 1000,
//!   "MutationRate": 5
//! }
//! ```

use crate::catalog::{Catalog, Resistor};
use crate::error::Error;
use crate::ga::GaConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Parts catalog and GA parameters as stored on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RpickConfig {
    /// Available parts, in any order.
    pub resistors: Vec<Resistor>,

    /// GA population size (positive, even).
    pub population_size: usize,

    /// Base mutation rate in percent (0–100).
    pub mutation_rate: u32,
}

impl RpickConfig {
    /// Reads and validates a configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Error> {
        let data = std::fs::read_to_string(path)?;
        Self::from_json(&data)
    }

    /// Parses and validates a configuration document.
    pub fn from_json(data: &str) -> Result<Self, Error> {
        let config: Self = serde_json::from_str(data)?;
        config.catalog()?;
        config.ga_config().validate()?;
        Ok(config)
    }

    /// The validated parts catalog.
    pub fn catalog(&self) -> Result<Catalog, Error> {
        Catalog::new(self.resistors.clone())
    }

    /// GA parameters with defaults for everything the file does not set.
    pub fn ga_config(&self) -> GaConfig {
        GaConfig {
            population_size: self.population_size,
            mutation_rate: self.mutation_rate,
            ..GaConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "Resistors": [
            { "Value": 220, "Tolerance": 5 },
            { "Value": 100, "Tolerance": 1 }
        ],
        "PopulationSize": 500,
        "MutationRate": 10
    }"#;

    #[test]
    fn test_parse() {
        let config = RpickConfig::from_json(SAMPLE).unwrap();
        assert_eq!(config.resistors.len(), 2);
        assert_eq!(config.resistors[0], Resistor::new(220, 5));
        assert_eq!(config.population_size, 500);

        let catalog = config.catalog().unwrap();
        assert_eq!(catalog.values(), vec![100, 220]);

        let ga = config.ga_config();
        assert_eq!(ga.population_size, 500);
        assert_eq!(ga.mutation_rate, 10);
        assert_eq!(ga.cleanup_interval, 100);
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            RpickConfig::from_json("{ not json"),
            Err(Error::Json(_))
        ));
    }

    #[test]
    fn test_empty_catalog_rejected() {
        let data = r#"{ "Resistors": [], "PopulationSize": 10, "MutationRate": 5 }"#;
        assert!(matches!(
            RpickConfig::from_json(data),
            Err(Error::EmptyCatalog)
        ));
    }

    #[test]
    fn test_odd_population_rejected() {
        let data = r#"{ "Resistors": [{ "Value": 1, "Tolerance": 5 }],
                        "PopulationSize": 9, "MutationRate": 5 }"#;
        assert!(matches!(
            RpickConfig::from_json(data),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = RpickConfig::from_path("/nonexistent/rpick.json").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_round_trip_through_serde() {
        let config = RpickConfig::from_json(SAMPLE).unwrap();
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"PopulationSize\":500"));
        assert_eq!(RpickConfig::from_json(&json).unwrap(), config);
    }
}
