//! Tour configuration, read from TOML.
//!
//! Every key is optional; missing keys take the values the tour uses by
//! default. Validation runs after parsing so a bad value is reported by
//! name instead of as a serde error.

use crate::error::ConfigError;
use crate::tour::Section;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Largest `n` the tour passes to `factorial`; both versions are at least linear in `n`.
pub const MAX_FACTORIAL_INPUT: i64 = 100_000;
/// Largest exponent the tour passes to `power`, which is linear in it.
pub const MAX_EXPONENT: i64 = 100_000;
/// Longest sample; the recursive sum recurses once per element.
pub const MAX_SAMPLE_LEN: usize = 1_000;
pub const MAX_COUNTER_STEPS: u32 = 10_000;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TourConfig {
    pub sections: Vec<String>,
    pub color: bool,
    pub numeric: NumericInputs,
    pub generators: GeneratorInputs,
    pub transforms: TransformInputs,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NumericInputs {
    pub factorial_inputs: Vec<i64>,
    pub prime_inputs: Vec<i64>,
    pub power_cases: Vec<(i64, i64)>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorInputs {
    pub counter_start: i64,
    pub counter_steps: u32,
    pub multiplier: i64,
    pub accumulator_initial: i64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TransformInputs {
    pub sample: Vec<i64>,
}

impl Default for TourConfig {
    fn default() -> Self {
        TourConfig {
            sections: Section::ALL.iter().map(|s| s.name().to_string()).collect(),
            color: true,
            numeric: NumericInputs::default(),
            generators: GeneratorInputs::default(),
            transforms: TransformInputs::default(),
        }
    }
}

impl Default for NumericInputs {
    fn default() -> Self {
        NumericInputs {
            factorial_inputs: vec![0, 1, 5, 10, -5],
            prime_inputs: vec![2, 3, 4, 17, 20, 25, 1, 0, -5],
            power_cases: vec![(2, 3), (5, 0), (0, 5), (3, 4), (2, -3)],
        }
    }
}

impl Default for GeneratorInputs {
    fn default() -> Self {
        GeneratorInputs {
            counter_start: 5,
            counter_steps: 3,
            multiplier: 3,
            accumulator_initial: 100,
        }
    }
}

impl Default for TransformInputs {
    fn default() -> Self {
        TransformInputs {
            sample: (1..=10).collect(),
        }
    }
}

impl TourConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: TourConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        debug!(path = %path.display(), "loading tour config");
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let steps = self.generators.counter_steps;
        if steps == 0 || steps > MAX_COUNTER_STEPS {
            return Err(ConfigError::invalid_value(
                "generators.counter_steps",
                format!("must be between 1 and {MAX_COUNTER_STEPS}, got {steps}"),
            ));
        }
        let sample_len = self.transforms.sample.len();
        if sample_len == 0 || sample_len > MAX_SAMPLE_LEN {
            return Err(ConfigError::invalid_value(
                "transforms.sample",
                format!("must hold between 1 and {MAX_SAMPLE_LEN} numbers, got {sample_len}"),
            ));
        }
        // negative inputs are kept; the tour shows the error they produce
        if let Some(n) = self
            .numeric
            .factorial_inputs
            .iter()
            .find(|&&n| n > MAX_FACTORIAL_INPUT)
        {
            return Err(ConfigError::invalid_value(
                "numeric.factorial_inputs",
                format!("{n} exceeds the maximum of {MAX_FACTORIAL_INPUT}"),
            ));
        }
        if let Some((_, exponent)) = self
            .numeric
            .power_cases
            .iter()
            .find(|&&(_, exponent)| exponent > MAX_EXPONENT)
        {
            return Err(ConfigError::invalid_value(
                "numeric.power_cases",
                format!("exponent {exponent} exceeds the maximum of {MAX_EXPONENT}"),
            ));
        }
        self.enabled_sections().map(|_| ())
    }

    /// Sections named in the config, in tour order with duplicates removed.
    pub fn enabled_sections(&self) -> Result<Vec<Section>, ConfigError> {
        let mut sections = self
            .sections
            .iter()
            .map(|name| {
                name.parse::<Section>()
                    .map_err(|reason| ConfigError::invalid_value("sections", reason))
            })
            .collect::<Result<Vec<_>, _>>()?;
        sections.sort();
        sections.dedup();
        Ok(sections)
    }
}
