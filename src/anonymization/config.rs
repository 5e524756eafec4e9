//! Anonymization engine configuration

use crate::domain::errors::ConfigurationError;
use crate::domain::result::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Method applied to categorical quasi-identifier columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CategoricalMethod {
    /// Collapse rare values into a shared generic label
    #[default]
    Generalization,
    /// Replace rare values with the null marker
    Suppression,
}

impl FromStr for CategoricalMethod {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "generalization" => Ok(Self::Generalization),
            "suppression" => Ok(Self::Suppression),
            _ => Err(ConfigurationError::UnsupportedCategoricalMethod {
                method: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for CategoricalMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Generalization => write!(f, "generalization"),
            Self::Suppression => write!(f, "suppression"),
        }
    }
}

/// Method applied to numeric quasi-identifier columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum NumericalMethod {
    /// Quantile binning into range labels
    #[default]
    Binning,
    /// Replace values with small-group means
    Microaggregation,
}

impl FromStr for NumericalMethod {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "binning" => Ok(Self::Binning),
            "microaggregation" => Ok(Self::Microaggregation),
            _ => Err(ConfigurationError::UnsupportedNumericalMethod {
                method: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for NumericalMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Binning => write!(f, "binning"),
            Self::Microaggregation => write!(f, "microaggregation"),
        }
    }
}

/// K-anonymity configuration
///
/// Immutable once handed to the engine. `k` is the minimum equivalence
/// class size; `bin_count` only matters when `numerical_method` is
/// [`NumericalMethod::Binning`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KAnonymityConfig {
    /// Minimum number of rows sharing each quasi-identifier combination
    #[serde(default = "default_k")]
    pub k: usize,

    /// Method for categorical quasi-identifier columns
    #[serde(default)]
    pub categorical_method: CategoricalMethod,

    /// Method for numeric quasi-identifier columns
    #[serde(default)]
    pub numerical_method: NumericalMethod,

    /// Number of quantile bins for discretization
    #[serde(default = "default_bin_count")]
    pub bin_count: usize,
}

fn default_k() -> usize {
    2
}

fn default_bin_count() -> usize {
    5
}

impl Default for KAnonymityConfig {
    fn default() -> Self {
        Self {
            k: default_k(),
            categorical_method: CategoricalMethod::default(),
            numerical_method: NumericalMethod::default(),
            bin_count: default_bin_count(),
        }
    }
}

impl KAnonymityConfig {
    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::InvalidK`] when `k < 2` and
    /// [`ConfigurationError::InvalidBinCount`] when `bin_count < 1`.
    pub fn validate(&self) -> Result<()> {
        if self.k < 2 {
            return Err(ConfigurationError::InvalidK { k: self.k as i64 }.into());
        }
        if self.bin_count < 1 {
            return Err(ConfigurationError::InvalidBinCount {
                bin_count: self.bin_count as i64,
            }
            .into());
        }
        Ok(())
    }

    /// Apply environment variable overrides
    ///
    /// Recognized variables: `VEIL_K`, `VEIL_CATEGORICAL_METHOD`,
    /// `VEIL_NUMERICAL_METHOD`, `VEIL_BIN_COUNT`.
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("VEIL_K") {
            self.k = val
                .parse()
                .map_err(|_| ConfigurationError::Parse(format!("Invalid VEIL_K value: {val}")))?;
        }

        if let Ok(val) = std::env::var("VEIL_CATEGORICAL_METHOD") {
            self.categorical_method = val.parse()?;
        }

        if let Ok(val) = std::env::var("VEIL_NUMERICAL_METHOD") {
            self.numerical_method = val.parse()?;
        }

        if let Ok(val) = std::env::var("VEIL_BIN_COUNT") {
            self.bin_count = val.parse().map_err(|_| {
                ConfigurationError::Parse(format!("Invalid VEIL_BIN_COUNT value: {val}"))
            })?;
        }

        Ok(())
    }
}
