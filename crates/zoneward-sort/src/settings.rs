//! Ordering preferences for the zone listing workflow.
//!
//! The listing workflow reads these values from the application
//! configuration and hands them to the facade unchanged. Every field
//! has a sensible default, so an empty document is a complete
//! configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{SortAlgorithm, SortDirection, SqlDialect};

/// Error raised while loading ordering preferences.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The YAML document could not be parsed.
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Ordering preferences for reverse-zone listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderingSettings {
    /// Dialect family of the active storage engine.
    pub dialect: SqlDialect,

    /// Algorithm governing listing order.
    pub algorithm: SortAlgorithm,

    /// Listing direction.
    pub direction: SortDirection,
}

impl OrderingSettings {
    /// Loads preferences from a YAML document.
    pub fn from_yaml(text: &str) -> Result<Self, SettingsError> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// Serializes preferences to YAML.
    pub fn to_yaml(&self) -> Result<String, SettingsError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Builds preferences from loosely validated key/value tokens.
    ///
    /// Legacy configuration stores these as free-form strings; unknown
    /// tokens normalize to the defaults instead of failing the listing.
    pub fn from_tokens(dialect: &str, algorithm: &str, direction: &str) -> Self {
        Self {
            dialect: SqlDialect::from_token(dialect),
            algorithm: SortAlgorithm::from_token(algorithm),
            direction: SortDirection::from_token(direction),
        }
    }

    /// Builds the `ORDER BY` expression for these preferences.
    pub fn sort_order_clause(&self, field: &str) -> String {
        crate::sort_order_clause(field, self.dialect, self.direction, self.algorithm)
    }
}
