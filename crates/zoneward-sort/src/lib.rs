//! # Reverse-zone ordering
//!
//! Listings of reverse DNS zones (`in-addr.arpa` / `ip6.arpa`) are only
//! useful to an operator when related delegations sit next to each other
//! and subnets appear in numeric rather than lexical order. This crate
//! produces that ordering two ways:
//!
//! - **Query time**: `ORDER BY` expression fragments per storage
//!   dialect, so the engine sorts result sets natively where it can.
//! - **In memory**: value comparators and sorters for result sets
//!   fetched from backends without the needed string primitives, or
//!   when cross-backend consistency matters.
//!
//! Two algorithms are available: *natural* (the default — numeric-aware
//! string ordering with IPv4 zones grouped before IPv6) and
//! *hierarchical* (opt-in — zones grouped by top-level network, then by
//! specificity, then by octet value).
//!
//! Both paths share only the enum inputs. An expression fragment and a
//! sort decision are different artifacts; forcing them through one
//! abstraction would obscure both.
//!
//! ## Example
//!
//! ```rust
//! use zoneward_sort::{sort_order_clause, SortAlgorithm, SortDirection, SqlDialect};
//!
//! let clause = sort_order_clause(
//!     "domains.name",
//!     SqlDialect::MySql,
//!     SortDirection::Asc,
//!     SortAlgorithm::Natural,
//! );
//! assert!(clause.contains("domains.name"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub mod hierarchy;
pub mod natural;
pub mod settings;

pub use settings::{OrderingSettings, SettingsError};

/// Suffix of IPv4 reverse zone names.
pub const IPV4_REVERSE_SUFFIX: &str = ".in-addr.arpa";

/// Suffix of IPv6 reverse zone names.
pub const IPV6_REVERSE_SUFFIX: &str = ".ip6.arpa";

/// Error returned when an ordering token is parsed strictly.
///
/// The lenient `from_token` constructors never produce this; it exists
/// for configuration surfaces that prefer to reject typos outright.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized {kind} token: {token:?}")]
pub struct UnknownToken {
    kind: &'static str,
    token: String,
}

impl UnknownToken {
    fn new(kind: &'static str, token: &str) -> Self {
        Self {
            kind,
            token: token.to_string(),
        }
    }
}

// ============================================================================
// Sort direction
// ============================================================================

/// Direction of an ordering, ascending by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending order.
    #[default]
    Asc,
    /// Descending order.
    Desc,
}

impl SortDirection {
    /// Returns the SQL keyword for this direction.
    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }

    /// Parses a direction leniently; unrecognized input normalizes to
    /// ascending.
    pub fn from_token(token: &str) -> Self {
        token.parse().unwrap_or_else(|_| {
            debug!(token, "unknown sort direction, defaulting to ascending");
            Self::default()
        })
    }
}

impl FromStr for SortDirection {
    type Err = UnknownToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("asc") {
            Ok(Self::Asc)
        } else if s.eq_ignore_ascii_case("desc") {
            Ok(Self::Desc)
        } else {
            Err(UnknownToken::new("sort direction", s))
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

// ============================================================================
// Sort algorithm
// ============================================================================

/// Comparison policy governing an ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortAlgorithm {
    /// Numeric-aware string ordering with address families grouped.
    #[default]
    Natural,
    /// Network-first ordering by top-level component, then specificity.
    Hierarchical,
}

impl SortAlgorithm {
    /// Returns the configuration name of this algorithm.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Natural => "natural",
            Self::Hierarchical => "hierarchical",
        }
    }

    /// Parses an algorithm leniently; unrecognized input normalizes to
    /// natural.
    pub fn from_token(token: &str) -> Self {
        token.parse().unwrap_or_else(|_| {
            debug!(token, "unknown sort algorithm, defaulting to natural");
            Self::default()
        })
    }
}

impl FromStr for SortAlgorithm {
    type Err = UnknownToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("natural") {
            Ok(Self::Natural)
        } else if s.eq_ignore_ascii_case("hierarchical") {
            Ok(Self::Hierarchical)
        } else {
            Err(UnknownToken::new("sort algorithm", s))
        }
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// SQL dialect
// ============================================================================

/// Family of the storage engine's SQL dialect.
///
/// A closed variant rather than a driver-name string: dispatch over it
/// is exhaustive, and an engine we know nothing about degrades to the
/// raw-field ordering instead of falling through silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SqlDialect {
    /// MySQL-compatible engines.
    MySql,
    /// PostgreSQL-compatible engines.
    Postgres,
    /// SQLite and similar embedded engines.
    Sqlite,
    /// Anything else; only raw lexical ordering is available.
    #[default]
    Other,
}

impl SqlDialect {
    /// Returns the configuration name of this dialect.
    pub const fn name(self) -> &'static str {
        match self {
            Self::MySql => "mysql",
            Self::Postgres => "postgres",
            Self::Sqlite => "sqlite",
            Self::Other => "other",
        }
    }

    /// Maps a driver name to its dialect family.
    ///
    /// Accepts the historical driver aliases (`mysqli`, `pgsql`,
    /// `sqlite3`); anything unrecognized becomes [`SqlDialect::Other`].
    pub fn from_token(token: &str) -> Self {
        token.parse().unwrap_or_else(|_| {
            debug!(token, "unknown storage dialect, using raw ordering only");
            Self::Other
        })
    }
}

impl FromStr for SqlDialect {
    type Err = UnknownToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_ascii_lowercase();
        match lowered.as_str() {
            "mysql" | "mysqli" | "mariadb" => Ok(Self::MySql),
            "postgres" | "postgresql" | "pgsql" => Ok(Self::Postgres),
            "sqlite" | "sqlite3" => Ok(Self::Sqlite),
            "other" => Ok(Self::Other),
            _ => Err(UnknownToken::new("storage dialect", s)),
        }
    }
}

impl fmt::Display for SqlDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Facade
// ============================================================================

/// Builds the `ORDER BY` expression for a zone listing query.
///
/// Dispatches to the natural or hierarchical builder; the result always
/// contains `field` at least once and is never empty.
pub fn sort_order_clause(
    field: &str,
    dialect: SqlDialect,
    direction: SortDirection,
    algorithm: SortAlgorithm,
) -> String {
    match algorithm {
        SortAlgorithm::Natural => natural::natural_sort_expression(field, dialect, direction),
        SortAlgorithm::Hierarchical => {
            hierarchy::hierarchical_sort_expression(field, dialect, direction)
        }
    }
}

/// Sorts fetched zone names in memory with the selected algorithm.
pub fn sort_zone_names(names: &[String], algorithm: SortAlgorithm) -> Vec<String> {
    match algorithm {
        SortAlgorithm::Natural => natural::sort_naturally(names),
        SortAlgorithm::Hierarchical => hierarchy::sort_hierarchically(names),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_tokens() {
        assert_eq!(SortDirection::from_token("DESC"), SortDirection::Desc);
        assert_eq!(SortDirection::from_token("asc"), SortDirection::Asc);
        assert_eq!(SortDirection::from_token("sideways"), SortDirection::Asc);
        assert!("sideways".parse::<SortDirection>().is_err());
    }

    #[test]
    fn test_algorithm_tokens() {
        assert_eq!(
            SortAlgorithm::from_token("hierarchical"),
            SortAlgorithm::Hierarchical
        );
        assert_eq!(SortAlgorithm::from_token("bogus"), SortAlgorithm::Natural);
    }

    #[test]
    fn test_dialect_driver_aliases() {
        assert_eq!(SqlDialect::from_token("mysqli"), SqlDialect::MySql);
        assert_eq!(SqlDialect::from_token("pgsql"), SqlDialect::Postgres);
        assert_eq!(SqlDialect::from_token("sqlite3"), SqlDialect::Sqlite);
        assert_eq!(SqlDialect::from_token("mssql"), SqlDialect::Other);
    }

    #[test]
    fn test_sort_order_clause_always_references_field() {
        let dialects = [
            SqlDialect::MySql,
            SqlDialect::Postgres,
            SqlDialect::Sqlite,
            SqlDialect::Other,
        ];
        let algorithms = [SortAlgorithm::Natural, SortAlgorithm::Hierarchical];
        for dialect in dialects {
            for algorithm in algorithms {
                let clause =
                    sort_order_clause("domains.name", dialect, SortDirection::Asc, algorithm);
                assert!(!clause.is_empty(), "{dialect}/{algorithm} clause empty");
                assert!(
                    clause.contains("domains.name"),
                    "{dialect}/{algorithm} clause misses the field: {clause}"
                );
            }
        }
    }

    #[test]
    fn test_facade_dispatch() {
        let natural = sort_order_clause(
            "d.name",
            SqlDialect::MySql,
            SortDirection::Asc,
            SortAlgorithm::Natural,
        );
        let hierarchical = sort_order_clause(
            "d.name",
            SqlDialect::MySql,
            SortDirection::Asc,
            SortAlgorithm::Hierarchical,
        );
        assert_ne!(natural, hierarchical);
        assert!(hierarchical.contains("SUBSTRING_INDEX"));
    }
}
