//! Edge-list configuration for wavepath
//!
//! A topology is described as an ordered list of `(endpoint, weight, endpoint)`
//! triples, stored in TOML:
//!
//! ```toml
//! edges = [
//!   ["A", 1, "B"],
//!   ["A", 4, "C"],
//! ]
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WavepathError};

/// One undirected edge as written in the configuration.
///
/// The weight is kept signed so that zero and negative values reach the
/// topology builder and are rejected there with the offending index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeSpec(pub String, pub i64, pub String);

impl EdgeSpec {
    pub fn new(a: impl Into<String>, weight: i64, b: impl Into<String>) -> Self {
        EdgeSpec(a.into(), weight, b.into())
    }

    pub fn a(&self) -> &str {
        &self.0
    }

    pub fn weight(&self) -> i64 {
        self.1
    }

    pub fn b(&self) -> &str {
        &self.2
    }
}

impl From<(&str, i64, &str)> for EdgeSpec {
    fn from((a, weight, b): (&str, i64, &str)) -> Self {
        EdgeSpec::new(a, weight, b)
    }
}

/// Topology configuration: the static edge list consumed at build time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopologyConfig {
    #[serde(default)]
    pub edges: Vec<EdgeSpec>,
}

impl Default for TopologyConfig {
    /// The built-in demonstration network
    fn default() -> Self {
        TopologyConfig {
            edges: vec![
                EdgeSpec::new("A", 1, "B"),
                EdgeSpec::new("A", 4, "C"),
                EdgeSpec::new("B", 2, "C"),
            ],
        }
    }
}

impl TopologyConfig {
    /// Build a configuration from anything yielding edge triples
    pub fn from_edges<I, E>(edges: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<EdgeSpec>,
    {
        TopologyConfig {
            edges: edges.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), edges = config.edges.len(), "load_config");
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| WavepathError::failed("serialize config", e))?;
        fs::write(path, content)?;
        Ok(())
    }
}
