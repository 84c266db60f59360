//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults (the classic sample data)
//! 2. Global config: `$XDG_CONFIG_HOME/rsds/rsds.toml`
//! 3. Explicit config file passed with `--config`
//! 4. Environment variables: `RSDS_*` prefix
//!
//! Every layer REPLACES what it specifies; sample data lists are never merged.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::ApplicationError;
use crate::parser::{parse_edge_list, parse_value_list};

/// Sample data for array, linked list, stack and queue.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LinearSettings {
    pub values: Vec<i32>,
}

impl Default for LinearSettings {
    fn default() -> Self {
        Self {
            values: vec![10, 20, 30, 40, 50],
        }
    }
}

/// Sample data for the binary search tree, in insertion order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BstSettings {
    pub values: Vec<i32>,
}

impl Default for BstSettings {
    fn default() -> Self {
        Self {
            values: vec![50, 30, 70, 20, 40, 60, 80],
        }
    }
}

/// Sample graph: vertex count and directed edges in insertion order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GraphSettings {
    pub vertices: usize,
    pub edges: Vec<[i32; 2]>,
}

impl Default for GraphSettings {
    fn default() -> Self {
        Self {
            vertices: 4,
            edges: vec![[0, 1], [0, 2], [1, 2], [2, 0], [2, 3], [3, 3]],
        }
    }
}

/// Raw settings for intermediate parsing (`None` means "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub capacity: Option<usize>,
    pub linear: RawLinearSettings,
    pub bst: RawBstSettings,
    pub graph: RawGraphSettings,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawLinearSettings {
    pub values: Option<Vec<i32>>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawBstSettings {
    pub values: Option<Vec<i32>>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawGraphSettings {
    pub vertices: Option<usize>,
    pub edges: Option<Vec<[i32; 2]>>,
}

/// Unified configuration for rsds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Capacity of the fixed-size array, stack and queue
    pub capacity: usize,
    pub linear: LinearSettings,
    pub bst: BstSettings,
    pub graph: GraphSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            capacity: 100,
            linear: LinearSettings::default(),
            bst: BstSettings::default(),
            graph: GraphSettings::default(),
        }
    }
}

/// Get the XDG config directory for rsds.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "rsds").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("rsds.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Overlay a raw layer: every field it specifies replaces the current one.
    pub fn apply(&self, raw: &RawSettings) -> Self {
        Self {
            capacity: raw.capacity.unwrap_or(self.capacity),
            linear: LinearSettings {
                values: raw
                    .linear
                    .values
                    .clone()
                    .unwrap_or_else(|| self.linear.values.clone()),
            },
            bst: BstSettings {
                values: raw
                    .bst
                    .values
                    .clone()
                    .unwrap_or_else(|| self.bst.values.clone()),
            },
            graph: GraphSettings {
                vertices: raw.graph.vertices.unwrap_or(self.graph.vertices),
                edges: raw
                    .graph
                    .edges
                    .clone()
                    .unwrap_or_else(|| self.graph.edges.clone()),
            },
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Optional explicit config file; it must exist
    pub fn load(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Global config, if present
        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!("loading global config: {}", global_path.display());
                current = current.apply(&load_raw_settings(&global_path)?);
            }
        }

        // 3. Explicit config file
        if let Some(path) = config_file {
            if !path.exists() {
                return Err(ApplicationError::Config {
                    message: format!("config file not found: {}", path.display()),
                });
            }
            debug!("loading config file: {}", path.display());
            current = current.apply(&load_raw_settings(path)?);
        }

        // 4. Environment variables
        current = Self::apply_env_overrides(current)?;

        current.validate()?;
        Ok(current)
    }

    /// Reject settings no structure can be built from.
    fn validate(&self) -> Result<(), ApplicationError> {
        if self.capacity == 0 {
            return Err(ApplicationError::Config {
                message: "capacity must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Apply RSDS_* environment variables as explicit overrides.
    ///
    /// Lists are comma-separated: `RSDS_BST__VALUES=5,3,8`,
    /// `RSDS_GRAPH__EDGES=0:1,1:0`.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        // Use config crate just for env var collection
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("RSDS")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("capacity") {
            settings.capacity = val.trim().parse().map_err(|e| ApplicationError::Config {
                message: format!("RSDS_CAPACITY: {e}"),
            })?;
        }
        if let Ok(val) = config.get_string("linear.values") {
            settings.linear.values =
                parse_value_list(&val).map_err(env_err("RSDS_LINEAR__VALUES"))?;
        }
        if let Ok(val) = config.get_string("bst.values") {
            settings.bst.values = parse_value_list(&val).map_err(env_err("RSDS_BST__VALUES"))?;
        }
        if let Ok(val) = config.get_string("graph.vertices") {
            settings.graph.vertices = val.trim().parse().map_err(|e| ApplicationError::Config {
                message: format!("RSDS_GRAPH__VERTICES: {e}"),
            })?;
        }
        if let Ok(val) = config.get_string("graph.edges") {
            settings.graph.edges = parse_edge_list(&val).map_err(env_err("RSDS_GRAPH__EDGES"))?;
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# rsds configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/rsds/rsds.toml   (defines your baseline)
#   File:   rsds --config <path>       (per-run override)
#   Env:    RSDS_* environment variables (explicit overrides)
#
# Every layer replaces the values it specifies.

# Capacity of the fixed-size array, stack and queue
# capacity = 100

[linear]
# Values pushed into array, linked list, stack and queue
# values = [10, 20, 30, 40, 50]

[bst]
# Values inserted into the binary search tree, in order
# values = [50, 30, 70, 20, 40, 60, 80]

[graph]
# Number of vertices (ids 0..vertices-1)
# vertices = 4
# Directed edges [src, dest], added in order
# edges = [[0, 1], [0, 2], [1, 2], [2, 0], [2, 3], [3, 3]]
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

fn env_err(var: &'static str) -> impl Fn(String) -> ApplicationError {
    move |message| ApplicationError::Config {
        message: format!("{var}: {message}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_defaults_when_created_then_match_classic_sample_data() {
        let settings = Settings::default();
        assert_eq!(settings.capacity, 100);
        assert_eq!(settings.linear.values, vec![10, 20, 30, 40, 50]);
        assert_eq!(settings.bst.values, vec![50, 30, 70, 20, 40, 60, 80]);
        assert_eq!(settings.graph.vertices, 4);
        assert_eq!(settings.graph.edges.len(), 6);
    }

    #[test]
    fn given_partial_raw_layer_when_applying_then_only_specified_fields_replace() {
        let raw = RawSettings {
            capacity: Some(8),
            graph: RawGraphSettings {
                vertices: None,
                edges: Some(vec![[1, 0]]),
            },
            ..RawSettings::default()
        };

        let result = Settings::default().apply(&raw);

        assert_eq!(result.capacity, 8);
        assert_eq!(result.graph.vertices, 4);
        assert_eq!(result.graph.edges, vec![[1, 0]]);
        assert_eq!(result.bst, BstSettings::default());
    }

    #[test]
    fn given_defaults_when_serializing_then_toml_round_trips() {
        let settings = Settings::default();
        let text = settings.to_toml().unwrap();
        let parsed: Settings = toml::from_str(&text).unwrap();
        assert_eq!(parsed, settings);
    }

    #[test]
    fn given_template_when_parsing_then_yields_defaults() {
        let raw: RawSettings = toml::from_str(&Settings::template()).unwrap();
        assert_eq!(Settings::default().apply(&raw), Settings::default());
    }
}
