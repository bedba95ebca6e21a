use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::algorithms::{MstAlgorithm, QueueDiscipline, Strategy};
use crate::graph::DEFAULT_WEIGHT;
use crate::{GraphError, GraphResult};

/// Engine defaults, read from `graphlab/config.toml` in the user's config dir
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct EngineConfig {
    pub strategy: Strategy,
    pub dijkstra_queue: QueueDiscipline,
    pub mst_algorithm: MstAlgorithm,
    pub default_edge_weight: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            dijkstra_queue: QueueDiscipline::default(),
            mst_algorithm: MstAlgorithm::default(),
            default_edge_weight: DEFAULT_WEIGHT,
        }
    }
}

impl EngineConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/graphlab/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("graphlab/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("graphlab\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    /// Load the user config, falling back to defaults on any problem
    pub fn load() -> Self {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                match Self::load_from(&config_path) {
                    Ok(config) => return config,
                    Err(e) => tracing::warn!("Ignoring {}: {}", config_path.display(), e),
                }
            }
        }
        Self::default()
    }

    pub fn load_from(path: &Path) -> GraphResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> GraphResult<Self> {
        toml::from_str(content).map_err(|e| GraphError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = EngineConfig::from_toml_str("").unwrap();
        assert_eq!(config, EngineConfig::default());
        assert_eq!(config.strategy, Strategy::DepthFirst);
        assert_eq!(config.dijkstra_queue, QueueDiscipline::Priority);
        assert_eq!(config.default_edge_weight, 1.0);
    }

    #[test]
    fn test_partial_config() {
        let config = EngineConfig::from_toml_str(
            r#"
            strategy = "breadth-first"
            dijkstra-queue = "fifo"
            "#,
        )
        .unwrap();

        assert_eq!(config.strategy, Strategy::BreadthFirst);
        assert_eq!(config.dijkstra_queue, QueueDiscipline::Fifo);
        assert_eq!(config.mst_algorithm, MstAlgorithm::Kruskal);
    }

    #[test]
    fn test_invalid_config() {
        let result = EngineConfig::from_toml_str("strategy = \"sideways\"");
        assert!(matches!(result, Err(GraphError::Config(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "mst-algorithm = \"prim\"").unwrap();
        writeln!(file, "default-edge-weight = 2.5").unwrap();

        let config = EngineConfig::load_from(file.path()).unwrap();
        assert_eq!(config.mst_algorithm, MstAlgorithm::Prim);
        assert_eq!(config.default_edge_weight, 2.5);
    }

    #[test]
    fn test_load_missing_file() {
        let result = EngineConfig::load_from(Path::new("/nonexistent/graphlab.toml"));
        assert!(matches!(result, Err(GraphError::Io(_))));
    }
}
