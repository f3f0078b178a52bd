use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::services::label_smoother::LabelSmoother;
use crate::services::pose_catalogue::PoseCatalogue;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// TOML or JSON catalogue file; the built-in table when unset
    #[serde(default)]
    pub catalogue_path: Option<PathBuf>,

    /// Caller-side cutoff on the match distance
    #[serde(default)]
    pub max_distance: Option<f64>,

    #[serde(default = "default_smoothing_window")]
    pub smoothing_window: usize,
}

fn default_smoothing_window() -> usize {
    5
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            catalogue_path: None,
            max_distance: None,
            smoothing_window: default_smoothing_window(),
        }
    }
}

impl ClassifierConfig {
    pub fn from_env() -> Result<Self> {
        let catalogue_path = env::var("POSE_CATALOGUE_PATH").ok().map(PathBuf::from);

        let max_distance = env::var("POSE_MAX_DISTANCE")
            .ok()
            .map(|value| value.parse::<f64>())
            .transpose()
            .context("POSE_MAX_DISTANCE must be a number")?;

        let smoothing_window = env::var("POSE_SMOOTHING_WINDOW")
            .ok()
            .map(|value| value.parse::<usize>())
            .transpose()
            .context("POSE_SMOOTHING_WINDOW must be a positive integer")?
            .unwrap_or_else(default_smoothing_window);

        Ok(ClassifierConfig {
            catalogue_path,
            max_distance,
            smoothing_window,
        })
    }

    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let config: ClassifierConfig =
            toml::from_str(&contents).context("Failed to parse config file")?;

        Ok(config)
    }

    /// Resolve the configured pose catalogue.
    ///
    /// Files ending in `.json` are parsed as JSON, anything else as TOML.
    pub fn catalogue(&self) -> Result<PoseCatalogue> {
        let Some(path) = &self.catalogue_path else {
            return Ok(PoseCatalogue::builtin().clone());
        };

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read pose catalogue {}", path.display()))?;

        let is_json = path
            .extension()
            .map_or(false, |ext| ext.eq_ignore_ascii_case("json"));

        let catalogue = if is_json {
            PoseCatalogue::from_json_str(&contents)
        } else {
            PoseCatalogue::from_toml_str(&contents)
        }
        .with_context(|| format!("Invalid pose catalogue {}", path.display()))?;

        if catalogue.is_empty() {
            anyhow::bail!("Pose catalogue {} defines no poses", path.display());
        }

        Ok(catalogue)
    }

    pub fn label_smoother(&self) -> LabelSmoother {
        LabelSmoother::new(self.smoothing_window)
    }
}
