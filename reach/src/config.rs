use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Everything the engine reads at attach time. Missing RON fields fall back to
/// the values the site ships with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub container_id: String,
    /// Fixes the random source; `None` seeds from entropy.
    pub seed: Option<u64>,
    pub network: NetworkConfig,
    pub field: FieldConfig,
    pub camera: CameraConfig,
    pub orbit: OrbitConfig,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            container_id: "threejs-container".to_string(),
            seed: None,
            network: NetworkConfig::default(),
            field: FieldConfig::default(),
            camera: CameraConfig::default(),
            orbit: OrbitConfig::default(),
        }
    }
}

impl SceneConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read scene config {}", path.display()))?;
        Self::from_ron_str(&text)
            .with_context(|| format!("failed to parse scene config {}", path.display()))
    }

    pub fn from_ron_str(text: &str) -> Result<Self> {
        let config = ron::from_str(text).context("invalid scene config")?;
        Ok(config)
    }

    pub fn to_ron_string(&self) -> Result<String> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .context("failed to serialize scene config")
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_container(mut self, container_id: impl Into<String>) -> Self {
        self.container_id = container_id.into();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    pub node_count: usize,
    /// Sphere the initial nodes are placed on.
    pub radius: f32,
    /// Pairs closer than this are link candidates.
    pub link_distance: f32,
    /// A candidate pair is linked when its draw exceeds the cutoff.
    pub link_cutoff: f32,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            node_count: 20,
            radius: 8.0,
            link_distance: 12.0,
            link_cutoff: 0.7,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    pub count: usize,
    /// Half-width of the field along x; y and z use half of it.
    pub extent: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            count: 100,
            extent: 15.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub position: [f32; 3],
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 75.0,
            near: 0.1,
            far: 1000.0,
            position: [0.0, 5.0, 15.0],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitConfig {
    pub damping: f32,
    pub auto_rotate_speed: f32,
    pub min_polar: f32,
    pub max_polar: f32,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            damping: 0.05,
            auto_rotate_speed: 0.5,
            min_polar: FRAC_PI_4,
            max_polar: FRAC_PI_2,
        }
    }
}
