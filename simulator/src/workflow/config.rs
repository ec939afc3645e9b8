use crate::generator::profile::GeneratorConfig;
use anyhow::Context;
use scancore::prelude::DEFAULT_WINDOW_DEG;
use scancore::ScanConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Which two directions are watched per frame and how frames are produced.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkflowConfig {
    pub left_angle_deg: f32,
    pub right_angle_deg: f32,
    pub window_deg: f32,
    pub frames: usize,
    pub generator: GeneratorConfig,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            left_angle_deg: 45.0,
            right_angle_deg: -45.0,
            window_deg: DEFAULT_WINDOW_DEG,
            frames: 10,
            generator: GeneratorConfig::default(),
        }
    }
}

impl WorkflowConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading workflow config {}", path_ref.display()))?;
        let config: WorkflowConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing workflow config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn from_args(
        left_angle_deg: f32,
        right_angle_deg: f32,
        window_deg: f32,
        frames: usize,
        seed: u64,
    ) -> Self {
        Self {
            left_angle_deg,
            right_angle_deg,
            window_deg,
            frames,
            generator: GeneratorConfig {
                seed,
                ..Default::default()
            },
        }
    }

    pub fn to_scan_config(&self) -> ScanConfig {
        ScanConfig {
            window_deg: self.window_deg,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn config_from_args_produces_scan_config() {
        let cfg = WorkflowConfig::from_args(30.0, -30.0, 5.0, 4, 7);
        assert_eq!(cfg.to_scan_config().window_deg, 5.0);
        assert_eq!(cfg.generator.seed, 7);
    }

    #[test]
    fn config_load_reads_yaml() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(
            b"left_angle_deg: 60.0\nright_angle_deg: -60.0\nframes: 3\ngenerator:\n  samples: 181\n  dropout: 0.0\n",
        )
        .unwrap();
        let path = temp.into_temp_path();
        let cfg = WorkflowConfig::load(&path).unwrap();
        assert_eq!(cfg.left_angle_deg, 60.0);
        assert_eq!(cfg.frames, 3);
        assert_eq!(cfg.window_deg, DEFAULT_WINDOW_DEG);
        assert_eq!(cfg.generator.samples, 181);
        assert_eq!(cfg.generator.frame_id, "laser");
    }

    #[test]
    fn bundled_corridor_workflow_loads() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/workflows/corridor.yaml");
        let cfg = WorkflowConfig::load(path).unwrap();
        assert_eq!(cfg.to_scan_config().window_deg, 4.0);
        assert!(cfg.generator.clockwise);
        assert_eq!(cfg.generator.frame_id, "base_scan");
    }

    #[test]
    fn config_load_reports_missing_file() {
        let err = WorkflowConfig::load("/nonexistent/workflow.yaml").unwrap_err();
        assert!(err.to_string().contains("reading workflow config"));
    }
}
