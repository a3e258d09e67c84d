//! Optional on-disk settings, overriding the built-in scene defaults.

use core::SceneConfig;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::APP_NAME;

pub const SETTINGS_FORMAT_VERSION: u32 = 1;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SettingsFile {
    pub format_version: u32,
    pub grid_width: i32,
    pub grid_height: i32,
    pub max_agents: usize,
    pub spawn_chance: f64,
    pub stroke_width: f32,
    pub fullscreen: bool,
}

impl Default for SettingsFile {
    fn default() -> Self {
        let config = SceneConfig::default();
        Self {
            format_version: SETTINGS_FORMAT_VERSION,
            grid_width: config.grid_width,
            grid_height: config.grid_height,
            max_agents: config.max_agents,
            spawn_chance: config.spawn_chance,
            stroke_width: config.stroke_width,
            fullscreen: false,
        }
    }
}

impl SettingsFile {
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", APP_NAME).map(|dirs| {
            let mut path = dirs.config_dir().to_path_buf();
            path.push("settings.json");
            path
        })
    }

    /// Settings from the default path, or the defaults when the file is
    /// missing or unreadable. Tuning is best-effort; a broken file must not
    /// keep the app from starting.
    pub fn load_or_default() -> Self {
        Self::default_path()
            .and_then(|path| Self::load(&path).ok())
            .unwrap_or_default()
    }

    pub fn load(path: &Path) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        let settings: Self = serde_json::from_str(&content)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(settings)
    }

    pub fn write_atomic(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let tmp_path = path.with_extension("json.tmp");
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;

        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, path)?;

        Ok(())
    }

    /// Overlay these settings onto the built-in defaults. The result still
    /// goes through [`SceneConfig::validate`] at director construction.
    pub fn to_scene_config(&self) -> SceneConfig {
        SceneConfig {
            grid_width: self.grid_width,
            grid_height: self.grid_height,
            max_agents: self.max_agents,
            spawn_chance: self.spawn_chance,
            stroke_width: self.stroke_width,
            ..SceneConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn json_roundtrip_preserves_settings() {
        let settings = SettingsFile {
            format_version: SETTINGS_FORMAT_VERSION,
            grid_width: 32,
            grid_height: 24,
            max_agents: 40,
            spawn_chance: 0.25,
            stroke_width: 3.0,
            fullscreen: true,
        };

        let json = serde_json::to_string(&settings).expect("serialize");
        let decoded: SettingsFile = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(settings, decoded);
    }

    #[test]
    fn atomic_write_then_load() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("settings.json");

        let settings = SettingsFile { grid_width: 100, ..SettingsFile::default() };
        settings.write_atomic(&path).expect("write");
        assert!(path.exists());

        let loaded = SettingsFile::load(&path).expect("load");
        assert_eq!(loaded, settings);

        let tmp_path = path.with_extension("json.tmp");
        assert!(!tmp_path.exists());
    }

    #[test]
    fn load_rejects_malformed_json() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("settings.json");
        fs::write(&path, "not json").expect("write");

        let error = SettingsFile::load(&path).expect_err("malformed file must fail");
        assert_eq!(error.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn default_settings_map_onto_the_default_scene_config() {
        assert_eq!(SettingsFile::default().to_scene_config(), SceneConfig::default());
    }

    #[test]
    fn overridden_settings_survive_the_mapping() {
        let settings = SettingsFile { max_agents: 10, spawn_chance: 0.5, ..SettingsFile::default() };
        let config = settings.to_scene_config();
        assert_eq!(config.max_agents, 10);
        assert_eq!(config.spawn_chance, 0.5);
        // Fields the file does not carry keep their defaults.
        assert_eq!(config.inherited_path_limit, SceneConfig::default().inherited_path_limit);
    }
}
