use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub(crate) struct Settings {
    pub(crate) fps_cap: u32,
    pub(crate) enable_color: bool,
    pub(crate) seed: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            fps_cap: 30,
            enable_color: true,
            // 0 means: derive a fresh seed from the clock at startup
            seed: 0,
        }
    }
}

pub(crate) struct Paths {
    pub(crate) settings_path: PathBuf,
}

pub(crate) fn project_paths() -> Result<Paths> {
    let proj = ProjectDirs::from("com", "memorygarden", "MemoryGarden")
        .context("could not resolve project directories")?;
    let dir = proj.data_local_dir().to_path_buf();
    fs::create_dir_all(&dir).ok();
    Ok(Paths {
        settings_path: dir.join("settings.json"),
    })
}

pub(crate) fn load_settings(path: &Path) -> Settings {
    if let Ok(s) = fs::read_to_string(path) {
        if let Ok(v) = serde_json::from_str::<Settings>(&s) {
            return v;
        }
    }
    Settings::default()
}

pub(crate) fn save_settings_atomic(path: &Path, s: &Settings) -> Result<()> {
    let tmp = path.with_extension("json.tmp");
    let data = serde_json::to_vec_pretty(s)?;
    fs::write(&tmp, data)?;
    // best-effort atomic replace on the same filesystem
    if path.exists() {
        let _ = fs::remove_file(path);
    }
    fs::rename(&tmp, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_round_trip_through_json() {
        let s = Settings {
            fps_cap: 60,
            enable_color: false,
            seed: 42,
        };
        let data = serde_json::to_string(&s).unwrap();
        let back: Settings = serde_json::from_str(&data).unwrap();
        assert_eq!(back.fps_cap, 60);
        assert!(!back.enable_color);
        assert_eq!(back.seed, 42);
    }

    #[test]
    fn unreadable_settings_fall_back_to_defaults() {
        let s = load_settings(Path::new("/nonexistent/memorygarden/settings.json"));
        assert_eq!(s.fps_cap, 30);
        assert!(s.enable_color);
        assert_eq!(s.seed, 0);
    }
}
