use configparser::ini::Ini;
use log::{info, warn};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::screens::start::StartConfig;
use crate::ui::anim::Timeline;

// Window
pub const WINDOW_TITLE: &str = "First game RPG";
pub const CONFIG_PATH: &str = "config.ini";

const DISPLAY: &str = "display";
const START: &str = "start";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub width: u32,
    pub height: u32,
    pub fps: u32,
    pub appear_ms: u64,
    pub hold_ms: u64,
    pub fade_ms: u64,
    pub gap_ms: u64,
    pub background: PathBuf,
    pub save_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            fps: 60,
            appear_ms: 1500,
            hold_ms: 3000,
            fade_ms: 1500,
            gap_ms: 800,
            background: PathBuf::from("assets/start_bg.png"),
            save_path: PathBuf::from("save/choice.json"),
        }
    }
}

impl Config {
    pub fn timeline(&self) -> Timeline {
        Timeline::new(self.appear_ms, self.hold_ms, self.fade_ms)
    }

    pub fn start_config(&self) -> StartConfig {
        StartConfig {
            timeline: self.timeline(),
            gap_ms: self.gap_ms,
            background: self.background.clone(),
            save_path: self.save_path.clone(),
        }
    }

    fn to_ini(&self) -> Ini {
        let mut conf = Ini::new();
        conf.set(DISPLAY, "width", Some(self.width.to_string()));
        conf.set(DISPLAY, "height", Some(self.height.to_string()));
        conf.set(DISPLAY, "fps", Some(self.fps.to_string()));
        conf.set(START, "appear_ms", Some(self.appear_ms.to_string()));
        conf.set(START, "hold_ms", Some(self.hold_ms.to_string()));
        conf.set(START, "fade_ms", Some(self.fade_ms.to_string()));
        conf.set(START, "gap_ms", Some(self.gap_ms.to_string()));
        conf.set(START, "background", Some(self.background.display().to_string()));
        conf.set(START, "save_path", Some(self.save_path.display().to_string()));
        conf
    }
}

/// Reads a numeric key, keeping `default` (with a warning) when it is absent
/// or unparsable.
fn number<T: FromStr + Copy + std::fmt::Display>(conf: &Ini, section: &str, key: &str, default: T) -> T {
    match conf.get(section, key) {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("Invalid [{}] {} = '{}', using {}", section, key, raw, default);
            default
        }),
    }
}

fn path_value(conf: &Ini, section: &str, key: &str, default: &Path) -> PathBuf {
    conf.get(section, key)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .map_or_else(|| default.to_path_buf(), PathBuf::from)
}

/// Loads `path`, writing a default file first when none exists. Never fails:
/// anything unreadable falls back to defaults.
pub fn load(path: &Path) -> Config {
    let defaults = Config::default();

    if !path.exists() {
        info!("Config '{}' not found, creating defaults.", path.display());
        if let Err(e) = defaults.to_ini().write(path) {
            warn!("Failed to write default config: {}", e);
        }
        return defaults;
    }

    let mut conf = Ini::new();
    if let Err(e) = conf.load(path) {
        warn!("Failed to load '{}', using defaults: {}", path.display(), e);
        return defaults;
    }

    let mut cfg = Config {
        width: number(&conf, DISPLAY, "width", defaults.width),
        height: number(&conf, DISPLAY, "height", defaults.height),
        fps: number(&conf, DISPLAY, "fps", defaults.fps),
        appear_ms: number(&conf, START, "appear_ms", defaults.appear_ms),
        hold_ms: number(&conf, START, "hold_ms", defaults.hold_ms),
        fade_ms: number(&conf, START, "fade_ms", defaults.fade_ms),
        gap_ms: number(&conf, START, "gap_ms", defaults.gap_ms),
        background: path_value(&conf, START, "background", &defaults.background),
        save_path: path_value(&conf, START, "save_path", &defaults.save_path),
    };

    if cfg.width == 0 || cfg.height == 0 {
        warn!("Zero window size {}x{} in config, using defaults.", cfg.width, cfg.height);
        cfg.width = defaults.width;
        cfg.height = defaults.height;
    }
    if cfg.fps == 0 {
        warn!("fps = 0 in config, using {}.", defaults.fps);
        cfg.fps = defaults.fps;
    }

    info!(
        "Loaded config from '{}' ({}x{} @ {} fps, {} ms per text stage).",
        path.display(),
        cfg.width,
        cfg.height,
        cfg.fps,
        cfg.timeline().total_ms()
    );
    cfg
}

/// Stores a new window size under `[display]`, keeping every other key.
pub fn update_display_resolution(path: &Path, width: u32, height: u32) -> std::io::Result<()> {
    let mut conf = Ini::new();
    if path.exists() {
        if let Err(e) = conf.load(path) {
            warn!("Rewriting unreadable config '{}': {}", path.display(), e);
            conf = Config::default().to_ini();
        }
    } else {
        conf = Config::default().to_ini();
    }
    conf.set(DISPLAY, "width", Some(width.to_string()));
    conf.set(DISPLAY, "height", Some(height.to_string()));
    conf.write(path)?;
    info!("Saved resolution {}x{} to '{}'.", width, height, path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn missing_file_is_created_with_defaults() {
        let dir = TempDir::new().unwrap();
        let p = dir.path().join("config.ini");
        assert_eq!(load(&p), Config::default());
        assert!(p.exists());
        // Reading the generated file back yields the same values.
        assert_eq!(load(&p), Config::default());
    }

    #[test]
    fn values_are_read_and_bad_ones_fall_back() {
        let dir = TempDir::new().unwrap();
        let p = dir.path().join("config.ini");
        fs::write(
            &p,
            "[display]\nwidth = 1024\nheight = abc\nfps = 0\n\n[start]\nhold_ms = 10\nbackground = bg/other.png\n",
        )
        .unwrap();

        let cfg = load(&p);
        assert_eq!(cfg.width, 1024);
        assert_eq!(cfg.height, 600);
        assert_eq!(cfg.fps, 60);
        assert_eq!(cfg.timeline(), Timeline::new(1500, 10, 1500));
        assert_eq!(cfg.background, PathBuf::from("bg/other.png"));
        assert_eq!(cfg.save_path, PathBuf::from("save/choice.json"));
    }

    #[test]
    fn resolution_update_keeps_other_keys() {
        let dir = TempDir::new().unwrap();
        let p = dir.path().join("config.ini");
        fs::write(&p, "[display]\nwidth = 800\nheight = 600\n\n[start]\ngap_ms = 5\n").unwrap();

        update_display_resolution(&p, 1280, 720).unwrap();
        let cfg = load(&p);
        assert_eq!((cfg.width, cfg.height), (1280, 720));
        assert_eq!(cfg.gap_ms, 5);
    }

    #[test]
    fn resolution_update_creates_missing_file() {
        let dir = TempDir::new().unwrap();
        let p = dir.path().join("config.ini");
        update_display_resolution(&p, 1024, 768).unwrap();
        let cfg = load(&p);
        assert_eq!((cfg.width, cfg.height), (1024, 768));
        assert_eq!(cfg.fps, 60);
    }
}
