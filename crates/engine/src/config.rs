//! Game configuration, read from the environment.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use log::LevelFilter;

use crate::types::{STARS, TICK_MS};

/// Runtime settings for one game session.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Root of the sprite tree (`spaceship/`, `garbage/`, `gameover/`).
    pub sprites_dir: PathBuf,
    pub tick_ms: u64,
    pub stars: usize,
    /// Draw obstacle bounding boxes, ship telemetry and the task count.
    pub debug: bool,
    /// Log file; `None` disables logging.
    pub log_path: Option<PathBuf>,
    pub log_level: LevelFilter,
    /// RNG seed; `None` lets the binary pick one.
    pub seed: Option<u32>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            sprites_dir: PathBuf::from("sprites"),
            tick_ms: TICK_MS,
            stars: STARS,
            debug: false,
            log_path: Some(PathBuf::from("space-garbage.log")),
            log_level: LevelFilter::Info,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create from environment variables, falling back to defaults for
    /// anything unset or unparsable.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Same as [`GameConfig::from_env`] over an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let sprites_dir = lookup("SPACE_GARBAGE_SPRITES")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.sprites_dir);

        let tick_ms = lookup("SPACE_GARBAGE_TICK_MS")
            .and_then(|s| s.trim().parse().ok())
            .filter(|&ms: &u64| ms > 0)
            .unwrap_or(defaults.tick_ms);

        let stars = lookup("SPACE_GARBAGE_STARS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.stars);

        let debug = lookup("SPACE_GARBAGE_DEBUG")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(defaults.debug);

        let log_path = match lookup("SPACE_GARBAGE_LOG_PATH") {
            Some(s) if s.trim().is_empty() => None,
            Some(s) => Some(PathBuf::from(s.trim())),
            None => defaults.log_path,
        };

        let log_level = lookup("SPACE_GARBAGE_LOG_LEVEL")
            .and_then(|s| LevelFilter::from_str(s.trim()).ok())
            .unwrap_or(defaults.log_level);

        let seed = lookup("SPACE_GARBAGE_SEED").and_then(|s| s.trim().parse().ok());

        Self {
            sprites_dir,
            tick_ms,
            stars,
            debug,
            log_path,
            log_level,
            seed,
        }
    }

    pub fn tick_duration(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        assert_eq!(GameConfig::from_lookup(lookup(&[])), GameConfig::default());
    }

    #[test]
    fn default_sky_has_400_stars() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.stars, 400);
        assert_eq!(cfg.tick_ms, 100);
    }

    #[test]
    fn reads_every_variable() {
        let cfg = GameConfig::from_lookup(lookup(&[
            ("SPACE_GARBAGE_SPRITES", "/tmp/art"),
            ("SPACE_GARBAGE_TICK_MS", "50"),
            ("SPACE_GARBAGE_STARS", "10"),
            ("SPACE_GARBAGE_DEBUG", "TRUE"),
            ("SPACE_GARBAGE_LOG_PATH", "game.log"),
            ("SPACE_GARBAGE_LOG_LEVEL", "debug"),
            ("SPACE_GARBAGE_SEED", "42"),
        ]));
        assert_eq!(cfg.sprites_dir, PathBuf::from("/tmp/art"));
        assert_eq!(cfg.tick_duration(), Duration::from_millis(50));
        assert_eq!(cfg.stars, 10);
        assert!(cfg.debug);
        assert_eq!(cfg.log_path, Some(PathBuf::from("game.log")));
        assert_eq!(cfg.log_level, LevelFilter::Debug);
        assert_eq!(cfg.seed, Some(42));
    }

    #[test]
    fn bad_values_fall_back() {
        let cfg = GameConfig::from_lookup(lookup(&[
            ("SPACE_GARBAGE_TICK_MS", "0"),
            ("SPACE_GARBAGE_STARS", "many"),
            ("SPACE_GARBAGE_LOG_LEVEL", "loud"),
            ("SPACE_GARBAGE_SEED", "-1"),
        ]));
        assert_eq!(cfg.tick_ms, TICK_MS);
        assert_eq!(cfg.stars, STARS);
        assert_eq!(cfg.log_level, LevelFilter::Info);
        assert_eq!(cfg.seed, None);
    }

    #[test]
    fn blank_log_path_disables_logging() {
        let cfg = GameConfig::from_lookup(lookup(&[("SPACE_GARBAGE_LOG_PATH", "  ")]));
        assert_eq!(cfg.log_path, None);
    }
}
