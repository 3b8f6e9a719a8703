//! Layered game configuration.
//!
//! Values are resolved in order, later layers winning: built-in defaults, the
//! TOML file named by `SEVENS_CONFIG`, `SEVENS_*` environment variables, and
//! finally command-line flags. Every value remembers where it came from.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

use sevens_engine::game::SCORE_THRESHOLD;

pub const MIN_PLAYERS: u32 = 2;
pub const MAX_PLAYERS: u32 = 8;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Game ends once any cumulative score reaches this
    pub threshold: u32,
    /// Seats in `internal` mode
    pub players: u32,
    pub seed: Option<u64>,
    /// JSONL file receiving one record per round
    pub round_log: Option<PathBuf>,
    /// Abort a game that has not finished after this many rounds
    pub max_rounds: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            threshold: SCORE_THRESHOLD,
            players: 4,
            seed: None,
            round_log: None,
            max_rounds: 10_000,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
    Cli,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigSources {
    pub threshold: ValueSource,
    pub players: ValueSource,
    pub seed: ValueSource,
    pub round_log: ValueSource,
    pub max_rounds: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            threshold: ValueSource::Default,
            players: ValueSource::Default,
            seed: ValueSource::Default,
            round_log: ValueSource::Default,
            max_rounds: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

/// Values given on the command line.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub seed: Option<u64>,
    pub threshold: Option<u32>,
    pub round_log: Option<PathBuf>,
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "malformed config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Resolves defaults, the config file and the environment.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("SEVENS_CONFIG")
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.threshold {
            cfg.threshold = v;
            sources.threshold = ValueSource::File;
        }
        if let Some(v) = f.players {
            cfg.players = v;
            sources.players = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.round_log {
            cfg.round_log = Some(v);
            sources.round_log = ValueSource::File;
        }
        if let Some(v) = f.max_rounds {
            cfg.max_rounds = v;
            sources.max_rounds = ValueSource::File;
        }
    }

    if let Some(seed) = env_value("SEVENS_SEED") {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid(format!("Invalid SEVENS_SEED: {}", seed)))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Some(threshold) = env_value("SEVENS_THRESHOLD") {
        cfg.threshold = threshold.parse().map_err(|_| {
            ConfigError::Invalid(format!("Invalid SEVENS_THRESHOLD: {}", threshold))
        })?;
        sources.threshold = ValueSource::Env;
    }
    if let Some(players) = env_value("SEVENS_PLAYERS") {
        cfg.players = players
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("Invalid SEVENS_PLAYERS: {}", players)))?;
        sources.players = ValueSource::Env;
    }
    if let Some(path) = env_value("SEVENS_ROUND_LOG") {
        cfg.round_log = Some(PathBuf::from(path));
        sources.round_log = ValueSource::Env;
    }
    if let Some(max) = env_value("SEVENS_MAX_ROUNDS") {
        cfg.max_rounds = max
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("Invalid SEVENS_MAX_ROUNDS: {}", max)))?;
        sources.max_rounds = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

/// Full resolution including command-line flags.
pub fn resolve(overrides: &CliOverrides) -> Result<ConfigResolved, ConfigError> {
    let mut resolved = load_with_sources()?;
    resolved.apply(overrides)?;
    Ok(resolved)
}

impl ConfigResolved {
    pub fn apply(&mut self, overrides: &CliOverrides) -> Result<(), ConfigError> {
        if let Some(seed) = overrides.seed {
            self.config.seed = Some(seed);
            self.sources.seed = ValueSource::Cli;
        }
        if let Some(threshold) = overrides.threshold {
            self.config.threshold = threshold;
            self.sources.threshold = ValueSource::Cli;
        }
        if let Some(path) = &overrides.round_log {
            self.config.round_log = Some(path.clone());
            self.sources.round_log = ValueSource::Cli;
        }
        validate(&self.config)
    }
}

fn env_value(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    threshold: Option<u32>,
    #[serde(default)]
    players: Option<u32>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    round_log: Option<PathBuf>,
    #[serde(default)]
    max_rounds: Option<u32>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.threshold == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: threshold must be >=1".into(),
        ));
    }
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&cfg.players) {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: players must be between {} and {}",
            MIN_PLAYERS, MAX_PLAYERS
        )));
    }
    if cfg.max_rounds == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: max_rounds must be >=1".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(validate(&Config::default()).is_ok());
    }

    #[test]
    fn player_count_is_bounded() {
        let mut cfg = Config::default();
        cfg.players = 1;
        assert!(validate(&cfg).is_err());
        cfg.players = 9;
        assert!(validate(&cfg).is_err());
        cfg.players = 8;
        assert!(validate(&cfg).is_ok());
    }

    #[test]
    fn cli_overrides_win_and_are_tracked() {
        let mut resolved = ConfigResolved {
            config: Config::default(),
            sources: ConfigSources::default(),
        };
        resolved
            .apply(&CliOverrides {
                seed: Some(9),
                threshold: Some(20),
                round_log: None,
            })
            .unwrap();
        assert_eq!(resolved.config.seed, Some(9));
        assert_eq!(resolved.config.threshold, 20);
        assert_eq!(resolved.sources.seed, ValueSource::Cli);
        assert_eq!(resolved.sources.round_log, ValueSource::Default);

        let err = resolved
            .apply(&CliOverrides {
                threshold: Some(0),
                ..CliOverrides::default()
            })
            .unwrap_err();
        assert!(err.to_string().contains("threshold"));
    }
}
