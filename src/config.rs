use std::path::{Path, PathBuf};

use clap::{value_parser, Arg, ArgMatches, Command};
use log::info;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::{BackdropError, ThemeMode};

/// Settings read from an optional JSON file, then overridden from the command line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackdropConfig {
    pub mode: ThemeMode,
    /// Fixed seed for the star layers; a fresh one is drawn when absent.
    pub seed: Option<u64>,
    pub log_level: String,
}

impl Default for BackdropConfig {
    fn default() -> Self {
        Self {
            mode: ThemeMode::Dark,
            seed: None,
            log_level: "info".into(),
        }
    }
}

impl BackdropConfig {
    pub fn load(path: &Path) -> Result<Self, BackdropError> {
        let json = std::fs::read_to_string(path).map_err(|source| BackdropError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&json)?)
    }

    /// File named by `--config` (or defaults), with the other flags applied on top.
    pub fn resolve(args: &CliArgs) -> Result<Self, BackdropError> {
        let mut config = match &args.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        config.apply_cli_overrides(args);
        Ok(config)
    }

    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(mode) = args.mode {
            self.mode = mode;
        }
        if let Some(seed) = args.seed {
            self.seed = Some(seed);
        }
        if let Some(level) = &args.log_level {
            self.log_level = level.clone();
        }
    }

    pub fn rng(&self) -> ChaCha8Rng {
        let seed = self.seed.unwrap_or_else(rand::random);
        info!("Starfield seed: {}", seed);
        ChaCha8Rng::seed_from_u64(seed)
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct CliArgs {
    pub config: Option<PathBuf>,
    pub mode: Option<ThemeMode>,
    pub seed: Option<u64>,
    pub log_level: Option<String>,
}

pub fn command() -> Command {
    Command::new("starfield-backdrop")
        .about("Ambient parallax starfield")
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .value_parser(value_parser!(PathBuf))
                .help("JSON config file"),
        )
        .arg(
            Arg::new("mode")
                .long("mode")
                .value_parser(["dark", "light"])
                .help("Color theme"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .value_parser(value_parser!(u64))
                .help("Seed for star placement"),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .help("Log filter, e.g. info or starfield_backdrop=debug"),
        )
}

impl CliArgs {
    pub fn from_matches(matches: &ArgMatches) -> Result<Self, BackdropError> {
        let mode = matches
            .get_one::<String>("mode")
            .map(|mode| ThemeMode::from_name(mode))
            .transpose()?;

        Ok(Self {
            config: matches.get_one::<PathBuf>("config").cloned(),
            mode,
            seed: matches.get_one::<u64>("seed").copied(),
            log_level: matches.get_one::<String>("log-level").cloned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> CliArgs {
        let matches = command()
            .try_get_matches_from(std::iter::once("starfield-backdrop").chain(argv.iter().copied()))
            .unwrap();
        CliArgs::from_matches(&matches).unwrap()
    }

    #[test]
    fn flags_are_parsed() {
        let args = parse(&["--mode", "light", "--seed", "42", "--log-level", "debug"]);
        assert_eq!(args.mode, Some(ThemeMode::Light));
        assert_eq!(args.seed, Some(42));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert_eq!(args.config, None);
    }

    #[test]
    fn unknown_mode_is_rejected() {
        let result = command().try_get_matches_from(["starfield-backdrop", "--mode", "sepia"]);
        assert!(result.is_err());
    }

    #[test]
    fn cli_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("backdrop.json");
        std::fs::write(&path, r#"{ "mode": "light", "seed": 7 }"#).unwrap();

        let args = parse(&["--config", path.to_str().unwrap(), "--seed", "9"]);
        let config = BackdropConfig::resolve(&args).unwrap();
        assert_eq!(config.mode, ThemeMode::Light);
        assert_eq!(config.seed, Some(9));
        // missing keys fall back to defaults
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn no_overrides_keeps_defaults() {
        let config = BackdropConfig::resolve(&CliArgs::default()).unwrap();
        assert_eq!(config, BackdropConfig::default());
    }

    #[test]
    fn bad_files_are_reported() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        assert!(matches!(
            BackdropConfig::load(&missing),
            Err(BackdropError::ReadConfig { .. })
        ));

        let broken = dir.path().join("broken.json");
        std::fs::write(&broken, r#"{ "mode": "sepia" }"#).unwrap();
        assert!(matches!(
            BackdropConfig::load(&broken),
            Err(BackdropError::ParseConfig(_))
        ));
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        use rand::Rng;

        let config = BackdropConfig {
            seed: Some(5),
            ..Default::default()
        };
        assert_eq!(config.rng().gen::<u64>(), config.rng().gen::<u64>());
    }
}
