use std::{
    fs, io,
    path::{Path, PathBuf},
    str::FromStr,
};

use dirs::preference_dir;
use log::LevelFilter;
use ron::{self, error::SpannedError, extensions::Extensions};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::renderer::Glyphs;

const DEFAULT_SETTINGS: &str = include_str!("./default_settings.ron");

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Could not access settings file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Error reading settings file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: SpannedError,
    },
    #[error("Invalid log level '{0}', expected off, error, warn, info, debug or trace")]
    InvalidLogLevel(String),
    #[error("Could not find the preference directory")]
    NoPreferenceDir,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Generator used by `/gen h w`, the registry default when missing.
    #[serde(default)]
    pub default_algorithm: Option<String>,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub markers: Glyphs,
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_prompt() -> String {
    "> ".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_algorithm: Some("exploration".to_string()),
            seed: None,
            log_level: default_log_level(),
            markers: Glyphs::default(),
            prompt: default_prompt(),
        }
    }
}

impl Settings {
    pub fn default_path() -> Result<PathBuf, SettingsError> {
        preference_dir()
            .map(|dir| dir.join("tlaby").join("settings.ron"))
            .ok_or(SettingsError::NoPreferenceDir)
    }

    /// Reads the settings file, writing the default one first if there is none.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        match fs::read_to_string(path) {
            Ok(settings_string) => Self::parse(&settings_string, path),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::info!("Creating default settings file at {:?}", path);
                Self::reset_config(path)?;
                Self::parse(DEFAULT_SETTINGS, path)
            }
            Err(source) => Err(SettingsError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    pub fn reset_config(path: &Path) -> Result<(), SettingsError> {
        let io_err = |source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        fs::write(path, DEFAULT_SETTINGS).map_err(io_err)
    }

    pub fn log_level(&self) -> Result<LevelFilter, SettingsError> {
        parse_level(&self.log_level)
    }

    fn parse(settings_string: &str, path: &Path) -> Result<Self, SettingsError> {
        ron::Options::default()
            .with_default_extension(Extensions::IMPLICIT_SOME)
            .from_str(settings_string)
            .map_err(|source| SettingsError::Parse {
                path: path.to_path_buf(),
                source,
            })
    }
}

pub fn parse_level(level: &str) -> Result<LevelFilter, SettingsError> {
    LevelFilter::from_str(level).map_err(|_| SettingsError::InvalidLogLevel(level.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_settings_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("tlaby-{}-{}", name, std::process::id()))
            .join("settings.ron")
    }

    #[test]
    fn default_file_matches_default() {
        let parsed = Settings::parse(DEFAULT_SETTINGS, Path::new("default")).unwrap();
        assert_eq!(parsed, Settings::default());
        assert_eq!(parsed.log_level().unwrap(), LevelFilter::Warn);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let parsed =
            Settings::parse("(seed: 7, markers: (path: '.'))", Path::new("partial")).unwrap();

        assert_eq!(parsed.seed, Some(7));
        assert_eq!(parsed.markers.path, '.');
        assert_eq!(parsed.markers.start, 'D');
        assert_eq!(parsed.default_algorithm, None);
        assert_eq!(parsed.prompt, "> ");
    }

    #[test]
    fn invalid_file() {
        let err = Settings::parse("(seed: \"seven\")", Path::new("broken")).unwrap_err();
        assert!(matches!(err, SettingsError::Parse { .. }));
    }

    #[test]
    fn log_levels() {
        assert_eq!(parse_level("debug").unwrap(), LevelFilter::Debug);
        assert_eq!(parse_level("OFF").unwrap(), LevelFilter::Off);
        assert!(matches!(
            parse_level("loud"),
            Err(SettingsError::InvalidLogLevel(level)) if level == "loud"
        ));
    }

    #[test]
    fn load_creates_default_file() {
        let path = temp_settings_path("load");
        let _ = fs::remove_file(&path);

        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(fs::read_to_string(&path).unwrap(), DEFAULT_SETTINGS);

        fs::write(&path, "(default_algorithm: \"wilson\")").unwrap();
        assert_eq!(
            Settings::load(&path).unwrap().default_algorithm.as_deref(),
            Some("wilson")
        );

        Settings::reset_config(&path).unwrap();
        assert_eq!(Settings::load(&path).unwrap(), Settings::default());

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }
}
