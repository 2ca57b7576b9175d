// SPDX-License-Identifier: PMPL-1.0-or-later

//! CLI configuration
//!
//! Read from, in order: the `--config` path, the file named by
//! `LOCALE_SYMBOLS_CONFIG`, `./locale-symbols.yaml`. With none of those
//! present the defaults apply.
//!
//! ```yaml
//! default_locale: hi_IN
//! export_format: yaml
//! bundle_dirs: [bundles, /usr/share/locale-symbols]
//! log_level: debug
//! ```

use crate::export::ExportFormat;
use crate::locale::LocaleId;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_ENV: &str = "LOCALE_SYMBOLS_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "locale-symbols.yaml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Locale used when a command is given none.
    pub default_locale: String,
    pub export_format: ExportFormat,
    /// Directories searched for `<locale>.{json,yaml,yml}` before the
    /// built-in tables. Relative entries resolve against the config file.
    pub bundle_dirs: Vec<PathBuf>,
    /// `tracing` filter directive, used when `RUST_LOG` is unset.
    pub log_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_locale: "hi_IN".to_string(),
            export_format: ExportFormat::Json,
            bundle_dirs: Vec::new(),
            log_level: None,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let mut config: Config = serde_yaml::from_str(&raw)
            .with_context(|| format!("parsing config {}", path.display()))?;

        if let Some(base) = path.parent() {
            for dir in &mut config.bundle_dirs {
                if dir.is_relative() {
                    *dir = base.join(&*dir);
                }
            }
        }

        Ok(config)
    }

    /// Path of the active configuration file, if there is one.
    ///
    /// An explicit or `LOCALE_SYMBOLS_CONFIG` path is returned even when it
    /// does not exist, so that loading it reports the error.
    pub fn locate(explicit: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(path.to_path_buf());
        }
        match env::var(CONFIG_ENV) {
            Ok(value) if !value.trim().is_empty() => {
                return Some(PathBuf::from(value.trim()));
            }
            _ => {}
        }
        let fallback = Path::new(DEFAULT_CONFIG_FILE);
        fallback.is_file().then(|| fallback.to_path_buf())
    }

    /// Locate and load the active configuration.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        match Self::locate(explicit) {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn default_locale(&self) -> Result<LocaleId> {
        LocaleId::parse(&self.default_locale)
            .with_context(|| format!("invalid default_locale {:?}", self.default_locale))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_apply_to_missing_fields() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("locale-symbols.yaml");
        fs::write(&path, "export_format: nickel\n").unwrap();
        let config = Config::load(&path).unwrap();
        assert_eq!(config.export_format, ExportFormat::Nickel);
        assert_eq!(config.default_locale, "hi_IN");
        assert!(config.bundle_dirs.is_empty());
    }

    #[test]
    fn relative_bundle_dirs_resolve_against_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cfg.yaml");
        fs::write(&path, "bundle_dirs: [bundles, /abs/bundles]\n").unwrap();
        let config = Config::load(&path).unwrap();
        assert_eq!(config.bundle_dirs[0], dir.path().join("bundles"));
        assert_eq!(config.bundle_dirs[1], PathBuf::from("/abs/bundles"));
    }

    #[test]
    fn unknown_fields_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cfg.yaml");
        fs::write(&path, "default_locle: hi_IN\n").unwrap();
        assert!(Config::load(&path).is_err());
    }

    #[test]
    fn explicit_path_wins() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cfg.yaml");
        fs::write(&path, "default_locale: en_US\n").unwrap();
        let config = Config::resolve(Some(&path)).unwrap();
        assert_eq!(config.default_locale().unwrap().to_string(), "en_US");
    }

    #[test]
    fn explicit_path_is_located_even_when_missing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.yaml");
        assert_eq!(Config::locate(Some(&path)), Some(path.clone()));
        assert!(Config::resolve(Some(&path)).is_err());
    }

    #[test]
    fn invalid_default_locale_is_reported() {
        let config = Config {
            default_locale: "nope".to_string(),
            ..Config::default()
        };
        assert!(config.default_locale().is_err());
    }
}
