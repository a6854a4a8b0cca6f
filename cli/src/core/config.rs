//! # Kickoff Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module resolves the two settings the scaffolding pipeline depends on:
//! which starter kit to copy from (the one compiled into the binary unless a
//! directory is configured), and which package-manager program is spawned to
//! install dependencies.
//!
//! ## Architecture
//!
//! Configuration sources (later sources win):
//! 1. Default values defined in the code (embedded starter kit, `npm`)
//! 2. User-specific `config.toml` in the platform config directory
//! 3. Project-specific `.kickoff.toml` in the current directory or ancestors
//! 4. Environment overrides `KICKOFF_STARTER_DIR` / `KICKOFF_PACKAGE_MANAGER`
//!
//! Paths are expanded (`~` to the home directory) and validated before use.
//!
//! ## Examples
//!
//! ```toml
//! [starters]
//! directory = "~/kickoff/starter"
//!
//! [installer]
//! program = "npm"
//! ```
//!
//! ```rust
//! let cfg = config::load_config()?;
//! let materializer = Materializer::new(cfg.starters.kit());
//! let installer = NpmInstaller::new(&cfg.installer.program);
//! ```
//!
use crate::core::error::{KickoffError, Result};
use crate::scaffold::starter::StarterKit;
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    env, fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub starters: StartersConfig,
    #[serde(default)]
    pub installer: InstallerConfig,
}

/// Location of the starter kit (`<directory>/<starter_id>/...`).
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct StartersConfig {
    /// Root directory of the starter templates (can use ~). Will be expanded.
    /// Unset means the kit embedded in the binary.
    #[serde(default)]
    pub directory: Option<String>,
}

impl StartersConfig {
    /// The starter kit selected by this configuration.
    pub fn kit(&self) -> StarterKit {
        StarterKit::from_setting(self.directory.as_deref())
    }
}

/// Settings for the external package manager.
#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct InstallerConfig {
    /// Program spawned as `<program> install [--save|--save-dev] <packages...>`.
    #[serde(default = "default_installer_program")]
    pub program: String,
}

impl Default for InstallerConfig {
    fn default() -> Self {
        Self {
            program: default_installer_program(),
        }
    }
}

fn default_installer_program() -> String {
    "npm".to_string()
}

const PROJECT_CONFIG_FILENAME: &str = ".kickoff.toml";
pub const STARTER_DIR_ENV: &str = "KICKOFF_STARTER_DIR";
pub const PACKAGE_MANAGER_ENV: &str = "KICKOFF_PACKAGE_MANAGER";

/// Loads, merges, expands and validates the configuration for one invocation.
pub fn load_config() -> Result<Config> {
    let user_config = load_user_config()?;
    let project_config = load_project_config()?;
    let mut merged_config = merge_configs(user_config.unwrap_or_default(), project_config);
    apply_env_overrides(
        &mut merged_config,
        env::var(STARTER_DIR_ENV).ok(),
        env::var(PACKAGE_MANAGER_ENV).ok(),
    );
    expand_config_paths(&mut merged_config);
    validate_config(&merged_config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged_config);
    Ok(merged_config)
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "Kickoff", "kickoff") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<Config>> {
    let current_dir = env::current_dir().context("Failed to get current directory")?;
    if let Some(project_config_path) = find_project_config_path(&current_dir) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!("No project configuration file (.kickoff.toml) found in current directory or ancestors.");
        Ok(None)
    }
}

/// Walks from `start` towards the filesystem root looking for `.kickoff.toml`.
/// The search stops at the first directory containing `.git`.
fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path: &Path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

/// Project values win over user values whenever they differ from the defaults.
fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let project_cfg = match project {
        Some(p) => p,
        None => return user,
    };
    let mut merged = Config::default();
    merged.starters.directory = project_cfg.starters.directory.or(user.starters.directory);
    merged.installer.program = if project_cfg.installer.program != default_installer_program() {
        project_cfg.installer.program
    } else {
        user.installer.program
    };
    merged
}

fn apply_env_overrides(
    config: &mut Config,
    starter_dir: Option<String>,
    package_manager: Option<String>,
) {
    if let Some(dir) = starter_dir.filter(|d| !d.is_empty()) {
        debug!("{} overrides starter directory: {}", STARTER_DIR_ENV, dir);
        config.starters.directory = Some(dir);
    }
    if let Some(program) = package_manager.filter(|p| !p.is_empty()) {
        debug!("{} overrides package manager: {}", PACKAGE_MANAGER_ENV, program);
        config.installer.program = program;
    }
}

fn expand_config_paths(config: &mut Config) {
    if let Some(dir) = config.starters.directory.as_mut() {
        *dir = shellexpand::tilde(dir.as_str()).into_owned();
        debug!("Expanded starter directory: {}", dir);
    }
}

fn validate_config(config: &Config) -> Result<()> {
    if let Some(dir) = &config.starters.directory {
        let starter_dir = PathBuf::from(dir);
        if !starter_dir.exists() {
            return Err(anyhow!(KickoffError::Config(format!(
                "Configured starter directory '{}' does not exist.",
                starter_dir.display()
            ))));
        } else if !starter_dir.is_dir() {
            return Err(anyhow!(KickoffError::Config(format!(
                "Configured starter path '{}' exists but is not a directory.",
                starter_dir.display()
            ))));
        }
    }
    if config.installer.program.trim().is_empty() {
        return Err(anyhow!(KickoffError::Config(
            "Installer program cannot be empty.".to_string()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_deserialize_basic_toml() {
        let toml_content = r#"
            [starters]
            directory = "/opt/kickoff/starter"

            [installer]
            program = "pnpm"
        "#;

        let config: Config = toml::from_str(toml_content).expect("Failed to parse TOML");
        assert_eq!(
            config.starters.directory.as_deref(),
            Some("/opt/kickoff/starter")
        );
        assert_eq!(config.installer.program, "pnpm");
    }

    #[test]
    fn test_deserialize_empty_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.starters.directory, None);
        assert_eq!(config.starters.kit(), StarterKit::Bundled);
        assert_eq!(config.installer.program, "npm");
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let result: std::result::Result<Config, _> = toml::from_str("[installer]\nprogrm = \"yarn\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_merge_prefers_project_values() {
        let user = Config {
            installer: InstallerConfig {
                program: "yarn".into(),
            },
            ..Default::default()
        };
        let project = Config {
            starters: StartersConfig {
                directory: Some("/project/starter".into()),
            },
            ..Default::default()
        };
        let merged = merge_configs(user, Some(project));
        assert_eq!(merged.starters.directory.as_deref(), Some("/project/starter"));
        // Project left the installer at its default, so the user's choice survives.
        assert_eq!(merged.installer.program, "yarn");
    }

    #[test]
    fn test_env_overrides_win() {
        let mut config = Config::default();
        apply_env_overrides(
            &mut config,
            Some("/env/starter".into()),
            Some("/usr/bin/fake-npm".into()),
        );
        assert_eq!(config.starters.directory.as_deref(), Some("/env/starter"));
        assert_eq!(config.installer.program, "/usr/bin/fake-npm");

        // Empty values are ignored.
        apply_env_overrides(&mut config, Some(String::new()), None);
        assert_eq!(config.starters.directory.as_deref(), Some("/env/starter"));
    }

    #[test]
    fn test_path_expansion() {
        let mut config = Config {
            starters: StartersConfig {
                directory: Some("~/starter_test".to_string()),
            },
            ..Default::default()
        };
        expand_config_paths(&mut config);
        let home_dir = directories::BaseDirs::new().unwrap().home_dir().to_path_buf();
        assert_eq!(
            config.starters.directory.as_deref(),
            Some(home_dir.join("starter_test").to_string_lossy().as_ref())
        );
    }

    #[test]
    fn test_find_project_config_in_ancestor() {
        let temp_dir = tempdir().unwrap();
        let nested = temp_dir.path().join("a/b");
        fs::create_dir_all(&nested).unwrap();
        fs::write(temp_dir.path().join(PROJECT_CONFIG_FILENAME), "").unwrap();
        fs::create_dir(temp_dir.path().join(".git")).unwrap();

        let found = find_project_config_path(&nested).unwrap();
        assert_eq!(found, temp_dir.path().join(PROJECT_CONFIG_FILENAME));
    }

    #[test]
    fn test_find_project_config_stops_at_git_root() {
        let temp_dir = tempdir().unwrap();
        let repo = temp_dir.path().join("repo");
        fs::create_dir_all(repo.join(".git")).unwrap();
        // Above the repository root, must not be picked up.
        fs::write(temp_dir.path().join(PROJECT_CONFIG_FILENAME), "").unwrap();

        assert!(find_project_config_path(&repo).is_none());
    }

    #[test]
    fn test_validate_config_starter_path_is_file() {
        let temp_dir = tempdir().unwrap();
        let file_path = temp_dir.path().join("not_a_dir");
        fs::write(&file_path, "").unwrap();

        let config = Config {
            starters: StartersConfig {
                directory: Some(file_path.to_string_lossy().to_string()),
            },
            ..Default::default()
        };
        let result = validate_config(&config);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("is not a directory"));
    }

    #[test]
    fn test_validate_config_empty_program() {
        let config = Config {
            installer: InstallerConfig {
                program: "  ".into(),
            },
            ..Default::default()
        };
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_validate_config_missing_starter_dir() {
        let temp_dir = tempdir().unwrap();
        let config = Config {
            starters: StartersConfig {
                directory: Some(temp_dir.path().join("gone").to_string_lossy().to_string()),
            },
            ..Default::default()
        };
        assert!(validate_config(&config)
            .unwrap_err()
            .to_string()
            .contains("does not exist"));
    }

    #[test]
    fn test_merge_keeps_user_starter_dir() {
        let user = Config {
            starters: StartersConfig {
                directory: Some("/user/starter".into()),
            },
            ..Default::default()
        };
        let merged = merge_configs(user, Some(Config::default()));
        assert_eq!(merged.starters.directory.as_deref(), Some("/user/starter"));
    }
}
