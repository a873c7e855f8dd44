// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, anyhow, bail};
use leaddesk_app::{ColumnCatalog, LeadField, SortDirection, SortSpec, TabKind};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const APP_NAME: &str = "leaddesk";
const CONFIG_VERSION: i64 = 1;
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub version: i64,
    #[serde(default)]
    pub ui: Ui,
    #[serde(default)]
    pub table: Table,
    #[serde(default)]
    pub contact: Contact,
    #[serde(default)]
    pub logging: Logging,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            ui: Ui::default(),
            table: Table::default(),
            contact: Contact::default(),
            logging: Logging::default(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Ui {
    pub start_tab: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Table {
    pub sort: Option<String>,
    pub sort_direction: Option<String>,
    pub columns: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Contact {
    pub opener: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Logging {
    pub level: Option<String>,
    pub dir: Option<String>,
}

impl Config {
    pub fn default_path() -> Result<PathBuf> {
        if let Some(path) = env::var_os("LEADDESK_CONFIG_PATH") {
            return Ok(PathBuf::from(path));
        }

        let config_root = dirs::config_dir().ok_or_else(|| {
            anyhow!("cannot resolve config directory; set LEADDESK_CONFIG_PATH to the config file")
        })?;
        Ok(config_root.join(APP_NAME).join("config.toml"))
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("read config file {}", path.display()))?;
        let value: toml::Value = toml::from_str(&raw)
            .with_context(|| format!("parse TOML config {}", path.display()))?;

        let version = value
            .get("version")
            .and_then(toml::Value::as_integer)
            .ok_or_else(|| {
                anyhow!(
                    "config file {} is not versioned. Add `version = 1` at the top and keep values under [ui], [table], [contact], and [logging]",
                    path.display()
                )
            })?;

        if version != CONFIG_VERSION {
            bail!(
                "unsupported config version {} in {}; expected version = 1. Run `leaddesk --print-example-config` for a template",
                version,
                path.display()
            );
        }

        let config: Config = value
            .try_into()
            .with_context(|| format!("decode config {}", path.display()))?;
        config.validate(path)?;
        Ok(config)
    }

    fn validate(&self, path: &Path) -> Result<()> {
        self.start_tab()
            .with_context(|| format!("invalid [ui] in {}", path.display()))?;
        self.sort()
            .with_context(|| format!("invalid [table] in {}", path.display()))?;
        self.columns()
            .with_context(|| format!("invalid [table] in {}", path.display()))?;

        if let Some(opener) = &self.contact.opener
            && opener.trim().is_empty()
        {
            bail!(
                "contact.opener in {} is empty; remove it to use the platform default",
                path.display()
            );
        }
        Ok(())
    }

    pub fn start_tab(&self) -> Result<TabKind> {
        let Some(raw) = &self.ui.start_tab else {
            return Ok(TabKind::Leads);
        };
        TabKind::parse(raw).ok_or_else(|| {
            anyhow!(
                "unknown start_tab {raw:?}; use one of: {}",
                TabKind::ALL.map(TabKind::label).join(", ")
            )
        })
    }

    pub fn sort(&self) -> Result<SortSpec> {
        let mut spec = SortSpec::default();
        if let Some(raw) = &self.table.sort {
            spec.column = parse_field(raw)?;
        }
        if let Some(raw) = &self.table.sort_direction {
            spec.direction = SortDirection::parse(raw)
                .ok_or_else(|| anyhow!("unknown sort_direction {raw:?}; use asc or desc"))?;
        }
        Ok(spec)
    }

    pub fn columns(&self) -> Result<ColumnCatalog> {
        let Some(keys) = &self.table.columns else {
            return Ok(ColumnCatalog::default());
        };
        let layout = keys
            .iter()
            .map(|key| parse_field(key))
            .collect::<Result<Vec<_>>>()?;
        ColumnCatalog::with_visible(&layout)
    }

    pub fn opener(&self) -> &str {
        self.contact
            .opener
            .as_deref()
            .map(str::trim)
            .unwrap_or(default_opener())
    }

    pub fn log_filter(&self) -> &str {
        self.logging.level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }

    pub fn log_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.logging.dir {
            return Ok(PathBuf::from(dir));
        }
        let data_root = dirs::data_local_dir().ok_or_else(|| {
            anyhow!("cannot resolve data directory; set [logging].dir in the config")
        })?;
        Ok(data_root.join(APP_NAME).join("logs"))
    }

    pub fn example_config(path: &Path) -> String {
        format!(
            "# leaddesk config\n# Place this file at: {}\n\nversion = 1\n\n[ui]\n# dashboard | leads | appointments | team | analytics | reports\nstart_tab = \"leads\"\n\n[table]\nsort = \"name\"\nsort_direction = \"asc\"\n# Visible columns in display order. Hidden columns keep catalog order.\ncolumns = [\"name\", \"phone\", \"email\", \"address\", \"type\"]\n\n[contact]\n# Command that receives tel:, sms:, and mailto: links.\nopener = \"{}\"\n\n[logging]\n# EnvFilter directive; LEADDESK_LOG overrides it.\nlevel = \"{}\"\n# dir = \"/absolute/path/to/logs\"\n",
            path.display(),
            default_opener(),
            DEFAULT_LOG_LEVEL,
        )
    }
}

pub fn parse_field(raw: &str) -> Result<LeadField> {
    LeadField::parse(raw).ok_or_else(|| {
        anyhow!(
            "unknown column {raw:?}; use one of: {}",
            LeadField::ALL.map(LeadField::as_str).join(", ")
        )
    })
}

fn default_opener() -> &'static str {
    if cfg!(target_os = "macos") {
        "open"
    } else {
        "xdg-open"
    }
}

#[cfg(test)]
mod tests {
    use super::Config;
    use anyhow::Result;
    use leaddesk_app::{ColumnCatalog, LeadField, SortDirection, TabKind};
    use std::path::PathBuf;
    use std::sync::{Mutex, OnceLock};

    fn write_config(content: &str) -> Result<(tempfile::TempDir, PathBuf)> {
        let temp = tempfile::tempdir()?;
        let path = temp.path().join("config.toml");
        std::fs::write(&path, content)?;
        Ok((temp, path))
    }

    fn env_lock() -> std::sync::MutexGuard<'static, ()> {
        static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        match ENV_LOCK.get_or_init(|| Mutex::new(())).lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    #[test]
    fn missing_config_uses_defaults() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let config = Config::load(&temp.path().join("missing.toml"))?;
        assert_eq!(config.version, 1);
        assert_eq!(config.start_tab()?, TabKind::Leads);
        assert_eq!(config.columns()?, ColumnCatalog::default());
        assert_eq!(config.log_filter(), "info");
        Ok(())
    }

    #[test]
    fn unversioned_config_is_rejected_with_actionable_message() -> Result<()> {
        let (_temp, path) = write_config("[ui]\nstart_tab = \"team\"\n")?;
        let error = Config::load(&path).expect_err("unversioned config should fail");
        let message = error.to_string();
        assert!(message.contains("version = 1"));
        assert!(message.contains("[ui], [table], [contact], and [logging]"));
        Ok(())
    }

    #[test]
    fn full_config_parses() -> Result<()> {
        let (_temp, path) = write_config(
            "version = 1\n[ui]\nstart_tab = \"Team\"\n[table]\nsort = \"secondarySource\"\nsort_direction = \"desc\"\ncolumns = [\"status\", \"name\"]\n[contact]\nopener = \" my-opener \"\n[logging]\nlevel = \"debug\"\ndir = \"/var/log/leaddesk\"\n",
        )?;

        let config = Config::load(&path)?;
        assert_eq!(config.start_tab()?, TabKind::Team);
        let sort = config.sort()?;
        assert_eq!(sort.column, LeadField::SecondarySource);
        assert_eq!(sort.direction, SortDirection::Desc);
        assert_eq!(
            config.columns()?.visible_fields(),
            vec![LeadField::Status, LeadField::Name]
        );
        assert_eq!(config.opener(), "my-opener");
        assert_eq!(config.log_filter(), "debug");
        assert_eq!(config.log_dir()?, PathBuf::from("/var/log/leaddesk"));
        Ok(())
    }

    #[test]
    fn malformed_config_returns_parse_error() -> Result<()> {
        let (_temp, path) = write_config("{{not toml")?;
        let error = Config::load(&path).expect_err("malformed config should fail");
        assert!(error.to_string().contains("parse TOML config"));
        Ok(())
    }

    #[test]
    fn unsupported_config_version_is_rejected() -> Result<()> {
        let (_temp, path) = write_config("version = 2\n")?;
        let error = Config::load(&path).expect_err("v2 config should fail");
        assert!(error.to_string().contains("unsupported config version 2"));
        Ok(())
    }

    #[test]
    fn unknown_column_names_the_valid_keys() -> Result<()> {
        let (_temp, path) = write_config("version = 1\n[table]\ncolumns = [\"name\", \"zip\"]\n")?;
        let error = Config::load(&path).expect_err("unknown column should fail");
        let message = format!("{error:#}");
        assert!(message.contains("unknown column \"zip\""), "got {message}");
        assert!(message.contains("thirdSource"), "got {message}");
        Ok(())
    }

    #[test]
    fn duplicate_columns_are_rejected() -> Result<()> {
        let (_temp, path) =
            write_config("version = 1\n[table]\ncolumns = [\"name\", \"phone\", \"name\"]\n")?;
        let error = Config::load(&path).expect_err("duplicate column should fail");
        assert!(format!("{error:#}").contains("more than once"));
        Ok(())
    }

    #[test]
    fn empty_column_list_is_allowed() -> Result<()> {
        let (_temp, path) = write_config("version = 1\n[table]\ncolumns = []\n")?;
        let config = Config::load(&path)?;
        assert!(config.columns()?.visible_columns().is_empty());
        Ok(())
    }

    #[test]
    fn bad_tab_and_direction_are_rejected() -> Result<()> {
        let (_temp, path) = write_config("version = 1\n[ui]\nstart_tab = \"inbox\"\n")?;
        let error = Config::load(&path).expect_err("unknown tab should fail");
        assert!(format!("{error:#}").contains("unknown start_tab"));

        let (_temp, path) = write_config("version = 1\n[table]\nsort_direction = \"up\"\n")?;
        let error = Config::load(&path).expect_err("unknown direction should fail");
        assert!(format!("{error:#}").contains("use asc or desc"));
        Ok(())
    }

    #[test]
    fn blank_opener_is_rejected() -> Result<()> {
        let (_temp, path) = write_config("version = 1\n[contact]\nopener = \"  \"\n")?;
        let error = Config::load(&path).expect_err("blank opener should fail");
        assert!(error.to_string().contains("platform default"));
        Ok(())
    }

    #[test]
    fn default_path_honors_env_override() -> Result<()> {
        let _guard = env_lock();
        let temp = tempfile::tempdir()?;
        let override_path = temp.path().join("custom-config.toml");
        // SAFETY: test-only process-local env mutation.
        unsafe {
            std::env::set_var("LEADDESK_CONFIG_PATH", &override_path);
        }
        let resolved = Config::default_path()?;
        // SAFETY: test cleanup for process-local env mutation.
        unsafe {
            std::env::remove_var("LEADDESK_CONFIG_PATH");
        }
        assert_eq!(resolved, override_path);
        Ok(())
    }

    #[test]
    fn default_path_uses_app_dir_without_env_override() -> Result<()> {
        let _guard = env_lock();
        // SAFETY: test-only process-local env mutation.
        unsafe {
            std::env::remove_var("LEADDESK_CONFIG_PATH");
        }
        let path = Config::default_path()?;
        assert!(path.ends_with("leaddesk/config.toml"), "got {}", path.display());
        Ok(())
    }

    #[test]
    fn example_config_round_trips() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let path = temp.path().join("config.toml");
        let example = Config::example_config(&path);
        assert!(example.contains("version = 1"));
        assert!(example.contains("[table]"));
        assert!(example.contains("[logging]"));

        std::fs::write(&path, example)?;
        let config = Config::load(&path)?;
        assert_eq!(config.columns()?, ColumnCatalog::default());
        Ok(())
    }
}
