use serde::{Deserialize, Serialize};
use sitecraft_compiler_html::CompileOptions;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_NAME: &str = "sitecraft.config.json";

/// Sitecraft project configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory holding the persisted element store
    #[serde(default = "default_storage_dir")]
    pub storage_dir: String,

    /// Export output directory
    #[serde(default = "default_out_dir")]
    pub out_dir: String,

    /// Document title of the exported page
    #[serde(default = "default_title")]
    pub title: String,

    /// Pretty print exported HTML and CSS
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

fn default_storage_dir() -> String {
    ".sitecraft".to_string()
}

fn default_out_dir() -> String {
    "dist".to_string()
}

fn default_title() -> String {
    "Sitecraft Page".to_string()
}

fn default_pretty() -> bool {
    true
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &Path) -> anyhow::Result<Self> {
        let config_path = cwd.join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn storage_path(&self, cwd: &Path) -> PathBuf {
        cwd.join(&self.storage_dir)
    }

    pub fn out_path(&self, cwd: &Path) -> PathBuf {
        cwd.join(&self.out_dir)
    }

    pub fn compile_options(&self) -> CompileOptions {
        CompileOptions {
            pretty: self.pretty,
            title: self.title.clone(),
            ..Default::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_dir: default_storage_dir(),
            out_dir: default_out_dir(),
            title: default_title(),
            pretty: default_pretty(),
        }
    }
}
