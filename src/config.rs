use std::fs;

use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use serde::Deserialize;

pub const CONFIG_FILE: &str = "glad-setup.toml";
pub const DEFAULT_BASE: &str = "external/glad";
pub const DEFAULT_API: &str = "3.3";

/// Optional overrides loaded from `glad-setup.toml`. Every field falls back
/// to the built-in default when absent.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SetupConfig {
    pub base: Option<Utf8PathBuf>,
    pub api: Option<String>,
    pub profile: Option<Profile>,
}

/// OpenGL profile requested from the generator.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    #[default]
    Core,
    Compatibility,
}

impl Profile {
    pub fn as_str(&self) -> &'static str {
        match self {
            Profile::Core => "Core",
            Profile::Compatibility => "Compatibility",
        }
    }
}

impl SetupConfig {
    /// Load the nearest `glad-setup.toml`, starting from `dir` and walking
    /// up. A missing file yields the defaults; a malformed file is an error.
    pub fn discover(dir: &Utf8Path) -> Result<Self> {
        let mut current = dir.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILE);
            if candidate.is_file() {
                return Self::load(&candidate);
            }
            if !current.pop() {
                return Ok(Self::default());
            }
        }
    }

    pub fn load(path: &Utf8Path) -> Result<Self> {
        let raw = fs::read_to_string(path).with_context(|| format!("reading config {}", path))?;
        toml::from_str(&raw).with_context(|| format!("parsing config {}", path))
    }

    pub fn base(&self) -> Utf8PathBuf {
        self.base
            .clone()
            .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_BASE))
    }

    pub fn api(&self) -> &str {
        self.api.as_deref().unwrap_or(DEFAULT_API)
    }

    pub fn profile(&self) -> Profile {
        self.profile.unwrap_or_default()
    }
}
