use serde::Deserialize;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

pub const DEFAULT_AUXILIARY_NAME: &str = "ML";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for parameter '{name}': {reason}")]
    InvalidParameter {
        name: &'static str,
        reason: &'static str,
    },
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error: {source}")]
    Toml {
        #[from]
        source: toml::de::Error,
    },
}

/// Which geometric classes a generation pass handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VsiteMode {
    /// Neither linear nor planar groups are replaced.
    None,
    /// Only linear groups are replaced.
    Linear,
    /// Only planar groups are replaced.
    Planar,
    /// Both linear and planar groups are replaced.
    #[default]
    All,
}

impl VsiteMode {
    /// Maps a numeric selector (0 = none, 1 = linear, 2 = planar, 3 = all) to a
    /// mode. Selectors outside that range fall back to [`VsiteMode::None`].
    pub fn from_index(index: i32) -> Self {
        match index {
            1 => Self::Linear,
            2 => Self::Planar,
            3 => Self::All,
            _ => Self::None,
        }
    }

    pub fn includes_linear(self) -> bool {
        matches!(self, Self::Linear | Self::All)
    }

    pub fn includes_planar(self) -> bool {
        matches!(self, Self::Planar | Self::All)
    }
}

impl FromStr for VsiteMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" | "no" => Ok(Self::None),
            "linear" => Ok(Self::Linear),
            "planar" => Ok(Self::Planar),
            "all" => Ok(Self::All),
            _ => Err(()),
        }
    }
}

impl fmt::Display for VsiteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::None => "none",
                Self::Linear => "linear",
                Self::Planar => "planar",
                Self::All => "all",
            }
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VsiteConfig {
    pub mode: VsiteMode,
    /// Replace linear groups by mass particles and virtual sites. When false the
    /// linear pass would need linear angle terms, which are not available.
    pub generate_vsites: bool,
    /// Atom name, type name and atom type registered for auxiliary particles.
    pub auxiliary_name: String,
}

impl Default for VsiteConfig {
    fn default() -> Self {
        Self {
            mode: VsiteMode::default(),
            generate_vsites: true,
            auxiliary_name: DEFAULT_AUXILIARY_NAME.to_string(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct VsiteConfigFile {
    mode: Option<VsiteMode>,
    generate_vsites: Option<bool>,
    auxiliary_name: Option<String>,
}

impl VsiteConfig {
    pub fn builder() -> VsiteConfigBuilder {
        VsiteConfigBuilder::new()
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a TOML document; keys that are absent keep their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let file: VsiteConfigFile = toml::from_str(content)?;
        let mut builder = VsiteConfigBuilder::new();
        if let Some(mode) = file.mode {
            builder = builder.mode(mode);
        }
        if let Some(generate) = file.generate_vsites {
            builder = builder.generate_vsites(generate);
        }
        if let Some(name) = file.auxiliary_name {
            builder = builder.auxiliary_name(name);
        }
        builder.build()
    }
}

#[derive(Default)]
pub struct VsiteConfigBuilder {
    mode: Option<VsiteMode>,
    generate_vsites: Option<bool>,
    auxiliary_name: Option<String>,
}

impl VsiteConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(mut self, mode: VsiteMode) -> Self {
        self.mode = Some(mode);
        self
    }
    pub fn generate_vsites(mut self, generate: bool) -> Self {
        self.generate_vsites = Some(generate);
        self
    }
    pub fn auxiliary_name(mut self, name: impl Into<String>) -> Self {
        self.auxiliary_name = Some(name.into());
        self
    }

    pub fn build(self) -> Result<VsiteConfig, ConfigError> {
        let defaults = VsiteConfig::default();
        let auxiliary_name = self.auxiliary_name.unwrap_or(defaults.auxiliary_name);
        if auxiliary_name.trim().is_empty() {
            return Err(ConfigError::InvalidParameter {
                name: "auxiliary_name",
                reason: "must not be empty",
            });
        }
        Ok(VsiteConfig {
            mode: self.mode.unwrap_or(defaults.mode),
            generate_vsites: self.generate_vsites.unwrap_or(defaults.generate_vsites),
            auxiliary_name,
        })
    }
}
