use serde::Deserialize;
use std::path::Path;

use crate::metainfo_generation::domain::ComponentKind;
use crate::shared::error::MetainfoError;
use crate::shared::Result;

/// How the desktop launcher for a GUI application is obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LaunchableMode {
    /// A desktop-entry file already exists; its name is given in the manifest
    #[default]
    Provided,
    /// Generate a desktop-entry file alongside the MetaInfo document
    Generate,
    /// Make the MetaInfo document self-contained so the desktop-entry file
    /// can be derived from it at build time
    GenerateFromMi,
}

/// Base component fields shared by all kinds.
///
/// All fields default to empty; required-field checks happen in the
/// generation use case so every missing value gets the proper
/// user-facing message instead of a deserialization error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ComponentSection {
    /// Reverse-DNS component ID; derived from homepage and name when empty
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub metadata_license: String,
    /// Simple SPDX license identifier
    #[serde(default)]
    pub project_license: String,
    /// Complex SPDX license expression; takes precedence over
    /// `project_license` when set
    #[serde(default)]
    pub project_license_expression: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub homepage: String,
    #[serde(default)]
    pub bugtracker: String,
    #[serde(default)]
    pub donation: String,
    #[serde(default)]
    pub source_code: String,
}

/// GUI-application extension section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GuiSection {
    #[serde(default)]
    pub launchable: LaunchableMode,
    #[serde(default)]
    pub desktop_entry_name: String,
    #[serde(default)]
    pub screenshots: Vec<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub binary: String,
    #[serde(default)]
    pub display_length: Option<u32>,
    #[serde(default)]
    pub touch: bool,
    #[serde(default)]
    pub gamepad: bool,
    #[serde(default)]
    pub tablet: bool,
    /// Pointer/keyboard operation; assumed when no other input is declared
    #[serde(default)]
    pub pointer_keyboard: Option<bool>,
}

/// Console-application extension section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConsoleSection {
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub binary: String,
}

/// Addon extension section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AddonSection {
    #[serde(default)]
    pub extends: Vec<String>,
    #[serde(default)]
    pub icon: String,
}

/// Service extension section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceSection {
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub service_name: String,
}

/// A component manifest as read from a TOML or JSON file.
///
/// The manifest replaces the interactive form of a metadata wizard: it
/// carries the base component record plus the extension section matching
/// the declared kind.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ComponentManifest {
    pub kind: ComponentKind,
    pub component: ComponentSection,
    #[serde(default)]
    pub gui: Option<GuiSection>,
    #[serde(default)]
    pub console: Option<ConsoleSection>,
    #[serde(default)]
    pub addon: Option<AddonSection>,
    #[serde(default)]
    pub service: Option<ServiceSection>,
    /// Also generate Meson build-system snippets
    #[serde(default)]
    pub meson_snippets: bool,
}

impl ComponentManifest {
    /// Parses manifest text as JSON when the file name ends in `.json`,
    /// as TOML otherwise.
    pub fn parse(path: &Path, content: &str) -> Result<Self> {
        let is_json = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        let manifest = if is_json {
            serde_json::from_str(content).map_err(|e| MetainfoError::ManifestParseError {
                path: path.to_path_buf(),
                details: e.to_string(),
            })?
        } else {
            toml::from_str(content).map_err(|e| MetainfoError::ManifestParseError {
                path: path.to_path_buf(),
                details: e.to_string(),
            })?
        };

        Ok(manifest)
    }
}
