use serde::Deserialize;
use std::fmt;

/// The AppStream component kinds this tool can describe.
///
/// The string form of each kind is the value of the `type` attribute
/// on the generated `<component>` root element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComponentKind {
    DesktopApplication,
    ConsoleApplication,
    Addon,
    Service,
}

impl ComponentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentKind::DesktopApplication => "desktop-application",
            ComponentKind::ConsoleApplication => "console-application",
            ComponentKind::Addon => "addon",
            ComponentKind::Service => "service",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ComponentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "desktop-application" | "gui-application" | "gui" => {
                Ok(ComponentKind::DesktopApplication)
            }
            "console-application" | "console" => Ok(ComponentKind::ConsoleApplication),
            "addon" => Ok(ComponentKind::Addon),
            "service" => Ok(ComponentKind::Service),
            _ => Err(format!(
                "Invalid component kind: {}. Please specify 'desktop-application', 'console-application', 'addon' or 'service'",
                s
            )),
        }
    }
}

/// Basic per-component information shared by all component kinds.
///
/// Every field is expected to be trimmed by the caller; the component ID
/// must pass reverse-DNS validation before this record is handed to any
/// document builder.
#[derive(Debug, Clone, Default)]
pub struct BasicInfo {
    /// Reverse-DNS component identifier (e.g. `org.example.app`)
    pub cid: String,
    /// Human-readable component name
    pub name: String,
    /// One-line summary
    pub summary: String,
    /// SPDX identifier of the metadata license
    pub metadata_license: String,
    /// SPDX identifier or expression of the project license
    pub project_license: String,
    /// Long description; paragraphs are separated by blank lines
    pub description: String,
    /// Project homepage URL
    pub homepage: Option<String>,
    /// Bugtracker URL
    pub bugtracker: Option<String>,
    /// Donation page URL
    pub donation: Option<String>,
    /// Source-code browser URL
    pub source_code: Option<String>,
}
