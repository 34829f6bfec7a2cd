/// GenerateResponse - Generated artifacts from one use-case execution
///
/// The MetaInfo document is always present; the desktop-entry file and
/// the Meson snippets are only generated when the manifest (or a CLI
/// flag) asked for them.
#[derive(Debug, Clone)]
pub struct GenerateResponse {
    /// Final component ID (possibly derived from homepage and name)
    pub cid: String,
    /// The pretty-printed MetaInfo XML document
    pub metainfo: String,
    pub desktop_entry: Option<String>,
    pub meson_validate: Option<String>,
    pub meson_l10n: Option<String>,
    pub meson_mi_to_de: Option<String>,
}

impl GenerateResponse {
    /// All generated artifacts with their suggested file names,
    /// in presentation order.
    pub fn artifacts(&self) -> Vec<(String, &str)> {
        let mut artifacts = vec![(
            format!("{}.metainfo.xml", self.cid),
            self.metainfo.as_str(),
        )];
        if let Some(desktop_entry) = &self.desktop_entry {
            artifacts.push((format!("{}.desktop", self.cid), desktop_entry.as_str()));
        }
        if let Some(snippet) = &self.meson_validate {
            artifacts.push(("meson-validate.build".to_string(), snippet.as_str()));
        }
        if let Some(snippet) = &self.meson_l10n {
            artifacts.push(("meson-l10n.build".to_string(), snippet.as_str()));
        }
        if let Some(snippet) = &self.meson_mi_to_de {
            artifacts.push(("meson-mi-to-de.build".to_string(), snippet.as_str()));
        }
        artifacts
    }
}
