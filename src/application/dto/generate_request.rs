use std::path::PathBuf;

/// GenerateRequest - Internal request DTO for the generation use case
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    /// Path to the component manifest (TOML or JSON)
    pub manifest_path: PathBuf,
    /// Generate Meson snippets even when the manifest does not ask for them
    pub meson_snippets: bool,
}

impl GenerateRequest {
    pub fn new(manifest_path: PathBuf, meson_snippets: bool) -> Self {
        Self {
            manifest_path,
            meson_snippets,
        }
    }
}
