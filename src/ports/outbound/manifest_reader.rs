use crate::shared::Result;
use std::path::Path;

/// ManifestReader port for reading the component manifest
///
/// This port abstracts the file system operations needed to load the raw
/// manifest text before it is deserialized.
pub trait ManifestReader {
    /// Reads the raw manifest content
    ///
    /// # Arguments
    /// * `manifest_path` - Path to the manifest file (TOML or JSON)
    ///
    /// # Errors
    /// Returns an error if:
    /// - The manifest file does not exist
    /// - The file cannot be read
    fn read_manifest(&self, manifest_path: &Path) -> Result<String>;
}
