use crate::ports::outbound::ManifestReader;
use crate::shared::error::MetainfoError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum manifest size (10 MB); component manifests are tiny, anything
/// beyond this is not a manifest.
const MAX_MANIFEST_SIZE: u64 = 10 * 1024 * 1024;

/// FileSystemReader adapter for reading files from the file system
///
/// This adapter implements the ManifestReader port, providing file system
/// access for loading the component manifest.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    /// Safely read a file:
    /// - Reject symbolic links
    /// - Check file size limits
    /// - Validate file is a regular file
    fn safe_read_file(&self, path: &Path) -> Result<String> {
        // Get file metadata without following symlinks
        let metadata = fs::symlink_metadata(path)
            .map_err(|e| anyhow::anyhow!("Failed to read manifest metadata: {}", e))?;

        if metadata.is_symlink() {
            anyhow::bail!(
                "Security: {} is a symbolic link. For security reasons, symbolic links are not allowed.",
                path.display()
            );
        }

        if !metadata.is_file() {
            anyhow::bail!("{} is not a regular file", path.display());
        }

        let file_size = metadata.len();
        if file_size > MAX_MANIFEST_SIZE {
            anyhow::bail!(
                "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
                path.display(),
                file_size,
                MAX_MANIFEST_SIZE
            );
        }

        fs::read_to_string(path).map_err(|e| {
            MetainfoError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ManifestReader for FileSystemReader {
    fn read_manifest(&self, manifest_path: &Path) -> Result<String> {
        if !manifest_path.exists() {
            return Err(MetainfoError::ManifestNotFound {
                path: manifest_path.to_path_buf(),
                suggestion: format!(
                    "The component manifest \"{}\" does not exist.\n   \
                     Please create a TOML or JSON manifest describing the component, or specify the correct path with the --manifest option.",
                    manifest_path.display()
                ),
            }
            .into());
        }

        self.safe_read_file(manifest_path)
    }
}
