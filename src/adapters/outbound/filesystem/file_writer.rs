use crate::ports::outbound::OutputPresenter;
use crate::shared::error::MetainfoError;
use crate::shared::Result;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

/// FileSystemWriter adapter for writing generated artifacts to files
///
/// This adapter implements the OutputPresenter port for file output;
/// each artifact is written under the configured output directory using
/// its suggested file name.
pub struct FileSystemWriter {
    output_dir: PathBuf,
}

impl FileSystemWriter {
    pub fn new(output_dir: PathBuf) -> Self {
        Self { output_dir }
    }

    fn validate_output_dir(&self) -> Result<()> {
        if !self.output_dir.exists() {
            return Err(MetainfoError::FileWriteError {
                path: self.output_dir.clone(),
                details: format!(
                    "Output directory does not exist: {}",
                    self.output_dir.display()
                ),
            }
            .into());
        }
        if !self.output_dir.is_dir() {
            return Err(MetainfoError::FileWriteError {
                path: self.output_dir.clone(),
                details: "Output path is not a directory".to_string(),
            }
            .into());
        }
        Ok(())
    }

    /// Reject writing through a symlink sitting at the target path.
    fn validate_target_security(&self, target: &PathBuf) -> Result<()> {
        if target.exists() {
            let metadata =
                fs::symlink_metadata(target).map_err(|e| MetainfoError::FileWriteError {
                    path: target.clone(),
                    details: format!("Failed to read file metadata: {}", e),
                })?;

            if metadata.is_symlink() {
                return Err(MetainfoError::FileWriteError {
                    path: target.clone(),
                    details: "Security: Output path is a symbolic link. For security reasons, writing to symbolic links is not allowed.".to_string(),
                }
                .into());
            }
        }
        Ok(())
    }
}

impl OutputPresenter for FileSystemWriter {
    fn present(&self, filename: &str, content: &str) -> Result<()> {
        self.validate_output_dir()?;

        let target = self.output_dir.join(filename);
        self.validate_target_security(&target)?;

        fs::write(&target, content).map_err(|e| MetainfoError::FileWriteError {
            path: target.clone(),
            details: e.to_string(),
        })?;

        eprintln!("✅ Wrote: {}", target.display());
        Ok(())
    }
}

/// StdoutPresenter adapter for writing generated artifacts to stdout
///
/// When multiple artifacts are generated in one run, each is preceded by
/// a comment header naming it so the artifacts remain distinguishable.
pub struct StdoutPresenter {
    banner: bool,
}

impl StdoutPresenter {
    pub fn new() -> Self {
        Self { banner: false }
    }

    /// Prefix every artifact with a `# ==== filename ====` banner line.
    pub fn with_banner() -> Self {
        Self { banner: true }
    }
}

impl Default for StdoutPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPresenter for StdoutPresenter {
    fn present(&self, filename: &str, content: &str) -> Result<()> {
        let mut stdout = io::stdout();
        if self.banner {
            writeln!(stdout, "# ==== {} ====", filename)
                .map_err(|e| anyhow::anyhow!("Failed to write to stdout: {}", e))?;
        }
        stdout
            .write_all(content.as_bytes())
            .map_err(|e| anyhow::anyhow!("Failed to write to stdout: {}", e))?;
        if !content.ends_with('\n') {
            writeln!(stdout).map_err(|e| anyhow::anyhow!("Failed to write to stdout: {}", e))?;
        }
        Ok(())
    }
}
