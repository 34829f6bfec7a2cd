use metainfo_gen::prelude::*;
use std::path::Path;

/// Mock ManifestReader for testing
pub struct MockManifestReader {
    pub content: String,
    pub should_fail: bool,
}

impl MockManifestReader {
    pub fn new(content: String) -> Self {
        Self {
            content,
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            content: String::new(),
            should_fail: true,
        }
    }
}

impl ManifestReader for MockManifestReader {
    fn read_manifest(&self, _manifest_path: &Path) -> Result<String> {
        if self.should_fail {
            anyhow::bail!("Mock manifest read failure");
        }
        Ok(self.content.clone())
    }
}
