use crate::shared::Result;

/// OutputPresenter port for presenting generated artifacts
///
/// This port abstracts the output destination (stdout, files in an
/// output directory, etc.) for the generated documents.
pub trait OutputPresenter {
    /// Presents one generated artifact
    ///
    /// # Arguments
    /// * `filename` - Suggested file name for the artifact
    ///   (e.g. `org.example.app.metainfo.xml`)
    /// * `content` - The generated text
    ///
    /// # Errors
    /// Returns an error if writing to the output destination fails
    fn present(&self, filename: &str, content: &str) -> Result<()>;
}
