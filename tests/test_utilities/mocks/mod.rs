/// Mock implementations for testing
mod mock_manifest_reader;

pub use mock_manifest_reader::MockManifestReader;
