/// Outbound ports (Driven ports) - Infrastructure interfaces
pub mod manifest_reader;
pub mod output_presenter;

pub use manifest_reader::ManifestReader;
pub use output_presenter::OutputPresenter;
