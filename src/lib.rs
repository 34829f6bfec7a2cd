//! metainfo-gen - AppStream MetaInfo generation tool
//!
//! This library generates AppStream MetaInfo XML documents (and optional
//! desktop-entry files and Meson snippets) from a declarative component
//! manifest, following hexagonal architecture principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`metainfo_generation`): Pure business logic - component
//!   models, validators, ID derivation and the document builders
//! - **Application Layer** (`application`): Use cases and DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use metainfo_gen::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let manifest_reader = FileSystemReader::new();
//!
//! // Create use case
//! let use_case = GenerateComponentUseCase::new(manifest_reader);
//!
//! // Execute
//! let request = GenerateRequest::new(PathBuf::from("app.toml"), false);
//! let response = use_case.execute(request)?;
//! println!("{}", response.metainfo);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod metainfo_generation;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::application::dto::{
        ComponentManifest, GenerateRequest, GenerateResponse, LaunchableMode,
    };
    pub use crate::application::use_cases::GenerateComponentUseCase;
    pub use crate::metainfo_generation::domain::{
        AddonInfo, BasicInfo, ComponentKind, ConsoleAppInfo, GuiAppInfo, InputControls,
        RelationSet, ServiceInfo,
    };
    pub use crate::metainfo_generation::services::{
        component_id_valid, guess_component_id, pretty_xml, pretty_xml_indent,
    };
    pub use crate::ports::outbound::{ManifestReader, OutputPresenter};
    pub use crate::shared::Result;
}
