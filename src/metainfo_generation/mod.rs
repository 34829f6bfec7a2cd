/// MetaInfo generation - Pure domain logic for AppStream metadata
///
/// This module contains the metadata-generation engine: domain records
/// describing a software component, and the services that turn them into
/// MetaInfo XML documents, desktop-entry files and Meson snippets.
pub mod domain;
pub mod services;
