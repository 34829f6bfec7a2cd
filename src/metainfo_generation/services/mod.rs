/// Metadata-generation services
///
/// Pure, synchronous functions: validators, identifier derivation, the
/// MetaInfo document builders, auxiliary text generators and the generic
/// XML pretty-printer. None of these touch the file system or network.
pub mod desktop_entry;
pub mod id_guess;
pub mod meson;
pub mod metainfo_builder;
pub mod pretty_xml;
pub mod validators;

pub use desktop_entry::make_desktop_entry_data;
pub use id_guess::guess_component_id;
pub use meson::{make_meson_l10n_snippet, make_meson_mi_to_de_snippet, make_meson_validate_snippet};
pub use metainfo_builder::{
    make_metainfo_addon, make_metainfo_console_app, make_metainfo_gui_app, make_metainfo_service,
    xml_escape,
};
pub use pretty_xml::{pretty_xml, pretty_xml_indent};
pub use validators::{
    component_id_valid, is_acceptable_url, is_desktop_filename, is_no_path, IdValidity,
};
