use crate::application::dto::{
    AddonSection, ComponentManifest, ComponentSection, ConsoleSection, GenerateRequest,
    GenerateResponse, GuiSection, LaunchableMode, ServiceSection,
};
use crate::metainfo_generation::domain::{
    AddonInfo, BasicInfo, ComponentKind, ConsoleAppInfo, GuiAppInfo, InputControls, ServiceInfo,
};
use crate::metainfo_generation::services::{
    component_id_valid, guess_component_id, is_acceptable_url, is_desktop_filename, is_no_path,
    make_desktop_entry_data, make_meson_l10n_snippet, make_meson_mi_to_de_snippet,
    make_meson_validate_snippet, make_metainfo_addon, make_metainfo_console_app,
    make_metainfo_gui_app, make_metainfo_service,
};
use crate::ports::outbound::ManifestReader;
use crate::shared::error::MetainfoError;
use crate::shared::Result;

/// GenerateComponentUseCase - Core use case for MetaInfo generation
///
/// This use case replaces the interactive form of a metadata wizard: it
/// loads the component manifest, validates the fields in a fixed order
/// (stopping at the first failure, so the user sees exactly one message
/// at a time), dispatches to the per-kind document builder and collects
/// the generated artifacts.
///
/// # Type Parameters
/// * `MR` - ManifestReader implementation
pub struct GenerateComponentUseCase<MR> {
    manifest_reader: MR,
}

fn missing(field: &str) -> anyhow::Error {
    MetainfoError::MissingField {
        field: field.to_string(),
    }
    .into()
}

fn invalid(field: &str) -> anyhow::Error {
    MetainfoError::InvalidField {
        field: field.to_string(),
    }
    .into()
}

/// Returns the trimmed value, or the missing-field error when empty.
fn require(value: &str, field: &str) -> Result<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(missing(field));
    }
    Ok(value.to_string())
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn require_url(value: &str, field: &str) -> Result<String> {
    let value = require(value, field)?;
    if !is_acceptable_url(&value) {
        return Err(invalid(field));
    }
    Ok(value)
}

/// An empty URL is fine; a set one must be acceptable.
fn optional_url(value: &str, field: &str) -> Result<Option<String>> {
    match optional(value) {
        Some(url) if !is_acceptable_url(&url) => Err(invalid(field)),
        other => Ok(other),
    }
}

fn require_no_path(value: &str, field: &str) -> Result<String> {
    let value = require(value, field)?;
    if !is_no_path(&value) {
        return Err(invalid(field));
    }
    Ok(value)
}

fn require_no_path_or_space(value: &str, field: &str) -> Result<String> {
    let value = require(value, field)?;
    if !is_no_path(&value) || value.contains(' ') {
        return Err(invalid(field));
    }
    Ok(value)
}

impl<MR: ManifestReader> GenerateComponentUseCase<MR> {
    /// Creates a new GenerateComponentUseCase with an injected manifest reader
    pub fn new(manifest_reader: MR) -> Self {
        Self { manifest_reader }
    }

    /// Executes the generation use case
    ///
    /// # Arguments
    /// * `request` - Generation request with the manifest path and options
    ///
    /// # Returns
    /// GenerateResponse containing the MetaInfo document and any requested
    /// auxiliary artifacts
    pub fn execute(&self, request: GenerateRequest) -> Result<GenerateResponse> {
        let content = self.manifest_reader.read_manifest(&request.manifest_path)?;
        let manifest = ComponentManifest::parse(&request.manifest_path, &content)?;
        self.generate(&manifest, request.meson_snippets)
    }

    /// Validates the manifest and generates all requested artifacts.
    pub fn generate(
        &self,
        manifest: &ComponentManifest,
        force_meson_snippets: bool,
    ) -> Result<GenerateResponse> {
        let with_meson = manifest.meson_snippets || force_meson_snippets;
        match manifest.kind {
            ComponentKind::DesktopApplication => {
                let gui = manifest.gui.clone().unwrap_or_default();
                self.generate_gui_app(&manifest.component, &gui, with_meson)
            }
            ComponentKind::ConsoleApplication => {
                let console = manifest.console.clone().unwrap_or_default();
                self.generate_console_app(&manifest.component, &console, with_meson)
            }
            ComponentKind::Addon => {
                let addon = manifest.addon.clone().unwrap_or_default();
                self.generate_addon(&manifest.component, &addon, with_meson)
            }
            ComponentKind::Service => {
                let service = manifest.service.clone().unwrap_or_default();
                self.generate_service(&manifest.component, &service, with_meson)
            }
        }
    }

    /// Validates the base fields in the fixed order and assembles the
    /// BasicInfo record. `name_field` and `summary_field` carry the
    /// kind-specific display names used in error messages.
    fn build_basic_info(
        &self,
        section: &ComponentSection,
        name_field: &str,
        summary_field: &str,
    ) -> Result<BasicInfo> {
        let name = require(&section.name, name_field)?;
        let summary = require(&section.summary, summary_field)?;
        let homepage = require_url(&section.homepage, "homepage")?;
        let bugtracker = optional_url(&section.bugtracker, "bugtracker")?;
        let donation = optional_url(&section.donation, "donation")?;
        let source_code = optional_url(&section.source_code, "code")?;
        let description = require(&section.description, "long description")?;

        // Derive the component ID from homepage and name when the manifest
        // leaves it empty; a failed derivation reads as a missing field.
        let mut cid = section.id.trim().to_string();
        if cid.is_empty() {
            cid = guess_component_id(&homepage, &name);
        }
        if cid.is_empty() {
            return Err(missing("component ID"));
        }
        if !component_id_valid(&cid).valid {
            return Err(invalid("component ID"));
        }

        let metadata_license = require(&section.metadata_license, "metadata license")?;

        // A complex license expression wins over the simple identifier
        let project_license = if !section.project_license_expression.trim().is_empty() {
            section.project_license_expression.trim().to_string()
        } else {
            section.project_license.trim().to_string()
        };
        if project_license.is_empty() {
            return Err(MetainfoError::MissingProjectLicense.into());
        }

        Ok(BasicInfo {
            cid,
            name,
            summary,
            metadata_license,
            project_license,
            description,
            homepage: Some(homepage),
            bugtracker,
            donation,
            source_code,
        })
    }

    fn generate_gui_app(
        &self,
        section: &ComponentSection,
        gui: &GuiSection,
        with_meson: bool,
    ) -> Result<GenerateResponse> {
        let binfo =
            self.build_basic_info(section, "application name", "application summary")?;

        let mut screenshots = Vec::new();
        for (i, url) in gui.screenshots.iter().enumerate() {
            let field = if i == 0 {
                "primary screenshot".to_string()
            } else {
                format!("additional screenshot {}", i)
            };
            match optional_url(url, &field)? {
                Some(url) => screenshots.push(url),
                None => continue,
            }
        }

        let mut info = GuiAppInfo {
            controls: InputControls {
                pointer_keyboard: gui.pointer_keyboard.unwrap_or(true),
                touch: gui.touch,
                gamepad: gui.gamepad,
                tablet: gui.tablet,
            },
            screenshots,
            display_length: gui.display_length,
            ..GuiAppInfo::default()
        };

        match gui.launchable {
            LaunchableMode::Provided => {
                let desktop_entry_name =
                    require(&gui.desktop_entry_name, "desktop-entry filename")?;
                if !is_desktop_filename(&desktop_entry_name) {
                    return Err(invalid("desktop-entry filename"));
                }
                info.desktop_entry_name = Some(desktop_entry_name);
            }
            LaunchableMode::Generate | LaunchableMode::GenerateFromMi => {
                // no desktop-entry filename is given, so the data to build
                // one has to be present
                if gui.categories.is_empty() {
                    return Err(missing("primary application category"));
                }
                if gui.categories.len() < 2 {
                    return Err(missing("secondary application category"));
                }
                info.categories = gui
                    .categories
                    .iter()
                    .map(|c| c.trim().to_string())
                    .collect();
                info.icon_name = Some(require_no_path(&gui.icon, "application icon")?);
                info.binary = Some(require_no_path(&gui.binary, "executable name")?);
            }
        }

        let self_contained = gui.launchable == LaunchableMode::GenerateFromMi;
        let metainfo = make_metainfo_gui_app(&binfo, &info, self_contained);
        let desktop_entry = if gui.launchable == LaunchableMode::Generate {
            Some(make_desktop_entry_data(&binfo, &info))
        } else {
            None
        };

        Ok(GenerateResponse {
            cid: binfo.cid.clone(),
            metainfo,
            desktop_entry,
            meson_validate: with_meson.then(|| make_meson_validate_snippet(&binfo)),
            meson_l10n: with_meson.then(|| make_meson_l10n_snippet(&binfo)),
            meson_mi_to_de: (with_meson && self_contained)
                .then(|| make_meson_mi_to_de_snippet(&binfo)),
        })
    }

    fn generate_console_app(
        &self,
        section: &ComponentSection,
        console: &ConsoleSection,
        with_meson: bool,
    ) -> Result<GenerateResponse> {
        let binfo =
            self.build_basic_info(section, "application name", "application summary")?;

        if console.categories.is_empty() {
            return Err(missing("primary application category"));
        }
        if console.categories.len() < 2 {
            return Err(missing("secondary application category"));
        }
        let info = ConsoleAppInfo {
            categories: console
                .categories
                .iter()
                .map(|c| c.trim().to_string())
                .collect(),
            icon_name: require_no_path(&console.icon, "application icon")?,
            binary: require_no_path(&console.binary, "executable name")?,
        };

        let metainfo = make_metainfo_console_app(&binfo, &info);
        Ok(GenerateResponse {
            cid: binfo.cid.clone(),
            metainfo,
            desktop_entry: None,
            meson_validate: with_meson.then(|| make_meson_validate_snippet(&binfo)),
            meson_l10n: None,
            meson_mi_to_de: None,
        })
    }

    fn generate_addon(
        &self,
        section: &ComponentSection,
        addon: &AddonSection,
        with_meson: bool,
    ) -> Result<GenerateResponse> {
        let binfo = self.build_basic_info(section, "addon name", "addon summary")?;

        if addon.extends.is_empty() {
            return Err(missing("extended app component ID"));
        }
        let mut extends = Vec::new();
        for extended_cid in &addon.extends {
            let extended_cid = require(extended_cid, "extended app component ID")?;
            if !component_id_valid(&extended_cid).valid {
                return Err(invalid("extended app component ID"));
            }
            extends.push(extended_cid);
        }

        let icon_name = match optional(&addon.icon) {
            Some(icon) => {
                if !is_no_path(&icon) || icon.contains(' ') {
                    return Err(invalid("addon icon"));
                }
                Some(icon)
            }
            None => None,
        };

        let info = AddonInfo { extends, icon_name };
        let metainfo = make_metainfo_addon(&binfo, &info);
        Ok(GenerateResponse {
            cid: binfo.cid.clone(),
            metainfo,
            desktop_entry: None,
            meson_validate: with_meson.then(|| make_meson_validate_snippet(&binfo)),
            meson_l10n: None,
            meson_mi_to_de: None,
        })
    }

    fn generate_service(
        &self,
        section: &ComponentSection,
        service: &ServiceSection,
        with_meson: bool,
    ) -> Result<GenerateResponse> {
        let binfo =
            self.build_basic_info(section, "service human-readable name", "service summary")?;

        let primary_category = match service.categories.first() {
            Some(category) => require(category, "primary service category")?,
            None => return Err(missing("primary service category")),
        };
        let mut categories = vec![primary_category];
        if let Some(secondary) = service.categories.get(1) {
            if let Some(secondary) = optional(secondary) {
                categories.push(secondary);
            }
        }

        let info = ServiceInfo {
            categories,
            icon_name: require_no_path_or_space(&service.icon, "service icon")?,
            service_name: require_no_path_or_space(&service.service_name, "service launcher name")?,
        };

        let metainfo = make_metainfo_service(&binfo, &info);
        Ok(GenerateResponse {
            cid: binfo.cid.clone(),
            metainfo,
            desktop_entry: None,
            meson_validate: with_meson.then(|| make_meson_validate_snippet(&binfo)),
            meson_l10n: None,
            meson_mi_to_de: None,
        })
    }
}
