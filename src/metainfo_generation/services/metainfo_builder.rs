use lazy_static::lazy_static;
use regex::Regex;

use super::pretty_xml::pretty_xml;
use crate::metainfo_generation::domain::{
    AddonInfo, BasicInfo, ComponentKind, ConsoleAppInfo, GuiAppInfo, RelationSet, ServiceInfo,
};

lazy_static! {
    /// Backtick-delimited span, converted to `<code>`
    static ref CODE_SPAN_RE: Regex = Regex::new(r"`(.*?)`").unwrap();
    /// Asterisk-delimited span, converted to `<em>`
    static ref EM_SPAN_RE: Regex = Regex::new(r"\*(.*?)\*").unwrap();
}

/// Project-group table: components whose ID starts with one of these
/// prefixes get a `<project_group>` tag. First match wins.
const PROJECT_GROUPS: &[(&str, &str)] = &[
    ("org.kde.", "KDE"),
    ("org.gnome.", "GNOME"),
    ("org.mozilla.", "Mozilla"),
    ("org.xfce.", "Xfce"),
];

/// Escapes the five XML special characters to their named entities.
pub fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Converts a free-text description into MetaInfo `<p>` markup.
///
/// Paragraphs are separated by blank lines; newlines inside a paragraph
/// collapse to spaces. Escaping happens before the markup transforms, so
/// entities from the original text are never re-escaped into the inserted
/// tags. The span transforms are non-recursive.
fn convert_description(desc: &str) -> String {
    let mut res = String::new();

    for para in desc.split("\n\n") {
        let para = xml_escape(para.replace('\n', " ").trim());

        // transform code markup
        let tmp = CODE_SPAN_RE.replace_all(&para, "<code>$1</code>");

        // transform emphases
        let tmp = EM_SPAN_RE.replace_all(&tmp, "<em>$1</em>");

        res.push_str("\n<p>\n");
        res.push_str(&tmp);
        res.push_str("\n</p>");
    }

    res
}

fn project_group_for(cid: &str) -> Option<&'static str> {
    PROJECT_GROUPS
        .iter()
        .find(|(prefix, _)| cid.starts_with(prefix))
        .map(|(_, group)| *group)
}

fn append_url_tag(mi_xml: &mut String, url_type: &str, url: Option<&str>) {
    if let Some(url) = url {
        if !url.is_empty() {
            mi_xml.push_str(&format!(
                "\n<url type=\"{}\">{}</url>",
                url_type,
                xml_escape(url)
            ));
        }
    }
}

/// Builds the document preamble shared by all component kinds: XML
/// declaration, component root, identity tags, license tags, relation
/// blocks, description, project group and URL tags, in that order.
///
/// Relation blocks are emitted in the fixed order extends, requires,
/// recommends, supports; empty lists are skipped entirely. Each list item
/// is a pre-rendered XML fragment emitted as one child line.
fn create_metainfo_preamble(
    kind: ComponentKind,
    binfo: &BasicInfo,
    relations: &RelationSet,
) -> String {
    let mut mi_xml = format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <component type=\"{}\">\n\
         <id>{}</id>\n\
         <name>{}</name>\n\
         <summary>{}</summary>\n\
         <metadata_license>{}</metadata_license>\n\
         <project_license>{}</project_license>",
        kind.as_str(),
        xml_escape(&binfo.cid),
        xml_escape(&binfo.name),
        xml_escape(&binfo.summary),
        xml_escape(&binfo.metadata_license),
        xml_escape(&binfo.project_license)
    );

    let relation_blocks: [(&str, &Vec<String>); 4] = [
        ("extends", &relations.extends),
        ("requires", &relations.requires),
        ("recommends", &relations.recommends),
        ("supports", &relations.supports),
    ];
    for (tag, items) in relation_blocks {
        if items.is_empty() {
            continue;
        }
        mi_xml.push_str(&format!("\n<{}>", tag));
        for item in items {
            mi_xml.push('\n');
            mi_xml.push_str(item);
        }
        mi_xml.push_str(&format!("\n</{}>", tag));
    }

    mi_xml.push_str("\n<description>");
    mi_xml.push_str(&convert_description(&binfo.description));
    mi_xml.push_str("\n</description>");

    if let Some(project_group) = project_group_for(&binfo.cid) {
        mi_xml.push_str(&format!(
            "\n<project_group>{}</project_group>",
            project_group
        ));
    }

    append_url_tag(&mut mi_xml, "homepage", binfo.homepage.as_deref());
    append_url_tag(&mut mi_xml, "bugtracker", binfo.bugtracker.as_deref());
    append_url_tag(&mut mi_xml, "donation", binfo.donation.as_deref());
    append_url_tag(&mut mi_xml, "vcs-browser", binfo.source_code.as_deref());

    mi_xml
}

fn append_stock_icon(mi_xml: &mut String, icon_name: &str) {
    mi_xml.push_str(&format!(
        "\n<icon type=\"stock\">{}</icon>",
        xml_escape(icon_name)
    ));
}

fn append_categories(mi_xml: &mut String, categories: &[String]) {
    mi_xml.push_str("\n<categories>");
    for category in categories {
        mi_xml.push_str(&format!("\n<category>{}</category>", xml_escape(category)));
    }
    mi_xml.push_str("\n</categories>");
}

fn append_provides_binary(mi_xml: &mut String, binary: &str) {
    mi_xml.push_str(&format!(
        "\n<provides>\n<binary>{}</binary>\n</provides>",
        xml_escape(binary)
    ));
}

fn finalize_document(mut mi_xml: String) -> String {
    mi_xml.push_str("\n</component>\n");
    pretty_xml(&mi_xml)
}

/// Generates a MetaInfo document for a desktop (GUI) application.
///
/// When `self_contained` is set, the document additionally carries icon,
/// categories and provided-binary data, so a desktop-entry file can later
/// be derived from the MetaInfo file alone.
pub fn make_metainfo_gui_app(binfo: &BasicInfo, info: &GuiAppInfo, self_contained: bool) -> String {
    let controls = info.controls.normalized();

    let mut relations = RelationSet::new();
    if controls.has_non_default() {
        if controls.pointer_keyboard {
            relations.supports.push("<control>pointing</control>".to_string());
            relations.supports.push("<control>keyboard</control>".to_string());
        }
        if controls.touch {
            relations.supports.push("<control>touch</control>".to_string());
        }
        if controls.gamepad {
            relations.supports.push("<control>gamepad</control>".to_string());
        }
        if controls.tablet {
            relations.supports.push("<control>tablet</control>".to_string());
        }
    }
    if let Some(display_length) = info.display_length {
        if display_length >= 10 {
            relations.recommends.push(format!(
                "<display_length compare=\"ge\">{}</display_length>",
                display_length
            ));
        }
    }

    let mut mi_xml = create_metainfo_preamble(ComponentKind::DesktopApplication, binfo, &relations);

    let desktop_entry_name = match &info.desktop_entry_name {
        Some(name) if !name.is_empty() => name.clone(),
        _ => format!("{}.desktop", binfo.cid),
    };
    mi_xml.push_str(&format!(
        "\n<launchable type=\"desktop-id\">{}</launchable>",
        xml_escape(&desktop_entry_name)
    ));

    if !info.screenshots.is_empty() {
        mi_xml.push_str("\n<screenshots>");
        for (i, image_url) in info.screenshots.iter().enumerate() {
            if i == 0 {
                mi_xml.push_str("<screenshot type=\"default\">\n<image>");
            } else {
                mi_xml.push_str("<screenshot>\n<image>");
            }
            mi_xml.push_str(&xml_escape(image_url));
            mi_xml.push_str("</image>\n</screenshot>");
        }
        mi_xml.push_str("\n</screenshots>");
    }

    if self_contained {
        append_stock_icon(&mut mi_xml, info.icon_name.as_deref().unwrap_or(""));
        append_categories(&mut mi_xml, &info.categories);
        append_provides_binary(&mut mi_xml, info.binary.as_deref().unwrap_or(""));
    }

    finalize_document(mi_xml)
}

/// Generates a MetaInfo document for a console application.
pub fn make_metainfo_console_app(binfo: &BasicInfo, info: &ConsoleAppInfo) -> String {
    let mut mi_xml =
        create_metainfo_preamble(ComponentKind::ConsoleApplication, binfo, &RelationSet::new());

    append_stock_icon(&mut mi_xml, &info.icon_name);
    if !info.categories.is_empty() {
        append_categories(&mut mi_xml, &info.categories);
    }
    append_provides_binary(&mut mi_xml, &info.binary);

    finalize_document(mi_xml)
}

/// Generates a MetaInfo document for an addon extending other components.
pub fn make_metainfo_addon(binfo: &BasicInfo, info: &AddonInfo) -> String {
    let mut relations = RelationSet::new();
    relations.extends = info
        .extends
        .iter()
        .map(|cid| format!("<id>{}</id>", xml_escape(cid)))
        .collect();

    let mut mi_xml = create_metainfo_preamble(ComponentKind::Addon, binfo, &relations);

    if let Some(icon_name) = &info.icon_name {
        if !icon_name.is_empty() {
            append_stock_icon(&mut mi_xml, icon_name);
        }
    }

    finalize_document(mi_xml)
}

/// Generates a MetaInfo document for a service component.
pub fn make_metainfo_service(binfo: &BasicInfo, info: &ServiceInfo) -> String {
    let mut mi_xml = create_metainfo_preamble(ComponentKind::Service, binfo, &RelationSet::new());

    mi_xml.push_str(&format!(
        "\n<launchable type=\"service\">{}</launchable>",
        xml_escape(&info.service_name)
    ));
    append_stock_icon(&mut mi_xml, &info.icon_name);
    if !info.categories.is_empty() {
        append_categories(&mut mi_xml, &info.categories);
    }

    finalize_document(mi_xml)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metainfo_generation::domain::InputControls;

    fn sample_base() -> BasicInfo {
        BasicInfo {
            cid: "org.example.app".to_string(),
            name: "Example App".to_string(),
            summary: "An example application".to_string(),
            metadata_license: "FSFAP".to_string(),
            project_license: "GPL-3.0-or-later".to_string(),
            description: "First paragraph.\n\nSecond paragraph.".to_string(),
            homepage: Some("https://example.org".to_string()),
            bugtracker: None,
            donation: None,
            source_code: None,
        }
    }

    fn count_occurrences(haystack: &str, needle: &str) -> usize {
        haystack.matches(needle).count()
    }

    #[test]
    fn test_xml_escape_all_entities() {
        assert_eq!(
            xml_escape("a&b<c>d\"e'f"),
            "a&amp;b&lt;c&gt;d&quot;e&apos;f"
        );
    }

    #[test]
    fn test_xml_escape_ampersand_first() {
        // The ampersand pass must run first, otherwise entities
        // introduced by later passes would get double-escaped.
        assert_eq!(xml_escape("<&>"), "&lt;&amp;&gt;");
    }

    #[test]
    fn test_description_paragraphs_and_markup() {
        let mut binfo = sample_base();
        binfo.description = "Para one.\n\nPara *two* with `code`.".to_string();
        let xml = make_metainfo_addon(
            &binfo,
            &AddonInfo {
                extends: vec!["org.example.host".to_string()],
                icon_name: None,
            },
        );
        assert_eq!(count_occurrences(&xml, "<p>"), 2);
        assert_eq!(count_occurrences(&xml, "</p>"), 2);
        assert!(xml.contains("<em>two</em>"));
        assert!(xml.contains("<code>code</code>"));
    }

    #[test]
    fn test_description_escapes_before_markup() {
        let mut binfo = sample_base();
        binfo.description = "Uses `<feature>` & *more*".to_string();
        let xml = make_metainfo_console_app(
            &binfo,
            &ConsoleAppInfo {
                categories: vec![],
                icon_name: "term".to_string(),
                binary: "example".to_string(),
            },
        );
        assert!(xml.contains("<code>&lt;feature&gt;</code>"));
        assert!(xml.contains("&amp;"));
        assert!(xml.contains("<em>more</em>"));
    }

    #[test]
    fn test_description_collapses_inner_newlines() {
        let mut binfo = sample_base();
        binfo.description = "Line one\nline two".to_string();
        let xml = make_metainfo_service(
            &binfo,
            &ServiceInfo {
                categories: vec![],
                icon_name: "svc".to_string(),
                service_name: "example.service".to_string(),
            },
        );
        assert!(xml.contains("Line one line two"));
    }

    #[test]
    fn test_preamble_contains_identity_tags_once() {
        let xml = make_metainfo_gui_app(&sample_base(), &GuiAppInfo::default(), false);
        assert_eq!(count_occurrences(&xml, "<id>"), 1);
        assert_eq!(count_occurrences(&xml, "<name>"), 1);
        assert_eq!(count_occurrences(&xml, "<summary>"), 1);
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains("<component type=\"desktop-application\">"));
        assert!(xml.trim_end().ends_with("</component>"));
    }

    #[test]
    fn test_project_group_kde() {
        let mut binfo = sample_base();
        binfo.cid = "org.kde.exampleapp".to_string();
        let xml = make_metainfo_gui_app(&binfo, &GuiAppInfo::default(), false);
        assert!(xml.contains("<project_group>KDE</project_group>"));
    }

    #[test]
    fn test_project_group_absent_for_unknown_prefix() {
        let xml = make_metainfo_gui_app(&sample_base(), &GuiAppInfo::default(), false);
        assert!(!xml.contains("<project_group>"));
    }

    #[test]
    fn test_url_tags_in_order() {
        let mut binfo = sample_base();
        binfo.bugtracker = Some("https://example.org/bugs".to_string());
        binfo.donation = Some("https://example.org/donate".to_string());
        binfo.source_code = Some("https://example.org/src".to_string());
        let xml = make_metainfo_gui_app(&binfo, &GuiAppInfo::default(), false);
        let homepage = xml.find("<url type=\"homepage\">").unwrap();
        let bugtracker = xml.find("<url type=\"bugtracker\">").unwrap();
        let donation = xml.find("<url type=\"donation\">").unwrap();
        let vcs = xml.find("<url type=\"vcs-browser\">").unwrap();
        assert!(homepage < bugtracker);
        assert!(bugtracker < donation);
        assert!(donation < vcs);
    }

    #[test]
    fn test_gui_app_launchable_derived_from_cid() {
        let xml = make_metainfo_gui_app(&sample_base(), &GuiAppInfo::default(), false);
        assert!(xml
            .contains("<launchable type=\"desktop-id\">org.example.app.desktop</launchable>"));
    }

    #[test]
    fn test_gui_app_launchable_explicit_name() {
        let info = GuiAppInfo {
            desktop_entry_name: Some("custom.desktop".to_string()),
            ..GuiAppInfo::default()
        };
        let xml = make_metainfo_gui_app(&sample_base(), &info, false);
        assert!(xml.contains("<launchable type=\"desktop-id\">custom.desktop</launchable>"));
    }

    #[test]
    fn test_gui_app_screenshots_first_is_default() {
        let info = GuiAppInfo {
            screenshots: vec![
                "https://example.org/shot1.png".to_string(),
                "https://example.org/shot2.png".to_string(),
            ],
            ..GuiAppInfo::default()
        };
        let xml = make_metainfo_gui_app(&sample_base(), &info, false);
        assert_eq!(count_occurrences(&xml, "<screenshot type=\"default\">"), 1);
        assert_eq!(count_occurrences(&xml, "<screenshot>"), 1);
        assert_eq!(count_occurrences(&xml, "<image>"), 2);
        let first = xml.find("shot1.png").unwrap();
        let second = xml.find("shot2.png").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_gui_app_no_screenshots_block_when_empty() {
        let xml = make_metainfo_gui_app(&sample_base(), &GuiAppInfo::default(), false);
        assert!(!xml.contains("<screenshots>"));
    }

    #[test]
    fn test_gui_app_default_inputs_produce_no_supports() {
        let xml = make_metainfo_gui_app(&sample_base(), &GuiAppInfo::default(), false);
        assert!(!xml.contains("<supports>"));
        assert!(!xml.contains("<control>"));
    }

    #[test]
    fn test_gui_app_touch_adds_supports_block() {
        let info = GuiAppInfo {
            controls: InputControls {
                touch: true,
                ..InputControls::default()
            },
            ..GuiAppInfo::default()
        };
        let xml = make_metainfo_gui_app(&sample_base(), &info, false);
        assert!(xml.contains("<supports>"));
        assert!(xml.contains("<control>pointing</control>"));
        assert!(xml.contains("<control>keyboard</control>"));
        assert!(xml.contains("<control>touch</control>"));
        assert!(!xml.contains("<control>gamepad</control>"));
    }

    #[test]
    fn test_gui_app_gamepad_only_drops_pointer() {
        let info = GuiAppInfo {
            controls: InputControls {
                pointer_keyboard: false,
                gamepad: true,
                ..InputControls::default()
            },
            ..GuiAppInfo::default()
        };
        let xml = make_metainfo_gui_app(&sample_base(), &info, false);
        assert!(xml.contains("<control>gamepad</control>"));
        assert!(!xml.contains("<control>pointing</control>"));
    }

    #[test]
    fn test_gui_app_display_length_recommendation() {
        let info = GuiAppInfo {
            display_length: Some(360),
            ..GuiAppInfo::default()
        };
        let xml = make_metainfo_gui_app(&sample_base(), &info, false);
        assert!(xml.contains("<recommends>"));
        assert!(xml.contains("<display_length compare=\"ge\">360</display_length>"));
    }

    #[test]
    fn test_gui_app_display_length_below_threshold_ignored() {
        let info = GuiAppInfo {
            display_length: Some(9),
            ..GuiAppInfo::default()
        };
        let xml = make_metainfo_gui_app(&sample_base(), &info, false);
        assert!(!xml.contains("<recommends>"));
    }

    #[test]
    fn test_gui_app_self_contained_extras() {
        let info = GuiAppInfo {
            categories: vec!["Graphics".to_string(), "2DGraphics".to_string()],
            icon_name: Some("exampleapp".to_string()),
            binary: Some("exampleapp".to_string()),
            ..GuiAppInfo::default()
        };
        let xml = make_metainfo_gui_app(&sample_base(), &info, true);
        assert!(xml.contains("<icon type=\"stock\">exampleapp</icon>"));
        assert!(xml.contains("<category>Graphics</category>"));
        assert!(xml.contains("<category>2DGraphics</category>"));
        assert!(xml.contains("<provides>"));
        assert!(xml.contains("<binary>exampleapp</binary>"));
    }

    #[test]
    fn test_gui_app_not_self_contained_omits_extras() {
        let info = GuiAppInfo {
            categories: vec!["Graphics".to_string()],
            icon_name: Some("exampleapp".to_string()),
            binary: Some("exampleapp".to_string()),
            ..GuiAppInfo::default()
        };
        let xml = make_metainfo_gui_app(&sample_base(), &info, false);
        assert!(!xml.contains("<icon"));
        assert!(!xml.contains("<categories>"));
        assert!(!xml.contains("<provides>"));
    }

    #[test]
    fn test_console_app_always_has_icon_and_binary() {
        let info = ConsoleAppInfo {
            categories: vec!["System".to_string(), "Utility".to_string()],
            icon_name: "exampletool".to_string(),
            binary: "exampletool".to_string(),
        };
        let xml = make_metainfo_console_app(&sample_base(), &info);
        assert!(xml.contains("<component type=\"console-application\">"));
        assert!(xml.contains("<icon type=\"stock\">exampletool</icon>"));
        assert!(xml.contains("<category>System</category>"));
        assert!(xml.contains("<binary>exampletool</binary>"));
    }

    #[test]
    fn test_addon_extends_block() {
        let info = AddonInfo {
            extends: vec!["org.example.host".to_string()],
            icon_name: None,
        };
        let xml = make_metainfo_addon(&sample_base(), &info);
        assert!(xml.contains("<component type=\"addon\">"));
        assert!(xml.contains("<extends>"));
        assert!(xml.contains("<id>org.example.host</id>"));
        assert!(!xml.contains("<icon"));
    }

    #[test]
    fn test_addon_optional_icon() {
        let info = AddonInfo {
            extends: vec!["org.example.host".to_string()],
            icon_name: Some("addonicon".to_string()),
        };
        let xml = make_metainfo_addon(&sample_base(), &info);
        assert!(xml.contains("<icon type=\"stock\">addonicon</icon>"));
    }

    #[test]
    fn test_service_launchable_and_icon() {
        let info = ServiceInfo {
            categories: vec!["Network".to_string()],
            icon_name: "exampled".to_string(),
            service_name: "exampled.service".to_string(),
        };
        let xml = make_metainfo_service(&sample_base(), &info);
        assert!(xml.contains("<component type=\"service\">"));
        assert!(xml.contains("<launchable type=\"service\">exampled.service</launchable>"));
        assert!(xml.contains("<icon type=\"stock\">exampled</icon>"));
        assert!(xml.contains("<category>Network</category>"));
    }

    #[test]
    fn test_relation_block_order() {
        // An addon with touch support would never occur, so exercise the
        // ordering through the preamble directly.
        let mut relations = RelationSet::new();
        relations.extends.push("<id>a.b.c</id>".to_string());
        relations.recommends.push("<memory>512</memory>".to_string());
        relations.supports.push("<control>touch</control>".to_string());
        let xml = create_metainfo_preamble(ComponentKind::Addon, &sample_base(), &relations);
        let extends = xml.find("<extends>").unwrap();
        let recommends = xml.find("<recommends>").unwrap();
        let supports = xml.find("<supports>").unwrap();
        assert!(extends < recommends);
        assert!(recommends < supports);
        assert!(!xml.contains("<requires>"));
    }

    #[test]
    fn test_escaping_applied_to_field_values() {
        let mut binfo = sample_base();
        binfo.name = "Tom & Jerry".to_string();
        binfo.summary = "A \"cat\" <chases> a mouse".to_string();
        let xml = make_metainfo_gui_app(&binfo, &GuiAppInfo::default(), false);
        assert!(xml.contains("<name>Tom &amp; Jerry</name>"));
        assert!(xml.contains("<summary>A &quot;cat&quot; &lt;chases&gt; a mouse</summary>"));
    }

    #[test]
    fn test_output_is_pretty_printed_and_stable() {
        let xml = make_metainfo_gui_app(&sample_base(), &GuiAppInfo::default(), false);
        // every line is either the declaration, a tag line or indented text
        let second_pass = super::super::pretty_xml::pretty_xml(&xml);
        assert_eq!(xml, second_pass);
        assert!(xml.lines().any(|l| l.starts_with("  <id>")));
    }
}
