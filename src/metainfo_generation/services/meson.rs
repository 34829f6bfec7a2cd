use crate::metainfo_generation::domain::BasicInfo;

/// Meson snippet that validates the installed MetaInfo file with
/// appstreamcli. The component ID only parameterizes the file name.
const MESON_VALIDATE_TEMPLATE: &str = "\
# Validate MetaInfo file
metainfo_file = '/path/to/{mifname}'
ascli_exe = find_program('appstreamcli', required: false)
if ascli_exe.found()
  test('validate metainfo file',
        ascli_exe,
        args: ['validate',
               '--no-net',
               '--pedantic',
               metainfo_file]
  )
endif";

/// Meson snippet that localizes the MetaInfo file and installs it.
const MESON_L10N_TEMPLATE: &str = "\
# Localize a MetaInfo file and install it
i18n = import('i18n')

# NOTE: Remember to add the XML file to POTFILES.in!
metainfo_file = '/path/to/{mifname}'
i18n.merge_file(
    input:  metainfo_file,
    output: '{mifname}',
    type: 'xml',
    po_dir: join_paths (meson.source_root(), 'po'),
    install: true,
    install_dir: join_paths (get_option ('datadir'), 'metainfo')
)";

/// Meson snippet that derives a desktop-entry file from a self-contained
/// MetaInfo file at build time.
const MESON_MI_TO_DE_TEMPLATE: &str = "\
# Create desktop-entry file from metainfo
metainfo_file = '/path/to/{mifname}'
ascli_exe = find_program('appstreamcli')
custom_target('gen-desktop-entry',
    input : [metainfo_file],
    output : ['{defname}'],
    command : [ascli_exe, 'make-desktop-file', '@INPUT@', '@OUTPUT@'],
    install: true,
    install_dir: join_paths (get_option ('datadir'), 'applications')
)";

fn metainfo_filename(binfo: &BasicInfo) -> String {
    format!("{}.metainfo.xml", binfo.cid)
}

/// Generates the MetaInfo validation test snippet.
pub fn make_meson_validate_snippet(binfo: &BasicInfo) -> String {
    MESON_VALIDATE_TEMPLATE.replace("{mifname}", &metainfo_filename(binfo))
}

/// Generates the localization-merge snippet.
pub fn make_meson_l10n_snippet(binfo: &BasicInfo) -> String {
    MESON_L10N_TEMPLATE.replace("{mifname}", &metainfo_filename(binfo))
}

/// Generates the metainfo-to-desktop-entry derivation snippet.
pub fn make_meson_mi_to_de_snippet(binfo: &BasicInfo) -> String {
    MESON_MI_TO_DE_TEMPLATE
        .replace("{mifname}", &metainfo_filename(binfo))
        .replace("{defname}", &format!("{}.desktop", binfo.cid))
}
