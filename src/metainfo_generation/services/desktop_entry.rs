use crate::metainfo_generation::domain::{BasicInfo, GuiAppInfo};

/// Generates a desktop-entry file for a GUI application.
///
/// This is plain literal substitution; desktop-entry files have their own
/// quoting rules which the values supplied by the manifest do not touch.
pub fn make_desktop_entry_data(binfo: &BasicInfo, info: &GuiAppInfo) -> String {
    let mut categories = info.categories.join(";");
    if !categories.is_empty() {
        categories.push(';');
    }

    format!(
        "[Desktop Entry]\n\
         Version=1.0\n\
         Type=Application\n\
         Name={}\n\
         Comment={}\n\
         Categories={}\n\
         Icon={}\n\
         Exec={}\n\
         Terminal=false\n",
        binfo.name,
        binfo.summary,
        categories,
        info.icon_name.as_deref().unwrap_or(""),
        info.binary.as_deref().unwrap_or("")
    )
}
