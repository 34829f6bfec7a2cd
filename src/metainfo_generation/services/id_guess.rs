use url::Url;

/// Derives a reverse-DNS component ID from a homepage URL and an
/// application name.
///
/// The host segments are reversed into reverse-DNS order. Projects hosted
/// on GitHub are usually not from GitHub Inc. / Microsoft themselves, so
/// those get a `io.github.` prefix with the GitHub username as an extra
/// namespace segment (this is the common way to indicate "created on the
/// platform, but not owned by it").
///
/// Returns an empty string when no homepage was given or the URL can not
/// be parsed; the caller then leaves the ID for the user to fill in
/// manually. The result is heuristic and still has to pass
/// [`component_id_valid`](super::validators::component_id_valid).
pub fn guess_component_id(homepage: &str, app_name: &str) -> String {
    if homepage.is_empty() {
        return String::new();
    }

    let url_str = if homepage.starts_with("http") {
        homepage.to_string()
    } else {
        format!("https://{}", homepage)
    };
    let url = match Url::parse(&url_str) {
        Ok(url) => url,
        Err(_) => return String::new(),
    };
    let host = match url.host_str() {
        Some(host) => host,
        None => return String::new(),
    };

    // Only used with GitHub URLs at the moment
    let mut user_part = String::new();
    let mut rdns_root_parts: Vec<String> = host.split('.').rev().map(str::to_string).collect();
    if rdns_root_parts.len() >= 2 && rdns_root_parts[1].to_lowercase() == "github" {
        rdns_root_parts[0] = "io".to_string();
        if let Some(user) = url.path().split('/').nth(1) {
            if !user.is_empty() {
                user_part = format!("{}.", user);
            }
        }
    }

    let tmp = format!("{}.{}{}", rdns_root_parts.join("."), user_part, app_name);
    let tmp = tmp.trim().to_lowercase();
    let tmp: String = tmp.chars().filter(char::is_ascii).collect();
    tmp.replace("www", "")
        .replace(' ', "_")
        .replace('-', "_")
        .replace(':', "_")
        .replace(['&', '<', '>', '"', '\''], "")
}
