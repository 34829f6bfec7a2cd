/// Field validators for component metadata.
///
/// These are pure predicates over already-trimmed input strings. They never
/// fail with an error; invalid input is communicated through the return
/// value so the caller can surface a message and let the user correct the
/// field.

/// Result of validating a component ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdValidity {
    pub valid: bool,
    pub message: Option<String>,
}

impl IdValidity {
    fn invalid(message: &str) -> Self {
        Self {
            valid: false,
            message: Some(message.to_string()),
        }
    }

    fn ok() -> Self {
        Self {
            valid: true,
            message: None,
        }
    }
}

/// Checks whether a URL is acceptable for use in MetaInfo data.
///
/// An unset URL is fine; a set one must be HTTP(S), since AppStream only
/// permits web URLs in most places.
pub fn is_acceptable_url(url: &str) -> bool {
    if url.is_empty() {
        return true;
    }
    url.starts_with("https://") || url.starts_with("http://")
}

/// Checks that a value does not look like a file path.
/// An empty value is acceptable.
pub fn is_no_path(name: &str) -> bool {
    if name.is_empty() {
        return true;
    }
    !name.contains('/')
}

/// Checks that a value is a plausible desktop-entry file name:
/// non-empty, ending in `.desktop`, with no path separators or spaces.
pub fn is_desktop_filename(name: &str) -> bool {
    if name.is_empty() {
        return false;
    }
    name.ends_with(".desktop") && !name.contains('/') && !name.contains(' ')
}

/// Validates a component ID against the reverse-DNS scheme.
///
/// The rules run in a fixed order and the first failing one determines
/// the returned message; multiple errors are never aggregated.
pub fn component_id_valid(cid: &str) -> IdValidity {
    if cid.is_empty() {
        return IdValidity::invalid("ID was empty");
    }

    let rdns_parts: Vec<&str> = cid.split('.').collect();
    if rdns_parts.len() < 3 {
        return IdValidity::invalid("ID does not follow the reverse-DNS scheme");
    }

    for part in &rdns_parts {
        if part.trim().is_empty() {
            return IdValidity::invalid("ID contains an empty segment.");
        }
    }

    if !cid.is_ascii() {
        return IdValidity::invalid("ID contains non-ASCII characters.");
    }

    if cid.contains(' ') {
        return IdValidity::invalid("ID contains spaces.");
    }

    if cid.contains('-') {
        return IdValidity::invalid("ID contains hyphens.");
    }

    for c in cid.chars() {
        if !c.is_ascii_alphanumeric() && c != '_' && c != '.' {
            return IdValidity {
                valid: false,
                message: Some(format!("ID contains invalid character: {}", c)),
            };
        }
    }

    IdValidity::ok()
}
