use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Boundary between two adjacent tags; a newline is inserted here so
    /// every tag ends up on its own line.
    static ref TAG_BOUNDARY_RE: Regex = Regex::new(r"(>)(<)(/*)").unwrap();
    /// Line holding a complete element (opening tag, content, closing tag)
    static ref SELF_CONTAINED_RE: Regex = Regex::new(r".+</\w[^>]*>$").unwrap();
    /// Line that is purely a closing tag
    static ref CLOSING_RE: Regex = Regex::new(r"^</\w").unwrap();
    /// Line that opens a tag without closing it
    static ref OPENING_RE: Regex = Regex::new(r"^<\w([^>]*[^/])?>.*$").unwrap();
}

/// Re-indents a flattened XML string with the default width of two spaces.
pub fn pretty_xml(xml: &str) -> String {
    pretty_xml_indent(xml, 2)
}

/// Re-indents a flattened XML string, one tag (or text line) per line.
///
/// This is a line-local heuristic, not an XML parser: lines are classified
/// by regular expressions as self-contained, closing, opening or plain
/// text, and the pending indent level is adjusted accordingly (floored at
/// zero). It assumes well-formed input as produced by the document
/// builders; arbitrary third-party XML (e.g. attribute values containing
/// `>`) may be misclassified. An indent width of zero falls back to the
/// default of 2.
pub fn pretty_xml_indent(xml: &str, indent_width: usize) -> String {
    let indent_width = if indent_width == 0 { 2 } else { indent_width };
    let indent_string = " ".repeat(indent_width);

    let xml = TAG_BOUNDARY_RE.replace_all(xml, "${1}\n${2}${3}");

    let mut formatted = String::new();
    let mut pad: usize = 0;
    for line in xml.split('\n') {
        let line = line.trim();

        let mut indent = 0;
        if SELF_CONTAINED_RE.is_match(line) {
            // complete element, level unchanged
        } else if CLOSING_RE.is_match(line) {
            if pad != 0 {
                pad -= 1;
            }
        } else if OPENING_RE.is_match(line) {
            indent = 1;
        }

        formatted.push_str(&indent_string.repeat(pad));
        formatted.push_str(line);
        formatted.push('\n');
        pad += indent;
    }

    formatted.trim().to_string()
}
