use std::path::Path;

const TOOL: &str = "exiftool";
// -m ignores minor errors so slightly non-conformant scans still get tagged.
const GLOBAL_FLAGS: &str = "-m";

/// Escape a tag value for placement inside a double-quoted shell argument.
///
/// `$` and backtick still expand inside double quotes, so they are escaped
/// along with the quote and backslash themselves.
fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '\\' | '"' | '$' | '`') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Format one complete exiftool invocation line for an image.
pub fn format_invocation(tags: &[(String, String)], image_path: &Path) -> String {
    let mut cmd = format!("{} {} ", TOOL, GLOBAL_FLAGS);
    for (name, value) in tags {
        cmd.push_str(&format!("-{}=\"{}\" ", name, escape(value)));
    }
    cmd.push_str(&image_path.display().to_string());
    cmd
}
