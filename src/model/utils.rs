/// Minimal attribute escape for card text: backslash-escapes single and
/// double quotes. Missing values become the empty string.
#[must_use]
pub fn escape_quotes(s: Option<&str>) -> String {
    let s = s.unwrap_or_default();
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\'' => out.push_str("\\'"),
            '"' => out.push_str("\\\""),
            _ => out.push(c),
        }
    }
    out
}
