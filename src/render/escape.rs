//! Escaping for text interpolated into the HTML page.

/// Escape `&`, `<`, `>`, `"` and `'` for use in element text or a quoted
/// attribute value.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Make a JSON document safe to embed in a `<script>` element.
///
/// The HTML tokenizer ends a script block at `</` followed by `script`
/// and treats `<!--` specially, so both are rewritten using JSON escapes
/// that decode to the same string. Everything else is left verbatim.
#[must_use]
pub fn script_safe_json(json: &str) -> String {
    json.replace("</", "<\\/").replace("<!--", "\\u003c!--")
}
