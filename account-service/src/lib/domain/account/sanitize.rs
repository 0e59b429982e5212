/// Replace HTML-significant characters with entities.
///
/// Covers `& < > " ' / \` and the backtick, so stored values are safe to echo
/// into markup.
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            '/' => escaped.push_str("&#x2F;"),
            '\\' => escaped.push_str("&#x5C;"),
            '`' => escaped.push_str("&#96;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="/x">'&'</a>"#),
            "&lt;a href=&quot;&#x2F;x&quot;&gt;&#x27;&amp;&#x27;&lt;&#x2F;a&gt;"
        );
        assert_eq!(escape_html("a\\b`c"), "a&#x5C;b&#96;c");
    }

    #[test]
    fn test_plain_text_untouched() {
        assert_eq!(escape_html("alice1"), "alice1");
        assert_eq!(escape_html("+1 (415) 555-1234"), "+1 (415) 555-1234");
        assert_eq!(escape_html(""), "");
    }
}
