/// Escapes text for use in HTML element content and quoted attributes.
pub fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
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

/// Renders each item as an escaped badge span.
pub fn badges(items: &[String], class: &str) -> String {
    items
        .iter()
        .map(|item| format!(r#"<span class="{class}">{}</span>"#, html_escape(item)))
        .collect::<Vec<_>>()
        .join("")
}

/// Renders an escaped `<ul>` list; empty input gives an empty string.
pub fn bullet_list(items: &[String], class: &str) -> String {
    if items.is_empty() {
        return String::new();
    }
    let lis: String = items
        .iter()
        .map(|item| format!("<li>{}</li>", html_escape(item)))
        .collect();
    format!(r#"<ul class="{class}">{lis}</ul>"#)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_markup() {
        assert_eq!(
            html_escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_escape_keeps_unicode() {
        assert_eq!(html_escape("🏆 Café"), "🏆 Café");
    }

    #[test]
    fn test_bullet_list_escapes_items() {
        let html = bullet_list(&["a<b".to_string()], "features");
        assert_eq!(html, r#"<ul class="features"><li>a&lt;b</li></ul>"#);
        assert_eq!(bullet_list(&[], "features"), "");
    }

    #[test]
    fn test_badges() {
        let html = badges(&["C++".to_string(), "C#".to_string()], "badge");
        assert_eq!(
            html,
            r#"<span class="badge">C++</span><span class="badge">C#</span>"#
        );
    }
}
