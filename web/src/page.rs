const TEMPLATE: &str = include_str!("../assets/index.html");
const OUTPUT_SLOT: &str = "{{ output }}";

/// The form page, with `output` escaped into the output box.
pub fn render(output: &str) -> String {
    TEMPLATE.replacen(OUTPUT_SLOT, &escape_html(output), 1)
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_output() {
        let page = render("");
        assert!(page.contains(r#"style="white-space: pre-wrap"></pre>"#));
        assert!(!page.contains(OUTPUT_SLOT));
    }

    #[test]
    fn test_output_is_escaped() {
        let page = render("<script>alert('x')</script> & \"more\"");
        assert!(page.contains(
            "&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt; &amp; &quot;more&quot;"
        ));
        assert!(!page.contains("<script>alert"));
    }

    #[test]
    fn test_output_keeps_newlines() {
        assert!(render("Toast\n1. Bread").contains("Toast\n1. Bread</pre>"));
    }
}
