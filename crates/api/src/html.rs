//! Minimal HTML page helpers for the form front end

const STYLE: &str = "body{font-family:sans-serif;max-width:42rem;margin:2rem auto;padding:0 1rem}\
nav a{margin-right:1rem}label{display:block;margin-top:.75rem;font-weight:600}\
select,input{width:100%;padding:.35rem;margin-top:.25rem}button{margin-top:1.25rem;padding:.5rem 1rem}\
.banner{padding:.75rem 1rem;margin:1rem 0;border-radius:4px}\
.accepted{background:#e3f6e5;color:#1b5e20}.rejected{background:#fdecea;color:#8e1c13}\
.error{background:#fff4e5;color:#7a4100}.hint{display:block;color:#555;font-size:.85rem}";

/// Escape text for use in element content and quoted attributes
pub fn escape(text: &str) -> String {
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

/// Wrap page content in the shared layout; `body` must already be escaped
pub fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
<title>{title}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n\
<nav><a href=\"/\">Main Model</a><a href=\"/model-info\">Model Info</a></nav>\n\
<h1>{title}</h1>\n{body}\n</body>\n</html>\n",
        title = escape(title),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<b a="1">Tom & 'Jerry'</b>"#),
            "&lt;b a=&quot;1&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_layout_escapes_title() {
        let page = layout("<Loans>", "<p>ok</p>");
        assert!(page.contains("<title>&lt;Loans&gt;</title>"));
        assert!(page.contains("<p>ok</p>"));
    }
}
