//! Markdown to HTML for the single-lookup narrative.

use pulldown_cmark::{html, Event, Options, Parser};

/// Render model markdown (tables and strikethrough enabled) to HTML.
///
/// The reply is grounded on third-party snippets, so raw HTML in it is
/// emitted as escaped text rather than markup.
pub fn render_markdown(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    // pulldown-cmark 0.9 reports both block and inline HTML as `Event::Html`.
    let parser = Parser::new_ext(markdown, options).map(|event| match event {
        Event::Html(raw) => Event::Text(raw),
        other => other,
    });

    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headings_and_lists() {
        let html = render_markdown("## LM1117\n\n- Package: SOT-223\n- **Active**");
        assert!(html.contains("<h2>LM1117</h2>"));
        assert!(html.contains("<li>Package: SOT-223</li>"));
        assert!(html.contains("<strong>Active</strong>"));
    }

    #[test]
    fn test_tables_enabled() {
        let html = render_markdown("| Part | Maker |\n|---|---|\n| LM1117 | TI |");
        assert!(html.contains("<table>"));
        assert!(html.contains("<td>LM1117</td>"));
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let html = render_markdown(
            "## LM1117\n<img src=x onerror=alert(1)>\n\nok <script>alert(2)</script>",
        );
        assert!(html.contains("<h2>LM1117</h2>"));
        assert!(!html.contains("<img"));
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;img src=x onerror=alert(1)&gt;"));
        assert!(html.contains("&lt;script&gt;alert(2)&lt;/script&gt;"));
    }
}
