//! Markdown body rendering

use pulldown_cmark::{html, Options, Parser};

/// Render a markdown body to HTML
///
/// Front-matter is split off before rendering, so the YAML metadata option
/// stays disabled here. Syntax highlighting is a presentation concern and
/// not applied at this layer.
pub fn render_html(markdown: &str) -> String {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS;
    let parser = Parser::new_ext(markdown, options);

    let mut output = String::new();
    html::push_html(&mut output, parser);
    output
}
