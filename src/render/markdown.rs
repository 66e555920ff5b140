//! Markdown conversion
//!
//! Converts decoded Markdown text to HTML via pulldown-cmark.

use pulldown_cmark::{Options, Parser, html as md_html};

/// Converts Markdown text to an HTML fragment.
///
/// Tables, footnotes, strikethrough and task lists are enabled.
pub fn markdown_to_html(text: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(text, options);
    let mut html = String::new();
    md_html::push_html(&mut html, parser);
    html
}
