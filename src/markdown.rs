//! Markdown rendering module
//!
//! Converts raw entry content to an HTML fragment. The result is inserted
//! into the entry page unescaped, so this is the only place wiki content
//! becomes markup.

use pulldown_cmark::{html, Options, Parser};

pub fn render_markdown(md_content: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(md_content, options);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}
