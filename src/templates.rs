//! HTML page rendering module
//!
//! Builds the wiki's pages from a single shared layout. Everything that came
//! from a user (titles, query text, form values) is escaped here; rendered
//! Markdown is the one deliberate exception, inserted as-is into the entry
//! page.

use crate::http::form::{edit_url, entry_url};

/// Escape text for safe insertion into HTML content or attribute values.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Wrap a page body in the shared document layout.
#[allow(clippy::too_many_lines)]
fn page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title} | Wiki</title>
    <link rel="icon" type="image/svg+xml" href="/favicon.svg">
    <style>
        body {{
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, "Helvetica Neue", Arial, sans-serif;
            line-height: 1.6;
            max-width: 900px;
            margin: 0 auto;
            padding: 20px;
            background: #f5f5f5;
            color: #333;
        }}
        .topbar {{
            display: flex;
            align-items: center;
            gap: 20px;
            flex-wrap: wrap;
            padding-bottom: 15px;
            border-bottom: 2px solid #667eea;
            margin-bottom: 25px;
        }}
        .topbar .brand {{
            font-size: 1.4em;
            font-weight: bold;
        }}
        .topbar nav a {{
            margin-right: 15px;
        }}
        .topbar .search input {{
            padding: 6px 10px;
            border: 1px solid #ccc;
            border-radius: 5px;
        }}
        pre {{
            background: #2d2d2d;
            color: #f8f8f2;
            padding: 15px;
            border-radius: 5px;
            overflow-x: auto;
        }}
        code {{
            background: #e8e8e8;
            padding: 2px 6px;
            border-radius: 3px;
            font-family: "Courier New", monospace;
            font-size: 0.9em;
        }}
        pre code {{
            background: transparent;
            padding: 0;
        }}
        h1, h2, h3 {{
            color: #667eea;
            border-bottom: 2px solid #667eea;
            padding-bottom: 5px;
        }}
        h1 {{ font-size: 2em; }}
        h2 {{ font-size: 1.5em; margin-top: 30px; }}
        h3 {{ font-size: 1.2em; }}
        table {{
            width: 100%;
            border-collapse: collapse;
            margin: 20px 0;
            background: white;
        }}
        th, td {{
            border: 1px solid #ddd;
            padding: 12px;
            text-align: left;
        }}
        th {{
            background: #667eea;
            color: white;
            font-weight: bold;
        }}
        tr:nth-child(even) {{
            background: #f9f9f9;
        }}
        a {{
            color: #667eea;
            text-decoration: none;
        }}
        a:hover {{
            text-decoration: underline;
        }}
        blockquote {{
            border-left: 4px solid #667eea;
            margin: 20px 0;
            padding-left: 20px;
            color: #666;
        }}
        ul.entry-list li {{
            margin: 8px 0;
        }}
        form.editor label {{
            display: block;
            margin-top: 15px;
            font-weight: bold;
        }}
        form.editor input[type="text"], form.editor textarea {{
            width: 100%;
            padding: 8px;
            margin-top: 5px;
            border: 1px solid #ccc;
            border-radius: 5px;
            font-family: "Courier New", monospace;
        }}
        form.editor button {{
            margin-top: 15px;
            padding: 8px 20px;
            background: #667eea;
            color: white;
            border: none;
            border-radius: 5px;
            cursor: pointer;
        }}
        p.error {{
            background: #fdecea;
            border-left: 4px solid #d93025;
            color: #d93025;
            padding: 10px 15px;
        }}
    </style>
</head>
<body>
    <header class="topbar">
        <a class="brand" href="/">Wiki</a>
        <form class="search" action="/search" method="get">
            <input type="search" name="q" placeholder="Search entries">
        </form>
        <nav>
            <a href="/">All Pages</a>
            <a href="/new">New Page</a>
            <a href="/random">Random</a>
        </nav>
    </header>
    <main>
{body}
    </main>
</body>
</html>"#
    )
}

/// A link to an entry: encoded title in the href, exact spelling as text.
fn entry_link(title: &str) -> String {
    format!(
        r#"<a href="{}">{}</a>"#,
        entry_url(title),
        escape_html(title)
    )
}

/// Index page listing every entry title.
pub fn index_page(titles: &[String]) -> String {
    let body = if titles.is_empty() {
        "<h1>All Pages</h1>\n<p>No entries yet. <a href=\"/new\">Create the first one</a>.</p>"
            .to_string()
    } else {
        let items: String = titles
            .iter()
            .map(|title| format!("    <li>{}</li>\n", entry_link(title)))
            .collect();
        format!("<h1>All Pages</h1>\n<ul class=\"entry-list\">\n{items}</ul>")
    };
    page("All Pages", &body)
}

/// A single rendered entry. `content_html` is trusted markup produced by the
/// Markdown renderer and is not escaped.
pub fn entry_page(title: &str, content_html: &str) -> String {
    let body = format!(
        "<article>\n{content_html}\n</article>\n<p><a href=\"{}\">Edit this page</a></p>",
        edit_url(title)
    );
    page(&escape_html(title), &body)
}

/// Search results page for a query with no exact match.
pub fn search_page(query: &str, results: &[String]) -> String {
    let escaped_query = escape_html(query);
    let body = if results.is_empty() {
        format!(
            "<h1>Search Results</h1>\n<p>No pages match \"<em>{escaped_query}</em>\". \
             You can <a href=\"/new\">create a new page</a>.</p>"
        )
    } else {
        let items: String = results
            .iter()
            .map(|title| format!("    <li>{}</li>\n", entry_link(title)))
            .collect();
        format!(
            "<h1>Search Results</h1>\n<p>Pages matching \"<em>{escaped_query}</em>\":</p>\n\
             <ul class=\"entry-list\">\n{items}</ul>"
        )
    };
    page("Search Results", &body)
}

/// Creation form. `error` re-displays the form with a message while keeping
/// whatever the user already typed.
pub fn new_entry_page(error: Option<&str>, title_value: &str, content_value: &str) -> String {
    let error_banner = error.map_or_else(String::new, |message| {
        format!("<p class=\"error\">{}</p>\n", escape_html(message))
    });
    let body = format!(
        r#"<h1>Create New Page</h1>
{error_banner}<form class="editor" action="/new" method="post">
    <label for="title">Title</label>
    <input type="text" id="title" name="title" value="{title}">
    <label for="content">Content (Markdown)</label>
    <textarea id="content" name="content" rows="15">{content}</textarea>
    <button type="submit">Save</button>
</form>"#,
        error_banner = error_banner,
        title = escape_html(title_value),
        content = escape_html(content_value),
    );
    page("Create New Page", &body)
}

/// Edit form, prefilled with the entry's current content.
pub fn edit_entry_page(title: &str, content: &str) -> String {
    let escaped_title = escape_html(title);
    let body = format!(
        r#"<h1>Edit: {escaped_title}</h1>
<form class="editor" action="{action}" method="post">
    <label for="content">Content (Markdown)</label>
    <textarea id="content" name="content" rows="15">{content}</textarea>
    <button type="submit">Save Changes</button>
</form>"#,
        action = edit_url(title),
        content = escape_html(content),
    );
    page(&format!("Edit: {escaped_title}"), &body)
}

/// Error page for missing entries and unknown paths.
pub fn error_page(message: &str) -> String {
    let body = format!(
        "<h1>Error</h1>\n<p>{}</p>\n<p><a href=\"/\">Return to the index</a></p>",
        escape_html(message)
    );
    page("Error", &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>&"quoted"'</b>"#),
            "&lt;b&gt;&amp;&quot;quoted&quot;&#39;&lt;/b&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_index_page_links_entries() {
        let html = index_page(&["Category Theory".to_string(), "Python".to_string()]);
        assert!(html.contains(r#"<a href="/wiki/Category%20Theory">Category Theory</a>"#));
        assert!(html.contains(r#"<a href="/wiki/Python">Python</a>"#));
    }

    #[test]
    fn test_index_page_empty_state() {
        let html = index_page(&[]);
        assert!(html.contains("No entries yet"));
    }

    #[test]
    fn test_entry_page_keeps_rendered_markup() {
        let html = entry_page("Python", "<h1>Python</h1>");
        assert!(html.contains("<h1>Python</h1>"));
        assert!(html.contains(r#"href="/wiki/Python/edit""#));
    }

    #[test]
    fn test_entry_page_escapes_title() {
        let html = entry_page("<script>", "<p>ok</p>");
        assert!(html.contains("&lt;script&gt; | Wiki"));
    }

    #[test]
    fn test_search_page_lists_results() {
        let html = search_page("cat", &["Cats".to_string()]);
        assert!(html.contains("Pages matching"));
        assert!(html.contains(r#"<a href="/wiki/Cats">Cats</a>"#));
    }

    #[test]
    fn test_search_page_no_results() {
        let html = search_page("<oops>", &[]);
        assert!(html.contains("No pages match"));
        assert!(html.contains("&lt;oops&gt;"));
    }

    #[test]
    fn test_new_page_shows_error_and_preserves_values() {
        let html = new_entry_page(Some("Both title and content are required."), "Draft", "");
        assert!(html.contains("Both title and content are required."));
        assert!(html.contains(r#"value="Draft""#));
    }

    #[test]
    fn test_new_page_without_error() {
        let html = new_entry_page(None, "", "");
        assert!(!html.contains("class=\"error\""));
        assert!(html.contains(r#"action="/new""#));
    }

    #[test]
    fn test_edit_page_prefills_content() {
        let html = edit_entry_page("Git", "# Git\n<tags> & such");
        assert!(html.contains(r#"action="/wiki/Git/edit""#));
        assert!(html.contains("# Git\n&lt;tags&gt; &amp; such"));
    }

    #[test]
    fn test_error_page_names_problem() {
        let html = error_page("The page 'Nope' was not found.");
        assert!(html.contains("The page &#39;Nope&#39; was not found."));
    }
}
