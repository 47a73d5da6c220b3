//! Markdown Preview
//!
//! Renders task descriptions with pulldown-cmark. Raw HTML in the source
//! is shown as text, never injected, and links or images may only point
//! at http(s), mailto, or relative URLs.

use pulldown_cmark::{html::push_html, CowStr, Event, Options, Parser, Tag};

const SAFE_SCHEMES: &[&str] = &["http", "https", "mailto"];

fn get_options() -> Options {
    Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES | Options::ENABLE_TASKLISTS
}

/// Render Markdown to an HTML string safe for `inner_html`
pub fn render_markdown(text: &str) -> String {
    let events = Parser::new_ext(text, get_options()).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(CowStr::from(raw.into_string())),
        Event::Start(Tag::Link { link_type, dest_url, title, id }) => Event::Start(Tag::Link {
            link_type,
            dest_url: sanitize_url(dest_url),
            title,
            id,
        }),
        Event::Start(Tag::Image { link_type, dest_url, title, id }) => Event::Start(Tag::Image {
            link_type,
            dest_url: sanitize_url(dest_url),
            title,
            id,
        }),
        other => other,
    });
    let mut html_output = String::new();
    push_html(&mut html_output, events);
    html_output
}

/// Replace a destination whose scheme is not allowed with `#`
fn sanitize_url(url: CowStr<'_>) -> CowStr<'_> {
    if is_safe_url(&url) {
        url
    } else {
        CowStr::Borrowed("#")
    }
}

fn is_safe_url(url: &str) -> bool {
    // Browsers skip whitespace and control characters inside a scheme
    let compact: String = url
        .chars()
        .filter(|c| !c.is_ascii_whitespace() && !c.is_control())
        .collect();
    let scheme_end = compact.find(|c| matches!(c, ':' | '/' | '?' | '#'));
    match scheme_end {
        Some(i) if compact[i..].starts_with(':') => {
            let scheme = compact[..i].to_ascii_lowercase();
            SAFE_SCHEMES.contains(&scheme.as_str())
        }
        // No scheme: relative path, query or fragment
        _ => true,
    }
}
