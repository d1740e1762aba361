use crate::core::feed::types::DisplayEntry;

pub const FEED_UNAVAILABLE_NOTICE: &str =
    "Could not load latest news at the moment. Please try again later.";
pub const FEED_EMPTY_NOTICE: &str = "No news items found or error fetching feed.";
pub const FALLBACK_BACKGROUND: &str = "background-color: var(--light-gray);";

// Pure fragment assembly: the entry sequence in, the replacement markup out.
// Every text node and attribute value is escaped here, never upstream.
pub fn render_entries(entries: &[DisplayEntry]) -> String {
    entries.iter().map(render_entry).collect()
}

fn render_entry(entry: &DisplayEntry) -> String {
    let style = match &entry.image_url {
        Some(url) => format!(
            "background-image: url('{}');",
            html_escape::encode_quoted_attribute(url)
        ),
        None => FALLBACK_BACKGROUND.to_string(),
    };

    format!(
        concat!(
            "<li style=\"{style}\">",
            "<div class=\"news-entry-content\">",
            "<h3>{title}</h3>",
            "<p>{snippet}</p>",
            "<a href=\"{link}\" target=\"_blank\" rel=\"noopener noreferrer\" ",
            "class=\"read-more-link\">Read more &rarr;</a>",
            "<div class=\"entry-detail\" style=\"display:none;\">{detail}</div>",
            "</div>",
            "</li>"
        ),
        style = style,
        title = html_escape::encode_text(&entry.title),
        snippet = html_escape::encode_text(&entry.snippet),
        link = html_escape::encode_double_quoted_attribute(&entry.link),
        detail = html_escape::encode_text(&entry.full_description),
    )
}

pub fn render_notice(message: &str) -> String {
    format!("<p>{}</p>", html_escape::encode_text(message))
}
