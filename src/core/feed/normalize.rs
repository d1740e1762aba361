use super::types::{DisplayEntry, Enclosure, EnclosureResource, FeedItem};

pub const SNIPPET_LIMIT: usize = 100;

pub fn normalize_item(item: &FeedItem) -> DisplayEntry {
    let source = item
        .description
        .as_deref()
        .filter(|text| !text.is_empty())
        .or_else(|| item.content_text.as_deref().filter(|text| !text.is_empty()))
        .unwrap_or_default();
    let full_description = strip_markup(source);
    let snippet = truncate_snippet(&full_description);

    DisplayEntry {
        title: item.title.clone(),
        link: item.link.clone(),
        image_url: select_image_url(item),
        full_description,
        snippet,
    }
}

// Text-content extraction on the raw markup string: drop everything between
// tag brackets, keep nested text as-is, then decode entities. Whitespace is
// preserved.
pub fn strip_markup(raw: &str) -> String {
    let mut text = String::with_capacity(raw.len());
    let mut in_tag = false;
    for ch in raw.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => text.push(ch),
            _ => {}
        }
    }
    html_escape::decode_html_entities(&text).into_owned()
}

// Image resolution order: a typed image resource from an enclosure list, then
// a single enclosure that is image-typed or carries no type at all, then the
// thumbnail. Empty links count as absent.
pub fn select_image_url(item: &FeedItem) -> Option<String> {
    let from_enclosure = match &item.enclosure {
        Enclosure::Multiple(resources) => resources
            .iter()
            .find(|resource| declares_image_type(resource))
            .and_then(|resource| resource.link.clone()),
        Enclosure::Single(resource) => {
            if declares_image_type(resource) || resource.media_type.is_none() {
                resource.link.clone()
            } else {
                None
            }
        }
        Enclosure::Absent => None,
    };

    from_enclosure
        .filter(|link| !link.is_empty())
        .or_else(|| item.thumbnail.clone().filter(|url| !url.is_empty()))
}

fn declares_image_type(resource: &EnclosureResource) -> bool {
    resource
        .media_type
        .as_deref()
        .is_some_and(|media_type| media_type.starts_with("image/"))
}

fn truncate_snippet(full_description: &str) -> String {
    match full_description.char_indices().nth(SNIPPET_LIMIT) {
        Some((byte_index, _)) => format!("{}...", &full_description[..byte_index]),
        None => full_description.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item_with_description(description: &str) -> FeedItem {
        FeedItem {
            description: Some(description.to_string()),
            ..FeedItem::default()
        }
    }

    #[test]
    fn description_falls_back_to_content_text() {
        let item = FeedItem {
            content_text: Some("plain text body".to_string()),
            ..FeedItem::default()
        };
        assert_eq!(normalize_item(&item).full_description, "plain text body");

        let empty_description = FeedItem {
            description: Some(String::new()),
            content_text: Some("fallback".to_string()),
            ..FeedItem::default()
        };
        assert_eq!(normalize_item(&empty_description).full_description, "fallback");
    }

    #[test]
    fn missing_description_and_content_text_yield_empty_entry_text() {
        let entry = normalize_item(&FeedItem::default());
        assert_eq!(entry.full_description, "");
        assert_eq!(entry.snippet, "");
    }

    #[test]
    fn strip_markup_keeps_nested_text() {
        assert_eq!(strip_markup("<p>Hello <em>there</em></p>"), "Hello there");
        assert_eq!(
            strip_markup("<div><p>Where this started, <em>and why</em>.</p></div>"),
            "Where this started, and why."
        );
    }

    #[test]
    fn strip_markup_decodes_entities_after_removing_tags() {
        assert_eq!(strip_markup("Papers &amp; posts"), "Papers & posts");
        // An encoded bracket is text, not a tag.
        assert_eq!(strip_markup("a &lt;b&gt; c"), "a <b> c");
    }

    #[test]
    fn strip_markup_preserves_whitespace() {
        assert_eq!(strip_markup("<p>two  spaces</p>"), "two  spaces");
    }

    #[test]
    fn snippet_is_untouched_at_or_below_the_limit() {
        let exactly_limit = "a".repeat(SNIPPET_LIMIT);
        let entry = normalize_item(&item_with_description(&exactly_limit));
        assert_eq!(entry.snippet, exactly_limit);

        let short = normalize_item(&item_with_description("short text"));
        assert_eq!(short.snippet, "short text");
    }

    #[test]
    fn snippet_truncates_with_ellipsis_past_the_limit() {
        let long = "b".repeat(SNIPPET_LIMIT + 1);
        let entry = normalize_item(&item_with_description(&long));
        assert_eq!(entry.snippet, format!("{}...", "b".repeat(SNIPPET_LIMIT)));
        assert_eq!(entry.snippet.chars().count(), SNIPPET_LIMIT + 3);
    }

    #[test]
    fn snippet_counts_characters_not_bytes() {
        let long = "ş".repeat(SNIPPET_LIMIT + 10);
        let entry = normalize_item(&item_with_description(&long));
        assert_eq!(entry.snippet, format!("{}...", "ş".repeat(SNIPPET_LIMIT)));
    }

    #[test]
    fn enclosure_list_selects_the_first_image_typed_resource() {
        let item = FeedItem {
            enclosure: Enclosure::Multiple(vec![
                EnclosureResource {
                    link: Some("https://cdn.example.com/ep.mp3".to_string()),
                    media_type: Some("audio/mpeg".to_string()),
                },
                EnclosureResource {
                    link: Some("X".to_string()),
                    media_type: Some("image/png".to_string()),
                },
            ]),
            ..FeedItem::default()
        };
        assert_eq!(select_image_url(&item), Some("X".to_string()));
    }

    #[test]
    fn untyped_single_enclosure_is_an_implicit_image() {
        let item = FeedItem {
            enclosure: Enclosure::Single(EnclosureResource {
                link: Some("Y".to_string()),
                media_type: None,
            }),
            ..FeedItem::default()
        };
        assert_eq!(select_image_url(&item), Some("Y".to_string()));
    }

    #[test]
    fn non_image_single_enclosure_falls_back_to_thumbnail() {
        let item = FeedItem {
            enclosure: Enclosure::Single(EnclosureResource {
                link: Some("https://cdn.example.com/ep.mp3".to_string()),
                media_type: Some("audio/mpeg".to_string()),
            }),
            thumbnail: Some("Z".to_string()),
            ..FeedItem::default()
        };
        assert_eq!(select_image_url(&item), Some("Z".to_string()));
    }

    #[test]
    fn thumbnail_is_used_when_no_enclosure_exists() {
        let item = FeedItem {
            thumbnail: Some("Z".to_string()),
            ..FeedItem::default()
        };
        assert_eq!(select_image_url(&item), Some("Z".to_string()));
    }

    #[test]
    fn image_typed_resource_without_a_link_falls_back_to_thumbnail() {
        let item = FeedItem {
            enclosure: Enclosure::Multiple(vec![EnclosureResource {
                link: None,
                media_type: Some("image/png".to_string()),
            }]),
            thumbnail: Some("Z".to_string()),
            ..FeedItem::default()
        };
        assert_eq!(select_image_url(&item), Some("Z".to_string()));
    }

    #[test]
    fn empty_strings_never_resolve_to_an_image() {
        let item = FeedItem {
            enclosure: Enclosure::Single(EnclosureResource {
                link: Some(String::new()),
                media_type: None,
            }),
            thumbnail: Some(String::new()),
            ..FeedItem::default()
        };
        assert_eq!(select_image_url(&item), None);
    }
}
