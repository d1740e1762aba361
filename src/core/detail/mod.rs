use crate::core::feed::types::DisplayEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissAction {
    CloseControl,
    OutsideClick,
    EscapeKey,
}

#[derive(Debug, Clone, Default)]
pub struct DetailOverlay {
    visible: bool,
    image_url: Option<String>,
    body_text: String,
}

impl DetailOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, entry: &DisplayEntry) {
        self.image_url = entry.image_url.clone();
        self.body_text = entry.full_description.clone();
        self.visible = true;
    }

    // All three dismiss triggers collapse to hidden; nothing else changes.
    pub fn dismiss(&mut self, _action: DismissAction) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn render(&self) -> String {
        let display = if self.visible { "block" } else { "none" };
        let image = match &self.image_url {
            Some(url) => format!(
                "<img class=\"overlay-image\" src=\"{}\">",
                html_escape::encode_double_quoted_attribute(url)
            ),
            None => String::new(),
        };

        format!(
            concat!(
                "<div class=\"detail-overlay\" style=\"display:{display};\">",
                "<span class=\"close-control\">&times;</span>",
                "{image}",
                "<div class=\"overlay-text\">{body}</div>",
                "</div>"
            ),
            display = display,
            image = image,
            body = html_escape::encode_text(&self.body_text),
        )
    }
}
