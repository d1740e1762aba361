#[derive(Debug, Clone, Default)]
pub struct NewsPanel {
    html: String,
}

impl NewsPanel {
    pub fn new() -> Self {
        Self::default()
    }

    // The container is replaced wholesale on every render; prior content never
    // survives.
    pub fn replace_content(&mut self, html: String) {
        self.html = html;
    }

    pub fn html(&self) -> &str {
        &self.html
    }
}
