pub mod core;

use std::time::Duration;

use tokio::sync::Mutex;

pub use crate::core::detail::{DetailOverlay, DismissAction};
pub use crate::core::feed::types::DisplayEntry;
pub use crate::core::panel::NewsPanel;

use crate::core::feed::fetcher::fetch_converted_feed;
use crate::core::feed::normalize::normalize_item;
use crate::core::feed::parser::{parse_conversion_body, FeedParseError};
use crate::core::render::{
    render_entries, render_notice, FEED_EMPTY_NOTICE, FEED_UNAVAILABLE_NOTICE,
};

const DEFAULT_CONVERSION_ENDPOINT: &str = "https://api.rss2json.com/v1/api.json";
const DEFAULT_FEED_URL: &str = "https://yapayzeka101.substack.com/feed";
const DEFAULT_MAX_ITEMS: usize = 5;
const DEFAULT_TIMEOUT_SECS: u64 = 20;

#[derive(Debug, Clone)]
pub struct WidgetConfig {
    pub feed_url: String,
    pub conversion_endpoint: String,
    pub max_items: usize,
    pub request_timeout: Duration,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            feed_url: DEFAULT_FEED_URL.to_string(),
            conversion_endpoint: DEFAULT_CONVERSION_ENDPOINT.to_string(),
            max_items: DEFAULT_MAX_ITEMS,
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl WidgetConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(value) = std::env::var("NEWSROLL_FEED_URL") {
            if !value.trim().is_empty() {
                config.feed_url = value;
            }
        }
        if let Ok(value) = std::env::var("NEWSROLL_CONVERSION_ENDPOINT") {
            if !value.trim().is_empty() {
                config.conversion_endpoint = value;
            }
        }
        if let Ok(value) = std::env::var("NEWSROLL_MAX_ITEMS") {
            if let Ok(parsed) = value.trim().parse() {
                config.max_items = parsed;
            }
        }
        if let Ok(value) = std::env::var("NEWSROLL_TIMEOUT_SECS") {
            if let Ok(parsed) = value.trim().parse() {
                config.request_timeout = Duration::from_secs(parsed);
            }
        }
        config
    }
}

#[derive(Debug, thiserror::Error)]
pub enum WidgetError {
    #[error("failed to build http client: {0}")]
    Client(#[from] reqwest::Error),
    #[error("a refresh is already in flight")]
    RefreshInFlight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshStatus {
    Rendered(usize),
    FeedUnavailable,
    FeedEmpty,
    PanelNotMounted,
}

#[derive(Debug, Default)]
struct WidgetState {
    panel: Option<NewsPanel>,
    overlay: Option<DetailOverlay>,
    entries: Vec<DisplayEntry>,
}

pub struct NewsWidget {
    client: reqwest::Client,
    config: WidgetConfig,
    state: Mutex<WidgetState>,
}

impl NewsWidget {
    pub fn new(config: WidgetConfig) -> Result<Self, WidgetError> {
        Self::with_mounts(config, Some(NewsPanel::new()), Some(DetailOverlay::new()))
    }

    // Mount state mirrors the host page: either element may be missing and the
    // widget works around it.
    pub fn with_mounts(
        config: WidgetConfig,
        panel: Option<NewsPanel>,
        overlay: Option<DetailOverlay>,
    ) -> Result<Self, WidgetError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self {
            client,
            config,
            state: Mutex::new(WidgetState {
                panel,
                overlay,
                entries: Vec::new(),
            }),
        })
    }

    pub async fn refresh(&self) -> Result<RefreshStatus, WidgetError> {
        let Ok(mut guard) = self.state.try_lock() else {
            tracing::warn!("refresh rejected, another refresh is in flight");
            return Err(WidgetError::RefreshInFlight);
        };
        let state = &mut *guard;
        let Some(panel) = state.panel.as_mut() else {
            tracing::warn!("news panel is not mounted, skipping refresh");
            return Ok(RefreshStatus::PanelNotMounted);
        };

        let body = match fetch_converted_feed(
            &self.client,
            &self.config.conversion_endpoint,
            &self.config.feed_url,
        )
        .await
        {
            Ok(body) => body,
            Err(error) => {
                tracing::error!(%error, "failed to fetch converted feed");
                panel.replace_content(render_notice(FEED_UNAVAILABLE_NOTICE));
                state.entries.clear();
                return Ok(RefreshStatus::FeedUnavailable);
            }
        };

        let items = match parse_conversion_body(&body) {
            Ok(items) => items,
            Err(error @ FeedParseError::Json(_)) => {
                tracing::error!(%error, "conversion response body was unreadable");
                panel.replace_content(render_notice(FEED_UNAVAILABLE_NOTICE));
                state.entries.clear();
                return Ok(RefreshStatus::FeedUnavailable);
            }
            Err(error) => {
                tracing::error!(%error, "conversion API returned no usable items");
                panel.replace_content(render_notice(FEED_EMPTY_NOTICE));
                state.entries.clear();
                return Ok(RefreshStatus::FeedEmpty);
            }
        };

        let entries: Vec<DisplayEntry> = items
            .iter()
            .take(self.config.max_items)
            .map(normalize_item)
            .collect();
        panel.replace_content(render_entries(&entries));
        let rendered = entries.len();
        state.entries = entries;
        Ok(RefreshStatus::Rendered(rendered))
    }

    pub async fn show_detail(&self, entry_index: usize) -> bool {
        let mut guard = self.state.lock().await;
        let state = &mut *guard;
        let Some(overlay) = state.overlay.as_mut() else {
            tracing::warn!("detail overlay is not mounted, ignoring read-more activation");
            return false;
        };
        let Some(entry) = state.entries.get(entry_index) else {
            tracing::warn!(entry_index, "read-more activation for an unknown entry");
            return false;
        };
        overlay.open(entry);
        true
    }

    pub async fn dismiss_detail(&self, action: DismissAction) {
        let mut guard = self.state.lock().await;
        if let Some(overlay) = guard.overlay.as_mut() {
            overlay.dismiss(action);
        }
    }

    pub async fn panel_html(&self) -> Option<String> {
        let guard = self.state.lock().await;
        guard.panel.as_ref().map(|panel| panel.html().to_string())
    }

    pub async fn overlay_html(&self) -> Option<String> {
        let guard = self.state.lock().await;
        guard.overlay.as_ref().map(DetailOverlay::render)
    }

    pub async fn overlay_visible(&self) -> bool {
        let guard = self.state.lock().await;
        guard.overlay.as_ref().is_some_and(DetailOverlay::is_visible)
    }

    pub async fn entries(&self) -> Vec<DisplayEntry> {
        self.state.lock().await.entries.clone()
    }
}
