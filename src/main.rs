use newsroll::{NewsWidget, WidgetConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let _ = dotenvy::from_filename(".env.local");
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = WidgetConfig::from_env();
    let widget = match NewsWidget::new(config) {
        Ok(widget) => widget,
        Err(error) => {
            tracing::error!(%error, "failed to initialize the news widget");
            std::process::exit(1);
        }
    };

    match widget.refresh().await {
        Ok(status) => tracing::info!(?status, "refresh finished"),
        Err(error) => tracing::error!(%error, "refresh failed"),
    }

    if let Some(html) = widget.panel_html().await {
        println!("{html}");
    }
}
