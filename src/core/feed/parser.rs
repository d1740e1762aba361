use super::types::{ConversionResponse, FeedItem};

#[derive(Debug, thiserror::Error)]
pub enum FeedParseError {
    #[error("conversion response is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("conversion API reported failure: {}", message.as_deref().unwrap_or("no message"))]
    ApiStatus { message: Option<String> },
    #[error("conversion response contains no items")]
    NoItems,
}

pub fn parse_conversion_body(raw: &[u8]) -> Result<Vec<FeedItem>, FeedParseError> {
    let response: ConversionResponse = serde_json::from_slice(raw)?;
    if response.status != "ok" {
        return Err(FeedParseError::ApiStatus {
            message: response.message,
        });
    }
    if response.items.is_empty() {
        return Err(FeedParseError::NoItems);
    }
    Ok(response.items)
}
