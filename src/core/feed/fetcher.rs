#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("unexpected status code: {0}")]
    HttpStatus(u16),
}

// The feed URL travels as the `rss_url` query parameter; reqwest handles the
// percent-encoding.
pub async fn fetch_converted_feed(
    client: &reqwest::Client,
    endpoint: &str,
    feed_url: &str,
) -> Result<Vec<u8>, FetchError> {
    let response = client
        .get(endpoint)
        .query(&[("rss_url", feed_url)])
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::HttpStatus(status.as_u16()));
    }

    Ok(response.bytes().await?.to_vec())
}
