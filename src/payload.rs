//! Comick answers automated clients with its JSON rendered inside an HTML
//! page, so every response body is unwrapped from its `<pre>` element first.

use scraper::{Html, Selector};
use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("response has no <pre> element holding the JSON payload")]
    MissingWrapper,
    #[error("invalid selector: {0}")]
    Selector(String),
    #[error("embedded JSON payload is malformed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Text content of the first `<pre>` element, entities decoded.
pub fn embedded_text(body: &str) -> Result<String, PayloadError> {
    let selector = Selector::parse("pre").map_err(|e| PayloadError::Selector(e.to_string()))?;
    let document = Html::parse_document(body);
    document
        .select(&selector)
        .next()
        .map(|pre| pre.text().collect::<String>())
        .ok_or(PayloadError::MissingWrapper)
}

pub fn extract_embedded_json<T: DeserializeOwned>(body: &str) -> Result<T, PayloadError> {
    let text = embedded_text(body)?;
    Ok(serde_json::from_str(&text)?)
}
