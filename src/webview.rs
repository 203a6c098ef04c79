use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use extension_interface::{Webview, WebviewResponse};
use reqwest::header::CONTENT_TYPE;

use crate::config::ComickConfig;

/// Plain HTTP stand-in for a host webview.
///
/// A browser shows JSON and text bodies as a document with the body inside a
/// `<pre>`; this does the same so extensions see one response shape.
pub struct ReqwestWebview {
    client: reqwest::Client,
}

impl ReqwestWebview {
    pub fn new(config: &ComickConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .context("building http client")?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Webview for ReqwestWebview {
    async fn fetch(&self, url: &str) -> Result<WebviewResponse> {
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("GET {url}"))?
            .error_for_status()
            .with_context(|| format!("GET {url}"))?;
        let content_type = resp
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let body = resp.text().await.with_context(|| format!("reading body of {url}"))?;
        Ok(WebviewResponse { text: render_like_browser(&content_type, body) })
    }
}

pub fn render_like_browser(content_type: &str, body: String) -> String {
    let ct = content_type.to_ascii_lowercase();
    if ct.contains("html") || ct.contains("xml") {
        return body;
    }
    format!("<html><head></head><body><pre>{}</pre></body></html>", escape_html(&body))
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}
