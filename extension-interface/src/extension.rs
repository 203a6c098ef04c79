use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::filters::{FilterOption, FilterValues};
use crate::series::{Chapter, ExtensionMetadata, PageRequesterData, Series, SeriesListResponse};
use crate::settings::{SettingTypes, Settings};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebviewResponse {
    pub text: String,
}

/// Transport supplied by the host. Headers, cookies, retries and timeouts are
/// all its business; extensions only hand it a complete url.
#[async_trait]
pub trait Webview: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<WebviewResponse>;
}

#[async_trait]
impl<W: Webview + ?Sized> Webview for Arc<W> {
    async fn fetch(&self, url: &str) -> Result<WebviewResponse> {
        (**self).fetch(url).await
    }
}

/// The operation set every catalog extension exposes to the host.
#[async_trait]
pub trait ExtensionClient: Send + Sync {
    fn get_metadata(&self) -> ExtensionMetadata;

    async fn get_series(&self, source_id: &str) -> Result<Series>;

    async fn get_chapters(&self, source_id: &str) -> Result<Vec<Chapter>>;

    async fn get_page_requester_data(
        &self,
        series_source_id: &str,
        chapter_source_id: &str,
    ) -> Result<PageRequesterData>;

    fn get_page_urls(&self, page_requester_data: &PageRequesterData) -> Vec<String>;

    async fn get_image(&self, series: &Series, url: &str) -> Result<String>;

    async fn get_directory(&self, page: u32, filter_values: &FilterValues) -> Result<SeriesListResponse>;

    async fn get_search(
        &self,
        text: &str,
        page: u32,
        filter_values: &FilterValues,
    ) -> Result<SeriesListResponse>;

    fn get_setting_types(&self) -> SettingTypes;

    fn get_settings(&self) -> Settings;

    fn set_settings(&self, settings: &Settings);

    fn get_filter_options(&self) -> Vec<FilterOption>;
}
