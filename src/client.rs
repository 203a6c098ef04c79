use anyhow::{Context, Result};
use async_trait::async_trait;
use extension_interface::{
    Chapter, ExtensionClient, ExtensionMetadata, FilterOption, FilterValues, PageRequesterData, Series,
    SeriesListResponse, SettingTypes, Settings, Webview,
};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::api::{ChapterDetailResponse, ChapterListResponse, ComicDetailResponse, SearchHit};
use crate::filters::filter_options;
use crate::ids::ComickId;
use crate::mapping::{chapter_from_entry, page_requester_data_from, series_from_detail, series_from_search_hit};
use crate::payload::extract_embedded_json;
use crate::query::{encode, search_params, COMPAT_FLAG, SEARCH_LIMIT};

pub const DEFAULT_API_URL: &str = "https://api.comick.io";

pub const EXTENSION_ID: &str = "comick";

/// Asks for every chapter in a single page.
const CHAPTER_LIMIT: u32 = 99_999;

pub fn metadata() -> ExtensionMetadata {
    ExtensionMetadata {
        id: EXTENSION_ID.to_string(),
        name: "Comick".to_string(),
        url: "https://comick.io".to_string(),
        translated_language: None,
    }
}

/// Comick catalog extension. Holds no per-request state, so one instance can
/// serve any number of overlapping calls.
pub struct ComickClient<W> {
    webview: W,
    api_url: String,
}

impl<W: Webview> ComickClient<W> {
    pub fn new(webview: W) -> Self {
        Self::with_api_url(webview, DEFAULT_API_URL)
    }

    pub fn with_api_url(webview: W, api_url: impl Into<String>) -> Self {
        let api_url = api_url.into().trim_end_matches('/').to_string();
        Self { webview, api_url }
    }

    pub fn api_url(&self) -> &str { &self.api_url }

    async fn fetch_payload<T: DeserializeOwned + Send>(&self, op: &str, url: &str) -> Result<T> {
        debug!(op, url, "comick: request");
        let response = self
            .webview
            .fetch(url)
            .await
            .with_context(|| format!("{op}: fetching {url}"))?;
        let payload = extract_embedded_json(&response.text)
            .with_context(|| format!("{op}: reading payload of {url}"))?;
        Ok(payload)
    }

    fn series_url(&self, slug: &str) -> String {
        format!("{}/comic/{slug}?{}={}", self.api_url, COMPAT_FLAG.0, COMPAT_FLAG.1)
    }

    fn chapters_url(&self, hid: &str) -> String {
        format!("{}/comic/{hid}/chapters?limit={CHAPTER_LIMIT}", self.api_url)
    }

    fn chapter_url(&self, chapter_hid: &str) -> String {
        format!("{}/chapter/{chapter_hid}?{}={}", self.api_url, COMPAT_FLAG.0, COMPAT_FLAG.1)
    }

    fn search_url(&self, text: &str, page: u32, filter_values: &FilterValues) -> String {
        let params = search_params(text, page, filter_values);
        format!("{}/v1.0/search?{}", self.api_url, encode(&params))
    }

    async fn fetch_detail(&self, slug: &str) -> Result<ComicDetailResponse> {
        self.fetch_payload("series", &self.series_url(slug)).await
    }

    /// The chapter list is keyed by hid, which search stubs do not carry yet.
    async fn resolve_hid(&self, id: &ComickId<'_>) -> Result<String> {
        if let Some(hid) = id.hid {
            return Ok(hid.to_string());
        }
        debug!(slug = id.slug, "comick: resolving hid from series detail");
        Ok(self.fetch_detail(id.slug).await?.comic.hid)
    }
}

#[async_trait]
impl<W: Webview> ExtensionClient for ComickClient<W> {
    fn get_metadata(&self) -> ExtensionMetadata {
        metadata()
    }

    async fn get_series(&self, source_id: &str) -> Result<Series> {
        let id = ComickId::parse(source_id)?;
        let detail = self.fetch_detail(id.slug).await?;
        Ok(series_from_detail(EXTENSION_ID, detail))
    }

    async fn get_chapters(&self, source_id: &str) -> Result<Vec<Chapter>> {
        let id = ComickId::parse(source_id)?;
        let hid = self.resolve_hid(&id).await?;
        let list: ChapterListResponse = self.fetch_payload("chapters", &self.chapters_url(&hid)).await?;
        let chapters: Vec<Chapter> = list.chapters.into_iter().map(chapter_from_entry).collect();
        debug!(hid = %hid, count = chapters.len(), "comick: chapters mapped");
        Ok(chapters)
    }

    async fn get_page_requester_data(
        &self,
        _series_source_id: &str,
        chapter_source_id: &str,
    ) -> Result<PageRequesterData> {
        let detail: ChapterDetailResponse = self
            .fetch_payload("pages", &self.chapter_url(chapter_source_id))
            .await?;
        Ok(page_requester_data_from(detail))
    }

    fn get_page_urls(&self, page_requester_data: &PageRequesterData) -> Vec<String> {
        page_requester_data.page_filenames.clone()
    }

    async fn get_image(&self, _series: &Series, url: &str) -> Result<String> {
        Ok(url.to_string())
    }

    async fn get_directory(&self, page: u32, filter_values: &FilterValues) -> Result<SeriesListResponse> {
        self.get_search("", page, filter_values).await
    }

    async fn get_search(&self, text: &str, page: u32, filter_values: &FilterValues) -> Result<SeriesListResponse> {
        let url = self.search_url(text, page, filter_values);
        let hits: Vec<SearchHit> = self.fetch_payload("search", &url).await?;
        let series_list: Vec<Series> = hits
            .into_iter()
            .map(|hit| series_from_search_hit(EXTENSION_ID, hit))
            .collect();
        // Comick does not report a total; a full page is taken to mean there is another.
        let has_more = series_list.len() == SEARCH_LIMIT;
        debug!(page, count = series_list.len(), has_more, "comick: search mapped");
        Ok(SeriesListResponse { series_list, has_more })
    }

    fn get_setting_types(&self) -> SettingTypes {
        SettingTypes::new()
    }

    fn get_settings(&self) -> Settings {
        Settings::new()
    }

    fn set_settings(&self, _settings: &Settings) {}

    fn get_filter_options(&self) -> Vec<FilterOption> {
        filter_options()
    }
}
