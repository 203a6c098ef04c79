use serde::{Deserialize, Serialize};

use crate::language::LanguageKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SeriesStatus {
    Ongoing,
    Completed,
    Unknown,
}

/// A series as the host stores it. `id` stays `None` until the host assigns one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    pub id: Option<String>,
    pub extension_id: String,
    pub source_id: String,
    pub title: String,
    pub alt_titles: Vec<String>,
    pub description: String,
    pub authors: Vec<String>,
    pub artists: Vec<String>,
    pub tags: Vec<String>,
    pub status: SeriesStatus,
    pub original_language_key: LanguageKey,
    pub number_unread: u32,
    pub remote_cover_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chapter {
    pub id: Option<String>,
    pub series_id: Option<String>,
    pub source_id: String,
    pub title: String,
    pub chapter_number: String,
    pub volume_number: String,
    pub language_key: LanguageKey,
    pub group_name: String,
    /// Milliseconds since the unix epoch.
    pub time: i64,
    pub read: bool,
}

/// What an extension needs to later resolve the page urls of one chapter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequesterData {
    pub server: String,
    pub hash: String,
    pub num_pages: usize,
    pub page_filenames: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesListResponse {
    pub series_list: Vec<Series>,
    pub has_more: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtensionMetadata {
    pub id: String,
    pub name: String,
    pub url: String,
    /// `None` when the source serves several languages.
    pub translated_language: Option<LanguageKey>,
}
