//! Composite series ids.
//!
//! A series fetched in full is stored as `slug:comicId:hid`. A search hit only
//! knows its slug and is stored as `slug:-1`. The slug keys series detail
//! requests and the hid keys chapter list requests.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SourceIdError {
    #[error("series source id has no slug: {0:?}")]
    Empty(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComickId<'a> {
    pub slug: &'a str,
    pub comic_id: Option<i64>,
    pub hid: Option<&'a str>,
}

impl<'a> ComickId<'a> {
    pub fn parse(source_id: &'a str) -> Result<Self, SourceIdError> {
        let mut parts = source_id.split(':');
        let slug = parts.next().unwrap_or_default().trim();
        if slug.is_empty() {
            return Err(SourceIdError::Empty(source_id.to_string()));
        }
        let comic_id = parts
            .next()
            .and_then(|s| s.trim().parse::<i64>().ok())
            .filter(|id| *id >= 0);
        let hid = parts.next().map(str::trim).filter(|s| !s.is_empty());
        Ok(Self { slug, comic_id, hid })
    }
}

pub fn detail_source_id(slug: &str, comic_id: i64, hid: &str) -> String {
    format!("{slug}:{comic_id}:{hid}")
}

pub fn search_source_id(slug: &str) -> String {
    format!("{slug}:-1")
}
