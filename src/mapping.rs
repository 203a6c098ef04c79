use chrono::{DateTime, NaiveDateTime};
use extension_interface::{find_language_key, Chapter, LanguageKey, PageRequesterData, Series, SeriesStatus};

use crate::api::{ChapterDetailResponse, ChapterEntry, ComicDetailResponse, SearchHit};
use crate::ids::{detail_source_id, search_source_id};

const STATUS_MAP: &[(i64, SeriesStatus)] = &[(1, SeriesStatus::Ongoing), (2, SeriesStatus::Completed)];

pub fn status_from_code(code: Option<i64>) -> SeriesStatus {
    code.and_then(|c| STATUS_MAP.iter().find(|(k, _)| *k == c))
        .map(|(_, status)| *status)
        .unwrap_or(SeriesStatus::Unknown)
}

pub fn language_or_multi(code: Option<&str>) -> LanguageKey {
    code.and_then(find_language_key).unwrap_or(LanguageKey::Multi)
}

/// Chapter locales look like `en` or `pt-br`; only the first two characters matter.
fn chapter_language(lang: Option<&str>) -> LanguageKey {
    language_or_multi(lang.map(|l| l.get(..2).unwrap_or(l)))
}

/// Milliseconds since the epoch for an `updated_at` value.
pub fn parse_timestamp_ms(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.timestamp_millis());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc().timestamp_millis())
}

pub fn series_from_detail(extension_id: &str, resp: ComicDetailResponse) -> Series {
    let comic = resp.comic;

    let mut tags: Vec<String> = resp.demographic.into_iter().filter(|d| !d.is_empty()).collect();
    tags.extend(
        comic
            .md_comic_md_genres
            .into_iter()
            .filter_map(|link| link.md_genres)
            .map(|genre| genre.name),
    );

    Series {
        id: None,
        extension_id: extension_id.to_string(),
        source_id: detail_source_id(&comic.slug, comic.id, &comic.hid),
        title: comic.title,
        alt_titles: comic.md_titles.into_iter().map(|t| t.title).collect(),
        description: comic.desc,
        authors: resp.authors.into_iter().map(|a| a.name).collect(),
        artists: resp.artists.into_iter().map(|a| a.name).collect(),
        tags,
        status: status_from_code(comic.status),
        original_language_key: language_or_multi(comic.iso639_1.as_deref()),
        number_unread: 0,
        remote_cover_url: comic.cover_url,
    }
}

/// Search hits only carry a title, slug and cover.
pub fn series_from_search_hit(extension_id: &str, hit: SearchHit) -> Series {
    Series {
        id: None,
        extension_id: extension_id.to_string(),
        source_id: search_source_id(&hit.slug),
        title: hit.title,
        alt_titles: Vec::new(),
        description: String::new(),
        authors: Vec::new(),
        artists: Vec::new(),
        tags: Vec::new(),
        status: SeriesStatus::Ongoing,
        original_language_key: LanguageKey::Multi,
        number_unread: 0,
        remote_cover_url: hit.cover_url,
    }
}

pub fn chapter_from_entry(entry: ChapterEntry) -> Chapter {
    let time = match entry.updated_at.as_deref() {
        Some(raw) => parse_timestamp_ms(raw).unwrap_or_else(|| {
            tracing::warn!(chapter = %entry.hid, updated_at = raw, "comick: unparseable chapter timestamp");
            0
        }),
        None => 0,
    };

    Chapter {
        id: None,
        series_id: None,
        language_key: chapter_language(entry.lang.as_deref()),
        group_name: entry.group_name.into_iter().next().unwrap_or_default(),
        chapter_number: entry.chap.unwrap_or_default(),
        volume_number: entry.vol.unwrap_or_default(),
        title: String::new(),
        time,
        read: false,
        source_id: entry.hid,
    }
}

pub fn page_requester_data_from(resp: ChapterDetailResponse) -> PageRequesterData {
    let page_filenames: Vec<String> = resp.chapter.images.into_iter().map(|image| image.url).collect();
    PageRequesterData {
        server: String::new(),
        hash: String::new(),
        num_pages: page_filenames.len(),
        page_filenames,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ChapterListResponse, ComicDetailResponse};

    #[test]
    fn status_table_has_explicit_default() {
        assert_eq!(status_from_code(Some(1)), SeriesStatus::Ongoing);
        assert_eq!(status_from_code(Some(2)), SeriesStatus::Completed);
        for code in [0, 3, 4, -1, 99] {
            assert_eq!(status_from_code(Some(code)), SeriesStatus::Unknown);
        }
        assert_eq!(status_from_code(None), SeriesStatus::Unknown);
    }

    #[test]
    fn language_falls_back_to_multi() {
        assert_eq!(language_or_multi(Some("ja")), LanguageKey::Japanese);
        assert_eq!(language_or_multi(Some("zz")), LanguageKey::Multi);
        assert_eq!(language_or_multi(None), LanguageKey::Multi);
        assert_eq!(chapter_language(Some("pt-br")), LanguageKey::Portuguese);
        assert_eq!(chapter_language(Some("e")), LanguageKey::Multi);
        assert_eq!(chapter_language(Some("")), LanguageKey::Multi);
    }

    #[test]
    fn timestamps_parse_to_millis() {
        assert_eq!(parse_timestamp_ms("1970-01-01T00:00:01Z"), Some(1_000));
        assert_eq!(parse_timestamp_ms("2023-05-01T12:00:00.500+00:00"), Some(1_682_942_400_500));
        assert_eq!(parse_timestamp_ms("2023-05-01T12:00:00"), Some(1_682_942_400_000));
        assert_eq!(parse_timestamp_ms("yesterday"), None);
    }

    #[test]
    fn detail_maps_every_field() {
        let raw = r#"{
            "comic": {
                "id": 123, "hid": "hid1", "slug": "abc", "title": "Abc",
                "desc": "About abc", "status": 2, "iso639_1": "ko",
                "cover_url": "https://meo.comick.pictures/cover.jpg",
                "md_titles": [{"title": "Alt One"}, {"title": "Alt Two"}],
                "md_comic_md_genres": [{"md_genres": {"name": "Action"}}, {"md_genres": {"name": "Drama"}}]
            },
            "demographic": "Seinen",
            "authors": [{"name": "Writer"}],
            "artists": [{"name": "Painter"}, {"name": "Inker"}]
        }"#;
        let resp: ComicDetailResponse = serde_json::from_str(raw).unwrap();
        let s = series_from_detail("comick", resp);
        assert_eq!(s.id, None);
        assert_eq!(s.extension_id, "comick");
        assert_eq!(s.source_id, "abc:123:hid1");
        assert_eq!(s.alt_titles, vec!["Alt One", "Alt Two"]);
        assert_eq!(s.tags, vec!["Seinen", "Action", "Drama"]);
        assert_eq!(s.authors, vec!["Writer"]);
        assert_eq!(s.artists, vec!["Painter", "Inker"]);
        assert_eq!(s.status, SeriesStatus::Completed);
        assert_eq!(s.original_language_key, LanguageKey::Korean);
        assert_eq!(s.number_unread, 0);
        assert_eq!(s.remote_cover_url, "https://meo.comick.pictures/cover.jpg");
    }

    #[test]
    fn chapters_default_missing_numbers_to_empty() {
        let raw = r#"{"chapters": [
            {"hid": "c1", "chap": "10", "vol": "2", "lang": "en", "group_name": ["Group A", "Group B"], "updated_at": "1970-01-01T00:00:02Z"},
            {"hid": "c2", "chap": null, "lang": null, "group_name": []}
        ]}"#;
        let resp: ChapterListResponse = serde_json::from_str(raw).unwrap();
        let chapters: Vec<Chapter> = resp.chapters.into_iter().map(chapter_from_entry).collect();

        assert_eq!(chapters[0].chapter_number, "10");
        assert_eq!(chapters[0].volume_number, "2");
        assert_eq!(chapters[0].group_name, "Group A");
        assert_eq!(chapters[0].language_key, LanguageKey::English);
        assert_eq!(chapters[0].time, 2_000);

        assert_eq!(chapters[1].chapter_number, "");
        assert_eq!(chapters[1].volume_number, "");
        assert_eq!(chapters[1].group_name, "");
        assert_eq!(chapters[1].language_key, LanguageKey::Multi);
        assert_eq!(chapters[1].time, 0);
        assert!(chapters.iter().all(|c| c.title.is_empty() && !c.read && c.series_id.is_none()));
    }
}
