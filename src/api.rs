//! Response shapes of the Comick API, limited to the fields the extension maps.
//!
//! Optional fields tolerate both absence and an explicit `null`; only the
//! structural containers (`comic`, `chapters`, `chapter`, the search array)
//! are required.

use serde::{Deserialize, Deserializer};

fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// `GET /comic/{slug}`
#[derive(Debug, Deserialize)]
pub struct ComicDetailResponse {
    pub comic: ComicDetail,
    #[serde(default)]
    pub demographic: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub authors: Vec<Person>,
    #[serde(default, deserialize_with = "nullable")]
    pub artists: Vec<Person>,
}

#[derive(Debug, Deserialize)]
pub struct ComicDetail {
    pub id: i64,
    pub hid: String,
    pub slug: String,
    #[serde(default, deserialize_with = "nullable")]
    pub title: String,
    #[serde(default, deserialize_with = "nullable")]
    pub desc: String,
    #[serde(default)]
    pub status: Option<i64>,
    #[serde(default)]
    pub iso639_1: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub cover_url: String,
    #[serde(default, deserialize_with = "nullable")]
    pub md_titles: Vec<AltTitle>,
    #[serde(default, deserialize_with = "nullable")]
    pub md_comic_md_genres: Vec<GenreLink>,
}

#[derive(Debug, Deserialize)]
pub struct Person {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct AltTitle {
    pub title: String,
}

#[derive(Debug, Deserialize)]
pub struct GenreLink {
    #[serde(default)]
    pub md_genres: Option<Genre>,
}

#[derive(Debug, Deserialize)]
pub struct Genre {
    pub name: String,
}

/// `GET /comic/{hid}/chapters`
#[derive(Debug, Deserialize)]
pub struct ChapterListResponse {
    pub chapters: Vec<ChapterEntry>,
}

#[derive(Debug, Deserialize)]
pub struct ChapterEntry {
    pub hid: String,
    #[serde(default)]
    pub chap: Option<String>,
    #[serde(default)]
    pub vol: Option<String>,
    #[serde(default)]
    pub lang: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub group_name: Vec<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// `GET /chapter/{hid}`
#[derive(Debug, Deserialize)]
pub struct ChapterDetailResponse {
    pub chapter: ChapterImages,
}

#[derive(Debug, Deserialize)]
pub struct ChapterImages {
    #[serde(default, deserialize_with = "nullable")]
    pub images: Vec<Image>,
}

#[derive(Debug, Deserialize)]
pub struct Image {
    pub url: String,
}

/// One element of the `GET /v1.0/search` array.
#[derive(Debug, Deserialize)]
pub struct SearchHit {
    #[serde(default, deserialize_with = "nullable")]
    pub title: String,
    pub slug: String,
    #[serde(default, deserialize_with = "nullable")]
    pub cover_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_tolerates_null_optional_fields() {
        let raw = r#"{
            "comic": {
                "id": 7, "hid": "h7", "slug": "s", "title": "T",
                "desc": null, "status": null, "iso639_1": null, "cover_url": null,
                "md_titles": null, "md_comic_md_genres": [{"md_genres": null}]
            },
            "demographic": null,
            "authors": null
        }"#;
        let parsed: ComicDetailResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.comic.desc, "");
        assert!(parsed.comic.md_titles.is_empty());
        assert!(parsed.comic.md_comic_md_genres[0].md_genres.is_none());
        assert!(parsed.authors.is_empty());
        assert!(parsed.artists.is_empty());
    }

    #[test]
    fn chapter_list_requires_container() {
        assert!(serde_json::from_str::<ChapterListResponse>(r#"{"total": 0}"#).is_err());
        let ok: ChapterListResponse =
            serde_json::from_str(r#"{"chapters": [{"hid": "a", "group_name": null}]}"#).unwrap();
        assert_eq!(ok.chapters.len(), 1);
        assert!(ok.chapters[0].group_name.is_empty());
    }
}
