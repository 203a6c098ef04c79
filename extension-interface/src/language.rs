use serde::{Deserialize, Serialize};

macro_rules! language_keys {
    ($($variant:ident => $code:literal),+ $(,)?) => {
        /// Language of a series or chapter, keyed by ISO 639-1 code.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum LanguageKey {
            $(#[serde(rename = $code)] $variant,)+
        }

        const LANGUAGE_CODES: &[(&str, LanguageKey)] = &[$(($code, LanguageKey::$variant)),+];
    };
}

language_keys! {
    Multi => "multi",
    Arabic => "ar",
    Bengali => "bn",
    Bulgarian => "bg",
    Burmese => "my",
    Catalan => "ca",
    Chinese => "zh",
    Croatian => "hr",
    Czech => "cs",
    Danish => "da",
    Dutch => "nl",
    English => "en",
    Filipino => "tl",
    Finnish => "fi",
    French => "fr",
    German => "de",
    Greek => "el",
    Hebrew => "he",
    Hindi => "hi",
    Hungarian => "hu",
    Indonesian => "id",
    Italian => "it",
    Japanese => "ja",
    Kazakh => "kk",
    Korean => "ko",
    Latin => "la",
    Lithuanian => "lt",
    Malay => "ms",
    Mongolian => "mn",
    Nepali => "ne",
    Norwegian => "no",
    Persian => "fa",
    Polish => "pl",
    Portuguese => "pt",
    Romanian => "ro",
    Russian => "ru",
    Serbian => "sr",
    Slovak => "sk",
    Spanish => "es",
    Swedish => "sv",
    Tamil => "ta",
    Thai => "th",
    Turkish => "tr",
    Ukrainian => "uk",
    Vietnamese => "vi",
}

impl LanguageKey {
    pub fn code(self) -> &'static str {
        LANGUAGE_CODES
            .iter()
            .find(|(_, key)| *key == self)
            .map(|(code, _)| *code)
            .unwrap_or("multi")
    }
}

/// Resolve a language code such as `en`, `EN` or `pt-br` to a key.
///
/// Region suffixes are ignored. Returns `None` for empty or unknown codes so
/// callers choose their own fallback.
pub fn find_language_key(code: &str) -> Option<LanguageKey> {
    let base = code
        .trim()
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();
    if base.is_empty() {
        return None;
    }
    LANGUAGE_CODES
        .iter()
        .find(|(c, _)| *c == base)
        .map(|(_, key)| *key)
}
