//! Comick catalog extension.
//!
//! [`ComickClient`] implements the host's [`ExtensionClient`] contract on top
//! of the Comick API: it builds request urls, fetches them through the host's
//! [`Webview`], unwraps the JSON payload and maps it onto the shared model.

pub mod api;
pub mod client;
pub mod config;
pub mod filters;
pub mod ids;
pub mod logging;
pub mod mapping;
pub mod payload;
pub mod query;
pub mod webview;

pub use client::{metadata, ComickClient, DEFAULT_API_URL, EXTENSION_ID};
pub use config::ComickConfig;
pub use ids::{ComickId, SourceIdError};
pub use payload::{extract_embedded_json, PayloadError};
pub use query::SEARCH_LIMIT;
pub use webview::ReqwestWebview;

pub use extension_interface::{ExtensionClient, Webview, WebviewResponse};

/// Convenience re-exports for embedders.
pub mod prelude {
    pub use crate::{ComickClient, ComickConfig, ReqwestWebview};
    pub use extension_interface::{
        Chapter, ExtensionClient, FilterOption, FilterSortValue, FilterValue, FilterValues, LanguageKey,
        PageRequesterData, Series, SeriesListResponse, SeriesStatus, SortDirection, TriState, Webview,
        WebviewResponse,
    };
}
