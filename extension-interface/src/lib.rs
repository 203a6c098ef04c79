//! Host contract shared by every catalog extension.
//!
//! The host loads extensions polymorphically through [`ExtensionClient`] and
//! hands each one a [`Webview`] to fetch remote pages with. Everything that
//! crosses that boundary is a plain serde record defined here.

pub mod extension;
pub mod filters;
pub mod language;
pub mod series;
pub mod settings;

pub use extension::{ExtensionClient, Webview, WebviewResponse};
pub use filters::{
    FilterCheckbox, FilterField, FilterMultiToggle, FilterOption, FilterSeparator, FilterSort,
    FilterSortValue, FilterValue, FilterValues, MultiToggleValues, SortDirection, TriState,
};
pub use language::{find_language_key, LanguageKey};
pub use series::{Chapter, ExtensionMetadata, PageRequesterData, Series, SeriesListResponse, SeriesStatus};
pub use settings::{SettingType, SettingTypes, Settings};

pub use async_trait::async_trait;
