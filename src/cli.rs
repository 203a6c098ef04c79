use std::path::PathBuf;

use clap::{Parser, Subcommand};
use comick_extension::filters::control;
use extension_interface::{FilterSortValue, FilterValue, FilterValues, MultiToggleValues, SortDirection, TriState};

/// Debugging CLI for the Comick extension
#[derive(Parser)]
#[command(name = "comick")]
#[command(about = "Run Comick extension operations and print the mapped JSON", long_about = None)]
pub struct Cli {
    /// Config file (defaults to the user config dir)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch series details
    Series {
        /// Series source id (`slug`, `slug:-1` or `slug:id:hid`)
        id: String,
        /// Also fetch the chapter list
        #[arg(long)]
        chapters: bool,
    },
    /// Fetch the chapter list of a series
    Chapters {
        id: String,
    },
    /// Fetch the page urls of a chapter
    Pages {
        series_id: String,
        chapter_id: String,
    },
    /// Search the catalog
    Search {
        /// Free text query
        text: Option<String>,
        #[command(flatten)]
        filters: FilterArgs,
    },
    /// Browse the catalog without a query
    Directory {
        #[command(flatten)]
        filters: FilterArgs,
    },
    /// Print the available search filters
    Filters,
}

#[derive(clap::Args, Debug, Default)]
pub struct FilterArgs {
    #[arg(long, default_value_t = 1)]
    pub page: u32,
    /// Genre to include (repeatable)
    #[arg(long = "genre", value_name = "GENRE")]
    pub genres: Vec<String>,
    /// Genre to exclude (repeatable)
    #[arg(long = "exclude", value_name = "GENRE")]
    pub excludes: Vec<String>,
    /// Demographic key, e.g. 1 for shounen (repeatable)
    #[arg(long = "demographic", value_name = "KEY")]
    pub demographics: Vec<String>,
    /// Country key: jp, kr, cn or others (repeatable)
    #[arg(long = "country", value_name = "KEY")]
    pub countries: Vec<String>,
    /// Sort key, e.g. follow, view, rating
    #[arg(long)]
    pub sort: Option<String>,
    /// Only completed series
    #[arg(long)]
    pub completed: bool,
}

impl FilterArgs {
    pub fn to_filter_values(&self) -> FilterValues {
        let mut values = FilterValues::new();

        let mut genres = MultiToggleValues::new();
        genres.extend(self.genres.iter().map(|g| (g.clone(), TriState::Include)));
        genres.extend(self.excludes.iter().map(|g| (g.clone(), TriState::Exclude)));
        if !genres.is_empty() {
            values.insert(control::GENRES.to_string(), FilterValue::MultiToggle(genres));
        }
        if !self.demographics.is_empty() {
            values.insert(control::DEMOGRAPHIC.to_string(), included(&self.demographics));
        }
        if !self.countries.is_empty() {
            values.insert(control::COUNTRY.to_string(), included(&self.countries));
        }
        if let Some(key) = &self.sort {
            values.insert(
                control::SORT.to_string(),
                FilterValue::Sort(FilterSortValue { key: key.clone(), direction: SortDirection::Descending }),
            );
        }
        values.insert(control::COMPLETED.to_string(), FilterValue::Checkbox(self.completed));
        values
    }
}

fn included(keys: &[String]) -> FilterValue {
    FilterValue::MultiToggle(keys.iter().map(|k| (k.clone(), TriState::Include)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_flags_become_filter_values() {
        let cli = Cli::parse_from([
            "comick", "search", "solo", "--genre", "action", "--exclude", "horror",
            "--country", "kr", "--sort", "view", "--completed", "--page", "2",
        ]);
        let Commands::Search { text, filters } = cli.command else { panic!("expected search") };
        assert_eq!(text.as_deref(), Some("solo"));
        assert_eq!(filters.page, 2);

        let values = filters.to_filter_values();
        let FilterValue::MultiToggle(genres) = &values["genres"] else { panic!("genres") };
        assert_eq!(genres["action"], TriState::Include);
        assert_eq!(genres["horror"], TriState::Exclude);
        assert_eq!(values["completed"], FilterValue::Checkbox(true));
        assert!(!values.contains_key("demographic"));
    }

    #[test]
    fn directory_defaults_to_first_page_without_filters() {
        let cli = Cli::parse_from(["comick", "directory"]);
        let Commands::Directory { filters } = cli.command else { panic!("expected directory") };
        assert_eq!(filters.page, 1);
        let values = filters.to_filter_values();
        assert_eq!(values.len(), 1);
        assert_eq!(values["completed"], FilterValue::Checkbox(false));
    }
}
