//! Search filters Comick understands, and the descriptors advertised to the host.

use std::collections::HashMap;

use extension_interface::{
    FilterCheckbox, FilterField, FilterMultiToggle, FilterOption, FilterSeparator, FilterSort,
    FilterSortValue, SortDirection,
};

/// Filter control ids. These double as the keys of the host's filter values.
pub mod control {
    pub const SORT: &str = "sort";
    pub const GENRES: &str = "genres";
    pub const DEMOGRAPHIC: &str = "demographic";
    pub const COUNTRY: &str = "country";
    pub const COMPLETED: &str = "completed";
}

pub const DEFAULT_SORT: &str = "follow";

pub const SORT_FIELDS: &[(&str, &str)] = &[
    ("follow", "Most follows"),
    ("view", "Most views"),
    ("rating", "High rating"),
    ("uploaded", "Last updated"),
    ("created_at", "Newest"),
];

pub const DEMOGRAPHIC_FIELDS: &[(&str, &str)] = &[
    ("1", "Shounen"),
    ("2", "Shoujo"),
    ("3", "Seinen"),
    ("4", "Josei"),
];

pub const COUNTRY_FIELDS: &[(&str, &str)] = &[
    ("jp", "Manga"),
    ("kr", "Manhwa"),
    ("cn", "Manhua"),
    ("others", "Others"),
];

pub const GENRE_FIELDS: &[(&str, &str)] = &[
    ("4-koma", "4-Koma"),
    ("action", "Action"),
    ("adaptation", "Adaptation"),
    ("adult", "Adult"),
    ("adventure", "Adventure"),
    ("aliens", "Aliens"),
    ("animals", "Animals"),
    ("anthology", "Anthology"),
    ("award-winning", "Award Winning"),
    ("comedy", "Comedy"),
    ("cooking", "Cooking"),
    ("crime", "Crime"),
    ("crossdressing", "Crossdressing"),
    ("delinquents", "Delinquents"),
    ("demons", "Demons"),
    ("doujinshi", "Doujinshi"),
    ("drama", "Drama"),
    ("ecchi", "Ecchi"),
    ("fan-colored", "Fan Colored"),
    ("fantasy", "Fantasy"),
    ("full-color", "Full Color"),
    ("gender-bender", "Gender Bender"),
    ("genderswap", "Genderswap"),
    ("ghosts", "Ghosts"),
    ("gore", "Gore"),
    ("gyaru", "Gyaru"),
    ("harem", "Harem"),
    ("historical", "Historical"),
    ("horror", "Horror"),
    ("isekai", "Isekai"),
    ("josei", "Josei"),
    ("long-strip", "Long Strip"),
    ("mafia", "Mafia"),
    ("magic", "Magic"),
    ("magical-girls", "Magical Girls"),
    ("martial-arts", "Martial Arts"),
    ("mature", "Mature"),
    ("mecha", "Mecha"),
    ("medical", "Medical"),
    ("military", "Military"),
    ("monster-girls", "Monster Girls"),
    ("monsters", "Monsters"),
    ("music", "Music"),
    ("mystery", "Mystery"),
    ("ninja", "Ninja"),
    ("office-workers", "Office Workers"),
    ("official-colored", "Official Colored"),
    ("oneshot", "Oneshot"),
    ("philosophical", "Philosophical"),
    ("police", "Police"),
    ("post-apocalyptic", "Post-Apocalyptic"),
    ("psychological", "Psychological"),
    ("reincarnation", "Reincarnation"),
    ("reverse-harem", "Reverse Harem"),
    ("romance", "Romance"),
    ("samurai", "Samurai"),
    ("school-life", "School Life"),
    ("sci-fi", "Sci-Fi"),
    ("seinen", "Seinen"),
    ("shoujo", "Shoujo"),
    ("shoujo-ai", "Shoujo Ai"),
    ("shounen", "Shounen"),
    ("shounen-ai", "Shounen Ai"),
    ("slice-of-life", "Slice of Life"),
    ("smut", "Smut"),
    ("sports", "Sports"),
    ("superhero", "Superhero"),
    ("supernatural", "Supernatural"),
    ("survival", "Survival"),
    ("thriller", "Thriller"),
    ("time-travel", "Time Travel"),
    ("traditional-games", "Traditional Games"),
    ("tragedy", "Tragedy"),
    ("user-created", "User Created"),
    ("vampires", "Vampires"),
    ("video-games", "Video Games"),
    ("villainess", "Villainess"),
    ("virtual-reality", "Virtual Reality"),
    ("web-comic", "Web Comic"),
    ("wuxia", "Wuxia"),
    ("yaoi", "Yaoi"),
    ("yuri", "Yuri"),
    ("zombies", "Zombies"),
];

fn fields(table: &[(&str, &str)]) -> Vec<FilterField> {
    table.iter().map(|(key, label)| FilterField::new(*key, *label)).collect()
}

fn separator(id: &str) -> FilterOption {
    FilterOption::Separator(FilterSeparator {
        id: id.to_string(),
        label: String::new(),
        default_value: String::new(),
    })
}

fn multi_toggle(id: &str, label: &str, table: &[(&str, &str)], is_tri_state: bool) -> FilterOption {
    FilterOption::MultiToggle(FilterMultiToggle {
        id: id.to_string(),
        label: label.to_string(),
        default_value: HashMap::new(),
        fields: fields(table),
        is_tri_state,
    })
}

/// The filter controls shown on the search screen, in display order.
pub fn filter_options() -> Vec<FilterOption> {
    vec![
        FilterOption::Sort(FilterSort {
            id: control::SORT.to_string(),
            label: "Sort".to_string(),
            default_value: FilterSortValue {
                key: DEFAULT_SORT.to_string(),
                direction: SortDirection::Descending,
            },
            fields: fields(SORT_FIELDS),
            supports_both_directions: false,
        }),
        separator("separator1"),
        multi_toggle(control::GENRES, "Genres", GENRE_FIELDS, true),
        multi_toggle(control::DEMOGRAPHIC, "Demographics", DEMOGRAPHIC_FIELDS, false),
        multi_toggle(control::COUNTRY, "Types", COUNTRY_FIELDS, false),
        separator("separator2"),
        FilterOption::Checkbox(FilterCheckbox {
            id: control::COMPLETED.to_string(),
            label: "Completed series only".to_string(),
            default_value: false,
        }),
    ]
}
