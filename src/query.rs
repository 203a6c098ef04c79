use extension_interface::{FilterValue, FilterValues, MultiToggleValues, TriState};
use url::form_urlencoded;

use crate::filters::control;

/// Page size requested from the search endpoint.
pub const SEARCH_LIMIT: usize = 8;

/// Comick serves the mobile-compatible payload when this flag is present.
pub const COMPAT_FLAG: (&str, &str) = ("tachiyomi", "true");

/// Query parameters for one search page, in request order.
///
/// Multi-toggle entries are emitted in key order so the url is stable.
/// Unknown control ids and values of the wrong shape are ignored.
pub fn search_params(text: &str, page: u32, filter_values: &FilterValues) -> Vec<(&'static str, String)> {
    let mut params = vec![
        (COMPAT_FLAG.0, COMPAT_FLAG.1.to_string()),
        ("limit", SEARCH_LIMIT.to_string()),
        ("page", page.to_string()),
    ];

    if !text.is_empty() {
        params.push(("q", text.to_string()));
    }

    if let Some(FilterValue::MultiToggle(genres)) = filter_values.get(control::GENRES) {
        for (genre, state) in sorted(genres) {
            match state {
                TriState::Include => params.push(("genres", genre.to_string())),
                TriState::Exclude => params.push(("excludes", genre.to_string())),
                TriState::Ignore => {}
            }
        }
    }
    if let Some(FilterValue::MultiToggle(demographics)) = filter_values.get(control::DEMOGRAPHIC) {
        push_included(&mut params, "demographic", demographics);
    }
    if let Some(FilterValue::MultiToggle(countries)) = filter_values.get(control::COUNTRY) {
        push_included(&mut params, "country", countries);
    }
    if let Some(FilterValue::Sort(sort)) = filter_values.get(control::SORT) {
        params.push(("sort", sort.key.clone()));
    }
    if let Some(FilterValue::Checkbox(true)) = filter_values.get(control::COMPLETED) {
        params.push(("completed", "1".to_string()));
    }

    params
}

fn sorted(values: &MultiToggleValues) -> Vec<(&str, TriState)> {
    let mut entries: Vec<(&str, TriState)> = values.iter().map(|(k, v)| (k.as_str(), *v)).collect();
    entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
    entries
}

fn push_included(params: &mut Vec<(&'static str, String)>, name: &'static str, values: &MultiToggleValues) {
    params.extend(
        sorted(values)
            .into_iter()
            .filter(|(_, state)| *state == TriState::Include)
            .map(|(key, _)| (name, key.to_string())),
    );
}

pub fn encode(params: &[(&str, String)]) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (name, value) in params {
        serializer.append_pair(name, value);
    }
    serializer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use extension_interface::{FilterSortValue, SortDirection};
    use std::collections::HashMap;

    fn toggles(entries: &[(&str, TriState)]) -> FilterValue {
        FilterValue::MultiToggle(entries.iter().map(|(k, v)| (k.to_string(), *v)).collect())
    }

    fn count(params: &[(&str, String)], name: &str) -> usize {
        params.iter().filter(|(n, _)| *n == name).count()
    }

    #[test]
    fn base_params_always_present() {
        let params = search_params("", 3, &HashMap::new());
        assert_eq!(
            params,
            vec![("tachiyomi", "true".to_string()), ("limit", "8".to_string()), ("page", "3".to_string())]
        );
    }

    #[test]
    fn text_only_when_non_empty() {
        let params = search_params("one piece", 1, &HashMap::new());
        assert!(params.contains(&("q", "one piece".to_string())));
        assert_eq!(encode(&params), "tachiyomi=true&limit=8&page=1&q=one+piece");
    }

    #[test]
    fn genres_are_tri_state() {
        let mut values = FilterValues::new();
        values.insert(
            "genres".into(),
            toggles(&[("action", TriState::Include), ("horror", TriState::Exclude), ("comedy", TriState::Ignore)]),
        );
        let params = search_params("", 1, &values);
        assert!(params.contains(&("genres", "action".to_string())));
        assert!(params.contains(&("excludes", "horror".to_string())));
        assert!(!params.iter().any(|(_, v)| v == "comedy"));
    }

    #[test]
    fn binary_toggles_encode_includes_only() {
        let mut values = FilterValues::new();
        values.insert("demographic".into(), toggles(&[("1", TriState::Include), ("2", TriState::Exclude)]));
        values.insert("country".into(), toggles(&[("kr", TriState::Include), ("jp", TriState::Include), ("cn", TriState::Ignore)]));
        let params = search_params("", 1, &values);
        assert_eq!(count(&params, "demographic"), 1);
        assert!(params.contains(&("demographic", "1".to_string())));
        let countries: Vec<&str> = params.iter().filter(|(n, _)| *n == "country").map(|(_, v)| v.as_str()).collect();
        assert_eq!(countries, vec!["jp", "kr"]);
        assert_eq!(count(&params, "excludes"), 0);
    }

    #[test]
    fn sort_encodes_key_without_direction() {
        let mut values = FilterValues::new();
        values.insert(
            "sort".into(),
            FilterValue::Sort(FilterSortValue { key: "view".into(), direction: SortDirection::Ascending }),
        );
        let params = search_params("", 1, &values);
        assert!(params.contains(&("sort", "view".to_string())));
        assert!(!params.iter().any(|(_, v)| v.contains("asc")));
    }

    #[test]
    fn completed_only_when_true() {
        let absent = search_params("", 1, &HashMap::new());
        assert_eq!(count(&absent, "completed"), 0);

        let mut off = FilterValues::new();
        off.insert("completed".into(), FilterValue::Checkbox(false));
        assert_eq!(count(&search_params("", 1, &off), "completed"), 0);

        let mut on = FilterValues::new();
        on.insert("completed".into(), FilterValue::Checkbox(true));
        let params = search_params("", 1, &on);
        assert_eq!(count(&params, "completed"), 1);
        assert!(params.contains(&("completed", "1".to_string())));
    }

    #[test]
    fn unknown_keys_and_mismatched_shapes_are_ignored() {
        let mut values = FilterValues::new();
        values.insert("mystery-control".into(), FilterValue::Checkbox(true));
        values.insert("genres".into(), FilterValue::Checkbox(true));
        values.insert("completed".into(), FilterValue::Text("yes".into()));
        assert_eq!(search_params("", 1, &values).len(), 3);
    }
}
