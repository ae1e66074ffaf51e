use super::field::{FieldValue, Queryable};
use serde::Deserialize;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// A required value for one field path.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Unset,
    Text(String),
    Number(f64),
    Bool(bool),
    /// The field must equal one of these.
    AnyOf(Vec<FilterValue>),
}

impl FilterValue {
    /// Unset and empty-text filters are ignored.
    pub fn is_unset(&self) -> bool {
        match self {
            FilterValue::Unset => true,
            FilterValue::Text(text) => text.is_empty(),
            _ => false,
        }
    }

    pub fn matches(&self, value: &FieldValue<'_>) -> bool {
        match (self, value) {
            (FilterValue::AnyOf(options), value) => options
                .iter()
                .any(|option| !matches!(option, FilterValue::AnyOf(_)) && option.matches(value)),
            (FilterValue::Text(expected), FieldValue::Text(actual)) => expected == actual,
            (FilterValue::Number(expected), FieldValue::Number(actual)) => expected == actual,
            (FilterValue::Bool(expected), FieldValue::Bool(actual)) => expected == actual,
            _ => false,
        }
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        FilterValue::Text(value.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        FilterValue::Text(value)
    }
}

impl From<f64> for FilterValue {
    fn from(value: f64) -> Self {
        FilterValue::Number(value)
    }
}

impl From<u32> for FilterValue {
    fn from(value: u32) -> Self {
        FilterValue::Number(value as f64)
    }
}

impl From<bool> for FilterValue {
    fn from(value: bool) -> Self {
        FilterValue::Bool(value)
    }
}

impl<T: Into<FilterValue>> From<Vec<T>> for FilterValue {
    fn from(values: Vec<T>) -> Self {
        FilterValue::AnyOf(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<FilterValue>> From<Option<T>> for FilterValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(FilterValue::Unset, Into::into)
    }
}

/// Field path -> required value. All entries must hold.
pub type Filters = BTreeMap<String, FilterValue>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchOptions {
    pub case_sensitive: bool,
    pub exact_match: bool,
    pub min_query_length: usize,
}

/// The user-controlled inputs of a search.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchState {
    pub query: String,
    pub filters: Filters,
    pub sort_by: Option<String>,
}

impl SearchState {
    /// A filter key counts once set, whatever its value.
    pub fn has_active_filters(&self) -> bool {
        !self.query.trim().is_empty() || !self.filters.is_empty() || self.sort_by.is_some()
    }
}

/// Search, filter, then sort over an in-memory collection.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchEngine {
    fields: Vec<String>,
    options: SearchOptions,
}

impl SearchEngine {
    pub fn new<I, S>(fields: I, options: SearchOptions) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        SearchEngine {
            fields: fields.into_iter().map(Into::into).collect(),
            options,
        }
    }

    pub fn apply<T: Queryable + Clone>(&self, data: &[T], state: &SearchState) -> Vec<T> {
        let needle = self.needle(&state.query);
        let mut result: Vec<T> = data
            .iter()
            .filter(|item| match needle.as_deref() {
                Some(needle) => self.matches_query(*item, needle),
                None => true,
            })
            .filter(|item| passes_filters(*item, &state.filters))
            .cloned()
            .collect();
        if let Some(key) = state.sort_by.as_deref().filter(|key| !key.is_empty()) {
            result = sort_by_field(result, key);
        }
        result
    }

    // None when the query does not constrain the results.
    fn needle(&self, query: &str) -> Option<String> {
        let trimmed = query.trim();
        if trimmed.is_empty() || query.chars().count() < self.options.min_query_length {
            return None;
        }
        Some(if self.options.case_sensitive {
            trimmed.to_string()
        } else {
            trimmed.to_lowercase()
        })
    }

    fn matches_query<T: Queryable>(&self, item: &T, needle: &str) -> bool {
        self.fields.iter().any(|path| {
            let Some(text) = item.field(path).to_search_string() else {
                return false;
            };
            let text = if self.options.case_sensitive {
                text
            } else {
                text.to_lowercase()
            };
            if self.options.exact_match {
                text == needle
            } else {
                text.contains(needle)
            }
        })
    }
}

pub fn passes_filters<T: Queryable>(item: &T, filters: &Filters) -> bool {
    filters
        .iter()
        .filter(|(_, value)| !value.is_unset())
        .all(|(path, value)| value.matches(&item.field(path)))
}

/// Numbers descend, text ascends; anything else compares equal.
pub fn compare_fields(a: &FieldValue<'_>, b: &FieldValue<'_>) -> Ordering {
    match (a, b) {
        (FieldValue::Number(a), FieldValue::Number(b)) => b.partial_cmp(a).unwrap_or(Ordering::Equal),
        (FieldValue::Text(a), FieldValue::Text(b)) => locale_compare(a, b),
        _ => Ordering::Equal,
    }
}

/// Case-insensitive ordering first; among case variants lowercase sorts first.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| {
        for (x, y) in a.chars().zip(b.chars()) {
            if x == y {
                continue;
            }
            return match (x.is_lowercase(), y.is_lowercase()) {
                (true, false) => Ordering::Less,
                (false, true) => Ordering::Greater,
                _ => x.cmp(&y),
            };
        }
        a.len().cmp(&b.len())
    })
}

/// Stable sort on one field path.
pub fn sort_by_field<T: Queryable>(items: Vec<T>, key: &str) -> Vec<T> {
    merge_sort(items, &|a: &T, b: &T| compare_fields(&a.field(key), &b.field(key)))
}

// compare_fields is not a total order over mixed types, which std's sort may
// reject with a panic. Merge sort tolerates it.
fn merge_sort<T, F>(mut items: Vec<T>, cmp: &F) -> Vec<T>
where
    F: Fn(&T, &T) -> Ordering,
{
    if items.len() <= 1 {
        return items;
    }
    let right = items.split_off(items.len() / 2);
    let mut left = merge_sort(items, cmp).into_iter().peekable();
    let mut right = merge_sort(right, cmp).into_iter().peekable();

    let mut merged = Vec::with_capacity(left.len() + right.len());
    while let (Some(l), Some(r)) = (left.peek(), right.peek()) {
        let next = if cmp(r, l) == Ordering::Less {
            right.next()
        } else {
            left.next()
        };
        merged.extend(next);
    }
    merged.extend(left);
    merged.extend(right);
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn names(items: &[Value]) -> Vec<&str> {
        items.iter().map(|i| i["name"].as_str().unwrap_or("")).collect()
    }

    fn state(query: &str) -> SearchState {
        SearchState {
            query: query.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let data = vec![json!({"name": "Joe's Cafe"}), json!({"name": "Gym"})];
        let engine = SearchEngine::new(["name", "category"], SearchOptions::default());
        let result = engine.apply(&data, &state("cafe"));
        assert_eq!(names(&result), vec!["Joe's Cafe"]);
    }

    #[test]
    fn test_search_matches_any_field() {
        let data = vec![
            json!({"name": "Joe's", "category": "cafe"}),
            json!({"name": "Gym", "category": "service"}),
        ];
        let engine = SearchEngine::new(["name", "category"], SearchOptions::default());
        assert_eq!(names(&engine.apply(&data, &state("CAFE"))), vec!["Joe's"]);
    }

    #[test]
    fn test_blank_or_short_query_passes_everything() {
        let data = vec![json!({"name": "Alpha"}), json!({"name": "Beta"})];
        let engine = SearchEngine::new(
            ["name"],
            SearchOptions {
                min_query_length: 3,
                ..Default::default()
            },
        );
        assert_eq!(engine.apply(&data, &state("   ")).len(), 2);
        assert_eq!(engine.apply(&data, &state("zz")).len(), 2);
        assert_eq!(engine.apply(&data, &state("zzz")).len(), 0);
        // Surrounding whitespace counts toward the minimum length
        assert_eq!(names(&engine.apply(&data, &state(" al "))), vec!["Alpha"]);
    }

    #[test]
    fn test_case_sensitive_and_exact_modes() {
        let data = vec![json!({"name": "Cafe"}), json!({"name": "Cafe Nero"})];
        let sensitive = SearchEngine::new(
            ["name"],
            SearchOptions {
                case_sensitive: true,
                ..Default::default()
            },
        );
        assert!(sensitive.apply(&data, &state("cafe")).is_empty());
        assert_eq!(sensitive.apply(&data, &state("Cafe")).len(), 2);

        let exact = SearchEngine::new(
            ["name"],
            SearchOptions {
                exact_match: true,
                ..Default::default()
            },
        );
        assert_eq!(names(&exact.apply(&data, &state("cafe"))), vec!["Cafe"]);
    }

    #[test]
    fn test_missing_fields_never_match() {
        let data = vec![json!({"name": null}), json!({"other": "null"}), json!({"name": "null"})];
        let engine = SearchEngine::new(["name"], SearchOptions::default());
        assert_eq!(engine.apply(&data, &state("null")).len(), 1);
    }

    #[test]
    fn test_filter_then_sort_by_rating() {
        let data = vec![
            json!({"name": "a", "category": "restaurant", "rating": 3.2}),
            json!({"name": "b", "category": "restaurant", "rating": 4.8}),
            json!({"name": "c", "category": "cafe", "rating": 5.0}),
            json!({"name": "d", "category": "restaurant", "rating": 4.1}),
        ];
        let engine = SearchEngine::new(["name"], SearchOptions::default());
        let mut filters = Filters::new();
        filters.insert("category".into(), "restaurant".into());
        let state = SearchState {
            filters,
            sort_by: Some("rating".into()),
            ..Default::default()
        };
        let ratings: Vec<f64> = engine
            .apply(&data, &state)
            .iter()
            .filter_map(|i| i["rating"].as_f64())
            .collect();
        assert_eq!(ratings, vec![4.8, 4.1, 3.2]);
    }

    #[test]
    fn test_filters_ignore_empty_and_support_sets() {
        let data = vec![
            json!({"name": "a", "category": "cafe", "open": true}),
            json!({"name": "b", "category": "shop", "open": false}),
            json!({"name": "c", "category": "salon", "open": true}),
        ];
        let engine = SearchEngine::new(["name"], SearchOptions::default());

        let mut filters = Filters::new();
        filters.insert("category".into(), "".into());
        filters.insert("missing".into(), FilterValue::Unset);
        let result = engine.apply(&data, &SearchState { filters, ..Default::default() });
        assert_eq!(result.len(), 3);

        let mut filters = Filters::new();
        filters.insert("category".into(), vec!["cafe", "shop"].into());
        filters.insert("open".into(), true.into());
        let result = engine.apply(&data, &SearchState { filters, ..Default::default() });
        assert_eq!(names(&result), vec!["a"]);
    }

    #[test]
    fn test_filter_equality_is_type_strict() {
        let data = vec![json!({"name": "a", "businessId": 3}), json!({"name": "b", "businessId": "3"})];
        let engine = SearchEngine::new(["name"], SearchOptions::default());
        let mut filters = Filters::new();
        filters.insert("businessId".into(), 3u32.into());
        let result = engine.apply(&data, &SearchState { filters, ..Default::default() });
        assert_eq!(names(&result), vec!["a"]);
    }

    #[test]
    fn test_text_sort_ascends_and_mixed_types_keep_order() {
        let data = vec![json!({"name": "beta"}), json!({"name": "Alpha"}), json!({"name": "alpha"})];
        let sorted = sort_by_field(data, "name");
        assert_eq!(names(&sorted), vec!["alpha", "Alpha", "beta"]);

        let mixed = vec![
            json!({"name": "x", "v": "b"}),
            json!({"name": "y", "v": 2}),
            json!({"name": "z"}),
            json!({"name": "w", "v": 1}),
        ];
        let sorted = sort_by_field(mixed, "v");
        assert_eq!(sorted.len(), 4);
        // numbers still descend relative to each other
        let numbers: Vec<i64> = sorted.iter().filter_map(|i| i["v"].as_i64()).collect();
        assert_eq!(numbers, vec![2, 1]);
    }

    #[test]
    fn test_sort_is_stable_for_ties() {
        let data = vec![
            json!({"name": "first", "rating": 4}),
            json!({"name": "second", "rating": 5}),
            json!({"name": "third", "rating": 4}),
        ];
        assert_eq!(names(&sort_by_field(data, "rating")), vec!["second", "first", "third"]);
    }

    #[test]
    fn test_active_filters_flag() {
        assert!(!SearchState::default().has_active_filters());
        assert!(!state("  ").has_active_filters());
        assert!(state("a").has_active_filters());
        let mut filters = Filters::new();
        filters.insert("category".into(), "".into());
        assert!(SearchState { filters, ..Default::default() }.has_active_filters());
        assert!(SearchState {
            sort_by: Some("name".into()),
            ..Default::default()
        }
        .has_active_filters());
    }

    #[test]
    fn test_options_deserialize_camel_case() {
        let options: SearchOptions =
            serde_json::from_str(r#"{"caseSensitive": true, "minQueryLength": 2}"#).unwrap();
        assert!(options.case_sensitive);
        assert!(!options.exact_match);
        assert_eq!(options.min_query_length, 2);
    }
}
