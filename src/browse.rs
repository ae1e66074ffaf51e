//! Filtering used by the discover, search and saved views.
use crate::models::business::Business;
use crate::query::engine::locale_compare;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// (label, category value). An empty value selects every category.
pub const CATEGORIES: [(&str, &str); 6] = [
    ("All", ""),
    ("Restaurants", "restaurant"),
    ("Cafés", "cafe"),
    ("Salons", "salon"),
    ("Shops", "shop"),
    ("Services", "service"),
];

pub const DEFAULT_RADIUS: u32 = 5;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOption {
    #[default]
    Distance,
    Rating,
    Reviews,
    Name,
}

impl SortOption {
    fn compare(&self, a: &Business, b: &Business) -> Ordering {
        match self {
            SortOption::Rating => {
                nan_last(a.rating, b.rating).then_with(|| b.rating.total_cmp(&a.rating))
            }
            SortOption::Reviews => b.review_count.cmp(&a.review_count),
            SortOption::Name => locale_compare(&a.name, &b.name),
            // Unannotated businesses go last
            SortOption::Distance => match (a.distance, b.distance) {
                (Some(a), Some(b)) => nan_last(a, b).then_with(|| a.total_cmp(&b)),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
        }
    }
}

fn nan_last(a: f64, b: f64) -> Ordering {
    a.is_nan().cmp(&b.is_nan())
}

/// Filter settings of the search view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchFilters {
    pub category: String,
    pub radius: u32,
    pub sort_by: SortOption,
}

impl Default for SearchFilters {
    fn default() -> Self {
        SearchFilters {
            category: String::new(),
            radius: DEFAULT_RADIUS,
            sort_by: SortOption::Distance,
        }
    }
}

impl SearchFilters {
    pub fn reset(&mut self) {
        *self = SearchFilters::default();
    }

    /// Whether anything narrows or reorders the default listing.
    pub fn is_active(&self, query: &str) -> bool {
        !query.is_empty() || !self.category.is_empty() || self.sort_by != SortOption::Distance
    }

    /// Query over name, category and address, then category, then sort.
    pub fn apply(&self, businesses: &[Business], query: &str) -> Vec<Business> {
        let needle = query.to_lowercase();
        let searching = !query.trim().is_empty();
        let mut result: Vec<Business> = businesses
            .iter()
            .filter(|b| {
                !searching
                    || b.name.to_lowercase().contains(&needle)
                    || b.category.to_lowercase().contains(&needle)
                    || b.address.to_lowercase().contains(&needle)
            })
            .filter(|b| self.category.is_empty() || b.category == self.category)
            .cloned()
            .collect();
        let sort_by = self.sort_by;
        result.sort_by(|a, b| sort_by.compare(a, b));
        result
    }
}

/// Category pill selection: empty shows everything, otherwise exact match.
pub fn filter_by_category(businesses: &[Business], category: &str) -> Vec<Business> {
    if category.is_empty() {
        return businesses.to_vec();
    }
    businesses
        .iter()
        .filter(|b| b.category == category)
        .cloned()
        .collect()
}

/// Businesses the user bookmarked during this session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SavedBusinesses {
    ids: BTreeSet<u32>,
}

impl SavedBusinesses {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the business is saved after the call.
    pub fn toggle(&mut self, id: u32) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    pub fn contains(&self, id: u32) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn select(&self, businesses: &[Business]) -> Vec<Business> {
        businesses
            .iter()
            .filter(|b| self.contains(b.id))
            .cloned()
            .collect()
    }
}

/// Stand-in for a persisted saved list: the first three businesses.
pub fn saved_preview(businesses: &[Business]) -> Vec<Business> {
    businesses.iter().take(3).cloned().collect()
}
