// src/models/business.rs
use super::{Entity, EntityKind};
use serde::{Deserialize, Deserializer, Serialize};

/// Opening hours for one weekday. `open`/`close` are "HH:MM" or "Closed".
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DayHours {
    pub day: String,   // Weekday name, e.g. "Monday"
    pub open: String,
    pub close: String,
}

impl DayHours {
    pub fn is_closed(&self) -> bool {
        self.open == CLOSED || self.close == CLOSED
    }
}

pub const CLOSED: &str = "Closed";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Business {
    #[serde(rename = "Id")]
    pub id: u32,
    pub name: String,
    pub category: String,     // Free-text tag, e.g. "restaurant"
    pub address: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    pub rating: f64,          // 0.0 - 5.0
    pub review_count: u32,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub hours: Vec<DayHours>,
    // Simulated, only set by location searches
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
}

/// Payload for creating a business. Unset optional fields take the defaults
/// `rating = 0`, `review_count = 0`, `images = []`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewBusiness {
    pub name: String,
    pub category: String,
    pub address: String,
    pub phone: String,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub review_count: Option<u32>,
    #[serde(default)]
    pub images: Option<Vec<String>>,
    #[serde(default)]
    pub hours: Vec<DayHours>,
}

/// Fields to overwrite. For `website` and `distance`, `Some(None)` (JSON
/// `null`) clears the field while an absent key leaves it alone.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BusinessPatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    #[serde(
        default,
        deserialize_with = "nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub website: Option<Option<String>>,
    pub rating: Option<f64>,
    pub review_count: Option<u32>,
    pub images: Option<Vec<String>>,
    pub hours: Option<Vec<DayHours>>,
    #[serde(
        default,
        deserialize_with = "nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub distance: Option<Option<f64>>,
}

// Present keys, including `null`, become `Some`; missing keys hit `default`.
fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl Entity for Business {
    const KIND: EntityKind = EntityKind::Business;

    type Draft = NewBusiness;
    type Patch = BusinessPatch;

    fn id(&self) -> u32 {
        self.id
    }

    fn from_draft(id: u32, draft: NewBusiness) -> Self {
        Business {
            id,
            name: draft.name,
            category: draft.category,
            address: draft.address,
            phone: draft.phone,
            website: draft.website,
            rating: draft.rating.unwrap_or(0.0),
            review_count: draft.review_count.unwrap_or(0),
            images: draft.images.unwrap_or_default(),
            hours: draft.hours,
            distance: None,
        }
    }

    fn apply_patch(&mut self, patch: BusinessPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(address) = patch.address {
            self.address = address;
        }
        if let Some(phone) = patch.phone {
            self.phone = phone;
        }
        if let Some(website) = patch.website {
            self.website = website;
        }
        if let Some(rating) = patch.rating {
            self.rating = rating;
        }
        if let Some(review_count) = patch.review_count {
            self.review_count = review_count;
        }
        if let Some(images) = patch.images {
            self.images = images;
        }
        if let Some(hours) = patch.hours {
            self.hours = hours;
        }
        if let Some(distance) = patch.distance {
            self.distance = distance;
        }
    }
}
