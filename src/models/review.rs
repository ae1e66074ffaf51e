// src/models/review.rs
use super::{Entity, EntityKind};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    #[serde(rename = "Id")]
    pub id: u32,
    pub business_id: u32,    // ID of the business the review is about, not checked
    pub user_name: String,
    pub rating: u8,          // 1 - 5
    pub comment: String,
    pub date: NaiveDate,     // Serialized as "YYYY-MM-DD"
}

/// Payload for creating a review. `date` defaults to today.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewReview {
    pub business_id: u32,
    pub user_name: String,
    pub rating: u8,
    pub comment: String,
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReviewPatch {
    pub business_id: Option<u32>,
    pub user_name: Option<String>,
    pub rating: Option<u8>,
    pub comment: Option<String>,
    pub date: Option<NaiveDate>,
}

/// Current calendar date in UTC.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

impl Entity for Review {
    const KIND: EntityKind = EntityKind::Review;

    type Draft = NewReview;
    type Patch = ReviewPatch;

    fn id(&self) -> u32 {
        self.id
    }

    fn from_draft(id: u32, draft: NewReview) -> Self {
        Review {
            id,
            business_id: draft.business_id,
            user_name: draft.user_name,
            rating: draft.rating,
            comment: draft.comment,
            date: draft.date.unwrap_or_else(today),
        }
    }

    fn apply_patch(&mut self, patch: ReviewPatch) {
        if let Some(business_id) = patch.business_id {
            self.business_id = business_id;
        }
        if let Some(user_name) = patch.user_name {
            self.user_name = user_name;
        }
        if let Some(rating) = patch.rating {
            self.rating = rating;
        }
        if let Some(comment) = patch.comment {
            self.comment = comment;
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
    }
}
