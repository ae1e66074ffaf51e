//! Form pre-checks. The services accept anything; callers validate first.
use crate::models::business::NewBusiness;
use crate::models::review::NewReview;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;

pub const MIN_COMMENT_LENGTH: usize = 10;
pub const MAX_COMMENT_LENGTH: usize = 500;

/// Field name -> message for every failed check.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Validation {
    pub errors: BTreeMap<&'static str, &'static str>,
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error(&self, field: &str) -> Option<&'static str> {
        self.errors.get(field).copied()
    }

    fn fail(&mut self, field: &'static str, message: &'static str) {
        self.errors.insert(field, message);
    }
}

pub fn is_required(value: &str) -> bool {
    !value.trim().is_empty()
}

pub fn is_email(email: &str) -> bool {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL
        .get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap())
        .is_match(email)
}

pub fn is_phone(phone: &str) -> bool {
    static PHONE: OnceLock<Regex> = OnceLock::new();
    PHONE
        .get_or_init(|| Regex::new(r"^\+?[\d\s\-()]{10,}$").unwrap())
        .is_match(phone)
}

pub fn is_url(value: &str) -> bool {
    url::Url::parse(value).is_ok()
}

pub fn min_length(value: &str, min: usize) -> bool {
    value.chars().count() >= min
}

pub fn max_length(value: &str, max: usize) -> bool {
    value.chars().count() <= max
}

pub fn is_rating(value: f64) -> bool {
    (0.0..=5.0).contains(&value)
}

pub fn validate_business(business: &NewBusiness) -> Validation {
    let mut validation = Validation::default();
    if !is_required(&business.name) {
        validation.fail("name", "Business name is required");
    }
    if !is_required(&business.category) {
        validation.fail("category", "Category is required");
    }
    if !is_required(&business.address) {
        validation.fail("address", "Address is required");
    }
    if !business.phone.is_empty() && !is_phone(&business.phone) {
        validation.fail("phone", "Please enter a valid phone number");
    }
    if let Some(website) = business.website.as_deref().filter(|w| !w.is_empty()) {
        if !is_url(website) {
            validation.fail("website", "Please enter a valid URL");
        }
    }
    if let Some(rating) = business.rating {
        if !is_rating(rating) {
            validation.fail("rating", "Rating must be between 0 and 5");
        }
    }
    validation
}

/// A rating of 0 means "not chosen yet".
pub fn validate_review(review: &NewReview) -> Validation {
    let mut validation = Validation::default();
    if !is_required(&review.user_name) {
        validation.fail("userName", "Name is required");
    }
    if review.rating == 0 {
        validation.fail("rating", "Rating is required");
    } else if !is_rating(review.rating as f64) {
        validation.fail("rating", "Rating must be between 1 and 5");
    }
    if !is_required(&review.comment) {
        validation.fail("comment", "Comment is required");
    } else if !min_length(&review.comment, MIN_COMMENT_LENGTH) {
        validation.fail("comment", "Comment must be at least 10 characters long");
    } else if !max_length(&review.comment, MAX_COMMENT_LENGTH) {
        validation.fail("comment", "Comment must be at most 500 characters long");
    }
    validation
}

pub fn validate_search_filters(radius: Option<f64>, min_rating: Option<f64>) -> Validation {
    let mut validation = Validation::default();
    if let Some(radius) = radius {
        if !(radius.is_finite() && radius > 0.0) {
            validation.fail("radius", "Radius must be a positive number");
        }
    }
    if let Some(min_rating) = min_rating {
        if !is_rating(min_rating) {
            validation.fail("minRating", "Minimum rating must be between 0 and 5");
        }
    }
    validation
}
