use crate::config::ServiceConfig;
use crate::db::{parse_seed, EntityStore};
use crate::error::ServiceResult;
use crate::models::review::{NewReview, Review, ReviewPatch};
use crate::storage::KeyValueStorage;
use crate::utils::delay::Latency;
use std::rc::Rc;

const SEED: &str = include_str!("../../assets/mock_data/reviews.json");

pub fn seed_reviews() -> Vec<Review> {
    parse_seed("reviews", SEED)
}

#[derive(Clone)]
pub struct ReviewService {
    store: Rc<EntityStore<Review>>,
    latency: Latency,
}

impl ReviewService {
    pub fn new(storage: Rc<dyn KeyValueStorage>, config: &ServiceConfig) -> Self {
        Self::with_seed(storage, config, &seed_reviews())
    }

    pub fn with_seed(
        storage: Rc<dyn KeyValueStorage>,
        config: &ServiceConfig,
        seed: &[Review],
    ) -> Self {
        ReviewService {
            store: Rc::new(EntityStore::open(config.review_key.clone(), storage, seed)),
            latency: config.review_latency(),
        }
    }

    pub async fn get_all(&self) -> Vec<Review> {
        self.latency.wait().await;
        self.store.all()
    }

    pub async fn get_by_id(&self, id: u32) -> ServiceResult<Review> {
        self.latency.wait().await;
        self.store.get(id)
    }

    /// Reviews for `business_id`, most recent first.
    pub async fn get_by_business_id(&self, business_id: u32) -> Vec<Review> {
        self.latency.wait().await;
        let mut reviews = self
            .store
            .filter(|review| review.business_id == business_id);
        reviews.sort_by(|a, b| b.date.cmp(&a.date));
        reviews
    }

    pub async fn create(&self, draft: NewReview) -> Review {
        self.latency.wait().await;
        self.store.insert(draft)
    }

    pub async fn update(&self, id: u32, patch: ReviewPatch) -> ServiceResult<Review> {
        self.latency.wait().await;
        self.store.update(id, patch)
    }

    pub async fn delete(&self, id: u32) -> ServiceResult<Review> {
        self.latency.wait().await;
        self.store.remove(id)
    }
}
