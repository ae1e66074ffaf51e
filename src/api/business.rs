use crate::config::ServiceConfig;
use crate::db::{parse_seed, EntityStore};
use crate::error::ServiceResult;
use crate::models::business::{Business, BusinessPatch, NewBusiness};
use crate::storage::KeyValueStorage;
use crate::utils::delay::Latency;
use leptos::logging::log;
use rand::Rng;
use std::rc::Rc;

const SEED: &str = include_str!("../../assets/mock_data/businesses.json");

pub fn seed_businesses() -> Vec<Business> {
    parse_seed("businesses", SEED)
}

/// Placeholder distance in `[0, radius)`, rounded down to one decimal.
/// Not derived from any coordinates.
pub fn simulated_distance<R: Rng + ?Sized>(rng: &mut R, radius: f64) -> f64 {
    if radius.is_nan() || radius <= 0.0 {
        return 0.0;
    }
    let raw = rng.gen_range(0.0..radius);
    (raw * 10.0).floor() / 10.0
}

#[derive(Clone)]
pub struct BusinessService {
    store: Rc<EntityStore<Business>>,
    latency: Latency,
}

impl BusinessService {
    pub fn new(storage: Rc<dyn KeyValueStorage>, config: &ServiceConfig) -> Self {
        Self::with_seed(storage, config, &seed_businesses())
    }

    pub fn with_seed(
        storage: Rc<dyn KeyValueStorage>,
        config: &ServiceConfig,
        seed: &[Business],
    ) -> Self {
        BusinessService {
            store: Rc::new(EntityStore::open(config.business_key.clone(), storage, seed)),
            latency: config.business_latency(),
        }
    }

    pub async fn get_all(&self) -> Vec<Business> {
        self.latency.wait().await;
        self.store.all()
    }

    pub async fn get_by_id(&self, id: u32) -> ServiceResult<Business> {
        self.latency.wait().await;
        self.store.get(id)
    }

    pub async fn create(&self, draft: NewBusiness) -> Business {
        self.latency.wait().await;
        self.store.insert(draft)
    }

    pub async fn update(&self, id: u32, patch: BusinessPatch) -> ServiceResult<Business> {
        self.latency.wait().await;
        self.store.update(id, patch)
    }

    pub async fn delete(&self, id: u32) -> ServiceResult<Business> {
        self.latency.wait().await;
        self.store.remove(id)
    }

    /// Every business, annotated with a random distance below `radius`.
    /// `lat`/`lng` are accepted for API shape only.
    pub async fn search_by_location(&self, lat: f64, lng: f64, radius: f64) -> Vec<Business> {
        self.latency.wait().await;
        log!("[BUSINESS] Location search at ({}, {}) within {}", lat, lng, radius);
        let mut rng = rand::thread_rng();
        self.store
            .all()
            .into_iter()
            .map(|mut business| {
                business.distance = Some(simulated_distance(&mut rng, radius));
                business
            })
            .collect()
    }

    /// Case-insensitive category match.
    pub async fn get_by_category(&self, category: &str) -> Vec<Business> {
        self.latency.wait().await;
        let category = category.to_lowercase();
        self.store
            .filter(|business| business.category.to_lowercase() == category)
    }
}
