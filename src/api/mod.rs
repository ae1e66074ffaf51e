pub mod business;
pub mod review;

pub use business::BusinessService;
pub use review::ReviewService;

use crate::config::ServiceConfig;
use crate::error::ServiceResult;
use crate::models::business::Business;
use crate::models::review::Review;
use crate::storage::{KeyValueStorage, MemoryStorage};
use std::rc::Rc;

/// The repositories, constructed once at startup and shared by reference.
#[derive(Clone)]
pub struct Services {
    pub businesses: BusinessService,
    pub reviews: ReviewService,
}

/// A business together with its reviews, newest first.
#[derive(Debug, Clone, PartialEq)]
pub struct BusinessDetail {
    pub business: Business,
    pub reviews: Vec<Review>,
}

impl Services {
    pub fn new(storage: Rc<dyn KeyValueStorage>, config: &ServiceConfig) -> Self {
        Services {
            businesses: BusinessService::new(storage.clone(), config),
            reviews: ReviewService::new(storage, config),
        }
    }

    pub fn in_memory(config: &ServiceConfig) -> Self {
        Self::new(Rc::new(MemoryStorage::new()), config)
    }

    /// Services over `window.localStorage`, or over memory if the browser
    /// refuses access to it.
    #[cfg(target_arch = "wasm32")]
    pub fn browser(config: &ServiceConfig) -> Self {
        match crate::storage::BrowserStorage::new() {
            Ok(storage) => Self::new(Rc::new(storage), config),
            Err(e) => {
                leptos::logging::warn!("[APP] {}; changes will not survive a reload", e);
                Self::in_memory(config)
            }
        }
    }

    /// Browser storage in wasm, memory elsewhere.
    pub fn local(config: &ServiceConfig) -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            Self::browser(config)
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            Self::in_memory(config)
        }
    }

    pub async fn load_business_detail(&self, id: u32) -> ServiceResult<BusinessDetail> {
        let (business, reviews) = futures::join!(
            self.businesses.get_by_id(id),
            self.reviews.get_by_business_id(id)
        );
        Ok(BusinessDetail {
            business: business?,
            reviews,
        })
    }
}
