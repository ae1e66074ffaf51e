#![cfg(target_arch = "wasm32")]

use spotlight::api::BusinessService;
use spotlight::config::ServiceConfig;
use spotlight::models::business::NewBusiness;
use spotlight::storage::{BrowserStorage, KeyValueStorage};
use std::rc::Rc;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

const KEY: &str = "spotlight_test_businesses";

fn config() -> ServiceConfig {
    ServiceConfig {
        business_key: KEY.to_string(),
        ..ServiceConfig::instant()
    }
}

#[wasm_bindgen_test]
fn test_local_storage_round_trip() {
    let storage = BrowserStorage::new().unwrap();
    storage.set_item(KEY, "[]").unwrap();
    assert_eq!(storage.get_item(KEY).unwrap().as_deref(), Some("[]"));
    storage.remove_item(KEY).unwrap();
    assert_eq!(storage.get_item(KEY).unwrap(), None);
}

#[wasm_bindgen_test]
async fn test_service_state_survives_reload() {
    let storage = Rc::new(BrowserStorage::new().unwrap());
    storage.remove_item(KEY).unwrap();

    let service = BusinessService::new(storage.clone(), &config());
    let created = service
        .create(NewBusiness {
            name: "Test Bakery".into(),
            category: "shop".into(),
            ..Default::default()
        })
        .await;

    let reloaded = BusinessService::new(Rc::new(BrowserStorage::new().unwrap()), &config());
    assert_eq!(reloaded.get_by_id(created.id).await.unwrap(), created);

    storage.remove_item(KEY).unwrap();
}
