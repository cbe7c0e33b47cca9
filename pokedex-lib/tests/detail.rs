use std::sync::Mutex;

use pokedex_core::{CatalogPage, ItemDetail};
use pokedex_lib::{CatalogError, CatalogSource, REQUEST_FAILED_MESSAGE, load_detail};

#[derive(Default)]
struct RecordingSource {
    names: Mutex<Vec<String>>,
}

impl CatalogSource for RecordingSource {
    async fn fetch_page(&self, _limit: u32, _offset: u32) -> Result<CatalogPage, CatalogError> {
        Err(CatalogError::RequestFailed)
    }

    async fn fetch_detail(&self, name: &str) -> Result<ItemDetail, CatalogError> {
        self.names.lock().unwrap().push(name.to_string());
        if name != "pikachu" {
            return Err(CatalogError::RequestFailed);
        }
        Ok(ItemDetail {
            id: 25,
            name: name.to_string(),
            height: 4,
            weight: 60,
            stats: Vec::new(),
            types: vec!["electric".to_string()],
            sprite_url: None,
        })
    }
}

#[tokio::test]
async fn display_name_is_normalized_before_fetching() {
    let source = RecordingSource::default();

    let detail = load_detail(&source, "  Pikachu ").await.unwrap();
    assert_eq!(detail.id, 25);
    assert_eq!(*source.names.lock().unwrap(), vec!["pikachu"]);
}

#[tokio::test]
async fn failures_keep_the_opaque_message() {
    let source = RecordingSource::default();

    let err = load_detail(&source, "missingno").await.unwrap_err();
    assert_eq!(err.message(), REQUEST_FAILED_MESSAGE);
}
