use crate::models::AppData;
use crate::storage::DataStore;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn DataStore>,
    pub data: Arc<Mutex<AppData>>,
}

impl AppState {
    pub fn new(store: Arc<dyn DataStore>, data: AppData) -> Self {
        Self {
            store,
            data: Arc::new(Mutex::new(data)),
        }
    }
}
