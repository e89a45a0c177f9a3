use crate::errors::AppError;
use crate::models::AppData;
use async_trait::async_trait;
use std::{env, path::PathBuf};
use tokio::fs;
use tokio::sync::Mutex;
use tracing::error;

#[async_trait]
pub trait DataStore: Send + Sync {
    async fn load(&self) -> AppData;
    async fn save(&self, data: &AppData) -> Result<(), AppError>;
}

pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl DataStore for JsonFileStore {
    async fn load(&self) -> AppData {
        match fs::read(&self.path).await {
            Ok(bytes) => match serde_json::from_slice(&bytes) {
                Ok(data) => data,
                Err(err) => {
                    error!("failed to parse data file: {err}");
                    AppData::default()
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => AppData::default(),
            Err(err) => {
                error!("failed to read data file: {err}");
                AppData::default()
            }
        }
    }

    async fn save(&self, data: &AppData) -> Result<(), AppError> {
        let payload = serde_json::to_vec_pretty(data).map_err(AppError::internal)?;
        fs::write(&self.path, payload).await.map_err(AppError::internal)?;
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryStore {
    data: Mutex<AppData>,
}

#[async_trait]
impl DataStore for MemoryStore {
    async fn load(&self) -> AppData {
        self.data.lock().await.clone()
    }

    async fn save(&self, data: &AppData) -> Result<(), AppError> {
        *self.data.lock().await = data.clone();
        Ok(())
    }
}

pub fn resolve_data_path() -> Result<PathBuf, std::io::Error> {
    if let Ok(path) = env::var("APP_DATA_PATH") {
        return Ok(PathBuf::from(path));
    }

    Ok(PathBuf::from("data/state.json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Priority, Task, TaskCreate, STORAGE_VERSION};

    fn temp_path(tag: &str) -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let mut path = std::env::temp_dir();
        path.push(format!(
            "productivity_app_{tag}_{}_{nanos}.json",
            std::process::id()
        ));
        path
    }

    #[tokio::test]
    async fn json_store_round_trips_and_defaults_when_missing() {
        let path = temp_path("roundtrip");
        let store = JsonFileStore::new(path.clone());

        let loaded = store.load().await;
        assert!(loaded.tasks.is_empty());

        let mut data = AppData::default();
        let task = Task::create(TaskCreate {
            title: "Water the plants".to_string(),
            description: String::new(),
            deadline: None,
            priority: Priority::Low,
            completed: false,
        });
        data.tasks.insert(task.id.clone(), task.clone());
        store.save(&data).await.unwrap();

        let loaded = store.load().await;
        assert_eq!(loaded.version, data.version);
        assert_eq!(loaded.tasks.len(), 1);
        assert_eq!(loaded.tasks[&task.id].title, "Water the plants");

        let _ = fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn corrupt_file_loads_as_default() {
        let path = temp_path("corrupt");
        fs::write(&path, b"{ not json").await.unwrap();

        let store = JsonFileStore::new(path.clone());
        let loaded = store.load().await;
        assert!(loaded.tasks.is_empty());
        assert_eq!(loaded.version, STORAGE_VERSION);

        let _ = fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn memory_store_round_trips() {
        let store = MemoryStore::default();
        let mut data = AppData::default();
        data.version = "memory".to_string();
        store.save(&data).await.unwrap();
        assert_eq!(store.load().await.version, "memory");
    }
}
