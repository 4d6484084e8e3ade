// JSON 파일 저장소 (스냅샷 = 백업 형식과 동일한 배열)
use pk_core::store::{export_snapshot, merge_with_catalog, CollectionStore};
use pk_core::{Collection, CollectionItem, Result};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CollectionStore for JsonFileStore {
    /// 파일이 없으면 빈 수집 목록
    fn load(&self) -> Result<Collection> {
        if !self.path.exists() {
            log::debug!("No snapshot at {}, starting fresh", self.path.display());
            return Ok(Collection::new());
        }

        let content = fs::read_to_string(&self.path)?;
        let saved: Vec<CollectionItem> = serde_json::from_str(&content)?;
        Ok(merge_with_catalog(saved))
    }

    fn save(&mut self, collection: &Collection) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, export_snapshot(collection)?)?;
        log::debug!("Collection saved to {}", self.path.display());
        Ok(())
    }
}
