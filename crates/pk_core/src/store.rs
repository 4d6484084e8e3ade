//! 수집 데이터 저장소와 백업 스냅샷
//!
//! 저장 위치(브라우저 저장소, 파일 등)는 `CollectionStore` 구현체가 결정한다.
//! 스냅샷 형식은 수집 항목 JSON 배열 (백업 파일과 동일).

use crate::error::{CoreError, Result};
use crate::roster::collection::dedup_preserving_order;
use crate::roster::{Collection, CollectionItem, SPECIES};
use chrono::NaiveDate;

pub const STORAGE_KEY: &str = "pikmin-collection-v1";

pub trait CollectionStore {
    fn load(&self) -> Result<Collection>;
    fn save(&mut self, collection: &Collection) -> Result<()>;
}

/// 불러오기 실패 시 빈 수집 목록으로 시작
pub fn load_or_default<S: CollectionStore + ?Sized>(store: &S) -> Collection {
    match store.load() {
        Ok(collection) => collection,
        Err(e) => {
            log::warn!("Failed to load collection, starting fresh: {}", e);
            Collection::new()
        }
    }
}

/// 메모리 저장소 (키 하나에 JSON 문자열)
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    data: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_raw(json: impl Into<String>) -> Self {
        Self { data: Some(json.into()) }
    }

    pub fn raw(&self) -> Option<&str> {
        self.data.as_deref()
    }
}

impl CollectionStore for MemoryStore {
    fn load(&self) -> Result<Collection> {
        match &self.data {
            Some(json) => import_snapshot(json),
            None => Ok(Collection::new()),
        }
    }

    fn save(&mut self, collection: &Collection) -> Result<()> {
        self.data = Some(serde_json::to_string(collection)?);
        log::debug!("Collection saved to memory store ({})", STORAGE_KEY);
        Ok(())
    }
}

/// 백업 JSON (pretty)
pub fn export_snapshot(collection: &Collection) -> Result<String> {
    Ok(serde_json::to_string_pretty(collection)?)
}

/// 백업 JSON 가져오기
///
/// 비어 있지 않은 배열이고 첫 항목에 `id`가 있어야 한다.
/// 가져온 항목은 카탈로그와 병합된다.
pub fn import_snapshot(json: &str) -> Result<Collection> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    let looks_valid = value
        .as_array()
        .and_then(|items| items.first())
        .and_then(|first| first.get("id"))
        .is_some();
    if !looks_valid {
        return Err(CoreError::InvalidSnapshot(
            "expected a non-empty array of collection items".to_string(),
        ));
    }

    let saved: Vec<CollectionItem> = serde_json::from_value(value)?;
    let collection = merge_with_catalog(saved);
    log::info!("Imported snapshot: {} pikmin total", collection.total_count());
    Ok(collection)
}

/// 저장된 항목을 카탈로그 기준으로 병합
///
/// - 카탈로그 순서, 카탈로그 이름/설명/종류 사용
/// - 카탈로그에 없는 ID는 버린다
/// - 저장본에 없는 종류는 0마리로 추가
pub fn merge_with_catalog(saved: Vec<CollectionItem>) -> Collection {
    for item in saved.iter().filter(|i| !SPECIES.iter().any(|s| s.id == i.id)) {
        log::warn!("Dropping unknown pikmin id from snapshot: {}", item.id);
    }

    let mut collection = Collection::new();
    for item in collection.items.iter_mut() {
        if let Some(found) = saved.iter().find(|s| s.id == item.id) {
            item.count = found.count;
            item.is_favorite = found.is_favorite;
            item.collected_decors = dedup_preserving_order(found.collected_decors.clone());
            item.tags = found.tags.clone();
        }
    }
    collection
}

/// `pikmin-keeper-backup-YYYY-MM-DD.json`
pub fn backup_file_name(date: NaiveDate) -> String {
    format!("pikmin-keeper-backup-{}.json", date.format("%Y-%m-%d"))
}
