// 수집 현황 (종류별 보유 수, 데코, 태그)
use super::decor::{classify_decor, DecorKind, DECOR_CATEGORIES};
use super::species::{PikminType, SPECIES};
use crate::battle::{InventoryEntry, UnitType};
use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};

/// 종류 하나의 수집 상태
///
/// 직렬화 형식은 백업 JSON(camelCase)과 동일하다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionItem {
    pub id: String,
    #[serde(rename = "type", default)]
    pub pikmin_type: PikminType,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub is_favorite: bool,
    /// 표준 데코 ID, 변형 ID(`restaurant_shiny`), 이벤트 이름
    #[serde(default)]
    pub collected_decors: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl CollectionItem {
    pub fn has_decor(&self, decor_id: &str) -> bool {
        self.collected_decors.iter().any(|d| d == decor_id)
    }

    /// 수집한 표준 데코 수 (변형/이벤트 제외)
    pub fn standard_decor_count(&self) -> usize {
        self.collected_decors
            .iter()
            .filter(|d| classify_decor(d) == DecorKind::Standard)
            .count()
    }

    /// 아직 없는 표준 데코 수
    pub fn missing_standard_decors(&self) -> usize {
        DECOR_CATEGORIES.len().saturating_sub(self.standard_decor_count())
    }

    /// 보유 중인데 표준 데코가 덜 모인 상태
    pub fn is_incomplete(&self) -> bool {
        self.count > 0 && self.missing_standard_decors() > 0
    }

    pub fn to_unit_type(&self) -> UnitType {
        UnitType { id: self.id.clone(), category: self.pikmin_type, label: self.name.clone() }
    }
}

/// 전체 수집 목록 (카탈로그 순서)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Collection {
    pub items: Vec<CollectionItem>,
}

impl Collection {
    /// 모든 종류 0마리로 시작
    pub fn new() -> Self {
        let items = SPECIES
            .iter()
            .map(|s| CollectionItem {
                id: s.id.to_string(),
                pikmin_type: s.pikmin_type,
                name: s.name.to_string(),
                description: s.description.to_string(),
                count: 0,
                is_favorite: false,
                collected_decors: Vec::new(),
                tags: Vec::new(),
            })
            .collect();
        Self { items }
    }

    pub fn get(&self, id: &str) -> Option<&CollectionItem> {
        self.items.iter().find(|i| i.id == id)
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut CollectionItem> {
        self.items
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| CoreError::NotFound(format!("pikmin '{}'", id)))
    }

    /// 전체 보유 수
    pub fn total_count(&self) -> u64 {
        self.items.iter().map(|i| i.count as u64).sum()
    }

    pub fn increment(&mut self, id: &str) -> Result<u32> {
        let item = self.get_mut(id)?;
        item.count = item.count.saturating_add(1);
        Ok(item.count)
    }

    /// 0 아래로는 내려가지 않음
    pub fn decrement(&mut self, id: &str) -> Result<u32> {
        let item = self.get_mut(id)?;
        item.count = item.count.saturating_sub(1);
        Ok(item.count)
    }

    pub fn set_count(&mut self, id: &str, count: u32) -> Result<()> {
        self.get_mut(id)?.count = count;
        Ok(())
    }

    pub fn toggle_favorite(&mut self, id: &str) -> Result<bool> {
        let item = self.get_mut(id)?;
        item.is_favorite = !item.is_favorite;
        Ok(item.is_favorite)
    }

    /// 데코 목록 교체 (중복 제거, 순서 유지)
    pub fn set_decors(&mut self, id: &str, decors: Vec<String>) -> Result<()> {
        self.get_mut(id)?.collected_decors = dedup_preserving_order(decors);
        Ok(())
    }

    /// 태그 목록 교체 (공백 제거, 빈 태그/중복 무시)
    pub fn set_tags(&mut self, id: &str, tags: Vec<String>) -> Result<()> {
        let cleaned = tags.into_iter().map(|t| t.trim().to_string()).filter(|t| !t.is_empty()).collect();
        self.get_mut(id)?.tags = dedup_preserving_order(cleaned);
        Ok(())
    }

    /// 태그 추가, 실제로 추가됐으면 true
    pub fn add_tag(&mut self, id: &str, tag: &str) -> Result<bool> {
        let tag = tag.trim();
        let item = self.get_mut(id)?;
        if tag.is_empty() || item.tags.iter().any(|t| t == tag) {
            return Ok(false);
        }
        item.tags.push(tag.to_string());
        Ok(true)
    }

    pub fn remove_tag(&mut self, id: &str, tag: &str) -> Result<bool> {
        let item = self.get_mut(id)?;
        let before = item.tags.len();
        item.tags.retain(|t| t != tag);
        Ok(item.tags.len() != before)
    }

    /// 데코 토글
    ///
    /// 추가할 때 보유 수가 0이면 1로 올린다 (데코를 가진 피크민은 최소 1마리).
    /// 반환값: 토글 후 보유 여부
    pub fn toggle_decor(&mut self, id: &str, decor_id: &str) -> Result<bool> {
        let item = self.get_mut(id)?;
        if item.has_decor(decor_id) {
            item.collected_decors.retain(|d| d != decor_id);
            return Ok(false);
        }
        item.collected_decors.push(decor_id.to_string());
        if item.count == 0 {
            item.count = 1;
        }
        Ok(true)
    }

    /// 새로 잡은 데코 피크민: 보유 수 +1 과 데코 등록을 한 번에
    pub fn quick_add_decor(&mut self, id: &str, decor_id: &str) -> Result<u32> {
        let item = self.get_mut(id)?;
        item.count = item.count.saturating_add(1);
        if !item.has_decor(decor_id) {
            item.collected_decors.push(decor_id.to_string());
        }
        Ok(item.count)
    }

    /// 특정 데코를 모은 종류 ID 목록
    pub fn decor_holders(&self, decor_id: &str) -> Vec<&str> {
        self.items.iter().filter(|i| i.has_decor(decor_id)).map(|i| i.id.as_str()).collect()
    }

    /// 배틀 계산기 입력으로 변환 (순서 유지)
    pub fn to_inventory(&self) -> Vec<InventoryEntry> {
        self.items
            .iter()
            .map(|i| InventoryEntry { unit: i.to_unit_type(), quantity: i.count })
            .collect()
    }
}

impl Default for Collection {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn dedup_preserving_order(values: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    values.into_iter().filter(|v| seen.insert(v.clone())).collect()
}
