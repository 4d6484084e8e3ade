// 수집 통계 (분포 차트, 데코 진행률)
use super::collection::Collection;
use super::decor::DECOR_CATEGORIES;
use super::species::short_name;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionEntry {
    pub id: String,
    pub name: String,
    pub count: u32,
    pub color: String,
    /// 전체 대비 비율 (소수점 1자리)
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecorCompletion {
    pub id: String,
    pub collected: usize,
    pub total: usize,
    pub is_complete: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionStats {
    pub total_count: u64,
    /// 보유 수 > 0 인 종류만
    pub distribution: Vec<DistributionEntry>,
    pub decors_collected: usize,
    pub decors_possible: usize,
    /// 반올림 정수 %
    pub decor_percentage: u32,
    pub completion: Vec<DecorCompletion>,
}

impl CollectionStats {
    pub fn compute(collection: &Collection) -> Self {
        let total_count = collection.total_count();

        let distribution = collection
            .items
            .iter()
            .filter(|i| i.count > 0)
            .map(|i| DistributionEntry {
                id: i.id.clone(),
                name: short_name(&i.name).to_string(),
                count: i.count,
                color: i.pikmin_type.hex_color().to_string(),
                percentage: round1(i.count as f64 / total_count as f64 * 100.0),
            })
            .collect();

        // 변형/이벤트 ID도 수집 개수에 포함 (데코 매트릭스 표시 기준)
        let decors_collected: usize = collection.items.iter().map(|i| i.collected_decors.len()).sum();
        let decors_possible = collection.items.len() * DECOR_CATEGORIES.len();
        let decor_percentage = if decors_possible > 0 {
            (decors_collected as f64 / decors_possible as f64 * 100.0).round() as u32
        } else {
            0
        };

        let completion = collection
            .items
            .iter()
            .map(|i| {
                let collected = i.standard_decor_count();
                DecorCompletion {
                    id: i.id.clone(),
                    collected,
                    total: DECOR_CATEGORIES.len(),
                    is_complete: collected == DECOR_CATEGORIES.len(),
                }
            })
            .collect();

        log::debug!(
            "collection stats: {} pikmin, {}/{} decors",
            total_count,
            decors_collected,
            decors_possible
        );

        Self {
            total_count,
            distribution,
            decors_collected,
            decors_possible,
            decor_percentage,
            completion,
        }
    }

    /// 보여줄 데이터가 하나도 없음
    pub fn is_empty(&self) -> bool {
        self.total_count == 0 && self.decors_collected == 0
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
