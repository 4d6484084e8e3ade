//! 걸음 수 플래너
//!
//! 심은 새싹이 모두 피어날 때까지 필요한 걸음 수와 시간 추정.
//! 모든 슬롯이 동시에 진행된다고 가정하므로 가장 오래 걸리는 새싹이 전체 시간을 결정한다.

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const STEPS_PER_MINUTE_MIN: u32 = 50;
pub const STEPS_PER_MINUTE_MAX: u32 = 150;
pub const DEFAULT_STEPS_PER_MINUTE: u32 = 100;
/// 새싹 부스터 사용 시 필요 걸음 (%)
pub const BOOSTER_PERCENT: u32 = 70;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedlingType {
    pub id: &'static str,
    pub name: &'static str,
    pub steps: u32,
}

pub static SEEDLING_TYPES: [SeedlingType; 9] = [
    SeedlingType { id: "red", name: "紅色花苗 (1,000)", steps: 1000 },
    SeedlingType { id: "yellow", name: "黃色花苗 (1,000)", steps: 1000 },
    SeedlingType { id: "blue", name: "藍色花苗 (1,000)", steps: 1000 },
    SeedlingType { id: "purple", name: "紫色花苗 (3,000)", steps: 3000 },
    SeedlingType { id: "white", name: "白色花苗 (3,000)", steps: 3000 },
    SeedlingType { id: "winged", name: "羽翅花苗 (5,000)", steps: 5000 },
    SeedlingType { id: "rock", name: "岩石花苗 (5,000)", steps: 5000 },
    SeedlingType { id: "huge", name: "巨大花苗 (10,000)", steps: 10000 },
    SeedlingType { id: "gold", name: "金色花苗 (100)", steps: 100 },
];

pub fn find_seedling(id: &str) -> Option<&'static SeedlingType> {
    SEEDLING_TYPES.iter().find(|s| s.id == id)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepPlan {
    /// 새싹 ID -> 개수
    #[serde(default)]
    pub seedlings: BTreeMap<String, u32>,
    #[serde(default)]
    pub booster: bool,
    #[serde(default = "default_steps_per_minute")]
    pub steps_per_minute: u32,
}

fn default_steps_per_minute() -> u32 {
    DEFAULT_STEPS_PER_MINUTE
}

impl Default for StepPlan {
    fn default() -> Self {
        Self { seedlings: BTreeMap::new(), booster: false, steps_per_minute: DEFAULT_STEPS_PER_MINUTE }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepEstimate {
    pub effective_steps: u32,
    pub minutes: u32,
    pub total_seeds: u32,
}

impl StepPlan {
    /// 개수 증감 (0 아래로는 내려가지 않음)
    pub fn adjust(&mut self, id: &str, delta: i64) -> Result<u32> {
        if find_seedling(id).is_none() {
            return Err(CoreError::NotFound(format!("seedling '{}'", id)));
        }
        let current = self.seedlings.get(id).copied().unwrap_or(0) as i64;
        let next = (current + delta).clamp(0, u32::MAX as i64) as u32;
        self.seedlings.insert(id.to_string(), next);
        Ok(next)
    }

    pub fn estimate(&self) -> Result<StepEstimate> {
        CoreError::check_range(
            "steps_per_minute",
            self.steps_per_minute as i64,
            STEPS_PER_MINUTE_MIN as i64,
            STEPS_PER_MINUTE_MAX as i64,
        )?;

        let mut max_steps = 0u32;
        let mut total_seeds = 0u32;
        for (id, count) in self.seedlings.iter().filter(|(_, c)| **c > 0) {
            let seedling =
                find_seedling(id).ok_or_else(|| CoreError::NotFound(format!("seedling '{}'", id)))?;
            total_seeds = total_seeds.saturating_add(*count);
            max_steps = max_steps.max(seedling.steps);
        }

        let effective_steps =
            if self.booster { (max_steps * BOOSTER_PERCENT).div_ceil(100) } else { max_steps };
        let minutes = effective_steps.div_ceil(self.steps_per_minute);

        Ok(StepEstimate { effective_steps, minutes, total_seeds })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_longest_seedling_wins() {
        let mut plan = StepPlan::default();
        plan.adjust("red", 3).unwrap();
        plan.adjust("winged", 1).unwrap();

        let estimate = plan.estimate().unwrap();
        assert_eq!(estimate, StepEstimate { effective_steps: 5000, minutes: 50, total_seeds: 4 });
    }

    #[test]
    fn test_booster_and_rounding() {
        let mut plan = StepPlan { booster: true, steps_per_minute: 150, ..Default::default() };
        plan.adjust("purple", 1).unwrap();

        // 3000 × 0.7 = 2100, 2100 / 150 = 14
        let estimate = plan.estimate().unwrap();
        assert_eq!(estimate.effective_steps, 2100);
        assert_eq!(estimate.minutes, 14);

        plan.steps_per_minute = 55;
        // ceil(2100 / 55) = 39
        assert_eq!(plan.estimate().unwrap().minutes, 39);
    }

    #[test]
    fn test_empty_plan() {
        let estimate = StepPlan::default().estimate().unwrap();
        assert_eq!(estimate, StepEstimate { effective_steps: 0, minutes: 0, total_seeds: 0 });
    }

    #[test]
    fn test_adjust_saturates_and_validates() {
        let mut plan = StepPlan::default();
        assert_eq!(plan.adjust("gold", -2).unwrap(), 0);
        assert!(matches!(plan.adjust("diamond", 1), Err(CoreError::NotFound(_))));

        // 0개 새싹은 무시
        plan.adjust("huge", 1).unwrap();
        plan.adjust("huge", -1).unwrap();
        assert_eq!(plan.estimate().unwrap().effective_steps, 0);
    }

    #[test]
    fn test_steps_per_minute_range() {
        let plan = StepPlan { steps_per_minute: 10, ..Default::default() };
        assert!(matches!(plan.estimate(), Err(CoreError::InvalidParameter { .. })));
    }
}
