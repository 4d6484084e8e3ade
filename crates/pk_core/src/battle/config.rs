// 배틀 점수 상수 (JSON으로 덮어쓰기 가능)
use crate::error::{CoreError, Result};
use crate::roster::PikminType;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const DEFAULT_FLOWER_BONUS: u32 = 3;
pub const DEFAULT_MATCH_BONUS: u32 = 10;
/// 표에 없는 종류의 기본 공격력
pub const DEFAULT_BASE_POWER: u32 = 4;

const MAX_BONUS: u32 = 100;
/// 기본 공격력 상한
pub const MAX_BASE_POWER: u32 = 1000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BattleConfig {
    /// 머리 위 꽃 보너스 (단순화: 약 +3)
    pub flower_bonus: u32,
    /// 색 일치 보너스
    pub match_bonus: u32,
    pub default_base_power: u32,
    pub base_power: BTreeMap<PikminType, u32>,
}

impl Default for BattleConfig {
    fn default() -> Self {
        let base_power = PikminType::ALL
            .iter()
            .filter_map(|t| t.base_attack_power().map(|p| (*t, p)))
            .collect();
        Self {
            flower_bonus: DEFAULT_FLOWER_BONUS,
            match_bonus: DEFAULT_MATCH_BONUS,
            default_base_power: DEFAULT_BASE_POWER,
            base_power,
        }
    }
}

impl BattleConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.flower_bonus > MAX_BONUS {
            return Err(CoreError::InvalidConfig(format!(
                "flower_bonus {} exceeds {}",
                self.flower_bonus, MAX_BONUS
            )));
        }
        if self.match_bonus > MAX_BONUS {
            return Err(CoreError::InvalidConfig(format!(
                "match_bonus {} exceeds {}",
                self.match_bonus, MAX_BONUS
            )));
        }
        if !(1..=MAX_BASE_POWER).contains(&self.default_base_power) {
            return Err(CoreError::InvalidConfig(format!(
                "default_base_power {} outside 1..={}",
                self.default_base_power, MAX_BASE_POWER
            )));
        }
        if let Some((ty, p)) = self.base_power.iter().find(|(_, p)| !(1..=MAX_BASE_POWER).contains(*p)) {
            return Err(CoreError::InvalidConfig(format!(
                "base power for {} is {} (expected 1..={})",
                ty.label(),
                p,
                MAX_BASE_POWER
            )));
        }
        Ok(())
    }

    /// 종류별 기본 공격력, 표에 없으면 기본값
    pub fn base_power_for(&self, pikmin_type: PikminType) -> u32 {
        self.base_power.get(&pikmin_type).copied().unwrap_or(self.default_base_power)
    }
}
