// 계산기 입력값 (UI 슬라이더/토글)
use super::mushroom::MushroomColor;
use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};

pub const SQUAD_SIZE_MIN: u32 = 10;
pub const SQUAD_SIZE_MAX: u32 = 40;
pub const HEART_LEVEL_MAX: u32 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleModifiers {
    pub mushroom: MushroomColor,
    /// 파티 상한
    pub squad_size: u32,
    /// 평균 호감도 (하트)
    pub heart_level: u32,
    /// 머리 위 꽃 보너스
    pub use_flowers: bool,
}

impl Default for BattleModifiers {
    fn default() -> Self {
        Self { mushroom: MushroomColor::Red, squad_size: SQUAD_SIZE_MAX, heart_level: 4, use_flowers: true }
    }
}

impl BattleModifiers {
    /// 경계 검증 - 알고리즘 안에서는 하지 않는다
    pub fn validate(&self) -> Result<()> {
        CoreError::check_range(
            "squad_size",
            self.squad_size as i64,
            SQUAD_SIZE_MIN as i64,
            SQUAD_SIZE_MAX as i64,
        )?;
        CoreError::check_range("heart_level", self.heart_level as i64, 0, HEART_LEVEL_MAX as i64)?;
        Ok(())
    }
}
