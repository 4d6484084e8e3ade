// 유닛 1마리당 점수
use super::config::BattleConfig;
use super::modifiers::BattleModifiers;
use super::mushroom::is_affinity_match;
use super::squad::UnitType;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitScore {
    pub score: u32,
    pub is_match: bool,
}

/// 현재 설정에서 1마리가 내는 추정 전투력
///
/// 기본 공격력 + 꽃 보너스 + 평균 하트 + 색 일치 보너스.
///
/// NOTE: 하트는 선형 가산으로 근사한다. 실제 게임은 (기본 × 호감도 배율) 형태의
/// 비선형 공식이지만 배율 값이 공개되지 않아 +1/하트로 단순화했다.
pub fn score_unit(unit: &UnitType, modifiers: &BattleModifiers, config: &BattleConfig) -> UnitScore {
    // 미검증 설정으로 직접 호출돼도 넘치지 않음
    let mut score = unit.base_power(config);

    if modifiers.use_flowers {
        score = score.saturating_add(config.flower_bonus);
    }

    score = score.saturating_add(modifiers.heart_level);

    let is_match = is_affinity_match(unit.category, modifiers.mushroom);
    if is_match {
        score = score.saturating_add(config.match_bonus);
    }

    UnitScore { score, is_match }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::MushroomColor;
    use crate::roster::PikminType;

    fn unit(category: PikminType) -> UnitType {
        UnitType { id: "u".into(), category, label: "u".into() }
    }

    #[test]
    fn test_plain_score() {
        let modifiers = BattleModifiers {
            mushroom: MushroomColor::Blue,
            squad_size: 20,
            heart_level: 0,
            use_flowers: false,
        };
        let s = score_unit(&unit(PikminType::Purple), &modifiers, &BattleConfig::default());
        assert_eq!(s, UnitScore { score: 6, is_match: false });
    }

    #[test]
    fn test_all_bonuses() {
        let modifiers = BattleModifiers {
            mushroom: MushroomColor::Gray,
            squad_size: 20,
            heart_level: 4,
            use_flowers: true,
        };
        // 5 + 3 + 4 + 10
        let s = score_unit(&unit(PikminType::Rock), &modifiers, &BattleConfig::default());
        assert_eq!(s, UnitScore { score: 22, is_match: true });
    }

    #[test]
    fn test_unknown_category_degrades() {
        let modifiers = BattleModifiers { heart_level: 0, use_flowers: false, ..Default::default() };
        let s = score_unit(&unit(PikminType::Unknown), &modifiers, &BattleConfig::default());
        assert_eq!(s.score, 4);
        assert!(!s.is_match);
    }

    #[test]
    fn test_unvalidated_config_saturates() {
        let mut config = BattleConfig::default();
        config.base_power.insert(PikminType::Red, u32::MAX);
        let modifiers = BattleModifiers {
            mushroom: MushroomColor::Red,
            squad_size: 40,
            heart_level: 8,
            use_flowers: true,
        };
        let s = score_unit(&unit(PikminType::Red), &modifiers, &config);
        assert_eq!(s, UnitScore { score: u32::MAX, is_match: true });
    }

    #[test]
    fn test_uses_unit_base_power() {
        let mut config = BattleConfig::default();
        config.base_power.insert(PikminType::White, 9);
        let u = unit(PikminType::White);
        let modifiers = BattleModifiers { heart_level: 0, use_flowers: false, ..Default::default() };
        assert_eq!(score_unit(&u, &modifiers, &config).score, u.base_power(&config));
        assert_eq!(u.base_power(&config), 9);
    }

    #[test]
    fn test_deterministic() {
        let modifiers = BattleModifiers::default();
        let config = BattleConfig::default();
        let u = unit(PikminType::Red);
        assert_eq!(score_unit(&u, &modifiers, &config), score_unit(&u, &modifiers, &config));
    }
}
