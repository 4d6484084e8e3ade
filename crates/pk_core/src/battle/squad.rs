//! 버섯 배틀 파티 편성 (탐욕 채우기)
//!
//! 1마리당 점수가 높은 종류부터 파티 슬롯을 채운다.

use super::config::BattleConfig;
use super::modifiers::BattleModifiers;
use super::score::{score_unit, UnitScore};
use crate::roster::PikminType;
use serde::{Deserialize, Serialize};

/// 유닛 종류 (불변 참조 데이터)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitType {
    pub id: String,
    pub category: PikminType,
    pub label: String,
}

impl UnitType {
    pub fn base_power(&self, config: &BattleConfig) -> u32 {
        config.base_power_for(self.category)
    }
}

/// 보유 현황 한 줄
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryEntry {
    pub unit: UnitType,
    pub quantity: u32,
}

/// 파티에 들어간 종류별 기여
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionRecord {
    pub unit: UnitType,
    pub count_used: u32,
    pub score_per_unit: u32,
    /// count_used × score_per_unit
    pub contribution: u64,
    pub matched_affinity: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SquadResult {
    pub total_power: u64,
    /// 채운 순서 (점수 내림차순)
    pub contributions: Vec<ContributionRecord>,
    pub unfilled_slots: u32,
}

impl SquadResult {
    pub fn empty(squad_size: u32) -> Self {
        Self { total_power: 0, contributions: Vec::new(), unfilled_slots: squad_size }
    }

    pub fn filled_slots(&self) -> u32 {
        self.contributions.iter().map(|c| c.count_used).sum()
    }

    pub fn squad_size(&self) -> u32 {
        self.filled_slots() + self.unfilled_slots
    }

    /// 총 전투력 대비 비율 (%)
    pub fn share(&self, record: &ContributionRecord) -> f64 {
        if self.total_power == 0 {
            return 0.0;
        }
        record.contribution as f64 / self.total_power as f64 * 100.0
    }
}

/// 설정값으로 점수를 매겨 파티 편성
pub fn optimize_squad(
    inventory: &[InventoryEntry],
    modifiers: &BattleModifiers,
    config: &BattleConfig,
) -> SquadResult {
    let result = fill_squad(inventory, modifiers.squad_size, |unit| score_unit(unit, modifiers, config));
    log::debug!(
        "squad vs {:?}: power {} with {}/{} slots",
        modifiers.mushroom,
        result.total_power,
        result.filled_slots(),
        modifiers.squad_size
    );
    result
}

/// 탐욕 채우기
///
/// - 보유 0 인 종류는 후보에서 제외 (0마리 기록 없음)
/// - 점수 내림차순 stable sort: 동점이면 입력 순서 유지
/// - 각 종류에서 min(남은 슬롯, 보유 수) 만큼 투입
pub fn fill_squad<F>(inventory: &[InventoryEntry], squad_size: u32, mut scorer: F) -> SquadResult
where
    F: FnMut(&UnitType) -> UnitScore,
{
    if squad_size == 0 {
        return SquadResult::empty(0);
    }

    let mut ranked: Vec<(&InventoryEntry, UnitScore)> = inventory
        .iter()
        .filter(|e| e.quantity > 0)
        .map(|e| (e, scorer(&e.unit)))
        .collect();
    ranked.sort_by_key(|(_, s)| std::cmp::Reverse(s.score));

    let mut remaining = squad_size;
    let mut total_power = 0u64;
    let mut contributions = Vec::new();

    for (entry, unit_score) in ranked {
        if remaining == 0 {
            break;
        }
        let take = remaining.min(entry.quantity);
        if take == 0 {
            continue;
        }
        let contribution = take as u64 * unit_score.score as u64;
        total_power += contribution;
        remaining -= take;

        contributions.push(ContributionRecord {
            unit: entry.unit.clone(),
            count_used: take,
            score_per_unit: unit_score.score,
            contribution,
            matched_affinity: unit_score.is_match,
        });
    }

    SquadResult { total_power, contributions, unfilled_slots: remaining }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::MushroomColor;
    use proptest::prelude::*;

    fn entry(id: &str, category: PikminType, quantity: u32) -> InventoryEntry {
        InventoryEntry {
            unit: UnitType { id: id.to_string(), category, label: id.to_uppercase() },
            quantity,
        }
    }

    fn plain(mushroom: MushroomColor, squad_size: u32) -> BattleModifiers {
        BattleModifiers { mushroom, squad_size, heart_level: 0, use_flowers: false }
    }

    #[test]
    fn test_matched_type_fills_first() {
        let inventory = vec![entry("a", PikminType::Red, 10), entry("b", PikminType::Blue, 5)];
        let result =
            optimize_squad(&inventory, &plain(MushroomColor::Red, 12), &BattleConfig::default());

        assert_eq!(result.total_power, 148);
        assert_eq!(result.unfilled_slots, 0);
        assert_eq!(result.contributions.len(), 2);

        let a = &result.contributions[0];
        assert_eq!((a.unit.id.as_str(), a.count_used, a.contribution, a.matched_affinity), ("a", 10, 140, true));
        let b = &result.contributions[1];
        assert_eq!((b.unit.id.as_str(), b.count_used, b.contribution, b.matched_affinity), ("b", 2, 8, false));
    }

    #[test]
    fn test_empty_inventory() {
        let result = optimize_squad(&[], &plain(MushroomColor::Red, 20), &BattleConfig::default());
        assert_eq!(result, SquadResult::empty(20));
    }

    #[test]
    fn test_zero_quantities_are_skipped() {
        let inventory = vec![entry("a", PikminType::Red, 0), entry("b", PikminType::Blue, 0)];
        let result =
            optimize_squad(&inventory, &plain(MushroomColor::Red, 15), &BattleConfig::default());
        assert!(result.contributions.is_empty());
        assert_eq!(result.unfilled_slots, 15);
    }

    #[test]
    fn test_short_inventory_leaves_slots() {
        let inventory = vec![entry("a", PikminType::Yellow, 3)];
        let result =
            optimize_squad(&inventory, &plain(MushroomColor::Blue, 10), &BattleConfig::default());
        assert_eq!(result.contributions[0].count_used, 3);
        assert_eq!(result.unfilled_slots, 7);
        assert_eq!(result.squad_size(), 10);
    }

    #[test]
    fn test_zero_squad_size() {
        let inventory = vec![entry("a", PikminType::Red, 3)];
        let result = fill_squad(&inventory, 0, |_| UnitScore { score: 5, is_match: false });
        assert!(result.contributions.is_empty());
        assert_eq!(result.unfilled_slots, 0);
        assert_eq!(result.total_power, 0);
    }

    #[test]
    fn test_ties_keep_input_order() {
        // red/blue/yellow 모두 4점
        let inventory = vec![
            entry("yellow", PikminType::Yellow, 2),
            entry("red", PikminType::Red, 2),
            entry("blue", PikminType::Blue, 2),
        ];
        let result =
            optimize_squad(&inventory, &plain(MushroomColor::Purple, 5), &BattleConfig::default());
        let ids: Vec<_> = result.contributions.iter().map(|c| c.unit.id.as_str()).collect();
        assert_eq!(ids, vec!["yellow", "red", "blue"]);
        assert_eq!(result.contributions[2].count_used, 1);
    }

    #[test]
    fn test_purple_beats_unmatched_red() {
        let inventory = vec![entry("red", PikminType::Red, 20), entry("purple", PikminType::Purple, 20)];
        let result =
            optimize_squad(&inventory, &plain(MushroomColor::White, 20), &BattleConfig::default());
        assert_eq!(result.contributions.len(), 1);
        assert_eq!(result.contributions[0].unit.id, "purple");
        assert_eq!(result.total_power, 120);
    }

    #[test]
    fn test_share() {
        let inventory = vec![entry("a", PikminType::Red, 10), entry("b", PikminType::Blue, 5)];
        let result =
            optimize_squad(&inventory, &plain(MushroomColor::Red, 12), &BattleConfig::default());
        let share = result.share(&result.contributions[0]);
        assert!((share - 140.0 / 148.0 * 100.0).abs() < 1e-9);
        assert_eq!(SquadResult::empty(10).total_power, 0);
    }

    fn category_strategy() -> impl Strategy<Value = PikminType> {
        prop::sample::select(PikminType::ALL.to_vec())
    }

    fn mushroom_strategy() -> impl Strategy<Value = MushroomColor> {
        prop::sample::select(MushroomColor::ALL.to_vec())
    }

    fn inventory_strategy() -> impl Strategy<Value = Vec<InventoryEntry>> {
        prop::collection::vec((category_strategy(), 0u32..30), 0..12).prop_map(|rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (category, quantity))| entry(&format!("unit-{}", i), category, quantity))
                .collect()
        })
    }

    fn modifiers_strategy() -> impl Strategy<Value = BattleModifiers> {
        (mushroom_strategy(), 0u32..=60, 0u32..=8, any::<bool>()).prop_map(
            |(mushroom, squad_size, heart_level, use_flowers)| BattleModifiers {
                mushroom,
                squad_size,
                heart_level,
                use_flowers,
            },
        )
    }

    proptest! {
        #[test]
        fn prop_slots_add_up(inventory in inventory_strategy(), modifiers in modifiers_strategy()) {
            let result = optimize_squad(&inventory, &modifiers, &BattleConfig::default());
            prop_assert_eq!(result.filled_slots() + result.unfilled_slots, modifiers.squad_size);
            prop_assert!(result.unfilled_slots <= modifiers.squad_size);
        }

        #[test]
        fn prop_counts_within_quantity(inventory in inventory_strategy(), modifiers in modifiers_strategy()) {
            let result = optimize_squad(&inventory, &modifiers, &BattleConfig::default());
            for record in &result.contributions {
                let owned = inventory.iter().find(|e| e.unit.id == record.unit.id).unwrap().quantity;
                prop_assert!(record.count_used >= 1);
                prop_assert!(record.count_used <= owned);
                prop_assert_eq!(record.contribution, record.count_used as u64 * record.score_per_unit as u64);
            }
            let total: u64 = result.contributions.iter().map(|c| c.contribution).sum();
            prop_assert_eq!(total, result.total_power);
        }

        #[test]
        fn prop_descending_with_stable_ties(inventory in inventory_strategy(), modifiers in modifiers_strategy()) {
            let result = optimize_squad(&inventory, &modifiers, &BattleConfig::default());
            let position = |id: &str| inventory.iter().position(|e| e.unit.id == id).unwrap();
            for pair in result.contributions.windows(2) {
                prop_assert!(pair[0].score_per_unit >= pair[1].score_per_unit);
                if pair[0].score_per_unit == pair[1].score_per_unit {
                    prop_assert!(position(&pair[0].unit.id) < position(&pair[1].unit.id));
                }
            }
        }

        #[test]
        fn prop_unfilled_iff_short(inventory in inventory_strategy(), modifiers in modifiers_strategy()) {
            let result = optimize_squad(&inventory, &modifiers, &BattleConfig::default());
            let owned: u64 = inventory.iter().map(|e| e.quantity as u64).sum();
            prop_assert_eq!(result.unfilled_slots > 0, owned < modifiers.squad_size as u64);
        }

        #[test]
        fn prop_idempotent(inventory in inventory_strategy(), modifiers in modifiers_strategy()) {
            let config = BattleConfig::default();
            prop_assert_eq!(
                optimize_squad(&inventory, &modifiers, &config),
                optimize_squad(&inventory, &modifiers, &config)
            );
        }
    }
}
