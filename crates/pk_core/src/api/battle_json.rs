// Mushroom battle JSON API layer
// UI 설정값 + 보유 현황 → 파티 편성 결과

use crate::battle::{optimize_squad, BattleConfig, BattleModifiers, InventoryEntry, MushroomColor, UnitType};
use crate::error::{CoreError, Result};
use crate::roster::PikminType;
use crate::SCHEMA_VERSION;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

// ========== Request/Response Structures ==========

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryRow {
    pub id: String,
    pub category: PikminType,
    pub name: String,
    pub quantity: u32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SquadRequest {
    #[serde(default = "default_schema_version")]
    pub schema_version: u8,
    pub mushroom: MushroomColor,
    pub squad_size: u32,
    pub heart_level: u32,
    pub use_flowers: bool,
    #[serde(default)]
    pub inventory: Vec<InventoryRow>,
    /// 점수 상수 덮어쓰기 (없으면 기본값)
    #[serde(default)]
    pub config: Option<BattleConfig>,
}

fn default_schema_version() -> u8 {
    SCHEMA_VERSION
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SquadMember {
    pub unit_type_id: String,
    pub display_name: String,
    pub count_used: u32,
    pub score_per_unit: u32,
    pub contribution: u64,
    pub matched_affinity: bool,
    /// 총 전투력 대비 %
    pub percentage: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SquadResponse {
    pub success: bool,
    pub total_power: u64,
    pub squad: Vec<SquadMember>,
    pub filled_slots: u32,
    pub remaining_slots: u32,
    pub error: Option<String>,
}

impl SquadResponse {
    fn failure(message: String) -> Self {
        Self {
            success: false,
            total_power: 0,
            squad: vec![],
            filled_slots: 0,
            remaining_slots: 0,
            error: Some(message),
        }
    }
}

// ========== Public API Functions ==========

/// 파티 편성 계산 (JSON in / JSON out)
pub fn calculate_squad_json(request_json: &str) -> String {
    let response = match serde_json::from_str::<SquadRequest>(request_json) {
        Ok(request) => match calculate_squad(&request) {
            Ok(response) => response,
            Err(e) => {
                warn!("squad request rejected: {}", e);
                SquadResponse::failure(e.to_string())
            }
        },
        Err(e) => SquadResponse::failure(format!("Invalid request format: {}", e)),
    };

    serde_json::to_string(&response)
        .unwrap_or_else(|_| r#"{"success":false,"error":"Serialization failed"}"#.to_string())
}

/// 요청 검증 후 계산
pub fn calculate_squad(request: &SquadRequest) -> Result<SquadResponse> {
    if request.schema_version != SCHEMA_VERSION {
        return Err(CoreError::UnsupportedVersion {
            found: request.schema_version,
            expected: SCHEMA_VERSION,
        });
    }

    let modifiers = BattleModifiers {
        mushroom: request.mushroom,
        squad_size: request.squad_size,
        heart_level: request.heart_level,
        use_flowers: request.use_flowers,
    };
    modifiers.validate()?;

    let config = request.config.clone().unwrap_or_default();
    config.validate()?;

    let inventory: Vec<InventoryEntry> = request
        .inventory
        .iter()
        .map(|row| InventoryEntry {
            unit: UnitType { id: row.id.clone(), category: row.category, label: row.name.clone() },
            quantity: row.quantity,
        })
        .collect();

    let result = optimize_squad(&inventory, &modifiers, &config);
    debug!(
        total_power = result.total_power,
        remaining = result.unfilled_slots,
        "squad calculated for {} inventory rows",
        inventory.len()
    );

    let squad = result
        .contributions
        .iter()
        .map(|c| SquadMember {
            unit_type_id: c.unit.id.clone(),
            display_name: c.unit.label.clone(),
            count_used: c.count_used,
            score_per_unit: c.score_per_unit,
            contribution: c.contribution,
            matched_affinity: c.matched_affinity,
            percentage: result.share(c),
        })
        .collect();

    Ok(SquadResponse {
        success: true,
        total_power: result.total_power,
        squad,
        filled_slots: result.filled_slots(),
        remaining_slots: result.unfilled_slots,
        error: None,
    })
}
