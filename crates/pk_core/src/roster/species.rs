// 피크민 종류 데이터
use serde::{Deserialize, Serialize};

/// 피크민 색상/종류
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum PikminType {
    Red,
    Blue,
    Yellow,
    Purple,
    White,
    Rock,
    Winged,
    Ice,
    /// 아직 모르는 신규 종류 (스냅샷 호환용)
    #[serde(other)]
    #[default]
    Unknown,
}

impl PikminType {
    pub const ALL: [PikminType; 8] = [
        PikminType::Red,
        PikminType::Blue,
        PikminType::Yellow,
        PikminType::Purple,
        PikminType::White,
        PikminType::Rock,
        PikminType::Winged,
        PikminType::Ice,
    ];

    /// 기본 공격력 (위키 기준 단순화 값)
    ///
    /// 모르는 종류는 `None` → 호출 측에서 기본값 사용
    pub fn base_attack_power(&self) -> Option<u32> {
        match self {
            PikminType::Red => Some(4),
            PikminType::Blue => Some(4),
            PikminType::Yellow => Some(4),
            PikminType::White => Some(3),
            PikminType::Winged => Some(3),
            PikminType::Purple => Some(6),
            PikminType::Rock => Some(5),
            PikminType::Ice => Some(4),
            PikminType::Unknown => None,
        }
    }

    /// 통계 차트용 색상
    pub fn hex_color(&self) -> &'static str {
        match self {
            PikminType::Red => "#ef4444",
            PikminType::Blue => "#3b82f6",
            PikminType::Yellow => "#facc15",
            PikminType::Purple => "#9333ea",
            PikminType::White => "#9ca3af",
            PikminType::Rock => "#57534e",
            PikminType::Winged => "#f472b6",
            PikminType::Ice => "#22d3ee",
            PikminType::Unknown => "#6b7280",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PikminType::Red => "RED",
            PikminType::Blue => "BLUE",
            PikminType::Yellow => "YELLOW",
            PikminType::Purple => "PURPLE",
            PikminType::White => "WHITE",
            PikminType::Rock => "ROCK",
            PikminType::Winged => "WINGED",
            PikminType::Ice => "ICE",
            PikminType::Unknown => "UNKNOWN",
        }
    }
}

/// 정적 종류 데이터
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpeciesData {
    pub id: &'static str,
    pub pikmin_type: PikminType,
    pub name: &'static str,
    pub description: &'static str,
}

impl SpeciesData {
    /// 이름의 앞부분 (중국어 표기)만 반환 - 차트 라벨용
    pub fn short_name(&self) -> &'static str {
        short_name(self.name)
    }
}

pub(crate) fn short_name(name: &str) -> &str {
    name.split(' ').next().unwrap_or(name)
}

pub static SPECIES: [SpeciesData; 8] = [
    SpeciesData {
        id: "pikmin-red",
        pikmin_type: PikminType::Red,
        name: "紅色皮克敏 (Red Pikmin)",
        description: "耐火，攻擊力強。有尖尖的鼻子。",
    },
    SpeciesData {
        id: "pikmin-blue",
        pikmin_type: PikminType::Blue,
        name: "藍色皮克敏 (Blue Pikmin)",
        description: "能在水中行動，不會溺水。有嘴巴。",
    },
    SpeciesData {
        id: "pikmin-yellow",
        pikmin_type: PikminType::Yellow,
        name: "黃色皮克敏 (Yellow Pikmin)",
        description: "耐電，被拋出時飛得比較高。有大耳朵。",
    },
    SpeciesData {
        id: "pikmin-purple",
        pikmin_type: PikminType::Purple,
        name: "紫色皮克敏 (Purple Pikmin)",
        description: "力氣是其他的10倍，但動作緩慢。有鬍鬚。",
    },
    SpeciesData {
        id: "pikmin-white",
        pikmin_type: PikminType::White,
        name: "白色皮克敏 (White Pikmin)",
        description: "速度快，身體有毒，可以看到地下的東西。",
    },
    SpeciesData {
        id: "pikmin-rock",
        pikmin_type: PikminType::Rock,
        name: "岩石皮克敏 (Rock Pikmin)",
        description: "身體堅硬，可以破壞水晶和玻璃。",
    },
    SpeciesData {
        id: "pikmin-winged",
        pikmin_type: PikminType::Winged,
        name: "羽翅皮克敏 (Winged Pikmin)",
        description: "可以在空中飛行，搬運空中的物體。",
    },
    SpeciesData {
        id: "pikmin-ice",
        pikmin_type: PikminType::Ice,
        name: "冰凍皮克敏 (Ice Pikmin)",
        description: "可以凍結敵人和水面。",
    },
];

/// ID로 종류 찾기
pub fn find_species(id: &str) -> Option<&'static SpeciesData> {
    SPECIES.iter().find(|s| s.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_matches_type_list() {
        assert_eq!(SPECIES.len(), PikminType::ALL.len());
        for (species, ty) in SPECIES.iter().zip(PikminType::ALL.iter()) {
            assert_eq!(species.pikmin_type, *ty);
            assert!(species.pikmin_type.base_attack_power().is_some());
        }
    }

    #[test]
    fn test_base_attack_power_table() {
        assert_eq!(PikminType::Purple.base_attack_power(), Some(6));
        assert_eq!(PikminType::Rock.base_attack_power(), Some(5));
        assert_eq!(PikminType::White.base_attack_power(), Some(3));
        assert_eq!(PikminType::Unknown.base_attack_power(), None);
    }

    #[test]
    fn test_unknown_type_deserializes() {
        let ty: PikminType = serde_json::from_str("\"GLOW\"").unwrap();
        assert_eq!(ty, PikminType::Unknown);

        let ty: PikminType = serde_json::from_str("\"WINGED\"").unwrap();
        assert_eq!(ty, PikminType::Winged);
    }

    #[test]
    fn test_find_species() {
        let ice = find_species("pikmin-ice").unwrap();
        assert_eq!(ice.pikmin_type, PikminType::Ice);
        assert_eq!(ice.short_name(), "冰凍皮克敏");
        assert!(find_species("pikmin-glow").is_none());
    }
}
