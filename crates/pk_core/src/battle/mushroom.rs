// 버섯 배틀 색상과 속성 일치 테이블
use crate::roster::PikminType;
use serde::{Deserialize, Serialize};

/// 버섯 색상 (속성 보너스 선택자)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MushroomColor {
    #[default]
    Red,
    Blue,
    Yellow,
    Purple,
    White,
    Pink,
    Gray,
    Cyan,
}

impl MushroomColor {
    pub const ALL: [MushroomColor; 8] = [
        MushroomColor::Red,
        MushroomColor::Blue,
        MushroomColor::Yellow,
        MushroomColor::Purple,
        MushroomColor::White,
        MushroomColor::Pink,
        MushroomColor::Gray,
        MushroomColor::Cyan,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            MushroomColor::Red => "紅色蘑菇",
            MushroomColor::Blue => "藍色蘑菇",
            MushroomColor::Yellow => "黃色蘑菇",
            MushroomColor::Purple => "紫色蘑菇",
            MushroomColor::White => "白色蘑菇",
            MushroomColor::Pink => "粉紅(羽翅)蘑菇",
            MushroomColor::Gray => "灰色(岩石)蘑菇",
            MushroomColor::Cyan => "冰凍蘑菇",
        }
    }

    /// CLI 등 문자열 입력 파싱 (대소문자 무시)
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.id().eq_ignore_ascii_case(value.trim()))
    }

    pub fn id(&self) -> &'static str {
        match self {
            MushroomColor::Red => "RED",
            MushroomColor::Blue => "BLUE",
            MushroomColor::Yellow => "YELLOW",
            MushroomColor::Purple => "PURPLE",
            MushroomColor::White => "WHITE",
            MushroomColor::Pink => "PINK",
            MushroomColor::Gray => "GRAY",
            MushroomColor::Cyan => "CYAN",
        }
    }
}

/// 피크민 종류 ↔ 버섯 색상 대응표
///
/// 날개/바위/얼음은 버섯 쪽 이름이 다르다 (PINK/GRAY/CYAN).
/// 게임 고유의 대응이므로 규칙으로 유도하지 말고 표 그대로 유지할 것.
pub const AFFINITY_TABLE: [(PikminType, MushroomColor); 8] = [
    (PikminType::Red, MushroomColor::Red),
    (PikminType::Blue, MushroomColor::Blue),
    (PikminType::Yellow, MushroomColor::Yellow),
    (PikminType::Purple, MushroomColor::Purple),
    (PikminType::White, MushroomColor::White),
    (PikminType::Winged, MushroomColor::Pink),
    (PikminType::Rock, MushroomColor::Gray),
    (PikminType::Ice, MushroomColor::Cyan),
];

pub fn is_affinity_match(pikmin_type: PikminType, mushroom: MushroomColor) -> bool {
    AFFINITY_TABLE.iter().any(|&(p, m)| p == pikmin_type && m == mushroom)
}

/// 해당 버섯에 보너스를 받는 피크민 종류
pub fn matching_type(mushroom: MushroomColor) -> Option<PikminType> {
    AFFINITY_TABLE.iter().find(|(_, m)| *m == mushroom).map(|(p, _)| *p)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cross_mappings() {
        assert!(is_affinity_match(PikminType::Winged, MushroomColor::Pink));
        assert!(is_affinity_match(PikminType::Rock, MushroomColor::Gray));
        assert!(is_affinity_match(PikminType::Ice, MushroomColor::Cyan));
        assert!(!is_affinity_match(PikminType::White, MushroomColor::Gray));
        assert!(!is_affinity_match(PikminType::Unknown, MushroomColor::Red));
    }

    #[test]
    fn test_table_is_one_to_one() {
        for color in MushroomColor::ALL {
            let matches = PikminType::ALL.iter().filter(|p| is_affinity_match(**p, color)).count();
            assert_eq!(matches, 1, "{:?}", color);
        }
        assert_eq!(matching_type(MushroomColor::Cyan), Some(PikminType::Ice));
    }

    #[test]
    fn test_parse() {
        assert_eq!(MushroomColor::parse("pink"), Some(MushroomColor::Pink));
        assert_eq!(MushroomColor::parse(" GRAY "), Some(MushroomColor::Gray));
        assert_eq!(MushroomColor::parse("green"), None);
    }
}
