//! # pk_core - Pikmin collection tracker core
//!
//! 피크민 수집 현황 관리와 버섯 배틀 전투력 계산.
//!
//! ## Features
//! - 종류별 보유 수, 데코, 태그 관리 및 검색/통계
//! - 버섯 색상/하트/꽃 설정에 따른 최적 파티 편성 (결정적, 순수 함수)
//! - 새싹 걸음 수 플래너
//! - JSON API for UI integration

// Struct initialization pattern used intentionally in tests
#![allow(clippy::field_reassign_with_default)]

pub mod api;
pub mod battle;
pub mod error;
pub mod planner;
pub mod roster;
pub mod store;

// Re-export main API functions
pub use api::{calculate_squad_json, collection_stats_json, plan_steps_json, query_collection_json};
pub use error::{CoreError, Result};

pub use battle::{
    optimize_squad, BattleConfig, BattleModifiers, ContributionRecord, InventoryEntry,
    MushroomColor, SquadResult, UnitType,
};
pub use planner::{StepEstimate, StepPlan};
pub use roster::{Collection, CollectionItem, CollectionQuery, CollectionStats, PikminType};
pub use store::{CollectionStore, MemoryStore};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;
