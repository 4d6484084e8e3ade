// JSON API (UI 레이어 연결용)

pub mod battle_json;
pub mod collection_json;

pub use battle_json::{calculate_squad, calculate_squad_json, InventoryRow, SquadMember, SquadRequest, SquadResponse};
pub use collection_json::{
    collection_stats_json, plan_steps_json, query_collection_json, PlanResponse, QueryRequest,
    QueryResponse, StatsResponse,
};
