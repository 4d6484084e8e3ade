// Collection / planner JSON API layer

use crate::planner::{StepEstimate, StepPlan};
use crate::roster::{CollectionItem, CollectionQuery, CollectionStats};
use crate::store::import_snapshot;
use serde::{Deserialize, Serialize};
use tracing::warn;

#[derive(Debug, Serialize, Deserialize)]
pub struct StatsResponse {
    pub success: bool,
    pub stats: Option<CollectionStats>,
    pub error: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct QueryRequest {
    /// 백업과 같은 형식의 수집 배열
    pub collection: serde_json::Value,
    #[serde(default)]
    pub query: CollectionQuery,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct QueryResponse {
    pub success: bool,
    pub items: Vec<CollectionItem>,
    pub total_count: usize,
    pub error: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PlanResponse {
    pub success: bool,
    pub estimate: Option<StepEstimate>,
    pub error: Option<String>,
}

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value)
        .unwrap_or_else(|_| r#"{"success":false,"error":"Serialization failed"}"#.to_string())
}

/// 수집 통계 (입력: 스냅샷 JSON 배열)
pub fn collection_stats_json(snapshot_json: &str) -> String {
    let response = match import_snapshot(snapshot_json) {
        Ok(collection) => StatsResponse {
            success: true,
            stats: Some(CollectionStats::compute(&collection)),
            error: None,
        },
        Err(e) => {
            warn!("stats request rejected: {}", e);
            StatsResponse { success: false, stats: None, error: Some(e.to_string()) }
        }
    };
    to_json(&response)
}

/// 검색/필터/정렬
pub fn query_collection_json(request_json: &str) -> String {
    let failure = |message: String| QueryResponse {
        success: false,
        items: vec![],
        total_count: 0,
        error: Some(message),
    };

    let response = match serde_json::from_str::<QueryRequest>(request_json) {
        Ok(request) => match import_snapshot(&request.collection.to_string()) {
            Ok(collection) => {
                let items: Vec<CollectionItem> =
                    request.query.apply(&collection).into_iter().cloned().collect();
                QueryResponse { success: true, total_count: items.len(), items, error: None }
            }
            Err(e) => failure(e.to_string()),
        },
        Err(e) => failure(format!("Invalid request format: {}", e)),
    };
    to_json(&response)
}

/// 걸음 수 계산
pub fn plan_steps_json(request_json: &str) -> String {
    let response = match serde_json::from_str::<StepPlan>(request_json) {
        Ok(plan) => match plan.estimate() {
            Ok(estimate) => PlanResponse { success: true, estimate: Some(estimate), error: None },
            Err(e) => PlanResponse { success: false, estimate: None, error: Some(e.to_string()) },
        },
        Err(e) => PlanResponse {
            success: false,
            estimate: None,
            error: Some(format!("Invalid request format: {}", e)),
        },
    };
    to_json(&response)
}
