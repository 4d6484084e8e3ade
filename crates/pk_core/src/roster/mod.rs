// 수집 관리 (종류 카탈로그, 데코, 보유 현황, 검색, 통계)

pub mod collection;
pub mod decor;
pub mod query;
pub mod species;
pub mod stats;

pub use collection::*;
pub use decor::*;
pub use query::*;
pub use species::*;
pub use stats::*;
