// 버섯 배틀 전투력 계산기
//
// 보유 피크민으로 파티를 채웠을 때의 추정 전투력

pub mod config;
pub mod modifiers;
pub mod mushroom;
pub mod score;
pub mod squad;

pub use config::*;
pub use modifiers::*;
pub use mushroom::*;
pub use score::*;
pub use squad::*;
