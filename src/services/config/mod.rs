// 設定管理
// 冗長度マスク・出力先の設定と JSON 永続化

pub mod implementations;

// 公開API
pub use implementations::{DiagnosticsConfig, SinkKind};
