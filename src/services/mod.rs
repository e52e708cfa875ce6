// サービス層 - 診断レイヤーを構成する差し替え可能な部品
// 出力先と設定はそれぞれ独立しており、Diagnostics にコンストラクタ経由で注入される

pub mod config;
pub mod sink;

// 公開API
pub use config::{DiagnosticsConfig, SinkKind};
pub use sink::{MemorySink, NoOpSink, StderrSink, StdoutSink};
