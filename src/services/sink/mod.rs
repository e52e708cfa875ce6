// 診断出力先
// 標準出力・標準エラー・メモリ・無出力の各実装

pub mod implementations;

// 公開API
pub use implementations::{MemorySink, NoOpSink, StderrSink, StdoutSink};
