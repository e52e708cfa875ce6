// コアレイヤー - ステータス、冗長度マスク、出力先トレイト、エラー定義
// 他のレイヤーから参照される基本的な抽象化を提供

pub mod error;
pub mod status;
pub mod traits;
pub mod verbosity;

// 公開API - 明示的にエクスポートして曖昧性を回避
pub use error::{VcheckError, VcheckResult};
pub use status::{Failure, IntoStatus, Status, StatusResult, ERROR, OFF, OK};
pub use traits::{DiagnosticSink, MockDiagnosticSink};
pub use verbosity::Verbosity;
