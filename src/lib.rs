// 冗長度マスクによる診断出力と、ステータスチェックのユーティリティ
//
// - core:        ステータスコード・冗長度マスク・出力先トレイト・エラー型
// - services:    出力先と設定の具象実装
// - diagnostics: マスク判定と整形を行う Diagnostics ハンドル
// - macros:      呼び出し元名の取得と早期リターン
// - arith:       引数を1回だけ評価する算術ヘルパー

#[macro_use]
pub mod macros;

pub mod arith;
pub mod cli;
pub mod core;
pub mod diagnostics;
pub mod services;

pub use crate::core::{
    DiagnosticSink, Failure, IntoStatus, Status, StatusResult, VcheckError, VcheckResult,
    Verbosity, ERROR, OFF, OK,
};
pub use diagnostics::Diagnostics;
pub use services::{DiagnosticsConfig, MemorySink, NoOpSink, SinkKind, StderrSink, StdoutSink};
