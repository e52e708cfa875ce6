// 冗長度マスクで出力を制御する診断ハンドル

use crate::core::{DiagnosticSink, Failure, IntoStatus, StatusResult, Verbosity};
use crate::services::DiagnosticsConfig;
use std::fmt;

/// 診断出力とステータスチェックの本体
///
/// マスクは構築時に固定され、以後変更されない。グローバル状態は持たず、
/// 必要なコンポーネントへハンドルを渡して使う
pub struct Diagnostics<S: DiagnosticSink> {
    config: DiagnosticsConfig,
    sink: S,
}

impl<S: DiagnosticSink> Diagnostics<S> {
    /// 新しい診断ハンドルを作成（コンストラクタインジェクション）
    pub fn new(config: DiagnosticsConfig, sink: S) -> Self {
        Self { config, sink }
    }

    /// マスクだけを指定して作成
    pub fn with_mask(mask: Verbosity, sink: S) -> Self {
        Self::new(DiagnosticsConfig::new(mask), sink)
    }

    pub fn config(&self) -> &DiagnosticsConfig {
        &self.config
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn mask(&self) -> Verbosity {
        self.config.verbosity()
    }

    /// `level` のビットが有効マスクと交差するか
    pub fn is_enabled(&self, level: Verbosity) -> bool {
        self.mask().intersects(level)
    }

    /// 呼び出し元名を前置して出力
    pub fn log(&self, level: Verbosity, caller: &str, args: fmt::Arguments<'_>) {
        if self.is_enabled(level) {
            self.sink.write_str(&format!("\n\r{caller}: {args}"));
        }
    }

    /// 前置なしで出力
    pub fn log_plain(&self, level: Verbosity, args: fmt::Arguments<'_>) {
        if self.is_enabled(level) {
            self.sink.write_str(&args.to_string());
        }
    }

    pub fn enter(&self, caller: &str) {
        self.log(Verbosity::INFO, caller, format_args!("Enter\n\r"));
    }

    pub fn exit(&self, caller: &str) {
        self.log(Verbosity::INFO, caller, format_args!("Exit\n\r"));
    }

    /// ステータスを評価し、成功ならDEBUG、失敗ならERRORで記録する
    pub fn check(&self, caller: &str, expr: &str, value: impl IntoStatus) -> StatusResult {
        if value.into_status().is_success() {
            self.log(Verbosity::DEBUG, caller, format_args!("{expr} is ok\n\r"));
            Ok(())
        } else {
            self.log(
                Verbosity::ERROR,
                caller,
                format_args!("****ERROR: Didn't return OK: {expr}\n\r"),
            );
            Err(Failure)
        }
    }

    /// 任意の条件を評価する。ステータス値に限定されない
    pub fn assert(&self, caller: &str, condition: &str, holds: bool) -> StatusResult {
        if holds {
            self.log(Verbosity::DEBUG, caller, format_args!("{condition} is ok\n\r"));
            Ok(())
        } else {
            self.log(
                Verbosity::ERROR,
                caller,
                format_args!("****ERROR: This statement has failed assertion: {condition}\n\r"),
            );
            Err(Failure)
        }
    }

    pub fn flush(&self) {
        self.sink.flush();
    }
}

impl<S: DiagnosticSink + Clone> Clone for Diagnostics<S> {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            sink: self.sink.clone(),
        }
    }
}

impl<S: DiagnosticSink> fmt::Debug for Diagnostics<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Diagnostics")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
