// 診断設定の具象実装

use crate::core::{DiagnosticSink, VcheckError, VcheckResult, Verbosity};
use crate::diagnostics::Diagnostics;
use crate::services::sink::{NoOpSink, StderrSink, StdoutSink};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 出力先の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum SinkKind {
    #[default]
    Stdout,
    Stderr,
    None,
}

/// 診断レイヤーの設定
///
/// プロセス起動時に一度だけ構築し、以後は読み取り専用として扱う
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagnosticsConfig {
    verbosity: Verbosity,
    sink: SinkKind,
    timestamps: bool,
}

impl DiagnosticsConfig {
    pub fn new(verbosity: Verbosity) -> Self {
        Self {
            verbosity,
            ..Self::default()
        }
    }

    /// 一切出力しない設定
    pub fn quiet() -> Self {
        Self::new(Verbosity::OFF)
    }

    /// INFO・DEBUG まで出力する設定
    pub fn verbose() -> Self {
        Self::new(Verbosity::DEBUG_S)
    }

    /// 全ビットを有効にする設定
    pub fn trace() -> Self {
        Self::new(Verbosity::MAX_S)
    }

    /// プリセット名から設定を作成
    pub fn preset(name: &str) -> VcheckResult<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "default" => Ok(Self::default()),
            "quiet" => Ok(Self::quiet()),
            "verbose" => Ok(Self::verbose()),
            "trace" => Ok(Self::trace()),
            other => Err(VcheckError::validation(
                "preset",
                format!("未知のプリセット: {other} (default, quiet, verbose, trace)"),
            )),
        }
    }

    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    pub fn with_sink(mut self, sink: SinkKind) -> Self {
        self.sink = sink;
        self
    }

    pub fn with_timestamps(mut self, enable: bool) -> Self {
        self.timestamps = enable;
        self
    }

    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    pub fn sink(&self) -> SinkKind {
        self.sink
    }

    pub fn timestamps(&self) -> bool {
        self.timestamps
    }

    /// 設定値の整合性を検証
    pub fn validate(&self) -> VcheckResult<()> {
        if self.timestamps && self.sink == SinkKind::None {
            return Err(VcheckError::validation(
                "timestamps",
                "出力先が none の場合は指定できません",
            ));
        }
        Ok(())
    }

    /// JSON文字列から読み込み
    pub fn from_json_str(json: &str) -> VcheckResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// JSONファイルから読み込み
    pub fn load(path: impl AsRef<Path>) -> VcheckResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| VcheckError::config_io(path, e))?;
        Self::from_json_str(&json)
    }

    /// JSONファイルへ保存
    pub fn save(&self, path: impl AsRef<Path>) -> VcheckResult<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|e| VcheckError::config_io(path, e))
    }

    /// 設定に対応する出力先を生成
    pub fn create_sink(&self) -> Box<dyn DiagnosticSink> {
        match (self.sink, self.timestamps) {
            (SinkKind::Stdout, false) => Box::new(StdoutSink::new()),
            (SinkKind::Stdout, true) => Box::new(StdoutSink::with_timestamps()),
            (SinkKind::Stderr, false) => Box::new(StderrSink::new()),
            (SinkKind::Stderr, true) => Box::new(StderrSink::with_timestamps()),
            (SinkKind::None, _) => Box::new(NoOpSink::new()),
        }
    }

    /// 設定から診断ハンドルを構築
    pub fn build(self) -> Diagnostics<Box<dyn DiagnosticSink>> {
        let sink = self.create_sink();
        Diagnostics::new(self, sink)
    }
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            verbosity: Verbosity::WARNING_S,
            sink: SinkKind::Stdout,
            timestamps: false,
        }
    }
}
