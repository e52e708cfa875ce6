// ライブラリ固有のエラー型定義
// 二値ステータスでは表現できない失敗（設定読み込み・マスク解析など）を扱う

use std::path::PathBuf;
use thiserror::Error;

/// vcheck固有のエラー型
#[derive(Error, Debug)]
pub enum VcheckError {
    #[error("マスク解析エラー: '{input}' - {reason}")]
    InvalidMask { input: String, reason: String },

    #[error("設定ファイル読み書きエラー: {} - {source}", .path.display())]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("設定解析エラー: {source}")]
    ConfigParse {
        #[source]
        source: serde_json::Error,
    },

    #[error("バリデーションエラー: {field} - {reason}")]
    Validation { field: String, reason: String },
}

impl VcheckError {
    /// マスク解析エラーの作成
    pub fn invalid_mask(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidMask {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// 設定ファイルI/Oエラーの作成
    pub fn config_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigIo {
            path: path.into(),
            source,
        }
    }

    /// 設定解析エラーの作成
    pub fn config_parse(source: serde_json::Error) -> Self {
        Self::ConfigParse { source }
    }

    /// バリデーションエラーの作成
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// 入力を直せば再試行できるかどうか
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::InvalidMask { .. } | Self::Validation { .. } => true,
            Self::ConfigParse { .. } => true,
            Self::ConfigIo { .. } => false,
        }
    }
}

impl From<serde_json::Error> for VcheckError {
    fn from(error: serde_json::Error) -> Self {
        VcheckError::ConfigParse { source: error }
    }
}

/// vcheckの結果型
pub type VcheckResult<T> = std::result::Result<T, VcheckError>;
