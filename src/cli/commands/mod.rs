pub mod check;
pub mod emit;
pub mod levels;
pub mod mask;

pub use check::*;
pub use emit::*;
pub use levels::*;
pub use mask::*;

use crate::core::Verbosity;
use crate::services::DiagnosticsConfig;
use anyhow::{Context, Result};
use std::path::Path;

/// 設定ファイル・プリセット・既定値の順で設定を決定
pub fn resolve_config(config: Option<&Path>, preset: Option<&str>) -> Result<DiagnosticsConfig> {
    match (config, preset) {
        (Some(path), _) => DiagnosticsConfig::load(path)
            .with_context(|| format!("設定ファイルを読み込めません: {}", path.display())),
        (None, Some(name)) => Ok(DiagnosticsConfig::preset(name)?),
        (None, None) => Ok(DiagnosticsConfig::default()),
    }
}

/// 明示されたマスクがあれば設定の値を上書き
pub fn resolve_mask(config: &DiagnosticsConfig, mask: Option<&str>) -> Result<Verbosity> {
    match mask {
        Some(expression) => Ok(expression.parse()?),
        None => Ok(config.verbosity()),
    }
}
