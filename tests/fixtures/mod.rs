// テストユーティリティ
// 統合テスト間で共有するヘルパー

#![allow(dead_code)]

use std::path::PathBuf;
use tempfile::TempDir;
use vcheck::{Diagnostics, DiagnosticsConfig, MemorySink, Verbosity};

/// メモリ出力先付きの診断ハンドルを作成
pub fn memory_diagnostics(mask: Verbosity) -> (Diagnostics<MemorySink>, MemorySink) {
    let sink = MemorySink::new();
    (Diagnostics::with_mask(mask, sink.clone()), sink)
}

/// 一時ディレクトリに設定ファイルを書き出す
pub fn write_config(config: &DiagnosticsConfig) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("vcheck.json");
    config.save(&path).unwrap();
    (temp_dir, path)
}

/// 生のJSONを一時ファイルに書き出す
pub fn write_raw_config(json: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("vcheck.json");
    std::fs::write(&path, json).unwrap();
    (temp_dir, path)
}
