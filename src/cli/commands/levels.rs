use crate::core::Verbosity;
use anyhow::Result;

/// 全レベル定数の一覧。マスクで有効なものに印を付ける
pub fn level_table(mask: Verbosity) -> Vec<String> {
    let mut lines = Vec::new();

    for (name, level) in Verbosity::BASE_LEVELS {
        let mark = if mask.intersects(level) { "x" } else { " " };
        lines.push(format!("[{mark}] {name:<14} {level}"));
    }

    // 累積マスクは全ビットを含む場合のみ印を付ける
    for (name, level) in Verbosity::CUMULATIVE_CHAIN {
        let mark = if mask.contains(level) { "x" } else { " " };
        lines.push(format!("[{mark}] {name:<14} {level}"));
    }

    lines
}

/// List all named levels for a mask
pub fn execute_levels(mask: Verbosity) -> Result<()> {
    println!("📋 レベル一覧 (マスク: {mask})");
    for line in level_table(mask) {
        println!("   {line}");
    }
    Ok(())
}
