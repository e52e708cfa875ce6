// 診断出力先の具象実装

use crate::core::DiagnosticSink;
use std::io::Write;
use std::sync::{Arc, Mutex, MutexGuard};

/// 先頭の改行・復帰の後ろにタイムスタンプを差し込む
fn with_timestamp(text: &str) -> String {
    let body = text.trim_start_matches(&['\n', '\r'][..]);
    let leading = &text[..text.len() - body.len()];
    let now = chrono::Local::now().format("%H:%M:%S%.3f");
    format!("{leading}[{now}] {body}")
}

/// 標準出力への書き込み実装（デフォルトの出力先）
#[derive(Debug, Default, Clone)]
pub struct StdoutSink {
    timestamps: bool,
}

impl StdoutSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// 各メッセージに時刻を付与する
    pub fn with_timestamps() -> Self {
        Self { timestamps: true }
    }
}

impl DiagnosticSink for StdoutSink {
    fn write_str(&self, text: &str) {
        let mut out = std::io::stdout().lock();
        let _ = if self.timestamps {
            out.write_all(with_timestamp(text).as_bytes())
        } else {
            out.write_all(text.as_bytes())
        };
    }

    fn flush(&self) {
        let _ = std::io::stdout().lock().flush();
    }
}

/// 標準エラー出力への書き込み実装
#[derive(Debug, Default, Clone)]
pub struct StderrSink {
    timestamps: bool,
}

impl StderrSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timestamps() -> Self {
        Self { timestamps: true }
    }
}

impl DiagnosticSink for StderrSink {
    fn write_str(&self, text: &str) {
        let mut err = std::io::stderr().lock();
        let _ = if self.timestamps {
            err.write_all(with_timestamp(text).as_bytes())
        } else {
            err.write_all(text.as_bytes())
        };
    }

    fn flush(&self) {
        let _ = std::io::stderr().lock().flush();
    }
}

/// 何も出力しない実装（出力先が無い場合・ベンチマーク用）
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpSink;

impl NoOpSink {
    pub fn new() -> Self {
        Self
    }
}

impl DiagnosticSink for NoOpSink {
    fn write_str(&self, _text: &str) {
        // 何もしない
    }
}

/// メモリ内に出力を蓄積する実装（テスト・検査用）
///
/// クローンは同じバッファを共有する
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    buffer: Arc<Mutex<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    fn buffer(&self) -> MutexGuard<'_, String> {
        // 書き込み途中のパニックでもテキスト自体は有効
        self.buffer.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// 書き込まれたテキスト全体
    pub fn contents(&self) -> String {
        self.buffer().clone()
    }

    /// 空行を除いた行単位の出力（`\r` は除去）
    pub fn lines(&self) -> Vec<String> {
        self.buffer()
            .split('\n')
            .map(|line| line.trim_matches('\r'))
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer().is_empty()
    }

    pub fn clear(&self) {
        self.buffer().clear();
    }
}

impl DiagnosticSink for MemorySink {
    fn write_str(&self, text: &str) {
        self.buffer().push_str(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_collects_text() {
        let sink = MemorySink::new();
        assert!(sink.is_empty());

        sink.write_str("\n\rmain: first\n\r");
        sink.write_str("plain second");

        assert_eq!(sink.contents(), "\n\rmain: first\n\rplain second");
        assert_eq!(sink.lines(), vec!["main: first", "plain second"]);

        sink.clear();
        assert!(sink.is_empty());
    }

    #[test]
    fn test_memory_sink_clones_share_buffer() {
        let sink = MemorySink::new();
        let clone = sink.clone();

        clone.write_str("shared");
        assert_eq!(sink.contents(), "shared");
    }

    #[test]
    fn test_memory_sink_thread_safety() {
        let sink = MemorySink::new();
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let sink = sink.clone();
                std::thread::spawn(move || sink.write_str(&format!("line {i}\n")))
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(sink.lines().len(), 4);
    }

    #[test]
    fn test_noop_sink_is_silent() {
        let sink = NoOpSink::new();
        sink.write_str("ignored");
        sink.flush();
    }

    #[test]
    fn test_timestamp_inserted_after_leading_newlines() {
        let stamped = with_timestamp("\n\rcaller: message");

        assert!(stamped.starts_with("\n\r["));
        assert!(stamped.ends_with("] caller: message"));
    }

    #[test]
    fn test_console_sinks_do_not_panic() {
        StdoutSink::new().write_str("");
        StdoutSink::with_timestamps().flush();
        StderrSink::new().write_str("");
        StderrSink::with_timestamps().flush();
    }
}
