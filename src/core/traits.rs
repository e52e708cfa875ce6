// 診断出力先のトレイト定義

use mockall::automock;

/// 診断メッセージの出力先を抽象化するトレイト
///
/// 出力はベストエフォート。書き込みに失敗しても呼び出し側へは伝播しない
#[automock]
pub trait DiagnosticSink: Send + Sync {
    /// 整形済みテキストをそのまま書き込む（改行は付加しない）
    fn write_str(&self, text: &str);

    /// バッファ済みの出力を吐き出す
    fn flush(&self) {}
}

// DiagnosticSink for Box<dyn DiagnosticSink>
impl DiagnosticSink for Box<dyn DiagnosticSink> {
    fn write_str(&self, text: &str) {
        self.as_ref().write_str(text)
    }

    fn flush(&self) {
        self.as_ref().flush()
    }
}

impl<T: DiagnosticSink + ?Sized> DiagnosticSink for std::sync::Arc<T> {
    fn write_str(&self, text: &str) {
        self.as_ref().write_str(text)
    }

    fn flush(&self) {
        self.as_ref().flush()
    }
}
