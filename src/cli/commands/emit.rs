use crate::core::{DiagnosticSink, Verbosity};
use crate::diagnostics::Diagnostics;
use crate::services::{DiagnosticsConfig, SinkKind};
use anyhow::Result;

/// emitコマンドの入力
#[derive(Debug, Clone)]
pub struct EmitRequest {
    pub level: Verbosity,
    pub caller: String,
    pub plain: bool,
    pub message: String,
}

/// メッセージを診断レイヤーへ流す。出力されたかどうかを返す
pub fn emit_message<S: DiagnosticSink>(diagnostics: &Diagnostics<S>, request: &EmitRequest) -> bool {
    if !diagnostics.is_enabled(request.level) {
        return false;
    }

    if request.plain {
        diagnostics.log_plain(request.level, format_args!("{}\n", request.message));
    } else {
        diagnostics.log(
            request.level,
            &request.caller,
            format_args!("{}\n\r", request.message),
        );
    }
    diagnostics.flush();
    true
}

/// Emit a message through diagnostics built from the configuration
pub fn execute_emit(
    config: DiagnosticsConfig,
    mask: Verbosity,
    sink: Option<SinkKind>,
    request: &EmitRequest,
) -> Result<bool> {
    let sink = sink.unwrap_or(config.sink());
    let config = config.with_verbosity(mask).with_sink(sink);
    config.validate()?;

    let diagnostics = config.build();
    Ok(emit_message(&diagnostics, request))
}
