use crate::core::{DiagnosticSink, Status, Verbosity};
use crate::diagnostics::Diagnostics;
use crate::services::DiagnosticsConfig;

/// 数値コードをステータスチェックにかける
pub fn check_code<S: DiagnosticSink>(diagnostics: &Diagnostics<S>, code: i32) -> Status {
    let status: Status = diagnostics
        .check("vcheck", &format!("status code {code}"), code)
        .into();
    diagnostics.flush();
    status
}

/// Check a status code with diagnostics built from the configuration
pub fn execute_check(config: DiagnosticsConfig, mask: Verbosity, code: i32) -> Status {
    let diagnostics = config.with_verbosity(mask).build();
    check_code(&diagnostics, code)
}
