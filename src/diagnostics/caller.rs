// 呼び出し元関数名の抽出

/// `function_name!` が生成するマーカー関数名
pub const MARKER: &str = "__vcheck_here";

/// `std::any::type_name_of_val` の完全パスから関数名だけを取り出す
///
/// `app::worker::run::{{closure}}::__vcheck_here` → `run`
pub fn caller_name(type_path: &'static str) -> &'static str {
    let mut path = type_path
        .strip_suffix(MARKER)
        .and_then(|p| p.strip_suffix("::"))
        .unwrap_or(type_path);

    while let Some(outer) = path.strip_suffix("::{{closure}}") {
        path = outer;
    }

    path.rsplit("::").next().unwrap_or(path)
}
