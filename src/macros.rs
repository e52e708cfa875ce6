// 診断マクロ
//
// 呼び出し元の関数名取得と、失敗時の早期リターンを担当する。
// いずれのマクロも第1引数に Diagnostics ハンドルを受け取る。

/// 囲んでいる関数の名前を `&'static str` で返す
#[macro_export]
macro_rules! function_name {
    () => {{
        fn __vcheck_here() {}
        $crate::diagnostics::caller_name(::std::any::type_name_of_val(&__vcheck_here))
    }};
}

/// マスクが `level` と交差する場合のみ、関数名を前置して出力する
///
/// 書式引数はマスクが有効な場合にしか評価されない
#[macro_export]
macro_rules! vprint {
    ($diag:expr, $level:expr, $($arg:tt)+) => {{
        let diag = &$diag;
        let level: $crate::Verbosity = $level;
        if diag.is_enabled(level) {
            diag.log(level, $crate::function_name!(), ::std::format_args!($($arg)+));
        }
    }};
}

/// `vprint!` と同じ判定で、関数名を前置しない
#[macro_export]
macro_rules! vprint_plain {
    ($diag:expr, $level:expr, $($arg:tt)+) => {{
        let diag = &$diag;
        let level: $crate::Verbosity = $level;
        if diag.is_enabled(level) {
            diag.log_plain(level, ::std::format_args!($($arg)+));
        }
    }};
}

#[macro_export]
macro_rules! venter {
    ($diag:expr) => {
        $diag.enter($crate::function_name!())
    };
}

#[macro_export]
macro_rules! vexit {
    ($diag:expr) => {
        $diag.exit($crate::function_name!())
    };
}

/// ステータスを返す式を評価し、失敗なら `Err(Failure.into())` で即座に戻る
///
/// 囲む関数は `Result<_, E>`（`E: From<Failure>`）を返す必要がある
#[macro_export]
macro_rules! vcheck {
    ($diag:expr, $status:expr) => {
        if $diag
            .check($crate::function_name!(), ::std::stringify!($status), $status)
            .is_err()
        {
            return ::std::result::Result::Err(::std::convert::From::from($crate::Failure));
        }
    };
}

/// `vcheck!` と同じ判定で、失敗時は値を返さずに戻る
#[macro_export]
macro_rules! vcheck_void {
    ($diag:expr, $status:expr) => {
        if $diag
            .check($crate::function_name!(), ::std::stringify!($status), $status)
            .is_err()
        {
            return;
        }
    };
}

/// 任意の条件を評価し、偽なら `Err(Failure.into())` で即座に戻る
#[macro_export]
macro_rules! vassert {
    ($diag:expr, $cond:expr) => {
        if $diag
            .assert($crate::function_name!(), ::std::stringify!($cond), $cond)
            .is_err()
        {
            return ::std::result::Result::Err(::std::convert::From::from($crate::Failure));
        }
    };
}

/// 条件が偽なら値を返さずに戻る
#[macro_export]
macro_rules! vassert_void {
    ($diag:expr, $cond:expr) => {
        if $diag
            .assert($crate::function_name!(), ::std::stringify!($cond), $cond)
            .is_err()
        {
            return;
        }
    };
}

/// 条件が偽なら数値コード `ERROR` (-1) を返す。`i32` を返す関数用
#[macro_export]
macro_rules! vassert_int {
    ($diag:expr, $cond:expr) => {
        if $diag
            .assert($crate::function_name!(), ::std::stringify!($cond), $cond)
            .is_err()
        {
            return $crate::ERROR;
        }
    };
}
