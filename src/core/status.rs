// 関数の戻り値として使う二値ステータスコード
// 成功(0)と失敗(-1)以外の値は存在しない

use thiserror::Error;

/// 成功を表すステータスコード
pub const OK: i32 = 0;

/// 失敗を表すステータスコード
pub const ERROR: i32 = -1;

/// 「無効」を表す番兵値
pub const OFF: i32 = 0;

/// 二値ステータス
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Status {
    #[default]
    Success,
    Failure,
}

impl Status {
    /// 数値コードを取得
    pub const fn code(self) -> i32 {
        match self {
            Self::Success => OK,
            Self::Failure => ERROR,
        }
    }

    /// 数値コードから変換（OK以外はすべて失敗扱い）
    pub const fn from_code(code: i32) -> Self {
        if code == OK {
            Self::Success
        } else {
            Self::Failure
        }
    }

    pub const fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }

    pub const fn is_failure(self) -> bool {
        matches!(self, Self::Failure)
    }

    /// Result規約へ変換
    pub fn into_result(self) -> StatusResult {
        match self {
            Self::Success => Ok(()),
            Self::Failure => Err(Failure),
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success => write!(f, "OK"),
            Self::Failure => write!(f, "ERROR"),
        }
    }
}

/// Result規約における失敗値。ペイロードを持たない
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[error("ステータス失敗 (code -1)")]
pub struct Failure;

impl Failure {
    pub const fn code(self) -> i32 {
        ERROR
    }
}

/// ステータスを返す関数の結果型
pub type StatusResult<T = ()> = std::result::Result<T, Failure>;

impl From<Failure> for Status {
    fn from(_: Failure) -> Self {
        Status::Failure
    }
}

impl From<Status> for StatusResult {
    fn from(status: Status) -> Self {
        status.into_result()
    }
}

impl From<StatusResult> for Status {
    fn from(result: StatusResult) -> Self {
        match result {
            Ok(()) => Status::Success,
            Err(Failure) => Status::Failure,
        }
    }
}

impl From<Status> for i32 {
    fn from(status: Status) -> Self {
        status.code()
    }
}

/// チェック系マクロで評価できる値
///
/// 数値コード・bool・Result などを二値ステータスへ畳み込む
pub trait IntoStatus {
    fn into_status(self) -> Status;
}

impl IntoStatus for Status {
    fn into_status(self) -> Status {
        self
    }
}

impl IntoStatus for i32 {
    fn into_status(self) -> Status {
        Status::from_code(self)
    }
}

impl IntoStatus for bool {
    fn into_status(self) -> Status {
        if self {
            Status::Success
        } else {
            Status::Failure
        }
    }
}

impl<T, E> IntoStatus for std::result::Result<T, E> {
    fn into_status(self) -> Status {
        match self {
            Ok(_) => Status::Success,
            Err(_) => Status::Failure,
        }
    }
}
