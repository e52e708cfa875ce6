// 診断レイヤー - 冗長度に応じた出力と、早期リターン付きチェック
//
// 関数名の取得やリターンはマクロ側（crate::macros）で行い、
// 判定と整形はこのモジュールの Diagnostics が担う

pub mod caller;
pub mod logger;

// 公開API
pub use caller::caller_name;
pub use logger::Diagnostics;
