// 冗長度（verbosity）ビットマスク定義
//
// 各ビットが独立した重要度クラスを表す。`_S` 付きの累積マスクは
// そのクラスと、より重要度の高い全クラスを含む。

use super::error::{VcheckError, VcheckResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign};
use std::str::FromStr;

/// 32ビットの冗長度マスク
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Verbosity(u32);

impl Verbosity {
    pub const OFF: Self = Self(0);
    pub const MIN: Self = Self(0);

    pub const MAX: Self = Self(1 << 31);
    pub const ENTER_EXIT: Self = Self(1 << 30);
    pub const DEBUG_3: Self = Self(1 << 14);
    pub const DEBUG_2: Self = Self(1 << 13);
    pub const DEBUG_1: Self = Self(1 << 12);
    pub const DEBUG: Self = Self(1 << 11);
    pub const INFO: Self = Self(1 << 10);
    pub const WARNING: Self = Self(1 << 8);
    pub const ERROR: Self = Self(1 << 6);
    pub const IMPORTANT: Self = Self(1 << 5);
    pub const FATAL: Self = Self(1 << 4);
    pub const CRITICAL: Self = Self(1 << 2);
    pub const SILENT: Self = Self(1 << 1);

    // 累積マスク: 自身と、より重要度の高いクラスを全て含む
    pub const MAX_S: Self = Self(0xFFFF_FFFF);
    pub const ENTER_EXIT_S: Self = Self(Self::ENTER_EXIT.0 | Self::DEBUG_S.0);
    pub const DEBUG_S: Self = Self(Self::DEBUG.0 | Self::INFO_S.0);
    pub const INFO_S: Self = Self(Self::INFO.0 | Self::WARNING_S.0);
    pub const WARNING_S: Self = Self(Self::WARNING.0 | Self::ERROR_S.0);
    pub const ERROR_S: Self = Self(Self::ERROR.0 | Self::IMPORTANT_S.0);
    pub const IMPORTANT_S: Self = Self(Self::IMPORTANT.0 | Self::FATAL_S.0);
    pub const FATAL_S: Self = Self(Self::FATAL.0 | Self::CRITICAL_S.0);
    pub const CRITICAL_S: Self = Self(Self::CRITICAL.0 | Self::SILENT_S.0);
    pub const SILENT_S: Self = Self::SILENT;

    /// 単一ビットの基本レベル（重要度の低い順）
    pub const BASE_LEVELS: [(&'static str, Verbosity); 13] = [
        ("MAX", Self::MAX),
        ("ENTER_EXIT", Self::ENTER_EXIT),
        ("DEBUG_3", Self::DEBUG_3),
        ("DEBUG_2", Self::DEBUG_2),
        ("DEBUG_1", Self::DEBUG_1),
        ("DEBUG", Self::DEBUG),
        ("INFO", Self::INFO),
        ("WARNING", Self::WARNING),
        ("ERROR", Self::ERROR),
        ("IMPORTANT", Self::IMPORTANT),
        ("FATAL", Self::FATAL),
        ("CRITICAL", Self::CRITICAL),
        ("SILENT", Self::SILENT),
    ];

    /// 累積マスクの包含チェーン（狭い順）
    pub const CUMULATIVE_CHAIN: [(&'static str, Verbosity); 10] = [
        ("SILENT_S", Self::SILENT_S),
        ("CRITICAL_S", Self::CRITICAL_S),
        ("FATAL_S", Self::FATAL_S),
        ("IMPORTANT_S", Self::IMPORTANT_S),
        ("ERROR_S", Self::ERROR_S),
        ("WARNING_S", Self::WARNING_S),
        ("INFO_S", Self::INFO_S),
        ("DEBUG_S", Self::DEBUG_S),
        ("ENTER_EXIT_S", Self::ENTER_EXIT_S),
        ("MAX_S", Self::MAX_S),
    ];

    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn is_off(self) -> bool {
        self.0 == 0
    }

    /// 1ビットでも共有していれば真（出力判定に使う）
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// `other` の全ビットを含んでいれば真
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// 名前から定数を検索（`V_` 接頭辞・大文字小文字・`-` を許容）
    pub fn lookup(name: &str) -> Option<Self> {
        let normalized = name.trim().to_ascii_uppercase().replace('-', "_");
        let normalized = normalized.strip_prefix("V_").unwrap_or(&normalized);

        if normalized == "OFF" || normalized == "MIN" {
            return Some(Self::OFF);
        }

        Self::BASE_LEVELS
            .iter()
            .chain(Self::CUMULATIVE_CHAIN.iter())
            .find(|(candidate, _)| *candidate == normalized)
            .map(|(_, level)| *level)
    }

    /// 定数と完全一致する場合その名前を返す（累積マスクを優先）
    pub fn name(self) -> Option<&'static str> {
        if self.is_off() {
            return Some("OFF");
        }
        Self::CUMULATIVE_CHAIN
            .iter()
            .chain(Self::BASE_LEVELS.iter())
            .find(|(_, level)| *level == self)
            .map(|(name, _)| *name)
    }

    /// マスクに含まれる基本レベル名を列挙
    pub fn names(self) -> Vec<&'static str> {
        Self::BASE_LEVELS
            .iter()
            .filter(|(_, level)| self.contains(*level))
            .map(|(name, _)| *name)
            .collect()
    }

    /// 基本レベルで表現できないビット
    pub fn unnamed_bits(self) -> u32 {
        let named = Self::BASE_LEVELS
            .iter()
            .fold(0u32, |acc, (_, level)| acc | level.0);
        self.0 & !named
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}

impl BitOr for Verbosity {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitOrAssign for Verbosity {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for Verbosity {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl From<u32> for Verbosity {
    fn from(bits: u32) -> Self {
        Self(bits)
    }
}

impl From<Verbosity> for u32 {
    fn from(level: Verbosity) -> Self {
        level.0
    }
}

fn parse_term(term: &str, input: &str) -> VcheckResult<Verbosity> {
    let term = term.trim();
    if term.is_empty() {
        return Err(VcheckError::invalid_mask(input, "空の項があります"));
    }

    if let Some(hex) = term
        .strip_prefix("0x")
        .or_else(|| term.strip_prefix("0X"))
    {
        return u32::from_str_radix(hex, 16)
            .map(Verbosity)
            .map_err(|e| VcheckError::invalid_mask(input, format!("16進数が不正です: {e}")));
    }

    if term.chars().all(|c| c.is_ascii_digit()) {
        return term
            .parse::<u32>()
            .map(Verbosity)
            .map_err(|e| VcheckError::invalid_mask(input, format!("10進数が不正です: {e}")));
    }

    Verbosity::lookup(term)
        .ok_or_else(|| VcheckError::invalid_mask(input, format!("未知のレベル名: {term}")))
}

impl FromStr for Verbosity {
    type Err = VcheckError;

    /// `WARNING_S|DEBUG_1`、`error,info`、`0x140` などを解析
    fn from_str(input: &str) -> VcheckResult<Self> {
        input
            .split(&['|', ',', '+'][..])
            .try_fold(Verbosity::OFF, |acc, term| Ok(acc | parse_term(term, input)?))
    }
}

impl Serialize for Verbosity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.name() {
            Some(name) => serializer.serialize_str(name),
            None => serializer.serialize_str(&self.to_string()),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum VerbosityRepr {
    Bits(u32),
    Expr(String),
}

impl<'de> Deserialize<'de> for Verbosity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match VerbosityRepr::deserialize(deserializer)? {
            VerbosityRepr::Bits(bits) => Ok(Verbosity(bits)),
            VerbosityRepr::Expr(expr) => expr.parse().map_err(serde::de::Error::custom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_bit_positions() {
        assert_eq!(Verbosity::MAX.bits(), 0x8000_0000);
        assert_eq!(Verbosity::ENTER_EXIT.bits(), 0x4000_0000);
        assert_eq!(Verbosity::DEBUG_3.bits(), 1 << 14);
        assert_eq!(Verbosity::INFO.bits(), 1 << 10);
        assert_eq!(Verbosity::WARNING.bits(), 1 << 8);
        assert_eq!(Verbosity::ERROR.bits(), 1 << 6);
        assert_eq!(Verbosity::SILENT.bits(), 1 << 1);
        assert_eq!(Verbosity::MIN.bits(), 0);
        assert_eq!(Verbosity::OFF.bits(), 0);
    }

    #[test]
    fn test_cumulative_chain_is_monotonic() {
        let chain = Verbosity::CUMULATIVE_CHAIN;
        for pair in chain.windows(2) {
            let (narrow_name, narrow) = pair[0];
            let (wide_name, wide) = pair[1];
            assert!(wide.contains(narrow), "{wide_name} は {narrow_name} を含むべき");
            assert_ne!(wide, narrow, "{wide_name} は {narrow_name} の真の上位集合であるべき");
        }
    }

    #[test]
    fn test_cumulative_contains_base() {
        let pairs = [
            (Verbosity::ENTER_EXIT_S, Verbosity::ENTER_EXIT),
            (Verbosity::DEBUG_S, Verbosity::DEBUG),
            (Verbosity::INFO_S, Verbosity::INFO),
            (Verbosity::WARNING_S, Verbosity::WARNING),
            (Verbosity::ERROR_S, Verbosity::ERROR),
            (Verbosity::IMPORTANT_S, Verbosity::IMPORTANT),
            (Verbosity::FATAL_S, Verbosity::FATAL),
            (Verbosity::CRITICAL_S, Verbosity::CRITICAL),
            (Verbosity::SILENT_S, Verbosity::SILENT),
        ];
        for (cumulative, base) in pairs {
            assert!(cumulative.contains(base));
            assert!(Verbosity::MAX_S.contains(cumulative));
        }
    }

    #[test]
    fn test_warning_s_composition() {
        let expected = Verbosity::WARNING
            | Verbosity::ERROR
            | Verbosity::IMPORTANT
            | Verbosity::FATAL
            | Verbosity::CRITICAL
            | Verbosity::SILENT;
        assert_eq!(Verbosity::WARNING_S, expected);
        assert!(!Verbosity::WARNING_S.intersects(Verbosity::DEBUG));
        assert!(!Verbosity::WARNING_S.intersects(Verbosity::INFO));
    }

    #[test]
    fn test_debug_sublevels_not_in_debug_s() {
        // DEBUG_1..3 は累積チェーンに含まれない（MAX_Sのみ）
        assert!(!Verbosity::DEBUG_S.intersects(Verbosity::DEBUG_1));
        assert!(!Verbosity::ENTER_EXIT_S.intersects(Verbosity::DEBUG_3));
        assert!(Verbosity::MAX_S.contains(Verbosity::DEBUG_3));
    }

    #[test]
    fn test_parse_names_and_literals() {
        assert_eq!("warning_s".parse::<Verbosity>().unwrap(), Verbosity::WARNING_S);
        assert_eq!("V_ERROR".parse::<Verbosity>().unwrap(), Verbosity::ERROR);
        assert_eq!("debug-1".parse::<Verbosity>().unwrap(), Verbosity::DEBUG_1);
        assert_eq!("off".parse::<Verbosity>().unwrap(), Verbosity::OFF);
        assert_eq!("0x140".parse::<Verbosity>().unwrap(), Verbosity::from_bits(0x140));
        assert_eq!("64".parse::<Verbosity>().unwrap(), Verbosity::ERROR);
    }

    #[test]
    fn test_parse_composite_expression() {
        let mask: Verbosity = "ERROR_S | debug_2, 0x1".parse().unwrap();
        assert_eq!(
            mask,
            Verbosity::ERROR_S | Verbosity::DEBUG_2 | Verbosity::from_bits(1)
        );
        assert_eq!(mask.unnamed_bits(), 1);
    }

    #[test]
    fn test_parse_errors() {
        let err = "LOUD".parse::<Verbosity>().unwrap_err();
        assert!(matches!(err, VcheckError::InvalidMask { .. }));
        assert!(err.to_string().contains("LOUD"));

        assert!("ERROR||INFO".parse::<Verbosity>().is_err());
        assert!("0xZZ".parse::<Verbosity>().is_err());
        assert!("99999999999".parse::<Verbosity>().is_err());
    }

    #[test]
    fn test_names_and_display() {
        assert_eq!(
            Verbosity::CRITICAL_S.names(),
            vec!["CRITICAL", "SILENT"]
        );
        assert_eq!(Verbosity::WARNING_S.name(), Some("WARNING_S"));
        assert_eq!(Verbosity::INFO.name(), Some("INFO"));
        // SILENT と SILENT_S は同値 - 累積名を優先
        assert_eq!(Verbosity::SILENT.name(), Some("SILENT_S"));
        assert_eq!(Verbosity::OFF.name(), Some("OFF"));
        assert_eq!(Verbosity::from_bits(0x3).name(), None);
        assert_eq!(Verbosity::ERROR.to_string(), "0x00000040");
    }

    #[test]
    fn test_serde_accepts_number_or_expression() {
        let from_number: Verbosity = serde_json::from_str("64").unwrap();
        assert_eq!(from_number, Verbosity::ERROR);

        let from_expr: Verbosity = serde_json::from_str("\"INFO_S|DEBUG_1\"").unwrap();
        assert_eq!(from_expr, Verbosity::INFO_S | Verbosity::DEBUG_1);

        assert_eq!(
            serde_json::to_string(&Verbosity::DEBUG_S).unwrap(),
            "\"DEBUG_S\""
        );
        assert_eq!(
            serde_json::to_string(&Verbosity::from_bits(0x3)).unwrap(),
            "\"0x00000003\""
        );

        assert!(serde_json::from_str::<Verbosity>("\"NOPE\"").is_err());
    }
}
