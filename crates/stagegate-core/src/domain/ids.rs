//! Domain identifiers (strongly-typed IDs).
//!
//! # 16進 8 文字の不透明 ID + ジェネリック実装
//! ID はランダムな 4 バイトを小文字 16 進数 8 文字で表現した不透明な文字列です。
//! Phantom type パターンを使ってコードの重複を排除しています。
//!
//! ## ID の特性
//! - **不透明**: 業務的な意味を持たない（フェーズの順序はストアの挿入順が唯一の正）
//! - **ランダム生成**: 調整なしで生成できる（衝突は birthday bound の範囲で無視）
//! - **ワイヤ互換**: 外部呼び出し元とは 8 文字の文字列としてやり取りする
//!
//! ## Phantom Type パターン
//! `Id<T>` というジェネリック型で共通実装を提供しつつ、
//! `T` は実行時には使わない（PhantomData）マーカー型として、
//! コンパイル時の型安全性を提供します（PhaseId と TaskId は混同できない）。

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;
use thiserror::Error;

/// IdMarker は各 ID 型のマーカー trait
///
/// Debug 表示で使うラベル（"phase", "task"）を提供します。
pub trait IdMarker: Send + Sync + 'static {
    /// Debug 表示で使うラベル（例: "phase", "task"）
    fn label() -> &'static str;
}

/// Rejected id string: anything other than 8 lowercase hex characters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid id: expected 8 lowercase hexadecimal characters")]
pub struct ParseIdError;

/// ジェネリック ID 型
///
/// `T` は PhantomData で、実行時にはメモリを消費しませんが、
/// コンパイル時に型安全性を提供します。
///
/// # 例
/// ```ignore
/// let phase_id: PhaseId = "0a1b2c3d".parse()?;
/// let task_id: TaskId = "0a1b2c3d".parse()?;
/// // phase_id と task_id は異なる型なので、混同できない
/// ```
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id<T: IdMarker> {
    bytes: [u8; 4],
    _marker: PhantomData<T>,
}

impl<T: IdMarker> Id<T> {
    /// 4 バイトから Id を作成
    pub fn from_bytes(bytes: [u8; 4]) -> Self {
        Self {
            bytes,
            _marker: PhantomData,
        }
    }

    /// 内部の 4 バイトを取得
    pub fn as_bytes(&self) -> [u8; 4] {
        self.bytes
    }
}

impl<T: IdMarker> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08x}", u32::from_be_bytes(self.bytes))
    }
}

impl<T: IdMarker> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", T::label(), self)
    }
}

impl<T: IdMarker> FromStr for Id<T> {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // from_str_radix は大文字や "+" も受理するため、先に文字種を確認する
        if s.len() != 8 || !s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')) {
            return Err(ParseIdError);
        }
        let value = u32::from_str_radix(s, 16).map_err(|_| ParseIdError)?;
        Ok(Self::from_bytes(value.to_be_bytes()))
    }
}

// ワイヤ形式は 16 進 8 文字の文字列そのもの（構造体としては直列化しない）
impl<T: IdMarker> Serialize for Id<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de, T: IdMarker> Deserialize<'de> for Id<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ========================================
// マーカー型の定義
// ========================================

/// Phase のマーカー型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {}

impl IdMarker for Phase {
    fn label() -> &'static str {
        "phase"
    }
}

/// Task のマーカー型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Task {}

impl IdMarker for Task {
    fn label() -> &'static str {
        "task"
    }
}

// ========================================
// Type Alias（使いやすさのため）
// ========================================

/// Identifier of a Phase (ordered stage of work).
pub type PhaseId = Id<Phase>;

/// Identifier of a Task (unit of work within a Phase).
pub type TaskId = Id<Task>;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn ids_are_distinct_types() {
        let phase = PhaseId::from_bytes([0x0a, 0x1b, 0x2c, 0x3d]);
        let task = TaskId::from_bytes([0x0a, 0x1b, 0x2c, 0x3d]);

        // 同じバイト列でも型は別物（as_bytes で取得できる）
        assert_eq!(phase.as_bytes(), task.as_bytes());

        // Debug のラベルが正しいことを確認
        assert_eq!(format!("{phase:?}"), "phase-0a1b2c3d");
        assert_eq!(format!("{task:?}"), "task-0a1b2c3d");

        // The whole point: you can't accidentally mix these types.
        // (This is a compile-time property, so we just keep it as a comment.)
        // let _: PhaseId = task; // <- does not compile
    }

    #[test]
    fn display_renders_lowercase_hex() {
        let id = PhaseId::from_bytes([0x00, 0xab, 0xcd, 0xef]);
        assert_eq!(id.to_string(), "00abcdef");
    }

    #[test]
    fn parse_round_trips_display() {
        let id = TaskId::from_bytes([0xde, 0xad, 0xbe, 0xef]);
        let parsed: TaskId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[rstest]
    #[case::empty("")]
    #[case::too_short("0a1b2c")]
    #[case::too_long("0a1b2c3d4e")]
    #[case::uppercase("0A1B2C3D")]
    #[case::non_hex("0a1b2c3g")]
    #[case::sign("+a1b2c3d")]
    fn parse_rejects_malformed_input(#[case] raw: &str) {
        assert_eq!(raw.parse::<PhaseId>(), Err(ParseIdError));
    }

    #[test]
    fn ids_serialize_as_plain_strings() {
        let id = PhaseId::from_bytes([0x0a, 0x1b, 0x2c, 0x3d]);

        let serialized = serde_json::to_string(&id).unwrap();
        assert_eq!(serialized, "\"0a1b2c3d\"");

        let deserialized: PhaseId = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, id);
    }

    #[test]
    fn deserialize_rejects_malformed_strings() {
        assert!(serde_json::from_str::<PhaseId>("\"XYZ\"").is_err());
    }

    #[test]
    fn phantom_data_does_not_consume_memory() {
        use std::mem::size_of;

        // Id<T> のサイズは 4 バイトのまま
        assert_eq!(size_of::<PhaseId>(), 4);
        assert_eq!(size_of::<TaskId>(), 4);
    }
}
