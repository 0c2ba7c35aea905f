//! IdGenerator port - ID 生成の抽象化
//!
//! IdGenerator は外部呼び出し元と共有する不透明 ID を生成するためのインターフェースです。
//! テスト容易性のために、trait として抽象化しています。
//!
//! # 実装
//! - **HexIdGenerator**: rand ベース（本番用）
//! - **SequenceIdGenerator**: 連番ベース（テスト用、決定的）

use std::sync::atomic::{AtomicU32, Ordering};

use crate::domain::ids::{PhaseId, TaskId};

/// IdGenerator は不透明 ID を生成
///
/// # ID の特性
/// - ランダムな 4 バイト（16 進 8 文字で表現）
/// - 調整なしで生成可能
/// - 一意性は birthday bound の範囲でのみ保証（衝突処理はしない）
///
/// # Thread Safety
/// - `Send + Sync` を要求（複数スレッドから使える）
pub trait IdGenerator: Send + Sync {
    /// Phase ID を生成
    fn generate_phase_id(&self) -> PhaseId;

    /// Task ID を生成
    fn generate_task_id(&self) -> TaskId;
}

/// HexIdGenerator はランダムな 4 バイトから ID を生成（本番用）
#[derive(Debug, Default, Clone, Copy)]
pub struct HexIdGenerator;

impl IdGenerator for HexIdGenerator {
    fn generate_phase_id(&self) -> PhaseId {
        PhaseId::from_bytes(rand::random())
    }

    fn generate_task_id(&self) -> TaskId {
        TaskId::from_bytes(rand::random())
    }
}

/// SequenceIdGenerator は連番から ID を生成（テスト用）
///
/// ランダム性を排除して、テストで決定的な ID を使えるようにします。
#[derive(Debug, Default)]
pub struct SequenceIdGenerator {
    next_phase: AtomicU32,
    next_task: AtomicU32,
}

impl IdGenerator for SequenceIdGenerator {
    fn generate_phase_id(&self) -> PhaseId {
        let n = self.next_phase.fetch_add(1, Ordering::Relaxed);
        PhaseId::from_bytes(n.to_be_bytes())
    }

    fn generate_task_id(&self) -> TaskId {
        let n = self.next_task.fetch_add(1, Ordering::Relaxed);
        TaskId::from_bytes(n.to_be_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_generator_generates_unique_ids() {
        let id_gen = HexIdGenerator;

        let id1 = id_gen.generate_phase_id();
        let id2 = id_gen.generate_phase_id();
        let id3 = id_gen.generate_phase_id();

        // 各 ID が一意であることを確認
        assert_ne!(id1, id2);
        assert_ne!(id2, id3);
        assert_ne!(id1, id3);
    }

    #[test]
    fn hex_generator_ids_render_as_eight_hex_chars() {
        let id = HexIdGenerator.generate_task_id();
        let rendered = id.to_string();

        assert_eq!(rendered.len(), 8);
        assert!(rendered.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')));
    }

    #[test]
    fn sequence_generator_is_deterministic() {
        let id_gen = SequenceIdGenerator::default();

        assert_eq!(id_gen.generate_phase_id().to_string(), "00000000");
        assert_eq!(id_gen.generate_phase_id().to_string(), "00000001");

        // Phase と Task のカウンタは独立
        assert_eq!(id_gen.generate_task_id().to_string(), "00000000");
    }
}
