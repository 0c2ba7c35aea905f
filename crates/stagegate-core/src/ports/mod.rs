//! Ports - 抽象化レイヤー
//!
//! ストアが依存する外部関心事（ID 生成）を trait として切り出します。
//! 実装を差し替えることで、テストでは決定的な ID を使えます。

pub mod id_generator;

pub use self::id_generator::{HexIdGenerator, IdGenerator, SequenceIdGenerator};
