//! Доменная модель табло: правила, команды, состояние матча, история сетов.

pub mod match_state;
pub mod rules;
pub mod team;

/// Номер сета (начиная с 1).
pub type SetNumber = u32;

pub use match_state::*;
pub use rules::*;
pub use team::*;
