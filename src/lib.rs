//! Табло волейбольного матча.
//!
//! Ядро — чистый редьюсер матча (`engine::MatchReducer`) и обёртка истории
//! с ограниченным undo (`engine::UndoReducer`). Вокруг ядра:
//! - `domain` — правила, команды, состояние матча;
//! - `infra` — часы и хранение текущего матча;
//! - `report` — CSV-отчёт по сетам;
//! - `api` — горячие клавиши, форма настроек, представление табло.

pub mod api;
pub mod domain;
pub mod engine;
pub mod infra;
pub mod report;

pub use domain::{MatchRules, MatchState, MatchStatus, SetSnapshot, TeamSide, TeamState};
pub use engine::{MatchAction, MatchReducer, Reducer, Scoreboard, Transition, UndoReducer, Undoable};
