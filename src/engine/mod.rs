//! Движок табло: редьюсер матча, обёртка истории (undo) и фасад `Scoreboard`.
//!
//! Основные операции:
//!   - `MatchReducer::reduce` – чистый переход (состояние, действие) → состояние
//!   - `UndoReducer` – та же сигнатура, но поверх `Undoable<_>` с ограниченной историей
//!   - `Scoreboard::dispatch` – удобная обёртка для хоста (CLI/UI)

pub mod actions;
pub mod reducer;
pub mod scoreboard;
pub mod undo;

use chrono::{DateTime, Utc};

pub use actions::MatchAction;
pub use reducer::MatchReducer;
pub use scoreboard::Scoreboard;
pub use undo::{UndoReducer, UndoRequest, Undoable, UNDO_LIMIT};

/// Итог применения действия.
///
/// `Unchanged` означает «действие ничего не сделало»: обёртка истории
/// в этом случае не кладёт снапшот в стек.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Transition<S> {
    Unchanged,
    Changed(S),
}

impl<S> Transition<S> {
    pub fn is_changed(&self) -> bool {
        matches!(self, Transition::Changed(_))
    }

    /// Новое состояние, либо `current`, если ничего не поменялось.
    pub fn unwrap_or(self, current: S) -> S {
        match self {
            Transition::Changed(next) => next,
            Transition::Unchanged => current,
        }
    }
}

/// Чистая функция перехода.
pub trait Reducer {
    type State;
    type Action;

    fn reduce(&self, state: &Self::State, action: &Self::Action) -> Transition<Self::State>;
}

/// Источник времени для движка.
/// Реализации лежат в infra (системные часы и фиксированные часы для тестов).
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}
