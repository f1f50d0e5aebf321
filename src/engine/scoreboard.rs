// src/engine/scoreboard.rs

use tracing::{debug, info};

use crate::domain::MatchState;
use crate::engine::{Clock, MatchAction, MatchReducer, Reducer, Transition, UndoReducer, Undoable};

/// Табло одного матча:
/// - хранит `Undoable<MatchState>` (текущее состояние + история);
/// - прогоняет действия через `UndoReducer<MatchReducer>`;
/// - пишет в лог эффективные переходы.
///
/// Сохранение и экспорт делает хост после `dispatch`, табло про I/O не знает.
pub struct Scoreboard<C> {
    state: Undoable<MatchState>,
    reducer: UndoReducer<MatchReducer<C>>,
}

impl<C: Clock> Scoreboard<C> {
    /// Табло с пустой историей поверх загруженного или нового матча.
    pub fn new(initial: MatchState, clock: C) -> Self {
        Self {
            state: Undoable::new(initial),
            reducer: UndoReducer::new(MatchReducer::new(clock)),
        }
    }

    /// Текущее состояние матча.
    pub fn match_state(&self) -> &MatchState {
        &self.state.present
    }

    /// Состояние вместе с историей.
    pub fn undoable(&self) -> &Undoable<MatchState> {
        &self.state
    }

    pub fn can_undo(&self) -> bool {
        self.state.can_undo()
    }

    /// Применить действие. Возвращает `true`, если состояние изменилось.
    pub fn dispatch(&mut self, action: &MatchAction) -> bool {
        let next = match self.reducer.reduce(&self.state, action) {
            Transition::Unchanged => {
                debug!(action = action.kind(), "no-op");
                return false;
            }
            Transition::Changed(next) => next,
        };

        let before = &self.state.present;
        let after = &next.present;

        debug!(
            action = action.kind(),
            set = after.current_set,
            home = after.home.points,
            away = after.away.points,
            history = next.history_len(),
            "state changed"
        );

        if after.set_history.len() > before.set_history.len() {
            if let Some(last) = after.set_history.last() {
                info!(
                    set = last.set_number,
                    home = last.home_points,
                    away = last.away_points,
                    winner = last.winner.as_str(),
                    "set won"
                );
            }
        }
        if after.is_finished() && !before.is_finished() {
            info!(
                home_sets = after.home.sets_won,
                away_sets = after.away.sets_won,
                "match finished"
            );
        }

        self.state = next;
        true
    }
}
