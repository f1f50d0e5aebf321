// src/engine/reducer.rs

use crate::domain::rules::{max_sets, points_target, sets_to_win};
use crate::domain::team::normalize_team_name;
use crate::domain::{MatchRules, MatchState, MatchStatus, RulesPatch, SetSnapshot, TeamSide};
use crate::engine::actions::MatchAction;
use crate::engine::{Clock, Reducer, Transition};

/// Редьюсер одного матча.
///
/// Никогда не меняет входное состояние: каждое действие собирает новое
/// значение из копии. Время завершения сета берётся из `clock`.
#[derive(Clone, Debug, Default)]
pub struct MatchReducer<C> {
    clock: C,
}

impl<C: Clock> MatchReducer<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Засчитать текущий сет `winner`-у и проверить конец матча.
    fn award_set(&self, state: &MatchState, winner: TeamSide) -> Transition<MatchState> {
        if state.is_finished() {
            return Transition::Unchanged;
        }

        let mut next = state.clone();
        next.set_history.push(SetSnapshot {
            set_number: state.current_set,
            home_points: state.home.points,
            away_points: state.away.points,
            winner,
            timestamp: self.clock.now(),
        });
        next.team_mut(winner).sets_won += 1;
        reset_set_counters(&mut next);
        next.current_set = (state.current_set + 1).min(max_sets(&state.rules));

        Transition::Changed(finish_if_needed(next))
    }

    fn increment_point(&self, state: &MatchState, team: TeamSide) -> Transition<MatchState> {
        if state.is_finished() {
            return Transition::Unchanged;
        }

        let mut next = state.clone();
        next.team_mut(team).points += 1;
        set_serving(&mut next, team);

        if !next.rules.apply_automatic_set_win {
            return Transition::Changed(next);
        }

        match auto_set_winner(&next) {
            // Снапшот сета должен видеть уже добавленное очко.
            Some(winner) => Transition::Changed(self.award_set(&next, winner).unwrap_or(next)),
            None => Transition::Changed(next),
        }
    }
}

impl<C: Clock> Reducer for MatchReducer<C> {
    type State = MatchState;
    type Action = MatchAction;

    fn reduce(&self, state: &MatchState, action: &MatchAction) -> Transition<MatchState> {
        match action {
            MatchAction::PointIncrement { team } => self.increment_point(state, *team),

            MatchAction::PointDecrement { team } => {
                if state.is_finished() {
                    return Transition::Unchanged;
                }
                let mut next = state.clone();
                let t = next.team_mut(*team);
                t.points = t.points.saturating_sub(1);
                Transition::Changed(next)
            }

            MatchAction::TimeoutTake { team } => {
                if state.is_finished() || state.team(*team).timeouts_left == 0 {
                    return Transition::Unchanged;
                }
                let mut next = state.clone();
                next.team_mut(*team).timeouts_left -= 1;
                Transition::Changed(next)
            }

            MatchAction::ServingSet { team } => {
                let mut next = state.clone();
                set_serving(&mut next, *team);
                Transition::Changed(next)
            }

            MatchAction::SetAward { winner } => self.award_set(state, *winner),

            MatchAction::SetResetCurrent => {
                let mut next = state.clone();
                reset_set_counters(&mut next);
                Transition::Changed(next)
            }

            MatchAction::RenameTeam { team, name } => {
                let mut next = state.clone();
                next.team_mut(*team).name = normalize_team_name(*team, name);
                Transition::Changed(next)
            }

            MatchAction::RulesUpdate { rules } => Transition::Changed(apply_rules_patch(state, rules)),

            MatchAction::MatchReset => Transition::Changed(reset_match(state)),

            // История живёт в UndoReducer, сам матч на undo не реагирует.
            MatchAction::Undo => Transition::Unchanged,
        }
    }
}

/// Подача строго у одной команды.
fn set_serving(state: &mut MatchState, team: TeamSide) {
    state.home.is_serving = team == TeamSide::Home;
    state.away.is_serving = team == TeamSide::Away;
}

/// Очки в 0, таймауты — по правилам. Сеты, история и статус не трогаются.
fn reset_set_counters(state: &mut MatchState) {
    let timeouts = state.rules.timeouts_per_set;
    for side in [TeamSide::Home, TeamSide::Away] {
        let t = state.team_mut(side);
        t.points = 0;
        t.timeouts_left = timeouts;
    }
}

fn finish_if_needed(mut state: MatchState) -> MatchState {
    let needed = sets_to_win(&state.rules);
    if state.home.sets_won >= needed || state.away.sets_won >= needed {
        state.status = MatchStatus::Finished;
    }
    state
}

/// Кто выиграл сет по текущему счёту (если выиграл).
pub fn auto_set_winner(state: &MatchState) -> Option<TeamSide> {
    let target = points_target(&state.rules, state.current_set);
    let home = state.home.points;
    let away = state.away.points;

    let margin_ok = !state.rules.win_by_two || home.abs_diff(away) >= 2;
    if !margin_ok {
        return None;
    }

    if home >= target && home > away {
        Some(TeamSide::Home)
    } else if away >= target && away > home {
        Some(TeamSide::Away)
    } else {
        None
    }
}

fn apply_rules_patch(state: &MatchState, patch: &RulesPatch) -> MatchState {
    let rules = state.rules.merged(patch);
    let timeouts = rules.timeouts_per_set;

    let mut next = state.clone();
    next.current_set = state.current_set.min(max_sets(&rules));
    next.home.timeouts_left = state.home.timeouts_left.min(timeouts);
    next.away.timeouts_left = state.away.timeouts_left.min(timeouts);
    next.rules = rules;
    next
}

/// Новый матч по текущим правилам; имена и флаги подачи сохраняются.
fn reset_match(state: &MatchState) -> MatchState {
    let rules: MatchRules = state.rules.clone();
    let mut next = MatchState::new(rules);
    for side in [TeamSide::Home, TeamSide::Away] {
        let prev = state.team(side);
        let t = next.team_mut(side);
        t.name = prev.name.clone();
        t.is_serving = prev.is_serving;
    }
    next
}
