// tests/engine_reducer_tests.rs
//
// Редьюсер матча:
//  - очки, подача, таймауты;
//  - автозасчёт сета (цель, разница в 2, тай-брейк);
//  - ручной засчёт сета и завершение матча;
//  - no-op'ы на завершённом матче;
//  - смена правил посреди матча, сброс сета и матча.

use chrono::Duration;

use volley_scoreboard::domain::{MatchRules, MatchState, MatchStatus, RulesPatch, TeamSide};
use volley_scoreboard::engine::reducer::auto_set_winner;
use volley_scoreboard::engine::{MatchAction, MatchReducer, Reducer, Transition};
use volley_scoreboard::infra::FixedClock;

use TeamSide::{Away, Home};

// -----------------------------
// ВСПОМОГАТЕЛЬНЫЕ ФУНКЦИИ
// -----------------------------

const T0: i64 = 1_700_000_000_000;

fn reducer() -> MatchReducer<FixedClock> {
    MatchReducer::new(FixedClock::from_millis(T0))
}

/// Применить действие, которое обязано изменить состояние.
fn apply(r: &MatchReducer<FixedClock>, state: &MatchState, action: MatchAction) -> MatchState {
    match r.reduce(state, &action) {
        Transition::Changed(next) => next,
        Transition::Unchanged => panic!("ожидали изменение для {:?}", action),
    }
}

fn inc(team: TeamSide) -> MatchAction {
    MatchAction::PointIncrement { team }
}

fn with_points(mut state: MatchState, home: u32, away: u32) -> MatchState {
    state.home.points = home;
    state.away.points = away;
    state
}

fn finished_best_of_three(r: &MatchReducer<FixedClock>) -> MatchState {
    let mut state = MatchState::new(MatchRules {
        best_of: 3,
        ..MatchRules::standard()
    });
    state = apply(r, &state, MatchAction::SetAward { winner: Home });
    state = apply(r, &state, MatchAction::SetAward { winner: Home });
    assert_eq!(state.status, MatchStatus::Finished);
    state
}

// -----------------------------
// ОЧКИ И ПОДАЧА
// -----------------------------

#[test]
fn increment_adds_point_and_moves_serve() {
    let r = reducer();
    let state = MatchState::default();

    let next = apply(&r, &state, inc(Away));
    assert_eq!(next.away.points, 1);
    assert_eq!(next.home.points, 0);
    assert!(next.away.is_serving);
    assert!(!next.home.is_serving);

    // Входное состояние не тронуто.
    assert_eq!(state.away.points, 0);
    assert!(state.home.is_serving);
}

#[test]
fn decrement_floors_at_zero_and_keeps_serve() {
    let r = reducer();
    let state = with_points(MatchState::default(), 0, 3);

    let next = apply(&r, &state, MatchAction::PointDecrement { team: Away });
    assert_eq!(next.away.points, 2);
    assert!(next.home.is_serving);

    let next = apply(&r, &next, MatchAction::PointDecrement { team: Home });
    assert_eq!(next.home.points, 0);
}

#[test]
fn serving_set_is_exclusive_and_works_when_finished() {
    let r = reducer();
    let state = finished_best_of_three(&r);

    let next = apply(&r, &state, MatchAction::ServingSet { team: Away });
    assert!(next.away.is_serving);
    assert!(!next.home.is_serving);

    let next = apply(&r, &next, MatchAction::ServingSet { team: Home });
    assert!(next.home.is_serving);
    assert!(!next.away.is_serving);
}

// -----------------------------
// ТАЙМАУТЫ
// -----------------------------

#[test]
fn timeout_decrements_until_exhausted() {
    let r = reducer();
    let state = MatchState::default();

    let s1 = apply(&r, &state, MatchAction::TimeoutTake { team: Home });
    let s2 = apply(&r, &s1, MatchAction::TimeoutTake { team: Home });
    assert_eq!(s2.home.timeouts_left, 0);
    assert_eq!(s2.away.timeouts_left, 2);

    assert_eq!(
        r.reduce(&s2, &MatchAction::TimeoutTake { team: Home }),
        Transition::Unchanged
    );
}

// -----------------------------
// АВТОЗАСЧЁТ СЕТА
// -----------------------------

#[test]
fn reaching_target_with_margin_wins_set() {
    let r = reducer();
    let state = with_points(MatchState::default(), 24, 23);

    let next = apply(&r, &state, inc(Home));

    assert_eq!(next.home.sets_won, 1);
    assert_eq!(next.current_set, 2);
    assert_eq!(next.home.points, 0);
    assert_eq!(next.away.points, 0);
    assert_eq!(next.set_history.len(), 1);

    let snap = &next.set_history[0];
    assert_eq!(snap.set_number, 1);
    assert_eq!(snap.home_points, 25);
    assert_eq!(snap.away_points, 23);
    assert_eq!(snap.winner, Home);
    assert_eq!(snap.timestamp.timestamp_millis(), T0);

    // Подача осталась у того, кто взял последнее очко.
    assert!(next.home.is_serving);
}

#[test]
fn one_point_margin_does_not_win_set() {
    let r = reducer();
    let state = with_points(MatchState::default(), 24, 24);

    let next = apply(&r, &state, inc(Home));
    assert_eq!(next.home.points, 25);
    assert_eq!(next.home.sets_won, 0);
    assert_eq!(next.current_set, 1);

    // Счёт продолжает расти, пока нет разницы в 2.
    let next = apply(&r, &next, inc(Away));
    let next = apply(&r, &next, inc(Away));
    assert_eq!((next.home.points, next.away.points), (25, 26));
    assert_eq!(next.current_set, 1);

    let next = apply(&r, &next, inc(Away));
    assert_eq!(next.away.sets_won, 1);
    assert_eq!(next.set_history[0].away_points, 27);
    assert_eq!(next.set_history[0].home_points, 25);
}

#[test]
fn without_win_by_two_first_to_target_wins() {
    let r = reducer();
    let mut state = with_points(MatchState::default(), 24, 24);
    state.rules.win_by_two = false;

    let next = apply(&r, &state, inc(Away));
    assert_eq!(next.away.sets_won, 1);
    assert_eq!(next.set_history[0].away_points, 25);
}

#[test]
fn automatic_set_win_can_be_disabled() {
    let r = reducer();
    let mut state = with_points(MatchState::default(), 24, 10);
    state.rules.apply_automatic_set_win = false;

    let next = apply(&r, &state, inc(Home));
    assert_eq!(next.home.points, 25);
    assert_eq!(next.home.sets_won, 0);
    assert!(next.set_history.is_empty());
}

#[test]
fn auto_winner_requires_target_lead_and_margin() {
    let state = with_points(MatchState::default(), 25, 23);
    assert_eq!(auto_set_winner(&state), Some(Home));

    let state = with_points(MatchState::default(), 25, 24);
    assert_eq!(auto_set_winner(&state), None);

    let state = with_points(MatchState::default(), 20, 10);
    assert_eq!(auto_set_winner(&state), None);

    let state = with_points(MatchState::default(), 28, 30);
    assert_eq!(auto_set_winner(&state), Some(Away));
}

#[test]
fn tiebreak_set_uses_lower_target() {
    let r = reducer();
    let mut state = with_points(MatchState::default(), 14, 10);
    state.current_set = 5;
    state.home.sets_won = 2;
    state.away.sets_won = 2;

    let next = apply(&r, &state, inc(Home));
    assert_eq!(next.home.sets_won, 3);
    assert_eq!(next.status, MatchStatus::Finished);
    // Номер сета не уходит за best_of.
    assert_eq!(next.current_set, 5);
    assert_eq!(next.set_history.last().map(|s| s.home_points), Some(15));
}

// -----------------------------
// РУЧНОЙ ЗАСЧЁТ СЕТА И КОНЕЦ МАТЧА
// -----------------------------

#[test]
fn award_set_records_snapshot_and_resets_counters() {
    let r = reducer();
    let mut state = with_points(MatchState::default(), 12, 18);
    state.home.timeouts_left = 0;
    state.away.timeouts_left = 1;

    let next = apply(&r, &state, MatchAction::SetAward { winner: Away });
    assert_eq!(next.away.sets_won, 1);
    assert_eq!(next.current_set, 2);
    assert_eq!((next.home.points, next.away.points), (0, 0));
    assert_eq!((next.home.timeouts_left, next.away.timeouts_left), (2, 2));

    let snap = &next.set_history[0];
    assert_eq!((snap.home_points, snap.away_points), (12, 18));
    assert_eq!(snap.winner, Away);
}

#[test]
fn set_timestamps_follow_the_clock() {
    let r = reducer();
    let state = MatchState::default();

    let s1 = apply(&r, &state, MatchAction::SetAward { winner: Home });
    r.clock().advance(Duration::minutes(22));
    let s2 = apply(&r, &s1, MatchAction::SetAward { winner: Away });

    let gap = s2.set_history[1].timestamp - s2.set_history[0].timestamp;
    assert_eq!(gap.num_minutes(), 22);
}

#[test]
fn match_finishes_when_sets_to_win_reached() {
    let r = reducer();
    let state = finished_best_of_three(&r);

    assert_eq!(state.home.sets_won, 2);
    assert_eq!(state.current_set, 3);
    assert_eq!(state.match_winner(), Some(Home));
}

#[test]
fn finished_match_ignores_scoring_actions() {
    let r = reducer();
    let state = finished_best_of_three(&r);

    for action in [
        inc(Home),
        inc(Away),
        MatchAction::PointDecrement { team: Home },
        MatchAction::TimeoutTake { team: Away },
        MatchAction::SetAward { winner: Away },
    ] {
        assert_eq!(r.reduce(&state, &action), Transition::Unchanged, "{:?}", action);
    }
}

#[test]
fn undo_is_not_handled_by_match_reducer() {
    let r = reducer();
    assert_eq!(
        r.reduce(&MatchState::default(), &MatchAction::Undo),
        Transition::Unchanged
    );
}

// -----------------------------
// СБРОСЫ, ИМЕНА, ПРАВИЛА
// -----------------------------

#[test]
fn reset_current_set_keeps_sets_and_history() {
    let r = reducer();
    let state = apply(&r, &MatchState::default(), MatchAction::SetAward { winner: Home });
    let mut state = with_points(state, 7, 9);
    state.away.timeouts_left = 0;

    let next = apply(&r, &state, MatchAction::SetResetCurrent);
    assert_eq!((next.home.points, next.away.points), (0, 0));
    assert_eq!(next.away.timeouts_left, 2);
    assert_eq!(next.home.sets_won, 1);
    assert_eq!(next.current_set, 2);
    assert_eq!(next.set_history.len(), 1);
    assert_eq!(next.status, MatchStatus::InProgress);
}

#[test]
fn rename_trims_and_falls_back_to_default() {
    let r = reducer();
    let state = MatchState::default();

    let next = apply(
        &r,
        &state,
        MatchAction::RenameTeam {
            team: Home,
            name: "  Trentino ".into(),
        },
    );
    assert_eq!(next.home.name, "Trentino");

    let next = apply(
        &r,
        &next,
        MatchAction::RenameTeam {
            team: Home,
            name: "   ".into(),
        },
    );
    assert_eq!(next.home.name, "Casa");
}

#[test]
fn rules_update_clamps_set_and_timeouts() {
    let r = reducer();
    let mut state = MatchState::default();
    state.current_set = 5;
    state.home.timeouts_left = 2;
    state.away.timeouts_left = 0;

    let next = apply(
        &r,
        &state,
        MatchAction::RulesUpdate {
            rules: RulesPatch {
                best_of: Some(3),
                timeouts_per_set: Some(1),
                ..RulesPatch::default()
            },
        },
    );

    assert_eq!(next.rules.best_of, 3);
    assert_eq!(next.current_set, 3);
    assert_eq!(next.home.timeouts_left, 1);
    // min, а не сброс к новому лимиту.
    assert_eq!(next.away.timeouts_left, 0);
    assert_eq!(next.rules.points_to_win_set, 25);
}

#[test]
fn rules_update_applies_even_when_finished() {
    let r = reducer();
    let state = finished_best_of_three(&r);

    let next = apply(
        &r,
        &state,
        MatchAction::RulesUpdate {
            rules: RulesPatch {
                points_to_win_set: Some(21),
                ..RulesPatch::default()
            },
        },
    );
    assert_eq!(next.rules.points_to_win_set, 21);
    assert_eq!(next.status, MatchStatus::Finished);
}

#[test]
fn match_reset_keeps_names_and_serve() {
    let r = reducer();
    let mut state = finished_best_of_three(&r);
    state.home.name = "Perugia".into();
    state.away.name = "Civitanova".into();
    state = apply(&r, &state, MatchAction::ServingSet { team: Away });

    let next = apply(&r, &state, MatchAction::MatchReset);

    assert_eq!(next.status, MatchStatus::InProgress);
    assert_eq!(next.current_set, 1);
    assert!(next.set_history.is_empty());
    assert_eq!(next.rules, state.rules);
    assert_eq!(next.home.name, "Perugia");
    assert_eq!(next.away.name, "Civitanova");
    assert!(next.away.is_serving);
    assert!(!next.home.is_serving);
    for side in [Home, Away] {
        let t = next.team(side);
        assert_eq!((t.points, t.sets_won, t.timeouts_left), (0, 0, 2));
    }
}
