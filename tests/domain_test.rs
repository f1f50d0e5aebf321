// tests/domain_test.rs

use volley_scoreboard::domain::{
    is_tiebreak, max_sets, normalize_team_name, points_target, sets_to_win, MatchRules, MatchState,
    MatchStatus, RulesPatch, TeamSide,
};

//
// ---------- правила ----------
//

#[test]
fn standard_rules_match_indoor_volleyball() {
    let rules = MatchRules::standard();
    assert_eq!(rules.best_of, 5);
    assert_eq!(rules.points_to_win_set, 25);
    assert_eq!(rules.points_to_win_tiebreak, 15);
    assert!(rules.win_by_two);
    assert!(rules.apply_automatic_set_win);
    assert_eq!(rules.timeouts_per_set, 2);
    assert_eq!(MatchRules::default(), rules);
}

#[test]
fn sets_to_win_is_half_rounded_up() {
    let mut rules = MatchRules::standard();
    assert_eq!(sets_to_win(&rules), 3);

    rules.best_of = 3;
    assert_eq!(sets_to_win(&rules), 2);

    rules.best_of = 1;
    assert_eq!(sets_to_win(&rules), 1);

    rules.best_of = 7;
    assert_eq!(sets_to_win(&rules), 4);
    assert_eq!(max_sets(&rules), 7);
}

#[test]
fn tiebreak_target_applies_from_last_set() {
    let rules = MatchRules::standard();

    for set in 1..=4 {
        assert!(!is_tiebreak(&rules, set));
        assert_eq!(points_target(&rules, set), 25);
    }
    assert!(is_tiebreak(&rules, 5));
    assert_eq!(points_target(&rules, 5), 15);

    let best_of_three = MatchRules {
        best_of: 3,
        ..MatchRules::standard()
    };
    assert_eq!(points_target(&best_of_three, 2), 25);
    assert_eq!(points_target(&best_of_three, 3), 15);
}

#[test]
fn merged_patch_only_overrides_given_fields() {
    let rules = MatchRules::standard();
    let patch = RulesPatch {
        best_of: Some(3),
        timeouts_per_set: Some(1),
        ..RulesPatch::default()
    };

    let merged = rules.merged(&patch);
    assert_eq!(merged.best_of, 3);
    assert_eq!(merged.timeouts_per_set, 1);
    assert_eq!(merged.points_to_win_set, 25);
    assert_eq!(merged.points_to_win_tiebreak, 15);
    assert!(merged.win_by_two);

    assert!(RulesPatch::default().is_empty());
    assert_eq!(rules.merged(&RulesPatch::full(&merged)), merged);
}

//
// ---------- состояние матча ----------
//

#[test]
fn initial_state_has_home_serving_and_full_timeouts() {
    let state = MatchState::new(MatchRules {
        timeouts_per_set: 3,
        ..MatchRules::standard()
    });

    assert_eq!(state.status, MatchStatus::InProgress);
    assert_eq!(state.current_set, 1);
    assert!(state.set_history.is_empty());

    assert_eq!(state.home.name, "Casa");
    assert_eq!(state.away.name, "Ospite");
    assert!(state.home.is_serving);
    assert!(!state.away.is_serving);
    assert_eq!(state.serving_side(), TeamSide::Home);

    for side in [TeamSide::Home, TeamSide::Away] {
        let team = state.team(side);
        assert_eq!(team.points, 0);
        assert_eq!(team.sets_won, 0);
        assert_eq!(team.timeouts_left, 3);
    }
    assert_eq!(state.match_winner(), None);
}

#[test]
fn blank_team_names_fall_back_to_side_defaults() {
    assert_eq!(normalize_team_name(TeamSide::Home, "   "), "Casa");
    assert_eq!(normalize_team_name(TeamSide::Away, ""), "Ospite");
    assert_eq!(normalize_team_name(TeamSide::Home, "  Modena "), "Modena");
}

#[test]
fn team_side_parses_keys_and_labels() {
    assert_eq!("home".parse::<TeamSide>(), Ok(TeamSide::Home));
    assert_eq!("Ospite".parse::<TeamSide>(), Ok(TeamSide::Away));
    assert!("left".parse::<TeamSide>().is_err());
    assert_eq!(TeamSide::Home.opponent(), TeamSide::Away);
}

#[test]
fn state_serializes_with_camel_case_keys() {
    let state = MatchState::default();
    let json = serde_json::to_value(&state).unwrap();

    assert_eq!(json["status"], "in_progress");
    assert_eq!(json["currentSet"], 1);
    assert_eq!(json["rules"]["bestOf"], 5);
    assert_eq!(json["rules"]["applyAutomaticSetWin"], true);
    assert_eq!(json["home"]["timeoutsLeft"], 2);
    assert_eq!(json["away"]["isServing"], false);
    assert!(json["setHistory"].as_array().unwrap().is_empty());
}
