use std::fmt;

use crate::domain::rules::{is_tiebreak, points_target, sets_to_win};
use crate::domain::{MatchState, MatchStatus, TeamSide};

use super::dto::{ScoreboardViewDto, TeamViewDto};

/// Подпись статуса матча для интерфейса.
pub fn status_label(status: MatchStatus) -> &'static str {
    match status {
        MatchStatus::InProgress => "Partita in corso",
        MatchStatus::Finished => "Partita terminata",
    }
}

/// Собрать DTO табло из состояния матча.
/// `can_undo` берём у владельца истории.
pub fn build_scoreboard_view(state: &MatchState, can_undo: bool) -> ScoreboardViewDto {
    let winner_banner = if state.is_finished() {
        // При равенстве сетов (невозможно по правилам) баннер достаётся гостям.
        let winner = if state.home.sets_won > state.away.sets_won {
            &state.home.name
        } else {
            &state.away.name
        };
        Some(format!("Ha vinto {winner}"))
    } else {
        None
    };

    ScoreboardViewDto {
        status: state.status,
        status_label: status_label(state.status).to_string(),
        current_set: state.current_set,
        points_target: points_target(&state.rules, state.current_set),
        is_tiebreak: is_tiebreak(&state.rules, state.current_set),
        win_by_two: state.rules.win_by_two,
        sets_to_win: sets_to_win(&state.rules),
        home: build_team_view(state, TeamSide::Home),
        away: build_team_view(state, TeamSide::Away),
        winner_banner,
        can_undo,
    }
}

fn build_team_view(state: &MatchState, side: TeamSide) -> TeamViewDto {
    let team = state.team(side);
    TeamViewDto {
        side,
        name: team.name.clone(),
        points: team.points,
        sets_won: team.sets_won,
        timeouts_left: team.timeouts_left,
        is_serving: team.is_serving,
    }
}

impl fmt::Display for ScoreboardViewDto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tiebreak = if self.is_tiebreak { " (Tie-break)" } else { "" };
        writeln!(
            f,
            "{} | SET {} | Obiettivo: {}{}{} | Vince a {}",
            self.status_label,
            self.current_set,
            self.points_target,
            tiebreak,
            if self.win_by_two { ", vantaggio di 2" } else { "" },
            self.sets_to_win,
        )?;
        for team in [&self.home, &self.away] {
            writeln!(
                f,
                "  {}{:<20} punti={:>2} set={} timeout={}",
                if team.is_serving { "●" } else { " " },
                team.name,
                team.points,
                team.sets_won,
                team.timeouts_left,
            )?;
        }
        if let Some(banner) = &self.winner_banner {
            writeln!(f, "  {banner}")?;
        }
        Ok(())
    }
}
