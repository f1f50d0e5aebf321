// src/domain/match_state.rs
//! Агрегат матча: статус, текущий сет, правила, две команды и история сетов.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::rules::{sets_to_win, MatchRules};
use crate::domain::team::{TeamSide, TeamState};
use crate::domain::SetNumber;

/// Статус матча. `Finished` — терминальный.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    InProgress,
    Finished,
}

impl MatchStatus {
    /// Как статус пишется в JSON и в CSV-отчёте.
    pub const fn as_str(self) -> &'static str {
        match self {
            MatchStatus::InProgress => "in_progress",
            MatchStatus::Finished => "finished",
        }
    }
}

/// Запись о завершённом сете. Добавляется в историю и больше не меняется.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetSnapshot {
    pub set_number: SetNumber,
    pub home_points: u32,
    pub away_points: u32,
    pub winner: TeamSide,
    /// Момент завершения сета (в JSON — миллисекунды эпохи).
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
}

/// Полное состояние матча.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchState {
    pub status: MatchStatus,
    /// Номер текущего сета: 1..=best_of.
    pub current_set: SetNumber,
    pub rules: MatchRules,
    pub home: TeamState,
    pub away: TeamState,
    /// История сетов, от старых к новым.
    pub set_history: Vec<SetSnapshot>,
}

impl MatchState {
    /// Новый матч с заданными правилами.
    pub fn new(rules: MatchRules) -> Self {
        let timeouts = rules.timeouts_per_set;
        Self {
            status: MatchStatus::InProgress,
            current_set: 1,
            home: TeamState::new(TeamSide::Home, timeouts),
            away: TeamState::new(TeamSide::Away, timeouts),
            rules,
            set_history: Vec::new(),
        }
    }

    pub fn team(&self, side: TeamSide) -> &TeamState {
        match side {
            TeamSide::Home => &self.home,
            TeamSide::Away => &self.away,
        }
    }

    pub fn team_mut(&mut self, side: TeamSide) -> &mut TeamState {
        match side {
            TeamSide::Home => &mut self.home,
            TeamSide::Away => &mut self.away,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.status == MatchStatus::Finished
    }

    /// Кто сейчас подаёт.
    pub fn serving_side(&self) -> TeamSide {
        if self.away.is_serving && !self.home.is_serving {
            TeamSide::Away
        } else {
            TeamSide::Home
        }
    }

    /// Победитель матча, если кто-то уже набрал нужное число сетов.
    pub fn match_winner(&self) -> Option<TeamSide> {
        let needed = sets_to_win(&self.rules);
        if self.home.sets_won >= needed {
            Some(TeamSide::Home)
        } else if self.away.sets_won >= needed {
            Some(TeamSide::Away)
        } else {
            None
        }
    }
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new(MatchRules::standard())
    }
}
