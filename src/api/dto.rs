use serde::{Deserialize, Serialize};

use crate::domain::{MatchStatus, TeamSide};

/// Команда в представлении для фронта.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamViewDto {
    pub side: TeamSide,
    pub name: String,
    pub points: u32,
    pub sets_won: u32,
    pub timeouts_left: u32,
    pub is_serving: bool,
}

/// Всё, что нужно для отрисовки табло.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreboardViewDto {
    pub status: MatchStatus,
    /// "Partita in corso" / "Partita terminata".
    pub status_label: String,
    pub current_set: u32,
    /// Цель по очкам текущего сета.
    pub points_target: u32,
    pub is_tiebreak: bool,
    pub win_by_two: bool,
    pub sets_to_win: u32,
    pub home: TeamViewDto,
    pub away: TeamViewDto,
    /// "Ha vinto <имя>", только для завершённого матча.
    pub winner_banner: Option<String>,
    pub can_undo: bool,
}
