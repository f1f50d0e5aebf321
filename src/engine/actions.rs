use serde::{Deserialize, Serialize};

use crate::domain::{RulesPatch, TeamSide};
use crate::engine::undo::UndoRequest;

/// Действие над матчем — единственный вход ядра.
///
/// В JSON пишется с тегом `type`, например
/// `{"type":"point.increment","team":"home"}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MatchAction {
    /// +1 очко команде, подача переходит к ней.
    #[serde(rename = "point.increment")]
    PointIncrement { team: TeamSide },

    /// −1 очко (не ниже нуля), подача не меняется.
    #[serde(rename = "point.decrement")]
    PointDecrement { team: TeamSide },

    /// Взять таймаут, если они ещё остались.
    #[serde(rename = "timeout.take")]
    TimeoutTake { team: TeamSide },

    /// Передать подачу команде.
    #[serde(rename = "serving.set")]
    ServingSet { team: TeamSide },

    /// Засчитать текущий сет вручную.
    #[serde(rename = "set.award")]
    SetAward { winner: TeamSide },

    /// Обнулить очки и таймауты текущего сета.
    #[serde(rename = "set.reset_current")]
    SetResetCurrent,

    /// Новый матч с теми же правилами, именами и подачей.
    #[serde(rename = "match.reset")]
    MatchReset,

    #[serde(rename = "match.rename_team")]
    RenameTeam { team: TeamSide, name: String },

    #[serde(rename = "rules.update")]
    RulesUpdate { rules: RulesPatch },

    /// Откат последнего действия. Обрабатывается обёрткой истории.
    #[serde(rename = "undo")]
    Undo,
}

impl MatchAction {
    /// Короткое имя действия для логов.
    pub fn kind(&self) -> &'static str {
        match self {
            MatchAction::PointIncrement { .. } => "point.increment",
            MatchAction::PointDecrement { .. } => "point.decrement",
            MatchAction::TimeoutTake { .. } => "timeout.take",
            MatchAction::ServingSet { .. } => "serving.set",
            MatchAction::SetAward { .. } => "set.award",
            MatchAction::SetResetCurrent => "set.reset_current",
            MatchAction::MatchReset => "match.reset",
            MatchAction::RenameTeam { .. } => "match.rename_team",
            MatchAction::RulesUpdate { .. } => "rules.update",
            MatchAction::Undo => "undo",
        }
    }
}

impl UndoRequest for MatchAction {
    fn is_undo(&self) -> bool {
        matches!(self, MatchAction::Undo)
    }
}
