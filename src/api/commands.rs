use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::api::errors::ApiError;
use crate::domain::{MatchRules, MatchState, RulesPatch, TeamSide};
use crate::engine::MatchAction;

/// Горячая клавиша → действие.
///
/// Раскладка табло:
/// - Q/A: +1/−1 хозяевам, P/L: +1/−1 гостям;
/// - W/O: таймаут хозяев/гостей;
/// - 1/2: подача хозяевам/гостям;
/// - U: отмена.
pub fn action_for_key(key: char) -> Option<MatchAction> {
    use MatchAction::*;
    use TeamSide::{Away, Home};

    let action = match key.to_ascii_lowercase() {
        'q' => PointIncrement { team: Home },
        'a' => PointDecrement { team: Home },
        'p' => PointIncrement { team: Away },
        'l' => PointDecrement { team: Away },
        'w' => TimeoutTake { team: Home },
        'o' => TimeoutTake { team: Away },
        '1' => ServingSet { team: Home },
        '2' => ServingSet { team: Away },
        'u' => Undo,
        _ => return None,
    };
    Some(action)
}

/// Формат матча из формы: "3" → 3, всё остальное → 5.
pub fn coerce_best_of(raw: &str) -> u32 {
    if raw.trim() == "3" {
        3
    } else {
        5
    }
}

/// Положительное целое из формы; мусор, 0 и отрицательные → `fallback`.
pub fn coerce_positive_int(raw: &str, fallback: u32) -> u32 {
    match raw.trim().parse::<i64>() {
        Ok(v) if v > 0 => u32::try_from(v).unwrap_or(fallback),
        _ => fallback,
    }
}

/// Черновик формы настроек: имена команд + полный набор правил.
///
/// Значения приходят из формы сырыми строками и сразу приводятся
/// к допустимым, поэтому в редьюсер попадают уже чистые правила.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsDraft {
    pub home_name: String,
    pub away_name: String,
    pub rules: MatchRules,
}

impl SettingsDraft {
    /// Черновик, заполненный текущими значениями матча.
    pub fn from_state(state: &MatchState) -> Self {
        Self {
            home_name: state.home.name.clone(),
            away_name: state.away.name.clone(),
            rules: state.rules.clone(),
        }
    }

    /// Применить одно поле формы (`ключ`, `сырое значение`).
    pub fn set_field(&mut self, key: &str, raw: &str) -> Result<(), ApiError> {
        match key {
            "home" | "home_name" => self.home_name = raw.to_string(),
            "away" | "away_name" => self.away_name = raw.to_string(),
            "best_of" => self.rules.best_of = coerce_best_of(raw),
            "points_set" | "points_to_win_set" => {
                self.rules.points_to_win_set = coerce_positive_int(raw, self.rules.points_to_win_set)
            }
            "points_tiebreak" | "points_to_win_tiebreak" => {
                self.rules.points_to_win_tiebreak =
                    coerce_positive_int(raw, self.rules.points_to_win_tiebreak)
            }
            "timeouts" | "timeouts_per_set" => {
                self.rules.timeouts_per_set = coerce_positive_int(raw, self.rules.timeouts_per_set)
            }
            "win_by_two" => self.rules.win_by_two = parse_flag(key, raw)?,
            "auto_set_win" | "apply_automatic_set_win" => {
                self.rules.apply_automatic_set_win = parse_flag(key, raw)?
            }
            other => return Err(ApiError::UnknownSetting(other.to_string())),
        }
        Ok(())
    }

    /// Действия, которыми форма применяет настройки:
    /// переименовать хозяев, гостей, затем обновить правила целиком.
    pub fn into_actions(self) -> Vec<MatchAction> {
        vec![
            MatchAction::RenameTeam {
                team: TeamSide::Home,
                name: self.home_name,
            },
            MatchAction::RenameTeam {
                team: TeamSide::Away,
                name: self.away_name,
            },
            MatchAction::RulesUpdate {
                rules: RulesPatch::full(&self.rules),
            },
        ]
    }
}

fn parse_flag(key: &str, raw: &str) -> Result<bool, ApiError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" | "si" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ApiError::BadArgument(format!("{key}={raw}"))),
    }
}

/// Команда хоста (строка ввода CLI).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HostCommand {
    /// Одно или несколько действий для табло (подряд, как их шлёт форма).
    Actions(Vec<MatchAction>),
    /// Новая партия: очистить хранилище и сбросить матч.
    NewMatch,
    /// Записать CSV-отчёт в файл.
    Export(PathBuf),
    Show,
    Help,
    Quit,
}

/// Разобрать строку ввода.
///
/// Одиночный символ трактуется как горячая клавиша. `current` нужен
/// команде `rules`: незаданные и некорректные поля берутся из текущих правил.
pub fn parse_command(line: &str, current: &MatchState) -> Result<HostCommand, ApiError> {
    let line = line.trim();
    let mut chars = line.chars();
    if let (Some(key), None) = (chars.next(), chars.next()) {
        return action_for_key(key)
            .map(|a| HostCommand::Actions(vec![a]))
            .ok_or_else(|| ApiError::UnknownCommand(line.to_string()));
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let single = |a: MatchAction| -> Result<HostCommand, ApiError> {
        Ok(HostCommand::Actions(vec![a]))
    };

    match word.to_ascii_lowercase().as_str() {
        "award" => single(MatchAction::SetAward {
            winner: parse_side(rest)?,
        }),
        "reset-set" => single(MatchAction::SetResetCurrent),
        "undo" => single(MatchAction::Undo),
        "serve" => single(MatchAction::ServingSet {
            team: parse_side(rest)?,
        }),
        "rename" => {
            let (side, name) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
            single(MatchAction::RenameTeam {
                team: parse_side(side)?,
                name: name.to_string(),
            })
        }
        "rules" => {
            if rest.is_empty() {
                return Err(ApiError::BadArgument("rules: нужен хотя бы один ключ=значение".into()));
            }
            let mut draft = SettingsDraft::from_state(current);
            for pair in rest.split_whitespace() {
                let (key, value) = pair
                    .split_once('=')
                    .ok_or_else(|| ApiError::BadArgument(pair.to_string()))?;
                draft.set_field(key, value)?;
            }
            Ok(HostCommand::Actions(draft.into_actions()))
        }
        "new" => Ok(HostCommand::NewMatch),
        "export" => {
            if rest.is_empty() {
                return Err(ApiError::BadArgument("export: нужен путь к файлу".into()));
            }
            Ok(HostCommand::Export(PathBuf::from(rest)))
        }
        "show" => Ok(HostCommand::Show),
        "help" => Ok(HostCommand::Help),
        "quit" | "exit" => Ok(HostCommand::Quit),
        _ => Err(ApiError::UnknownCommand(line.to_string())),
    }
}

fn parse_side(raw: &str) -> Result<TeamSide, ApiError> {
    raw.parse::<TeamSide>().map_err(ApiError::BadArgument)
}
