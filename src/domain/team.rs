use serde::{Deserialize, Serialize};

/// Сторона площадки.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamSide {
    Home,
    Away,
}

impl TeamSide {
    /// Имя команды по умолчанию (и подпись стороны в отчёте).
    pub const fn default_name(self) -> &'static str {
        match self {
            TeamSide::Home => "Casa",
            TeamSide::Away => "Ospite",
        }
    }

    pub const fn opponent(self) -> Self {
        match self {
            TeamSide::Home => TeamSide::Away,
            TeamSide::Away => TeamSide::Home,
        }
    }

    /// Ключ стороны, как он пишется в JSON и в командах CLI.
    pub const fn as_str(self) -> &'static str {
        match self {
            TeamSide::Home => "home",
            TeamSide::Away => "away",
        }
    }
}

impl std::str::FromStr for TeamSide {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "home" | "casa" => Ok(TeamSide::Home),
            "away" | "ospite" => Ok(TeamSide::Away),
            other => Err(format!("неизвестная сторона: {other}")),
        }
    }
}

/// Состояние одной команды.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamState {
    /// Отображаемое имя (никогда не пустое).
    pub name: String,
    /// Очки в текущем сете.
    pub points: u32,
    /// Выигранные сеты.
    pub sets_won: u32,
    /// Оставшиеся таймауты в текущем сете: 0..=timeouts_per_set.
    pub timeouts_left: u32,
    /// Подаёт ли сейчас команда.
    pub is_serving: bool,
}

impl TeamState {
    /// Команда в начале матча.
    pub fn new(side: TeamSide, timeouts_per_set: u32) -> Self {
        Self {
            name: side.default_name().to_string(),
            points: 0,
            sets_won: 0,
            timeouts_left: timeouts_per_set,
            is_serving: side == TeamSide::Home,
        }
    }
}

/// Нормализовать имя команды: обрезать пробелы, пустое → имя стороны по умолчанию.
pub fn normalize_team_name(side: TeamSide, raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        side.default_name().to_string()
    } else {
        trimmed.to_string()
    }
}
