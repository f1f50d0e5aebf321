// src/domain/rules.rs
//! Правила матча: формат (best-of), цели по очкам, таймауты.
//!
//! Здесь только конфигурация и чистые функции над ней, без состояния матча.

use serde::{Deserialize, Serialize};

use crate::domain::SetNumber;

/// Конфигурация матча.
///
/// Меняется только через явное действие `rules.update`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRules {
    /// Сколько сетов в формате матча (3 или 5, в общем случае — нечётное > 0).
    pub best_of: u32,
    /// До скольких очков играется обычный сет.
    pub points_to_win_set: u32,
    /// До скольких очков играется решающий сет (тай-брейк).
    pub points_to_win_tiebreak: u32,
    /// Сет нельзя выиграть без разницы минимум в 2 очка.
    pub win_by_two: bool,
    /// Засчитывать сет автоматически после очередного очка.
    pub apply_automatic_set_win: bool,
    /// Сколько таймаутов у каждой команды в сете.
    pub timeouts_per_set: u32,
}

impl MatchRules {
    /// Строгий конструктор.
    pub const fn new(
        best_of: u32,
        points_to_win_set: u32,
        points_to_win_tiebreak: u32,
        win_by_two: bool,
        apply_automatic_set_win: bool,
        timeouts_per_set: u32,
    ) -> Self {
        Self {
            best_of,
            points_to_win_set,
            points_to_win_tiebreak,
            win_by_two,
            apply_automatic_set_win,
            timeouts_per_set,
        }
    }

    /// Стандартный формат: best of 5, сеты до 25, тай-брейк до 15,
    /// разница в 2 очка, автозасчёт сета, 2 таймаута на сет.
    pub const fn standard() -> Self {
        Self::new(5, 25, 15, true, true, 2)
    }

    /// Наложить частичное обновление поверх текущих правил.
    pub fn merged(&self, patch: &RulesPatch) -> Self {
        Self {
            best_of: patch.best_of.unwrap_or(self.best_of),
            points_to_win_set: patch.points_to_win_set.unwrap_or(self.points_to_win_set),
            points_to_win_tiebreak: patch
                .points_to_win_tiebreak
                .unwrap_or(self.points_to_win_tiebreak),
            win_by_two: patch.win_by_two.unwrap_or(self.win_by_two),
            apply_automatic_set_win: patch
                .apply_automatic_set_win
                .unwrap_or(self.apply_automatic_set_win),
            timeouts_per_set: patch.timeouts_per_set.unwrap_or(self.timeouts_per_set),
        }
    }
}

impl Default for MatchRules {
    fn default() -> Self {
        Self::standard()
    }
}

/// Частичное обновление правил: `None` — поле не трогаем.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RulesPatch {
    pub best_of: Option<u32>,
    pub points_to_win_set: Option<u32>,
    pub points_to_win_tiebreak: Option<u32>,
    pub win_by_two: Option<bool>,
    pub apply_automatic_set_win: Option<bool>,
    pub timeouts_per_set: Option<u32>,
}

impl RulesPatch {
    /// Патч, который переписывает все поля (так применяет правила форма настроек).
    pub fn full(rules: &MatchRules) -> Self {
        Self {
            best_of: Some(rules.best_of),
            points_to_win_set: Some(rules.points_to_win_set),
            points_to_win_tiebreak: Some(rules.points_to_win_tiebreak),
            win_by_two: Some(rules.win_by_two),
            apply_automatic_set_win: Some(rules.apply_automatic_set_win),
            timeouts_per_set: Some(rules.timeouts_per_set),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Максимальное число сетов в матче.
pub fn max_sets(rules: &MatchRules) -> SetNumber {
    rules.best_of
}

/// Сколько сетов нужно выиграть: ceil(best_of / 2).
pub fn sets_to_win(rules: &MatchRules) -> u32 {
    rules.best_of.div_ceil(2)
}

/// Решающий сет начинается ровно с номера `best_of`.
pub fn is_tiebreak(rules: &MatchRules, set_number: SetNumber) -> bool {
    set_number >= rules.best_of
}

/// Цель по очкам для сета с данным номером.
pub fn points_target(rules: &MatchRules, set_number: SetNumber) -> u32 {
    if is_tiebreak(rules, set_number) {
        rules.points_to_win_tiebreak
    } else {
        rules.points_to_win_set
    }
}
