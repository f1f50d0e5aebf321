use thiserror::Error;

/// Ошибки внешнего API (то, что видит пользователь хоста).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Нераспознанная команда или клавиша.
    #[error("Неизвестная команда: {0}")]
    UnknownCommand(String),

    /// Некорректный аргумент команды.
    #[error("Некорректный аргумент: {0}")]
    BadArgument(String),

    /// Неизвестное поле формы настроек.
    #[error("Неизвестная настройка: {0}")]
    UnknownSetting(String),
}
