use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::MatchState;

/// Ключ хранилища (и имя файла по умолчанию без расширения).
pub const STORAGE_KEY: &str = "volleyball-scoreboard.matchState.v1";

/// Поля, без которых сохранённый матч считается битым.
const REQUIRED_FIELDS: [&str; 4] = ["currentSet", "rules", "home", "away"];

/// Ошибки файлового хранилища. Наружу из `MatchStorage` не выходят:
/// на границе трейта превращаются в `None` + запись в лог.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Ошибка ввода-вывода: {0}")]
    Io(#[from] io::Error),

    #[error("Некорректный JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Сохранённое состояние не является объектом")]
    NotAnObject,

    #[error("В сохранённом состоянии нет поля `{0}`")]
    MissingField(&'static str),
}

/// Абстракция хранения текущего матча.
///
/// Контракт:
/// - `load` никогда не падает: любая ошибка чтения/разбора → `None`;
/// - `save` и `clear` best-effort, ошибки только логируются.
pub trait MatchStorage {
    /// Загрузить сохранённый матч, если он есть и выглядит целым.
    fn load(&self) -> Option<MatchState>;

    /// Сохранить матч.
    fn save(&mut self, state: &MatchState);

    /// Удалить сохранённый матч.
    fn clear(&mut self);
}

/// Разобрать сохранённый JSON с минимальной валидацией.
pub fn parse_saved_state(raw: &str) -> Result<MatchState, StorageError> {
    let value: Value = serde_json::from_str(raw)?;
    let object = value.as_object().ok_or(StorageError::NotAnObject)?;
    for field in REQUIRED_FIELDS {
        match object.get(field) {
            None | Some(Value::Null) => return Err(StorageError::MissingField(field)),
            Some(_) => {}
        }
    }
    Ok(serde_json::from_value(value)?)
}

/// Простая in-memory реализация для тестов и локального запуска.
/// Хранит сериализованный JSON, как это делало бы настоящее хранилище.
#[derive(Debug, Default)]
pub struct InMemoryMatchStorage {
    raw: Option<String>,
}

impl InMemoryMatchStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Хранилище с заранее положенной строкой (в том числе битой).
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: Some(raw.into()),
        }
    }

    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }
}

impl MatchStorage for InMemoryMatchStorage {
    fn load(&self) -> Option<MatchState> {
        let raw = self.raw.as_deref()?;
        match parse_saved_state(raw) {
            Ok(state) => Some(state),
            Err(err) => {
                warn!(error = %err, "saved match ignored");
                None
            }
        }
    }

    fn save(&mut self, state: &MatchState) {
        match serde_json::to_string(state) {
            Ok(raw) => self.raw = Some(raw),
            Err(err) => warn!(error = %err, "failed to serialize match"),
        }
    }

    fn clear(&mut self) {
        self.raw = None;
    }
}

/// Хранилище в JSON-файле.
#[derive(Clone, Debug)]
pub struct JsonFileMatchStorage {
    path: PathBuf,
}

impl JsonFileMatchStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Файл `<STORAGE_KEY>.json` в каталоге `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(format!("{STORAGE_KEY}.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn try_load(&self) -> Result<Option<MatchState>, StorageError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        if raw.trim().is_empty() {
            return Ok(None);
        }
        parse_saved_state(&raw).map(Some)
    }

    fn try_save(&self, state: &MatchState) -> Result<(), StorageError> {
        let raw = serde_json::to_string_pretty(state)?;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, raw)?;
        Ok(())
    }

    fn try_clear(&self) -> Result<(), StorageError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

impl MatchStorage for JsonFileMatchStorage {
    fn load(&self) -> Option<MatchState> {
        match self.try_load() {
            Ok(state) => state,
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "saved match ignored");
                None
            }
        }
    }

    fn save(&mut self, state: &MatchState) {
        match self.try_save(state) {
            Ok(()) => debug!(path = %self.path.display(), "match saved"),
            Err(err) => warn!(path = %self.path.display(), error = %err, "failed to save match"),
        }
    }

    fn clear(&mut self) {
        if let Err(err) = self.try_clear() {
            warn!(path = %self.path.display(), error = %err, "failed to clear saved match");
        }
    }
}
