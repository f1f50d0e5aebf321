// src/report/csv_report.rs

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use tracing::info;

use crate::domain::{MatchState, SetSnapshot};
use crate::report::ReportError;

/// Заголовок отчёта — на языке интерфейса, байт в байт.
pub const REPORT_HEADER: [&str; 10] = [
    "Numero set",
    "Team Casa",
    "Team Ospite",
    "Punti Casa",
    "Punti Ospite",
    "Vincitore",
    "Set vinti Casa",
    "Set vinti Ospite",
    "Stato Match",
    "Durata Set (minuti)",
];

/// Значение длительности, когда её не из чего посчитать (первый сет).
pub const DURATION_UNAVAILABLE: &str = "N/A";

/// Длительность сета в целых минутах (округление до ближайшего).
/// Если часы хоста отвели назад и разница отрицательная — 0.
pub fn set_duration_minutes(previous_end: DateTime<Utc>, end: DateTime<Utc>) -> i64 {
    let millis = (end - previous_end).num_milliseconds().max(0);
    (millis + 30_000) / 60_000
}

/// Построить CSV-отчёт по матчу.
///
/// Одна строка на сет из истории; имена команд, итоговые сеты и статус
/// повторяются в каждой строке. Статус матча не проверяется: вызывать
/// имеет смысл для завершённого матча.
pub fn build_match_report_csv(state: &MatchState) -> Result<String, ReportError> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .quote_style(csv::QuoteStyle::Necessary)
        .from_writer(Vec::new());

    writer.write_record(REPORT_HEADER)?;

    let mut previous: Option<&SetSnapshot> = None;
    for set in &state.set_history {
        let duration = match previous {
            Some(prev) => set_duration_minutes(prev.timestamp, set.timestamp).to_string(),
            None => DURATION_UNAVAILABLE.to_string(),
        };

        writer.write_record([
            set.set_number.to_string(),
            state.home.name.clone(),
            state.away.name.clone(),
            set.home_points.to_string(),
            set.away_points.to_string(),
            set.winner.default_name().to_string(),
            state.home.sets_won.to_string(),
            state.away.sets_won.to_string(),
            state.status.as_str().to_string(),
            duration,
        ])?;

        previous = Some(set);
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| ReportError::Io(err.into_error()))?;
    Ok(String::from_utf8(bytes)?)
}

/// Собрать отчёт и записать его в файл.
///
/// Ошибка возвращается хосту, чтобы показать её пользователю;
/// состояние матча тут не меняется.
pub fn export_match_report(state: &MatchState, path: impl AsRef<Path>) -> Result<(), ReportError> {
    let path = path.as_ref();
    let csv = build_match_report_csv(state)?;
    fs::write(path, csv)?;
    info!(path = %path.display(), sets = state.set_history.len(), "match report exported");
    Ok(())
}
