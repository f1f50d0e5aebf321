//! Экспорт истории сетов в CSV.

pub mod csv_report;

use thiserror::Error;

pub use csv_report::{
    build_match_report_csv, export_match_report, set_duration_minutes, DURATION_UNAVAILABLE,
    REPORT_HEADER,
};

/// Ошибки построения и записи отчёта.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Ошибка записи CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Ошибка ввода-вывода: {0}")]
    Io(#[from] std::io::Error),

    #[error("Отчёт не является корректным UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
