//! Внешний API табло.
//!
//! Здесь описываются:
//! - команды (commands.rs) — горячие клавиши, форма настроек, команды CLI;
//! - запросы (queries.rs) — только чтение, сборка представления табло;
//! - DTO (dto.rs) — структуры для фронта;
//! - ошибки (errors.rs) — то, что видит пользователь.

pub mod commands;
pub mod dto;
pub mod errors;
pub mod queries;

pub use commands::*;
pub use dto::*;
pub use errors::*;
pub use queries::*;
