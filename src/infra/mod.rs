//! Инфраструктурный слой вокруг движка табло:
//! - часы для движка (системные и фиксированные);
//! - хранение текущего матча (in-memory / JSON-файл).

pub mod clock;
pub mod persistence;

pub use clock::{FixedClock, SystemClock};
pub use persistence::{
    parse_saved_state, InMemoryMatchStorage, JsonFileMatchStorage, MatchStorage, StorageError,
    STORAGE_KEY,
};
