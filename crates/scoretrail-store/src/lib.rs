//! Persistence for per-subject score history

mod error;
mod history;
mod io;
mod key;
mod kv;
mod paths;
mod types;

pub use error::StoreError;
pub use history::HistoryStore;
pub use io::{atomic_write, read_if_exists};
pub use key::{subject_key, SUBJECT_KEY_PREFIX};
pub use kv::{FileStore, KvStore, MemoryStore};
pub use paths::Paths;
pub use types::{is_valid_score, Observation, Series, MAX_SCORE, MIN_SCORE};
