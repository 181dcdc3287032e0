//! Tilawa Storage
//!
//! Key-value persistence for everything Tilawa remembers between sessions.
//!
//! # Architecture
//!
//! - **Flat store**: all state lives in a [`KeyValueStore`](tilawa_core::KeyValueStore)
//!   of string keys to string values; structured values are JSON text
//! - **Injected**: every function takes the store explicitly, there is no global
//! - **Vertical slicing**: each feature owns its keys and encoding
//!
//! Two stores are provided: [`MemoryStore`] for tests and scratch use, and
//! [`JsonFileStore`] which keeps the whole map in one JSON file.
//!
//! # Example
//!
//! ```rust,no_run
//! use tilawa_storage::{reading_position, JsonFileStore};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = JsonFileStore::open("tilawa-data.json")?;
//!
//! reading_position::set_last_read_surah(&store, 18)?;
//! let last = reading_position::last_read_surah(&store)?;
//! # Ok(())
//! # }
//! ```

mod error;
mod file;
mod json;
mod memory;

// Vertical slices
pub mod bookmarks;
pub mod reading_position;
pub mod settings;

pub use error::{Result, StorageError};
pub use file::JsonFileStore;
pub use memory::MemoryStore;
pub use settings::{AppSettings, Theme};
