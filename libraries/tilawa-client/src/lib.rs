//! Tilawa Content Client
//!
//! HTTP client for the public APIs Tilawa reads from.
//!
//! # Features
//!
//! - **Surah index**: names, revelation type and verse counts of all 114 surahs
//! - **Surah detail**: Arabic text, a translation per interface language, and
//!   one recitation locator per verse
//! - **Prayer times**: daily timings for a latitude/longitude
//!
//! Every response is wrapped in a `{ code, status, data }` envelope; anything
//! other than `200 / "OK"` surfaces as [`ClientError::Api`].
//!
//! # Example
//!
//! ```ignore
//! use tilawa_client::{ClientConfig, TilawaClient};
//! use tilawa_core::ContentProvider;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = TilawaClient::new(ClientConfig::default())?;
//!
//!     let times = client.fetch_prayer_times(21.4225, 39.8262).await?;
//!     for (name, time) in times.entries() {
//!         println!("{name:<8} {time}");
//!     }
//!
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod error;
mod types;

pub use client::TilawaClient;
pub use config::{
    ClientConfig, DEFAULT_AUDIO_BASE_URL, DEFAULT_PRAYER_BASE_URL, DEFAULT_PRAYER_METHOD,
    DEFAULT_QURAN_BASE_URL, DEFAULT_RECITER,
};
pub use error::{ClientError, Result};
